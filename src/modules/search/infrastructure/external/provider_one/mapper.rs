use uuid::Uuid;

use super::dto::{ProviderOneRoute, ProviderOneSearchRequest};
use crate::modules::search::domain::request::SearchRequest;
use crate::modules::search::domain::route::Route;

pub struct ProviderOneMapper;

impl ProviderOneMapper {
    /// Map the normalized request onto Provider One's wire schema. The
    /// latest-arrival and max-price filters pass through as DateTo/MaxPrice.
    pub fn to_wire_request(request: &SearchRequest) -> ProviderOneSearchRequest {
        ProviderOneSearchRequest {
            from: request.origin.clone(),
            to: request.destination.clone(),
            date_from: request.origin_date_time,
            date_to: request
                .filters
                .as_ref()
                .and_then(|filters| filters.destination_date_time),
            max_price: request.filters.as_ref().and_then(|filters| filters.max_price),
        }
    }

    /// Normalize a wire route, minting a fresh identifier. Price and time
    /// limit are copied verbatim.
    pub fn to_domain(route: ProviderOneRoute) -> Route {
        Route {
            id: Uuid::new_v4(),
            origin: route.from,
            destination: route.to,
            origin_date_time: route.date_from,
            destination_date_time: route.date_to,
            price: route.price,
            time_limit: route.time_limit,
        }
    }
}
