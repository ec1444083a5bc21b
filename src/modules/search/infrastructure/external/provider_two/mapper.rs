use uuid::Uuid;

use super::dto::{ProviderTwoRoute, ProviderTwoSearchRequest};
use crate::modules::search::domain::request::SearchRequest;
use crate::modules::search::domain::route::Route;

pub struct ProviderTwoMapper;

impl ProviderTwoMapper {
    /// Map the normalized request onto Provider Two's wire schema. The
    /// min-time-limit filter passes through as MinTimeLimit.
    pub fn to_wire_request(request: &SearchRequest) -> ProviderTwoSearchRequest {
        ProviderTwoSearchRequest {
            departure: request.origin.clone(),
            arrival: request.destination.clone(),
            departure_date: request.origin_date_time,
            min_time_limit: request
                .filters
                .as_ref()
                .and_then(|filters| filters.min_time_limit),
        }
    }

    /// Flatten the nested departure/arrival points into a normalized route,
    /// minting a fresh identifier.
    pub fn to_domain(route: ProviderTwoRoute) -> Route {
        Route {
            id: Uuid::new_v4(),
            origin: route.departure.point,
            destination: route.arrival.point,
            origin_date_time: route.departure.date,
            destination_date_time: route.arrival.date,
            price: route.price,
            time_limit: route.time_limit,
        }
    }
}
