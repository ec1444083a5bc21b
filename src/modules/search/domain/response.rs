use serde::{Deserialize, Serialize};

use crate::modules::search::domain::route::{Route, RouteStats};

/// Unified search response: the filtered route list plus statistics derived
/// from it. `stats` is `None` when no routes survived filtering - the
/// explicit empty-result contract of the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub routes: Vec<Route>,
    pub stats: Option<RouteStats>,
}

impl SearchResponse {
    pub fn from_routes(routes: Vec<Route>) -> Self {
        let stats = RouteStats::from_routes(&routes);
        Self { routes, stats }
    }

    pub fn empty() -> Self {
        Self {
            routes: Vec::new(),
            stats: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    #[test]
    fn test_empty_response_has_no_stats() {
        let response = SearchResponse::from_routes(Vec::new());
        assert!(response.routes.is_empty());
        assert!(response.stats.is_none());
        assert_eq!(response, SearchResponse::empty());
    }

    #[test]
    fn test_stats_follow_routes() {
        let departure = Utc::now();
        let route = Route {
            id: Uuid::new_v4(),
            origin: "Moscow".to_string(),
            destination: "Sochi".to_string(),
            origin_date_time: departure,
            destination_date_time: departure + Duration::minutes(45),
            price: 120.0,
            time_limit: departure + Duration::days(1),
        };

        let response = SearchResponse::from_routes(vec![route]);
        let stats = response.stats.expect("stats present for non-empty set");
        assert_eq!(stats.min_price, 120.0);
        assert_eq!(stats.max_minutes_route, 45);
    }
}
