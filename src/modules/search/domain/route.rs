use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A normalized travel offer produced by a provider adapter.
///
/// The identifier is minted at normalization time and is unique per cache
/// insertion - repeated searches of the same real-world route produce new
/// identifiers. Price and time limit are copied verbatim from the provider;
/// arrival >= departure is expected but not enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub id: Uuid,
    pub origin: String,
    pub destination: String,
    pub origin_date_time: DateTime<Utc>,
    pub destination_date_time: DateTime<Utc>,
    pub price: f64,
    /// Deadline after which the offer's price and availability are no
    /// longer guaranteed. Drives cache validity and the min-time-limit filter.
    pub time_limit: DateTime<Utc>,
}

impl Route {
    /// Trip duration in whole minutes
    pub fn duration_minutes(&self) -> i64 {
        (self.destination_date_time - self.origin_date_time).num_minutes()
    }

    /// Whether the offer is still honored at `now`
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.time_limit > now
    }
}

/// Aggregate statistics derived from a set of routes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteStats {
    pub min_price: f64,
    pub max_price: f64,
    pub min_minutes_route: i64,
    pub max_minutes_route: i64,
}

impl RouteStats {
    /// Derive statistics over a route set. Returns `None` for an empty set -
    /// zero routes is a valid outcome, not an error.
    pub fn from_routes(routes: &[Route]) -> Option<Self> {
        let first = routes.first()?;

        let mut stats = Self {
            min_price: first.price,
            max_price: first.price,
            min_minutes_route: first.duration_minutes(),
            max_minutes_route: first.duration_minutes(),
        };

        for route in &routes[1..] {
            stats.min_price = stats.min_price.min(route.price);
            stats.max_price = stats.max_price.max(route.price);
            stats.min_minutes_route = stats.min_minutes_route.min(route.duration_minutes());
            stats.max_minutes_route = stats.max_minutes_route.max(route.duration_minutes());
        }

        Some(stats)
    }
}
