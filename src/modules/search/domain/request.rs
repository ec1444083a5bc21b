use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::search::domain::route::Route;
use crate::shared::errors::{AppError, AppResult};

/// Normalized search request shared by all provider adapters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub origin: String,
    pub destination: String,
    pub origin_date_time: DateTime<Utc>,
    pub filters: Option<SearchFilters>,
}

impl SearchRequest {
    /// Boundary validation: origin and destination must be non-empty.
    /// Called by the transport layer before the request reaches the engine.
    pub fn validate(&self) -> AppResult<()> {
        if self.origin.is_empty() {
            return Err(AppError::ValidationError(
                "Origin must not be empty".to_string(),
            ));
        }
        if self.destination.is_empty() {
            return Err(AppError::ValidationError(
                "Destination must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether this request bypasses provider calls entirely
    pub fn only_cached(&self) -> bool {
        self.filters
            .as_ref()
            .and_then(|filters| filters.only_cached)
            .unwrap_or(false)
    }
}

/// Optional search constraints. Absent fields impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchFilters {
    /// Upper bound on route price
    pub max_price: Option<f64>,
    /// Latest acceptable arrival; also passed through to Provider One as DateTo
    pub destination_date_time: Option<DateTime<Utc>>,
    /// Earliest acceptable offer deadline; also passed through to Provider Two
    pub min_time_limit: Option<DateTime<Utc>>,
    /// Serve the search from cache without contacting providers
    pub only_cached: Option<bool>,
}

impl SearchFilters {
    /// AND-combined predicate over a single route
    pub fn matches(&self, route: &Route) -> bool {
        self.max_price.map_or(true, |max| route.price <= max)
            && self
                .destination_date_time
                .map_or(true, |latest| route.destination_date_time <= latest)
            && self
                .min_time_limit
                .map_or(true, |min| route.time_limit >= min)
    }
}
