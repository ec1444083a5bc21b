use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Provider Two nests origin and destination under Departure/Arrival point
// objects. These types exist only at the adapter boundary.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderTwoSearchRequest {
    #[serde(rename = "Departure")]
    pub departure: String,
    #[serde(rename = "Arrival")]
    pub arrival: String,
    #[serde(rename = "DepartureDate")]
    pub departure_date: DateTime<Utc>,
    #[serde(rename = "MinTimeLimit", skip_serializing_if = "Option::is_none")]
    pub min_time_limit: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderTwoSearchResponse {
    #[serde(rename = "Routes")]
    pub routes: Vec<ProviderTwoRoute>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderTwoRoute {
    #[serde(rename = "Departure")]
    pub departure: ProviderTwoPoint,
    #[serde(rename = "Arrival")]
    pub arrival: ProviderTwoPoint,
    #[serde(rename = "Price")]
    pub price: f64,
    #[serde(rename = "TimeLimit")]
    pub time_limit: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderTwoPoint {
    #[serde(rename = "Point")]
    pub point: String,
    #[serde(rename = "Date")]
    pub date: DateTime<Utc>,
}
