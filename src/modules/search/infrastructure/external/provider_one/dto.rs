use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Provider One speaks a flat schema with PascalCase field names. These
// types exist only at the adapter boundary and never escape it.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderOneSearchRequest {
    #[serde(rename = "From")]
    pub from: String,
    #[serde(rename = "To")]
    pub to: String,
    #[serde(rename = "DateFrom")]
    pub date_from: DateTime<Utc>,
    #[serde(rename = "DateTo", skip_serializing_if = "Option::is_none")]
    pub date_to: Option<DateTime<Utc>>,
    #[serde(rename = "MaxPrice", skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderOneSearchResponse {
    #[serde(rename = "Routes")]
    pub routes: Vec<ProviderOneRoute>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderOneRoute {
    #[serde(rename = "From")]
    pub from: String,
    #[serde(rename = "To")]
    pub to: String,
    #[serde(rename = "DateFrom")]
    pub date_from: DateTime<Utc>,
    #[serde(rename = "DateTo")]
    pub date_to: DateTime<Utc>,
    #[serde(rename = "Price")]
    pub price: f64,
    #[serde(rename = "TimeLimit")]
    pub time_limit: DateTime<Utc>,
}
