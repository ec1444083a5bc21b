use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported route search providers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RouteProvider {
    /// Provider One - flat route schema
    #[serde(rename = "provider_one")]
    ProviderOne,
    /// Provider Two - nested departure/arrival schema
    #[serde(rename = "provider_two")]
    ProviderTwo,
}

impl fmt::Display for RouteProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RouteProvider::ProviderOne => "provider_one",
            RouteProvider::ProviderTwo => "provider_two",
        };
        write!(f, "{}", name)
    }
}

/// Endpoint configuration for a single provider
#[derive(Debug, Clone)]
pub struct ProviderEndpoints {
    pub search_url: String,
    pub ping_url: String,
}

impl ProviderEndpoints {
    pub fn provider_one() -> Self {
        Self {
            search_url: "http://provider-one/api/v1/search".to_string(),
            ping_url: "http://provider-one/api/v1/ping".to_string(),
        }
    }

    pub fn provider_two() -> Self {
        Self {
            search_url: "http://provider-two/api/v1/search".to_string(),
            ping_url: "http://provider-two/api/v1/ping".to_string(),
        }
    }

    /// Resolve endpoints from the environment (`.env` supported), falling
    /// back to the defaults above.
    pub fn from_env(provider: RouteProvider) -> Self {
        dotenvy::dotenv().ok();

        let (defaults, prefix) = match provider {
            RouteProvider::ProviderOne => (Self::provider_one(), "PROVIDER_ONE"),
            RouteProvider::ProviderTwo => (Self::provider_two(), "PROVIDER_TWO"),
        };

        Self {
            search_url: std::env::var(format!("{}_SEARCH_URL", prefix))
                .unwrap_or(defaults.search_url),
            ping_url: std::env::var(format!("{}_PING_URL", prefix)).unwrap_or(defaults.ping_url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_display() {
        assert_eq!(RouteProvider::ProviderOne.to_string(), "provider_one");
        assert_eq!(RouteProvider::ProviderTwo.to_string(), "provider_two");
    }

    #[test]
    fn test_default_endpoints() {
        let endpoints = ProviderEndpoints::provider_one();
        assert_eq!(endpoints.search_url, "http://provider-one/api/v1/search");
        assert_eq!(endpoints.ping_url, "http://provider-one/api/v1/ping");

        let endpoints = ProviderEndpoints::provider_two();
        assert_eq!(endpoints.search_url, "http://provider-two/api/v1/search");
        assert_eq!(endpoints.ping_url, "http://provider-two/api/v1/ping");
    }
}
