use async_trait::async_trait;
use reqwest::Client;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::dto::ProviderOneSearchResponse;
use super::mapper::ProviderOneMapper;
use crate::modules::search::domain::provider::{ProviderEndpoints, RouteProvider};
use crate::modules::search::domain::request::SearchRequest;
use crate::modules::search::domain::route::Route;
use crate::modules::search::infrastructure::external::common;
use crate::modules::search::traits::RouteProviderClient;
use crate::shared::errors::AppResult;

pub struct ProviderOneClient {
    client: Client,
    endpoints: ProviderEndpoints,
}

impl ProviderOneClient {
    pub fn new() -> AppResult<Self> {
        Self::with_endpoints(ProviderEndpoints::from_env(RouteProvider::ProviderOne))
    }

    pub fn with_endpoints(endpoints: ProviderEndpoints) -> AppResult<Self> {
        let client = common::create_http_client(30, "Wayfare-Search/1.0")?;
        Ok(Self { client, endpoints })
    }

    async fn fetch_routes(&self, request: &SearchRequest, cancel: &CancellationToken) -> Vec<Route> {
        let wire_request = ProviderOneMapper::to_wire_request(request);
        let send = self
            .client
            .post(&self.endpoints.search_url)
            .json(&wire_request)
            .send();

        let response = tokio::select! {
            _ = cancel.cancelled() => {
                debug!("Provider One search cancelled");
                return Vec::new();
            }
            response = send => response,
        };

        let response = match response {
            Ok(response) => response,
            Err(e) => {
                warn!("Provider One transport error: {}", e);
                return Vec::new();
            }
        };

        if !response.status().is_success() {
            warn!("Provider One search returned {}", response.status());
            return Vec::new();
        }

        match response.json::<ProviderOneSearchResponse>().await {
            Ok(wire_response) => wire_response
                .routes
                .into_iter()
                .map(ProviderOneMapper::to_domain)
                .collect(),
            Err(e) => {
                warn!("Failed to parse Provider One response: {}", e);
                Vec::new()
            }
        }
    }
}

#[async_trait]
impl RouteProviderClient for ProviderOneClient {
    fn provider_type(&self) -> RouteProvider {
        RouteProvider::ProviderOne
    }

    async fn search_routes(
        &self,
        request: &SearchRequest,
        cancel: &CancellationToken,
    ) -> Vec<Route> {
        self.fetch_routes(request, cancel).await
    }

    async fn ping(&self, cancel: &CancellationToken) -> bool {
        common::probe_endpoint(&self.client, &self.endpoints.ping_url, cancel).await
    }
}
