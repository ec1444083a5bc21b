use crate::modules::search::domain::provider::RouteProvider;
use crate::modules::search::domain::request::SearchRequest;
use crate::modules::search::domain::route::Route;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Common capability implemented by every route provider adapter
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RouteProviderClient: Send + Sync {
    /// Get the provider type this client handles
    fn provider_type(&self) -> RouteProvider;

    /// Translate the normalized request into the provider's wire schema,
    /// call its search endpoint and normalize the response. Transport
    /// errors, non-success statuses and parse failures all collapse to an
    /// empty result set - a failing provider reduces coverage, never the
    /// whole search.
    async fn search_routes(&self, request: &SearchRequest, cancel: &CancellationToken)
        -> Vec<Route>;

    /// Single liveness probe against the provider's ping endpoint
    async fn ping(&self, cancel: &CancellationToken) -> bool;
}
