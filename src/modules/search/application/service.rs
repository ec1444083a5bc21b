use futures::future::join_all;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::modules::search::domain::request::{SearchFilters, SearchRequest};
use crate::modules::search::domain::response::SearchResponse;
use crate::modules::search::domain::route::Route;
use crate::modules::search::infrastructure::cache::RouteCache;
use crate::modules::search::infrastructure::external::{ProviderOneClient, ProviderTwoClient};
use crate::modules::search::traits::RouteProviderClient;
use crate::shared::errors::{AppError, AppResult};

/// Aggregation engine over the registered providers.
///
/// Per request: probe providers, fan out searches to the available ones,
/// merge, cache valid routes, filter and derive statistics. The only state
/// shared across requests is the route cache.
pub struct SearchService {
    providers: Vec<Arc<dyn RouteProviderClient>>,
    cache: Arc<RouteCache>,
}

impl SearchService {
    pub fn new(providers: Vec<Arc<dyn RouteProviderClient>>, cache: Arc<RouteCache>) -> Self {
        Self { providers, cache }
    }

    /// Wire up both well-known providers with endpoints resolved from the
    /// environment and an empty cache.
    pub fn with_default_providers() -> AppResult<Self> {
        let providers: Vec<Arc<dyn RouteProviderClient>> = vec![
            Arc::new(ProviderOneClient::new()?),
            Arc::new(ProviderTwoClient::new()?),
        ];
        Ok(Self::new(providers, Arc::new(RouteCache::new())))
    }

    pub fn cache(&self) -> &Arc<RouteCache> {
        &self.cache
    }

    /// Run one aggregated search.
    ///
    /// A provider failing its probe or fetch only reduces coverage; the
    /// single fatal outcome is cancellation of the whole operation.
    pub async fn search(
        &self,
        request: &SearchRequest,
        cancel: &CancellationToken,
    ) -> AppResult<SearchResponse> {
        if request.only_cached() {
            debug!(
                "Serving {} -> {} from cache only",
                request.origin, request.destination
            );
            let cached = self.cache.get(&request.origin, &request.destination);
            let filtered = Self::filter_routes(cached, request.filters.as_ref());
            return Ok(SearchResponse::from_routes(filtered));
        }

        let availability = join_all(self.providers.iter().map(|p| p.ping(cancel))).await;
        if cancel.is_cancelled() {
            return Err(AppError::Cancelled);
        }

        // Total outage degrades to whatever the cache still holds
        if !availability.iter().any(|up| *up) {
            info!(
                "No provider available, serving {} -> {} from cache",
                request.origin, request.destination
            );
            let cached = self.cache.get(&request.origin, &request.destination);
            let filtered = Self::filter_routes(cached, request.filters.as_ref());
            return Ok(SearchResponse::from_routes(filtered));
        }

        let fetches = self
            .providers
            .iter()
            .zip(availability)
            .map(|(provider, available)| async move {
                if available {
                    provider.search_routes(request, cancel).await
                } else {
                    warn!("Provider {} unavailable, skipping", provider.provider_type());
                    Vec::new()
                }
            });
        let results = join_all(fetches).await;
        if cancel.is_cancelled() {
            return Err(AppError::Cancelled);
        }

        let merged: Vec<Route> = results.into_iter().flatten().collect();
        info!(
            "Merged {} routes from {} providers for {} -> {}",
            merged.len(),
            self.providers.len(),
            request.origin,
            request.destination
        );

        self.cache.put(&merged);

        let filtered = Self::filter_routes(merged, request.filters.as_ref());
        Ok(SearchResponse::from_routes(filtered))
    }

    /// True when at least one provider answers its liveness probe
    pub async fn is_available(&self, cancel: &CancellationToken) -> AppResult<bool> {
        let availability = join_all(self.providers.iter().map(|p| p.ping(cancel))).await;
        if cancel.is_cancelled() {
            return Err(AppError::Cancelled);
        }
        Ok(availability.into_iter().any(|up| up))
    }

    /// Apply the AND-combined filter predicate to whatever list is given,
    /// fresh or cached. No filters means the list passes through unchanged.
    fn filter_routes(routes: Vec<Route>, filters: Option<&SearchFilters>) -> Vec<Route> {
        match filters {
            Some(filters) => routes
                .into_iter()
                .filter(|route| filters.matches(route))
                .collect(),
            None => routes,
        }
    }
}
