use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;
use wayfare::{
    AppError, Route, RouteCache, RouteProvider, RouteProviderClient, SearchFilters, SearchRequest,
    SearchResponse, SearchService,
};

/// Scripted provider standing in for an upstream service
struct StubProvider {
    provider: RouteProvider,
    available: bool,
    routes: Vec<Route>,
    search_calls: AtomicUsize,
}

impl StubProvider {
    fn new(provider: RouteProvider, available: bool, routes: Vec<Route>) -> Self {
        Self {
            provider,
            available,
            routes,
            search_calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl RouteProviderClient for StubProvider {
    fn provider_type(&self) -> RouteProvider {
        self.provider
    }

    async fn search_routes(
        &self,
        _request: &SearchRequest,
        _cancel: &CancellationToken,
    ) -> Vec<Route> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        self.routes.clone()
    }

    async fn ping(&self, _cancel: &CancellationToken) -> bool {
        self.available
    }
}

fn route(price: f64, time_limit_offset_hours: i64) -> Route {
    let departure = Utc::now();
    Route {
        id: Uuid::new_v4(),
        origin: "Moscow".to_string(),
        destination: "Sochi".to_string(),
        origin_date_time: departure,
        destination_date_time: departure + Duration::hours(2),
        price,
        time_limit: departure + Duration::hours(time_limit_offset_hours),
    }
}

fn moscow_sochi_request(filters: Option<SearchFilters>) -> SearchRequest {
    SearchRequest {
        origin: "Moscow".to_string(),
        destination: "Sochi".to_string(),
        origin_date_time: Utc::now(),
        filters,
    }
}

#[tokio::test]
async fn test_full_search_merges_caches_and_derives_stats() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    // Provider One answers with a 100 priced route valid until tomorrow,
    // Provider Two with a 200 priced route that expired yesterday.
    let one = Arc::new(StubProvider::new(
        RouteProvider::ProviderOne,
        true,
        vec![route(100.0, 24)],
    ));
    let two = Arc::new(StubProvider::new(
        RouteProvider::ProviderTwo,
        true,
        vec![route(200.0, -24)],
    ));

    let cache = Arc::new(RouteCache::new());
    let service = SearchService::new(vec![one.clone(), two.clone()], cache.clone());

    let response = service
        .search(&moscow_sochi_request(None), &CancellationToken::new())
        .await
        .unwrap();

    // Both fetched routes are returned regardless of cache validity
    assert_eq!(response.routes.len(), 2);
    let stats = response.stats.unwrap();
    assert_eq!(stats.min_price, 100.0);
    assert_eq!(stats.max_price, 200.0);

    // Only the still-valid route made it into the cache
    let cached = cache.get("Moscow", "Sochi");
    assert_eq!(cached.len(), 1);
    assert_eq!(cached[0].price, 100.0);

    assert_eq!(one.search_calls.load(Ordering::SeqCst), 1);
    assert_eq!(two.search_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_max_price_filter_narrows_result_and_stats() {
    let one = Arc::new(StubProvider::new(
        RouteProvider::ProviderOne,
        true,
        vec![route(100.0, 24)],
    ));
    let two = Arc::new(StubProvider::new(
        RouteProvider::ProviderTwo,
        true,
        vec![route(200.0, -24)],
    ));
    let service = SearchService::new(vec![one, two], Arc::new(RouteCache::new()));

    let filters = SearchFilters {
        max_price: Some(150.0),
        ..Default::default()
    };
    let response = service
        .search(&moscow_sochi_request(Some(filters)), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(response.routes.len(), 1);
    assert_eq!(response.routes[0].price, 100.0);
    let stats = response.stats.unwrap();
    assert_eq!(stats.min_price, 100.0);
    assert_eq!(stats.max_price, 100.0);
}

#[tokio::test]
async fn test_unavailable_provider_is_never_fetched() {
    let one = Arc::new(StubProvider::new(
        RouteProvider::ProviderOne,
        true,
        vec![route(100.0, 24)],
    ));
    let two = Arc::new(StubProvider::new(
        RouteProvider::ProviderTwo,
        false,
        vec![route(200.0, 24)],
    ));

    let service = SearchService::new(vec![one.clone(), two.clone()], Arc::new(RouteCache::new()));
    let response = service
        .search(&moscow_sochi_request(None), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(response.routes.len(), 1);
    assert_eq!(two.search_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_search_survives_both_providers_down() {
    let one = Arc::new(StubProvider::new(
        RouteProvider::ProviderOne,
        false,
        Vec::new(),
    ));
    let two = Arc::new(StubProvider::new(
        RouteProvider::ProviderTwo,
        false,
        Vec::new(),
    ));
    let service = SearchService::new(vec![one, two], Arc::new(RouteCache::new()));

    let response = service
        .search(&moscow_sochi_request(None), &CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(response, SearchResponse::empty());

    assert!(!service
        .is_available(&CancellationToken::new())
        .await
        .unwrap());
}

#[tokio::test]
async fn test_only_cached_request_is_served_across_searches() {
    let one = Arc::new(StubProvider::new(
        RouteProvider::ProviderOne,
        true,
        vec![route(100.0, 24)],
    ));
    let two = Arc::new(StubProvider::new(
        RouteProvider::ProviderTwo,
        true,
        Vec::new(),
    ));
    let service = SearchService::new(vec![one.clone(), two], Arc::new(RouteCache::new()));

    // First search populates the cache from providers
    service
        .search(&moscow_sochi_request(None), &CancellationToken::new())
        .await
        .unwrap();

    // Second search with only_cached bypasses providers entirely
    let filters = SearchFilters {
        only_cached: Some(true),
        ..Default::default()
    };
    let response = service
        .search(&moscow_sochi_request(Some(filters)), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(response.routes.len(), 1);
    assert_eq!(response.routes[0].price, 100.0);
    assert_eq!(one.search_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_only_cached_with_empty_cache_is_a_valid_empty_response() {
    let one = Arc::new(StubProvider::new(
        RouteProvider::ProviderOne,
        true,
        vec![route(100.0, 24)],
    ));
    let two = Arc::new(StubProvider::new(
        RouteProvider::ProviderTwo,
        true,
        Vec::new(),
    ));
    let service = SearchService::new(vec![one, two], Arc::new(RouteCache::new()));

    let filters = SearchFilters {
        only_cached: Some(true),
        ..Default::default()
    };
    let response = service
        .search(&moscow_sochi_request(Some(filters)), &CancellationToken::new())
        .await
        .unwrap();

    assert!(response.routes.is_empty());
    assert!(response.stats.is_none());
}

#[tokio::test]
async fn test_cancellation_propagates_as_cancelled_error() {
    let one = Arc::new(StubProvider::new(
        RouteProvider::ProviderOne,
        true,
        vec![route(100.0, 24)],
    ));
    let two = Arc::new(StubProvider::new(
        RouteProvider::ProviderTwo,
        true,
        Vec::new(),
    ));
    let service = SearchService::new(vec![one, two], Arc::new(RouteCache::new()));

    let cancel = CancellationToken::new();
    cancel.cancel();

    assert!(matches!(
        service.search(&moscow_sochi_request(None), &cancel).await,
        Err(AppError::Cancelled)
    ));
}

#[tokio::test]
async fn test_compound_filters_are_and_combined() {
    let latest_arrival = Utc::now() + Duration::hours(3);

    let cheap_but_late = {
        let mut r = route(90.0, 24);
        r.destination_date_time = Utc::now() + Duration::hours(6);
        r
    };
    let in_budget_and_on_time = route(120.0, 24);
    let on_time_but_expensive = route(400.0, 24);

    let one = Arc::new(StubProvider::new(
        RouteProvider::ProviderOne,
        true,
        vec![cheap_but_late, in_budget_and_on_time.clone()],
    ));
    let two = Arc::new(StubProvider::new(
        RouteProvider::ProviderTwo,
        true,
        vec![on_time_but_expensive],
    ));
    let service = SearchService::new(vec![one, two], Arc::new(RouteCache::new()));

    let filters = SearchFilters {
        max_price: Some(300.0),
        destination_date_time: Some(latest_arrival),
        ..Default::default()
    };
    let response = service
        .search(&moscow_sochi_request(Some(filters)), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(response.routes.len(), 1);
    assert_eq!(response.routes[0].id, in_budget_and_on_time.id);
}
