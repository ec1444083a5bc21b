pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod traits;

// Re-exports for easy external access - only export what's actually used
pub use application::service::SearchService;
pub use domain::provider::{ProviderEndpoints, RouteProvider};
pub use domain::request::{SearchFilters, SearchRequest};
pub use domain::response::SearchResponse;
pub use domain::route::{Route, RouteStats};
pub use infrastructure::cache::{CacheStats, RouteCache};
pub use infrastructure::external::{ProviderOneClient, ProviderTwoClient};
pub use traits::RouteProviderClient;
