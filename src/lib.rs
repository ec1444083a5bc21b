pub mod modules;
pub mod shared;

// Re-exports for easy external access - only export what's actually used
pub use modules::search::{
    ProviderEndpoints, ProviderOneClient, ProviderTwoClient, Route, RouteCache, RouteProvider,
    RouteProviderClient, RouteStats, SearchFilters, SearchRequest, SearchResponse, SearchService,
};
pub use shared::errors::{AppError, AppResult};
