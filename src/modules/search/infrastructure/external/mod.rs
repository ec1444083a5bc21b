pub mod common;
pub mod provider_one;
pub mod provider_two;

pub use provider_one::ProviderOneClient;
pub use provider_two::ProviderTwoClient;
