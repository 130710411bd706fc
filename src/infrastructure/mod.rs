mod fetcher_github;
mod network_service;
mod transport_reqwest;
mod use_case_fetch;

pub use fetcher_github::*;
pub use network_service::*;
pub use transport_reqwest::*;
pub use use_case_fetch::*;
