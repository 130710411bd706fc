//! A thin client for the GitHub repository listing API.
//!
//! The layers are wired leaf-first: an [HttpTransport] sends raw requests, the
//! [NetworkService] validates statuses and decodes JSON, the [RepositoryFetcher]
//! maps wire models to domain entities, the [FetchRepositoriesUseCase] exposes
//! them to presentation, and the [RepositoryListState] drives the fetch cycle.

mod infrastructure;
mod interface;
mod model;
mod presentation;
mod utils;

pub use infrastructure::*;
pub use interface::*;
pub use model::*;
pub use presentation::*;
pub use utils::*;
