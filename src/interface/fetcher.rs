use crate::{Repository, StdResult};

/// A trait for fetching GitHub repositories as domain entities.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RepositoryFetcher: Sync + Send {
    /// Fetches the repositories, in the order returned by the API.
    async fn fetch_repositories(&self) -> StdResult<Vec<Repository>>;
}
