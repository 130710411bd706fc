use std::sync::Arc;

use crate::{FetchRepositoriesUseCase, Repository, RepositoryFetcher, StdResult};

/// Fetches the repositories by delegating to a [RepositoryFetcher].
pub struct FetchRepositories {
    fetcher: Arc<dyn RepositoryFetcher>,
}

impl FetchRepositories {
    /// Creates a new `FetchRepositories` instance with the given fetcher.
    pub fn new(fetcher: Arc<dyn RepositoryFetcher>) -> Self {
        Self { fetcher }
    }
}

#[async_trait::async_trait]
impl FetchRepositoriesUseCase for FetchRepositories {
    async fn execute(&self) -> StdResult<Vec<Repository>> {
        self.fetcher.fetch_repositories().await
    }
}
