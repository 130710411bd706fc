use crate::{Repository, StdResult};

/// A trait for the "fetch repositories" use case consumed by the presentation layer.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait FetchRepositoriesUseCase: Sync + Send {
    /// Executes the use case.
    async fn execute(&self) -> StdResult<Vec<Repository>>;
}
