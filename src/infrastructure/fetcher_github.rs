use chrono::Utc;
use log::info;

use crate::{
    Endpoint, NetworkService, Repository, RepositoryDto, RepositoryFetcher, StdResult,
};

/// Fetches repositories from the GitHub REST API and maps them to domain entities.
pub struct GitHubRepositoryFetcher {
    network_service: NetworkService,
}

impl GitHubRepositoryFetcher {
    /// Creates a new `GitHubRepositoryFetcher` instance with the given typed HTTP client.
    pub fn new(network_service: NetworkService) -> Self {
        Self { network_service }
    }
}

#[async_trait::async_trait]
impl RepositoryFetcher for GitHubRepositoryFetcher {
    async fn fetch_repositories(&self) -> StdResult<Vec<Repository>> {
        let dtos: Vec<RepositoryDto> = self
            .network_service
            .request(&Endpoint::Repositories)
            .await?;
        let now = Utc::now();
        let repositories = dtos
            .into_iter()
            .map(|dto| dto.into_domain(now))
            .collect::<Vec<_>>();
        info!("Fetched {} repositories", repositories.len());

        Ok(repositories)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use httpmock::MockServer;
    use serde_json::json;

    use crate::{
        FetchRepositories, FetchRepositoriesUseCase, GITHUB_API_BASE_URL, HttpRequest,
        HttpResponse, HttpTransport, MockHttpTransport, NetworkError, ReqwestTransport,
        TransportError,
    };

    use super::*;

    fn mock_json_value(total: u64) -> serde_json::Value {
        let repositories = (1..=total)
            .map(|id| {
                json!({
                    "id": id,
                    "name": format!("repository-{id}"),
                    "owner": {
                        "id": 100 + id,
                        "login": format!("owner-{id}"),
                        "avatar_url": format!("https://avatars.githubusercontent.com/u/{id}")
                    },
                    "created_at": "2023-10-10T12:00:00Z",
                    "html_url": format!("https://github.com/owner-{id}/repository-{id}")
                })
            })
            .collect::<Vec<_>>();

        json!(repositories)
    }

    fn fetcher_with_transport(transport: impl HttpTransport + 'static) -> GitHubRepositoryFetcher {
        GitHubRepositoryFetcher::new(NetworkService::new(Arc::new(transport)))
    }

    fn fetcher_returning(response: HttpResponse) -> GitHubRepositoryFetcher {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_send()
            .returning(move |_| Ok(response.clone()))
            .times(1);

        fetcher_with_transport(transport)
    }

    /// Sends requests aimed at the GitHub API to a local mock server instead.
    struct RedirectingTransport {
        transport: ReqwestTransport,
        base_url: String,
    }

    #[async_trait::async_trait]
    impl HttpTransport for RedirectingTransport {
        async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
            let request = HttpRequest {
                url: request.url().replacen(GITHUB_API_BASE_URL, &self.base_url, 1),
                ..request.clone()
            };

            self.transport.send(&request).await
        }
    }

    #[tokio::test]
    async fn fetch_repositories_maps_every_dto_in_order() {
        let body = serde_json::to_vec(&mock_json_value(3)).unwrap();
        let fetcher = fetcher_returning(HttpResponse::new(200, body));

        let repositories = fetcher.fetch_repositories().await.unwrap();

        assert_eq!(
            vec![1, 2, 3],
            repositories.iter().map(Repository::id).collect::<Vec<_>>()
        );
        assert_eq!(
            vec!["repository-1", "repository-2", "repository-3"],
            repositories.iter().map(Repository::name).collect::<Vec<_>>()
        );
        assert_eq!("owner-2", repositories[1].owner().username());
    }

    #[tokio::test]
    async fn fetch_repositories_returns_empty_list_for_empty_array() {
        let fetcher = fetcher_returning(HttpResponse::new(200, "[]"));

        let repositories = fetcher.fetch_repositories().await.unwrap();

        assert!(repositories.is_empty());
    }

    #[tokio::test]
    async fn fetch_repositories_keeps_repositories_with_malformed_fields() {
        let body = json!([
            {
                "id": 1,
                "name": "broken",
                "owner": { "id": 2, "login": "someone", "avatar_url": "::" },
                "created_at": "last tuesday",
                "html_url": "not a url"
            }
        ]);
        let fetcher = fetcher_returning(HttpResponse::new(200, body.to_string()));

        let repositories = fetcher.fetch_repositories().await.unwrap();

        assert_eq!(1, repositories.len());
        assert_eq!("https://github.com/", repositories[0].html_url().as_str());
        assert_eq!(
            "https://example.com/placeholder.png",
            repositories[0].owner().avatar_url().as_str()
        );
    }

    #[tokio::test]
    async fn fetch_repositories_propagates_transport_failure_unchanged() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_send()
            .returning(|_| Err(TransportError::Connect("connection refused".to_string())))
            .times(1);
        let fetcher = fetcher_with_transport(transport);

        let error = fetcher
            .fetch_repositories()
            .await
            .expect_err("Expected a failure");

        assert!(
            error
                .downcast_ref::<NetworkError>()
                .is_some_and(NetworkError::is_invalid_response),
            "{error:?}"
        );
    }

    #[tokio::test]
    async fn fetch_repositories_propagates_decode_failure_unchanged() {
        let fetcher = fetcher_returning(HttpResponse::new(200, r#"{"message":"not a list"}"#));

        let error = fetcher
            .fetch_repositories()
            .await
            .expect_err("Expected a failure");

        assert!(
            error
                .downcast_ref::<NetworkError>()
                .is_some_and(NetworkError::is_decode),
            "{error:?}"
        );
    }

    #[tokio::test]
    async fn fetch_repositories_through_use_case_against_mock_server() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/repositories");
                then.status(200)
                    .header("Content-Type", "application/json")
                    .json_body(mock_json_value(2));
            })
            .await;
        let transport = RedirectingTransport {
            transport: ReqwestTransport::try_new("github-repos-test").unwrap(),
            base_url: server.base_url(),
        };
        let use_case = FetchRepositories::new(Arc::new(fetcher_with_transport(transport)));

        let repositories = use_case.execute().await.unwrap();

        mock.assert_async().await;
        assert_eq!(2, repositories.len());
        assert_eq!("repository-1", repositories[0].name());
    }

    #[tokio::test]
    async fn fetch_repositories_fails_against_mock_server_rate_limit() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method("GET").path("/repositories");
                then.status(403)
                    .json_body(json!({ "message": "API rate limit exceeded" }));
            })
            .await;
        let transport = RedirectingTransport {
            transport: ReqwestTransport::try_new("github-repos-test").unwrap(),
            base_url: server.base_url(),
        };
        let fetcher = fetcher_with_transport(transport);

        let error = fetcher
            .fetch_repositories()
            .await
            .expect_err("Expected a failure");

        assert!(
            error
                .downcast_ref::<NetworkError>()
                .is_some_and(NetworkError::is_invalid_response),
            "{error:?}"
        );
    }
}
