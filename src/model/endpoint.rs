use std::fmt::Display;

use super::HttpRequest;

/// The REST production endpoint for GitHub.
pub const GITHUB_API_BASE_URL: &str = "https://api.github.com";

/// An operation exposed by the GitHub REST API.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Endpoint {
    /// Lists public repositories.
    Repositories,
}

impl Endpoint {
    fn path(&self) -> &'static str {
        match self {
            Endpoint::Repositories => "/repositories",
        }
    }

    /// Returns the absolute URL of the endpoint.
    pub fn url(&self) -> String {
        format!("{GITHUB_API_BASE_URL}{}", self.path())
    }

    /// Builds the concrete request for the endpoint.
    pub fn request(&self) -> HttpRequest {
        HttpRequest::get(&self.url()).with_header("Accept", "application/json")
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endpoint::Repositories => write!(f, "Endpoint: repositories"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::HttpMethod;

    use super::*;

    #[test]
    fn repositories_endpoint_builds_get_request() {
        let request = Endpoint::Repositories.request();

        assert_eq!(HttpMethod::Get, request.method());
        assert_eq!("https://api.github.com/repositories", request.url());
    }

    #[test]
    fn repositories_endpoint_has_no_auth_header() {
        let request = Endpoint::Repositories.request();

        assert!(
            request
                .headers()
                .iter()
                .all(|(name, _)| !name.eq_ignore_ascii_case("authorization"))
        );
    }
}
