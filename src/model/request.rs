use std::fmt::Display;

use serde::Serialize;

/// An HTTP method supported by the transport.
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy, Hash)]
pub enum HttpMethod {
    /// GET
    Get,
}

impl Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpMethod::Get => write!(f, "GET"),
        }
    }
}

/// A concrete HTTP request described as plain data.
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Hash)]
pub struct HttpRequest {
    /// The HTTP method.
    pub(crate) method: HttpMethod,

    /// The absolute URL of the request.
    pub(crate) url: String,

    /// The request headers.
    pub(crate) headers: Vec<(String, String)>,
}

impl HttpRequest {
    /// Creates a new GET `HttpRequest` for the given absolute URL.
    pub fn get(url: &str) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.to_string(),
            headers: vec![],
        }
    }

    /// Adds a header to the request.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Retrieves the HTTP method.
    pub fn method(&self) -> HttpMethod {
        self.method
    }

    /// Retrieves the absolute URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Retrieves the request headers.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }
}

impl Display for HttpRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.method, self.url)
    }
}
