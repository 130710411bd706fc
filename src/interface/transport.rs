use crate::{HttpRequest, HttpResponse, TransportError};

/// A trait for sending HTTP requests over the network.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait HttpTransport: Sync + Send {
    /// Sends the request and returns the raw response.
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}
