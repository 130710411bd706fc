use anyhow::Context;
use log::debug;
use reqwest::{Client, Method};

use crate::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, StdResult, TransportError};

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        let message = error.to_string();
        if error.is_timeout() {
            TransportError::Timeout(message)
        } else if error.is_connect() {
            TransportError::Connect(message)
        } else {
            TransportError::Request(message)
        }
    }
}

/// Sends HTTP requests with a `reqwest` client.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates a new `ReqwestTransport` identifying itself with the given user agent.
    pub fn try_new(user_agent: &str) -> StdResult<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .with_context(|| "Failed to build the HTTP client")?;

        Ok(Self { client })
    }

    fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
        }
    }
}

#[async_trait::async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        debug!("Sending {request}");
        let mut builder = self
            .client
            .request(Self::to_reqwest_method(request.method()), request.url());
        for (name, value) in request.headers() {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.to_string(), value.to_string()))
            })
            .collect::<Vec<_>>();
        let body = response.bytes().await?.to_vec();
        debug!("Received status {status} with {} bytes", body.len());

        Ok(HttpResponse {
            status: Some(status),
            headers,
            body,
        })
    }
}
