use std::sync::Arc;

use log::{debug, warn};
use serde::de::DeserializeOwned;

use crate::{Endpoint, HttpTransport, NetworkError};

/// A typed HTTP client: sends an endpoint request, validates the status and decodes the JSON body.
pub struct NetworkService {
    transport: Arc<dyn HttpTransport>,
}

impl NetworkService {
    /// Creates a new `NetworkService` instance with the given transport.
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    /// Sends the request of the endpoint and decodes the response body into `T`.
    ///
    /// Only statuses in the 200-299 range are decoded; anything else, a missing
    /// status or a transport failure yields [NetworkError::InvalidResponse].
    pub async fn request<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<T, NetworkError> {
        let request = endpoint.request();
        debug!("Requesting {endpoint}: {request}");
        let response = self.transport.send(&request).await.map_err(|e| {
            warn!("Transport failure for {request}: {e}");
            NetworkError::from(e)
        })?;

        if !response.is_success() {
            let reason = match response.status() {
                Some(status) => format!("unexpected status code {status}"),
                None => "missing status code".to_string(),
            };
            warn!("Rejected response for {request}: {reason}");
            return Err(NetworkError::InvalidResponse(reason));
        }

        Ok(serde_json::from_slice(response.body())?)
    }
}
