use thiserror::Error;

/// The standard result type used throughout the application.
pub type StdResult<T> = Result<T, anyhow::Error>;

/// Transport error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The connection to the remote host could not be established.
    #[error("Connection error: {0}")]
    Connect(String),
    /// The request did not complete in time.
    #[error("Timeout error: {0}")]
    Timeout(String),
    /// The request was sent but the exchange failed.
    #[error("Request error: {0}")]
    Request(String),
}

/// Network error raised by the typed HTTP client
#[derive(Error, Debug)]
pub enum NetworkError {
    /// The response status is outside 200-299, missing, or the transport failed.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    /// The response body does not match the expected shape.
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl NetworkError {
    /// Returns `true` if the error is an invalid response.
    pub fn is_invalid_response(&self) -> bool {
        matches!(self, NetworkError::InvalidResponse(_))
    }

    /// Returns `true` if the error is a decoding failure.
    pub fn is_decode(&self) -> bool {
        matches!(self, NetworkError::Decode(_))
    }
}

impl From<TransportError> for NetworkError {
    fn from(error: TransportError) -> Self {
        NetworkError::InvalidResponse(error.to_string())
    }
}
