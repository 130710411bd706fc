/// A raw response returned by the transport.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code, if the transport could provide one.
    pub(crate) status: Option<u16>,

    /// The response headers.
    pub(crate) headers: Vec<(String, String)>,

    /// The raw response body.
    pub(crate) body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse` with the given status code and body.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: Some(status),
            headers: vec![],
            body: body.into(),
        }
    }

    /// Creates a response that carries no status metadata.
    pub fn without_status(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: None,
            headers: vec![],
            body: body.into(),
        }
    }

    /// Retrieves the status code.
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    /// Retrieves the response headers.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Retrieves the raw body.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Returns `true` if the status code is in the 200-299 range.
    pub fn is_success(&self) -> bool {
        self.status.is_some_and(|status| (200..=299).contains(&status))
    }
}
