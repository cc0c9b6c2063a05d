/// Raw outcome of an HTTP call: status code plus the full body text.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    status_code: u16,
    body: String,
}

impl ApiResponse {
    /// Wrap a status code and body.
    pub fn new(status_code: u16, body: impl Into<String>) -> Self {
        Self {
            status_code,
            body: body.into(),
        }
    }

    /// The HTTP status code.
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// The response body text.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// True for 2xx status codes.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// Consume the response, returning the body text.
    pub fn into_body(self) -> String {
        self.body
    }
}
