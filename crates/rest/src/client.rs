use std::path::Path;

use crate::error::RestError;
use crate::poster::{FileUpload, HttpPoster};
use crate::response::ApiResponse;

/// Request builder for a single file-upload POST.
///
/// Accumulates headers in insertion order via the chainable
/// [`header`](Self::header), then delegates the actual transfer to an
/// [`HttpPoster`]. A builder is created fresh for every request and holds
/// no state beyond the headers it was given.
pub struct RestClient<'p> {
    url: String,
    headers: Vec<(String, String)>,
    poster: &'p dyn HttpPoster,
}

impl<'p> RestClient<'p> {
    /// Create a request builder for the given endpoint.
    pub fn new(url: impl Into<String>, poster: &'p dyn HttpPoster) -> Self {
        Self {
            url: url.into(),
            headers: Vec::new(),
            poster,
        }
    }

    /// Add a header. Headers are sent in the order they were added.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Headers added so far, in insertion order.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// POST the file as the request entity and return the raw response.
    ///
    /// Performs exactly one network call and blocks until the HTTP layer
    /// returns. Transport and IO failures surface unchanged; there is no
    /// retry.
    pub fn post_file(&self, file: &Path, chunked: bool) -> Result<ApiResponse, RestError> {
        self.poster.post_file(FileUpload {
            url: &self.url,
            headers: &self.headers,
            file,
            chunked,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Fake transport recording what it was asked to send.
    struct RecordingPoster {
        seen: Mutex<Vec<(String, Vec<(String, String)>, bool)>>,
    }

    impl RecordingPoster {
        fn new() -> Self {
            Self {
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    impl HttpPoster for RecordingPoster {
        fn post_file(&self, upload: FileUpload<'_>) -> Result<ApiResponse, RestError> {
            self.seen.lock().unwrap().push((
                upload.url.to_string(),
                upload.headers.to_vec(),
                upload.chunked,
            ));
            Ok(ApiResponse::new(200, "{}"))
        }
    }

    #[test]
    fn test_headers_keep_insertion_order() {
        let poster = RecordingPoster::new();
        let client = RestClient::new("https://api.example.com/speech", &poster)
            .header("Authorization", "Bearer token")
            .header("Accept", "application/json")
            .header("X-SpeechContext", "Generic");

        assert_eq!(
            client.headers(),
            &[
                ("Authorization".to_string(), "Bearer token".to_string()),
                ("Accept".to_string(), "application/json".to_string()),
                ("X-SpeechContext".to_string(), "Generic".to_string()),
            ]
        );
    }

    #[test]
    fn test_post_file_hands_everything_to_the_poster() {
        let poster = RecordingPoster::new();
        let client = RestClient::new("https://api.example.com/speech", &poster)
            .header("Accept", "application/json");

        let response = client.post_file(Path::new("clip.wav"), true).unwrap();
        assert_eq!(response.status_code(), 200);

        let seen = poster.seen.lock().unwrap();
        assert_eq!(seen.len(), 1, "exactly one POST per call");
        let (url, headers, chunked) = &seen[0];
        assert_eq!(url, "https://api.example.com/speech");
        assert_eq!(
            headers,
            &vec![("Accept".to_string(), "application/json".to_string())]
        );
        assert!(*chunked);
    }
}
