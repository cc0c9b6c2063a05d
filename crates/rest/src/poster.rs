//! HTTP transport seam for file-upload POST requests.

use std::fs::File;
use std::path::Path;

use log::debug;

use crate::config::RestConfig;
use crate::error::RestError;
use crate::response::ApiResponse;

/// A single file-upload POST, fully assembled.
#[derive(Debug)]
pub struct FileUpload<'a> {
    /// Target URL.
    pub url: &'a str,
    /// Headers in the order they were added.
    pub headers: &'a [(String, String)],
    /// File whose contents form the request body.
    pub file: &'a Path,
    /// Send the body with chunked transfer encoding instead of a sized
    /// body with Content-Length.
    pub chunked: bool,
}

/// Minimal interface over the HTTP layer.
///
/// Implementations perform exactly one POST per call and block until the
/// server responds or the transport fails. Production code uses
/// [`ReqwestPoster`]; tests substitute a fake.
pub trait HttpPoster: Send + Sync {
    /// Upload the file described by `upload` and return the raw response.
    fn post_file(&self, upload: FileUpload<'_>) -> Result<ApiResponse, RestError>;
}

/// [`HttpPoster`] backed by a blocking reqwest client.
///
/// The inner client is built once from the connection settings and reused
/// across calls; connection pooling is its concern, not this crate's.
pub struct ReqwestPoster {
    client: reqwest::blocking::Client,
}

impl ReqwestPoster {
    /// Build a poster from connection settings.
    pub fn from_config(cfg: &RestConfig) -> Result<Self, RestError> {
        let mut builder = reqwest::blocking::Client::builder()
            .danger_accept_invalid_certs(cfg.trust_all_certs());

        if let Some(proxy) = cfg.proxy() {
            builder = builder.proxy(reqwest::Proxy::all(proxy)?);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

impl HttpPoster for ReqwestPoster {
    fn post_file(&self, upload: FileUpload<'_>) -> Result<ApiResponse, RestError> {
        let mut request = self.client.post(upload.url);
        for (name, value) in upload.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        // Chunked mode streams the file with unknown length, which reqwest
        // sends as Transfer-Encoding: chunked. Non-chunked reads the file
        // up front and sends a sized body.
        let body = if upload.chunked {
            reqwest::blocking::Body::new(File::open(upload.file)?)
        } else {
            reqwest::blocking::Body::from(std::fs::read(upload.file)?)
        };

        debug!(
            "POST {} ({} headers, chunked: {})",
            upload.url,
            upload.headers.len(),
            upload.chunked
        );

        let response = request.body(body).send()?;
        let status_code = response.status().as_u16();
        let body = response.text()?;

        Ok(ApiResponse::new(status_code, body))
    }
}
