//! Speech recognition service entry point.

use std::path::Path;

use log::{error, info};
use parlance_rest::{content_type_for, HttpPoster, ReqwestPoster, RestClient, RestConfig};

use crate::error::SpeechError;
use crate::model::SpeechResponse;
use crate::parse::parse_success;

/// Client for the speech recognition endpoint.
///
/// Uploads an audio file with authorization and context headers and
/// returns the parsed attribute collection. By default the request body is
/// sent non-chunked; see [`set_chunked`](Self::set_chunked).
///
/// The configuration is borrowed from the caller and never mutated. Each
/// call builds its own request and result, so the service holds no state
/// between invocations beyond the chunked flag.
pub struct SpeechService<'a> {
    cfg: &'a RestConfig,
    poster: Box<dyn HttpPoster>,
    chunked: bool,
}

impl<'a> SpeechService<'a> {
    /// Create a speech service using the blocking reqwest transport.
    pub fn new(cfg: &'a RestConfig) -> Result<Self, SpeechError> {
        let poster = ReqwestPoster::from_config(cfg)?;
        Ok(Self::with_poster(cfg, Box::new(poster)))
    }

    /// Create a speech service with a custom transport.
    ///
    /// Lets tests substitute a fake [`HttpPoster`] for the network.
    pub fn with_poster(cfg: &'a RestConfig, poster: Box<dyn HttpPoster>) -> Self {
        Self {
            cfg,
            poster,
            chunked: false,
        }
    }

    /// Set whether to send the request body chunked or non-chunked.
    pub fn set_chunked(&mut self, chunked: bool) {
        self.chunked = chunked;
    }

    /// Send the audio file to the recognition endpoint.
    ///
    /// # Arguments
    /// * `file` - audio file sent as the request entity
    /// * `access_token` - access token for the `Authorization` header
    /// * `speech_context` - recognition context, sent as `X-SpeechContext`
    /// * `x_arg` - extra argument, sent as `X-Arg` when non-empty
    /// * `sub_context` - sent as `X-SpeechSubContext` only when non-empty
    ///   and `speech_context` is exactly `Gaming`
    ///
    /// Performs exactly one blocking POST. Transport, IO and parse
    /// failures surface unchanged; there is no retry.
    pub fn send_request(
        &self,
        file: &Path,
        access_token: &str,
        speech_context: &str,
        x_arg: Option<&str>,
        sub_context: Option<&str>,
    ) -> Result<SpeechResponse, SpeechError> {
        let mut client = RestClient::new(self.cfg.url(), &*self.poster)
            .header("Authorization", format!("Bearer {}", access_token))
            .header("Accept", "application/json")
            .header("Content-Type", content_type_for(file))
            .header("X-SpeechContext", speech_context);

        if let Some(x_arg) = x_arg.filter(|v| !v.is_empty()) {
            client = client.header("X-Arg", x_arg);
        }

        // The sub-context is only meaningful for the Gaming context; other
        // contexts must not carry the header even when a value is given.
        if let Some(sub) = sub_context.filter(|v| !v.is_empty()) {
            if speech_context == "Gaming" {
                client = client.header("X-SpeechSubContext", sub);
            }
        }

        info!(
            "sending recognition request to {} (context: {})",
            self.cfg.url(),
            speech_context
        );

        let response = client.post_file(file, self.chunked).map_err(|e| {
            error!("recognition request failed: {}", e);
            e
        })?;

        if !response.is_success() {
            let status = response.status_code();
            let body = response.into_body();
            error!("recognition endpoint returned status {}: {}", status, body);
            return Err(SpeechError::UnexpectedStatus { status, body });
        }

        let parsed = parse_success(response.body())?;
        info!("recognition response parsed: {} attributes", parsed.len());

        Ok(parsed)
    }
}
