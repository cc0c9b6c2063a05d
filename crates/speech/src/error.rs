use parlance_rest::RestError;

#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error(transparent)]
    Rest(#[from] RestError),
    #[error("server returned status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },
    #[error("malformed response body: {0}")]
    Json(#[from] serde_json::Error),
    #[error("missing or non-string response field: {0}")]
    MissingField(&'static str),
}
