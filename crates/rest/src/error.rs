#[derive(Debug, thiserror::Error)]
pub enum RestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),
}
