use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("event feed request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("event feed returned HTTP {status}")]
    Status { status: u16 },
    #[error("malformed event feed payload: {0}")]
    Shape(#[from] serde_json::Error),
}
