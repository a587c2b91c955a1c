use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("snapshot request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("snapshot endpoint returned HTTP {status}")]
    Status { status: u16 },
    #[error("malformed snapshot payload: {0}")]
    Shape(#[from] serde_json::Error),
}
