use thiserror::Error;

/// Failures talking to the completion API. Kept separate from an
/// assistant reply so callers can't mistake one for the other.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("request to completion API failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("completion API returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("completion API returned no content")]
    EmptyResponse,
}
