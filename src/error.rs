use thiserror::Error;

/// Failures the API client itself can produce. Transport and decode errors
/// propagate unhandled to the test case; there is no retry or translation.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid base url: {0}")]
    BaseUrl(#[from] url::ParseError),

    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}
