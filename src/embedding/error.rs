use thiserror::Error;

#[derive(Debug, Error)]
/// Errors returned by the embedding client.
pub enum EmbeddingError {
    /// The HTTP request to the embedding endpoint failed.
    #[error("embedding request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("embedding endpoint returned {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body (truncated by the caller if needed).
        message: String,
    },

    /// The endpoint answered without any embedding data.
    #[error("embedding response contained no vectors")]
    EmptyResponse,

    /// The returned vector does not match the configured dimension.
    #[error("embedding dimension mismatch: expected {expected}, got {actual}")]
    InvalidDimension {
        /// Configured dimension.
        expected: usize,
        /// Returned dimension.
        actual: usize,
    },
}
