use thiserror::Error;

#[derive(Debug, Error)]
/// Errors returned by similarity-index operations.
pub enum IndexError {
    /// Could not connect to the vector store endpoint.
    #[error("failed to connect to vector store at '{url}': {message}")]
    ConnectionFailed {
        /// Endpoint URL.
        url: String,
        /// Error message.
        message: String,
    },

    /// Collection creation or lookup failed.
    #[error("failed to prepare collection '{collection}': {message}")]
    CollectionFailed {
        /// Collection name.
        collection: String,
        /// Error message.
        message: String,
    },

    /// Upsert failed.
    #[error("failed to upsert into '{collection}': {message}")]
    UpsertFailed {
        /// Collection name.
        collection: String,
        /// Error message.
        message: String,
    },

    /// Point fetch failed.
    #[error("failed to fetch from '{collection}': {message}")]
    FetchFailed {
        /// Collection name.
        collection: String,
        /// Error message.
        message: String,
    },

    /// Nearest-neighbor search failed.
    #[error("failed to search in '{collection}': {message}")]
    SearchFailed {
        /// Collection name.
        collection: String,
        /// Error message.
        message: String,
    },

    /// Delete failed.
    #[error("failed to delete from '{collection}': {message}")]
    DeleteFailed {
        /// Collection name.
        collection: String,
        /// Error message.
        message: String,
    },

    /// Count failed.
    #[error("failed to count '{collection}': {message}")]
    CountFailed {
        /// Collection name.
        collection: String,
        /// Error message.
        message: String,
    },

    /// Vector dimension did not match the collection's configured dimension.
    #[error("invalid vector dimension: expected {expected}, got {actual}")]
    InvalidDimension {
        /// Expected dimension.
        expected: usize,
        /// Actual dimension.
        actual: usize,
    },
}
