use thiserror::Error;

use crate::vectordb::{IndexError, Partition};

#[derive(Debug, Error)]
/// Errors returned by the retrieval engine.
pub enum RetrievalError {
    /// The query entity has no vector in the index.
    #[error("no indexed vector for id {id} in {partition}")]
    NotFound {
        /// Partition that was searched.
        partition: Partition,
        /// Entity id that was requested.
        id: u64,
    },

    /// The retrieval options failed validation.
    #[error("invalid retrieval options: {reason}")]
    InvalidOptions {
        /// What was out of range.
        reason: String,
    },

    /// The underlying index operation failed.
    #[error(transparent)]
    Index(#[from] IndexError),
}
