//! Embedding generation and index synchronization.
//!
//! [`Embedder`] wraps the external embedding model, [`text`] renders records
//! into the canonical blobs it consumes, and [`EmbeddingIndexer`] ties both to
//! the similarity index.

pub mod client;
pub mod error;
pub mod indexer;
pub mod text;

pub use client::{Embedder, OpenAiEmbedder};
pub use error::EmbeddingError;
pub use indexer::{EmbeddingIndexer, IndexingError};
pub use text::{profile_text, requisition_text};

#[cfg(any(test, feature = "mock"))]
pub use client::MockEmbedder;
