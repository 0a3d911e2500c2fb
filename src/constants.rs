//! Cross-cutting, shared constants.

/// Vector length of `text-embedding-ada-002` output.
pub const DEFAULT_EMBEDDING_DIM: usize = 1536;

/// Embedding model requested when none is configured.
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-ada-002";

/// Default number of counterparts a retrieval query returns.
pub const DEFAULT_TOP_K: u64 = 10;

/// Default minimum similarity for a counterpart to be surfaced.
pub const DEFAULT_SIMILARITY_FLOOR: f64 = 0.7;
