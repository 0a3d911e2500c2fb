//! Cross-partition nearest-neighbor retrieval.

pub mod engine;
pub mod error;

pub use engine::{Counterpart, RetrievalEngine, RetrievalOptions};
pub use error::RetrievalError;
