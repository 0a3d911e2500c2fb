//! Talentmatch library crate (used by embedding services and integration
//! tests).
//!
//! # Public API Surface
//!
//! The exports are organized by module:
//!
//! ## Data Model
//! - [`CandidateProfile`], [`JobRequisition`], [`RoleCategory`] - Input records
//! - [`MatchResult`], [`SkillMatch`] - Scoring output
//!
//! ## Rule-Based Matching
//! - [`MatchEngine`] - Deterministic pairwise scorer
//!
//! ## Embedding & Indexing
//! - [`Embedder`], [`OpenAiEmbedder`] - Embedding generation
//! - [`EmbeddingIndexer`] - Keeps the similarity index in sync
//!
//! ## Vector Index & Retrieval
//! - [`SimilarityIndex`], [`QdrantIndex`] - Vector storage backends
//! - [`RetrievalEngine`], [`RetrievalOptions`] - Cross-partition search
//!
//! ## Test/Mock Support
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod config;
pub mod constants;
pub mod embedding;
pub mod logging;
pub mod matching;
pub mod model;
pub mod retrieval;
pub mod vectordb;

pub use config::{Config, ConfigError, DEFAULT_QDRANT_URL};
pub use constants::{
    DEFAULT_EMBEDDING_DIM, DEFAULT_EMBEDDING_MODEL, DEFAULT_SIMILARITY_FLOOR, DEFAULT_TOP_K,
};
pub use embedding::{
    Embedder, EmbeddingError, EmbeddingIndexer, IndexingError, OpenAiEmbedder, profile_text,
    requisition_text,
};
#[cfg(any(test, feature = "mock"))]
pub use embedding::MockEmbedder;
pub use logging::init_tracing;
pub use matching::{MATCH_WEIGHTS, MatchEngine, SHORT_CIRCUIT_SCORE, Weights};
pub use model::{CandidateProfile, JobRequisition, MatchResult, RoleCategory, SkillMatch};
pub use retrieval::{Counterpart, RetrievalEngine, RetrievalError, RetrievalOptions};
#[cfg(any(test, feature = "mock"))]
pub use vectordb::InMemoryIndex;
pub use vectordb::{
    EmbeddingRecord, IndexError, PROFILE_COLLECTION, Partition, QdrantIndex, REQUISITION_COLLECTION,
    RecordMeta, SearchHit, SimilarityIndex,
};
