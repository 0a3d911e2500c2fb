//! Similarity index over per-entity embedding vectors.
//!
//! Two independent partitions (profiles and requisitions) back the
//! cross-corpus retrieval in [`crate::retrieval`]. The Qdrant-backed
//! implementation lives in [`client`]; an in-memory mock with identical
//! semantics is available behind the `mock` feature for tests.
//!
//! Consistency note: a query is not guaranteed to observe upserts issued
//! concurrently with it. The store offers eventual visibility; there is no
//! cross-entity transaction.

pub mod client;
pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod model;

#[cfg(test)]
mod tests;

pub use client::{QdrantIndex, SimilarityIndex};
pub use error::IndexError;
#[cfg(any(test, feature = "mock"))]
pub use mock::{InMemoryIndex, squared_l2_distance};
pub use model::{
    EmbeddingRecord, FIELD_CATEGORY, FIELD_EXPERIENCE_YEARS, FIELD_SKILL_COUNT, RecordMeta,
    SearchHit,
};

use crate::model::RoleCategory;

/// Collection holding profile vectors.
pub const PROFILE_COLLECTION: &str = "profile_embeddings";
/// Collection holding requisition vectors.
pub const REQUISITION_COLLECTION: &str = "requisition_embeddings";

/// An independent namespace within the index; an entity id is only unique
/// within its own partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Partition {
    Profiles,
    Requisitions,
}

impl Partition {
    /// Persisted collection name for this partition. Stable across restarts;
    /// category filtering depends on it.
    pub fn collection_name(&self) -> &'static str {
        match self {
            Partition::Profiles => PROFILE_COLLECTION,
            Partition::Requisitions => REQUISITION_COLLECTION,
        }
    }

    /// The partition queried when ranking counterparts for this one.
    pub fn opposite(&self) -> Partition {
        match self {
            Partition::Profiles => Partition::Requisitions,
            Partition::Requisitions => Partition::Profiles,
        }
    }
}

impl std::fmt::Display for Partition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Partition::Profiles => f.write_str("profiles"),
            Partition::Requisitions => f.write_str("requisitions"),
        }
    }
}

/// Optional category restriction applied server-side during a query.
pub type CategoryFilter = Option<RoleCategory>;
