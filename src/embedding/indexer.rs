//! Two-phase indexing pipeline: render text, embed it, upsert the vector.

use thiserror::Error;
use tracing::info;

use crate::model::{CandidateProfile, JobRequisition};
use crate::vectordb::{EmbeddingRecord, IndexError, Partition, RecordMeta, SimilarityIndex};

use super::client::Embedder;
use super::error::EmbeddingError;
use super::text::{profile_text, requisition_text};

/// Errors from the indexing pipeline.
///
/// Both phases leave the index in a consistent state on failure: an embed
/// failure writes nothing, an upsert failure leaves the previous record (if
/// any) in place. Retrying the whole operation is always safe.
#[derive(Debug, Error)]
pub enum IndexingError {
    /// The embedding phase failed; nothing was written.
    #[error(transparent)]
    Embedding(#[from] EmbeddingError),

    /// The index write phase failed; the prior record is untouched.
    #[error(transparent)]
    Index(#[from] IndexError),
}

/// Keeps the similarity index in sync with profile and requisition records.
pub struct EmbeddingIndexer<E, I> {
    embedder: E,
    index: I,
}

impl<E, I> EmbeddingIndexer<E, I>
where
    E: Embedder,
    I: SimilarityIndex,
{
    pub fn new(embedder: E, index: I) -> Self {
        Self { embedder, index }
    }

    pub fn index(&self) -> &I {
        &self.index
    }

    /// Embeds a candidate profile and upserts it under the given id.
    pub async fn index_profile(
        &self,
        id: u64,
        profile: &CandidateProfile,
    ) -> Result<(), IndexingError> {
        let text = profile_text(profile);
        let vector = self.embedder.embed(&text).await?;
        let record = EmbeddingRecord::new(id, vector, RecordMeta::from_profile(profile));
        self.index.upsert(Partition::Profiles, record).await?;
        info!(id, partition = %Partition::Profiles, "indexed profile");
        Ok(())
    }

    /// Embeds a job requisition and upserts it under the given id.
    pub async fn index_requisition(
        &self,
        id: u64,
        requisition: &JobRequisition,
    ) -> Result<(), IndexingError> {
        let text = requisition_text(requisition);
        let vector = self.embedder.embed(&text).await?;
        let record = EmbeddingRecord::new(id, vector, RecordMeta::from_requisition(requisition));
        self.index.upsert(Partition::Requisitions, record).await?;
        info!(id, partition = %Partition::Requisitions, "indexed requisition");
        Ok(())
    }

    /// Removes a profile vector; missing ids are a no-op.
    pub async fn remove_profile(&self, id: u64) -> Result<(), IndexingError> {
        self.index.delete(Partition::Profiles, id).await?;
        Ok(())
    }

    /// Removes a requisition vector; missing ids are a no-op.
    pub async fn remove_requisition(&self, id: u64) -> Result<(), IndexingError> {
        self.index.delete(Partition::Requisitions, id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedding::client::MockEmbedder;
    use crate::model::RoleCategory;
    use crate::vectordb::InMemoryIndex;

    const DIM: usize = 8;

    fn indexer() -> EmbeddingIndexer<MockEmbedder, InMemoryIndex> {
        EmbeddingIndexer::new(MockEmbedder::new(DIM), InMemoryIndex::new(DIM))
    }

    fn profile() -> CandidateProfile {
        CandidateProfile {
            role: Some("Backend Developer".to_string()),
            role_category: Some(RoleCategory::Backend),
            skills: vec!["rust".to_string(), "postgres".to_string()],
            experience_years: 5,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn index_profile_stores_vector_and_metadata() {
        let indexer = indexer();
        indexer.index_profile(42, &profile()).await.unwrap();

        let record = indexer
            .index()
            .get(Partition::Profiles, 42)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(record.vector.len(), DIM);
        assert_eq!(record.meta.category, Some(RoleCategory::Backend));
        assert_eq!(record.meta.skill_count, 2);
        assert_eq!(record.meta.experience_years, 5);
    }

    #[tokio::test]
    async fn reindexing_replaces_the_previous_vector() {
        let indexer = indexer();
        indexer.index_profile(1, &profile()).await.unwrap();
        let first = indexer
            .index()
            .get(Partition::Profiles, 1)
            .await
            .unwrap()
            .unwrap();

        let mut updated = profile();
        updated.skills.push("kubernetes".to_string());
        indexer.index_profile(1, &updated).await.unwrap();

        let second = indexer
            .index()
            .get(Partition::Profiles, 1)
            .await
            .unwrap()
            .unwrap();
        assert_ne!(first.vector, second.vector);
        assert_eq!(second.meta.skill_count, 3);
        assert_eq!(indexer.index().count(Partition::Profiles).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn requisition_meta_counts_required_skills_only() {
        let indexer = indexer();
        let requisition = JobRequisition {
            job_title: Some("QA Engineer".to_string()),
            job_category: Some(RoleCategory::Qa),
            required_skills: vec!["selenium".to_string()],
            preferred_skills: vec!["cypress".to_string(), "playwright".to_string()],
            ..Default::default()
        };
        indexer.index_requisition(9, &requisition).await.unwrap();

        let record = indexer
            .index()
            .get(Partition::Requisitions, 9)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(record.meta.skill_count, 1);
        assert_eq!(record.meta.category, Some(RoleCategory::Qa));
    }

    #[tokio::test]
    async fn remove_is_idempotent() {
        let indexer = indexer();
        indexer.index_profile(3, &profile()).await.unwrap();
        indexer.remove_profile(3).await.unwrap();
        indexer.remove_profile(3).await.unwrap();
        assert!(indexer
            .index()
            .get(Partition::Profiles, 3)
            .await
            .unwrap()
            .is_none());
    }
}
