//! In-memory index with the same semantics as the Qdrant backend.

use std::collections::HashMap;

use parking_lot::RwLock;

use super::client::SimilarityIndex;
use super::error::IndexError;
use super::model::{EmbeddingRecord, SearchHit};
use super::{CategoryFilter, Partition};

/// Squared Euclidean distance; the distance unit every [`SearchHit`] uses.
pub fn squared_l2_distance(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y) * (x - y)).sum()
}

/// HashMap-backed [`SimilarityIndex`] used in tests and examples.
///
/// Unlike the eventual-visibility Qdrant backend, writes here are immediately
/// visible to queries.
pub struct InMemoryIndex {
    dim: usize,
    partitions: RwLock<HashMap<Partition, HashMap<u64, EmbeddingRecord>>>,
}

impl InMemoryIndex {
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            partitions: RwLock::new(HashMap::new()),
        }
    }
}

impl SimilarityIndex for InMemoryIndex {
    async fn ensure_collections(&self) -> Result<(), IndexError> {
        let mut partitions = self.partitions.write();
        partitions.entry(Partition::Profiles).or_default();
        partitions.entry(Partition::Requisitions).or_default();
        Ok(())
    }

    async fn upsert(&self, partition: Partition, record: EmbeddingRecord) -> Result<(), IndexError> {
        if record.vector.len() != self.dim {
            return Err(IndexError::InvalidDimension {
                expected: self.dim,
                actual: record.vector.len(),
            });
        }

        self.partitions
            .write()
            .entry(partition)
            .or_default()
            .insert(record.id, record);
        Ok(())
    }

    async fn get(
        &self,
        partition: Partition,
        id: u64,
    ) -> Result<Option<EmbeddingRecord>, IndexError> {
        Ok(self
            .partitions
            .read()
            .get(&partition)
            .and_then(|records| records.get(&id))
            .cloned())
    }

    async fn delete(&self, partition: Partition, id: u64) -> Result<(), IndexError> {
        if let Some(records) = self.partitions.write().get_mut(&partition) {
            records.remove(&id);
        }
        Ok(())
    }

    async fn query(
        &self,
        partition: Partition,
        query: Vec<f32>,
        limit: u64,
        category: CategoryFilter,
    ) -> Result<Vec<SearchHit>, IndexError> {
        let partitions = self.partitions.read();
        let records = partitions.get(&partition);

        let mut hits: Vec<SearchHit> = records
            .into_iter()
            .flat_map(|records| records.values())
            .filter(|record| category.is_none() || record.meta.category == category)
            .map(|record| SearchHit {
                id: record.id,
                distance: squared_l2_distance(&query, &record.vector),
                category: record.meta.category,
            })
            .collect();

        hits.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.id.cmp(&b.id))
        });
        hits.truncate(limit as usize);

        Ok(hits)
    }

    async fn clear(&self, partition: Partition) -> Result<(), IndexError> {
        if let Some(records) = self.partitions.write().get_mut(&partition) {
            records.clear();
        }
        Ok(())
    }

    async fn count(&self, partition: Partition) -> Result<u64, IndexError> {
        Ok(self
            .partitions
            .read()
            .get(&partition)
            .map(|records| records.len() as u64)
            .unwrap_or(0))
    }
}
