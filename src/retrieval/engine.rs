use tracing::debug;

use crate::constants::{DEFAULT_SIMILARITY_FLOOR, DEFAULT_TOP_K};
use crate::model::RoleCategory;
use crate::vectordb::{Partition, SimilarityIndex};

use super::error::RetrievalError;

/// Tuning knobs for a retrieval query.
#[derive(Debug, Clone)]
pub struct RetrievalOptions {
    /// Maximum number of counterparts fetched from the index.
    pub top_k: u64,
    /// Hits below this similarity are dropped from the result.
    pub similarity_floor: f64,
    /// Restrict counterparts to the query entity's role category.
    pub filter_by_category: bool,
}

impl Default for RetrievalOptions {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            similarity_floor: DEFAULT_SIMILARITY_FLOOR,
            filter_by_category: true,
        }
    }
}

impl RetrievalOptions {
    fn validate(&self) -> Result<(), RetrievalError> {
        if self.top_k == 0 {
            return Err(RetrievalError::InvalidOptions {
                reason: "top_k must be at least 1".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.similarity_floor) {
            return Err(RetrievalError::InvalidOptions {
                reason: format!(
                    "similarity_floor must be within [0, 1], got {}",
                    self.similarity_floor
                ),
            });
        }
        Ok(())
    }
}

/// One counterpart surfaced by a retrieval query.
#[derive(Debug, Clone, PartialEq)]
pub struct Counterpart {
    /// Entity id in the opposite partition.
    pub id: u64,
    /// Similarity in [0, 1]; 1 means identical embedding direction.
    pub similarity: f64,
    /// Role category stored with the counterpart, if any.
    pub category: Option<RoleCategory>,
}

/// Finds nearest counterparts across the profile and requisition partitions.
pub struct RetrievalEngine<I> {
    index: I,
}

impl<I: SimilarityIndex> RetrievalEngine<I> {
    pub fn new(index: I) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &I {
        &self.index
    }

    /// Requisitions most similar to the indexed profile `id`.
    pub async fn requisitions_for_profile(
        &self,
        id: u64,
        options: &RetrievalOptions,
    ) -> Result<Vec<Counterpart>, RetrievalError> {
        self.find_counterparts(Partition::Profiles, id, options).await
    }

    /// Profiles most similar to the indexed requisition `id`.
    pub async fn profiles_for_requisition(
        &self,
        id: u64,
        options: &RetrievalOptions,
    ) -> Result<Vec<Counterpart>, RetrievalError> {
        self.find_counterparts(Partition::Requisitions, id, options)
            .await
    }

    /// Looks up the source entity's vector, then queries the opposite
    /// partition for its nearest neighbors.
    async fn find_counterparts(
        &self,
        partition: Partition,
        id: u64,
        options: &RetrievalOptions,
    ) -> Result<Vec<Counterpart>, RetrievalError> {
        options.validate()?;

        let source = self
            .index
            .get(partition, id)
            .await?
            .ok_or(RetrievalError::NotFound { partition, id })?;

        let category = if options.filter_by_category {
            source.meta.category
        } else {
            None
        };

        let hits = self
            .index
            .query(partition.opposite(), source.vector, options.top_k, category)
            .await?;

        let mut counterparts: Vec<Counterpart> = hits
            .into_iter()
            .map(|hit| Counterpart {
                id: hit.id,
                similarity: similarity_from_distance(hit.distance),
                category: hit.category,
            })
            .filter(|c| c.similarity >= options.similarity_floor)
            .collect();

        counterparts.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.id.cmp(&b.id))
        });

        debug!(
            %partition,
            id,
            top_k = options.top_k,
            returned = counterparts.len(),
            "retrieval query"
        );
        Ok(counterparts)
    }
}

/// Converts squared Euclidean distance over unit vectors into a similarity
/// in [0, 1]. Unit vectors bound the squared distance by 4, and `1 - d/2`
/// recovers cosine similarity rescaled from [-1, 1] onto [0, 1] endpoints
/// before clamping.
fn similarity_from_distance(distance: f32) -> f64 {
    (1.0 - f64::from(distance) / 2.0).clamp(0.0, 1.0)
}
