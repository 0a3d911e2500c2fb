use std::collections::HashMap;

use qdrant_client::Qdrant;
use qdrant_client::qdrant::{
    Condition, CountPointsBuilder, CreateCollectionBuilder, DeletePointsBuilder, Distance, Filter,
    GetPointsBuilder, PointStruct, PointsIdsList, ScoredPoint, SearchPointsBuilder,
    UpsertPointsBuilder, Value, VectorParamsBuilder, VectorsOutput, vector_output,
};
use tracing::{debug, info};

use crate::model::RoleCategory;

use super::error::IndexError;
use super::model::{
    EmbeddingRecord, FIELD_CATEGORY, FIELD_EXPERIENCE_YEARS, FIELD_SKILL_COUNT, RecordMeta,
    SearchHit,
};
use super::{CategoryFilter, Partition};

/// Async interface over the two-partition similarity index.
///
/// Implementations provide nearest-neighbor search with server-side category
/// filtering. Writes are last-write-wins per (partition, id); deletes of
/// missing ids are no-ops. A query may miss writes issued concurrently with
/// it (eventual visibility).
pub trait SimilarityIndex: Send + Sync {
    /// Creates both partition collections if they do not exist yet.
    fn ensure_collections(
        &self,
    ) -> impl std::future::Future<Output = Result<(), IndexError>> + Send;

    /// Inserts or wholesale-replaces one record.
    fn upsert(
        &self,
        partition: Partition,
        record: EmbeddingRecord,
    ) -> impl std::future::Future<Output = Result<(), IndexError>> + Send;

    /// Fetches one record's vector and metadata.
    fn get(
        &self,
        partition: Partition,
        id: u64,
    ) -> impl std::future::Future<Output = Result<Option<EmbeddingRecord>, IndexError>> + Send;

    /// Removes one record; missing ids are tolerated.
    fn delete(
        &self,
        partition: Partition,
        id: u64,
    ) -> impl std::future::Future<Output = Result<(), IndexError>> + Send;

    /// Returns up to `limit` nearest neighbors of `query`, restricted to
    /// `category` when provided. Hits carry squared-L2 distances.
    fn query(
        &self,
        partition: Partition,
        query: Vec<f32>,
        limit: u64,
        category: CategoryFilter,
    ) -> impl std::future::Future<Output = Result<Vec<SearchHit>, IndexError>> + Send;

    /// Removes every record in the partition.
    fn clear(
        &self,
        partition: Partition,
    ) -> impl std::future::Future<Output = Result<(), IndexError>> + Send;

    /// Number of records currently stored in the partition.
    fn count(
        &self,
        partition: Partition,
    ) -> impl std::future::Future<Output = Result<u64, IndexError>> + Send;
}

// Lets the indexing and retrieval halves share one backend.
impl<T: SimilarityIndex + ?Sized> SimilarityIndex for std::sync::Arc<T> {
    async fn ensure_collections(&self) -> Result<(), IndexError> {
        (**self).ensure_collections().await
    }

    async fn upsert(&self, partition: Partition, record: EmbeddingRecord) -> Result<(), IndexError> {
        (**self).upsert(partition, record).await
    }

    async fn get(
        &self,
        partition: Partition,
        id: u64,
    ) -> Result<Option<EmbeddingRecord>, IndexError> {
        (**self).get(partition, id).await
    }

    async fn delete(&self, partition: Partition, id: u64) -> Result<(), IndexError> {
        (**self).delete(partition, id).await
    }

    async fn query(
        &self,
        partition: Partition,
        query: Vec<f32>,
        limit: u64,
        category: CategoryFilter,
    ) -> Result<Vec<SearchHit>, IndexError> {
        (**self).query(partition, query, limit, category).await
    }

    async fn clear(&self, partition: Partition) -> Result<(), IndexError> {
        (**self).clear(partition).await
    }

    async fn count(&self, partition: Partition) -> Result<u64, IndexError> {
        (**self).count(partition).await
    }
}

#[derive(Clone)]
/// Qdrant-backed similarity index.
///
/// Collections use cosine distance; since the embedding model returns
/// unit-normalized vectors, the cosine score `s` maps exactly to the squared
/// Euclidean distance `2 * (1 - s)` that [`SearchHit`] carries.
pub struct QdrantIndex {
    client: Qdrant,
    url: String,
    dim: u64,
}

impl QdrantIndex {
    /// Connects to a Qdrant endpoint; `dim` fixes the vector dimension for
    /// both partitions.
    pub async fn new(url: &str, dim: u64) -> Result<Self, IndexError> {
        let client = Qdrant::from_url(url)
            .build()
            .map_err(|e| IndexError::ConnectionFailed {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            url: url.to_string(),
            dim,
        })
    }

    /// Returns the configured URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Performs a basic health check request.
    pub async fn health_check(&self) -> Result<(), IndexError> {
        self.client
            .health_check()
            .await
            .map_err(|e| IndexError::ConnectionFailed {
                url: self.url.clone(),
                message: e.to_string(),
            })?;
        Ok(())
    }

    async fn create_collection(&self, name: &str) -> Result<(), IndexError> {
        let vectors_config = VectorParamsBuilder::new(self.dim, Distance::Cosine);

        self.client
            .create_collection(
                CreateCollectionBuilder::new(name)
                    .vectors_config(vectors_config)
                    .on_disk_payload(true),
            )
            .await
            .map_err(|e| IndexError::CollectionFailed {
                collection: name.to_string(),
                message: e.to_string(),
            })?;

        info!(collection = name, dim = self.dim, "created collection");
        Ok(())
    }

    async fn ensure_collection(&self, name: &str) -> Result<(), IndexError> {
        let exists =
            self.client
                .collection_exists(name)
                .await
                .map_err(|e| IndexError::CollectionFailed {
                    collection: name.to_string(),
                    message: e.to_string(),
                })?;

        if !exists {
            self.create_collection(name).await?;
        }

        Ok(())
    }

    fn payload_for(meta: &RecordMeta) -> HashMap<String, Value> {
        let mut payload: HashMap<String, Value> = HashMap::new();
        if let Some(category) = meta.category {
            payload.insert(FIELD_CATEGORY.to_string(), category.as_str().into());
        }
        payload.insert(
            FIELD_SKILL_COUNT.to_string(),
            (meta.skill_count as i64).into(),
        );
        payload.insert(
            FIELD_EXPERIENCE_YEARS.to_string(),
            (meta.experience_years as i64).into(),
        );
        payload
    }

    fn meta_from_payload(payload: &HashMap<String, Value>) -> RecordMeta {
        let category = payload
            .get(FIELD_CATEGORY)
            .and_then(|v| v.as_str())
            .and_then(|s| RoleCategory::from_label(s));

        let skill_count = payload
            .get(FIELD_SKILL_COUNT)
            .and_then(|v| v.as_integer())
            .map(|i| i.max(0) as u64)
            .unwrap_or(0);

        let experience_years = payload
            .get(FIELD_EXPERIENCE_YEARS)
            .and_then(|v| v.as_integer())
            .map(|i| i.max(0) as u64)
            .unwrap_or(0);

        RecordMeta {
            category,
            skill_count,
            experience_years,
        }
    }

    fn hit_from_scored_point(point: ScoredPoint) -> Option<SearchHit> {
        use qdrant_client::qdrant::point_id::PointIdOptions;

        let id = match point.id.and_then(|pid| pid.point_id_options) {
            Some(PointIdOptions::Num(n)) => n,
            _ => return None,
        };

        let category = point
            .payload
            .get(FIELD_CATEGORY)
            .and_then(|v| v.as_str())
            .and_then(|s| RoleCategory::from_label(s));

        // Cosine score -> squared L2 over unit vectors.
        let distance = 2.0 * (1.0 - point.score);

        Some(SearchHit {
            id,
            distance,
            category,
        })
    }

    /// Extracts the default dense vector from a retrieved point's output-side
    /// vectors message. Named and sparse vectors are not used here.
    fn dense_vector(vectors: VectorsOutput) -> Option<Vec<f32>> {
        vectors.get_vector().and_then(|v| match v {
            vector_output::Vector::Dense(dense) => Some(dense.data),
            _ => None,
        })
    }
}

impl SimilarityIndex for QdrantIndex {
    async fn ensure_collections(&self) -> Result<(), IndexError> {
        self.ensure_collection(Partition::Profiles.collection_name())
            .await?;
        self.ensure_collection(Partition::Requisitions.collection_name())
            .await?;
        Ok(())
    }

    async fn upsert(&self, partition: Partition, record: EmbeddingRecord) -> Result<(), IndexError> {
        if record.vector.len() as u64 != self.dim {
            return Err(IndexError::InvalidDimension {
                expected: self.dim as usize,
                actual: record.vector.len(),
            });
        }

        let collection = partition.collection_name();
        let point = PointStruct::new(record.id, record.vector, Self::payload_for(&record.meta));

        // wait=true gives read-after-write for the caller that just indexed.
        self.client
            .upsert_points(UpsertPointsBuilder::new(collection, vec![point]).wait(true))
            .await
            .map_err(|e| IndexError::UpsertFailed {
                collection: collection.to_string(),
                message: e.to_string(),
            })?;

        debug!(%partition, id = record.id, "upserted embedding record");
        Ok(())
    }

    async fn get(
        &self,
        partition: Partition,
        id: u64,
    ) -> Result<Option<EmbeddingRecord>, IndexError> {
        let collection = partition.collection_name();

        let response = self
            .client
            .get_points(
                GetPointsBuilder::new(collection, vec![id.into()])
                    .with_vectors(true)
                    .with_payload(true),
            )
            .await
            .map_err(|e| IndexError::FetchFailed {
                collection: collection.to_string(),
                message: e.to_string(),
            })?;

        let Some(point) = response.result.into_iter().next() else {
            return Ok(None);
        };

        let meta = Self::meta_from_payload(&point.payload);

        let vector = point.vectors.and_then(Self::dense_vector);

        let Some(vector) = vector else {
            return Err(IndexError::FetchFailed {
                collection: collection.to_string(),
                message: format!("point {id} has no dense vector"),
            });
        };

        Ok(Some(EmbeddingRecord::new(id, vector, meta)))
    }

    async fn delete(&self, partition: Partition, id: u64) -> Result<(), IndexError> {
        let collection = partition.collection_name();

        let points = PointsIdsList {
            ids: vec![id.into()],
        };

        self.client
            .delete_points(
                DeletePointsBuilder::new(collection)
                    .points(points)
                    .wait(true),
            )
            .await
            .map_err(|e| IndexError::DeleteFailed {
                collection: collection.to_string(),
                message: e.to_string(),
            })?;

        Ok(())
    }

    async fn query(
        &self,
        partition: Partition,
        query: Vec<f32>,
        limit: u64,
        category: CategoryFilter,
    ) -> Result<Vec<SearchHit>, IndexError> {
        let collection = partition.collection_name();

        let mut builder = SearchPointsBuilder::new(collection, query, limit).with_payload(true);

        if let Some(category) = category {
            let filter = Filter::must([Condition::matches(
                FIELD_CATEGORY,
                category.as_str().to_string(),
            )]);
            builder = builder.filter(filter);
        }

        let response =
            self.client
                .search_points(builder)
                .await
                .map_err(|e| IndexError::SearchFailed {
                    collection: collection.to_string(),
                    message: e.to_string(),
                })?;

        Ok(response
            .result
            .into_iter()
            .filter_map(Self::hit_from_scored_point)
            .collect())
    }

    async fn clear(&self, partition: Partition) -> Result<(), IndexError> {
        let collection = partition.collection_name();

        self.client
            .delete_collection(collection)
            .await
            .map_err(|e| IndexError::DeleteFailed {
                collection: collection.to_string(),
                message: e.to_string(),
            })?;

        self.create_collection(collection).await
    }

    async fn count(&self, partition: Partition) -> Result<u64, IndexError> {
        let collection = partition.collection_name();

        let response = self
            .client
            .count(CountPointsBuilder::new(collection).exact(true))
            .await
            .map_err(|e| IndexError::CountFailed {
                collection: collection.to_string(),
                message: e.to_string(),
            })?;

        Ok(response.result.map(|r| r.count).unwrap_or(0))
    }
}
