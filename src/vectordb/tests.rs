use crate::model::RoleCategory;
use crate::vectordb::{
    EmbeddingRecord, InMemoryIndex, IndexError, Partition, RecordMeta, SimilarityIndex,
};

const DIM: usize = 4;

fn record(id: u64, vector: Vec<f32>, category: Option<RoleCategory>) -> EmbeddingRecord {
    EmbeddingRecord::new(
        id,
        vector,
        RecordMeta {
            category,
            skill_count: 3,
            experience_years: 2,
        },
    )
}

#[tokio::test]
async fn upsert_then_get_returns_exact_record() {
    let index = InMemoryIndex::new(DIM);
    index.ensure_collections().await.unwrap();

    let stored = record(7, vec![0.1, 0.2, 0.3, 0.4], Some(RoleCategory::Backend));
    index
        .upsert(Partition::Profiles, stored.clone())
        .await
        .unwrap();

    let fetched = index.get(Partition::Profiles, 7).await.unwrap().unwrap();
    assert_eq!(fetched, stored);
}

#[tokio::test]
async fn upsert_is_last_write_wins() {
    let index = InMemoryIndex::new(DIM);
    index
        .upsert(Partition::Profiles, record(1, vec![1.0, 0.0, 0.0, 0.0], None))
        .await
        .unwrap();
    index
        .upsert(
            Partition::Profiles,
            record(1, vec![0.0, 1.0, 0.0, 0.0], Some(RoleCategory::Qa)),
        )
        .await
        .unwrap();

    let fetched = index.get(Partition::Profiles, 1).await.unwrap().unwrap();
    assert_eq!(fetched.vector, vec![0.0, 1.0, 0.0, 0.0]);
    assert_eq!(fetched.meta.category, Some(RoleCategory::Qa));
    assert_eq!(index.count(Partition::Profiles).await.unwrap(), 1);
}

#[tokio::test]
async fn partitions_are_independent_namespaces() {
    let index = InMemoryIndex::new(DIM);
    index
        .upsert(Partition::Profiles, record(5, vec![1.0, 0.0, 0.0, 0.0], None))
        .await
        .unwrap();

    assert!(index.get(Partition::Requisitions, 5).await.unwrap().is_none());
    assert_eq!(index.count(Partition::Requisitions).await.unwrap(), 0);
}

#[tokio::test]
async fn delete_of_missing_id_is_a_no_op() {
    let index = InMemoryIndex::new(DIM);
    index.delete(Partition::Profiles, 999).await.unwrap();
}

#[tokio::test]
async fn wrong_dimension_is_rejected() {
    let index = InMemoryIndex::new(DIM);
    let err = index
        .upsert(Partition::Profiles, record(1, vec![1.0, 0.0], None))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        IndexError::InvalidDimension {
            expected: DIM,
            actual: 2
        }
    ));
}

#[tokio::test]
async fn query_orders_by_distance_and_respects_limit() {
    let index = InMemoryIndex::new(DIM);
    index
        .upsert(Partition::Requisitions, record(1, vec![1.0, 0.0, 0.0, 0.0], None))
        .await
        .unwrap();
    index
        .upsert(Partition::Requisitions, record(2, vec![0.0, 1.0, 0.0, 0.0], None))
        .await
        .unwrap();
    index
        .upsert(Partition::Requisitions, record(3, vec![0.9, 0.1, 0.0, 0.0], None))
        .await
        .unwrap();

    let hits = index
        .query(Partition::Requisitions, vec![1.0, 0.0, 0.0, 0.0], 2, None)
        .await
        .unwrap();

    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].id, 1);
    assert_eq!(hits[1].id, 3);
    assert!(hits[0].distance <= hits[1].distance);
}

#[tokio::test]
async fn query_filters_by_category() {
    let index = InMemoryIndex::new(DIM);
    index
        .upsert(
            Partition::Requisitions,
            record(1, vec![1.0, 0.0, 0.0, 0.0], Some(RoleCategory::Backend)),
        )
        .await
        .unwrap();
    index
        .upsert(
            Partition::Requisitions,
            record(2, vec![1.0, 0.0, 0.0, 0.0], Some(RoleCategory::Design)),
        )
        .await
        .unwrap();
    index
        .upsert(Partition::Requisitions, record(3, vec![1.0, 0.0, 0.0, 0.0], None))
        .await
        .unwrap();

    let hits = index
        .query(
            Partition::Requisitions,
            vec![1.0, 0.0, 0.0, 0.0],
            10,
            Some(RoleCategory::Backend),
        )
        .await
        .unwrap();

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 1);
}

#[tokio::test]
async fn clear_empties_a_single_partition() {
    let index = InMemoryIndex::new(DIM);
    index
        .upsert(Partition::Profiles, record(1, vec![1.0, 0.0, 0.0, 0.0], None))
        .await
        .unwrap();
    index
        .upsert(Partition::Requisitions, record(1, vec![1.0, 0.0, 0.0, 0.0], None))
        .await
        .unwrap();

    index.clear(Partition::Profiles).await.unwrap();

    assert_eq!(index.count(Partition::Profiles).await.unwrap(), 0);
    assert_eq!(index.count(Partition::Requisitions).await.unwrap(), 1);
}
