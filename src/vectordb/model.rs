use serde::{Deserialize, Serialize};

use crate::model::{CandidateProfile, JobRequisition, RoleCategory};

/// Payload field holding the category label. Persisted name: queries filter
/// on it, so it must stay stable across releases.
pub const FIELD_CATEGORY: &str = "category";
/// Payload field holding the record's skill count.
pub const FIELD_SKILL_COUNT: &str = "skill_count";
/// Payload field holding the record's experience years.
pub const FIELD_EXPERIENCE_YEARS: &str = "experience_years";

/// Filterable metadata stored alongside each vector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordMeta {
    pub category: Option<RoleCategory>,
    pub skill_count: u64,
    pub experience_years: u64,
}

impl RecordMeta {
    pub fn from_profile(profile: &CandidateProfile) -> Self {
        Self {
            category: profile.role_category,
            skill_count: profile.skills.len() as u64,
            experience_years: u64::from(profile.experience_years),
        }
    }

    pub fn from_requisition(requisition: &JobRequisition) -> Self {
        Self {
            category: requisition.job_category,
            skill_count: requisition.required_skills.len() as u64,
            experience_years: u64::from(requisition.experience_required),
        }
    }
}

/// One stored embedding. Exactly one record exists per (partition, id);
/// re-embedding replaces it wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddingRecord {
    pub id: u64,
    pub vector: Vec<f32>,
    pub meta: RecordMeta,
}

impl EmbeddingRecord {
    pub fn new(id: u64, vector: Vec<f32>, meta: RecordMeta) -> Self {
        Self { id, vector, meta }
    }
}

/// A raw nearest-neighbor hit as returned by the index.
///
/// `distance` is squared Euclidean over unit-normalized vectors; the
/// retrieval engine converts it to a similarity score.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub id: u64,
    pub distance: f32,
    pub category: Option<RoleCategory>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meta_from_profile_copies_filterable_fields() {
        let profile = CandidateProfile {
            role_category: Some(RoleCategory::Backend),
            experience_years: 6,
            skills: vec!["rust".into(), "sql".into()],
            ..Default::default()
        };
        let meta = RecordMeta::from_profile(&profile);
        assert_eq!(meta.category, Some(RoleCategory::Backend));
        assert_eq!(meta.skill_count, 2);
        assert_eq!(meta.experience_years, 6);
    }

    #[test]
    fn meta_from_requisition_counts_required_tier_only() {
        let requisition = JobRequisition {
            job_category: Some(RoleCategory::Qa),
            required_skills: vec!["selenium".into()],
            preferred_skills: vec!["cypress".into(), "playwright".into()],
            experience_required: 2,
            ..Default::default()
        };
        let meta = RecordMeta::from_requisition(&requisition);
        assert_eq!(meta.skill_count, 1);
        assert_eq!(meta.category, Some(RoleCategory::Qa));
    }
}
