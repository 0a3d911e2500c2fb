//! Structured records exchanged with the upstream parser and produced by the
//! matching engine.
//!
//! The schemas here are the whole contract with the parser: absent or null
//! fields deserialize into empty collections / zero defaults, so the scoring
//! code never branches on "key missing" versus "key null". Experience fields
//! are unsigned, which rejects negative values at the boundary instead of
//! coercing them.

mod category;

pub use category::RoleCategory;

use serde::{Deserialize, Deserializer, Serialize};

/// Treats an explicit `null` like an absent key: both collapse to the
/// field's default instead of failing deserialization.
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Structured candidate record, immutable once produced by the parser.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    /// Free-text role statement, e.g. "Backend Developer".
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub role_category: Option<RoleCategory>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub experience_years: u32,
    #[serde(default, deserialize_with = "null_default")]
    pub languages: Vec<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub project_scope: Vec<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub customer: Vec<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub education: Vec<String>,
    /// One summary line per prior engagement.
    #[serde(default, deserialize_with = "null_default")]
    pub work_experience: Vec<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub certifications: Vec<String>,
}

/// Structured job record, immutable once produced by the parser.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobRequisition {
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub job_category: Option<RoleCategory>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub required_skills: Vec<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub preferred_skills: Vec<String>,
    /// Zero means "no minimum".
    #[serde(default, deserialize_with = "null_default")]
    pub experience_required: u32,
    /// Empty means "no minimum".
    #[serde(default, deserialize_with = "null_default")]
    pub education_required: Vec<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub responsibilities: Vec<String>,
}

/// Skill-tier comparison detail.
///
/// The matched/missing lists preserve the requisition's original casing; only
/// the comparison itself is case-folded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillMatch {
    /// Combined tier score, `0.7 * required + 0.3 * preferred`, 2 decimals.
    pub score: f64,
    pub required_score: f64,
    pub preferred_score: f64,
    pub required_matches: Vec<String>,
    pub required_missing: Vec<String>,
    pub preferred_matches: Vec<String>,
    pub preferred_missing: Vec<String>,
}

/// Outcome of one pairwise comparison. Produced fresh per call, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Weighted aggregate in `[0, 1]`, rounded to 2 decimals.
    pub match_score: f64,
    /// Role-ladder score that fed the aggregate.
    pub role_match_score: f64,
    pub skill_match: SkillMatch,
    pub experience_match: bool,
    pub education_match: bool,
    /// Human-readable guidance; never empty.
    pub recommendations: Vec<String>,
}
