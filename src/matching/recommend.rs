//! Deterministic recommendation rules.
//!
//! Rules are evaluated in a fixed order and each appends at most one message.
//! Message bodies are opaque templates as far as callers are concerned;
//! localization happens outside this crate.

use crate::model::SkillMatch;

use super::role::SYNONYM_SCORE;

/// Role score below which the whole comparison is short-circuited.
pub const ROLE_MISMATCH_THRESHOLD: f64 = 0.3;
/// Required-tier coverage below which core skills are flagged.
const CORE_SKILL_BAR: f64 = 0.7;
const STRONG_FIT_BAR: f64 = 0.8;
const MODERATE_FIT_BAR: f64 = 0.6;

pub fn role_mismatch_notice() -> String {
    "Candidate role does not align with this requisition; consider positions closer to the stated role".to_string()
}

/// Builds the recommendation list for a full (non-short-circuited)
/// comparison. The returned list is never empty.
pub fn build_recommendations(
    role_score: f64,
    skill_match: &SkillMatch,
    experience_match: bool,
    education_match: bool,
    candidate_years: u32,
    required_years: u32,
) -> Vec<String> {
    let mut out = Vec::new();

    if role_score < ROLE_MISMATCH_THRESHOLD {
        out.push(role_mismatch_notice());
    } else if role_score < SYNONYM_SCORE {
        out.push(
            "Candidate role is related to the requisition title but not a full match".to_string(),
        );
    }

    if !skill_match.required_missing.is_empty() {
        out.push(format!(
            "Required skills to learn: {}",
            skill_match.required_missing.join(", ")
        ));
    }

    if skill_match.required_score < CORE_SKILL_BAR {
        out.push("Core skill coverage falls short of the requisition's requirements".to_string());
    }

    if !experience_match {
        let shortfall = required_years.saturating_sub(candidate_years);
        out.push(format!(
            "Needs {shortfall} more years of experience to meet the requirement"
        ));
    }

    if !education_match {
        out.push("Education background does not meet the stated requirement".to_string());
    }

    if skill_match.score >= STRONG_FIT_BAR {
        out.push("Skill profile is a strong fit for this requisition".to_string());
    } else if skill_match.score >= MODERATE_FIT_BAR {
        out.push("Skill profile is a reasonable fit for this requisition".to_string());
    }

    if out.is_empty() {
        out.push("Profile meets the requisition requirements well".to_string());
    }

    out
}
