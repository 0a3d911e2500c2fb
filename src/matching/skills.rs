//! Skill-list overlap scoring.

use crate::model::SkillMatch;

use super::normalize::{fuzzy_contains, normalize};
use super::round2;

/// Weight of the required tier in the combined skill score.
pub const REQUIRED_TIER_WEIGHT: f64 = 0.7;
/// Weight of the preferred tier in the combined skill score.
pub const PREFERRED_TIER_WEIGHT: f64 = 0.3;

/// Compares a candidate's skills against a requisition's required and
/// preferred tiers.
///
/// A requisition skill counts as matched when its normalized form and any
/// normalized candidate skill contain each other in either direction. An
/// empty required tier is trivially satisfied (score 1.0); an empty preferred
/// tier contributes nothing (score 0.0).
pub fn match_skills(
    candidate_skills: &[String],
    required_skills: &[String],
    preferred_skills: &[String],
) -> SkillMatch {
    let candidate: Vec<String> = candidate_skills.iter().map(|s| normalize(s)).collect();

    let (required_matches, required_missing) = partition_tier(required_skills, &candidate);
    let (preferred_matches, preferred_missing) = partition_tier(preferred_skills, &candidate);

    let required_score = if required_skills.is_empty() {
        1.0
    } else {
        required_matches.len() as f64 / required_skills.len() as f64
    };
    let preferred_score = if preferred_skills.is_empty() {
        0.0
    } else {
        preferred_matches.len() as f64 / preferred_skills.len() as f64
    };

    let score = REQUIRED_TIER_WEIGHT * required_score + PREFERRED_TIER_WEIGHT * preferred_score;

    SkillMatch {
        score: round2(score),
        required_score: round2(required_score),
        preferred_score: round2(preferred_score),
        required_matches,
        required_missing,
        preferred_matches,
        preferred_missing,
    }
}

/// Splits one requisition tier into matched/missing, preserving the
/// requisition's original casing in both lists.
fn partition_tier(tier: &[String], candidate_normalized: &[String]) -> (Vec<String>, Vec<String>) {
    let mut matched = Vec::new();
    let mut missing = Vec::new();

    for skill in tier {
        let wanted = normalize(skill);
        let hit = candidate_normalized
            .iter()
            .any(|have| fuzzy_contains(have, &wanted));
        if hit {
            matched.push(skill.clone());
        } else {
            missing.push(skill.clone());
        }
    }

    (matched, missing)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn worked_example_from_requisition() {
        let result = match_skills(
            &strings(&["Python", "FastAPI"]),
            &strings(&["python", "docker"]),
            &strings(&["fastapi"]),
        );

        assert_eq!(result.required_matches, strings(&["python"]));
        assert_eq!(result.required_missing, strings(&["docker"]));
        assert_eq!(result.required_score, 0.5);
        assert_eq!(result.preferred_score, 1.0);
        assert_eq!(result.score, 0.65);
    }

    #[test]
    fn empty_required_tier_is_trivially_satisfied() {
        let result = match_skills(&strings(&["Rust"]), &[], &[]);
        assert_eq!(result.required_score, 1.0);
        assert_eq!(result.preferred_score, 0.0);
        assert_eq!(result.score, 0.7);
    }

    #[test]
    fn substring_matching_tolerates_phrasing_variants() {
        let result = match_skills(
            &strings(&["React.js", "PostgreSQL 14"]),
            &strings(&["react", "postgresql"]),
            &[],
        );
        assert_eq!(result.required_score, 1.0);
        assert!(result.required_missing.is_empty());
    }

    #[test]
    fn lists_preserve_requisition_casing() {
        let result = match_skills(&strings(&["python"]), &strings(&["PyThOn", "Docker"]), &[]);
        assert_eq!(result.required_matches, strings(&["PyThOn"]));
        assert_eq!(result.required_missing, strings(&["Docker"]));
    }

    #[test]
    fn scores_stay_in_unit_interval() {
        let result = match_skills(&[], &strings(&["a", "b", "c"]), &strings(&["d", "e"]));
        assert!(result.score >= 0.0 && result.score <= 1.0);
        assert_eq!(result.required_score, 0.0);
        assert_eq!(result.preferred_score, 0.0);
    }
}
