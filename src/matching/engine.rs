//! Pairwise comparison pipeline.

use tracing::debug;

use crate::model::{CandidateProfile, JobRequisition, MatchResult, SkillMatch};

use super::gates::{education_met, experience_met};
use super::recommend::{ROLE_MISMATCH_THRESHOLD, build_recommendations, role_mismatch_notice};
use super::role::role_affinity;
use super::round2;
use super::skills::match_skills;

/// Aggregate score handed back when the role ladder short-circuits.
pub const SHORT_CIRCUIT_SCORE: f64 = 0.2;

/// Component weights for the aggregate match score.
#[derive(Debug, Clone, Copy)]
pub struct Weights {
    pub role: f64,
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.role + self.skills + self.experience + self.education
    }
}

/// Fixed aggregation weights; must sum to 1.0.
pub const MATCH_WEIGHTS: Weights = Weights {
    role: 0.2,
    skills: 0.5,
    experience: 0.2,
    education: 0.1,
};

/// Deterministic rule-based scorer for one profile/requisition pair.
///
/// `compare` is a pure function of its two inputs: no shared state, no I/O,
/// and it always returns a [`MatchResult`] for structurally valid records.
/// Independent comparisons may run fully in parallel.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchEngine;

impl MatchEngine {
    pub fn new() -> Self {
        Self
    }

    /// Compares a candidate profile against a job requisition.
    ///
    /// When the role ladder scores below [`ROLE_MISMATCH_THRESHOLD`] the
    /// comparison short-circuits: no skill or gate work is done, the result
    /// carries the fixed score [`SHORT_CIRCUIT_SCORE`], every required skill
    /// is reported missing, and a single role-mismatch recommendation is
    /// returned.
    pub fn compare(&self, profile: &CandidateProfile, requisition: &JobRequisition) -> MatchResult {
        let role = profile.role.as_deref().unwrap_or("");
        let title = requisition.job_title.as_deref().unwrap_or("");
        let role_score = role_affinity(role, title);

        if role_score < ROLE_MISMATCH_THRESHOLD {
            debug!(role_score, "role mismatch, short-circuiting comparison");
            return Self::short_circuit(role_score, requisition);
        }

        let skill_match = match_skills(
            &profile.skills,
            &requisition.required_skills,
            &requisition.preferred_skills,
        );
        let experience_match =
            experience_met(profile.experience_years, requisition.experience_required);
        let education_match = education_met(&profile.education, &requisition.education_required);

        let match_score = round2(
            MATCH_WEIGHTS.role * role_score
                + MATCH_WEIGHTS.skills * skill_match.score
                + MATCH_WEIGHTS.experience * f64::from(u8::from(experience_match))
                + MATCH_WEIGHTS.education * f64::from(u8::from(education_match)),
        );

        let recommendations = build_recommendations(
            role_score,
            &skill_match,
            experience_match,
            education_match,
            profile.experience_years,
            requisition.experience_required,
        );

        debug!(
            match_score,
            role_score,
            skill_score = skill_match.score,
            experience_match,
            education_match,
            "pairwise comparison complete"
        );

        MatchResult {
            match_score,
            role_match_score: role_score,
            skill_match,
            experience_match,
            education_match,
            recommendations,
        }
    }

    fn short_circuit(role_score: f64, requisition: &JobRequisition) -> MatchResult {
        MatchResult {
            match_score: SHORT_CIRCUIT_SCORE,
            role_match_score: role_score,
            skill_match: SkillMatch {
                score: 0.0,
                required_score: 0.0,
                preferred_score: 0.0,
                required_matches: vec![],
                required_missing: requisition.required_skills.clone(),
                preferred_matches: vec![],
                preferred_missing: requisition.preferred_skills.clone(),
            },
            experience_match: false,
            education_match: false,
            recommendations: vec![role_mismatch_notice()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn sample_profile() -> CandidateProfile {
        CandidateProfile {
            role: Some("Backend Developer".to_string()),
            experience_years: 4,
            skills: strings(&["Python", "FastAPI", "PostgreSQL"]),
            education: strings(&["Bachelor of Computer Science"]),
            ..Default::default()
        }
    }

    fn sample_requisition() -> JobRequisition {
        JobRequisition {
            job_title: Some("Senior Backend Engineer".to_string()),
            required_skills: strings(&["python", "docker"]),
            preferred_skills: strings(&["fastapi"]),
            experience_required: 3,
            education_required: strings(&["bachelor"]),
            ..Default::default()
        }
    }

    #[test]
    fn weights_sum_to_one() {
        assert!((MATCH_WEIGHTS.sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn full_pipeline_matches_hand_computation() {
        let result = MatchEngine::new().compare(&sample_profile(), &sample_requisition());

        // role 0.6, skill 0.65, experience pass, education pass:
        // 0.2*0.6 + 0.5*0.65 + 0.2 + 0.1 = 0.745 -> 0.75
        assert_eq!(result.role_match_score, 0.6);
        assert_eq!(result.skill_match.score, 0.65);
        assert!(result.experience_match);
        assert!(result.education_match);
        assert_eq!(result.match_score, 0.75);
    }

    #[test]
    fn comparison_is_idempotent() {
        let engine = MatchEngine::new();
        let a = engine.compare(&sample_profile(), &sample_requisition());
        let b = engine.compare(&sample_profile(), &sample_requisition());
        assert_eq!(a, b);
    }

    #[test]
    fn score_stays_in_unit_interval() {
        let empty_profile = CandidateProfile::default();
        let result = MatchEngine::new().compare(&empty_profile, &sample_requisition());
        assert!(result.match_score >= 0.0 && result.match_score <= 1.0);
    }

    #[test]
    fn role_mismatch_short_circuits() {
        let mut profile = sample_profile();
        profile.role = Some("Pastry Chef".to_string());
        let requisition = sample_requisition();

        let result = MatchEngine::new().compare(&profile, &requisition);

        assert_eq!(result.match_score, SHORT_CIRCUIT_SCORE);
        assert_eq!(result.skill_match.score, 0.0);
        assert_eq!(
            result.skill_match.required_missing,
            requisition.required_skills
        );
        assert!(result.skill_match.required_matches.is_empty());
        assert!(!result.experience_match);
        assert!(!result.education_match);
        assert_eq!(result.recommendations.len(), 1);
    }

    #[test]
    fn short_circuit_ignores_otherwise_perfect_inputs() {
        // Skills and gates would all pass; the role ladder alone decides.
        let profile = CandidateProfile {
            role: Some("Accountant".to_string()),
            experience_years: 20,
            skills: strings(&["python", "docker"]),
            ..Default::default()
        };
        let requisition = JobRequisition {
            job_title: Some("Backend Engineer".to_string()),
            required_skills: strings(&["python", "docker"]),
            ..Default::default()
        };

        let result = MatchEngine::new().compare(&profile, &requisition);
        assert_eq!(result.match_score, SHORT_CIRCUIT_SCORE);
    }

    #[test]
    fn missing_role_on_either_side_is_neutral_not_fatal() {
        let profile = CandidateProfile {
            skills: strings(&["python"]),
            ..Default::default()
        };
        let result = MatchEngine::new().compare(&profile, &sample_requisition());
        assert_eq!(result.role_match_score, 0.5);
        assert_ne!(result.match_score, SHORT_CIRCUIT_SCORE);
    }

    #[test]
    fn experience_shortfall_appears_in_recommendations() {
        let mut profile = sample_profile();
        profile.experience_years = 3;
        let mut requisition = sample_requisition();
        requisition.experience_required = 5;

        let result = MatchEngine::new().compare(&profile, &requisition);
        assert!(!result.experience_match);
        assert!(
            result
                .recommendations
                .iter()
                .any(|r| r.contains("2 more years"))
        );
    }
}
