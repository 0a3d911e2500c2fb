//! Deterministic rule-based matching of one profile against one requisition.
//!
//! The pipeline runs in two phases (see [`MatchEngine::compare`]):
//! the role-affinity ladder first, as a cheap domain check, then skill
//! overlap plus the experience/education gates, aggregated under fixed
//! weights. Everything here is pure and synchronous; embeddings play no part
//! in pairwise scoring.

pub mod engine;
pub mod gates;
pub mod normalize;
pub mod recommend;
pub mod role;
pub mod skills;

pub use engine::{MATCH_WEIGHTS, MatchEngine, SHORT_CIRCUIT_SCORE, Weights};
pub use gates::{education_met, experience_met};
pub use normalize::normalize;
pub use recommend::{ROLE_MISMATCH_THRESHOLD, build_recommendations};
pub use role::role_affinity;
pub use skills::{PREFERRED_TIER_WEIGHT, REQUIRED_TIER_WEIGHT, match_skills};

/// Rounds to two decimal places, the precision every reported score uses.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::round2;

    #[test]
    fn round2_half_away_from_zero() {
        assert_eq!(round2(0.745), 0.75);
        assert_eq!(round2(0.744), 0.74);
        assert_eq!(round2(1.0), 1.0);
    }
}
