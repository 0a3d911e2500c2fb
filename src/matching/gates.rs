//! Boolean threshold gates for experience and education.

use super::normalize::{fuzzy_contains, normalize};

/// Experience gate: passes when the requisition sets no minimum (zero) or the
/// candidate meets it.
pub fn experience_met(candidate_years: u32, required_years: u32) -> bool {
    required_years == 0 || candidate_years >= required_years
}

/// Education gate: passes when the requisition lists no requirement, or any
/// required entry and any candidate entry contain each other after
/// normalization.
pub fn education_met(candidate_education: &[String], required_education: &[String]) -> bool {
    if required_education.is_empty() {
        return true;
    }

    let candidate: Vec<String> = candidate_education.iter().map(|e| normalize(e)).collect();

    required_education.iter().any(|required| {
        let wanted = normalize(required);
        candidate.iter().any(|have| fuzzy_contains(have, &wanted))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn zero_requirement_always_passes() {
        assert!(experience_met(0, 0));
        assert!(experience_met(7, 0));
    }

    #[test]
    fn experience_is_a_simple_threshold() {
        assert!(experience_met(5, 5));
        assert!(experience_met(6, 5));
        assert!(!experience_met(3, 5));
    }

    #[test]
    fn empty_education_requirement_passes() {
        assert!(education_met(&[], &[]));
        assert!(education_met(&strings(&["High school"]), &[]));
    }

    #[test]
    fn education_matches_on_substring_either_direction() {
        let candidate = strings(&["Bachelor of Computer Science, HUST"]);
        assert!(education_met(&candidate, &strings(&["bachelor"])));
        assert!(education_met(
            &strings(&["Bachelor"]),
            &strings(&["Bachelor of Science"])
        ));
        assert!(!education_met(&candidate, &strings(&["PhD"])));
    }

    #[test]
    fn no_candidate_education_fails_a_real_requirement() {
        assert!(!education_met(&[], &strings(&["Bachelor"])));
    }
}
