//! Role-to-title affinity ladder.
//!
//! A coarse, ordered rule ladder that cheaply rejects obviously unrelated
//! roles before any skill comparison is spent on them. First applicable rung
//! wins; each rung scores at or below the one above it.

use super::normalize::{normalize, word_set};

/// Score when either side carries no role signal at all.
pub const NEUTRAL_SCORE: f64 = 0.5;
/// Exact match after normalization.
pub const EXACT_SCORE: f64 = 1.0;
/// One normalized string contains the other.
pub const SUBSTRING_SCORE: f64 = 0.8;
/// Ceiling for the keyword-overlap rung.
pub const OVERLAP_CAP: f64 = 0.7;
/// Boost applied to the raw overlap ratio before capping.
const OVERLAP_BOOST: f64 = 1.2;
/// Related role families per the synonym table.
pub const SYNONYM_SCORE: f64 = 0.6;
/// No rung matched.
pub const UNRELATED_SCORE: f64 = 0.2;

/// Seniority modifiers stripped before keyword overlap; they say nothing
/// about the role domain.
const SENIORITY_STOP_WORDS: &[&str] = &[
    "senior",
    "junior",
    "lead",
    "principal",
    "staff",
    "intern",
    "entry",
    "level",
    "mid",
];

/// Role family -> related family terms.
const ROLE_SYNONYMS: &[(&str, &[&str])] = &[
    ("developer", &["engineer", "programmer", "coder"]),
    ("engineer", &["developer", "programmer"]),
    ("analyst", &["specialist", "consultant"]),
    ("manager", &["lead", "director", "head"]),
];

/// Scores how well a candidate's stated role aligns with a requisition title.
///
/// Returns a value in `[0, 1]` following the ladder:
/// exact (1.0) > substring (0.8) > keyword overlap (<= 0.7) > synonym (0.6)
/// > unrelated (0.2), with 0.5 when either side is empty.
pub fn role_affinity(candidate_role: &str, requisition_title: &str) -> f64 {
    let role = normalize(candidate_role);
    let title = normalize(requisition_title);

    if role.is_empty() || title.is_empty() {
        return NEUTRAL_SCORE;
    }

    if role == title {
        return EXACT_SCORE;
    }

    if role.contains(&title) || title.contains(&role) {
        return SUBSTRING_SCORE;
    }

    let role_words = word_set(&role);
    let title_words = word_set(&title);

    let role_keywords: std::collections::HashSet<&str> = role_words
        .iter()
        .copied()
        .filter(|w| !SENIORITY_STOP_WORDS.contains(w))
        .collect();
    let title_keywords: std::collections::HashSet<&str> = title_words
        .iter()
        .copied()
        .filter(|w| !SENIORITY_STOP_WORDS.contains(w))
        .collect();

    let overlap = role_keywords.intersection(&title_keywords).count();
    if overlap > 0 {
        let larger = role_keywords.len().max(title_keywords.len()).max(1);
        let ratio = overlap as f64 / larger as f64;
        return OVERLAP_CAP.min(ratio * OVERLAP_BOOST);
    }

    // Synonym lookup runs on the unstripped word sets: a stop word like
    // "lead" is a legitimate family term here.
    for (family, related) in ROLE_SYNONYMS {
        let family_in_role = role_words.contains(family);
        let family_in_title = title_words.contains(family);
        let related_in_role = related.iter().any(|term| role_words.contains(term));
        let related_in_title = related.iter().any(|term| title_words.contains(term));

        if (family_in_role && related_in_title) || (family_in_title && related_in_role) {
            return SYNONYM_SCORE;
        }
    }

    UNRELATED_SCORE
}
