/// Case-folds and trims a free-text token for comparison.
///
/// Comparison-only: every user-facing list keeps the original casing.
pub fn normalize(token: &str) -> String {
    token.trim().to_lowercase()
}

/// Splits a normalized string into its whitespace-separated word set.
pub fn word_set(normalized: &str) -> std::collections::HashSet<&str> {
    normalized.split_whitespace().collect()
}

/// Bidirectional substring test on already-normalized tokens.
///
/// Deliberately permissive so phrasing variants ("React" vs "React.js",
/// "Bachelor" vs "Bachelor of Science") still count as a match.
pub fn fuzzy_contains(a: &str, b: &str) -> bool {
    !a.is_empty() && !b.is_empty() && (a.contains(b) || b.contains(a))
}
