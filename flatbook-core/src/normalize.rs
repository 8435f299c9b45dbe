//! Canonical form for header labels

/// Normalize a column label for matching: lowercase, runs of whitespace
/// (including non-breaking spaces) collapsed to a single space, leading and
/// trailing whitespace removed.
///
/// Callers stringify non-text labels before normalizing; a missing label is
/// the empty string. Total, never fails.
pub fn normalize(label: &str) -> String {
    // U+00A0 has White_Space=yes, so split_whitespace also folds NBSP runs.
    label
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
