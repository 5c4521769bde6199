//! Shared case-insensitive string comparison.
//!
//! Type names, statuses and priorities are free-text labels compared
//! case-insensitively everywhere. Plain ASCII lowering is sufficient for
//! this vocabulary; keeping it in one place keeps the matching semantics
//! identical across the metrics calculator and the repository.

/// Lowercases a label for comparison.
pub fn fold(s: &str) -> String {
    s.to_ascii_lowercase()
}

/// Case-insensitive label equality.
pub fn eq_fold(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}
