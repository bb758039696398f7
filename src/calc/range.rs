//! Integer ranges as vectors.

/// Returns `start, start + 1, ..., end - 1`.
///
/// Empty when `end <= start`.
pub fn range(start: i64, end: i64) -> Vec<i64> {
    (start..end).collect()
}
