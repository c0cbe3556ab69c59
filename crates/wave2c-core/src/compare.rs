//! Exact byte-sequence comparison.

/// Returns true if both slices have the same length and the same content.
///
/// Allocation capacity of the backing storage plays no part; two logically
/// identical sequences always compare equal.
pub fn bytes_equal(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).all(|(x, y)| x == y)
}
