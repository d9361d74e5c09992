//! Byte slice comparison utilities.

use subtle::ConstantTimeEq;

/// Compares two byte slices for equality.
///
/// Slices of different length are unequal and return immediately; length is
/// not treated as secret. Slices of equal length are compared in constant
/// time, so the position of the first differing byte does not leak.
///
/// # Example
///
/// ```
/// use cryptobuf_buffers::ct_eq;
///
/// assert!(ct_eq(&[1, 2, 3], &[1, 2, 3]));
/// assert!(!ct_eq(&[1, 2, 3], &[1, 2, 4]));
/// assert!(!ct_eq(&[1, 2], &[1, 2, 3]));
/// ```
pub fn ct_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
