//! Standard base64 encoding function.

use crate::alphabet::STANDARD;
use crate::constants::PAD;

/// Encodes bytes with the standard alphabet and `=` padding.
///
/// # Example
///
/// ```
/// use cryptobuf_base64::to_base64;
///
/// assert_eq!(to_base64(b"hello world"), "aGVsbG8gd29ybGQ=");
/// assert_eq!(to_base64(b""), "");
/// ```
pub fn to_base64(uint8: &[u8]) -> String {
    STANDARD.encode(uint8, Some(PAD))
}
