//! Standard base64 decoding function.

use crate::alphabet::STANDARD;

/// Decodes a padded, standard-alphabet base64 string to bytes.
///
/// # Arguments
///
/// * `encoded` - The base64-encoded string to decode.
///
/// # Returns
///
/// The decoded bytes, or an error if the input is invalid.
///
/// # Example
///
/// ```
/// use cryptobuf_base64::from_base64;
///
/// let decoded = from_base64("aGVsbG8gd29ybGQ=").unwrap();
/// assert_eq!(decoded, b"hello world");
/// ```
pub fn from_base64(encoded: &str) -> Result<Vec<u8>, crate::Base64Error> {
    STANDARD.decode(encoded, true)
}
