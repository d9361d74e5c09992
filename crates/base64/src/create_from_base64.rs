//! Factory function for creating base64 decoders with custom alphabets.

use crate::alphabet::{Alphabet, STANDARD};
use crate::Base64Error;

/// Creates a base64 decoder function with a custom alphabet.
///
/// Decoding is strict: characters outside the alphabet, `=` anywhere but
/// the end, more than two padding characters, and non-zero unused bits in
/// the final quantum are all rejected.
///
/// # Arguments
///
/// * `chars` - A 64-character string representing the base64 alphabet. Defaults to standard base64.
/// * `no_padding` - When `true`, unpadded input is accepted as well. When
///   `false`, the input length must be a multiple of 4.
///
/// # Example
///
/// ```
/// use cryptobuf_base64::create_from_base64;
///
/// let decode = create_from_base64(None, false).unwrap();
/// assert_eq!(decode("aGVsbG8=").unwrap(), b"hello");
/// assert!(decode("aGVsbG8").is_err());
///
/// let lenient = create_from_base64(None, true).unwrap();
/// assert_eq!(lenient("aGVsbG8").unwrap(), b"hello");
/// ```
pub fn create_from_base64(
    chars: Option<&str>,
    no_padding: bool,
) -> Result<impl Fn(&str) -> Result<Vec<u8>, Base64Error>, Base64Error> {
    let alphabet = match chars {
        Some(chars) => Alphabet::new(chars)?,
        None => STANDARD.clone(),
    };
    Ok(move |encoded: &str| alphabet.decode(encoded, !no_padding))
}
