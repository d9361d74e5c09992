//! Factory function for creating base64 encoders with custom alphabets.

use crate::alphabet::{Alphabet, STANDARD};
use crate::Base64Error;

/// Creates a base64 encoder function with a custom alphabet and padding character.
///
/// # Arguments
///
/// * `chars` - A 64-character string representing the base64 alphabet. Defaults to standard base64.
/// * `pad` - The padding character. Defaults to `=`. Use an empty string for no padding.
///
/// # Returns
///
/// A function that encodes a `&[u8]` to a base64 `String`.
///
/// # Errors
///
/// Returns an error if `chars` is not a valid alphabet, or if `pad` is longer
/// than one ASCII character.
///
/// # Example
///
/// ```
/// use cryptobuf_base64::create_to_base64;
///
/// let encode = create_to_base64(None, None).unwrap();
/// assert_eq!(encode(b"hello"), "aGVsbG8=");
///
/// let unpadded = create_to_base64(None, Some("")).unwrap();
/// assert_eq!(unpadded(b"hello"), "aGVsbG8");
/// ```
pub fn create_to_base64(
    chars: Option<&str>,
    pad: Option<&str>,
) -> Result<impl Fn(&[u8]) -> String, Base64Error> {
    let alphabet = match chars {
        Some(chars) => Alphabet::new(chars)?,
        None => STANDARD.clone(),
    };
    let pad = match pad.unwrap_or("=").as_bytes() {
        [] => None,
        [p] if p.is_ascii() => Some(*p),
        _ => return Err(Base64Error::InvalidPadCharacter),
    };
    Ok(move |uint8: &[u8]| alphabet.encode(uint8, pad))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_alphabet() {
        let encode = create_to_base64(
            Some("ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_"),
            Some(""),
        )
        .unwrap();
        assert_eq!(encode(&[0xfb, 0xff]), "-_8");
    }

    #[test]
    fn test_invalid_pad() {
        assert!(matches!(
            create_to_base64(None, Some("==")),
            Err(Base64Error::InvalidPadCharacter)
        ));
    }
}
