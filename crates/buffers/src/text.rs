//! String encoding utilities for UTF-8 and UTF-16.
//!
//! Decoding is strict throughout: malformed input is an error, never a
//! U+FFFD substitution. No byte order mark is written or stripped.

use crate::BufferError;

/// Converts a string to a vector of UTF-8 bytes.
///
/// # Example
///
/// ```
/// use cryptobuf_buffers::utf8;
///
/// assert_eq!(utf8("hello"), b"hello".to_vec());
/// assert_eq!(utf8("日本"), vec![0xE6, 0x97, 0xA5, 0xE6, 0x9C, 0xAC]);
/// ```
pub fn utf8(s: &str) -> Vec<u8> {
    s.as_bytes().to_vec()
}

/// Converts a string to UTF-16 code units in little-endian byte order.
///
/// # Example
///
/// ```
/// use cryptobuf_buffers::utf16le;
///
/// assert_eq!(utf16le("Hi"), vec![0x48, 0x00, 0x69, 0x00]);
/// ```
pub fn utf16le(s: &str) -> Vec<u8> {
    s.encode_utf16().flat_map(u16::to_le_bytes).collect()
}

/// Converts a string to UTF-16 code units in big-endian byte order.
///
/// # Example
///
/// ```
/// use cryptobuf_buffers::utf16be;
///
/// assert_eq!(utf16be("Hi"), vec![0x00, 0x48, 0x00, 0x69]);
/// ```
pub fn utf16be(s: &str) -> Vec<u8> {
    s.encode_utf16().flat_map(u16::to_be_bytes).collect()
}

/// Decodes UTF-8 bytes into an owned string.
///
/// # Errors
///
/// [`BufferError::InvalidUtf8`] carrying the length of the valid prefix.
pub fn decode_utf8(bytes: &[u8]) -> Result<String, BufferError> {
    std::str::from_utf8(bytes)
        .map(str::to_owned)
        .map_err(|e| BufferError::InvalidUtf8 {
            valid_up_to: e.valid_up_to(),
        })
}

/// Decodes little-endian UTF-16 bytes into an owned string.
///
/// # Example
///
/// ```
/// use cryptobuf_buffers::decode_utf16le;
///
/// assert_eq!(decode_utf16le(&[0x48, 0x00, 0x69, 0x00]).unwrap(), "Hi");
/// assert!(decode_utf16le(&[0x48]).is_err());
/// ```
pub fn decode_utf16le(bytes: &[u8]) -> Result<String, BufferError> {
    decode_utf16(bytes, u16::from_le_bytes)
}

/// Decodes big-endian UTF-16 bytes into an owned string.
pub fn decode_utf16be(bytes: &[u8]) -> Result<String, BufferError> {
    decode_utf16(bytes, u16::from_be_bytes)
}

fn decode_utf16(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> Result<String, BufferError> {
    if bytes.len() % 2 != 0 {
        return Err(BufferError::OddUtf16Length { len: bytes.len() });
    }

    let units = bytes.chunks_exact(2).map(|pair| unit([pair[0], pair[1]]));
    let mut out = String::with_capacity(bytes.len() / 2);
    let mut offset = 0;
    for decoded in char::decode_utf16(units) {
        match decoded {
            Ok(ch) => {
                out.push(ch);
                offset += ch.len_utf16() * 2;
            }
            Err(_) => return Err(BufferError::UnpairedSurrogate { offset }),
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8() {
        assert_eq!(utf8("hello"), b"hello".to_vec());
        assert_eq!(utf8(""), Vec::<u8>::new());
    }

    #[test]
    fn test_utf16_surrogate_pair() {
        // U+1F600 -> D83D DE00
        assert_eq!(utf16le("\u{1F600}"), vec![0x3D, 0xD8, 0x00, 0xDE]);
        assert_eq!(utf16be("\u{1F600}"), vec![0xD8, 0x3D, 0xDE, 0x00]);
    }

    #[test]
    fn test_decode_utf8_invalid() {
        assert_eq!(
            decode_utf8(&[b'o', b'k', 0xff]),
            Err(BufferError::InvalidUtf8 { valid_up_to: 2 })
        );
    }

    #[test]
    fn test_decode_utf16_odd_length() {
        assert_eq!(
            decode_utf16be(&[0x00, 0x41, 0x00]),
            Err(BufferError::OddUtf16Length { len: 3 })
        );
    }

    #[test]
    fn test_decode_utf16_lone_high_surrogate() {
        // 'A' then a lone D800.
        assert_eq!(
            decode_utf16be(&[0x00, 0x41, 0xD8, 0x00]),
            Err(BufferError::UnpairedSurrogate { offset: 2 })
        );
    }

    #[test]
    fn test_decode_utf16_lone_low_surrogate() {
        assert_eq!(
            decode_utf16le(&[0x00, 0xDC]),
            Err(BufferError::UnpairedSurrogate { offset: 0 })
        );
    }

    #[test]
    fn test_decode_utf16_offset_after_pair() {
        // U+1F600 followed by a lone DC00.
        assert_eq!(
            decode_utf16le(&[0x3D, 0xD8, 0x00, 0xDE, 0x00, 0xDC]),
            Err(BufferError::UnpairedSurrogate { offset: 4 })
        );
    }

    #[test]
    fn test_decode_utf16_keeps_bom() {
        assert_eq!(
            decode_utf16le(&[0xFF, 0xFE, 0x41, 0x00]).unwrap(),
            "\u{FEFF}A"
        );
    }
}
