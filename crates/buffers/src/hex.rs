//! Hexadecimal encoding and decoding.

use crate::BufferError;

const LOWER: &[u8; 16] = b"0123456789abcdef";
const UPPER: &[u8; 16] = b"0123456789ABCDEF";

fn encode_with(bytes: &[u8], digits: &[u8; 16]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for &byte in bytes {
        out.push(digits[(byte >> 4) as usize] as char);
        out.push(digits[(byte & 0x0f) as usize] as char);
    }
    out
}

/// Encodes bytes as lowercase hex, two digits per byte.
///
/// # Example
///
/// ```
/// use cryptobuf_buffers::encode_hex_lower;
///
/// assert_eq!(encode_hex_lower(&[0x00, 0xff, 0x10]), "00ff10");
/// ```
pub fn encode_hex_lower(bytes: &[u8]) -> String {
    encode_with(bytes, LOWER)
}

/// Encodes bytes as uppercase hex, two digits per byte.
///
/// # Example
///
/// ```
/// use cryptobuf_buffers::encode_hex_upper;
///
/// assert_eq!(encode_hex_upper(&[0xde, 0xad]), "DEAD");
/// ```
pub fn encode_hex_upper(bytes: &[u8]) -> String {
    encode_with(bytes, UPPER)
}

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Decodes a hex string of either case.
///
/// The whole input is validated before anything is returned; a malformed
/// string never yields a partial result.
///
/// # Errors
///
/// - [`BufferError::OddHexLength`] if the input has an odd number of bytes.
/// - [`BufferError::InvalidHexDigit`] for the first character outside `[0-9a-fA-F]`.
///
/// # Example
///
/// ```
/// use cryptobuf_buffers::decode_hex;
///
/// assert_eq!(decode_hex("00Ff10").unwrap(), vec![0x00, 0xff, 0x10]);
/// assert!(decode_hex("abc").is_err());
/// ```
pub fn decode_hex(value: &str) -> Result<Vec<u8>, BufferError> {
    let bytes = value.as_bytes();
    if bytes.len() % 2 != 0 {
        return Err(BufferError::OddHexLength { len: bytes.len() });
    }

    let invalid = |index: usize| BufferError::InvalidHexDigit {
        // Non-ASCII input: the first byte of a multi-byte char is hit first.
        ch: value[index..].chars().next().unwrap_or(char::REPLACEMENT_CHARACTER),
        index,
    };

    let mut out = Vec::with_capacity(bytes.len() / 2);
    for (i, pair) in bytes.chunks_exact(2).enumerate() {
        let hi = nibble(pair[0]).ok_or_else(|| invalid(i * 2))?;
        let lo = nibble(pair[1]).ok_or_else(|| invalid(i * 2 + 1))?;
        out.push((hi << 4) | lo);
    }
    Ok(out)
}
