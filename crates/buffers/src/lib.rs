//! Byte-level primitives for cryptobuf.
//!
//! This crate holds the small, dependency-light pieces the `cryptobuf`
//! facade is built from.
//!
//! # Overview
//!
//! - [`ct_eq`] - Constant-time byte slice equality
//! - [`encode_hex_lower`] / [`encode_hex_upper`] / [`decode_hex`] - Hex codec
//! - [`utf16le`] / [`utf16be`] / [`decode_utf16le`] / [`decode_utf16be`] - UTF-16 transcoding
//! - [`Octets`] - Truncated hex formatting for debug output
//!
//! # Example
//!
//! ```
//! use cryptobuf_buffers::{ct_eq, decode_hex, encode_hex_lower, utf16be};
//!
//! let bytes = decode_hex("00ff10").unwrap();
//! assert_eq!(encode_hex_lower(&bytes), "00ff10");
//! assert!(ct_eq(&bytes, &[0x00, 0xff, 0x10]));
//! assert_eq!(utf16be("A"), vec![0x00, 0x41]);
//! ```

mod cmp;
mod hex;
mod octets;
mod text;

pub use cmp::ct_eq;
pub use hex::{decode_hex, encode_hex_lower, encode_hex_upper};
pub use octets::Octets;
pub use text::{decode_utf16be, decode_utf16le, decode_utf8, utf16be, utf16le, utf8};

use thiserror::Error;

/// Error type for buffer transcoding operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    /// Hex input has an odd number of digits.
    #[error("hex string has odd length {len}")]
    OddHexLength { len: usize },
    /// Hex input contains a character outside `[0-9a-fA-F]`.
    #[error("invalid hex digit {ch:?} at index {index}")]
    InvalidHexDigit { ch: char, index: usize },
    /// Invalid UTF-8 sequence.
    #[error("invalid UTF-8 sequence after {valid_up_to} valid bytes")]
    InvalidUtf8 { valid_up_to: usize },
    /// UTF-16 input is not a whole number of code units.
    #[error("UTF-16 input has odd byte length {len}")]
    OddUtf16Length { len: usize },
    /// UTF-16 input contains a lone high or low surrogate.
    #[error("unpaired UTF-16 surrogate at byte offset {offset}")]
    UnpairedSurrogate { offset: usize },
}
