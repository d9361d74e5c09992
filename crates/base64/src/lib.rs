//! Strict base64 encoding and decoding.
//!
//! The free functions [`to_base64`] and [`from_base64`] use the standard
//! alphabet with mandatory `=` padding. The `create_*` factories build
//! codecs for other alphabets.

mod alphabet;
mod constants;
mod create_from_base64;
mod create_to_base64;
mod from_base64;
mod to_base64;

pub use alphabet::Alphabet;
pub use constants::{ALPHABET, PAD};
pub use create_from_base64::create_from_base64;
pub use create_to_base64::create_to_base64;
pub use from_base64::from_base64;
pub use to_base64::to_base64;

use thiserror::Error;

/// Error type for base64 alphabet construction and decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Base64Error {
    #[error("base64 alphabet must be exactly 64 characters")]
    InvalidCharSetLength,
    #[error("base64 alphabet must be distinct ASCII characters other than '='")]
    InvalidCharSet,
    #[error("base64 padding must be empty or a single ASCII character")]
    InvalidPadCharacter,
    #[error("invalid base64 length {len}")]
    InvalidLength { len: usize },
    #[error("invalid base64 character {ch:?} at index {index}")]
    InvalidCharacter { ch: char, index: usize },
    #[error("misplaced base64 padding at index {index}")]
    InvalidPadding { index: usize },
    #[error("non-zero trailing bits at index {index}")]
    NonZeroTrailingBits { index: usize },
}
