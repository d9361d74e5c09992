//! Immutable byte buffers and the operations around them.
//!
//! This crate exposes one capability set, [`CryptographicBufferStatics`],
//! implemented by [`CryptographicBuffer`]:
//!
//! - equality comparison of buffers
//! - cryptographically secure random buffers and numbers
//! - copying bytes into and out of buffers
//! - hex and base64 encoding and decoding
//! - string/binary conversion under UTF-8, UTF-16LE or UTF-16BE
//!
//! Buffers are immutable and reference-counted ([`Buffer`]), so results can
//! be shared across threads freely. Every failure is reported as a
//! [`CryptoBufferError`] whose [`Status`] classifies it as an invalid
//! argument, resource exhaustion, or a generic failure.
//!
//! # Example
//!
//! ```
//! use cryptobuf::{BinaryStringEncoding, CryptographicBuffer, CryptographicBufferStatics};
//!
//! let statics = CryptographicBuffer::system();
//!
//! let text = statics
//!     .convert_string_to_binary("hi", BinaryStringEncoding::Utf16Be)
//!     .unwrap();
//! assert_eq!(statics.encode_to_base64_string(&text), "AGgAaQ==");
//!
//! let random = statics.generate_random(16).unwrap();
//! assert_eq!(random.len(), 16);
//! ```

pub mod abi;
mod buffer;
pub mod config;
mod encoding;
mod error;
pub mod random;
mod statics;

pub use buffer::Buffer;
pub use config::{ConfigError, CryptoBufferConfig, HexCase};
pub use encoding::BinaryStringEncoding;
pub use error::{
    CryptoBufferError, Hresult, Result, Status, E_FAIL, E_INVALIDARG, E_OUTOFMEMORY, S_OK,
};
pub use random::{OsRandom, RandomSource};
pub use statics::{CryptographicBuffer, CryptographicBufferStatics};

pub use cryptobuf_base64::Base64Error;
pub use cryptobuf_buffers::BufferError;
