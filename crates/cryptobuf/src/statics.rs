//! The statics capability set and its implementation.

use std::sync::OnceLock;

use cryptobuf_buffers::{
    ct_eq, decode_hex, decode_utf16be, decode_utf16le, decode_utf8, encode_hex_lower,
    encode_hex_upper, utf16be, utf16le, utf8,
};
use tracing::{debug, instrument};

use crate::config::{CryptoBufferConfig, HexCase};
use crate::error::{CryptoBufferError, Result};
use crate::random::{OsRandom, RandomSource};
use crate::{BinaryStringEncoding, Buffer};

/// Stateless operations over [`Buffer`]s.
///
/// Every call is independent. Apart from the two random generators, each
/// operation is a pure function of its arguments. Failures are returned,
/// never panicked, and a failed call produces no output.
pub trait CryptographicBufferStatics {
    /// Byte-wise equality: true iff lengths and contents match.
    fn compare(&self, a: &Buffer, b: &Buffer) -> bool;

    /// A buffer of exactly `length` cryptographically random bytes.
    fn generate_random(&self, length: u32) -> Result<Buffer>;

    /// One uniformly distributed random `u32`.
    fn generate_random_number(&self) -> Result<u32>;

    /// Copies `bytes` into a new buffer.
    fn create_from_byte_array(&self, bytes: &[u8]) -> Result<Buffer>;

    /// Copies the buffer's contents out into storage owned by the caller.
    fn copy_to_byte_array(&self, buffer: &Buffer) -> Result<Vec<u8>>;

    fn decode_from_hex_string(&self, value: &str) -> Result<Buffer>;

    fn encode_to_hex_string(&self, buffer: &Buffer) -> String;

    fn decode_from_base64_string(&self, value: &str) -> Result<Buffer>;

    fn encode_to_base64_string(&self, buffer: &Buffer) -> String;

    fn convert_string_to_binary(&self, value: &str, encoding: BinaryStringEncoding) -> Result<Buffer>;

    fn convert_binary_to_string(&self, encoding: BinaryStringEncoding, buffer: &Buffer) -> Result<String>;
}

/// The standard implementation of [`CryptographicBufferStatics`].
///
/// # Example
///
/// ```
/// use cryptobuf::{CryptographicBuffer, CryptographicBufferStatics};
///
/// let statics = CryptographicBuffer::system();
/// let buffer = statics.create_from_byte_array(&[0x00, 0xff, 0x10]).unwrap();
/// assert_eq!(statics.encode_to_hex_string(&buffer), "00ff10");
///
/// let decoded = statics.decode_from_hex_string("00ff10").unwrap();
/// assert!(statics.compare(&buffer, &decoded));
/// ```
#[derive(Debug)]
pub struct CryptographicBuffer<R = OsRandom> {
    config: CryptoBufferConfig,
    rng: R,
}

impl CryptographicBuffer<OsRandom> {
    pub fn new() -> Self {
        Self::with_config(CryptoBufferConfig::default())
    }

    pub fn with_config(config: CryptoBufferConfig) -> Self {
        Self::with_random_source(config, OsRandom)
    }

    /// Process-wide instance with the default configuration.
    pub fn system() -> &'static Self {
        static SYSTEM: OnceLock<CryptographicBuffer> = OnceLock::new();
        SYSTEM.get_or_init(Self::new)
    }
}

impl Default for CryptographicBuffer<OsRandom> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> CryptographicBuffer<R> {
    pub fn with_random_source(config: CryptoBufferConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &CryptoBufferConfig {
        &self.config
    }
}

fn allocate(len: usize) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    bytes
        .try_reserve_exact(len)
        .map_err(|_| CryptoBufferError::OutOfMemory { requested: len })?;
    Ok(bytes)
}

fn copy_bytes(source: &[u8]) -> Result<Vec<u8>> {
    let mut bytes = allocate(source.len())?;
    bytes.extend_from_slice(source);
    Ok(bytes)
}

impl<R: RandomSource> CryptographicBufferStatics for CryptographicBuffer<R> {
    fn compare(&self, a: &Buffer, b: &Buffer) -> bool {
        ct_eq(a.as_bytes(), b.as_bytes())
    }

    #[instrument(level = "trace", skip(self))]
    fn generate_random(&self, length: u32) -> Result<Buffer> {
        let len = length as usize;
        if length > self.config.max_random_length {
            debug!(
                length,
                limit = self.config.max_random_length,
                "random length over limit"
            );
            return Err(CryptoBufferError::OutOfMemory { requested: len });
        }
        let mut bytes = allocate(len)?;
        bytes.resize(len, 0);
        self.rng
            .fill(&mut bytes)
            .inspect_err(|e| debug!(error = %e, "random fill failed"))?;
        Ok(Buffer::from(bytes))
    }

    #[instrument(level = "trace", skip(self))]
    fn generate_random_number(&self) -> Result<u32> {
        let mut bytes = [0u8; 4];
        self.rng
            .fill(&mut bytes)
            .inspect_err(|e| debug!(error = %e, "random fill failed"))?;
        Ok(u32::from_le_bytes(bytes))
    }

    fn create_from_byte_array(&self, bytes: &[u8]) -> Result<Buffer> {
        copy_bytes(bytes).map(Buffer::from)
    }

    fn copy_to_byte_array(&self, buffer: &Buffer) -> Result<Vec<u8>> {
        copy_bytes(buffer.as_bytes())
    }

    #[instrument(level = "trace", skip_all, fields(len = value.len()))]
    fn decode_from_hex_string(&self, value: &str) -> Result<Buffer> {
        decode_hex(value)
            .map(Buffer::from)
            .map_err(CryptoBufferError::InvalidHex)
            .inspect_err(|e| debug!(error = %e, "hex decode failed"))
    }

    fn encode_to_hex_string(&self, buffer: &Buffer) -> String {
        match self.config.hex_case {
            HexCase::Lower => encode_hex_lower(buffer.as_bytes()),
            HexCase::Upper => encode_hex_upper(buffer.as_bytes()),
        }
    }

    #[instrument(level = "trace", skip_all, fields(len = value.len()))]
    fn decode_from_base64_string(&self, value: &str) -> Result<Buffer> {
        cryptobuf_base64::from_base64(value)
            .map(Buffer::from)
            .map_err(CryptoBufferError::from)
            .inspect_err(|e| debug!(error = %e, "base64 decode failed"))
    }

    fn encode_to_base64_string(&self, buffer: &Buffer) -> String {
        cryptobuf_base64::to_base64(buffer.as_bytes())
    }

    #[instrument(level = "trace", skip(self, value), fields(len = value.len()))]
    fn convert_string_to_binary(&self, value: &str, encoding: BinaryStringEncoding) -> Result<Buffer> {
        let bytes = match encoding {
            BinaryStringEncoding::Utf8 => utf8(value),
            BinaryStringEncoding::Utf16Le => utf16le(value),
            BinaryStringEncoding::Utf16Be => utf16be(value),
        };
        Ok(Buffer::from(bytes))
    }

    #[instrument(level = "trace", skip(self, buffer), fields(len = buffer.len()))]
    fn convert_binary_to_string(&self, encoding: BinaryStringEncoding, buffer: &Buffer) -> Result<String> {
        let bytes = buffer.as_bytes();
        let decoded = match encoding {
            BinaryStringEncoding::Utf8 => decode_utf8(bytes),
            BinaryStringEncoding::Utf16Le => decode_utf16le(bytes),
            BinaryStringEncoding::Utf16Be => decode_utf16be(bytes),
        };
        decoded
            .map_err(|source| CryptoBufferError::InvalidText { encoding, source })
            .inspect_err(|e| debug!(error = %e, "text decode failed"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::Mutex;

    fn seeded(seed: u64) -> CryptographicBuffer<Mutex<StdRng>> {
        CryptographicBuffer::with_random_source(
            CryptoBufferConfig::default(),
            Mutex::new(StdRng::seed_from_u64(seed)),
        )
    }

    #[test]
    fn test_seeded_random_is_reproducible() {
        let a = seeded(42).generate_random(32).unwrap();
        let b = seeded(42).generate_random(32).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, seeded(43).generate_random(32).unwrap());
    }

    #[test]
    fn test_random_length_limit() {
        let statics = CryptographicBuffer::with_config(CryptoBufferConfig {
            max_random_length: 8,
            ..CryptoBufferConfig::default()
        });
        assert_eq!(statics.generate_random(8).unwrap().len(), 8);
        assert_eq!(
            statics.generate_random(9),
            Err(CryptoBufferError::OutOfMemory { requested: 9 })
        );
    }

    #[test]
    fn test_generate_random_zero() {
        assert!(CryptographicBuffer::new().generate_random(0).unwrap().is_empty());
    }

    #[test]
    fn test_upper_hex_config() {
        let statics = CryptographicBuffer::with_config(CryptoBufferConfig {
            hex_case: HexCase::Upper,
            ..CryptoBufferConfig::default()
        });
        let buffer = Buffer::from(vec![0xab, 0x01]);
        assert_eq!(statics.encode_to_hex_string(&buffer), "AB01");
    }

    #[test]
    fn test_allocate_refuses_impossible_size() {
        assert_eq!(
            allocate(usize::MAX),
            Err(CryptoBufferError::OutOfMemory {
                requested: usize::MAX
            })
        );
    }

    #[test]
    fn test_system_is_shared() {
        assert!(std::ptr::eq(
            CryptographicBuffer::system(),
            CryptographicBuffer::system()
        ));
    }
}
