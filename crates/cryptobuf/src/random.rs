//! Cryptographically secure random sources.

use std::sync::Mutex;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::CryptoBufferError;

/// A source of cryptographically secure random bytes.
pub trait RandomSource: Send + Sync {
    /// Fills `dest` entirely, or fails without a partial result being used.
    fn fill(&self, dest: &mut [u8]) -> Result<(), CryptoBufferError>;
}

/// The operating system CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill(&self, dest: &mut [u8]) -> Result<(), CryptoBufferError> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|e| CryptoBufferError::RandomSource(e.to_string()))
    }
}

/// A caller-supplied CSPRNG, e.g. a seeded `StdRng` for reproducible runs.
impl<R> RandomSource for Mutex<R>
where
    R: RngCore + CryptoRng + Send,
{
    fn fill(&self, dest: &mut [u8]) -> Result<(), CryptoBufferError> {
        let mut rng = self
            .lock()
            .map_err(|_| CryptoBufferError::RandomSource("random source lock poisoned".into()))?;
        rng.try_fill_bytes(dest)
            .map_err(|e| CryptoBufferError::RandomSource(e.to_string()))
    }
}
