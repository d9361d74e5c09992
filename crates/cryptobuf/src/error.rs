//! Error taxonomy and status codes.

use cryptobuf_base64::Base64Error;
use cryptobuf_buffers::BufferError;
use thiserror::Error;

use crate::BinaryStringEncoding;

/// Platform status code (`HRESULT`).
pub type Hresult = i32;

pub const S_OK: Hresult = 0;
pub const E_INVALIDARG: Hresult = 0x8007_0057_u32 as i32;
pub const E_OUTOFMEMORY: Hresult = 0x8007_000E_u32 as i32;
pub const E_FAIL: Hresult = 0x8000_4005_u32 as i32;

/// Errors produced by buffer operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoBufferError {
    #[error("invalid hex string: {0}")]
    InvalidHex(#[source] BufferError),
    #[error("invalid base64 string: {0}")]
    InvalidBase64(#[from] Base64Error),
    #[error("invalid {encoding} data: {source}")]
    InvalidText {
        encoding: BinaryStringEncoding,
        source: BufferError,
    },
    #[error("unsupported binary string encoding: {0}")]
    UnsupportedEncoding(i32),
    #[error("cannot allocate a buffer of {requested} bytes")]
    OutOfMemory { requested: usize },
    #[error("random source failure: {0}")]
    RandomSource(String),
}

/// Failure category reported across the interface boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    InvalidArgument,
    OutOfMemory,
    Failure,
}

impl Status {
    /// Platform status code for this category.
    pub fn hresult(self) -> Hresult {
        match self {
            Status::InvalidArgument => E_INVALIDARG,
            Status::OutOfMemory => E_OUTOFMEMORY,
            Status::Failure => E_FAIL,
        }
    }
}

impl CryptoBufferError {
    pub fn status(&self) -> Status {
        match self {
            CryptoBufferError::InvalidHex(_)
            | CryptoBufferError::InvalidBase64(_)
            | CryptoBufferError::InvalidText { .. }
            | CryptoBufferError::UnsupportedEncoding(_) => Status::InvalidArgument,
            CryptoBufferError::OutOfMemory { .. } => Status::OutOfMemory,
            CryptoBufferError::RandomSource(_) => Status::Failure,
        }
    }

    pub fn hresult(&self) -> Hresult {
        self.status().hresult()
    }
}

pub type Result<T> = std::result::Result<T, CryptoBufferError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hresult_values() {
        assert_eq!(E_INVALIDARG, -2147024809);
        assert_eq!(E_OUTOFMEMORY, -2147024882);
        assert_eq!(E_FAIL, -2147467259);
        assert!(E_INVALIDARG < 0 && E_OUTOFMEMORY < 0 && E_FAIL < 0);
    }

    #[test]
    fn test_status_mapping() {
        let hex = CryptoBufferError::InvalidHex(BufferError::OddHexLength { len: 1 });
        assert_eq!(hex.status(), Status::InvalidArgument);
        assert_eq!(hex.hresult(), E_INVALIDARG);

        let b64 = CryptoBufferError::from(Base64Error::InvalidLength { len: 3 });
        assert_eq!(b64.status(), Status::InvalidArgument);

        assert_eq!(
            CryptoBufferError::UnsupportedEncoding(7).status(),
            Status::InvalidArgument
        );
        assert_eq!(
            CryptoBufferError::OutOfMemory { requested: 1 }.hresult(),
            E_OUTOFMEMORY
        );
        assert_eq!(
            CryptoBufferError::RandomSource("boom".into()).hresult(),
            E_FAIL
        );
    }

    #[test]
    fn test_display() {
        let err = CryptoBufferError::InvalidText {
            encoding: BinaryStringEncoding::Utf16Be,
            source: BufferError::OddUtf16Length { len: 3 },
        };
        assert_eq!(
            err.to_string(),
            "invalid UTF-16BE data: UTF-16 input has odd byte length 3"
        );
    }
}
