//! UniFFI bridge over the process-wide [`CryptographicBuffer`].
//!
//! Buffers cross the boundary as `Arc<CryptoBuffer>` objects; ownership of
//! every returned object passes to the foreign caller.

use std::sync::Arc;

use cryptobuf::abi::IID_ICRYPTOGRAPHIC_BUFFER_STATICS;
use cryptobuf::{
    BinaryStringEncoding, Buffer, CryptoBufferError, CryptographicBuffer,
    CryptographicBufferStatics, Status,
};

uniffi::setup_scaffolding!();

#[derive(Debug, uniffi::Object)]
pub struct CryptoBuffer {
    inner: Buffer,
}

#[uniffi::export]
impl CryptoBuffer {
    #[uniffi::constructor]
    pub fn new(bytes: Vec<u8>) -> Arc<Self> {
        Arc::new(Self {
            inner: Buffer::from(bytes),
        })
    }

    pub fn length(&self) -> u64 {
        self.inner.len() as u64
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.inner.to_vec()
    }
}

impl CryptoBuffer {
    fn wrap(inner: Buffer) -> Arc<Self> {
        Arc::new(Self { inner })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum FfiBinaryStringEncoding {
    Utf8,
    Utf16Le,
    Utf16Be,
}

impl From<FfiBinaryStringEncoding> for BinaryStringEncoding {
    fn from(value: FfiBinaryStringEncoding) -> Self {
        match value {
            FfiBinaryStringEncoding::Utf8 => BinaryStringEncoding::Utf8,
            FfiBinaryStringEncoding::Utf16Le => BinaryStringEncoding::Utf16Le,
            FfiBinaryStringEncoding::Utf16Be => BinaryStringEncoding::Utf16Be,
        }
    }
}

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum FfiError {
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },
    #[error("out of memory: {message}")]
    OutOfMemory { message: String },
    #[error("failure: {message}")]
    Failure { message: String },
}

impl From<CryptoBufferError> for FfiError {
    fn from(err: CryptoBufferError) -> Self {
        let message = err.to_string();
        match err.status() {
            Status::InvalidArgument => FfiError::InvalidArgument { message },
            Status::OutOfMemory => FfiError::OutOfMemory { message },
            Status::Failure => FfiError::Failure { message },
        }
    }
}

fn statics() -> &'static CryptographicBuffer {
    CryptographicBuffer::system()
}

#[uniffi::export]
pub fn interface_id() -> String {
    IID_ICRYPTOGRAPHIC_BUFFER_STATICS.to_string()
}

#[uniffi::export]
pub fn compare(a: Arc<CryptoBuffer>, b: Arc<CryptoBuffer>) -> bool {
    statics().compare(&a.inner, &b.inner)
}

#[uniffi::export]
pub fn generate_random(length: u32) -> Result<Arc<CryptoBuffer>, FfiError> {
    Ok(CryptoBuffer::wrap(statics().generate_random(length)?))
}

#[uniffi::export]
pub fn generate_random_number() -> Result<u32, FfiError> {
    Ok(statics().generate_random_number()?)
}

#[uniffi::export]
pub fn create_from_byte_array(bytes: Vec<u8>) -> Result<Arc<CryptoBuffer>, FfiError> {
    Ok(CryptoBuffer::wrap(statics().create_from_byte_array(&bytes)?))
}

#[uniffi::export]
pub fn copy_to_byte_array(buffer: Arc<CryptoBuffer>) -> Result<Vec<u8>, FfiError> {
    Ok(statics().copy_to_byte_array(&buffer.inner)?)
}

#[uniffi::export]
pub fn decode_from_hex_string(value: String) -> Result<Arc<CryptoBuffer>, FfiError> {
    Ok(CryptoBuffer::wrap(statics().decode_from_hex_string(&value)?))
}

#[uniffi::export]
pub fn encode_to_hex_string(buffer: Arc<CryptoBuffer>) -> String {
    statics().encode_to_hex_string(&buffer.inner)
}

#[uniffi::export]
pub fn decode_from_base64_string(value: String) -> Result<Arc<CryptoBuffer>, FfiError> {
    Ok(CryptoBuffer::wrap(statics().decode_from_base64_string(&value)?))
}

#[uniffi::export]
pub fn encode_to_base64_string(buffer: Arc<CryptoBuffer>) -> String {
    statics().encode_to_base64_string(&buffer.inner)
}

#[uniffi::export]
pub fn convert_string_to_binary(
    value: String,
    encoding: FfiBinaryStringEncoding,
) -> Result<Arc<CryptoBuffer>, FfiError> {
    Ok(CryptoBuffer::wrap(
        statics().convert_string_to_binary(&value, encoding.into())?,
    ))
}

#[uniffi::export]
pub fn convert_binary_to_string(
    encoding: FfiBinaryStringEncoding,
    buffer: Arc<CryptoBuffer>,
) -> Result<String, FfiError> {
    Ok(statics().convert_binary_to_string(encoding.into(), &buffer.inner)?)
}
