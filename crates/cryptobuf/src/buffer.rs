//! Immutable, reference-counted byte buffer.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use cryptobuf_buffers::{ct_eq, Octets};

/// An owned, immutable region of bytes.
///
/// Cloning a `Buffer` shares the underlying storage; nothing can mutate it
/// once created, so clones may be read from any number of threads.
///
/// # Example
///
/// ```
/// use cryptobuf::Buffer;
///
/// let a = Buffer::from(vec![0x00, 0xff, 0x10]);
/// let b = a.clone();
/// assert_eq!(a, b);
/// assert_eq!(b.as_bytes(), &[0x00, 0xff, 0x10]);
/// ```
#[derive(Clone)]
pub struct Buffer {
    bytes: Arc<[u8]>,
}

impl Buffer {
    pub fn empty() -> Self {
        Self {
            bytes: Arc::from(Vec::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Copies the contents into a new vector owned by the caller.
    pub fn to_vec(&self) -> Vec<u8> {
        self.bytes.to_vec()
    }

    /// Whether `self` and `other` share the same storage.
    pub fn ptr_eq(&self, other: &Buffer) -> bool {
        Arc::ptr_eq(&self.bytes, &other.bytes)
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Vec<u8>> for Buffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self {
            bytes: Arc::from(bytes),
        }
    }
}

impl From<&[u8]> for Buffer {
    fn from(bytes: &[u8]) -> Self {
        Self {
            bytes: Arc::from(bytes),
        }
    }
}

impl AsRef<[u8]> for Buffer {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl PartialEq for Buffer {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(&self.bytes, &other.bytes)
    }
}

impl Eq for Buffer {}

impl Hash for Buffer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bytes.hash(state);
    }
}

// Contents are truncated so secrets do not end up in logs whole.
impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Buffer({} bytes: {})",
            self.len(),
            Octets::new(&self.bytes, Octets::DEFAULT_MAX)
        )
    }
}
