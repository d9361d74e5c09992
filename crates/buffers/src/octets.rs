//! Debug formatting of octets as truncated hex.

use std::fmt;

/// Displays a byte slice as space-separated hex octets.
///
/// At most `max` octets are printed; the rest is summarised as
/// `... (N more)` so that large or sensitive buffers never end up in full in
/// logs.
///
/// # Example
///
/// ```
/// use cryptobuf_buffers::Octets;
///
/// assert_eq!(Octets::new(&[0x01, 0x02, 0x0a, 0xff], 16).to_string(), "01 02 0a ff");
/// assert_eq!(Octets::new(&[], 16).to_string(), "");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Octets<'a> {
    bytes: &'a [u8],
    max: usize,
}

impl<'a> Octets<'a> {
    /// Default number of octets shown.
    pub const DEFAULT_MAX: usize = 16;

    pub fn new(bytes: &'a [u8], max: usize) -> Self {
        Self { bytes, max }
    }
}

impl fmt::Display for Octets<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.bytes.iter().take(self.max).enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:02x}", byte)?;
        }
        if self.bytes.len() > self.max {
            write!(f, "... ({} more)", self.bytes.len() - self.max)?;
        }
        Ok(())
    }
}
