//! Text encoding selector for string/binary conversion.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CryptoBufferError;

/// Text-to-binary mapping used by `convert_string_to_binary` and
/// `convert_binary_to_string`.
///
/// The discriminants are the platform selector values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(i32)]
pub enum BinaryStringEncoding {
    #[default]
    Utf8 = 0,
    Utf16Le = 1,
    Utf16Be = 2,
}

impl BinaryStringEncoding {
    pub const ALL: [BinaryStringEncoding; 3] = [
        BinaryStringEncoding::Utf8,
        BinaryStringEncoding::Utf16Le,
        BinaryStringEncoding::Utf16Be,
    ];

    /// Raw selector value.
    pub fn as_raw(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for BinaryStringEncoding {
    type Error = CryptoBufferError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(BinaryStringEncoding::Utf8),
            1 => Ok(BinaryStringEncoding::Utf16Le),
            2 => Ok(BinaryStringEncoding::Utf16Be),
            other => Err(CryptoBufferError::UnsupportedEncoding(other)),
        }
    }
}

impl FromStr for BinaryStringEncoding {
    type Err = CryptoBufferError;

    /// Accepts `utf8`, `utf16le`, `utf16be` (with or without a dash, any
    /// case) or a numeric selector.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "utf8" | "utf-8" => Ok(BinaryStringEncoding::Utf8),
            "utf16le" | "utf-16le" => Ok(BinaryStringEncoding::Utf16Le),
            "utf16be" | "utf-16be" => Ok(BinaryStringEncoding::Utf16Be),
            other => match other.parse::<i32>() {
                Ok(raw) => BinaryStringEncoding::try_from(raw),
                Err(_) => Err(CryptoBufferError::UnsupportedEncoding(-1)),
            },
        }
    }
}

impl fmt::Display for BinaryStringEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BinaryStringEncoding::Utf8 => "UTF-8",
            BinaryStringEncoding::Utf16Le => "UTF-16LE",
            BinaryStringEncoding::Utf16Be => "UTF-16BE",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_values() {
        assert_eq!(BinaryStringEncoding::Utf8.as_raw(), 0);
        assert_eq!(BinaryStringEncoding::Utf16Le.as_raw(), 1);
        assert_eq!(BinaryStringEncoding::Utf16Be.as_raw(), 2);
        for encoding in BinaryStringEncoding::ALL {
            assert_eq!(BinaryStringEncoding::try_from(encoding.as_raw()), Ok(encoding));
        }
    }

    #[test]
    fn test_unsupported_selector() {
        assert_eq!(
            BinaryStringEncoding::try_from(3),
            Err(CryptoBufferError::UnsupportedEncoding(3))
        );
        assert_eq!(
            BinaryStringEncoding::try_from(-1),
            Err(CryptoBufferError::UnsupportedEncoding(-1))
        );
    }

    #[test]
    fn test_from_str() {
        assert_eq!("UTF-8".parse(), Ok(BinaryStringEncoding::Utf8));
        assert_eq!("utf16le".parse(), Ok(BinaryStringEncoding::Utf16Le));
        assert_eq!("Utf-16BE".parse(), Ok(BinaryStringEncoding::Utf16Be));
        assert_eq!("2".parse(), Ok(BinaryStringEncoding::Utf16Be));
        assert_eq!(
            "9".parse::<BinaryStringEncoding>(),
            Err(CryptoBufferError::UnsupportedEncoding(9))
        );
        assert!("latin1".parse::<BinaryStringEncoding>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(BinaryStringEncoding::Utf16Le.to_string(), "UTF-16LE");
    }
}
