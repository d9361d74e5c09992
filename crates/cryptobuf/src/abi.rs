//! Identity of the platform interface this crate mirrors.
//!
//! Only the identifiers and the method order are provided; no binary
//! dispatch table is built. Shims that bridge to the platform component use
//! these to name what they are talking to.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A 128-bit interface identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Guid {
    pub data1: u32,
    pub data2: u16,
    pub data3: u16,
    pub data4: [u8; 8],
}

impl Guid {
    pub const fn new(data1: u32, data2: u16, data3: u16, data4: [u8; 8]) -> Self {
        Self {
            data1,
            data2,
            data3,
            data4,
        }
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = &self.data4;
        write!(
            f,
            "{:08x}-{:04x}-{:04x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
            self.data1, self.data2, self.data3, d[0], d[1], d[2], d[3], d[4], d[5], d[6], d[7]
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid GUID {0:?}")]
pub struct ParseGuidError(String);

impl FromStr for Guid {
    type Err = ParseGuidError;

    /// Parses the registry form, with or without surrounding braces.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseGuidError(s.to_owned());
        let inner = s
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
            .unwrap_or(s);

        let groups: Vec<&str> = inner.split('-').collect();
        let lengths = [8, 4, 4, 4, 12];
        if groups.len() != lengths.len()
            || groups
                .iter()
                .zip(lengths)
                .any(|(g, len)| g.len() != len || !g.bytes().all(|b| b.is_ascii_hexdigit()))
        {
            return Err(err());
        }

        let data1 = u32::from_str_radix(groups[0], 16).map_err(|_| err())?;
        let data2 = u16::from_str_radix(groups[1], 16).map_err(|_| err())?;
        let data3 = u16::from_str_radix(groups[2], 16).map_err(|_| err())?;
        let tail = cryptobuf_buffers::decode_hex(&format!("{}{}", groups[3], groups[4]))
            .map_err(|_| err())?;
        let mut data4 = [0u8; 8];
        data4.copy_from_slice(&tail);
        Ok(Guid::new(data1, data2, data3, data4))
    }
}

/// `ICryptographicBufferStatics` interface identifier.
pub const IID_ICRYPTOGRAPHIC_BUFFER_STATICS: Guid = Guid::new(
    0x320b7e22,
    0x3cb0,
    0x4cdf,
    [0x86, 0x63, 0x1d, 0x28, 0x91, 0x00, 0x65, 0xeb],
);

pub const RUNTIME_CLASS_NAME: &str = "Windows.Security.Cryptography.CryptographicBuffer";

/// Slots taken by the inherited `IUnknown` and `IInspectable` methods.
const INHERITED_SLOTS: usize = 6;

/// Statics methods in dispatch-table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StaticsMethod {
    Compare,
    GenerateRandom,
    GenerateRandomNumber,
    CreateFromByteArray,
    CopyToByteArray,
    DecodeFromHexString,
    EncodeToHexString,
    DecodeFromBase64String,
    EncodeToBase64String,
    ConvertStringToBinary,
    ConvertBinaryToString,
}

impl StaticsMethod {
    pub const ALL: [StaticsMethod; 11] = [
        StaticsMethod::Compare,
        StaticsMethod::GenerateRandom,
        StaticsMethod::GenerateRandomNumber,
        StaticsMethod::CreateFromByteArray,
        StaticsMethod::CopyToByteArray,
        StaticsMethod::DecodeFromHexString,
        StaticsMethod::EncodeToHexString,
        StaticsMethod::DecodeFromBase64String,
        StaticsMethod::EncodeToBase64String,
        StaticsMethod::ConvertStringToBinary,
        StaticsMethod::ConvertBinaryToString,
    ];

    pub fn vtable_slot(self) -> usize {
        INHERITED_SLOTS + self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            StaticsMethod::Compare => "Compare",
            StaticsMethod::GenerateRandom => "GenerateRandom",
            StaticsMethod::GenerateRandomNumber => "GenerateRandomNumber",
            StaticsMethod::CreateFromByteArray => "CreateFromByteArray",
            StaticsMethod::CopyToByteArray => "CopyToByteArray",
            StaticsMethod::DecodeFromHexString => "DecodeFromHexString",
            StaticsMethod::EncodeToHexString => "EncodeToHexString",
            StaticsMethod::DecodeFromBase64String => "DecodeFromBase64String",
            StaticsMethod::EncodeToBase64String => "EncodeToBase64String",
            StaticsMethod::ConvertStringToBinary => "ConvertStringToBinary",
            StaticsMethod::ConvertBinaryToString => "ConvertBinaryToString",
        }
    }
}

impl fmt::Display for StaticsMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
