//! Alphabet tables shared by the encoder and decoder factories.

use crate::constants::{INVALID, PAD, STANDARD_CHARS};
use crate::Base64Error;

/// A 64-character base64 alphabet with its reverse lookup table.
#[derive(Debug, Clone)]
pub struct Alphabet {
    encode: [u8; 64],
    decode: [u8; 256],
}

/// The standard alphabet (`A-Z a-z 0-9 + /`).
pub static STANDARD: Alphabet = Alphabet::from_table(STANDARD_CHARS);

impl Alphabet {
    const fn from_table(chars: &[u8; 64]) -> Self {
        let mut decode = [INVALID; 256];
        let mut i = 0;
        while i < 64 {
            decode[chars[i] as usize] = i as u8;
            i += 1;
        }
        Self {
            encode: *chars,
            decode,
        }
    }

    /// Builds an alphabet from 64 distinct ASCII characters.
    ///
    /// # Errors
    ///
    /// - [`Base64Error::InvalidCharSetLength`] if `chars` is not 64 characters long.
    /// - [`Base64Error::InvalidCharSet`] if `chars` repeats a character, contains
    ///   non-ASCII text, or contains the padding character.
    pub fn new(chars: &str) -> Result<Self, Base64Error> {
        if chars.chars().count() != 64 {
            return Err(Base64Error::InvalidCharSetLength);
        }
        if !chars.is_ascii() {
            return Err(Base64Error::InvalidCharSet);
        }
        let mut table = [0u8; 64];
        table.copy_from_slice(chars.as_bytes());
        let alphabet = Self::from_table(&table);
        let distinct = alphabet.decode.iter().filter(|&&v| v != INVALID).count();
        if distinct != 64 || alphabet.decode[PAD as usize] != INVALID {
            return Err(Base64Error::InvalidCharSet);
        }
        Ok(alphabet)
    }

    pub(crate) fn encode(&self, input: &[u8], pad: Option<u8>) -> String {
        let mut out = String::with_capacity(input.len().div_ceil(3) * 4);
        for chunk in input.chunks(3) {
            let b1 = chunk.get(1).copied().unwrap_or(0);
            let b2 = chunk.get(2).copied().unwrap_or(0);
            let n = ((chunk[0] as u32) << 16) | ((b1 as u32) << 8) | (b2 as u32);

            out.push(self.symbol(n >> 18));
            out.push(self.symbol(n >> 12));
            match chunk.len() {
                3 => {
                    out.push(self.symbol(n >> 6));
                    out.push(self.symbol(n));
                }
                2 => {
                    out.push(self.symbol(n >> 6));
                    if let Some(p) = pad {
                        out.push(p as char);
                    }
                }
                _ => {
                    if let Some(p) = pad {
                        out.push(p as char);
                        out.push(p as char);
                    }
                }
            }
        }
        out
    }

    fn symbol(&self, sextet: u32) -> char {
        self.encode[(sextet & 0x3f) as usize] as char
    }

    pub(crate) fn decode(&self, encoded: &str, require_padding: bool) -> Result<Vec<u8>, Base64Error> {
        let bytes = encoded.as_bytes();
        if require_padding && bytes.len() % 4 != 0 {
            return Err(Base64Error::InvalidLength { len: bytes.len() });
        }

        let mut end = bytes.len();
        while end > 0 && bytes[end - 1] == PAD {
            end -= 1;
        }
        let pads = bytes.len() - end;
        // Padding, when present, must complete a quantum and never exceed two.
        if pads > 2 || (pads > 0 && bytes.len() % 4 != 0) {
            return Err(Base64Error::InvalidPadding { index: end });
        }
        let data = &bytes[..end];
        if data.len() % 4 == 1 {
            return Err(Base64Error::InvalidLength { len: bytes.len() });
        }

        let mut out = Vec::with_capacity(data.len() / 4 * 3 + 2);
        for (q, quantum) in data.chunks(4).enumerate() {
            let base = q * 4;
            let mut n: u32 = 0;
            for (j, &c) in quantum.iter().enumerate() {
                let v = self.decode[c as usize];
                if v == INVALID {
                    let index = base + j;
                    return Err(if c == PAD {
                        Base64Error::InvalidPadding { index }
                    } else {
                        Base64Error::InvalidCharacter {
                            ch: encoded[index..]
                                .chars()
                                .next()
                                .unwrap_or(char::REPLACEMENT_CHARACTER),
                            index,
                        }
                    });
                }
                n |= (v as u32) << (18 - 6 * j);
            }
            match quantum.len() {
                4 => out.extend_from_slice(&[(n >> 16) as u8, (n >> 8) as u8, n as u8]),
                3 => {
                    if n & 0xff != 0 {
                        return Err(Base64Error::NonZeroTrailingBits { index: base + 2 });
                    }
                    out.extend_from_slice(&[(n >> 16) as u8, (n >> 8) as u8]);
                }
                2 => {
                    if n & 0xffff != 0 {
                        return Err(Base64Error::NonZeroTrailingBits { index: base + 1 });
                    }
                    out.push((n >> 16) as u8);
                }
                _ => return Err(Base64Error::InvalidLength { len: bytes.len() }),
            }
        }
        Ok(out)
    }
}
