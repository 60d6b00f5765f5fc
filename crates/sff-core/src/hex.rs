//! Lowercase hex helpers used by the structured form

use std::fmt::Write;

use thiserror::Error;

/// Encode bytes as a lowercase hex string without separators
pub fn encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        // Writing to a String cannot fail
        let _ = write!(out, "{:02x}", b);
    }
    out
}

/// Error returned by [`decode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HexError {
    /// Input has an odd number of digits
    #[error("odd number of hex digits")]
    OddLength,
    /// Non-hex character at the given position
    #[error("invalid hex digit {found:?} at position {position}")]
    InvalidDigit {
        /// Byte offset of the character in the input
        position: usize,
        /// The offending character
        found: char,
    },
}

/// Decode a hex string (either case) into bytes, skipping whitespace
pub fn decode(s: &str) -> Result<Vec<u8>, HexError> {
    let digits: Vec<(usize, char)> = s
        .char_indices()
        .filter(|(_, c)| !c.is_whitespace())
        .collect();
    if digits.len() % 2 != 0 {
        return Err(HexError::OddLength);
    }

    let nibble = |(position, c): (usize, char)| -> Result<u8, HexError> {
        c.to_digit(16)
            .map(|d| d as u8)
            .ok_or(HexError::InvalidDigit { position, found: c })
    };

    digits
        .chunks(2)
        .map(|pair| Ok((nibble(pair[0])? << 4) | nibble(pair[1])?))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_lowercase() {
        assert_eq!(encode(&[0xA0, 0x36, 0x9F]), "a0369f");
        assert_eq!(encode(&[]), "");
        assert_eq!(encode(&[0x00, 0x0F]), "000f");
    }

    #[test]
    fn test_decode_mixed_case() {
        assert_eq!(decode("A0369f").unwrap(), vec![0xA0, 0x36, 0x9F]);
        assert_eq!(decode("").unwrap(), Vec::<u8>::new());
        assert_eq!(decode("a0 36\n9f").unwrap(), vec![0xA0, 0x36, 0x9F]);
    }

    #[test]
    fn test_decode_errors() {
        assert_eq!(decode("abc"), Err(HexError::OddLength));
        assert_eq!(
            decode("0g"),
            Err(HexError::InvalidDigit {
                position: 1,
                found: 'g'
            })
        );
        assert_eq!(
            decode("00 0g"),
            Err(HexError::InvalidDigit {
                position: 4,
                found: 'g'
            })
        );
    }
}
