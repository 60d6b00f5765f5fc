//! Text-like fields: ASCII strings, vendor OUI, date code and raw bytes

use super::{array, Decode, Decoded, Field, FieldKind};
use crate::hex;

/// Fixed-length ASCII string, padded with spaces or NUL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedString<const N: usize>(pub [u8; N]);

impl<const N: usize> FixedString<N> {
    /// String with surrounding whitespace and NUL padding removed
    ///
    /// Non-ASCII bytes are replaced rather than rejected.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.0)
            .trim_matches(|c: char| c.is_ascii_whitespace() || c == '\0')
            .to_string()
    }
}

impl<const N: usize> Default for FixedString<N> {
    fn default() -> Self {
        Self([b' '; N])
    }
}

impl<const N: usize> Field for FixedString<N> {
    fn kind(&self) -> FieldKind {
        FieldKind::FixedString
    }

    fn raw(&self) -> &[u8] {
        &self.0
    }

    fn decoded(&self) -> Decoded {
        Decoded::Text(self.text())
    }
}

impl<const N: usize> Decode for FixedString<N> {
    const WIDTH: usize = N;

    fn decode(raw: &[u8]) -> Self {
        Self(array(raw))
    }
}

/// IEEE company identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VendorOui(pub [u8; 3]);

impl VendorOui {
    /// OUI as a 24-bit number, most significant octet first
    pub fn value(&self) -> u32 {
        u32::from_be_bytes([0, self.0[0], self.0[1], self.0[2]])
    }
}

impl Field for VendorOui {
    fn kind(&self) -> FieldKind {
        FieldKind::VendorOui
    }

    fn raw(&self) -> &[u8] {
        &self.0
    }

    fn decoded(&self) -> Decoded {
        Decoded::Text(format!("{:02x}:{:02x}:{:02x}", self.0[0], self.0[1], self.0[2]))
    }
}

impl Decode for VendorOui {
    const WIDTH: usize = 3;

    fn decode(raw: &[u8]) -> Self {
        Self(array(raw))
    }
}

/// Vendor date code: `YYMMDD` followed by a two character lot code
///
/// Digits are not validated; whatever the module reports is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateCode(pub [u8; 8]);

impl DateCode {
    fn part(&self, start: usize, len: usize) -> String {
        String::from_utf8_lossy(&self.0[start..start + len]).into_owned()
    }

    /// Two digit year as stored
    pub fn year(&self) -> String {
        self.part(0, 2)
    }

    /// Month as stored
    pub fn month(&self) -> String {
        self.part(2, 2)
    }

    /// Day of month as stored
    pub fn day(&self) -> String {
        self.part(4, 2)
    }

    /// Vendor specific lot code
    pub fn lot_code(&self) -> String {
        self.part(6, 2)
    }
}

impl Default for DateCode {
    fn default() -> Self {
        Self([b' '; 8])
    }
}

impl Field for DateCode {
    fn kind(&self) -> FieldKind {
        FieldKind::DateCode
    }

    fn raw(&self) -> &[u8] {
        &self.0
    }

    fn decoded(&self) -> Decoded {
        Decoded::Text(format!("20{}-{}-{}", self.year(), self.month(), self.day()))
    }
}

impl Decode for DateCode {
    const WIDTH: usize = 8;

    fn decode(raw: &[u8]) -> Self {
        Self(array(raw))
    }
}

/// Bytes that are named but not interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Raw<const N: usize>(pub [u8; N]);

impl<const N: usize> Default for Raw<N> {
    fn default() -> Self {
        Self([0; N])
    }
}

impl<const N: usize> Field for Raw<N> {
    fn kind(&self) -> FieldKind {
        FieldKind::Raw
    }

    fn raw(&self) -> &[u8] {
        &self.0
    }

    fn decoded(&self) -> Decoded {
        Decoded::Text(format!("0x{}", hex::encode(&self.0)))
    }
}

impl<const N: usize> Decode for Raw<N> {
    const WIDTH: usize = N;

    fn decode(raw: &[u8]) -> Self {
        Self(array(raw))
    }
}
