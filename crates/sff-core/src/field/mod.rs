//! Typed field values
//!
//! Every field of an EEPROM map is represented by a small value type that
//! owns a copy of its raw bytes and knows how to describe them. All value
//! types implement [`Field`] (describe / structured output) and [`Decode`]
//! (construction from exactly [`Decode::WIDTH`] raw bytes).
//!
//! Value families:
//!
//! - enumerated bytes ([`Identifier`], [`Connector`], [`LinkCodes`], ...)
//! - bit flag sets ([`sff8079::Transceiver`], [`sff8636::Transceiver`], ...)
//! - fixed ASCII strings ([`FixedString`])
//! - [`VendorOui`] and [`DateCode`]
//! - scaled single-byte values ([`ValueKm`], [`ValueM`], [`Value100Mbps`], ...)
//! - undecoded bytes ([`Raw`])

use serde::{Deserialize, Serialize};

use crate::hex;

/// Define a single-byte field described by a [`CodeTable`](crate::codes::CodeTable)
macro_rules! code_field {
    ($(#[$meta:meta])* $name:ident => $table:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub struct $name(pub u8);

        impl $name {
            /// Code table used to describe this field
            pub fn table() -> &'static $crate::codes::CodeTable {
                &$table
            }

            /// Raw code value
            pub fn code(&self) -> u8 {
                self.0
            }

            /// Description of the code (fallback if unmapped)
            pub fn name(&self) -> &'static str {
                Self::table().lookup(self.0)
            }
        }

        impl $crate::field::Field for $name {
            fn kind(&self) -> $crate::field::FieldKind {
                $crate::field::FieldKind::EnumByte
            }

            fn raw(&self) -> &[u8] {
                core::slice::from_ref(&self.0)
            }

            fn decoded(&self) -> $crate::field::Decoded {
                $crate::field::Decoded::Text(self.name().to_string())
            }
        }

        impl $crate::field::Decode for $name {
            const WIDTH: usize = 1;

            fn decode(raw: &[u8]) -> Self {
                Self(raw.first().copied().unwrap_or(0))
            }
        }
    };
}

/// Define a multi-byte field described by a [`FlagTable`](crate::codes::FlagTable)
macro_rules! flag_field {
    ($(#[$meta:meta])* $name:ident, $width:literal => $table:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub struct $name(pub [u8; $width]);

        impl $name {
            /// Flag table used to describe this field
            pub fn table() -> &'static $crate::codes::FlagTable {
                &$table
            }

            /// Field as a little-endian bit set
            pub fn bits(&self) -> u64 {
                $crate::codes::bits_le(&self.0)
            }

            /// Descriptions of all set flags, ascending by bit value
            pub fn list(&self) -> Vec<&'static str> {
                Self::table().matches(self.bits())
            }
        }

        impl $crate::field::Field for $name {
            fn kind(&self) -> $crate::field::FieldKind {
                $crate::field::FieldKind::BitFlags
            }

            fn raw(&self) -> &[u8] {
                &self.0
            }

            fn decoded(&self) -> $crate::field::Decoded {
                $crate::field::Decoded::list(self.list())
            }
        }

        impl $crate::field::Decode for $name {
            const WIDTH: usize = $width;

            fn decode(raw: &[u8]) -> Self {
                Self($crate::field::array(raw))
            }
        }
    };
}

mod common;
mod scaled;
pub mod sff8079;
pub mod sff8636;
mod text;

pub use common::{Connector, Identifier, LinkCodes};
pub use scaled::{
    Value100Mbps, Value250Mbps, ValueKm, ValueM, ValueM10, ValueM100, ValueM2, ValuePercent,
};
pub use text::{DateCode, FixedString, Raw, VendorOui};

/// Value family of a field, the tag of the typed value union
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Single byte looked up in one code table
    EnumByte,
    /// Byte sequence decoded into a list of descriptions
    BitFlags,
    /// Fixed-length ASCII string
    FixedString,
    /// IEEE organizationally unique identifier
    VendorOui,
    /// Manufacturing date code
    DateCode,
    /// Single byte with a unit and multiplier
    ScaledValue,
    /// Bytes kept without interpretation
    Raw,
}

/// Decoded representation of a field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Decoded {
    /// Single description
    Text(String),
    /// Ordered list of descriptions (bit flag fields)
    List(Vec<String>),
}

impl Decoded {
    /// Build a list value from static descriptions
    pub fn list(items: Vec<&'static str>) -> Self {
        Self::List(items.into_iter().map(str::to_string).collect())
    }
}

impl std::fmt::Display for Decoded {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::List(items) if items.is_empty() => f.write_str("None"),
            Self::List(items) => f.write_str(&items.join(", ")),
        }
    }
}

/// Structured (machine-readable) form of a field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Structured {
    /// Decoded value or values
    pub decoded: Decoded,
    /// Unit, for scaled values only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Lowercase hex of the field's raw bytes
    pub raw: String,
}

impl From<Structured> for serde_json::Value {
    fn from(s: Structured) -> Self {
        use serde_json::Value;

        let mut map = serde_json::Map::new();
        let decoded = match s.decoded {
            Decoded::Text(text) => Value::String(text),
            Decoded::List(items) => Value::Array(items.into_iter().map(Value::String).collect()),
        };
        map.insert("decoded".into(), decoded);
        if let Some(unit) = s.unit {
            map.insert("unit".into(), Value::String(unit));
        }
        map.insert("raw".into(), Value::String(s.raw));
        Value::Object(map)
    }
}

/// Common interface of all typed field values
pub trait Field {
    /// Value family of this field
    fn kind(&self) -> FieldKind;

    /// Original bytes of the field
    fn raw(&self) -> &[u8];

    /// Decoded representation
    fn decoded(&self) -> Decoded;

    /// Unit of the decoded value, if it has one
    fn unit(&self) -> Option<&'static str> {
        None
    }

    /// Human-readable single-line description
    fn describe(&self) -> String {
        self.decoded().to_string()
    }

    /// Decoded value together with the raw hex
    fn structured(&self) -> Structured {
        Structured {
            decoded: self.decoded(),
            unit: self.unit().map(str::to_string),
            raw: hex::encode(self.raw()),
        }
    }
}

/// Construction of a field value from raw bytes
pub trait Decode: Field + Sized {
    /// Number of bytes the field occupies
    const WIDTH: usize;

    /// Decode from `raw`, which holds [`Self::WIDTH`] bytes
    ///
    /// Total: a shorter slice is zero-padded, extra bytes are ignored.
    fn decode(raw: &[u8]) -> Self;
}

/// Copy up to `N` bytes into a zero-padded array
pub(crate) fn array<const N: usize>(raw: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    let n = raw.len().min(N);
    out[..n].copy_from_slice(&raw[..n]);
    out
}
