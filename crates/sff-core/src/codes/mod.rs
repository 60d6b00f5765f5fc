//! Code table registry
//!
//! Static mappings from a byte value (or a bit within a multi-byte field) to
//! a human-readable description, one table per field domain. Lookups never
//! fail: unmapped codes return the table's fallback description and unmapped
//! bits are skipped.
//!
//! Tables are grouped by the document that defines them:
//!
//! - [`sff8024`] - identifier, connector and extended compliance (link) codes
//! - [`sff8079`] - SFP/SFP+ encoding, extended identifier, rate identifier and
//!   transceiver compliance codes
//! - [`sff8636`] - QSFP encoding, compliance codes and the sub-field tables of
//!   the extended identifier, device technology and power control bytes

pub mod sff8024;
pub mod sff8079;
pub mod sff8636;

/// Fallback description for unmapped codes
pub const RESERVED_OR_UNKNOWN: &str = "Reserved or unknown";

/// Fallback used by the few tables that historically report plain "Unknown"
pub const UNKNOWN: &str = "Unknown";

/// Byte value to description mapping
#[derive(Debug, Clone, Copy)]
pub struct CodeTable {
    name: &'static str,
    entries: &'static [(u8, &'static str)],
    fallback: &'static str,
}

impl CodeTable {
    /// Create a table falling back to [`RESERVED_OR_UNKNOWN`]
    pub const fn new(name: &'static str, entries: &'static [(u8, &'static str)]) -> Self {
        Self {
            name,
            entries,
            fallback: RESERVED_OR_UNKNOWN,
        }
    }

    /// Replace the fallback description
    pub const fn with_fallback(mut self, fallback: &'static str) -> Self {
        self.fallback = fallback;
        self
    }

    /// Table name, used in diagnostics
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Description returned for unmapped codes
    pub fn fallback(&self) -> &'static str {
        self.fallback
    }

    /// All defined (code, description) pairs
    pub fn entries(&self) -> &'static [(u8, &'static str)] {
        self.entries
    }

    /// Look up a code, returning the fallback description if it is unmapped
    pub fn lookup(&self, code: u8) -> &'static str {
        self.get(code).unwrap_or(self.fallback)
    }

    /// Look up a code, returning `None` if it is unmapped
    pub fn get(&self, code: u8) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, name)| *name)
    }
}

/// Bit flag to description mapping for multi-valued fields
///
/// Bits are numbered over the little-endian interpretation of the field, so
/// bit 0-7 are the first byte of the field, bit 8-15 the second, and so on.
#[derive(Debug, Clone, Copy)]
pub struct FlagTable {
    name: &'static str,
    entries: &'static [(u64, &'static str)],
}

impl FlagTable {
    /// Create a flag table
    pub const fn new(name: &'static str, entries: &'static [(u64, &'static str)]) -> Self {
        Self { name, entries }
    }

    /// Table name, used in diagnostics
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// All defined (mask, description) pairs
    pub fn entries(&self) -> &'static [(u64, &'static str)] {
        self.entries
    }

    /// Descriptions for every defined flag set in `bits`, ascending by bit value
    ///
    /// Set bits without a definition are skipped.
    pub fn matches(&self, bits: u64) -> Vec<&'static str> {
        let mut hits: Vec<(u64, &'static str)> = self
            .entries
            .iter()
            .filter(|(mask, _)| mask & bits != 0)
            .copied()
            .collect();
        hits.sort_by_key(|(mask, _)| *mask);
        hits.into_iter().map(|(_, name)| name).collect()
    }

    /// Same as [`FlagTable::matches`] for a little-endian byte sequence of up to 8 bytes
    pub fn matches_bytes(&self, bytes: &[u8]) -> Vec<&'static str> {
        self.matches(bits_le(bytes))
    }
}

/// Interpret up to 8 bytes as a little-endian bit set
pub fn bits_le(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .take(8)
        .enumerate()
        .fold(0u64, |acc, (i, b)| acc | (u64::from(*b) << (i * 8)))
}

/// Identifier of a single-valued code table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableId {
    /// SFF-8024 identifier (byte 0 / 128)
    Identifier,
    /// SFF-8024 connector type
    Connector,
    /// SFF-8024 extended specification compliance (link codes)
    LinkCodes,
    /// SFF-8079 encoding
    Sff8079Encoding,
    /// SFF-8079 extended identifier
    Sff8079ExtIdentifier,
    /// SFF-8079 rate identifier
    Sff8079RateIdentifier,
    /// SFF-8636 encoding
    Sff8636Encoding,
    /// SFF-8636 power class (extended identifier bits 7-6)
    Sff8636PowerClass,
    /// SFF-8636 extended power class (extended identifier bits 1-0)
    Sff8636ExtPowerClass,
    /// SFF-8636 transmitter technology (device technology bits 7-4)
    Sff8636TransmitterTechnology,
}

/// Identifier of a bit flag table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagTableId {
    /// SFF-8079 transceiver compliance codes (bytes 3-10)
    Sff8079Transceiver,
    /// SFF-8636 specification compliance codes (bytes 131-138)
    Sff8636Transceiver,
    /// SFF-8636 10/40G Ethernet compliance (byte 131)
    Sff8636SpecComp,
    /// SFF-8636 extended module codes (byte 164)
    Sff8636ExtModule,
    /// SFF-8636 power control (byte 93)
    Sff8636PowerControl,
}

/// Resolve a code table by id
pub fn table(id: TableId) -> &'static CodeTable {
    match id {
        TableId::Identifier => &sff8024::IDENTIFIER,
        TableId::Connector => &sff8024::CONNECTOR,
        TableId::LinkCodes => &sff8024::LINK_CODES,
        TableId::Sff8079Encoding => &sff8079::ENCODING,
        TableId::Sff8079ExtIdentifier => &sff8079::EXT_IDENTIFIER,
        TableId::Sff8079RateIdentifier => &sff8079::RATE_IDENTIFIER,
        TableId::Sff8636Encoding => &sff8636::ENCODING,
        TableId::Sff8636PowerClass => &sff8636::POWER_CLASS,
        TableId::Sff8636ExtPowerClass => &sff8636::EXT_POWER_CLASS,
        TableId::Sff8636TransmitterTechnology => &sff8636::TRANSMITTER_TECHNOLOGY,
    }
}

/// Resolve a flag table by id
pub fn flag_table(id: FlagTableId) -> &'static FlagTable {
    match id {
        FlagTableId::Sff8079Transceiver => &sff8079::TRANSCEIVER,
        FlagTableId::Sff8636Transceiver => &sff8636::TRANSCEIVER,
        FlagTableId::Sff8636SpecComp => &sff8636::SPEC_COMP,
        FlagTableId::Sff8636ExtModule => &sff8636::EXT_MODULE,
        FlagTableId::Sff8636PowerControl => &sff8636::POWER_CONTROL,
    }
}

/// Look up `code` in the table `id`; never fails
pub fn lookup(id: TableId, code: u8) -> &'static str {
    table(id).lookup(code)
}

/// Descriptions of all flags of table `id` set in `bits`, ascending by bit value
pub fn matches(id: FlagTableId, bits: u64) -> Vec<&'static str> {
    flag_table(id).matches(bits)
}
