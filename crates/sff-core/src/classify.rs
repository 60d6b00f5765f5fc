//! Module family detection

use std::fmt;
use std::str::FromStr;

use crate::codes::sff8024::identifier;
use crate::codes::sff8079::EXT_IDENTIFIER_TWO_WIRE_ID;
use crate::layout::{Sff8079, Sff8636};

/// Specification family of an EEPROM dump
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleFamily {
    /// SFP/SFP+ (SFF-8079)
    Sff8079,
    /// QSFP+/QSFP28 (SFF-8636)
    Sff8636,
    /// Not recognized
    Unknown,
}

impl ModuleFamily {
    /// Name used in output and in the structured `type` key
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sff8079 => "SFF-8079",
            Self::Sff8636 => "SFF-8636",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ModuleFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModuleFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SFF-8079" => Ok(Self::Sff8079),
            "SFF-8636" => Ok(Self::Sff8636),
            _ => Err(format!("unknown module type '{}'", s)),
        }
    }
}

/// How to tell module families apart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetectStrategy {
    /// Look at the identifier bytes
    #[default]
    Content,
    /// Look at the buffer length only (256 or 640 bytes)
    Length,
}

/// Classify `buffer` by its identifier bytes
pub fn classify(buffer: &[u8]) -> ModuleFamily {
    classify_with(buffer, DetectStrategy::Content)
}

/// Classify `buffer` with the given strategy; never fails
pub fn classify_with(buffer: &[u8], strategy: DetectStrategy) -> ModuleFamily {
    let family = match strategy {
        DetectStrategy::Content => by_content(buffer),
        DetectStrategy::Length => by_length(buffer),
    };
    log::debug!(
        "Classified {} byte buffer as {} ({:?} strategy)",
        buffer.len(),
        family,
        strategy
    );
    family
}

fn by_content(buffer: &[u8]) -> ModuleFamily {
    let sfp = matches!(
        buffer.first(),
        Some(&identifier::SOLDERED) | Some(&identifier::SFP)
    ) && buffer.get(1) == Some(&EXT_IDENTIFIER_TWO_WIRE_ID);
    if sfp {
        return ModuleFamily::Sff8079;
    }

    match buffer.get(Sff8636::UPPER_BASE) {
        Some(&identifier::QSFP) | Some(&identifier::QSFP_PLUS) | Some(&identifier::QSFP28) => {
            ModuleFamily::Sff8636
        }
        _ => ModuleFamily::Unknown,
    }
}

fn by_length(buffer: &[u8]) -> ModuleFamily {
    match buffer.len() {
        Sff8079::WIDTH => ModuleFamily::Sff8079,
        Sff8636::DUMP_WIDTH => ModuleFamily::Sff8636,
        _ => ModuleFamily::Unknown,
    }
}
