//! Decode facade
//!
//! [`Module`] is the entry point of the crate: it classifies a buffer,
//! decodes it with the matching layout and exposes text and structured
//! output independent of the family.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

use crate::classify::{classify_with, DetectStrategy, ModuleFamily};
use crate::error::{DecodeError, Result};
use crate::hex;
use crate::layout::{Entry, FieldSpec, Opaque, Sff8079, Sff8636};

/// Family specific decoded record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    /// SFP/SFP+ map
    Sff8079(Box<Sff8079>),
    /// QSFP+/QSFP28 map
    Sff8636(Box<Sff8636>),
}

impl Record {
    /// Named fields in declared order
    pub fn entries(&self) -> Vec<Entry<'_>> {
        match self {
            Self::Sff8079(r) => r.entries(),
            Self::Sff8636(r) => r.entries(),
        }
    }

    /// Regions kept without interpretation
    pub fn opaque(&self) -> &[Opaque] {
        match self {
            Self::Sff8079(r) => r.opaque(),
            Self::Sff8636(r) => r.opaque(),
        }
    }

    fn to_bytes(&self) -> Vec<u8> {
        match self {
            Self::Sff8079(r) => r.to_bytes(),
            Self::Sff8636(r) => r.to_bytes(),
        }
    }
}

/// A decoded transceiver EEPROM
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    family: ModuleFamily,
    record: Record,
}

impl Module {
    /// Classify by content and decode
    pub fn decode(buffer: &[u8]) -> Result<Self> {
        Self::decode_with(buffer, DetectStrategy::default())
    }

    /// Classify with `strategy` and decode
    pub fn decode_with(buffer: &[u8], strategy: DetectStrategy) -> Result<Self> {
        Self::decode_as(buffer, classify_with(buffer, strategy))
    }

    /// Decode `buffer` as the given family without classifying it
    pub fn decode_as(buffer: &[u8], family: ModuleFamily) -> Result<Self> {
        let record = match family {
            ModuleFamily::Sff8079 => Record::Sff8079(Box::new(Sff8079::decode(buffer, 0)?)),
            ModuleFamily::Sff8636 => Record::Sff8636(Box::new(Sff8636::decode(buffer, 0)?)),
            ModuleFamily::Unknown => return Err(DecodeError::UnknownModuleType),
        };
        Ok(Self { family, record })
    }

    /// Detected family
    pub fn family(&self) -> ModuleFamily {
        self.family
    }

    /// Family specific record
    pub fn record(&self) -> &Record {
        &self.record
    }

    /// Named fields in declared order
    pub fn entries(&self) -> Vec<Entry<'_>> {
        self.record.entries()
    }

    /// One line per field: `<label> [<offsets>] : <value>`
    pub fn describe(&self) -> String {
        self.entries()
            .iter()
            .map(|e| format!("{} {} : {}", e.spec.label, e.offsets(), e.value.describe()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Structured form: `type` followed by every field keyed by name
    pub fn structured(&self) -> Value {
        let mut map = Map::new();
        map.insert("type".into(), Value::String(self.family.name().into()));
        for entry in self.entries() {
            map.insert(entry.spec.key.into(), entry.value.structured().into());
        }
        Value::Object(map)
    }

    /// The exact buffer this module was decoded from
    pub fn to_bytes(&self) -> Vec<u8> {
        self.record.to_bytes()
    }

    /// Rebuild a module from its structured form
    ///
    /// Only the `raw` value of every named field is used; the buffer is
    /// rebuilt at the family's minimum width with unnamed bytes zeroed.
    /// For SFF-8636 the identifier is also written to byte 128.
    pub fn from_structured(value: &Value) -> Result<Self> {
        let obj = value
            .as_object()
            .ok_or_else(|| DecodeError::malformed("type", "expected a JSON object"))?;
        let family: ModuleFamily = obj
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| DecodeError::malformed("type", "missing or not a string"))?
            .parse()
            .map_err(|e| DecodeError::malformed("type", e))?;

        let (width, specs): (usize, Vec<(usize, &'static FieldSpec)>) = match family {
            ModuleFamily::Sff8079 => (Sff8079::WIDTH, Sff8079::specs().collect()),
            ModuleFamily::Sff8636 => (Sff8636::WIDTH, Sff8636::specs().collect()),
            ModuleFamily::Unknown => return Err(DecodeError::UnknownModuleType),
        };
        log::debug!("Rebuilding {} buffer from structured input", family);

        let mut buffer = vec![0u8; width];
        for (base, spec) in specs {
            let bytes = raw_field(obj, spec)?;
            buffer[spec.range(base)].copy_from_slice(&bytes);
        }
        if family == ModuleFamily::Sff8636 {
            buffer[Sff8636::UPPER_BASE] = buffer[0];
        }

        Self::decode_as(&buffer, family)
    }
}

/// Decode the `raw` hex of one field, exactly as long as the field
fn raw_field(obj: &Map<String, Value>, spec: &FieldSpec) -> Result<Vec<u8>> {
    let raw = obj
        .get(spec.key)
        .and_then(|v| v.get("raw"))
        .and_then(Value::as_str)
        .ok_or_else(|| DecodeError::malformed(spec.key, "missing raw value"))?;
    let bytes = hex::decode(raw).map_err(|e| DecodeError::malformed(spec.key, e.to_string()))?;
    if bytes.len() != spec.len {
        return Err(DecodeError::malformed(
            spec.key,
            format!("expected {} bytes, got {}", spec.len, bytes.len()),
        ));
    }
    Ok(bytes)
}

impl std::fmt::Display for Module {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.describe())
    }
}

impl Serialize for Module {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let entries = self.entries();
        let mut map = serializer.serialize_map(Some(entries.len() + 1))?;
        map.serialize_entry("type", self.family.name())?;
        for entry in &entries {
            map.serialize_entry(entry.spec.key, &entry.value.structured())?;
        }
        map.end()
    }
}
