//! Record layouts
//!
//! A layout is a fixed list of named fields at fixed offsets from a record
//! base. Decoding copies every field into an owned typed value; bytes not
//! covered by any named field are kept as opaque regions so the original
//! buffer can be rebuilt exactly.

use std::ops::Range;

use crate::error::{DecodeError, Result};
use crate::field::{Decode, Field};

/// Define a record: a struct of typed fields plus its static field table
///
/// Offsets are relative to the record base passed at decode time. Field
/// order in the macro invocation is the declared (output) order.
macro_rules! record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $( $(#[$fmeta:meta])* $field:ident: $ty:ty = [$offset:literal] $label:literal, )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        $vis struct $name {
            $( #[doc = $label] $(#[$fmeta])* pub $field: $ty, )*
        }

        impl $name {
            /// Named fields in declared order, offsets relative to the record base
            pub const FIELDS: &'static [$crate::layout::FieldSpec] = &[
                $(
                    $crate::layout::FieldSpec {
                        key: stringify!($field),
                        label: $label,
                        offset: $offset,
                        len: <$ty as $crate::field::Decode>::WIDTH,
                    },
                )*
            ];

            pub(crate) fn read(map: &$crate::layout::ByteMap<'_>) -> Self {
                Self {
                    $( $field: map.read(stringify!($field), $offset), )*
                }
            }

            /// Field values paired with their spec and absolute offset
            pub fn entries(&self, base: usize) -> Vec<$crate::layout::Entry<'_>> {
                let values = vec![ $( &self.$field as &dyn $crate::field::Field, )* ];
                Self::FIELDS
                    .iter()
                    .zip(values)
                    .map(|(spec, value)| $crate::layout::Entry {
                        spec,
                        offset: base + spec.offset,
                        value,
                    })
                    .collect()
            }
        }
    };
}

pub mod sff8024;
pub mod sff8079;
pub mod sff8636;

pub use sff8024::Sff8024;
pub use sff8079::Sff8079;
pub use sff8636::Sff8636;

/// Static description of one named field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Machine-readable key used in structured output
    pub key: &'static str,
    /// Human-readable label
    pub label: &'static str,
    /// Offset from the record base
    pub offset: usize,
    /// Width in bytes
    pub len: usize,
}

impl FieldSpec {
    /// Absolute byte range for a record at `base`
    pub fn range(&self, base: usize) -> Range<usize> {
        base + self.offset..base + self.offset + self.len
    }
}

/// A decoded field within a record
#[derive(Clone, Copy)]
pub struct Entry<'a> {
    /// Field description
    pub spec: &'static FieldSpec,
    /// Absolute offset in the decoded buffer
    pub offset: usize,
    /// Typed value
    pub value: &'a dyn Field,
}

impl Entry<'_> {
    /// Absolute byte range of the field
    pub fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.spec.len
    }

    /// Offset annotation, `[2]` or `[20-35]`
    pub fn offsets(&self) -> String {
        if self.spec.len == 1 {
            format!("[{}]", self.offset)
        } else {
            format!("[{}-{}]", self.offset, self.offset + self.spec.len - 1)
        }
    }
}

impl std::fmt::Debug for Entry<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Entry")
            .field("key", &self.spec.key)
            .field("offset", &self.offset)
            .field("value", &self.value.describe())
            .finish()
    }
}

/// Bytes retained without interpretation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opaque {
    /// Absolute offset of the first byte
    pub offset: usize,
    /// Retained bytes
    pub bytes: Vec<u8>,
}

impl Opaque {
    /// Absolute byte range
    pub fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.bytes.len()
    }

    /// Byte at absolute `offset`, if it falls in this region
    pub fn byte_at(&self, offset: usize) -> Option<u8> {
        offset
            .checked_sub(self.offset)
            .and_then(|i| self.bytes.get(i))
            .copied()
    }
}

/// Bounds-checked view of an input buffer at a record base
pub(crate) struct ByteMap<'a> {
    buffer: &'a [u8],
    base: usize,
}

impl<'a> ByteMap<'a> {
    /// Check that `width` bytes are available at `base`
    pub(crate) fn new(buffer: &'a [u8], base: usize, width: usize) -> Result<Self> {
        let expected = base.checked_add(width).unwrap_or(usize::MAX);
        if expected == usize::MAX || buffer.len() < expected {
            return Err(DecodeError::BufferTooShort {
                expected,
                actual: buffer.len(),
            });
        }
        Ok(Self { buffer, base })
    }

    /// Same buffer, different record base
    pub(crate) fn rebase(&self, base: usize, width: usize) -> Result<Self> {
        Self::new(self.buffer, base, width)
    }

    /// Decode the field at `offset` from the base
    pub(crate) fn read<T: Decode>(&self, key: &str, offset: usize) -> T {
        let start = self.base.saturating_add(offset);
        let raw = start
            .checked_add(T::WIDTH)
            .and_then(|end| self.buffer.get(start..end))
            .unwrap_or_default();
        log::trace!("{} at {:#05x}: {:02x?}", key, start, raw);
        T::decode(raw)
    }

    /// Every run of bytes not covered by `named`
    pub(crate) fn opaque(&self, named: &[Range<usize>]) -> Vec<Opaque> {
        let len = self.buffer.len();
        let mut named = named.to_vec();
        named.sort_by_key(|r| r.start);
        named.push(len..len);

        let mut regions = Vec::new();
        let mut pos = 0;
        for range in &named {
            let end = range.start.min(len);
            if end > pos {
                regions.push(Opaque {
                    offset: pos,
                    bytes: self.buffer[pos..end].to_vec(),
                });
            }
            pos = pos.max(range.end);
        }
        regions
    }
}

/// Rebuild a buffer of `len` bytes from opaque regions and named fields
pub(crate) fn assemble(len: usize, opaque: &[Opaque], entries: &[Entry<'_>]) -> Vec<u8> {
    let mut out = vec![0u8; len];
    let chunks = opaque
        .iter()
        .map(|o| (o.offset, o.bytes.as_slice()))
        .chain(entries.iter().map(|e| (e.offset, e.value.raw())));
    for (offset, bytes) in chunks {
        if let Some(dst) = out.get_mut(offset..offset + bytes.len()) {
            dst.copy_from_slice(bytes);
        }
    }
    out
}

/// Find the byte at absolute `offset` among opaque regions
pub(crate) fn opaque_byte(opaque: &[Opaque], offset: usize) -> Option<u8> {
    opaque.iter().find_map(|o| o.byte_at(offset))
}
