//! SFF-8024 common header

use super::ByteMap;
use crate::error::Result;
use crate::field::Identifier;

record! {
    /// Header shared by every module family: the identifier byte
    pub struct Sff8024 {
        identifier: Identifier = [0] "Identifier",
    }
}

impl Sff8024 {
    /// Bytes needed to decode the header
    pub const WIDTH: usize = 1;

    /// Decode the header at `base`
    pub fn decode(buffer: &[u8], base: usize) -> Result<Self> {
        let map = ByteMap::new(buffer, base, Self::WIDTH)?;
        Ok(Self::read(&map))
    }
}
