//! SFF-8079 (SFP/SFP+) 256-byte map
//!
//! Bytes 0-95 are the serial ID fields and are decoded into named values.
//! Bytes 96-255 are vendor specific or reserved and stay opaque.

use super::{assemble, ByteMap, Entry, FieldSpec, Opaque};
use crate::error::Result;
use crate::field::sff8079::{Encoding, ExtIdentifier, RateIdentifier, Transceiver};
use crate::field::{
    Connector, DateCode, FixedString, Identifier, LinkCodes, Raw, Value100Mbps, ValueKm, ValueM,
    ValueM10, ValueM100, ValuePercent, VendorOui,
};

record! {
    /// Named fields of the SFF-8079 serial ID (bytes 0-95)
    pub struct Fields {
        identifier: Identifier = [0] "Identifier",
        ext_identifier: ExtIdentifier = [1] "Extended identifier",
        connector: Connector = [2] "Connector",
        transceiver: Transceiver = [3] "Transceiver",
        encoding: Encoding = [11] "Encoding",
        br_nominal: Value100Mbps = [12] "BR, nominal",
        rate_identifier: RateIdentifier = [13] "Rate identifier",
        length_smf_km: ValueKm = [14] "Length (SMF, km)",
        length_smf: ValueM100 = [15] "Length (SMF)",
        length_50um: ValueM10 = [16] "Length (50um)",
        length_62_5um: ValueM10 = [17] "Length (62.5um)",
        length_copper: ValueM = [18] "Length (copper)",
        length_om3: ValueM10 = [19] "Length (OM3)",
        vendor_name: FixedString<16> = [20] "Vendor name",
        link_codes: LinkCodes = [36] "Extended compliance",
        vendor_oui: VendorOui = [37] "Vendor OUI",
        vendor_pn: FixedString<16> = [40] "Vendor PN",
        vendor_rev: FixedString<4> = [56] "Vendor rev",
        wavelength: Raw<2> = [60] "Laser wavelength",
        unallocated: Raw<1> = [62] "Unallocated",
        cc_base: Raw<1> = [63] "CC_BASE",
        options: Raw<2> = [64] "Options",
        br_max: ValuePercent = [66] "BR, max",
        br_min: ValuePercent = [67] "BR, min",
        vendor_sn: FixedString<16> = [68] "Vendor SN",
        date_code: DateCode = [84] "Date code",
        diagnostic_monitoring: Raw<1> = [92] "Diagnostic monitoring type",
        enhanced_options: Raw<1> = [93] "Enhanced options",
        sff8472_compliance: Raw<1> = [94] "SFF-8472 compliance",
        cc_ext: Raw<1> = [95] "CC_EXT",
    }
}

/// Decoded SFF-8079 map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sff8079 {
    /// Named fields
    pub fields: Fields,
    base: usize,
    len: usize,
    opaque: Vec<Opaque>,
}

impl Sff8079 {
    /// Size of the map
    pub const WIDTH: usize = 256;

    /// Decode the map starting at `base`
    pub fn decode(buffer: &[u8], base: usize) -> Result<Self> {
        let map = ByteMap::new(buffer, base, Self::WIDTH)?;
        log::debug!(
            "Decoding SFF-8079 map at {:#x} ({} byte buffer)",
            base,
            buffer.len()
        );
        let trailing = buffer.len() - (base + Self::WIDTH);
        if trailing > 0 {
            log::warn!("{} bytes past the SFF-8079 map are kept undecoded", trailing);
        }

        let fields = Fields::read(&map);
        let named: Vec<_> = Fields::FIELDS.iter().map(|f| f.range(base)).collect();
        Ok(Self {
            fields,
            base,
            len: buffer.len(),
            opaque: map.opaque(&named),
        })
    }

    /// Field specs with the record base they are read at
    pub fn specs() -> impl Iterator<Item = (usize, &'static FieldSpec)> {
        Fields::FIELDS.iter().map(|spec| (0, spec))
    }

    /// Named fields in declared order
    pub fn entries(&self) -> Vec<Entry<'_>> {
        self.fields.entries(self.base)
    }

    /// Regions kept without interpretation
    pub fn opaque(&self) -> &[Opaque] {
        &self.opaque
    }

    /// Rebuild the exact input buffer
    pub fn to_bytes(&self) -> Vec<u8> {
        assemble(self.len, &self.opaque, &self.entries())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;
    use crate::field::Field;
    use crate::fixtures;

    #[test]
    fn test_decode_fixture() {
        let sfp = Sff8079::decode(&fixtures::sfp_plus(), 0).unwrap();
        let f = &sfp.fields;
        assert_eq!(f.identifier.describe(), "SFP");
        assert_eq!(f.connector.describe(), "LC");
        assert_eq!(f.transceiver.list(), vec!["10G Ethernet: 10G Base-SR"]);
        assert_eq!(f.encoding.describe(), "64B/66B");
        assert_eq!(f.br_nominal.describe(), "10300 Mb/s");
        assert_eq!(f.length_50um.describe(), "80 m");
        assert_eq!(f.length_om3.describe(), "300 m");
        assert_eq!(f.vendor_name.describe(), "FINISAR CORP.");
        assert_eq!(f.vendor_oui.describe(), "00:90:65");
        assert_eq!(f.vendor_pn.describe(), "FTLX8571D3BCL");
        assert_eq!(f.vendor_rev.describe(), "A");
        assert_eq!(f.date_code.describe(), "2016-04-12");
    }

    #[test]
    fn test_byte_coverage_is_exactly_0_to_95() {
        let mut pos = 0;
        for spec in Fields::FIELDS {
            assert_eq!(spec.offset, pos, "gap or overlap before {}", spec.key);
            pos += spec.len;
        }
        assert_eq!(pos, 96);
    }

    #[test]
    fn test_trailing_bytes_are_opaque() {
        let sfp = Sff8079::decode(&fixtures::sfp_plus(), 0).unwrap();
        assert_eq!(sfp.opaque().len(), 1);
        assert_eq!(sfp.opaque()[0].range(), 96..256);
    }

    #[test]
    fn test_length_boundary() {
        let buf = fixtures::sfp_plus();
        assert_eq!(
            Sff8079::decode(&buf[..255], 0).err(),
            Some(DecodeError::BufferTooShort {
                expected: 256,
                actual: 255
            })
        );
        assert!(Sff8079::decode(&buf[..256], 0).is_ok());
    }

    #[test]
    fn test_base_overflow_is_too_short() {
        assert_eq!(
            Sff8079::decode(&[0u8; 256], usize::MAX - 10).err(),
            Some(DecodeError::BufferTooShort {
                expected: usize::MAX,
                actual: 256
            })
        );
    }

    #[test]
    fn test_to_bytes_is_exact() {
        let buf = fixtures::sfp_plus();
        assert_eq!(Sff8079::decode(&buf, 0).unwrap().to_bytes(), buf);

        let mut long = buf.clone();
        long.extend_from_slice(&[0xaa; 4]);
        assert_eq!(Sff8079::decode(&long, 0).unwrap().to_bytes(), long);
    }

    #[test]
    fn test_entry_offsets() {
        let sfp = Sff8079::decode(&fixtures::sfp_plus(), 0).unwrap();
        let entries = sfp.entries();
        assert_eq!(entries.len(), Fields::FIELDS.len());
        let connector = entries.iter().find(|e| e.spec.key == "connector").unwrap();
        assert_eq!(connector.offsets(), "[2]");
        let name = entries.iter().find(|e| e.spec.key == "vendor_name").unwrap();
        assert_eq!(name.offsets(), "[20-35]");
    }
}
