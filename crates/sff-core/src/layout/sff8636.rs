//! SFF-8636 (QSFP+/QSFP28) map
//!
//! A dump starts with the 128-byte lower page followed by upper page 00h.
//! Only the identifier (byte 0) of the lower page is named; upper page
//! fields are read at 128 plus their offset.
//! Full 640-byte dumps also carry pages 01h-03h, which stay opaque along
//! with every other unnamed byte.

use super::{assemble, opaque_byte, ByteMap, Entry, FieldSpec, Opaque, Sff8024};
use crate::error::Result;
use crate::field::sff8636::{
    DeviceTechnology, Encoding, ExtIdentifier, ExtModule, PwrMode, SpecComp, Transceiver,
};
use crate::field::{
    Connector, DateCode, Decode, FixedString, Identifier, LinkCodes, Raw, Value100Mbps,
    Value250Mbps, ValueKm, ValueM, ValueM2, VendorOui,
};

record! {
    /// Named fields of upper page 00h, offsets relative to byte 128
    pub struct UpperPage {
        ext_identifier: ExtIdentifier = [1] "Extended identifier",
        connector: Connector = [2] "Connector",
        transceiver: Transceiver = [3] "Specification compliance",
        encoding: Encoding = [11] "Encoding",
        br_nominal: Value100Mbps = [12] "BR, nominal",
        rate_identifier: Raw<1> = [13] "Extended rate select compliance",
        length_smf: ValueKm = [14] "Length (SMF)",
        length_om3: ValueM2 = [15] "Length (OM3 50um)",
        length_om2: ValueM = [16] "Length (OM2 50um)",
        length_om1: ValueM = [17] "Length (OM1 62.5um)",
        length_copper: ValueM = [18] "Length (copper or OM4)",
        device_technology: DeviceTechnology = [19] "Device technology",
        vendor_name: FixedString<16> = [20] "Vendor name",
        ext_module: ExtModule = [36] "Extended module",
        vendor_oui: VendorOui = [37] "Vendor OUI",
        vendor_pn: FixedString<16> = [40] "Vendor PN",
        vendor_rev: FixedString<2> = [56] "Vendor rev",
        wavelength: Raw<2> = [58] "Wavelength",
        wavelength_tolerance: Raw<2> = [60] "Wavelength tolerance",
        max_case_temp: Raw<1> = [62] "Max case temperature",
        cc_base: Raw<1> = [63] "CC_BASE",
        link_codes: LinkCodes = [64] "Link codes",
        options: Raw<3> = [65] "Options",
        vendor_sn: FixedString<16> = [68] "Vendor SN",
        date_code: DateCode = [84] "Date code",
        diagnostic_monitoring: Raw<1> = [92] "Diagnostic monitoring type",
        enhanced_options: Raw<1> = [93] "Enhanced options",
        br_nominal_ext: Value250Mbps = [94] "BR, nominal (extended)",
        cc_ext: Raw<1> = [95] "CC_EXT",
    }
}

/// Decoded SFF-8636 map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sff8636 {
    /// Identifier at byte 0
    pub header: Sff8024,
    /// Named upper page 00h fields
    pub upper: UpperPage,
    base: usize,
    len: usize,
    opaque: Vec<Opaque>,
}

impl Sff8636 {
    /// Offset of upper page 00h within the dump
    pub const UPPER_BASE: usize = 128;
    /// Lower page plus upper page 00h
    pub const WIDTH: usize = 256;
    /// Lower page plus upper pages 00h-03h
    pub const DUMP_WIDTH: usize = 640;
    /// Power control byte of the lower page
    pub const POWER_CONTROL: usize = 93;

    /// Decode a dump whose lower page starts at `base`
    pub fn decode(buffer: &[u8], base: usize) -> Result<Self> {
        let map = ByteMap::new(buffer, base, Self::WIDTH)?;
        let upper_base = base + Self::UPPER_BASE;
        let upper_map = map.rebase(upper_base, Self::WIDTH - Self::UPPER_BASE)?;
        log::debug!(
            "Decoding SFF-8636 map at {:#x}, upper page at {:#x} ({} byte buffer)",
            base,
            upper_base,
            buffer.len()
        );
        let dump_end = base.saturating_add(Self::DUMP_WIDTH);
        if buffer.len() > dump_end {
            log::warn!(
                "{} bytes past page 03h are kept undecoded",
                buffer.len() - dump_end
            );
        }

        let header = Sff8024::decode(buffer, base)?;
        let upper = UpperPage::read(&upper_map);

        let named: Vec<_> = Sff8024::FIELDS
            .iter()
            .map(|f| f.range(base))
            .chain(UpperPage::FIELDS.iter().map(|f| f.range(upper_base)))
            .collect();

        Ok(Self {
            header,
            upper,
            base,
            len: buffer.len(),
            opaque: map.opaque(&named),
        })
    }

    /// Field specs with the record base they are read at
    pub fn specs() -> impl Iterator<Item = (usize, &'static FieldSpec)> {
        Sff8024::FIELDS
            .iter()
            .map(|spec| (0, spec))
            .chain(UpperPage::FIELDS.iter().map(|spec| (Self::UPPER_BASE, spec)))
    }

    /// Named fields in declared order
    pub fn entries(&self) -> Vec<Entry<'_>> {
        let mut entries = self.header.entries(self.base);
        entries.extend(self.upper.entries(self.base + Self::UPPER_BASE));
        entries
    }

    /// Regions kept without interpretation
    pub fn opaque(&self) -> &[Opaque] {
        &self.opaque
    }

    /// Rebuild the exact input buffer
    pub fn to_bytes(&self) -> Vec<u8> {
        assemble(self.len, &self.opaque, &self.entries())
    }

    /// Module identifier (byte 0)
    pub fn identifier(&self) -> Identifier {
        self.header.identifier
    }

    /// Identifier repeated at the start of upper page 00h (byte 128)
    pub fn page_identifier(&self) -> Identifier {
        Identifier(opaque_byte(&self.opaque, self.base + Self::UPPER_BASE).unwrap_or_default())
    }

    /// 10/40G Ethernet compliance, first byte of the specification compliance
    pub fn spec_compliance(&self) -> SpecComp {
        SpecComp::decode(&self.upper.transceiver.0)
    }

    /// Power mode from the power control byte of the lower page
    pub fn power_mode(&self) -> PwrMode {
        let byte = opaque_byte(&self.opaque, self.base + Self::POWER_CONTROL);
        PwrMode::decode(&[byte.unwrap_or_default()])
    }

    /// Whether pages 01h-03h are present
    pub fn has_upper_pages(&self) -> bool {
        self.len >= self.base.saturating_add(Self::DUMP_WIDTH)
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
        let qsfp = Sff8636::decode(&fixtures::qsfp28(), 0).unwrap();
        assert_eq!(qsfp.identifier().describe(), "QSFP28");
        assert_eq!(qsfp.page_identifier().describe(), "QSFP28");

        let u = &qsfp.upper;
        assert_eq!(u.connector.describe(), "MPO Parallel Optic");
        assert_eq!(u.encoding.describe(), "64B/66B");
        assert_eq!(u.br_nominal.describe(), "25500 Mb/s");
        assert_eq!(u.length_om3.describe(), "70 m");
        assert_eq!(u.length_copper.describe(), "100 m");
        assert_eq!(u.vendor_name.describe(), "FINISAR CORP");
        assert_eq!(u.vendor_pn.describe(), "FTLC9551REPM");
        assert_eq!(u.vendor_rev.describe(), "A0");
        assert_eq!(u.link_codes.describe(), "100G Base-SR4 or 25GBase-SR");
        assert_eq!(u.date_code.describe(), "2017-03-01");
        assert_eq!(u.br_nominal_ext.describe(), "25750 Mb/s");
        assert!(qsfp.has_upper_pages());
    }

    #[test]
    fn test_fields_read_at_absolute_offsets() {
        let qsfp = Sff8636::decode(&fixtures::qsfp28(), 0).unwrap();
        for entry in qsfp.entries() {
            if entry.spec.key == "identifier" {
                assert_eq!(entry.offset, 0);
            } else {
                assert_eq!(entry.offset, 128 + entry.spec.offset);
            }
        }

        // Moving a byte in the lower page must not change the upper page view
        let mut buf = fixtures::qsfp28();
        buf[2] = 0x07;
        let shifted = Sff8636::decode(&buf, 0).unwrap();
        assert_eq!(shifted.upper.connector.describe(), "MPO Parallel Optic");
    }

    #[test]
    fn test_upper_page_coverage() {
        let mut pos = 1;
        for spec in UpperPage::FIELDS {
            assert_eq!(spec.offset, pos, "gap or overlap before {}", spec.key);
            pos += spec.len;
        }
        assert_eq!(pos, 96);
    }

    #[test]
    fn test_derived_accessors() {
        let qsfp = Sff8636::decode(&fixtures::qsfp28(), 0).unwrap();
        assert_eq!(
            qsfp.spec_compliance().list(),
            vec!["Extended: see link codes (byte 192)"]
        );
        assert_eq!(
            qsfp.power_mode().list(),
            vec!["Power override", "High power class (> 3.5 W) enabled"]
        );
        assert_eq!(
            qsfp.upper.ext_identifier.list(),
            vec![
                "3.5 W max. power consumption",
                "No CLEI code present",
                "CDR in TX",
                "CDR in RX",
            ]
        );
    }

    #[test]
    fn test_minimum_width() {
        let buf = fixtures::qsfp28();
        assert_eq!(
            Sff8636::decode(&buf[..255], 0).err(),
            Some(DecodeError::BufferTooShort {
                expected: 256,
                actual: 255
            })
        );
        let short = Sff8636::decode(&buf[..256], 0).unwrap();
        assert!(!short.has_upper_pages());
        assert_eq!(short.upper, Sff8636::decode(&buf, 0).unwrap().upper);
    }

    #[test]
    fn test_to_bytes_is_exact() {
        let buf = fixtures::qsfp28();
        assert_eq!(Sff8636::decode(&buf, 0).unwrap().to_bytes(), buf);
    }

    #[test]
    fn test_specs_bases() {
        let specs: Vec<_> = Sff8636::specs().collect();
        assert_eq!(specs[0].1.key, "identifier");
        assert_eq!(specs[0].0, 0);
        assert_eq!(specs[1].1.key, "ext_identifier");
        assert!(specs[1..].iter().all(|(base, _)| *base == 128));
    }

    #[test]
    fn test_power_control_stays_opaque() {
        let qsfp = Sff8636::decode(&fixtures::qsfp28(), 0).unwrap();
        assert!(qsfp.entries().iter().all(|e| !e.range().contains(&93)));
        assert_eq!(opaque_byte(qsfp.opaque(), 93), Some(0x05));
        assert_eq!(qsfp.power_mode(), PwrMode(0x05));
    }

    #[test]
    fn test_base_overflow_is_too_short() {
        assert_eq!(
            Sff8636::decode(&[0u8; 640], usize::MAX - 10).err(),
            Some(DecodeError::BufferTooShort {
                expected: usize::MAX,
                actual: 640
            })
        );
    }
}
