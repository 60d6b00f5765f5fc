//! SFF-8636 specific field types
//!
//! Besides the table driven fields, three single-byte fields pack several
//! sub-fields and are decoded by hand: the extended identifier (byte 129),
//! device technology (byte 147) and power control (lower page byte 93).

use bitflags::bitflags;

use super::{Decode, Decoded, Field, FieldKind};
use crate::codes::sff8636;

code_field!(
    /// Serial encoding (byte 139)
    Encoding => sff8636::ENCODING
);

flag_field!(
    /// Specification compliance codes (bytes 131-138)
    Transceiver, 8 => sff8636::TRANSCEIVER
);

flag_field!(
    /// 10/40G Ethernet compliance (byte 131)
    SpecComp, 1 => sff8636::SPEC_COMP
);

flag_field!(
    /// Extended module codes (byte 164)
    ExtModule, 1 => sff8636::EXT_MODULE
);

bitflags! {
    /// Single-bit sub-fields of the extended identifier
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ExtIdentifierFlags: u8 {
        /// Power class 8 implemented
        const POWER_CLASS_8 = 1 << 5;
        /// CLEI code present in page 02h
        const CLEI_CODE     = 1 << 4;
        /// CDR present in TX
        const CDR_TX        = 1 << 3;
        /// CDR present in RX
        const CDR_RX        = 1 << 2;
    }
}

/// Extended identifier (byte 129)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExtIdentifier(pub u8);

impl ExtIdentifier {
    /// Sub-field flags
    pub fn flags(&self) -> ExtIdentifierFlags {
        ExtIdentifierFlags::from_bits_truncate(self.0)
    }

    /// Power class 1-4 (bits 7-6)
    pub fn power_class(&self) -> u8 {
        self.0 >> 6
    }

    /// Extended power class 5-7 (bits 1-0), 0 when unused
    pub fn ext_power_class(&self) -> u8 {
        self.0 & 0x03
    }

    /// Description of every sub-field
    pub fn list(&self) -> Vec<&'static str> {
        let flags = self.flags();
        let mut out = vec![sff8636::POWER_CLASS.lookup(self.power_class())];
        if flags.contains(ExtIdentifierFlags::POWER_CLASS_8) {
            out.push(sff8636::POWER_CLASS_8);
        }
        out.push(sff8636::CLEI_CODE[flags.contains(ExtIdentifierFlags::CLEI_CODE) as usize]);
        out.push(sff8636::CDR_IN_TX[flags.contains(ExtIdentifierFlags::CDR_TX) as usize]);
        out.push(sff8636::CDR_IN_RX[flags.contains(ExtIdentifierFlags::CDR_RX) as usize]);
        if self.ext_power_class() != 0 {
            out.push(sff8636::EXT_POWER_CLASS.lookup(self.ext_power_class()));
        }
        out
    }
}

impl Field for ExtIdentifier {
    fn kind(&self) -> FieldKind {
        FieldKind::BitFlags
    }

    fn raw(&self) -> &[u8] {
        core::slice::from_ref(&self.0)
    }

    fn decoded(&self) -> Decoded {
        Decoded::list(self.list())
    }
}

impl Decode for ExtIdentifier {
    const WIDTH: usize = 1;

    fn decode(raw: &[u8]) -> Self {
        Self(raw.first().copied().unwrap_or(0))
    }
}

bitflags! {
    /// Low nibble of the device technology byte
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DeviceTechnologyFlags: u8 {
        /// Active wavelength control
        const WAVELENGTH_CONTROL = 1 << 3;
        /// Cooled transmitter
        const COOLED             = 1 << 2;
        /// APD detector instead of PIN
        const APD_DETECTOR       = 1 << 1;
        /// Tunable transmitter
        const TUNABLE            = 1 << 0;
    }
}

/// Device technology (byte 147)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeviceTechnology(pub u8);

impl DeviceTechnology {
    /// Transmitter technology code (bits 7-4)
    pub fn transmitter(&self) -> u8 {
        self.0 >> 4
    }

    /// Low nibble flags
    pub fn flags(&self) -> DeviceTechnologyFlags {
        DeviceTechnologyFlags::from_bits_truncate(self.0)
    }

    /// Transmitter technology followed by the four low nibble properties
    pub fn list(&self) -> Vec<&'static str> {
        let flags = self.flags();
        let pick = |table: [&'static str; 2], flag| table[flags.contains(flag) as usize];
        vec![
            sff8636::TRANSMITTER_TECHNOLOGY.lookup(self.transmitter()),
            pick(sff8636::WAVELENGTH_CONTROL, DeviceTechnologyFlags::WAVELENGTH_CONTROL),
            pick(sff8636::TRANSMITTER_COOLING, DeviceTechnologyFlags::COOLED),
            pick(sff8636::DETECTOR, DeviceTechnologyFlags::APD_DETECTOR),
            pick(sff8636::TRANSMITTER_TUNING, DeviceTechnologyFlags::TUNABLE),
        ]
    }
}

impl Field for DeviceTechnology {
    fn kind(&self) -> FieldKind {
        FieldKind::BitFlags
    }

    fn raw(&self) -> &[u8] {
        core::slice::from_ref(&self.0)
    }

    fn decoded(&self) -> Decoded {
        Decoded::list(self.list())
    }
}

impl Decode for DeviceTechnology {
    const WIDTH: usize = 1;

    fn decode(raw: &[u8]) -> Self {
        Self(raw.first().copied().unwrap_or(0))
    }
}

bitflags! {
    /// Power control bits (lower page byte 93)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PowerControl: u8 {
        /// Override LPMode pin with the power set bit
        const OVERRIDE         = 1 << 0;
        /// Power set to low power mode
        const LOW_POWER        = 1 << 1;
        /// Power classes 5-7 enabled
        const HIGH_POWER_CLASS = 1 << 2;
        /// Power class 8 enabled
        const POWER_CLASS_8    = 1 << 3;
    }
}

/// Power mode, decoded from the power control byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PwrMode(pub u8);

impl PwrMode {
    /// Power control flags
    pub fn flags(&self) -> PowerControl {
        PowerControl::from_bits_truncate(self.0)
    }

    /// Set flags ascending by bit; the high power class bit is always reported
    pub fn list(&self) -> Vec<&'static str> {
        let flags = self.flags();
        sff8636::POWER_CONTROL
            .entries()
            .iter()
            .filter_map(|&(mask, name)| {
                let set = u64::from(flags.bits()) & mask != 0;
                if mask == u64::from(PowerControl::HIGH_POWER_CLASS.bits()) {
                    Some(if set { name } else { sff8636::HIGH_POWER_CLASS_DISABLED })
                } else {
                    set.then_some(name)
                }
            })
            .collect()
    }
}

impl Field for PwrMode {
    fn kind(&self) -> FieldKind {
        FieldKind::BitFlags
    }

    fn raw(&self) -> &[u8] {
        core::slice::from_ref(&self.0)
    }

    fn decoded(&self) -> Decoded {
        Decoded::list(self.list())
    }
}

impl Decode for PwrMode {
    const WIDTH: usize = 1;

    fn decode(raw: &[u8]) -> Self {
        Self(raw.first().copied().unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_comp() {
        let s = SpecComp::decode(&[0x04]);
        assert_eq!(s.list(), vec!["40G Ethernet: 40G Base-SR4"]);
        let s = SpecComp::decode(&[0x80]);
        assert_eq!(s.describe(), "Extended: see link codes (byte 192)");
    }

    #[test]
    fn test_transceiver_uses_qsfp_table() {
        // Byte 133 bit 0 is SAS 3.0G here; unallocated in the SFP table
        let t = Transceiver::decode(&[0, 0, 0x10, 0, 0, 0, 0, 0]);
        assert_eq!(t.list(), vec!["SAS 3.0G"]);
    }

    #[test]
    fn test_ext_identifier() {
        // Power class 4, CDR in TX and RX, power class 5
        let e = ExtIdentifier::decode(&[0xcd]);
        assert_eq!(e.power_class(), 3);
        assert_eq!(
            e.list(),
            vec![
                "3.5 W max. power consumption",
                "No CLEI code present",
                "CDR in TX",
                "CDR in RX",
                "4.0 W max. power consumption",
            ]
        );
    }

    #[test]
    fn test_ext_identifier_minimal() {
        let e = ExtIdentifier::decode(&[0x00]);
        assert_eq!(
            e.describe(),
            "1.5 W max. power consumption, No CLEI code present, No CDR in TX, No CDR in RX"
        );
        let e = ExtIdentifier::decode(&[0x30]);
        assert!(e.list().contains(&"Power Class 8 implemented"));
        assert!(e.list().contains(&"CLEI code present"));
    }

    #[test]
    fn test_device_technology() {
        let d = DeviceTechnology::decode(&[0x0a]);
        assert_eq!(
            d.list(),
            vec![
                "850 nm VCSEL",
                "Active wavelength control",
                "Uncooled transmitter device",
                "APD detector",
                "Transmitter not tunable",
            ]
        );
        assert_eq!(DeviceTechnology(0xa0).list()[0], "Copper cable unequalized");
    }

    #[test]
    fn test_pwr_mode() {
        assert_eq!(
            PwrMode::decode(&[0x00]).list(),
            vec!["High power class (> 3.5 W) not enabled"]
        );
        assert_eq!(
            PwrMode::decode(&[0x05]).list(),
            vec!["Power override", "High power class (> 3.5 W) enabled"]
        );
        assert_eq!(PwrMode(0x0a).list().len(), 3);
    }

    #[test]
    fn test_ext_module() {
        let m = ExtModule::decode(&[0x12]);
        assert_eq!(m.list(), vec!["Infiniband: DDR", "Infiniband: EDR"]);
    }
}
