//! SFF-8636 (QSFP+/QSFP28) code tables

use super::{CodeTable, FlagTable};

/// Serial encoding (SFF-8024 table 4-2, SFF-8636 column)
pub static ENCODING: CodeTable = CodeTable::new(
    "SFF-8636 encoding",
    &[
        (0x00, "Unspecified"),
        (0x01, "8B/10B"),
        (0x02, "4B/5B"),
        (0x03, "NRZ"),
        (0x04, "SONET Scrambled"),
        (0x05, "64B/66B"),
        (0x06, "Manchester"),
        (0x07, "256B/257B (transcoded FEC-enabled data)"),
        (0x08, "PAM4"),
    ],
);

/// Power class, extended identifier bits 7-6 (shifted down)
pub static POWER_CLASS: CodeTable = CodeTable::new(
    "SFF-8636 power class",
    &[
        (0, "1.5 W max. power consumption"),
        (1, "2.0 W max. power consumption"),
        (2, "2.5 W max. power consumption"),
        (3, "3.5 W max. power consumption"),
    ],
);

/// Extended power class, extended identifier bits 1-0
pub static EXT_POWER_CLASS: CodeTable = CodeTable::new(
    "SFF-8636 extended power class",
    &[
        (0, "unused (legacy setting)"),
        (1, "4.0 W max. power consumption"),
        (2, "4.5 W max. power consumption"),
        (3, "5.0 W max. power consumption"),
    ],
);

/// Extended identifier bit 5 set
pub const POWER_CLASS_8: &str = "Power Class 8 implemented";
/// Extended identifier bit 4 set/clear
pub const CLEI_CODE: [&str; 2] = ["No CLEI code present", "CLEI code present"];
/// Extended identifier bit 3 set/clear
pub const CDR_IN_TX: [&str; 2] = ["No CDR in TX", "CDR in TX"];
/// Extended identifier bit 2 set/clear
pub const CDR_IN_RX: [&str; 2] = ["No CDR in RX", "CDR in RX"];

/// Transmitter technology, device technology bits 7-4 (shifted down)
pub static TRANSMITTER_TECHNOLOGY: CodeTable = CodeTable::new(
    "SFF-8636 transmitter technology",
    &[
        (0x0, "850 nm VCSEL"),
        (0x1, "1310 nm VCSEL"),
        (0x2, "1550 nm VCSEL"),
        (0x3, "1310 nm FP"),
        (0x4, "1310 nm DFB"),
        (0x5, "1550 nm DFB"),
        (0x6, "1310 nm EML"),
        (0x7, "1550 nm EML"),
        (0x8, "Other / Undefined"),
        (0x9, "1490 nm DFB"),
        (0xA, "Copper cable unequalized"),
        (0xB, "Copper cable passive equalized"),
        (0xC, "Copper cable, near and far end limiting active equalizers"),
        (0xD, "Copper cable, far end limiting active equalizers"),
        (0xE, "Copper cable, near end limiting active equalizers"),
        (0xF, "Copper cable, linear active equalizers"),
    ],
);

/// Device technology bit 3 clear/set
pub const WAVELENGTH_CONTROL: [&str; 2] = ["No wavelength control", "Active wavelength control"];
/// Device technology bit 2 clear/set
pub const TRANSMITTER_COOLING: [&str; 2] = ["Uncooled transmitter device", "Cooled transmitter"];
/// Device technology bit 1 clear/set
pub const DETECTOR: [&str; 2] = ["Pin detector", "APD detector"];
/// Device technology bit 0 clear/set
pub const TRANSMITTER_TUNING: [&str; 2] = ["Transmitter not tunable", "Transmitter tunable"];

/// 10/40G Ethernet compliance, byte 131 alone
pub static SPEC_COMP: FlagTable = FlagTable::new(
    "SFF-8636 specification compliance",
    &[
        (1 << 0, "40G Ethernet: 40G Active Cable (XLPPI)"),
        (1 << 1, "40G Ethernet: 40G Base-LR4"),
        (1 << 2, "40G Ethernet: 40G Base-SR4"),
        (1 << 3, "40G Ethernet: 40G Base-CR4"),
        (1 << 4, "10G Ethernet: 10G Base-SR"),
        (1 << 5, "10G Ethernet: 10G Base-LR"),
        (1 << 6, "10G Ethernet: 10G Base-LRM"),
        (1 << 7, "Extended: see link codes (byte 192)"),
    ],
);

/// Specification compliance codes (bytes 131-138)
pub static TRANSCEIVER: FlagTable = FlagTable::new(
    "SFF-8636 transceiver",
    &[
        // Byte 131: 10/40G/100G Ethernet
        (1 << 0, "40G Ethernet: 40G Active Cable (XLPPI)"),
        (1 << 1, "40G Ethernet: 40G Base-LR4"),
        (1 << 2, "40G Ethernet: 40G Base-SR4"),
        (1 << 3, "40G Ethernet: 40G Base-CR4"),
        (1 << 4, "10G Ethernet: 10G Base-SR"),
        (1 << 5, "10G Ethernet: 10G Base-LR"),
        (1 << 6, "10G Ethernet: 10G Base-LRM"),
        (1 << 7, "Extended: see link codes (byte 192)"),
        // Byte 132: SONET
        (1 << 8, "SONET: OC-48, short reach"),
        (1 << 9, "SONET: OC-48, intermediate reach"),
        (1 << 10, "SONET: OC-48, long reach"),
        (1 << 11, "40G OTN (OTU3B/OTU3C)"),
        // Byte 133: SAS/SATA
        (1 << 20, "SAS 3.0G"),
        (1 << 21, "SAS 6.0G"),
        (1 << 22, "SAS 12.0G"),
        (1 << 23, "SAS 24.0G"),
        // Byte 134: Gigabit Ethernet
        (1 << 24, "Ethernet: 1000BASE-SX"),
        (1 << 25, "Ethernet: 1000BASE-LX"),
        (1 << 26, "Ethernet: 1000BASE-CX"),
        (1 << 27, "Ethernet: 1000BASE-T"),
        // Byte 135: FC link length / transmitter technology
        (1 << 32, "FC: Electrical inter-enclosure (EL)"),
        (1 << 33, "FC: Longwave laser (LC)"),
        (1 << 35, "FC: medium distance (M)"),
        (1 << 36, "FC: long distance (L)"),
        (1 << 37, "FC: intermediate distance (I)"),
        (1 << 38, "FC: short distance (S)"),
        (1 << 39, "FC: very long distance (V)"),
        // Byte 136: FC transmitter technology
        (1 << 44, "FC: Longwave laser (LL)"),
        (1 << 45, "FC: Shortwave laser with OFC (SL)"),
        (1 << 46, "FC: Shortwave laser w/o OFC (SN)"),
        (1 << 47, "FC: Electrical intra-enclosure (EL)"),
        // Byte 137: FC transmission media
        (1 << 48, "FC: Single Mode (SM)"),
        (1 << 49, "FC: Multimode, 50um (OM3)"),
        (1 << 50, "FC: Multimode, 50um (M5)"),
        (1 << 51, "FC: Multimode, 62.5um (M6)"),
        (1 << 52, "FC: Video Coax (TV)"),
        (1 << 53, "FC: Miniature Coax (MI)"),
        (1 << 54, "FC: Twisted Pair (TP)"),
        (1 << 55, "FC: Twin Axial Pair (TW)"),
        // Byte 138: FC speed
        (1 << 56, "FC: 100 MBytes/sec"),
        (1 << 58, "FC: 200 MBytes/sec"),
        (1 << 59, "FC: 3200 MBytes/sec"),
        (1 << 60, "FC: 400 MBytes/sec"),
        (1 << 61, "FC: 1600 MBytes/sec"),
        (1 << 62, "FC: 800 MBytes/sec"),
        (1 << 63, "FC: 1200 MBytes/sec"),
    ],
);

/// Extended module codes (byte 164)
pub static EXT_MODULE: FlagTable = FlagTable::new(
    "SFF-8636 extended module codes",
    &[
        (1 << 0, "Infiniband: SDR"),
        (1 << 1, "Infiniband: DDR"),
        (1 << 2, "Infiniband: QDR"),
        (1 << 3, "Infiniband: FDR"),
        (1 << 4, "Infiniband: EDR"),
        (1 << 5, "Infiniband: HDR"),
    ],
);

/// Power control (lower page byte 93)
pub static POWER_CONTROL: FlagTable = FlagTable::new(
    "SFF-8636 power control",
    &[
        (1 << 0, "Power override"),
        (1 << 1, "Power set: low power mode"),
        (1 << 2, "High power class (> 3.5 W) enabled"),
        (1 << 3, "Power class 8 enabled"),
    ],
);

/// Reported when power control bit 2 is clear
pub const HIGH_POWER_CLASS_DISABLED: &str = "High power class (> 3.5 W) not enabled";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_comp_bit_assignment() {
        // 40GBASE-SR4 is bit 2, 10GBASE-SR is bit 4
        assert_eq!(SPEC_COMP.matches(1 << 2), vec!["40G Ethernet: 40G Base-SR4"]);
        assert_eq!(SPEC_COMP.matches(1 << 4), vec!["10G Ethernet: 10G Base-SR"]);
        assert_eq!(
            SPEC_COMP.matches(0x80),
            vec!["Extended: see link codes (byte 192)"]
        );
    }

    #[test]
    fn test_spec_comp_matches_transceiver_byte_131() {
        for bit in 0..8 {
            assert_eq!(SPEC_COMP.matches(1 << bit), TRANSCEIVER.matches(1 << bit));
        }
    }

    #[test]
    fn test_encoding_qsfp_column() {
        assert_eq!(ENCODING.lookup(0x04), "SONET Scrambled");
        assert_eq!(ENCODING.lookup(0x05), "64B/66B");
        assert_eq!(ENCODING.lookup(0x06), "Manchester");
    }

    #[test]
    fn test_transmitter_technology_covers_nibble() {
        for nibble in 0..16u8 {
            assert!(TRANSMITTER_TECHNOLOGY.get(nibble).is_some());
        }
    }
}
