//! SFF-8024 code tables shared by all module families

use super::CodeTable;

/// Identifier values (SFF-8024 table 4-1)
pub mod identifier {
    /// Module soldered to motherboard
    pub const SOLDERED: u8 = 0x02;
    /// SFP/SFP+/SFP28
    pub const SFP: u8 = 0x03;
    /// QSFP (INF-8438)
    pub const QSFP: u8 = 0x0C;
    /// QSFP+ or later (SFF-8436/8636)
    pub const QSFP_PLUS: u8 = 0x0D;
    /// QSFP28 or later (SFF-8636)
    pub const QSFP28: u8 = 0x11;
}

/// Form factor of the module
pub static IDENTIFIER: CodeTable = CodeTable::new(
    "identifier",
    &[
        (0x00, "No module present, unknown, or unspecified"),
        (0x01, "GBIC"),
        (0x02, "Module soldered to motherboard"),
        (0x03, "SFP"),
        (0x04, "300 pin XBI"),
        (0x05, "XENPAK"),
        (0x06, "XFP"),
        (0x07, "XFF"),
        (0x08, "XFP-E"),
        (0x09, "XPAK"),
        (0x0A, "X2"),
        (0x0B, "DWDM-SFP"),
        (0x0C, "QSFP"),
        (0x0D, "QSFP+"),
        (0x0E, "CXP"),
        (0x0F, "Shielded Mini Multilane HD 4X"),
        (0x10, "Shielded Mini Multilane HD 8X"),
        (0x11, "QSFP28"),
        (0x12, "CXP2/CXP28"),
        (0x13, "CDFP Style 1/Style 2"),
        (0x14, "Shielded Mini Multilane HD 4X Fanout Cable"),
        (0x15, "Shielded Mini Multilane HD 8X Fanout Cable"),
        (0x16, "CDFP Style 3"),
        (0x17, "MicroQSFP"),
        (0x18, "QSFP-DD Double Density 8X Pluggable Transceiver"),
        (0x19, "OSFP 8X Pluggable Transceiver"),
        (0x1A, "SFP-DD Double Density 2X Pluggable Transceiver"),
        (0x1B, "DSFP Dual Small Form Factor Pluggable Transceiver"),
        (0x1C, "x4 MiniLink/OcuLink"),
        (0x1D, "x8 MiniLink"),
        (0x1E, "QSFP+ or later with CMIS"),
    ],
);

/// Physical connector (SFF-8024 table 4-3)
pub static CONNECTOR: CodeTable = CodeTable::new(
    "connector",
    &[
        (0x00, "Unknown or unspecified"),
        (0x01, "SC"),
        (0x02, "Fibre Channel style 1 copper"),
        (0x03, "Fibre Channel style 2 copper"),
        (0x04, "BNC/TNC"),
        (0x05, "Fibre Channel coaxial headers"),
        (0x06, "FibreJack"),
        (0x07, "LC"),
        (0x08, "MT-RJ"),
        (0x09, "MU"),
        (0x0A, "SG"),
        (0x0B, "Optical pigtail"),
        (0x0C, "MPO Parallel Optic"),
        (0x0D, "MPO Parallel Optic - 2x16"),
        (0x20, "HSSDC II"),
        (0x21, "Copper pigtail"),
        (0x22, "RJ45"),
        (0x23, "No separable connector"),
        (0x24, "MXC 2x16"),
        (0x25, "CS optical connector"),
        (0x26, "SN optical connector"),
        (0x27, "MPO 2x12"),
        (0x28, "MPO 1x16"),
    ],
);

/// Extended specification compliance codes (SFF-8024 table 4-4)
///
/// Used by SFF-8079 byte 36 and SFF-8636 byte 192.
pub static LINK_CODES: CodeTable = CodeTable::new(
    "link codes",
    &[
        (0x00, "Unspecified"),
        (0x01, "100G AOC or 25GAUI C2M AOC with worst BER of 5x10^(-5)"),
        (0x02, "100G Base-SR4 or 25GBase-SR"),
        (0x03, "100G Base-LR4 or 25GBase-LR"),
        (0x04, "100G Base-ER4 or 25GBase-ER"),
        (0x05, "100G Base-SR10"),
        (0x06, "100G CWDM4 MSA with FEC"),
        (0x07, "100G PSM4 Parallel SMF"),
        (0x08, "100G ACC or 25GAUI C2M ACC with worst BER of 5x10^(-5)"),
        (0x09, "100G CWDM4 MSA without FEC"),
        (0x0B, "100G Base-CR4 or 25G Base-CR CA-L"),
        (0x0C, "25G Base-CR CA-S"),
        (0x0D, "25G Base-CR CA-N"),
        (0x10, "40G Base-ER4"),
        (0x11, "4x10G Base-SR"),
        (0x12, "40G PSM4 Parallel SMF"),
        (0x13, "G959.1 profile P1I1-2D1 (10709 MBd, 2km, 1310nm SM)"),
        (0x14, "G959.1 profile P1S1-2D2 (10709 MBd, 40km, 1550nm SM)"),
        (0x15, "G959.1 profile P1L1-2D2 (10709 MBd, 80km, 1550nm SM)"),
        (0x16, "10G Base-T with SFI electrical interface"),
        (0x17, "100G CLR4"),
        (0x18, "100G AOC or 25GAUI C2M AOC with worst BER of 10^(-12)"),
        (0x19, "100G ACC or 25GAUI C2M ACC with worst BER of 10^(-12)"),
        (0x1A, "100GE-DWDM2 (DWDM transceiver using 2 wavelengths on a 1550nm DWDM grid)"),
        (0x1B, "100G 1550nm WDM (4 wavelengths)"),
        (0x1C, "10G Base-T Short Reach (30 meters)"),
        (0x1D, "5G Base-T"),
        (0x1E, "2.5G Base-T"),
        (0x1F, "40G SWDM4"),
        (0x20, "100G SWDM4"),
        (0x21, "100G PAM4 BiDi"),
    ],
);
