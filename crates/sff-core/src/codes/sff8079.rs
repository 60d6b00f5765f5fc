//! SFF-8079 (SFP/SFP+) code tables

use super::{CodeTable, FlagTable, UNKNOWN};

/// Extended identifier value for modules described by the two-wire ID
pub const EXT_IDENTIFIER_TWO_WIRE_ID: u8 = 0x04;

/// Serial encoding (SFF-8024 table 4-2, SFF-8472 column)
pub static ENCODING: CodeTable = CodeTable::new(
    "SFF-8079 encoding",
    &[
        (0x00, "Unspecified"),
        (0x01, "8B/10B"),
        (0x02, "4B/5B"),
        (0x03, "NRZ"),
        (0x04, "Manchester"),
        (0x05, "SONET Scrambled"),
        (0x06, "64B/66B"),
        (0x07, "256B/257B (transcoded FEC-enabled data)"),
        (0x08, "PAM4"),
    ],
);

/// Extended identifier (byte 1)
pub static EXT_IDENTIFIER: CodeTable = CodeTable::new(
    "SFF-8079 extended identifier",
    &[
        (0x00, "GBIC not specified / not MOD_DEF compliant"),
        (0x01, "GBIC compliant with MOD_DEF 1"),
        (0x02, "GBIC compliant with MOD_DEF 2"),
        (0x03, "GBIC compliant with MOD_DEF 3"),
        (0x04, "GBIC/SFP defined by 2-wire interface ID"),
        (0x05, "GBIC compliant with MOD_DEF 5"),
        (0x06, "GBIC compliant with MOD_DEF 6"),
        (0x07, "GBIC compliant with MOD_DEF 7"),
    ],
)
.with_fallback(UNKNOWN);

/// Rate identifier (byte 13)
pub static RATE_IDENTIFIER: CodeTable = CodeTable::new(
    "SFF-8079 rate identifier",
    &[
        (0x00, "Unspecified"),
        (0x01, "SFF-8079 (4/2/1G Rate_Select & AS0/AS1)"),
        (0x02, "SFF-8431 (8/4/2G Rx Rate_Select only)"),
        (0x04, "SFF-8431 (8/4/2G Tx Rate_Select only)"),
        (0x06, "SFF-8431 (8/4/2G Independent Rx & Tx Rate_select)"),
        (0x08, "FC-PI-5 (16/8/4G Rx Rate_select only) High=16G only, Low=8G/4G"),
        (0x0A, "FC-PI-5 (16/8/4G Independent Rx, Tx Rate_select) High=16G only, Low=8G/4G"),
        (0x0C, "FC-PI-6 (32/16/8G Independent Rx, Tx Rate_Select) High=32G only, Low=16G/8G"),
        (0x0E, "10/8G Rx and Tx Rate_Select controlling CDR operation or locking modes"),
        (0x10, "FC-PI-7 (64/32/16G Independent Rx, Tx Rate Select) High=32GFC and 64GFC, Low=16GFC"),
    ],
);

/// Transceiver compliance codes (bytes 3-10)
///
/// Byte 3 holds 10G Ethernet and Infiniband, bytes 4-5 ESCON and SONET,
/// byte 6 Ethernet, bytes 7-10 Fibre Channel link length, technology, media
/// and speed.
pub static TRANSCEIVER: FlagTable = FlagTable::new(
    "SFF-8079 transceiver",
    &[
        // Byte 3: 10G Ethernet / Infiniband
        (1 << 0, "Infiniband: 1X Copper Passive"),
        (1 << 1, "Infiniband: 1X Copper Active"),
        (1 << 2, "Infiniband: 1X LX"),
        (1 << 3, "Infiniband: 1X SX"),
        (1 << 4, "10G Ethernet: 10G Base-SR"),
        (1 << 5, "10G Ethernet: 10G Base-LR"),
        (1 << 6, "10G Ethernet: 10G Base-LRM"),
        (1 << 7, "10G Ethernet: 10G Base-ER"),
        // Byte 4: ESCON / SONET
        (1 << 8, "SONET: OC-48, short reach"),
        (1 << 9, "SONET: OC-48, intermediate reach"),
        (1 << 10, "SONET: OC-48, long reach"),
        (1 << 11, "SONET: SONET reach specifier bit 2"),
        (1 << 12, "SONET: SONET reach specifier bit 1"),
        (1 << 13, "SONET: OC-192, short reach"),
        (1 << 14, "ESCON: ESCON SMF, 1310nm Laser"),
        (1 << 15, "ESCON: ESCON MMF, 1310nm LED"),
        // Byte 5: SONET
        (1 << 16, "SONET: OC-3, short reach"),
        (1 << 17, "SONET: OC-3, single mode, inter. reach"),
        (1 << 18, "SONET: OC-3, single mode, long reach"),
        (1 << 20, "SONET: OC-12, short reach"),
        (1 << 21, "SONET: OC-12, single mode, inter. reach"),
        (1 << 22, "SONET: OC-12, single mode, long reach"),
        // Byte 6: Ethernet
        (1 << 24, "Ethernet: 1000BASE-SX"),
        (1 << 25, "Ethernet: 1000BASE-LX"),
        (1 << 26, "Ethernet: 1000BASE-CX"),
        (1 << 27, "Ethernet: 1000BASE-T"),
        (1 << 28, "Ethernet: 100BASE-LX/LX10"),
        (1 << 29, "Ethernet: 100BASE-FX"),
        (1 << 30, "Ethernet: BASE-BX10"),
        (1 << 31, "Ethernet: BASE-PX"),
        // Byte 7: FC link length / technology
        (1 << 32, "FC: Electrical inter-enclosure (EL)"),
        (1 << 33, "FC: Longwave laser (LC)"),
        (1 << 34, "FC: Shortwave laser, linear Rx (SA)"),
        (1 << 35, "FC: medium distance (M)"),
        (1 << 36, "FC: long distance (L)"),
        (1 << 37, "FC: intermediate distance (I)"),
        (1 << 38, "FC: short distance (S)"),
        (1 << 39, "FC: very long distance (V)"),
        // Byte 8: FC technology / SFP+ cable technology
        (1 << 41, "FC: Copper FC-BaseT"),
        (1 << 42, "Passive Cable"),
        (1 << 43, "Active Cable"),
        (1 << 44, "FC: Longwave laser (LL)"),
        (1 << 45, "FC: Shortwave laser with OFC (SL)"),
        (1 << 46, "FC: Shortwave laser w/o OFC (SN)"),
        (1 << 47, "FC: Electrical intra-enclosure (EL)"),
        // Byte 9: FC transmission media
        (1 << 48, "FC: Single Mode (SM)"),
        (1 << 50, "FC: Multimode, 50um (M5)"),
        (1 << 51, "FC: Multimode, 62.5um (M6)"),
        (1 << 52, "FC: Video Coax (TV)"),
        (1 << 53, "FC: Miniature Coax (MI)"),
        (1 << 54, "FC: Twisted Pair (TP)"),
        (1 << 55, "FC: Twin Axial Pair (TW)"),
        // Byte 10: FC speed
        (1 << 56, "FC: 100 MBytes/sec"),
        (1 << 58, "FC: 200 MBytes/sec"),
        (1 << 59, "FC: 3200 MBytes/sec"),
        (1 << 60, "FC: 400 MBytes/sec"),
        (1 << 61, "FC: 1600 MBytes/sec"),
        (1 << 62, "FC: 800 MBytes/sec"),
        (1 << 63, "FC: 1200 MBytes/sec"),
    ],
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_differs_from_qsfp_column() {
        assert_eq!(ENCODING.lookup(0x04), "Manchester");
        assert_eq!(ENCODING.lookup(0x05), "SONET Scrambled");
        assert_eq!(ENCODING.lookup(0x06), "64B/66B");
    }

    #[test]
    fn test_ext_identifier() {
        assert_eq!(
            EXT_IDENTIFIER.lookup(EXT_IDENTIFIER_TWO_WIRE_ID),
            "GBIC/SFP defined by 2-wire interface ID"
        );
        assert_eq!(EXT_IDENTIFIER.lookup(0x08), "Unknown");
    }

    #[test]
    fn test_transceiver_byte_positions() {
        // 10GBASE-SR is byte 3 bit 4
        assert_eq!(
            TRANSCEIVER.matches_bytes(&[0x10, 0, 0, 0, 0, 0, 0, 0]),
            vec!["10G Ethernet: 10G Base-SR"]
        );
        // 1000BASE-SX is byte 6 bit 0
        assert_eq!(
            TRANSCEIVER.matches_bytes(&[0, 0, 0, 0x01, 0, 0, 0, 0]),
            vec!["Ethernet: 1000BASE-SX"]
        );
        // Passive cable is byte 8 bit 2
        assert_eq!(
            TRANSCEIVER.matches_bytes(&[0, 0, 0, 0, 0, 0x04, 0, 0]),
            vec!["Passive Cable"]
        );
    }
}
