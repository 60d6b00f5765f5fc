//! SFF-8079 specific field types

use crate::codes::sff8079;

code_field!(
    /// Serial encoding (byte 11)
    Encoding => sff8079::ENCODING
);

code_field!(
    /// Extended identifier (byte 1)
    ExtIdentifier => sff8079::EXT_IDENTIFIER
);

code_field!(
    /// Rate select functionality (byte 13)
    RateIdentifier => sff8079::RATE_IDENTIFIER
);

flag_field!(
    /// Transceiver compliance codes (bytes 3-10)
    Transceiver, 8 => sff8079::TRANSCEIVER
);
