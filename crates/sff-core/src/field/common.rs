//! Enumerated fields shared by all module families

use crate::codes::sff8024;

code_field!(
    /// Module form factor (SFF-8024 identifier)
    Identifier => sff8024::IDENTIFIER
);

code_field!(
    /// Physical connector type
    Connector => sff8024::CONNECTOR
);

code_field!(
    /// Extended specification compliance code
    LinkCodes => sff8024::LINK_CODES
);
