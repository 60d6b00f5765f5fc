//! Single-byte values with a unit and a fixed multiplier

/// Define a scaled single-byte field
macro_rules! scaled_field {
    ($(#[$meta:meta])* $name:ident, $unit:literal, $multiplier:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub struct $name(pub u8);

        impl $name {
            /// Unit of [`Self::value`]
            pub const UNIT: &'static str = $unit;
            /// Units per raw step
            pub const MULTIPLIER: u32 = $multiplier;

            /// Scaled value in [`Self::UNIT`]
            pub fn value(&self) -> u32 {
                u32::from(self.0) * Self::MULTIPLIER
            }
        }

        impl super::Field for $name {
            fn kind(&self) -> super::FieldKind {
                super::FieldKind::ScaledValue
            }

            fn raw(&self) -> &[u8] {
                core::slice::from_ref(&self.0)
            }

            fn decoded(&self) -> super::Decoded {
                super::Decoded::Text(format!("{} {}", self.value(), Self::UNIT))
            }

            fn unit(&self) -> Option<&'static str> {
                Some(Self::UNIT)
            }
        }

        impl super::Decode for $name {
            const WIDTH: usize = 1;

            fn decode(raw: &[u8]) -> Self {
                Self(raw.first().copied().unwrap_or(0))
            }
        }
    };
}

scaled_field!(
    /// Length in kilometers
    ValueKm, "km", 1
);
scaled_field!(
    /// Length in meters
    ValueM, "m", 1
);
scaled_field!(
    /// Length in units of 2 m
    ValueM2, "m", 2
);
scaled_field!(
    /// Length in units of 10 m
    ValueM10, "m", 10
);
scaled_field!(
    /// Length in units of 100 m
    ValueM100, "m", 100
);
scaled_field!(
    /// Percentage
    ValuePercent, "%", 1
);
scaled_field!(
    /// Bit rate in units of 100 Mb/s
    Value100Mbps, "Mb/s", 100
);
scaled_field!(
    /// Bit rate in units of 250 Mb/s
    Value250Mbps, "Mb/s", 250
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{Decode, Field, FieldKind};

    #[test]
    fn test_value_km() {
        let v = ValueKm::decode(&[0x03]);
        assert_eq!(v.describe(), "3 km");
        assert_eq!(v.unit(), Some("km"));
        assert_eq!(v.kind(), FieldKind::ScaledValue);
    }

    #[test]
    fn test_multipliers() {
        assert_eq!(ValueM100::decode(&[2]).describe(), "200 m");
        assert_eq!(ValueM10::decode(&[30]).describe(), "300 m");
        assert_eq!(ValueM2::decode(&[50]).describe(), "100 m");
        assert_eq!(Value100Mbps::decode(&[0x67]).describe(), "10300 Mb/s");
        assert_eq!(Value250Mbps::decode(&[0xff]).value(), 63750);
        assert_eq!(ValuePercent::decode(&[5]).describe(), "5 %");
    }

    #[test]
    fn test_raw_is_unscaled() {
        assert_eq!(ValueM100::decode(&[0xff]).structured().raw, "ff");
    }
}
