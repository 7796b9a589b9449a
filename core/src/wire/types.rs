//! wire/types.rs
//! Wire types and field keys.
//!
//! A key is the varint `(field_number << 3) | wire_type`.

use num_enum::TryFromPrimitive;

use crate::constants::MAX_FIELD_NUMBER;
use crate::types::Malformed;

/// Protobuf wire types. Values 6 and 7 are reserved and rejected.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive)]
pub enum WireType {
    Varint          = 0,
    Fixed64         = 1,
    LengthDelimited = 2,
    StartGroup      = 3,
    EndGroup        = 4,
    Fixed32         = 5,
}

impl WireType {
    pub fn verify(raw: u8) -> Result<Self, Malformed> {
        WireType::try_from_primitive(raw).map_err(|_| Malformed::InvalidWireType { raw })
    }
}

/// Field number plus wire type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Tag {
    pub field_number: u32,
    pub wire_type: WireType,
}

impl Tag {
    pub const fn new(field_number: u32, wire_type: WireType) -> Self {
        Self { field_number, wire_type }
    }

    /// Key as written on the wire (before varint encoding).
    #[inline]
    pub const fn encode_key(self) -> u64 {
        ((self.field_number as u64) << 3) | self.wire_type as u64
    }

    /// Split a decoded key back into field number and wire type.
    pub fn from_key(key: u64) -> Result<Self, Malformed> {
        let wire_type = WireType::verify((key & 0x07) as u8)?;
        let raw = key >> 3;
        if raw == 0 || raw > MAX_FIELD_NUMBER as u64 {
            return Err(Malformed::InvalidFieldNumber { raw });
        }
        Ok(Self { field_number: raw as u32, wire_type })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys() {
        assert_eq!(Tag::new(1, WireType::LengthDelimited).encode_key(), 0x0A);
        assert_eq!(Tag::new(2, WireType::LengthDelimited).encode_key(), 0x12);
        assert_eq!(Tag::from_key(0x12).unwrap(), Tag::new(2, WireType::LengthDelimited));
    }

    #[test]
    fn rejects_reserved_wire_types() {
        assert_eq!(Tag::from_key(0x0E), Err(Malformed::InvalidWireType { raw: 6 }));
        assert_eq!(Tag::from_key(0x0F), Err(Malformed::InvalidWireType { raw: 7 }));
    }

    #[test]
    fn rejects_field_zero_and_out_of_range() {
        assert_eq!(Tag::from_key(0x02), Err(Malformed::InvalidFieldNumber { raw: 0 }));
        let too_big = ((MAX_FIELD_NUMBER as u64) + 1) << 3;
        assert!(matches!(Tag::from_key(too_big), Err(Malformed::InvalidFieldNumber { .. })));
        let max = Tag::new(MAX_FIELD_NUMBER, WireType::Varint);
        assert_eq!(Tag::from_key(max.encode_key()).unwrap(), max);
    }
}
