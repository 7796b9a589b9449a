/// Field number of `type_url` in the Any message.
pub const TYPE_URL_FIELD: u32 = 1;
/// Field number of `value` in the Any message.
pub const VALUE_FIELD: u32 = 2;

/// Prefix used when packing a typed message without an explicit one.
pub const DEFAULT_TYPE_URL_PREFIX: &str = "type.googleapis.com/";

/// A base-128 varint never needs more than 10 bytes for a u64.
pub const MAX_VARINT_LEN: usize = 10;

/// Largest legal protobuf field number (2^29 - 1).
pub const MAX_FIELD_NUMBER: u32 = (1 << 29) - 1;

/// Default nesting bound when skipping unknown groups.
pub const DEFAULT_RECURSION_LIMIT: u32 = 100;

/// Number of payload bytes shown by `Display` before eliding.
pub const PREVIEW_LEN: usize = 16;
