//! Protobuf wire primitives.
//!
//! Responsibilities:
//! - Field keys and wire types
//! - Varint and length-delimited encoding
//! - A bounds-checked reader that can skip any field
//!
//! Non-responsibilities:
//! - Message semantics (see `any`)

pub mod types;
pub mod encode;
pub mod decode;

pub use types::{Tag, WireType};
pub use encode::{encode_varint, encoded_varint_len, encode_key, encode_length_delimited, length_delimited_len};
pub use decode::WireReader;
