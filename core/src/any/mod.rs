//! The opaque Any message.
//!
//! Responsibilities:
//! - Hold a type URL and an uninterpreted payload
//! - Encode / decode the two-field wire form
//! - Plain-object snapshots and typed pack / unpack
//!
//! Non-responsibilities:
//! - Resolving type URLs to schemas
//! - I/O

pub mod types;
pub mod encode;
pub mod decode;
pub mod name;
pub mod object;
pub mod pack;

pub use types::OpaqueValue;
pub use encode::serialize_to_bytes;
pub use decode::{decode_bytes, decode_length_delimited, decode_with, deserialize_from_bytes};
pub use name::{message_name, type_url_for, type_url_prefix, type_url_with_prefix};
pub use object::PlainObject;
