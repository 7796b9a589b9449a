//! opaqueany
//!
//! Codec for the opaque "Any" wrapper message: a type URL plus payload bytes
//! that this crate never interprets.
//! No I/O, no global state.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod config;
pub mod types;
pub mod utils;

// Wire primitives
pub mod wire;

// The message itself
pub mod any;

pub use any::{OpaqueValue, PlainObject};
pub use config::DecodeOptions;
pub use types::{AnyError, Malformed, Result};

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::any::{deserialize_from_bytes, serialize_to_bytes, OpaqueValue, PlainObject};
    pub use crate::config::DecodeOptions;
    pub use crate::types::{AnyError, Malformed};
}
