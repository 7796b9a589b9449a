//! any/types.rs
//! The opaque Any value: a type URL plus payload bytes.
//!
//! Design notes:
//! - Pure value type. Equality and hashing are field-wise.
//! - Both fields default to empty, which is also what an empty buffer decodes to.
//! - The payload is `Bytes` so decoding from a shared buffer can avoid a copy.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use bytes::Bytes;

use crate::types::Result;
use crate::utils::preview_bytes;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct OpaqueValue {
    pub(crate) type_url: String,
    pub(crate) value: Bytes,
}

impl OpaqueValue {
    pub fn new(type_url: impl Into<String>, value: impl Into<Bytes>) -> Self {
        Self {
            type_url: type_url.into(),
            value: value.into(),
        }
    }

    /// Build from a base64-encoded payload.
    pub fn from_b64(type_url: impl Into<String>, b64: &str) -> Result<Self> {
        let value = STANDARD.decode(b64)?;
        Ok(Self::new(type_url, value))
    }

    pub fn type_url(&self) -> &str {
        &self.type_url
    }

    /// Any string is accepted, including the empty one.
    pub fn set_type_url(&mut self, type_url: impl Into<String>) {
        self.type_url = type_url.into();
    }

    pub fn value(&self) -> &Bytes {
        &self.value
    }

    pub fn value_as_slice(&self) -> &[u8] {
        &self.value
    }

    /// Standard padded base64 of the payload.
    pub fn value_as_b64(&self) -> String {
        STANDARD.encode(&self.value)
    }

    pub fn set_value(&mut self, value: impl Into<Bytes>) {
        self.value = value.into();
    }

    /// Replace the payload from its base64 form. On error the payload is left untouched.
    pub fn set_value_b64(&mut self, b64: &str) -> Result<()> {
        self.value = Bytes::from(STANDARD.decode(b64)?);
        Ok(())
    }

    /// Both fields at their defaults; such a value encodes to zero bytes.
    pub fn is_empty(&self) -> bool {
        self.type_url.is_empty() && self.value.is_empty()
    }

    pub fn clear(&mut self) {
        self.type_url.clear();
        self.value = Bytes::new();
    }

    pub fn into_parts(self) -> (String, Bytes) {
        (self.type_url, self.value)
    }
}

impl fmt::Display for OpaqueValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Any {{ type_url: {:?}, value: {} }}",
            self.type_url,
            preview_bytes(&self.value)
        )
    }
}
