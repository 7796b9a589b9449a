//! any/object.rs
//! Plain, owned snapshot of an `OpaqueValue` for inspection and tests.
//!
//! JSON shape is `{"typeUrl": "...", "value": "<base64>"}`.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use bytes::Bytes;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::any::types::OpaqueValue;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlainObject {
    #[serde(default)]
    pub type_url: String,
    #[serde(default, with = "b64")]
    pub value: Vec<u8>,
}

mod b64 {
    use super::*;

    pub fn serialize<S: Serializer>(value: &[u8], s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&STANDARD.encode(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<u8>, D::Error> {
        let text = String::deserialize(d)?;
        STANDARD.decode(text).map_err(serde::de::Error::custom)
    }
}

impl OpaqueValue {
    /// Owned copy of both fields; later changes to either side do not affect the other.
    pub fn to_plain_object(&self) -> PlainObject {
        PlainObject {
            type_url: self.type_url.clone(),
            value: self.value.to_vec(),
        }
    }
}

impl From<PlainObject> for OpaqueValue {
    fn from(obj: PlainObject) -> Self {
        OpaqueValue::new(obj.type_url, Bytes::from(obj.value))
    }
}

impl From<&OpaqueValue> for PlainObject {
    fn from(any: &OpaqueValue) -> Self {
        any.to_plain_object()
    }
}
