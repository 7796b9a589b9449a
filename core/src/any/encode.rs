//! any/encode.rs
//!
//! Design notes:
//! - Field 1 (`type_url`) then field 2 (`value`), both length-delimited.
//! - A field at its default (empty) is not written, so the default value
//!   encodes to zero bytes.
//! - Encoding cannot fail.

use bytes::BufMut;

use crate::any::types::OpaqueValue;
use crate::constants::{TYPE_URL_FIELD, VALUE_FIELD};
use crate::wire::{encode_length_delimited, encode_varint, encoded_varint_len, length_delimited_len};

/// Serialize `any` into a freshly allocated buffer of exactly `encoded_len()` bytes.
pub fn serialize_to_bytes(any: &OpaqueValue) -> Vec<u8> {
    let mut out = Vec::with_capacity(any.encoded_len());
    any.encode(&mut out);
    debug_assert_eq!(out.len(), any.encoded_len(), "encoded_len disagrees with encode");
    out
}

impl OpaqueValue {
    /// Exact size of the encoding.
    pub fn encoded_len(&self) -> usize {
        let mut len = 0;
        if !self.type_url.is_empty() {
            len += length_delimited_len(TYPE_URL_FIELD, self.type_url.len());
        }
        if !self.value.is_empty() {
            len += length_delimited_len(VALUE_FIELD, self.value.len());
        }
        len
    }

    /// Append the encoding to `buf`.
    pub fn encode(&self, buf: &mut impl BufMut) {
        if !self.type_url.is_empty() {
            encode_length_delimited(TYPE_URL_FIELD, self.type_url.as_bytes(), buf);
        }
        if !self.value.is_empty() {
            encode_length_delimited(VALUE_FIELD, &self.value, buf);
        }
    }

    pub fn serialize_to_bytes(&self) -> Vec<u8> {
        serialize_to_bytes(self)
    }

    /// Varint length prefix followed by the message, for embedding in a
    /// stream or an enclosing message field.
    pub fn encode_length_delimited_to_vec(&self) -> Vec<u8> {
        let len = self.encoded_len();
        let mut out = Vec::with_capacity(encoded_varint_len(len as u64) + len);
        encode_varint(len as u64, &mut out);
        self.encode(&mut out);
        out
    }
}
