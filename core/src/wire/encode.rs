//! wire/encode.rs
//!
//! Varint and length-delimited writers over any `BufMut`.

use bytes::BufMut;

use crate::wire::types::{Tag, WireType};

/// Write `v` as a base-128 varint, least significant group first.
#[inline]
pub fn encode_varint(mut v: u64, buf: &mut impl BufMut) {
    while v >= 0x80 {
        buf.put_u8((v as u8 & 0x7F) | 0x80);
        v >>= 7;
    }
    buf.put_u8(v as u8);
}

/// Bytes needed to encode `v` as a varint (1..=10).
#[inline]
pub const fn encoded_varint_len(v: u64) -> usize {
    // Each byte carries 7 bits; `| 1` makes zero take one byte.
    let bits = 64 - (v | 1).leading_zeros() as usize;
    (bits + 6) / 7
}

#[inline]
pub fn encode_key(tag: Tag, buf: &mut impl BufMut) {
    encode_varint(tag.encode_key(), buf);
}

/// Key, length prefix, then the raw bytes.
pub fn encode_length_delimited(field_number: u32, data: &[u8], buf: &mut impl BufMut) {
    encode_key(Tag::new(field_number, WireType::LengthDelimited), buf);
    encode_varint(data.len() as u64, buf);
    buf.put_slice(data);
}

/// Encoded size of one length-delimited field with a `len`-byte payload.
#[inline]
pub const fn length_delimited_len(field_number: u32, len: usize) -> usize {
    let key = ((field_number as u64) << 3) | WireType::LengthDelimited as u64;
    encoded_varint_len(key) + encoded_varint_len(len as u64) + len
}
