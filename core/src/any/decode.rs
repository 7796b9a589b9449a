//! any/decode.rs
//!
//! Design notes:
//! - Decoding is all-or-nothing: the value is built only after the whole
//!   buffer parsed cleanly.
//! - Unknown fields of any wire type are skipped.
//! - Fields 1 and 2 must be length-delimited; when one repeats, the last
//!   occurrence wins.
//! - `type_url` must be valid UTF-8.

use std::ops::Range;

use bytes::Bytes;
use tracing::{debug, trace};

use crate::any::types::OpaqueValue;
use crate::config::DecodeOptions;
use crate::constants::{TYPE_URL_FIELD, VALUE_FIELD};
use crate::types::{AnyError, Malformed, Result};
use crate::wire::{Tag, WireReader, WireType};

/// Field locations found in one pass over the input.
struct Fields<'a> {
    type_url: &'a str,
    value: Range<usize>,
}

fn expect_length_delimited(reader: &WireReader<'_>, tag: Tag) -> Result<()> {
    if tag.wire_type != WireType::LengthDelimited {
        return Err(AnyError::malformed(
            reader.tag_start(),
            Malformed::WireTypeMismatch {
                field: tag.field_number,
                expected: WireType::LengthDelimited,
                found: tag.wire_type,
            },
        ));
    }
    Ok(())
}

fn parse_fields<'a>(buf: &'a [u8], opts: &DecodeOptions) -> Result<Fields<'a>> {
    if let Some(max) = opts.max_message_len {
        if buf.len() > max {
            return Err(AnyError::malformed(0, Malformed::MessageTooLarge { len: buf.len(), max }));
        }
    }

    let mut reader = WireReader::with_recursion_limit(buf, opts.recursion_limit);
    let mut fields = Fields { type_url: "", value: 0..0 };

    while !reader.is_empty() {
        let tag = reader.read_tag()?;
        match tag.field_number {
            TYPE_URL_FIELD => {
                expect_length_delimited(&reader, tag)?;
                let field_start = reader.tag_start();
                let range = reader.read_length_delimited()?;
                fields.type_url = std::str::from_utf8(reader.slice(range)).map_err(|_| {
                    AnyError::malformed(field_start, Malformed::InvalidUtf8 { field: TYPE_URL_FIELD })
                })?;
            }
            VALUE_FIELD => {
                expect_length_delimited(&reader, tag)?;
                fields.value = reader.read_length_delimited()?;
            }
            _ => {
                trace!(
                    field = tag.field_number,
                    wire_type = ?tag.wire_type,
                    offset = reader.tag_start(),
                    "skipping unknown field"
                );
                reader.skip_field(tag)?;
            }
        }
    }

    Ok(fields)
}

fn rejected(len: usize, err: AnyError) -> AnyError {
    debug!(len, error = %err, "rejected Any encoding");
    err
}

fn parse_logged<'a>(buf: &'a [u8], opts: &DecodeOptions) -> Result<Fields<'a>> {
    parse_fields(buf, opts).map_err(|err| rejected(buf.len(), err))
}

/// Decode with default options.
pub fn deserialize_from_bytes(buf: &[u8]) -> Result<OpaqueValue> {
    decode_with(buf, &DecodeOptions::default())
}

pub fn decode_with(buf: &[u8], opts: &DecodeOptions) -> Result<OpaqueValue> {
    let fields = parse_logged(buf, opts)?;
    Ok(OpaqueValue {
        type_url: fields.type_url.to_owned(),
        value: Bytes::copy_from_slice(&buf[fields.value]),
    })
}

/// Decode from a shared buffer; the resulting payload is a slice of `buf`.
pub fn decode_bytes(buf: Bytes, opts: &DecodeOptions) -> Result<OpaqueValue> {
    let fields = parse_logged(&buf, opts)?;
    let type_url = fields.type_url.to_owned();
    let value = buf.slice(fields.value);
    Ok(OpaqueValue { type_url, value })
}

/// Decode a varint length prefix followed by exactly that many message bytes.
pub fn decode_length_delimited(buf: &[u8], opts: &DecodeOptions) -> Result<OpaqueValue> {
    let mut reader = WireReader::new(buf);
    let body = reader
        .read_length_delimited()
        .map_err(|err| rejected(buf.len(), err))?;
    if !reader.is_empty() {
        let err = AnyError::malformed(
            reader.position(),
            Malformed::TrailingBytes { remaining: reader.remaining() },
        );
        return Err(rejected(buf.len(), err));
    }
    let base = body.start;
    decode_with(reader.slice(body), opts).map_err(|err| match err {
        AnyError::MalformedEncoding { offset, reason } => AnyError::malformed(base + offset, reason),
        other => other,
    })
}

impl OpaqueValue {
    pub fn deserialize_from_bytes(buf: &[u8]) -> Result<Self> {
        deserialize_from_bytes(buf)
    }

    pub fn decode_with(buf: &[u8], opts: &DecodeOptions) -> Result<Self> {
        decode_with(buf, opts)
    }

    pub fn decode_bytes(buf: Bytes) -> Result<Self> {
        decode_bytes(buf, &DecodeOptions::default())
    }

    pub fn decode_length_delimited(buf: &[u8]) -> Result<Self> {
        decode_length_delimited(buf, &DecodeOptions::default())
    }
}
