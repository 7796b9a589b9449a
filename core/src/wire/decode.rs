//! wire/decode.rs
//!
//! Forward-only cursor over an encoded message.
//!
//! Design notes:
//! - Every read is bounds-checked; running out of input is `Truncated`,
//!   never a panic.
//! - Errors carry the offset of the record that failed, not the cursor
//!   position after partial consumption.
//! - Length-delimited reads return a range into the source buffer so callers
//!   can borrow or slice without copying.

use std::ops::Range;

use crate::constants::{DEFAULT_RECURSION_LIMIT, MAX_VARINT_LEN};
use crate::types::{AnyError, Malformed, Result};
use crate::wire::types::{Tag, WireType};

#[derive(Debug, Clone)]
pub struct WireReader<'a> {
    buf: &'a [u8],
    pos: usize,
    tag_start: usize,
    recursion_limit: u32,
}

impl<'a> WireReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self::with_recursion_limit(buf, DEFAULT_RECURSION_LIMIT)
    }

    pub fn with_recursion_limit(buf: &'a [u8], recursion_limit: u32) -> Self {
        Self { buf, pos: 0, tag_start: 0, recursion_limit }
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// Offset of the most recently read tag.
    #[inline]
    pub fn tag_start(&self) -> usize {
        self.tag_start
    }

    /// Bytes covered by `range`, as returned from `read_length_delimited`.
    #[inline]
    pub(crate) fn slice(&self, range: Range<usize>) -> &'a [u8] {
        &self.buf[range]
    }

    pub fn read_varint(&mut self) -> Result<u64> {
        let start = self.pos;
        let mut value = 0u64;
        for i in 0..MAX_VARINT_LEN {
            let Some(&byte) = self.buf.get(self.pos) else {
                return Err(AnyError::malformed(start, Malformed::Truncated));
            };
            self.pos += 1;

            // The 10th byte only has room for the top bit of a u64.
            if i == MAX_VARINT_LEN - 1 && byte > 0x01 {
                return Err(AnyError::malformed(start, Malformed::VarintOverflow));
            }
            value |= u64::from(byte & 0x7F) << (7 * i);
            if byte < 0x80 {
                return Ok(value);
            }
        }
        Err(AnyError::malformed(start, Malformed::VarintOverflow))
    }

    pub fn read_tag(&mut self) -> Result<Tag> {
        self.tag_start = self.pos;
        let key = self.read_varint()?;
        Tag::from_key(key).map_err(|reason| AnyError::malformed(self.tag_start, reason))
    }

    /// Reads a length prefix and steps over the payload.
    pub fn read_length_delimited(&mut self) -> Result<Range<usize>> {
        let start = self.pos;
        let declared = self.read_varint()?;
        let remaining = self.remaining();
        if declared > remaining as u64 {
            return Err(AnyError::malformed(
                start,
                Malformed::LengthOverrun { declared, remaining },
            ));
        }
        let range = self.pos..self.pos + declared as usize;
        self.pos = range.end;
        Ok(range)
    }

    fn advance(&mut self, n: usize) -> Result<()> {
        if self.remaining() < n {
            return Err(AnyError::malformed(self.pos, Malformed::Truncated));
        }
        self.pos += n;
        Ok(())
    }

    /// Step over the value of a field whose tag was just read.
    pub fn skip_field(&mut self, tag: Tag) -> Result<()> {
        match tag.wire_type {
            WireType::Varint => self.read_varint().map(drop),
            WireType::Fixed64 => self.advance(8),
            WireType::Fixed32 => self.advance(4),
            WireType::LengthDelimited => self.read_length_delimited().map(drop),
            WireType::StartGroup => self.skip_group(tag.field_number),
            WireType::EndGroup => Err(AnyError::malformed(
                self.tag_start,
                Malformed::UnexpectedEndGroup { field: tag.field_number },
            )),
        }
    }

    fn depth_exceeded(&self) -> AnyError {
        AnyError::malformed(
            self.tag_start,
            Malformed::GroupDepthExceeded { limit: self.recursion_limit },
        )
    }

    /// Open groups live on a heap stack, so nesting depth never grows the
    /// native call stack.
    fn skip_group(&mut self, field: u32) -> Result<()> {
        let limit = self.recursion_limit as usize;
        if limit == 0 {
            return Err(self.depth_exceeded());
        }
        let mut open = vec![field];
        while let Some(&current) = open.last() {
            if self.is_empty() {
                return Err(AnyError::malformed(
                    self.pos,
                    Malformed::UnterminatedGroup { field: current },
                ));
            }
            let inner = self.read_tag()?;
            match inner.wire_type {
                WireType::EndGroup if inner.field_number == current => {
                    open.pop();
                }
                WireType::EndGroup => {
                    return Err(AnyError::malformed(
                        self.tag_start,
                        Malformed::UnexpectedEndGroup { field: inner.field_number },
                    ));
                }
                WireType::StartGroup => {
                    if open.len() >= limit {
                        return Err(self.depth_exceeded());
                    }
                    open.push(inner.field_number);
                }
                // Never a group here, so this does not recurse.
                _ => self.skip_field(inner)?,
            }
        }
        Ok(())
    }
}
