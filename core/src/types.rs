//! types.rs
//! Crate-wide error types.
//!
//! Design notes:
//! - `Malformed` names the exact reason a byte stream was rejected.
//! - `AnyError::MalformedEncoding` is the only error the decoder produces; it
//!   carries the byte offset where parsing stopped.
//! - Encoding is infallible and never returns these.

use thiserror::Error;

use crate::wire::WireType;

/// Reason a byte stream does not form a valid Any message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Malformed {
    /// Input ended in the middle of a tag, varint or fixed-width value.
    #[error("truncated input")]
    Truncated,

    /// Varint longer than 10 bytes or overflowing 64 bits.
    #[error("varint overflows 64 bits")]
    VarintOverflow,

    /// Wire type 6 or 7.
    #[error("invalid wire type: {raw}")]
    InvalidWireType { raw: u8 },

    /// Field number 0 or above 2^29 - 1.
    #[error("invalid field number: {raw}")]
    InvalidFieldNumber { raw: u64 },

    /// A known field arrived with the wrong wire type.
    #[error("field {field}: expected wire type {expected:?}, found {found:?}")]
    WireTypeMismatch {
        field: u32,
        expected: WireType,
        found: WireType,
    },

    /// Declared length runs past the end of the buffer.
    #[error("declared length {declared} exceeds remaining {remaining} bytes")]
    LengthOverrun { declared: u64, remaining: usize },

    /// String field is not valid UTF-8.
    #[error("field {field}: invalid UTF-8")]
    InvalidUtf8 { field: u32 },

    /// End-group tag with no matching start-group.
    #[error("unexpected end-group tag for field {field}")]
    UnexpectedEndGroup { field: u32 },

    /// Start-group tag whose end-group never arrives.
    #[error("group for field {field} is never closed")]
    UnterminatedGroup { field: u32 },

    /// Unknown groups nested deeper than the configured limit.
    #[error("group nesting exceeds limit of {limit}")]
    GroupDepthExceeded { limit: u32 },

    /// Input longer than the configured maximum.
    #[error("message length {len} exceeds maximum {max}")]
    MessageTooLarge { len: usize, max: usize },

    /// Bytes left over after a length-delimited message.
    #[error("{remaining} trailing bytes after message")]
    TrailingBytes { remaining: usize },
}

/// Unified error for the crate.
#[derive(Debug, Error)]
pub enum AnyError {
    /// Input bytes are not a well-formed Any encoding.
    #[error("malformed encoding at offset {offset}: {reason}")]
    MalformedEncoding { offset: usize, reason: Malformed },

    /// Value supplied as base64 could not be decoded.
    #[error("invalid base64 value: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    /// `unpack` target does not match the stored type URL.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch { expected: String, actual: String },

    /// Payload bytes failed to decode as the requested message.
    #[error("payload decode failed: {0}")]
    Payload(#[from] prost::DecodeError),
}

impl AnyError {
    pub fn malformed(offset: usize, reason: Malformed) -> Self {
        AnyError::MalformedEncoding { offset, reason }
    }

    /// The malformed reason, if this is a decode failure.
    pub fn malformed_reason(&self) -> Option<&Malformed> {
        match self {
            AnyError::MalformedEncoding { reason, .. } => Some(reason),
            _ => None,
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, AnyError::MalformedEncoding { .. })
    }
}

pub type Result<T> = std::result::Result<T, AnyError>;
