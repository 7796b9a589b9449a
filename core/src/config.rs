//! config.rs
//! Decoder limits.
//!
//! The codec itself imposes no size limit; hosts that receive untrusted
//! input set one here. Deserializable so it can sit inside a host's own
//! config file.

use serde::Deserialize;

use crate::constants::DEFAULT_RECURSION_LIMIT;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
    /// Reject inputs longer than this many bytes. `None` means unlimited.
    pub max_message_len: Option<usize>,
    /// Maximum nesting of unknown groups that will be skipped.
    pub recursion_limit: u32,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_message_len: None,
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }
}

impl DecodeOptions {
    pub fn max_message_len(mut self, max: usize) -> Self {
        self.max_message_len = Some(max);
        self
    }

    pub fn recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = limit;
        self
    }
}
