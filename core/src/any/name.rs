//! any/name.rs
//!
//! A type URL is `<prefix>/<full.message.Name>`. Only the part after the
//! last `/` identifies the message; the prefix is opaque.

use crate::any::types::OpaqueValue;
use crate::constants::DEFAULT_TYPE_URL_PREFIX;

/// Part after the last `/`, or the whole string when there is none.
pub fn message_name(type_url: &str) -> &str {
    match type_url.rfind('/') {
        Some(i) => &type_url[i + 1..],
        None => type_url,
    }
}

/// Everything up to and including the last `/`; empty when there is none.
pub fn type_url_prefix(type_url: &str) -> &str {
    match type_url.rfind('/') {
        Some(i) => &type_url[..=i],
        None => "",
    }
}

pub fn type_url_for(full_name: &str) -> String {
    type_url_with_prefix(DEFAULT_TYPE_URL_PREFIX, full_name)
}

/// Join `prefix` and `full_name`, adding the separating `/` if `prefix` lacks one.
pub fn type_url_with_prefix(prefix: &str, full_name: &str) -> String {
    if prefix.ends_with('/') {
        format!("{prefix}{full_name}")
    } else {
        format!("{prefix}/{full_name}")
    }
}

impl OpaqueValue {
    pub fn message_name(&self) -> &str {
        message_name(&self.type_url)
    }

    pub fn type_url_prefix(&self) -> &str {
        type_url_prefix(&self.type_url)
    }
}
