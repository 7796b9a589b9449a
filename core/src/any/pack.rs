//! any/pack.rs
//! Typed packing on top of `prost`.
//!
//! Packing stores `M::full_name()` behind a type URL prefix and the message's
//! own encoding as the payload. Unpacking compares only the message name, so
//! values packed under any prefix can be read back.

use prost::{Message, Name};

use crate::any::name::type_url_with_prefix;
use crate::any::types::OpaqueValue;
use crate::constants::DEFAULT_TYPE_URL_PREFIX;
use crate::types::{AnyError, Result};

impl OpaqueValue {
    pub fn pack<M: Message + Name>(msg: &M) -> Self {
        Self::pack_with_prefix(DEFAULT_TYPE_URL_PREFIX, msg)
    }

    pub fn pack_with_prefix<M: Message + Name>(prefix: &str, msg: &M) -> Self {
        Self::new(type_url_with_prefix(prefix, &M::full_name()), msg.encode_to_vec())
    }

    /// Whether the stored type URL names `M`.
    pub fn is<M: Name>(&self) -> bool {
        self.message_name() == M::full_name()
    }

    pub fn unpack<M: Message + Default + Name>(&self) -> Result<M> {
        self.check_type::<M>()?;
        Ok(M::decode(self.value.clone())?)
    }

    /// Merge the payload into `msg` after the same name check as `unpack`.
    pub fn unpack_into<M: Message + Name>(&self, msg: &mut M) -> Result<()> {
        self.check_type::<M>()?;
        msg.merge(self.value.clone())?;
        Ok(())
    }

    fn check_type<M: Name>(&self) -> Result<()> {
        let expected = M::full_name();
        if self.message_name() != expected {
            return Err(AnyError::TypeMismatch {
                expected,
                actual: self.message_name().to_owned(),
            });
        }
        Ok(())
    }
}
