// sy - typed protobuf envelope serialization
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

#[cfg(test)]
#[path = "./wrapper_test.rs"]
mod tests;

use crate::contract::{Serializable, WrappedType};
use crate::dispatch::{SerializeMode, Serialized, serialize};
use crate::{Error, Result};
use bytes::Bytes;

//
// Wrapper
//

/// Teaches the registry how to serialize a type that cannot implement [`Serializable`] itself,
/// typically because it is defined in another crate.
///
/// A wrapper value only exists for the duration of a single conversion. It is built from the
/// foreign value right before encoding and unwrapped right after decoding, so nothing outside
/// of this crate ever holds one. Implementations must also override
/// [`Serializable::wrapped_type`] to return `WrappedType::of::<Self::Foreign>()`.
pub trait Wrapper: Serializable {
  type Foreign: Send + 'static;

  fn wrap(value: &Self::Foreign) -> Self;

  fn into_foreign(self) -> Self::Foreign;
}

/// Serializes a foreign value through its wrapper `W`. The envelope tag is the wrapper's tag.
pub fn serialize_foreign<W: Wrapper>(
  value: &W::Foreign,
  mode: SerializeMode,
) -> Result<Serialized<W::Schema>> {
  serialize(&W::wrap(value), mode)
}

pub fn foreign_to_proto<W: Wrapper>(value: &W::Foreign) -> Result<W::Schema> {
  serialize_foreign::<W>(value, SerializeMode::AS_SCHEMA_OBJECT)?.into_proto()
}

pub fn foreign_to_bytes<W: Wrapper>(value: &W::Foreign) -> Result<Bytes> {
  serialize_foreign::<W>(value, SerializeMode::AS_BYTES)?.into_bytes()
}

/// Reconstructs a foreign value from its wrapper's schema object.
pub fn foreign_from_proto<W: Wrapper>(payload: W::Schema) -> Result<W::Foreign> {
  W::from_payload(payload).map(W::into_foreign)
}

// Checks that W declares the same foreign type through the contract as it does through the
// trait. A mismatch would make the registry advertise a type that deserialize never returns.
pub(crate) fn validate<W: Wrapper>() -> Result<WrappedType> {
  let declared = W::wrapped_type().map_err(|e| Error::InvalidWrapper {
    type_name: W::type_name(),
    reason: format!("wrapped_type is required for wrappers: {e}"),
  })?;

  if !declared.is::<W::Foreign>() {
    return Err(Error::InvalidWrapper {
      type_name: W::type_name(),
      reason: format!(
        "wrapped_type returns {} but the wrapper converts {}",
        declared.type_name(),
        std::any::type_name::<W::Foreign>()
      ),
    });
  }

  Ok(declared)
}
