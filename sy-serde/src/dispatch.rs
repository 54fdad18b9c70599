// sy - typed protobuf envelope serialization
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

#[cfg(test)]
#[path = "./dispatch_test.rs"]
mod tests;

use crate::contract::Serializable;
use crate::envelope::Envelope;
use crate::registry::TypeRegistry;
use crate::{Error, Result};
use bytes::Bytes;
use protobuf::{Message, MessageFull};
use std::any::Any;
use std::fmt;
use std::ops::BitOr;

//
// SerializeMode
//

/// The output forms requested from [`serialize`]. When both are requested the schema object
/// wins, so the result does not depend on the order the flags were set in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SerializeMode {
  pub as_schema_object: bool,
  pub as_bytes: bool,
}

impl SerializeMode {
  pub const NONE: Self = Self {
    as_schema_object: false,
    as_bytes: false,
  };
  pub const AS_SCHEMA_OBJECT: Self = Self {
    as_schema_object: true,
    as_bytes: false,
  };
  pub const AS_BYTES: Self = Self {
    as_schema_object: false,
    as_bytes: true,
  };

  #[must_use]
  pub const fn union(self, other: Self) -> Self {
    Self {
      as_schema_object: self.as_schema_object || other.as_schema_object,
      as_bytes: self.as_bytes || other.as_bytes,
    }
  }

  #[must_use]
  pub const fn is_empty(self) -> bool {
    !self.as_schema_object && !self.as_bytes
  }
}

impl BitOr for SerializeMode {
  type Output = Self;

  fn bitor(self, rhs: Self) -> Self {
    self.union(rhs)
  }
}

//
// Serialized
//

#[derive(Clone, Debug, PartialEq)]
pub enum Serialized<M> {
  /// The schema object itself, no envelope.
  Proto(M),
  /// An encoded envelope.
  Bytes(Bytes),
}

impl<M> Serialized<M> {
  #[must_use]
  pub const fn kind(&self) -> &'static str {
    match self {
      Self::Proto(_) => "schema object",
      Self::Bytes(_) => "bytes",
    }
  }

  pub fn into_proto(self) -> Result<M> {
    match self {
      Self::Proto(message) => Ok(message),
      Self::Bytes(_) => Err(Error::type_mismatch("schema object", "bytes")),
    }
  }

  pub fn into_bytes(self) -> Result<Bytes> {
    match self {
      Self::Bytes(bytes) => Ok(bytes),
      Self::Proto(_) => Err(Error::type_mismatch("bytes", "schema object")),
    }
  }
}

//
// Deserialized
//

/// A value reconstructed from an envelope, along with the tag it was resolved from.
pub struct Deserialized {
  type_tag: String,
  value: Box<dyn Any + Send>,
}

impl Deserialized {
  pub(crate) fn new(type_tag: String, value: Box<dyn Any + Send>) -> Self {
    Self { type_tag, value }
  }

  #[must_use]
  pub fn type_tag(&self) -> &str {
    &self.type_tag
  }

  #[must_use]
  pub fn is<T: 'static>(&self) -> bool {
    self.value.is::<T>()
  }

  #[must_use]
  pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
    self.value.downcast_ref::<T>()
  }

  pub fn downcast<T: 'static>(self) -> Result<T> {
    let Self { type_tag, value } = self;
    value
      .downcast::<T>()
      .map(|value| *value)
      .map_err(|_| Error::type_mismatch(std::any::type_name::<T>(), type_tag))
  }

  #[must_use]
  pub fn into_any(self) -> Box<dyn Any + Send> {
    self.value
  }
}

impl fmt::Debug for Deserialized {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Deserialized")
      .field("type_tag", &self.type_tag)
      .finish_non_exhaustive()
  }
}

//
// Entry points
//

pub fn serialize<T: Serializable>(value: &T, mode: SerializeMode) -> Result<Serialized<T::Schema>> {
  if mode.as_schema_object {
    return Ok(Serialized::Proto(value.to_payload()?));
  }

  if mode.as_bytes {
    log::debug!("serializing {} ({})", T::type_name(), value.named());
    let content = value.to_payload()?.write_to_bytes()?;
    return Ok(Serialized::Bytes(
      Envelope::new(T::type_name(), content).encode()?,
    ));
  }

  Err(Error::NoModeSpecified)
}

/// Reconstructs the value carried by an encoded envelope using the type the registry resolves
/// its tag to.
pub fn deserialize(registry: &TypeRegistry, data: &[u8]) -> Result<Deserialized> {
  let (type_tag, content) =
    Envelope::decode_with_limit(data, registry.max_envelope_size())?.into_parts();
  let entry = registry.resolve(&type_tag)?;

  log::debug!(
    "deserializing {} from {} bytes of {}",
    type_tag,
    content.len(),
    entry.schema_name()
  );
  let value = entry.reconstruct(&content)?;

  Ok(Deserialized::new(type_tag, value))
}

/// Like [`deserialize`] but fails with [`Error::TypeMismatch`] unless the envelope holds a `T`.
pub fn deserialize_as<T: 'static>(registry: &TypeRegistry, data: &[u8]) -> Result<T> {
  deserialize(registry, data)?.downcast()
}

/// Reconstructs a value from a bare schema object. The type is found through the schema's
/// reverse mapping, so this fails for schemas shared by several types.
pub fn deserialize_proto<M: MessageFull>(registry: &TypeRegistry, proto: &M) -> Result<Deserialized> {
  let entry = registry.resolve_schema(M::descriptor().full_name())?;
  let value = entry.reconstruct(&proto.write_to_bytes()?)?;

  Ok(Deserialized::new(entry.type_tag().to_string(), value))
}

//
// SerializableExt
//

/// Shorthands over [`serialize`] that check the shape of the result.
pub trait SerializableExt: Serializable {
  fn to_proto(&self) -> Result<Self::Schema> {
    serialize(self, SerializeMode::AS_SCHEMA_OBJECT)?.into_proto()
  }

  fn proto(&self) -> Result<Self::Schema> {
    self.to_proto()
  }

  fn to_bytes(&self) -> Result<Bytes> {
    serialize(self, SerializeMode::AS_BYTES)?.into_bytes()
  }

  fn binary(&self) -> Result<Bytes> {
    self.to_bytes()
  }
}

impl<T: Serializable> SerializableExt for T {}
