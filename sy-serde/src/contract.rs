// sy - typed protobuf envelope serialization
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

#[cfg(test)]
#[path = "./contract_test.rs"]
mod tests;

use crate::{Error, Result};
use protobuf::MessageFull;
use protobuf::reflect::MessageDescriptor;
use std::any::TypeId;

/// Returned by [`Serializable::named`] for values that carry no name.
pub const UNNAMED: &str = "UNNAMED";

//
// WrappedType
//

/// Identifies the foreign type a wrapper adapter serializes on behalf of.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WrappedType {
  type_id: TypeId,
  type_name: &'static str,
}

impl WrappedType {
  #[must_use]
  pub fn of<F: 'static>() -> Self {
    Self {
      type_id: TypeId::of::<F>(),
      type_name: std::any::type_name::<F>(),
    }
  }

  #[must_use]
  pub const fn type_id(&self) -> TypeId {
    self.type_id
  }

  #[must_use]
  pub const fn type_name(&self) -> &'static str {
    self.type_name
  }

  #[must_use]
  pub fn is<F: 'static>(&self) -> bool {
    self.type_id == TypeId::of::<F>()
  }
}

//
// Serializable
//

/// Contract for types that convert to and from a protobuf schema.
///
/// Implementations must override [`Self::to_payload`] and [`Self::from_payload`]. The defaults
/// fail with [`Error::NotImplemented`] so that a type which forgot to provide them surfaces the
/// mistake at the first conversion instead of producing an empty payload.
///
/// The payload produced by `to_payload` must be accepted by `from_payload` and yield a value
/// equal to the original.
pub trait Serializable: Sized + Send + 'static {
  /// The schema this type encodes to. Several types may share one schema, in which case the
  /// schema can still be used to encode but cannot be used to find the type when decoding.
  type Schema: MessageFull;

  /// The fully-qualified name written as the envelope's type tag. It must be unique per type.
  /// Types exchanged between independently built processes should override the default, which
  /// depends on the Rust module path.
  fn type_name() -> &'static str {
    std::any::type_name::<Self>()
  }

  fn to_payload(&self) -> Result<Self::Schema> {
    Err(Error::not_implemented(Self::type_name(), "to_payload"))
  }

  fn from_payload(_payload: Self::Schema) -> Result<Self> {
    Err(Error::not_implemented(Self::type_name(), "from_payload"))
  }

  fn schema_descriptor() -> MessageDescriptor {
    Self::Schema::descriptor()
  }

  /// The foreign type this type adapts. Only wrapper adapters override this, everything else
  /// fails with [`Error::NotImplemented`], which means "not a wrapper".
  fn wrapped_type() -> Result<WrappedType> {
    Err(Error::not_implemented(Self::type_name(), "wrapped_type"))
  }

  fn name(&self) -> Option<&str> {
    None
  }

  fn named(&self) -> &str {
    self.name().unwrap_or(UNNAMED)
  }
}

/// Whether `T` declares itself a wrapper adapter.
#[must_use]
pub fn is_wrapper<T: Serializable>() -> bool {
  match T::wrapped_type() {
    Ok(_) => true,
    Err(e) => {
      if !e.is_not_implemented() {
        log::warn!("{}: wrapped_type failed: {e}", T::type_name());
      }
      false
    },
  }
}
