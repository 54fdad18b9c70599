// sy - typed protobuf envelope serialization
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

#[cfg(test)]
#[path = "./registry_test.rs"]
mod tests;

use crate::config::{AmbiguityPolicy, Config};
use crate::contract::{Serializable, WrappedType, is_wrapper};
use crate::wrapper::{self, Wrapper};
use crate::{Error, Result};
use ahash::AHashMap;
use itertools::Itertools;
use parking_lot::RwLock;
use protobuf::Message;
use protobuf::reflect::MessageDescriptor;
use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

type Factory = fn(&[u8]) -> Result<Box<dyn Any + Send>>;

//
// RegistryEntry
//

/// A registered type: its tag, its schema and how to rebuild a value from payload bytes.
pub struct RegistryEntry {
  type_tag: &'static str,
  rust_type: TypeId,
  schema: MessageDescriptor,
  wrapped: Option<WrappedType>,
  factory: Factory,
}

impl RegistryEntry {
  fn native<T: Serializable>() -> Self {
    Self {
      type_tag: T::type_name(),
      rust_type: TypeId::of::<T>(),
      schema: T::schema_descriptor(),
      wrapped: None,
      factory: reconstruct_native::<T>,
    }
  }

  fn foreign<W: Wrapper>(wrapped: WrappedType) -> Self {
    Self {
      type_tag: W::type_name(),
      rust_type: TypeId::of::<W>(),
      schema: W::schema_descriptor(),
      wrapped: Some(wrapped),
      factory: reconstruct_foreign::<W>,
    }
  }

  #[must_use]
  pub const fn type_tag(&self) -> &'static str {
    self.type_tag
  }

  #[must_use]
  pub const fn schema(&self) -> &MessageDescriptor {
    &self.schema
  }

  #[must_use]
  pub fn schema_name(&self) -> &str {
    self.schema.full_name()
  }

  /// The foreign type produced by [`Self::reconstruct`] when this entry is a wrapper.
  #[must_use]
  pub const fn wrapped(&self) -> Option<WrappedType> {
    self.wrapped
  }

  /// Parses `payload` with this entry's schema and rebuilds the value. Wrapper entries return
  /// the foreign value, never the wrapper.
  pub fn reconstruct(&self, payload: &[u8]) -> Result<Box<dyn Any + Send>> {
    (self.factory)(payload)
  }
}

impl fmt::Debug for RegistryEntry {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("RegistryEntry")
      .field("type_tag", &self.type_tag)
      .field("schema", &self.schema.full_name())
      .field("wrapped", &self.wrapped.map(|w| w.type_name()))
      .finish_non_exhaustive()
  }
}

fn parse_payload<T: Serializable>(payload: &[u8]) -> Result<T::Schema> {
  T::Schema::parse_from_bytes(payload).map_err(|source| Error::MalformedPayload {
    type_tag: T::type_name().to_string(),
    schema: T::schema_descriptor().full_name().to_string(),
    source,
  })
}

fn reconstruct_native<T: Serializable>(payload: &[u8]) -> Result<Box<dyn Any + Send>> {
  Ok(Box::new(T::from_payload(parse_payload::<T>(payload)?)?))
}

fn reconstruct_foreign<W: Wrapper>(payload: &[u8]) -> Result<Box<dyn Any + Send>> {
  Ok(Box::new(
    W::from_payload(parse_payload::<W>(payload)?)?.into_foreign(),
  ))
}

//
// SchemaBinding
//

/// The reverse mapping recorded for a schema.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SchemaBinding {
  Unique(&'static str),
  /// More than one type encodes to the schema. The tags are kept in registration order.
  Ambiguous(Vec<&'static str>),
}

impl SchemaBinding {
  fn candidates(&self) -> Vec<&'static str> {
    match self {
      Self::Unique(tag) => vec![*tag],
      Self::Ambiguous(tags) => tags.clone(),
    }
  }
}

fn to_owned_tags(tags: &[&'static str]) -> Vec<String> {
  tags.iter().map(ToString::to_string).collect()
}

//
// TypeRegistry
//

#[derive(Default)]
struct RegistryState {
  by_tag: AHashMap<&'static str, Arc<RegistryEntry>>,
  by_schema: AHashMap<String, SchemaBinding>,
  by_foreign: AHashMap<TypeId, &'static str>,
  sealed: bool,
}

/// Maps type tags to registered types and schemas back to the type that owns them.
///
/// Registration is append-only. Once all types are registered the registry is normally
/// [sealed](Self::seal) and only read from. Registration and lookup take a reader/writer lock
/// so lookups never observe a half-applied registration, even when types are registered
/// lazily while other threads deserialize.
pub struct TypeRegistry {
  ambiguity: AmbiguityPolicy,
  max_envelope_size: Option<usize>,
  state: RwLock<RegistryState>,
}

impl Default for TypeRegistry {
  fn default() -> Self {
    Self::new(&Config::default())
  }
}

impl TypeRegistry {
  /// Creates an empty registry. Built-in wrappers are not registered, see
  /// [`Self::from_config`].
  #[must_use]
  pub fn new(config: &Config) -> Self {
    Self {
      ambiguity: config.ambiguity,
      max_envelope_size: config.max_envelope_size,
      state: RwLock::new(RegistryState::default()),
    }
  }

  /// Creates a registry and registers the built-in wrappers if the config asks for them.
  pub fn from_config(config: &Config) -> Result<Self> {
    let registry = Self::new(config);
    if config.builtin_wrappers {
      crate::builtin::register_builtin_wrappers(&registry)?;
    }
    Ok(registry)
  }

  #[must_use]
  pub const fn ambiguity_policy(&self) -> AmbiguityPolicy {
    self.ambiguity
  }

  #[must_use]
  pub const fn max_envelope_size(&self) -> Option<usize> {
    self.max_envelope_size
  }

  /// Registers a type that implements the contract itself. Wrapper adapters must use
  /// [`Self::register_wrapper`] so that decoding yields the foreign value.
  pub fn register<T: Serializable>(&self) -> Result<()> {
    if is_wrapper::<T>() {
      return Err(Error::InvalidWrapper {
        type_name: T::type_name(),
        reason: "wrappers must be registered with register_wrapper".to_string(),
      });
    }

    self.insert(RegistryEntry::native::<T>())
  }

  pub fn register_wrapper<W: Wrapper>(&self) -> Result<()> {
    let wrapped = wrapper::validate::<W>()?;
    self.insert(RegistryEntry::foreign::<W>(wrapped))
  }

  fn insert(&self, entry: RegistryEntry) -> Result<()> {
    let mut state = self.state.write();
    if state.sealed {
      return Err(Error::RegistrySealed);
    }

    if let Some(existing) = state.by_tag.get(entry.type_tag) {
      if existing.rust_type == entry.rust_type {
        log::debug!("{} is already registered", entry.type_tag);
        return Ok(());
      }
      return Err(Error::DuplicateTypeTag {
        type_tag: entry.type_tag.to_string(),
      });
    }

    let schema = entry.schema_name().to_string();
    let binding = match state.by_schema.get(&schema) {
      None => SchemaBinding::Unique(entry.type_tag),
      Some(existing) => {
        let mut candidates = existing.candidates();
        candidates.push(entry.type_tag);

        if self.ambiguity == AmbiguityPolicy::Reject {
          return Err(Error::AmbiguousSchema {
            schema,
            candidates: to_owned_tags(&candidates),
          });
        }

        log::warn!(
          "schema {} is shared by {}, it can no longer be used to resolve a type",
          schema,
          candidates.iter().join(", ")
        );
        SchemaBinding::Ambiguous(candidates)
      },
    };

    log::debug!("registered {} with schema {}", entry.type_tag, schema);
    state.by_schema.insert(schema, binding);
    if let Some(wrapped) = entry.wrapped {
      state
        .by_foreign
        .entry(wrapped.type_id())
        .or_insert(entry.type_tag);
    }
    state.by_tag.insert(entry.type_tag, Arc::new(entry));

    Ok(())
  }

  /// Resolves an envelope's type tag to the registered type. Fails with
  /// [`Error::AmbiguousType`] when the type's schema is shared, since a payload in that schema
  /// cannot be attributed to one type.
  pub fn resolve(&self, type_tag: &str) -> Result<Arc<RegistryEntry>> {
    let state = self.state.read();
    let entry = state
      .by_tag
      .get(type_tag)
      .ok_or_else(|| Error::UnknownType {
        type_tag: type_tag.to_string(),
      })?;

    match state.by_schema.get(entry.schema_name()) {
      Some(SchemaBinding::Unique(_)) => Ok(entry.clone()),
      Some(SchemaBinding::Ambiguous(candidates)) => Err(Error::AmbiguousType {
        type_tag: type_tag.to_string(),
        schema: entry.schema_name().to_string(),
        candidates: to_owned_tags(candidates),
      }),
      None => Err(Error::UnknownSchema {
        schema: entry.schema_name().to_string(),
      }),
    }
  }

  /// Resolves a schema's full protobuf name to the one type registered against it.
  pub fn resolve_schema(&self, schema: &str) -> Result<Arc<RegistryEntry>> {
    let state = self.state.read();
    match state.by_schema.get(schema) {
      Some(SchemaBinding::Unique(tag)) => {
        state
          .by_tag
          .get(tag)
          .cloned()
          .ok_or_else(|| Error::UnknownType {
            type_tag: (*tag).to_string(),
          })
      },
      Some(SchemaBinding::Ambiguous(candidates)) => Err(Error::AmbiguousSchema {
        schema: schema.to_string(),
        candidates: to_owned_tags(candidates),
      }),
      None => Err(Error::UnknownSchema {
        schema: schema.to_string(),
      }),
    }
  }

  #[must_use]
  pub fn schema_binding(&self, schema: &str) -> Option<SchemaBinding> {
    self.state.read().by_schema.get(schema).cloned()
  }

  /// Ends the registration phase. Later registrations fail with [`Error::RegistrySealed`].
  pub fn seal(&self) {
    self.state.write().sealed = true;
  }

  #[must_use]
  pub fn is_sealed(&self) -> bool {
    self.state.read().sealed
  }

  #[must_use]
  pub fn contains(&self, type_tag: &str) -> bool {
    self.state.read().by_tag.contains_key(type_tag)
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.state.read().by_tag.len()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Sorted names of the schemas that are shared by more than one type.
  #[must_use]
  pub fn ambiguous_schemas(&self) -> Vec<String> {
    self
      .state
      .read()
      .by_schema
      .iter()
      .filter(|(_, binding)| matches!(binding, SchemaBinding::Ambiguous(_)))
      .map(|(schema, _)| schema.clone())
      .sorted()
      .collect()
  }

  /// The tag of the first wrapper registered for the foreign type `F`.
  #[must_use]
  pub fn wrapper_tag_for<F: 'static>(&self) -> Option<&'static str> {
    self
      .state
      .read()
      .by_foreign
      .get(&TypeId::of::<F>())
      .copied()
  }
}

impl fmt::Debug for TypeRegistry {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let state = self.state.read();
    f.debug_struct("TypeRegistry")
      .field("ambiguity", &self.ambiguity)
      .field("types", &state.by_tag.keys().sorted().collect_vec())
      .field("sealed", &state.sealed)
      .finish_non_exhaustive()
  }
}
