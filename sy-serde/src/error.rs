// sy - typed protobuf envelope serialization
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

#[cfg(test)]
#[path = "./error_test.rs"]
mod tests;

//
// Error
//

#[derive(thiserror::Error, Debug)]
pub enum Error {
  /// A contract method was left at its default implementation. This is a programming error in
  /// the concrete type.
  #[error("{type_name} does not implement {method}")]
  NotImplemented {
    type_name: &'static str,
    method: &'static str,
  },

  /// The tag resolved to a type whose schema is shared with other registered types.
  #[error("type {type_tag:?} cannot be resolved: schema {schema} is shared by {candidates:?}")]
  AmbiguousType {
    type_tag: String,
    schema: String,
    candidates: Vec<String>,
  },

  /// The schema maps back to more than one registered type.
  #[error("schema {schema} is shared by {candidates:?}")]
  AmbiguousSchema {
    schema: String,
    candidates: Vec<String>,
  },

  #[error("unknown type {type_tag:?}")]
  UnknownType { type_tag: String },

  #[error("no type is registered for schema {schema}")]
  UnknownSchema { schema: String },

  #[error("malformed envelope: {0}")]
  MalformedEnvelope(String),

  #[error("envelope of {size} bytes exceeds the {limit} byte limit")]
  EnvelopeTooLarge { size: usize, limit: usize },

  #[error("payload of {type_tag} does not parse as {schema}: {source}")]
  MalformedPayload {
    type_tag: String,
    schema: String,
    source: protobuf::Error,
  },

  #[error("no serialization mode specified, expected a schema object and/or bytes")]
  NoModeSpecified,

  #[error("type mismatch: expected {expected}, got {actual}")]
  TypeMismatch { expected: String, actual: String },

  #[error("type tag {type_tag:?} is already registered to a different type")]
  DuplicateTypeTag { type_tag: String },

  #[error("invalid wrapper {type_name}: {reason}")]
  InvalidWrapper {
    type_name: &'static str,
    reason: String,
  },

  #[error("the registry is sealed and no longer accepts registrations")]
  RegistrySealed,

  #[error("the global registry has already been initialized")]
  AlreadyInitialized,

  /// The type's own conversion rejected a value, e.g. a UUID payload that is not 16 bytes.
  #[error("{type_name} conversion failed: {source}")]
  Conversion {
    type_name: &'static str,
    source: anyhow::Error,
  },

  #[error("protobuf error: {0}")]
  Protobuf(#[from] protobuf::Error),

  #[error("invalid config: {0}")]
  Config(String),

  #[error("an io error occurred: {0}")]
  Io(#[from] std::io::Error),
}

impl Error {
  #[must_use]
  pub const fn not_implemented(type_name: &'static str, method: &'static str) -> Self {
    Self::NotImplemented { type_name, method }
  }

  pub fn conversion(type_name: &'static str, source: impl Into<anyhow::Error>) -> Self {
    Self::Conversion {
      type_name,
      source: source.into(),
    }
  }

  pub fn type_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
    Self::TypeMismatch {
      expected: expected.into(),
      actual: actual.into(),
    }
  }

  /// Whether this is the error a contract method returns when it was not overridden.
  #[must_use]
  pub const fn is_not_implemented(&self) -> bool {
    matches!(self, Self::NotImplemented { .. })
  }
}

pub type Result<T> = std::result::Result<T, Error>;
