// sy - typed protobuf envelope serialization
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

//! Converts typed values to and from protobuf, and wraps the result in a self-describing
//! envelope so that a receiver can find the right type from the bytes alone.
//!
//! # Module organization
//!
//! - [`contract`] - The [`Serializable`] trait every convertible type implements
//! - [`wrapper`] - Adapters for foreign types that cannot implement the contract
//! - [`registry`] - Tag and schema lookup used when decoding
//! - [`envelope`] - The `DataMessage` wire envelope
//! - [`dispatch`] - `serialize` / `deserialize` entry points
//! - [`builtin`] - Wrappers for standard types
//! - [`config`] - Registry configuration

pub mod builtin;
pub mod config;
pub mod contract;
pub mod dispatch;
pub mod envelope;
mod error;
mod global;
pub mod registry;
pub mod wrapper;

#[cfg(test)]
#[ctor::ctor]
fn test_global_init() {
  sy_test_helpers::test_global_init();
}

pub use config::{AmbiguityPolicy, Config};
pub use contract::{Serializable, UNNAMED, WrappedType, is_wrapper};
pub use dispatch::{
  Deserialized,
  SerializableExt,
  SerializeMode,
  Serialized,
  deserialize,
  deserialize_as,
  deserialize_proto,
  serialize,
};
pub use envelope::Envelope;
pub use error::{Error, Result};
pub use global::{deserialize_global, global, initialize_global, register, register_wrapper};
pub use registry::{RegistryEntry, SchemaBinding, TypeRegistry};
pub use wrapper::{
  Wrapper,
  foreign_from_proto,
  foreign_to_bytes,
  foreign_to_proto,
  serialize_foreign,
};
