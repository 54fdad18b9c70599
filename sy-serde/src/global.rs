// sy - typed protobuf envelope serialization
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

//! The process-wide registry.
//!
//! Programs call [`initialize_global`] once at startup, register their types, and then
//! [seal](TypeRegistry::seal) it. Code that runs before initialization falls back to a registry
//! built from [`Config::default`].

use crate::config::Config;
use crate::contract::Serializable;
use crate::dispatch::{Deserialized, deserialize};
use crate::registry::TypeRegistry;
use crate::wrapper::Wrapper;
use crate::{Error, Result};
use std::sync::OnceLock;

static GLOBAL: OnceLock<TypeRegistry> = OnceLock::new();

/// Installs the process-wide registry built from `config`. Fails with
/// [`Error::AlreadyInitialized`] if it was already installed, including implicitly by
/// [`global`].
pub fn initialize_global(config: &Config) -> Result<&'static TypeRegistry> {
  let registry = TypeRegistry::from_config(config)?;

  let mut installed = false;
  let global = GLOBAL.get_or_init(|| {
    installed = true;
    registry
  });

  if !installed {
    return Err(Error::AlreadyInitialized);
  }

  log::info!("initialized global type registry with {} types", global.len());
  Ok(global)
}

/// The process-wide registry. If [`initialize_global`] has not run yet, this installs a registry
/// built from [`Config::default`], including the built-in wrappers.
///
/// The built-in wrappers have distinct tags and schemas, so registering them into a fresh
/// registry cannot fail. Should that ever change, the error is logged and the registry is
/// installed with whatever registered before the failure rather than panicking in a lookup path.
pub fn global() -> &'static TypeRegistry {
  GLOBAL.get_or_init(|| {
    let registry = TypeRegistry::new(&Config::default());
    if let Err(e) = crate::builtin::register_builtin_wrappers(&registry) {
      log::error!("failed to register built-in wrappers: {e}");
    }
    registry
  })
}

pub fn register<T: Serializable>() -> Result<()> {
  global().register::<T>()
}

pub fn register_wrapper<W: Wrapper>() -> Result<()> {
  global().register_wrapper::<W>()
}

pub fn deserialize_global(data: &[u8]) -> Result<Deserialized> {
  deserialize(global(), data)
}
