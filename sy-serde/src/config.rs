// sy - typed protobuf envelope serialization
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

#[cfg(test)]
#[path = "./config_test.rs"]
mod tests;

use crate::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Environment variable holding the path of a YAML config file read by [`Config::from_env`].
pub const CONFIG_PATH_ENV: &str = "SY_SERDE_CONFIG";

//
// AmbiguityPolicy
//

/// What happens when a second type is registered against a schema that already has one.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AmbiguityPolicy {
  /// Accept the registration and mark the schema ambiguous. Encoding keeps working for every
  /// type, resolving any of the types sharing the schema fails.
  #[default]
  Defer,
  /// Refuse the registration with [`Error::AmbiguousSchema`].
  Reject,
}

//
// Config
//

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
  pub ambiguity: AmbiguityPolicy,

  /// Whether registries built from this config start with the built-in wrappers.
  pub builtin_wrappers: bool,

  /// Envelopes larger than this many bytes are rejected before they are parsed.
  pub max_envelope_size: Option<usize>,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      ambiguity: AmbiguityPolicy::Defer,
      builtin_wrappers: true,
      max_envelope_size: None,
    }
  }
}

impl Config {
  pub fn from_yaml(yaml: &str) -> Result<Self> {
    if yaml.trim().is_empty() {
      return Ok(Self::default());
    }

    let config: Self = serde_yaml::from_str(yaml).map_err(|e| Error::Config(e.to_string()))?;
    config.validate()?;
    Ok(config)
  }

  pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    log::debug!("loading serde config from {}", path.display());
    Self::from_yaml(&std::fs::read_to_string(path)?)
  }

  /// Loads the file named by [`CONFIG_PATH_ENV`], or the defaults when it is not set.
  pub fn from_env() -> Result<Self> {
    std::env::var_os(CONFIG_PATH_ENV)
      .map_or_else(|| Ok(Self::default()), |path| Self::from_file(path))
  }

  fn validate(&self) -> Result<()> {
    if self.max_envelope_size == Some(0) {
      return Err(Error::Config(
        "max_envelope_size must be greater than 0".to_string(),
      ));
    }

    Ok(())
  }
}
