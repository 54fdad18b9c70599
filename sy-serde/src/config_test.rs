// sy - typed protobuf envelope serialization
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

use super::{AmbiguityPolicy, CONFIG_PATH_ENV, Config};
use crate::Error;
use assert_matches::assert_matches;
use std::io::Write;

#[test]
fn defaults() {
  let config = Config::default();

  assert_eq!(config.ambiguity, AmbiguityPolicy::Defer);
  assert!(config.builtin_wrappers);
  assert_eq!(config.max_envelope_size, None);
  assert_eq!(Config::from_yaml("").unwrap(), config);
  assert_eq!(Config::from_yaml("  \n").unwrap(), config);
}

#[test]
fn partial_yaml_keeps_defaults() {
  let config = Config::from_yaml("ambiguity: reject\n").unwrap();

  assert_eq!(
    config,
    Config {
      ambiguity: AmbiguityPolicy::Reject,
      ..Default::default()
    }
  );
}

#[test]
fn full_yaml() {
  let config = Config::from_yaml(
    r"
ambiguity: defer
builtin_wrappers: false
max_envelope_size: 4096
",
  )
  .unwrap();

  assert_eq!(
    config,
    Config {
      ambiguity: AmbiguityPolicy::Defer,
      builtin_wrappers: false,
      max_envelope_size: Some(4096),
    }
  );
}

#[test]
fn invalid_yaml() {
  assert_matches!(Config::from_yaml("unknown_key: 1"), Err(Error::Config(_)));
  assert_matches!(Config::from_yaml("ambiguity: sometimes"), Err(Error::Config(_)));
  assert_matches!(Config::from_yaml("max_envelope_size: 0"), Err(Error::Config(_)));
}

#[test]
fn from_file() {
  let mut file = tempfile::NamedTempFile::new().unwrap();
  file.write_all(b"max_envelope_size: 128\n").unwrap();

  let config = Config::from_file(file.path()).unwrap();
  assert_eq!(config.max_envelope_size, Some(128));

  assert_matches!(
    Config::from_file(file.path().with_extension("missing")),
    Err(Error::Io(_))
  );
}

// Nothing else in this binary reads the variable, so changing it here does not race.
#[test]
fn from_env() {
  unsafe { std::env::remove_var(CONFIG_PATH_ENV) };
  assert_eq!(Config::from_env().unwrap(), Config::default());

  let mut file = tempfile::NamedTempFile::new().unwrap();
  file.write_all(b"ambiguity: reject\nmax_envelope_size: 64\n").unwrap();
  unsafe { std::env::set_var(CONFIG_PATH_ENV, file.path()) };

  let config = Config::from_env();
  unsafe { std::env::remove_var(CONFIG_PATH_ENV) };
  assert_eq!(
    config.unwrap(),
    Config {
      ambiguity: AmbiguityPolicy::Reject,
      builtin_wrappers: true,
      max_envelope_size: Some(64),
    }
  );
}
