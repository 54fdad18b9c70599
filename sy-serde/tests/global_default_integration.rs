// sy - typed protobuf envelope serialization
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

use assert_matches::assert_matches;
use std::time::Duration;
use sy_serde::builtin::{DurationWrapper, StringWrapper, UuidWrapper};
use sy_serde::{Config, Error, deserialize_global, foreign_to_bytes, global, initialize_global};
use uuid::Uuid;

#[ctor::ctor]
fn global_init() {
  sy_test_helpers::test_global_init();
}

// Runs in its own process so that global() is the first touch of the registry.
#[test]
fn lazy_global_registry_has_builtins() {
  let registry = global();
  assert!(!registry.is_sealed());
  assert!(registry.ambiguous_schemas().is_empty());
  for tag in [
    "sy.builtins.String",
    "sy.builtins.I64",
    "sy.builtins.Bool",
    "sy.builtins.F64",
    "sy.builtins.Bytes",
    "sy.builtins.Duration",
    "sy.builtins.Timestamp",
    "sy.builtins.Uuid",
  ] {
    assert!(registry.contains(tag), "{tag} missing");
  }
  assert_eq!(8, registry.len());

  let text = foreign_to_bytes::<StringWrapper>(&"hello".to_string()).unwrap();
  assert_eq!(
    "hello",
    deserialize_global(&text).unwrap().downcast::<String>().unwrap()
  );

  let elapsed = foreign_to_bytes::<DurationWrapper>(&Duration::from_millis(1500)).unwrap();
  assert_eq!(
    Duration::from_millis(1500),
    deserialize_global(&elapsed).unwrap().downcast::<Duration>().unwrap()
  );

  let id = Uuid::new_v4();
  let bytes = foreign_to_bytes::<UuidWrapper>(&id).unwrap();
  assert_eq!(id, deserialize_global(&bytes).unwrap().downcast::<Uuid>().unwrap());

  assert_matches!(
    initialize_global(&Config::default()),
    Err(Error::AlreadyInitialized)
  );
}
