// sy - typed protobuf envelope serialization
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use sy_proto::protos::testing::fixtures::Label;
use sy_serde::builtin::UuidWrapper;
use sy_serde::{
  Envelope,
  Error,
  SchemaBinding,
  SerializableExt,
  deserialize,
  deserialize_as,
  deserialize_proto,
  foreign_to_bytes,
};
use sy_test_helpers::fixtures::{Account, Caption, Point, Tag, fixture_registry};
use uuid::Uuid;

#[ctor::ctor]
fn global_init() {
  sy_test_helpers::test_global_init();
}

#[test]
fn point_over_the_wire() {
  let registry = fixture_registry();

  let sent = Point { x: 1, y: 2 }.to_bytes().unwrap();
  let envelope = Envelope::decode(&sent).unwrap();
  assert_eq!("pkg.Point", envelope.type_tag());

  let received = deserialize(&registry, &sent).unwrap();
  assert_eq!("pkg.Point", received.type_tag());
  assert_eq!(Some(&Point { x: 1, y: 2 }), received.downcast_ref::<Point>());

  assert_matches!(
    deserialize_as::<Account>(&registry, &sent),
    Err(Error::TypeMismatch { .. })
  );
}

#[test]
fn nested_account() {
  let registry = fixture_registry();
  let account = Account {
    name: "grace".to_string(),
    id: vec![1, 2, 3],
    roles: vec!["reader".to_string()],
    home: Some(Point { x: 10, y: -10 }),
  };

  let received: Account = deserialize_as(&registry, &account.binary().unwrap()).unwrap();
  assert_eq!(account, received);

  let from_proto = deserialize_proto(&registry, &account.proto().unwrap()).unwrap();
  assert_eq!(account, from_proto.downcast::<Account>().unwrap());
}

#[test]
fn shared_schema() {
  let registry = fixture_registry();

  assert_eq!(
    Some(SchemaBinding::Ambiguous(vec!["pkg.Tag", "pkg.Caption"])),
    registry.schema_binding("sy.testing.v1.Label")
  );
  assert_eq!(vec!["sy.testing.v1.Label".to_string()], registry.ambiguous_schemas());

  // Encoding still works for both types.
  let tag = Tag("urgent".to_string()).to_proto().unwrap();
  let caption = Caption("urgent".to_string()).to_proto().unwrap();
  assert_eq!(tag, caption);

  assert_matches!(
    deserialize(&registry, &Tag("urgent".to_string()).to_bytes().unwrap()),
    Err(Error::AmbiguousType { type_tag, .. }) if type_tag == "pkg.Tag"
  );
  assert_matches!(
    deserialize_proto::<Label>(&registry, &tag),
    Err(Error::AmbiguousSchema { candidates, .. }) if candidates.len() == 2
  );
}

#[test]
fn foreign_uuid() {
  let registry = fixture_registry();
  let id = Uuid::new_v4();

  let bytes = foreign_to_bytes::<UuidWrapper>(&id).unwrap();
  assert_eq!(Some("sy.builtins.Uuid"), registry.wrapper_tag_for::<Uuid>());
  assert_eq!(id, deserialize_as::<Uuid>(&registry, &bytes).unwrap());
}

#[test]
fn unregistered_type() {
  let registry = fixture_registry();
  let bytes = Envelope::new("pkg.Missing", Vec::new()).encode().unwrap();

  assert_matches!(
    deserialize(&registry, &bytes),
    Err(Error::UnknownType { type_tag }) if type_tag == "pkg.Missing"
  );
}
