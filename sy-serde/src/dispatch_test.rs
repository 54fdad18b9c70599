// sy - typed protobuf envelope serialization
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

use super::{
  SerializableExt,
  SerializeMode,
  Serialized,
  deserialize,
  deserialize_as,
  deserialize_proto,
  serialize,
};
use crate::config::Config;
use crate::envelope::Envelope;
use crate::registry::TypeRegistry;
use crate::test::{
  Account,
  Caption,
  Coordinates,
  CoordinatesWrapper,
  Point,
  Tag,
  Unfinished,
  account,
  point_field,
};
use crate::wrapper::foreign_to_bytes;
use crate::{Error, Serializable};
use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use protobuf::Message;
use rstest::rstest;
use sy_proto::protos::testing::fixtures::{Account as AccountProto, Label, Point as PointProto};

fn registry() -> TypeRegistry {
  let registry = TypeRegistry::new(&Config {
    builtin_wrappers: false,
    ..Default::default()
  });
  registry.register::<Point>().unwrap();
  registry.register::<Account>().unwrap();
  registry.register_wrapper::<CoordinatesWrapper>().unwrap();
  registry
}

#[test]
fn wrapper_and_native_type_resolve_side_by_side() {
  let registry = registry();

  assert!(registry.ambiguous_schemas().is_empty());
  assert!(registry.resolve("pkg.Point").is_ok());
  assert!(registry.resolve("pkg.Coordinates").is_ok());
}

#[test]
fn point_envelope_is_byte_exact() {
  let bytes = serialize(&Point { x: 1, y: 2 }, SerializeMode::AS_BYTES)
    .unwrap()
    .into_bytes()
    .unwrap();

  let mut expected = vec![0x0a, 9];
  expected.extend_from_slice(b"pkg.Point");
  expected.extend_from_slice(&[0x12, 4, 0x08, 0x01, 0x10, 0x02]);
  assert_eq!(bytes.to_vec(), expected);

  let deserialized = deserialize(&registry(), &bytes).unwrap();
  assert_eq!(deserialized.type_tag(), "pkg.Point");
  assert!(deserialized.is::<Point>());
  assert_eq!(deserialized.downcast::<Point>().unwrap(), Point { x: 1, y: 2 });
}

#[test]
fn round_trip() {
  let registry = registry();

  let account = account();
  assert_eq!(
    deserialize_as::<Account>(&registry, &account.to_bytes().unwrap()).unwrap(),
    account
  );

  let point = Point { x: i64::MIN, y: i64::MAX };
  assert_eq!(
    deserialize_as::<Point>(&registry, &point.binary().unwrap()).unwrap(),
    point
  );

  // All fields at their default values encode to an empty payload.
  let origin = Point { x: 0, y: 0 };
  let bytes = origin.to_bytes().unwrap();
  assert!(Envelope::decode(&bytes).unwrap().content().is_empty());
  assert_eq!(deserialize_as::<Point>(&registry, &bytes).unwrap(), origin);
}

#[test]
fn tag_fidelity() {
  let bytes = account().to_bytes().unwrap();
  let envelope = Envelope::decode(&bytes).unwrap();

  assert_eq!(envelope.type_tag(), "pkg.Account");
  assert_eq!(
    registry().resolve(envelope.type_tag()).unwrap().type_tag(),
    "pkg.Account"
  );
}

#[rstest]
#[case(SerializeMode::AS_SCHEMA_OBJECT | SerializeMode::AS_BYTES)]
#[case(SerializeMode::AS_BYTES | SerializeMode::AS_SCHEMA_OBJECT)]
#[case(SerializeMode { as_schema_object: true, as_bytes: true })]
fn schema_object_takes_priority(#[case] mode: SerializeMode) {
  let point = Point { x: 1, y: 2 };

  for _ in 0 .. 3 {
    assert_eq!(
      serialize(&point, mode).unwrap(),
      Serialized::Proto(point.to_proto().unwrap())
    );
  }
}

#[test]
fn no_mode() {
  assert!(SerializeMode::NONE.is_empty());
  assert!(SerializeMode::default().is_empty());
  assert_matches!(
    serialize(&Point { x: 1, y: 2 }, SerializeMode::NONE),
    Err(Error::NoModeSpecified)
  );
}

#[test]
fn unimplemented_type_cannot_be_serialized() {
  assert_matches!(
    serialize(&Unfinished, SerializeMode::AS_BYTES),
    Err(Error::NotImplemented {
      type_name: "pkg.Unfinished",
      method: "to_payload"
    })
  );
  assert_matches!(
    Unfinished.to_proto(),
    Err(Error::NotImplemented { .. })
  );
}

#[test]
fn shorthands() {
  let point = Point { x: 7, y: 8 };
  let proto = PointProto {
    x: 7,
    y: 8,
    ..Default::default()
  };

  assert_eq!(point.to_proto().unwrap(), proto);
  assert_eq!(point.proto().unwrap(), proto);
  assert_eq!(point.to_bytes().unwrap(), point.binary().unwrap());

  assert_matches!(
    serialize(&point, SerializeMode::AS_BYTES).unwrap().into_proto(),
    Err(Error::TypeMismatch { .. })
  );
  assert_matches!(
    serialize(&point, SerializeMode::AS_SCHEMA_OBJECT)
      .unwrap()
      .into_bytes(),
    Err(Error::TypeMismatch { .. })
  );
  assert_eq!(Serialized::<PointProto>::Bytes(bytes::Bytes::new()).kind(), "bytes");
}

#[test]
fn unknown_type() {
  let bytes = Envelope::new("pkg.Elsewhere", Vec::new()).encode().unwrap();

  assert_matches!(
    deserialize(&registry(), &bytes),
    Err(Error::UnknownType { type_tag }) if type_tag == "pkg.Elsewhere"
  );
}

#[test]
fn ambiguous_type_still_encodes() {
  let registry = registry();
  registry.register::<Tag>().unwrap();
  registry.register::<Caption>().unwrap();

  let tag_bytes = Tag("a".to_string()).to_bytes().unwrap();
  let caption_bytes = Caption("a".to_string()).to_bytes().unwrap();
  assert_eq!(
    Envelope::decode(&tag_bytes).unwrap().content(),
    Envelope::decode(&caption_bytes).unwrap().content()
  );

  assert_matches!(
    deserialize(&registry, &tag_bytes),
    Err(Error::AmbiguousType { .. })
  );
  assert_matches!(
    deserialize(&registry, &caption_bytes),
    Err(Error::AmbiguousType { .. })
  );
  assert_matches!(
    deserialize_proto(
      &registry,
      &Label {
        text: "a".to_string(),
        ..Default::default()
      }
    ),
    Err(Error::AmbiguousSchema { .. })
  );
}

#[rstest]
#[case::garbage(b"not an envelope".to_vec())]
#[case::truncated(vec![0x0a, 0x09, b'p', b'k', b'g'])]
#[case::empty(Vec::new())]
fn malformed_envelope(#[case] data: Vec<u8>) {
  assert_matches!(
    deserialize(&registry(), &data),
    Err(Error::MalformedEnvelope(_))
  );
}

#[test]
fn malformed_payload() {
  let bytes = Envelope::new("pkg.Point", vec![0x08]).encode().unwrap();

  assert_matches!(
    deserialize(&registry(), &bytes),
    Err(Error::MalformedPayload { .. })
  );
}

#[test]
fn envelope_size_limit() {
  let registry = TypeRegistry::new(&Config {
    max_envelope_size: Some(8),
    ..Default::default()
  });
  registry.register::<Point>().unwrap();

  let bytes = Point { x: 1, y: 2 }.to_bytes().unwrap();
  assert_matches!(
    deserialize(&registry, &bytes),
    Err(Error::EnvelopeTooLarge { limit: 8, .. })
  );
}

#[test]
fn wrong_downcast() {
  let bytes = Point { x: 1, y: 2 }.to_bytes().unwrap();

  assert_matches!(
    deserialize_as::<Account>(&registry(), &bytes),
    Err(Error::TypeMismatch { actual, .. }) if actual == "pkg.Point"
  );

  let deserialized = deserialize(&registry(), &bytes).unwrap();
  assert!(deserialized.downcast_ref::<Account>().is_none());
  assert!(format!("{deserialized:?}").contains("pkg.Point"));
  assert!(deserialized.into_any().is::<Point>());
}

#[test]
fn foreign_values_come_back_unwrapped() {
  let coordinates = Coordinates { lat: 3, lon: 4 };
  let bytes = foreign_to_bytes::<CoordinatesWrapper>(&coordinates).unwrap();

  let deserialized = deserialize(&registry(), &bytes).unwrap();
  assert_eq!(deserialized.type_tag(), "pkg.Coordinates");
  assert!(!deserialized.is::<CoordinatesWrapper>());
  assert_eq!(deserialized.downcast::<Coordinates>().unwrap(), coordinates);
}

#[test]
fn from_schema_object() {
  let proto = AccountProto {
    name: "grace".to_string(),
    roles: vec!["reader".to_string()],
    home: point_field(1, 1),
    ..Default::default()
  };

  let deserialized = deserialize_proto(&registry(), &proto).unwrap();
  assert_eq!(deserialized.type_tag(), "pkg.Account");
  assert_eq!(
    deserialized.downcast::<Account>().unwrap(),
    Account {
      name: "grace".to_string(),
      id: Vec::new(),
      roles: vec!["reader".to_string()],
      home: Some(Point { x: 1, y: 1 }),
    }
  );

  assert_eq!(
    proto.write_to_bytes().unwrap(),
    Envelope::decode(
      &Account::from_payload(proto.clone())
        .unwrap()
        .to_bytes()
        .unwrap()
    )
    .unwrap()
    .content()
    .to_vec()
  );
}
