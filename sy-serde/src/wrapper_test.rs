// sy - typed protobuf envelope serialization
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

use super::{foreign_from_proto, foreign_to_bytes, foreign_to_proto, serialize_foreign, validate};
use crate::dispatch::{SerializeMode, Serialized};
use crate::envelope::Envelope;
use crate::test::{Coordinates, CoordinatesWrapper, MisdeclaredWrapper, UndeclaredWrapper};
use crate::{Error, WrappedType};
use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use protobuf::Message;
use sy_proto::protos::testing::fixtures::Coordinates as CoordinatesProto;

const COORDINATES: Coordinates = Coordinates { lat: 51, lon: -1 };

fn direct_payload() -> CoordinatesProto {
  CoordinatesProto {
    lat: 51,
    lon: -1,
    ..Default::default()
  }
}

#[test]
fn schema_object_matches_direct_encoding() {
  let proto = foreign_to_proto::<CoordinatesWrapper>(&COORDINATES).unwrap();

  assert_eq!(proto, direct_payload());
  assert_eq!(
    proto.write_to_bytes().unwrap(),
    direct_payload().write_to_bytes().unwrap()
  );
}

#[test]
fn bytes_carry_the_wrapper_tag_and_direct_payload() {
  let bytes = foreign_to_bytes::<CoordinatesWrapper>(&COORDINATES).unwrap();
  let envelope = Envelope::decode(&bytes).unwrap();

  assert_eq!(envelope.type_tag(), "pkg.Coordinates");
  assert_eq!(
    envelope.content().to_vec(),
    direct_payload().write_to_bytes().unwrap()
  );
}

#[test]
fn mode_priority_applies_to_foreign_values() {
  let serialized = serialize_foreign::<CoordinatesWrapper>(
    &COORDINATES,
    SerializeMode::AS_BYTES | SerializeMode::AS_SCHEMA_OBJECT,
  )
  .unwrap();

  assert_eq!(serialized, Serialized::Proto(direct_payload()));
  assert_matches!(
    serialize_foreign::<CoordinatesWrapper>(&COORDINATES, SerializeMode::NONE),
    Err(Error::NoModeSpecified)
  );
}

#[test]
fn unwraps_to_the_foreign_value() {
  assert_eq!(
    foreign_from_proto::<CoordinatesWrapper>(direct_payload()).unwrap(),
    COORDINATES
  );
}

#[test]
fn validation() {
  assert_eq!(
    validate::<CoordinatesWrapper>().unwrap(),
    WrappedType::of::<Coordinates>()
  );

  assert_matches!(
    validate::<UndeclaredWrapper>(),
    Err(Error::InvalidWrapper {
      type_name: "pkg.Undeclared",
      ..
    })
  );

  let error = validate::<MisdeclaredWrapper>().unwrap_err();
  assert_matches!(
    &error,
    Error::InvalidWrapper {
      type_name: "pkg.Misdeclared",
      ..
    }
  );
  assert!(error.to_string().contains("u32"), "{error}");
}
