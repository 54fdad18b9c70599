// sy - typed protobuf envelope serialization
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

use super::{Serializable, UNNAMED, WrappedType, is_wrapper};
use crate::Error;
use crate::test::{Account, Coordinates, CoordinatesWrapper, Point, Unfinished, account};
use assert_matches::assert_matches;
use sy_proto::protos::testing::fixtures::{Label, Point as PointProto};

struct Plain;

impl Serializable for Plain {
  type Schema = Label;
}

#[test]
fn unimplemented_conversions_fail() {
  assert_matches!(
    Unfinished.to_payload(),
    Err(Error::NotImplemented {
      type_name: "pkg.Unfinished",
      method: "to_payload"
    })
  );
  assert_matches!(
    Unfinished::from_payload(PointProto::default()),
    Err(Error::NotImplemented {
      type_name: "pkg.Unfinished",
      method: "from_payload"
    })
  );
}

#[test]
fn wrapped_type_marks_wrappers() {
  assert_matches!(
    Point::wrapped_type(),
    Err(Error::NotImplemented {
      method: "wrapped_type",
      ..
    })
  );
  assert!(!is_wrapper::<Point>());
  assert!(!is_wrapper::<Plain>());

  assert!(is_wrapper::<CoordinatesWrapper>());
  let wrapped = CoordinatesWrapper::wrapped_type().unwrap();
  assert_eq!(wrapped, WrappedType::of::<Coordinates>());
  assert!(wrapped.is::<Coordinates>());
  assert!(!wrapped.is::<Point>());
}

#[test]
fn schema_descriptor_follows_schema() {
  assert_eq!(Point::schema_descriptor().full_name(), "sy.testing.v1.Point");
  assert_eq!(Plain::schema_descriptor().full_name(), "sy.testing.v1.Label");
  assert_eq!(
    Account::schema_descriptor().full_name(),
    "sy.testing.v1.Account"
  );
}

#[test]
fn default_type_name_is_the_rust_path() {
  assert!(Plain::type_name().ends_with("::Plain"));
  assert_eq!(Point::type_name(), "pkg.Point");
}

#[test]
fn names() {
  assert_eq!(account().named(), "ada");
  assert_eq!(account().name(), Some("ada"));
  assert_eq!(Point { x: 1, y: 2 }.name(), None);
  assert_eq!(Point { x: 1, y: 2 }.named(), UNNAMED);
}

#[test]
fn round_trip_through_payload() {
  let point = Point { x: 1, y: 2 };
  assert_eq!(Point::from_payload(point.to_payload().unwrap()).unwrap(), point);

  let account = account();
  assert_eq!(
    Account::from_payload(account.to_payload().unwrap()).unwrap(),
    account
  );

  let homeless = Account {
    home: None,
    ..account
  };
  let payload = homeless.to_payload().unwrap();
  assert!(payload.home.is_none());
  assert_eq!(Account::from_payload(payload).unwrap(), homeless);
}
