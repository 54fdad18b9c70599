// sy - typed protobuf envelope serialization
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

//! Serializable types shared by integration tests and fuzz targets.

use sy_proto::protos::testing::fixtures::{Account as AccountProto, Label, Point as PointProto};
use sy_serde::{Config, Result, Serializable, TypeRegistry};

//
// Point
//

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Point {
  pub x: i64,
  pub y: i64,
}

impl Serializable for Point {
  type Schema = PointProto;

  fn type_name() -> &'static str {
    "pkg.Point"
  }

  fn to_payload(&self) -> Result<PointProto> {
    Ok(PointProto {
      x: self.x,
      y: self.y,
      ..Default::default()
    })
  }

  fn from_payload(payload: PointProto) -> Result<Self> {
    Ok(Self {
      x: payload.x,
      y: payload.y,
    })
  }
}

//
// Tag / Caption
//

macro_rules! label_type {
  ($name:ident, $tag:literal) => {
    #[derive(Clone, Debug, Default, PartialEq, Eq)]
    pub struct $name(pub String);

    impl Serializable for $name {
      type Schema = Label;

      fn type_name() -> &'static str {
        $tag
      }

      fn to_payload(&self) -> Result<Label> {
        Ok(Label {
          text: self.0.clone(),
          ..Default::default()
        })
      }

      fn from_payload(payload: Label) -> Result<Self> {
        Ok(Self(payload.text))
      }
    }
  };
}

// Both map onto the Label schema, which makes it ambiguous once both are registered.
label_type!(Tag, "pkg.Tag");
label_type!(Caption, "pkg.Caption");

//
// Account
//

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Account {
  pub name: String,
  pub id: Vec<u8>,
  pub roles: Vec<String>,
  pub home: Option<Point>,
}

impl Serializable for Account {
  type Schema = AccountProto;

  fn type_name() -> &'static str {
    "pkg.Account"
  }

  fn to_payload(&self) -> Result<AccountProto> {
    Ok(AccountProto {
      name: self.name.clone(),
      id: self.id.clone(),
      roles: self.roles.clone(),
      home: self
        .home
        .as_ref()
        .map(Point::to_payload)
        .transpose()?
        .into(),
      ..Default::default()
    })
  }

  fn from_payload(payload: AccountProto) -> Result<Self> {
    Ok(Self {
      name: payload.name,
      id: payload.id,
      roles: payload.roles,
      home: payload.home.into_option().map(Point::from_payload).transpose()?,
    })
  }

  fn name(&self) -> Option<&str> {
    Some(&self.name)
  }
}

/// A registry holding every fixture type plus the built-in wrappers.
#[must_use]
pub fn fixture_registry() -> TypeRegistry {
  let registry = TypeRegistry::from_config(&Config::default()).unwrap();
  registry.register::<Point>().unwrap();
  registry.register::<Tag>().unwrap();
  registry.register::<Caption>().unwrap();
  registry.register::<Account>().unwrap();
  log::debug!("fixture registry: {registry:?}");
  registry
}
