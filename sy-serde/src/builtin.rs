// sy - typed protobuf envelope serialization
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

//! Wrappers for standard and commonly used third party types.
//!
//! Scalars map onto the `google.protobuf` wrapper messages, `Duration` and `OffsetDateTime` onto
//! the well-known `Duration` and `Timestamp`, and `uuid::Uuid` onto `sy.serde.v1.Uuid`.

#[cfg(test)]
#[path = "./builtin_test.rs"]
mod tests;

use crate::contract::{Serializable, WrappedType};
use crate::registry::TypeRegistry;
use crate::wrapper::Wrapper;
use crate::{Error, Result};
use protobuf::well_known_types::duration::Duration as DurationProto;
use protobuf::well_known_types::timestamp::Timestamp;
use protobuf::well_known_types::wrappers::{
  BoolValue,
  BytesValue,
  DoubleValue,
  Int64Value,
  StringValue,
};
use std::time::Duration;
use sy_proto::protos::wire::wrappers::Uuid as UuidProto;
use time::OffsetDateTime;
use uuid::Uuid;

const NANOS_PER_SECOND: i128 = 1_000_000_000;

/// Declares a wrapper for a type that maps onto the single `value` field of a
/// `google.protobuf` wrapper message.
macro_rules! value_wrapper {
  ($wrapper:ident, $foreign:ty, $schema:ty, $tag:literal) => {
    #[derive(Clone, Debug, PartialEq)]
    pub struct $wrapper($foreign);

    impl Serializable for $wrapper {
      type Schema = $schema;

      fn type_name() -> &'static str {
        $tag
      }

      fn to_payload(&self) -> Result<$schema> {
        let mut payload = <$schema>::default();
        payload.value = self.0.clone();
        Ok(payload)
      }

      fn from_payload(payload: $schema) -> Result<Self> {
        Ok(Self(payload.value))
      }

      fn wrapped_type() -> Result<WrappedType> {
        Ok(WrappedType::of::<$foreign>())
      }
    }

    impl Wrapper for $wrapper {
      type Foreign = $foreign;

      fn wrap(value: &$foreign) -> Self {
        Self(value.clone())
      }

      fn into_foreign(self) -> $foreign {
        self.0
      }
    }
  };
}

value_wrapper!(StringWrapper, String, StringValue, "sy.builtins.String");
value_wrapper!(I64Wrapper, i64, Int64Value, "sy.builtins.I64");
value_wrapper!(BoolWrapper, bool, BoolValue, "sy.builtins.Bool");
value_wrapper!(F64Wrapper, f64, DoubleValue, "sy.builtins.F64");
value_wrapper!(BytesWrapper, Vec<u8>, BytesValue, "sy.builtins.Bytes");

//
// DurationWrapper
//

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DurationWrapper(Duration);

impl Serializable for DurationWrapper {
  type Schema = DurationProto;

  fn type_name() -> &'static str {
    "sy.builtins.Duration"
  }

  fn to_payload(&self) -> Result<DurationProto> {
    Ok(DurationProto {
      seconds: i64::try_from(self.0.as_secs())
        .map_err(|e| Error::conversion(Self::type_name(), e))?,
      #[allow(clippy::cast_possible_wrap)]
      nanos: self.0.subsec_nanos() as i32,
      ..Default::default()
    })
  }

  fn from_payload(payload: DurationProto) -> Result<Self> {
    // Durations are unsigned in Rust, so the negative half of the protobuf range is rejected.
    let seconds = u64::try_from(payload.seconds).map_err(|_| {
      Error::conversion(
        Self::type_name(),
        anyhow::anyhow!("negative duration: {}s", payload.seconds),
      )
    })?;
    let nanos = u32::try_from(payload.nanos)
      .ok()
      .filter(|nanos| i128::from(*nanos) < NANOS_PER_SECOND)
      .ok_or_else(|| {
        Error::conversion(
          Self::type_name(),
          anyhow::anyhow!("nanos out of range: {}", payload.nanos),
        )
      })?;

    Ok(Self(Duration::new(seconds, nanos)))
  }

  fn wrapped_type() -> Result<WrappedType> {
    Ok(WrappedType::of::<Duration>())
  }
}

impl Wrapper for DurationWrapper {
  type Foreign = Duration;

  fn wrap(value: &Duration) -> Self {
    Self(*value)
  }

  fn into_foreign(self) -> Duration {
    self.0
  }
}

//
// TimestampWrapper
//

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimestampWrapper(OffsetDateTime);

impl Serializable for TimestampWrapper {
  type Schema = Timestamp;

  fn type_name() -> &'static str {
    "sy.builtins.Timestamp"
  }

  fn to_payload(&self) -> Result<Timestamp> {
    Ok(Timestamp {
      seconds: self.0.unix_timestamp(),
      #[allow(clippy::cast_possible_wrap)]
      nanos: self.0.nanosecond() as i32,
      ..Default::default()
    })
  }

  fn from_payload(payload: Timestamp) -> Result<Self> {
    let nanos = i128::from(payload.seconds) * NANOS_PER_SECOND + i128::from(payload.nanos);

    OffsetDateTime::from_unix_timestamp_nanos(nanos)
      .map(Self)
      .map_err(|e| Error::conversion(Self::type_name(), e))
  }

  fn wrapped_type() -> Result<WrappedType> {
    Ok(WrappedType::of::<OffsetDateTime>())
  }
}

impl Wrapper for TimestampWrapper {
  type Foreign = OffsetDateTime;

  fn wrap(value: &OffsetDateTime) -> Self {
    Self(*value)
  }

  fn into_foreign(self) -> OffsetDateTime {
    self.0
  }
}

//
// UuidWrapper
//

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UuidWrapper(Uuid);

impl Serializable for UuidWrapper {
  type Schema = UuidProto;

  fn type_name() -> &'static str {
    "sy.builtins.Uuid"
  }

  fn to_payload(&self) -> Result<UuidProto> {
    Ok(UuidProto {
      value: self.0.as_bytes().to_vec(),
      ..Default::default()
    })
  }

  fn from_payload(payload: UuidProto) -> Result<Self> {
    Uuid::from_slice(&payload.value)
      .map(Self)
      .map_err(|e| Error::conversion(Self::type_name(), e))
  }

  fn wrapped_type() -> Result<WrappedType> {
    Ok(WrappedType::of::<Uuid>())
  }
}

impl Wrapper for UuidWrapper {
  type Foreign = Uuid;

  fn wrap(value: &Uuid) -> Self {
    Self(*value)
  }

  fn into_foreign(self) -> Uuid {
    self.0
  }
}

pub fn register_builtin_wrappers(registry: &TypeRegistry) -> Result<()> {
  registry.register_wrapper::<StringWrapper>()?;
  registry.register_wrapper::<I64Wrapper>()?;
  registry.register_wrapper::<BoolWrapper>()?;
  registry.register_wrapper::<F64Wrapper>()?;
  registry.register_wrapper::<BytesWrapper>()?;
  registry.register_wrapper::<DurationWrapper>()?;
  registry.register_wrapper::<TimestampWrapper>()?;
  registry.register_wrapper::<UuidWrapper>()?;

  Ok(())
}
