// sy - typed protobuf envelope serialization
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

#[cfg(test)]
#[path = "./envelope_test.rs"]
mod tests;

use crate::{Error, Result};
use bytes::Bytes;
use protobuf::Message;
use sy_proto::protos::wire::envelope::DataMessage;

//
// Envelope
//

/// A type tag plus the schema-encoded payload of a value, encoded as `sy.serde.v1.DataMessage`.
///
/// The encoding is deterministic: fields are written in field number order and empty fields
/// are omitted, so independently built encoders produce identical bytes for the same input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Envelope {
  type_tag: String,
  content: Bytes,
}

impl Envelope {
  pub fn new(type_tag: impl Into<String>, content: impl Into<Bytes>) -> Self {
    Self {
      type_tag: type_tag.into(),
      content: content.into(),
    }
  }

  #[must_use]
  pub fn type_tag(&self) -> &str {
    &self.type_tag
  }

  #[must_use]
  pub const fn content(&self) -> &Bytes {
    &self.content
  }

  #[must_use]
  pub fn into_parts(self) -> (String, Bytes) {
    (self.type_tag, self.content)
  }

  pub fn encode(&self) -> Result<Bytes> {
    let message = DataMessage {
      obj_type: self.type_tag.clone(),
      content: self.content.to_vec(),
      ..Default::default()
    };

    Ok(message.write_to_bytes()?.into())
  }

  pub fn decode(data: &[u8]) -> Result<Self> {
    Self::decode_with_limit(data, None)
  }

  /// Decodes an envelope, rejecting inputs larger than `limit` bytes before parsing them.
  pub fn decode_with_limit(data: &[u8], limit: Option<usize>) -> Result<Self> {
    if let Some(limit) = limit.filter(|limit| data.len() > *limit) {
      return Err(Error::EnvelopeTooLarge {
        size: data.len(),
        limit,
      });
    }

    let message = DataMessage::parse_from_bytes(data)
      .map_err(|e| Error::MalformedEnvelope(e.to_string()))?;

    if message.obj_type.is_empty() {
      return Err(Error::MalformedEnvelope("missing obj_type".to_string()));
    }

    log::trace!(
      "decoded envelope obj_type={} content_len={}",
      message.obj_type,
      message.content.len()
    );

    Ok(Self {
      type_tag: message.obj_type,
      content: message.content.into(),
    })
  }
}
