// sy - typed protobuf envelope serialization
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

use arbitrary::Arbitrary;


#[cfg(test)]
#[ctor::ctor]
fn test_global_init() {
  sy_test_helpers::test_global_init();
}

#[derive(Arbitrary, Debug)]
pub enum Corruption {
  Flip { offset: u32, new_byte: u8 },
  Truncate { len: u32 },
  Append { bytes: Vec<u8> },
}

impl Corruption {
  pub fn apply(&self, data: &mut Vec<u8>) {
    log::trace!("applying {self:?} to {} bytes", data.len());
    match self {
      Self::Flip { offset, new_byte } => {
        if !data.is_empty() {
          let offset = *offset as usize % data.len();
          data[offset] = *new_byte;
        }
      },
      Self::Truncate { len } => data.truncate(*len as usize % (data.len() + 1)),
      Self::Append { bytes } => data.extend_from_slice(bytes),
    }
  }
}

// Builds a test case from raw bytes the way libfuzzer would, so the fuzz logic can also run
// against fixed inputs in unit tests.
pub fn from_raw<T: for<'a> Arbitrary<'a>>(data: &[u8]) -> T {
  T::arbitrary(&mut arbitrary::Unstructured::new(data)).unwrap()
}
