// sy - typed protobuf envelope serialization
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

use protobuf_codegen::Customize;

fn main() {
  if std::env::var("SKIP_PROTO_GEN").is_ok() {
    return;
  }

  println!("cargo:rerun-if-changed=proto/");

  // Pure Rust parser, no protoc binary required.
  std::fs::create_dir_all("src/protos/wire").unwrap();
  protobuf_codegen::Codegen::new()
    .pure()
    .customize(
      Customize::default()
        .gen_mod_rs(false)
        .oneofs_non_exhaustive(false),
    )
    .includes(["proto"])
    .inputs([
      "proto/sy/serde/v1/envelope.proto",
      "proto/sy/serde/v1/wrappers.proto",
    ])
    .out_dir("src/protos/wire/")
    .run_from_script();

  std::fs::create_dir_all("src/protos/testing").unwrap();
  protobuf_codegen::Codegen::new()
    .pure()
    .customize(
      Customize::default()
        .gen_mod_rs(false)
        .oneofs_non_exhaustive(false),
    )
    .includes(["proto"])
    .inputs(["proto/sy/testing/v1/fixtures.proto"])
    .out_dir("src/protos/testing/")
    .run_from_script();
}
