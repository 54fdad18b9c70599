// sy - typed protobuf envelope serialization
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

#[cfg(test)]
#[path = "./lib_test.rs"]
mod tests;

use anyhow::anyhow;
use parking_lot::Mutex;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::reload::Handle as ReloadHandle;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

const DEFAULT_FILTER_RULES: &str = "info";

/// Set to any value to color log output.
pub const ANSI_ENV: &str = "SY_LOG_ANSI";

//
// SwapLogger
//

// Process logger whose filter can be replaced at runtime. The serialization crates log through the
// `log` facade, which is bridged into the tracing subscriber installed here.
pub struct SwapLogger {
  handle: Mutex<Option<ReloadHandle<EnvFilter, Registry>>>,
}

impl SwapLogger {
  const fn new() -> Self {
    Self {
      handle: Mutex::new(None),
    }
  }

  fn get() -> &'static Self {
    static LOGGER: SwapLogger = SwapLogger::new();

    &LOGGER
  }

  // Installs the logger with the rules from RUST_LOG, or the defaults. Calls after the first
  // successful one do nothing, so every test binary can call this from its constructor.
  pub fn initialize() {
    let rules = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_FILTER_RULES.to_string());
    if let Err(e) = Self::initialize_with(&rules) {
      eprintln!("failed to initialize logging: {e}");
    }
  }

  pub fn initialize_with(rules: &str) -> anyhow::Result<()> {
    let mut handle = Self::get().handle.lock();
    if handle.is_some() {
      return Ok(());
    }

    let stderr = tracing_subscriber::fmt::layer()
      .with_writer(std::io::stderr)
      .with_ansi(std::env::var(ANSI_ENV).is_ok())
      .with_line_number(true)
      .compact();

    let (filter, reload_handle) = tracing_subscriber::reload::Layer::new(EnvFilter::try_new(rules)?);
    Registry::default().with(filter).with(stderr).try_init()?;
    *handle = Some(reload_handle);

    Ok(())
  }

  // Replaces the active filter rules.
  pub fn swap(rules: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(rules)?;
    Self::get()
      .handle
      .lock()
      .as_ref()
      .ok_or_else(|| anyhow!("logger is not initialized"))?
      .reload(filter)?;

    // The log facade caches its own max level, which the reload does not update.
    log::set_max_level(tracing_log::AsLog::as_log(
      &tracing_subscriber::filter::LevelFilter::current(),
    ));

    Ok(())
  }

  #[must_use]
  pub fn is_initialized() -> bool {
    Self::get().handle.lock().is_some()
  }
}
