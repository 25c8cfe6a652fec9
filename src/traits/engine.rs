// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The native execution engine seam.
//!
//! The engine is a foreign component: it accepts strings, returns strings,
//! and hands out opaque integer handles for stateful emulators. Everything
//! above this trait deals in typed requests and results; everything below it
//! is the engine's business.

use std::fmt;

/// Opaque native emulator handle. Only meaningful to the engine that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawHandle(pub u64);

impl fmt::Display for RawHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Synchronous interface to the native engine.
///
/// Calls may block for a long time; the bridge always invokes them from the
/// blocking thread pool and never concurrently on one handle.
pub trait Engine: Send + Sync + 'static {
    /// Create an emulator bound to a configuration and verbosity ordinal.
    fn create(&self, config: &str, verbosity: i32) -> anyhow::Result<RawHandle>;

    /// Release an emulator. The handle must not be used afterwards.
    fn destroy(&self, handle: RawHandle) -> anyhow::Result<()>;

    /// Run a get-method. Stateless: no handle involved.
    fn run_get_method(&self, params_json: &str, stack: &str, config: &str) -> anyhow::Result<String>;

    /// Emulate a transaction on an existing emulator. `message` is `None`
    /// for tick-tock transactions.
    fn emulate(
        &self,
        handle: RawHandle,
        libs: Option<&str>,
        shard_account: &str,
        message: Option<&str>,
        params_json: &str,
    ) -> anyhow::Result<String>;

    /// Build information as a JSON document.
    fn version(&self) -> anyhow::Result<String>;

    fn name(&self) -> &'static str {
        "native"
    }
}
