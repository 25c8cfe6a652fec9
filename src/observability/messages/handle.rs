// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for native emulator handle lifecycle events.

use crate::codec::Verbosity;
use crate::traits::RawHandle;
use std::fmt::{Display, Formatter};

/// A new emulator handle was created.
///
/// # Log Level
/// `debug!` - Lifecycle detail
///
/// # Example
/// ```
/// use tvm_bridge::codec::Verbosity;
/// use tvm_bridge::observability::messages::handle::HandleCreated;
/// use tvm_bridge::traits::RawHandle;
///
/// let msg = HandleCreated {
///     handle: RawHandle(1),
///     engine: "native",
///     verbosity: Verbosity::VmLogs,
///     config_len: 4096,
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct HandleCreated<'a> {
    pub handle: RawHandle,
    pub engine: &'a str,
    pub verbosity: Verbosity,
    pub config_len: usize,
}

impl Display for HandleCreated<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Created {} emulator handle {} (verbosity: {}, config: {} chars)",
            self.engine, self.handle, self.verbosity, self.config_len
        )
    }
}

/// The cached handle matched the requested key and was reused.
///
/// # Log Level
/// `trace!` - Hot path detail
pub struct HandleReused {
    pub handle: RawHandle,
}

impl Display for HandleReused {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Reusing emulator handle {}", self.handle)
    }
}

/// The cached handle no longer matches and is being replaced.
///
/// # Log Level
/// `debug!` - Lifecycle detail
///
/// # Example
/// ```
/// use tvm_bridge::observability::messages::handle::HandleReplaced;
/// use tvm_bridge::traits::RawHandle;
///
/// let msg = HandleReplaced {
///     handle: RawHandle(3),
///     config_changed: true,
///     verbosity_changed: false,
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct HandleReplaced {
    pub handle: RawHandle,
    pub config_changed: bool,
    pub verbosity_changed: bool,
}

impl Display for HandleReplaced {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let reason = match (self.config_changed, self.verbosity_changed) {
            (true, true) => "config and verbosity changed",
            (true, false) => "config changed",
            (false, true) => "verbosity changed",
            (false, false) => "key changed",
        };
        write!(f, "Replacing emulator handle {}: {}", self.handle, reason)
    }
}

/// A handle was destroyed.
///
/// # Log Level
/// `debug!` - Lifecycle detail
pub struct HandleDestroyed {
    pub handle: RawHandle,
}

impl Display for HandleDestroyed {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Destroyed emulator handle {}", self.handle)
    }
}

/// Destroying a handle failed. The handle is abandoned.
///
/// # Log Level
/// `warn!` - Possible native resource leak, execution continues
///
/// # Example
/// ```
/// use tvm_bridge::observability::messages::handle::HandleDestroyFailed;
/// use tvm_bridge::traits::RawHandle;
///
/// let error = std::io::Error::new(std::io::ErrorKind::Other, "engine gone");
/// let msg = HandleDestroyFailed {
///     handle: RawHandle(9),
///     error: &error,
/// };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct HandleDestroyFailed<'a> {
    pub handle: RawHandle,
    pub error: &'a dyn std::error::Error,
}

impl Display for HandleDestroyFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Failed to destroy emulator handle {}: {}",
            self.handle, self.error
        )
    }
}

/// Creating a handle failed.
///
/// # Log Level
/// `error!` - The pending emulation cannot run
pub struct HandleCreateFailed<'a> {
    pub engine: &'a str,
    pub verbosity: Verbosity,
    pub error: &'a dyn std::error::Error,
}

impl Display for HandleCreateFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Failed to create {} emulator handle (verbosity: {}): {}",
            self.engine, self.verbosity, self.error
        )
    }
}
