// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for engine call dispatch and outcomes.

use crate::codec::CallKind;
use std::fmt::{Display, Formatter};
use std::time::Duration;

/// An encoded call is being handed to the engine.
///
/// # Log Level
/// `debug!` - Per-call detail
pub struct CallDispatched {
    pub kind: CallKind,
    pub params_len: usize,
}

impl Display for CallDispatched {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Dispatching {} ({} bytes of params)",
            self.kind, self.params_len
        )
    }
}

/// The engine returned a response.
///
/// # Log Level
/// `debug!` - Per-call detail
///
/// # Example
/// ```
/// use std::time::Duration;
/// use tvm_bridge::codec::CallKind;
/// use tvm_bridge::observability::messages::call::CallCompleted;
///
/// let msg = CallCompleted {
///     kind: CallKind::Transaction,
///     elapsed: Duration::from_millis(12),
///     response_len: 2048,
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct CallCompleted {
    pub kind: CallKind,
    pub elapsed: Duration,
    pub response_len: usize,
}

impl Display for CallCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} returned {} bytes in {:?}",
            self.kind, self.response_len, self.elapsed
        )
    }
}

/// The engine rejected a call at the protocol level.
///
/// # Log Level
/// `warn!` - Caller receives an error
pub struct ProtocolRejected<'a> {
    pub kind: CallKind,
    pub message: &'a str,
}

impl Display for ProtocolRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{} rejected by engine: {}", self.kind, self.message)
    }
}

/// The VM ran but the transaction or method failed.
///
/// # Log Level
/// `debug!` - A normal outcome, reported to the caller as a value
///
/// # Example
/// ```
/// use tvm_bridge::codec::CallKind;
/// use tvm_bridge::observability::messages::call::VmFailed;
///
/// let msg = VmFailed {
///     kind: CallKind::Transaction,
///     error: "cannot run message on account: out of gas",
///     vm_exit_code: Some(-14),
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct VmFailed<'a> {
    pub kind: CallKind,
    pub error: &'a str,
    pub vm_exit_code: Option<i32>,
}

impl Display for VmFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self.vm_exit_code {
            Some(code) => write!(f, "{} failed in VM (exit code {}): {}", self.kind, code, self.error),
            None => write!(f, "{} failed before compute phase: {}", self.kind, self.error),
        }
    }
}

/// The engine's response did not match the expected schema.
///
/// # Log Level
/// `error!` - Engine and bridge disagree on the wire format
pub struct MalformedResponse<'a> {
    pub kind: CallKind,
    pub error: &'a dyn std::error::Error,
}

impl Display for MalformedResponse<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Malformed {} response: {}", self.kind, self.error)
    }
}
