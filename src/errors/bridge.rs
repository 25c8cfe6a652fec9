// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Error types for bridge operations.
//!
//! Every failure a caller can observe from the execution façade is a
//! [`BridgeError`]. VM-level failures are not errors: they are ordinary
//! [`ExecutionResult::Failure`](crate::normalizer::ExecutionResult) values.

use super::remote::RemoteLookupError;
use std::fmt;
use thiserror::Error;

/// Native handle lifecycle step that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleOperation {
    Create,
    Destroy,
}

impl fmt::Display for HandleOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandleOperation::Create => write!(f, "create"),
            HandleOperation::Destroy => write!(f, "destroy"),
        }
    }
}

#[derive(Error, Debug)]
pub enum BridgeError {
    /// Response envelope or payload did not match the expected schema.
    /// Indicates an engine/bridge version mismatch and is never retried.
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// The engine rejected the call at the protocol level (`ok: false`).
    #[error("Emulation failed: {message}")]
    Emulation { message: String },

    /// Creating or destroying a native engine handle failed.
    #[error("Engine handle {operation} failed: {reason}")]
    HandleLifecycle {
        operation: HandleOperation,
        reason: String,
    },

    /// A native run, emulate or version call failed outright.
    #[error("Engine call failed: {0}")]
    Engine(String),

    /// Caller-supplied argument violates an encoding rule.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The blocking task running an engine call panicked or was cancelled.
    #[error("Engine task failed: {0}")]
    Task(String),

    #[error(transparent)]
    RemoteLookup(#[from] RemoteLookupError),
}

impl From<tokio::task::JoinError> for BridgeError {
    fn from(err: tokio::task::JoinError) -> Self {
        BridgeError::Task(err.to_string())
    }
}

pub type BridgeResult<T> = Result<T, BridgeError>;
