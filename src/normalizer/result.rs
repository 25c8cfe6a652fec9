// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::codec::{Boc, ComputeFailure};

/// VM-level outcome of a transaction or tick-tock emulation.
#[derive(Debug, Clone, PartialEq)]
pub enum ExecutionResult {
    Success {
        transaction: Boc,
        shard_account: Boc,
        vm_log: String,
        /// Out-actions cell; `None` when the compute phase produced none.
        actions: Option<Boc>,
    },
    Failure {
        error: String,
        /// Present only for failures inside the compute phase.
        compute: Option<ComputeFailure>,
        /// The account rejected an inbound external message.
        external_not_accepted: bool,
    },
}

impl ExecutionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ExecutionResult::Success { .. })
    }

    pub fn vm_log(&self) -> Option<&str> {
        match self {
            ExecutionResult::Success { vm_log, .. } => Some(vm_log),
            ExecutionResult::Failure { compute, .. } => compute.as_ref().map(|c| c.vm_log.as_str()),
        }
    }

    /// Exit code of a failed compute phase.
    pub fn vm_exit_code(&self) -> Option<i32> {
        match self {
            ExecutionResult::Success { .. } => None,
            ExecutionResult::Failure { compute, .. } => compute.as_ref().map(|c| c.vm_exit_code),
        }
    }
}

/// A normalized emulation plus the side channels the engine returned.
#[derive(Debug, Clone, PartialEq)]
pub struct EmulationOutput {
    pub result: ExecutionResult,
    /// Contract debug output (`DUMP`-style primitives).
    pub debug_log: String,
    /// Engine-level log from the response envelope.
    pub logs: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GetMethodSuccess {
    pub stack: Boc,
    pub gas_used: u64,
    pub vm_exit_code: i32,
    pub vm_log: String,
    /// Hash of a library cell the method needed but was not given.
    pub missing_library: Option<String>,
}

/// Get-method outcome. Failures carry only the engine's error text; no
/// exit code or VM log is reported for them.
#[derive(Debug, Clone, PartialEq)]
pub enum GetMethodOutcome {
    Success(GetMethodSuccess),
    Failure { error: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct GetMethodResult {
    pub outcome: GetMethodOutcome,
    pub debug_log: String,
    pub logs: String,
}
