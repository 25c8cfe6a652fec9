// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Scripted engine for tests.
//!
//! Records every call, hands out sequential handles, and answers run calls
//! from queues of canned responses (falling back to a plain success).

use crate::traits::{Engine, RawHandle};
use serde_json::{json, Value};
use std::collections::{BTreeSet, VecDeque};
use std::sync::Mutex;

/// Base64 BOC of an empty cell.
pub const EMPTY_CELL: &str = "te6cckEBAQEAAgAAAEysuc0=";

#[derive(Debug, Clone, PartialEq)]
pub enum EngineCall {
    Create {
        config: String,
        verbosity: i32,
        handle: RawHandle,
    },
    Destroy(RawHandle),
    RunGetMethod {
        params: Value,
        stack: String,
        config: String,
    },
    Emulate {
        handle: RawHandle,
        libs: Option<String>,
        shard_account: String,
        message: Option<String>,
        params: Value,
    },
    Version,
}

#[derive(Default)]
struct ScriptState {
    next_handle: u64,
    live: BTreeSet<u64>,
    calls: Vec<EngineCall>,
    emulate_responses: VecDeque<String>,
    get_method_responses: VecDeque<String>,
    create_failure: Option<String>,
    destroy_failure: Option<String>,
    run_failure: Option<String>,
}

pub struct ScriptedEngine {
    state: Mutex<ScriptState>,
}

impl ScriptedEngine {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(ScriptState {
                next_handle: 1,
                ..ScriptState::default()
            }),
        }
    }

    pub fn queue_emulation(&self, response: impl Into<String>) {
        self.state.lock().unwrap().emulate_responses.push_back(response.into());
    }

    pub fn queue_get_method(&self, response: impl Into<String>) {
        self.state.lock().unwrap().get_method_responses.push_back(response.into());
    }

    /// Make every subsequent create fail with `reason` (or succeed again with `None`).
    pub fn fail_creates(&self, reason: Option<&str>) {
        self.state.lock().unwrap().create_failure = reason.map(str::to_string);
    }

    /// Make every subsequent destroy fail with `reason` (or succeed again with `None`).
    pub fn fail_destroys(&self, reason: Option<&str>) {
        self.state.lock().unwrap().destroy_failure = reason.map(str::to_string);
    }

    /// Make run, emulate and version calls fail outright with `reason`.
    pub fn fail_runs(&self, reason: Option<&str>) {
        self.state.lock().unwrap().run_failure = reason.map(str::to_string);
    }

    pub fn calls(&self) -> Vec<EngineCall> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn create_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, EngineCall::Create { .. }))
            .count()
    }

    pub fn destroyed(&self) -> Vec<RawHandle> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                EngineCall::Destroy(handle) => Some(handle),
                _ => None,
            })
            .collect()
    }

    pub fn live_handles(&self) -> Vec<RawHandle> {
        self.state.lock().unwrap().live.iter().copied().map(RawHandle).collect()
    }
}

impl Engine for ScriptedEngine {
    fn create(&self, config: &str, verbosity: i32) -> anyhow::Result<RawHandle> {
        let mut state = self.state.lock().unwrap();
        if let Some(reason) = &state.create_failure {
            anyhow::bail!("{}", reason);
        }
        let handle = RawHandle(state.next_handle);
        state.next_handle += 1;
        state.live.insert(handle.0);
        state.calls.push(EngineCall::Create {
            config: config.to_string(),
            verbosity,
            handle,
        });
        Ok(handle)
    }

    fn destroy(&self, handle: RawHandle) -> anyhow::Result<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(EngineCall::Destroy(handle));
        if let Some(reason) = &state.destroy_failure {
            anyhow::bail!("{}", reason);
        }
        if !state.live.remove(&handle.0) {
            anyhow::bail!("handle {} is not live", handle);
        }
        Ok(())
    }

    fn run_get_method(&self, params_json: &str, stack: &str, config: &str) -> anyhow::Result<String> {
        let mut state = self.state.lock().unwrap();
        if let Some(reason) = &state.run_failure {
            anyhow::bail!("{}", reason);
        }
        state.calls.push(EngineCall::RunGetMethod {
            params: serde_json::from_str(params_json)?,
            stack: stack.to_string(),
            config: config.to_string(),
        });
        Ok(state
            .get_method_responses
            .pop_front()
            .unwrap_or_else(|| get_method_success(0)))
    }

    fn emulate(
        &self,
        handle: RawHandle,
        libs: Option<&str>,
        shard_account: &str,
        message: Option<&str>,
        params_json: &str,
    ) -> anyhow::Result<String> {
        let mut state = self.state.lock().unwrap();
        if let Some(reason) = &state.run_failure {
            anyhow::bail!("{}", reason);
        }
        if !state.live.contains(&handle.0) {
            anyhow::bail!("emulate called with dead handle {}", handle);
        }
        state.calls.push(EngineCall::Emulate {
            handle,
            libs: libs.map(str::to_string),
            shard_account: shard_account.to_string(),
            message: message.map(str::to_string),
            params: serde_json::from_str(params_json)?,
        });
        Ok(state
            .emulate_responses
            .pop_front()
            .unwrap_or_else(tx_success))
    }

    fn version(&self) -> anyhow::Result<String> {
        let mut state = self.state.lock().unwrap();
        if let Some(reason) = &state.run_failure {
            anyhow::bail!("{}", reason);
        }
        state.calls.push(EngineCall::Version);
        Ok(json!({
            "emulatorLibCommitHash": "0123456789abcdef",
            "emulatorLibCommitDate": "2025-01-01 00:00:00 +0000",
        })
        .to_string())
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}

pub fn protocol_failure(message: &str) -> String {
    json!({ "ok": false, "message": message }).to_string()
}

pub fn tx_success() -> String {
    json!({
        "ok": true,
        "logs": "emulator log",
        "output": {
            "success": true,
            "transaction": EMPTY_CELL,
            "shard_account": EMPTY_CELL,
            "vm_log": "execute SETCP 0",
            "actions": null,
            "debug_log": "",
        },
    })
    .to_string()
}

/// `compute` is `Some((vm_log, vm_exit_code))` for a compute-phase failure.
pub fn tx_failure(error: &str, compute: Option<(&str, i32)>) -> String {
    let mut output = json!({ "success": false, "error": error });
    if let Some((vm_log, vm_exit_code)) = compute {
        output["vm_log"] = json!(vm_log);
        output["vm_exit_code"] = json!(vm_exit_code);
    }
    json!({ "ok": true, "logs": "", "output": output }).to_string()
}

pub fn get_method_success(vm_exit_code: i32) -> String {
    json!({
        "ok": true,
        "logs": "",
        "output": {
            "success": true,
            "stack": EMPTY_CELL,
            "gas_used": "1234",
            "vm_exit_code": vm_exit_code,
            "vm_log": "execute PUSHINT 0",
            "missing_library": null,
            "debug_log": "#DEBUG#: get-method",
        },
    })
    .to_string()
}
