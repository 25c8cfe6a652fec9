// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Response envelope and payload decoding.
//!
//! The engine answers every run call with a two-level tagged union:
//!
//! ```text
//! {"ok": false, "message": "..."}                  protocol-level failure
//! {"ok": true,  "output": {...}, "logs": "..."}    protocol-level success
//!                 └─ {"success": true,  ...}       VM-level success
//!                 └─ {"success": false, ...}       VM-level failure
//! ```
//!
//! A VM-level failure that happened inside the compute phase carries
//! `vm_log` and `vm_exit_code`; one that happened earlier carries neither.
//! That key presence is folded into [`TxFailure::compute`] here, once.

use super::types::Boc;
use crate::errors::{BridgeError, BridgeResult};
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use serde_with::{serde_as, DisplayFromStr};

/// Outer protocol layer of a run call.
#[derive(Debug, Clone, PartialEq)]
pub enum CallResponse<T> {
    Ok { output: T, logs: String },
    Err { message: String },
}

/// Decode and validate the `{ok, ...}` envelope, then the typed payload.
///
/// Any structural problem is a [`BridgeError::Protocol`]; nothing is retried.
pub fn decode<T: DeserializeOwned>(raw: &str) -> BridgeResult<CallResponse<T>> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| BridgeError::Protocol(format!("response is not valid JSON: {}", e)))?;

    let Value::Object(mut envelope) = value else {
        return Err(BridgeError::Protocol(
            "response envelope is not a JSON object".to_string(),
        ));
    };

    match envelope.remove("ok") {
        Some(Value::Bool(true)) => {
            let output = envelope.remove("output").ok_or_else(|| {
                BridgeError::Protocol("success envelope is missing 'output'".to_string())
            })?;
            let logs = match envelope.remove("logs") {
                None | Some(Value::Null) => String::new(),
                Some(Value::String(logs)) => logs,
                Some(other) => {
                    return Err(BridgeError::Protocol(format!(
                        "envelope 'logs' must be a string, got {}",
                        other
                    )))
                }
            };
            let output = serde_json::from_value(output).map_err(|e| {
                BridgeError::Protocol(format!("malformed output payload: {}", e))
            })?;
            Ok(CallResponse::Ok { output, logs })
        }
        Some(Value::Bool(false)) => match envelope.remove("message") {
            Some(Value::String(message)) => Ok(CallResponse::Err { message }),
            _ => Err(BridgeError::Protocol(
                "failure envelope is missing a string 'message'".to_string(),
            )),
        },
        Some(other) => Err(BridgeError::Protocol(format!(
            "envelope discriminant 'ok' must be a boolean, got {}",
            other
        ))),
        None => Err(BridgeError::Protocol(
            "envelope discriminant 'ok' is missing".to_string(),
        )),
    }
}

/// Reads a nullable field whose key must still be present.
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}

/// Splits a payload object on its boolean `success` tag.
fn split_on_success<E: serde::de::Error>(mut object: Map<String, Value>) -> Result<(bool, Value), E> {
    match object.remove("success") {
        Some(Value::Bool(success)) => Ok((success, Value::Object(object))),
        Some(other) => Err(E::custom(format!(
            "'success' must be a boolean, got {}",
            other
        ))),
        None => Err(E::custom("payload is missing 'success'")),
    }
}

/// VM-level outcome of a transaction emulation.
#[derive(Debug, Clone, PartialEq)]
pub enum TxOutput {
    Success(TxSuccess),
    Failure(TxFailure),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TxSuccess {
    pub transaction: Boc,
    pub shard_account: Boc,
    pub vm_log: String,
    /// `null` when the compute phase produced no out-actions cell.
    #[serde(deserialize_with = "nullable")]
    pub actions: Option<Boc>,
    #[serde(default)]
    pub debug_log: String,
}

/// Detail of a failure that happened while contract code was running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComputeFailure {
    pub vm_log: String,
    pub vm_exit_code: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TxFailure {
    pub error: String,
    /// `Some` only when the engine reported compute-phase detail.
    pub compute: Option<ComputeFailure>,
    pub external_not_accepted: bool,
    pub debug_log: String,
}

#[derive(Deserialize)]
struct TxFailureWire {
    error: String,
    #[serde(default)]
    debug_log: String,
    #[serde(default)]
    external_not_accepted: bool,
    vm_log: Option<String>,
    vm_exit_code: Option<i32>,
}

impl TryFrom<TxFailureWire> for TxFailure {
    type Error = String;

    fn try_from(wire: TxFailureWire) -> Result<Self, Self::Error> {
        let compute = match (wire.vm_log, wire.vm_exit_code) {
            (Some(vm_log), Some(vm_exit_code)) => Some(ComputeFailure {
                vm_log,
                vm_exit_code,
            }),
            (Some(_), None) => {
                return Err("compute-phase failure carries 'vm_log' without 'vm_exit_code'".to_string())
            }
            (None, _) => None,
        };

        Ok(TxFailure {
            error: wire.error,
            compute,
            external_not_accepted: wire.external_not_accepted,
            debug_log: wire.debug_log,
        })
    }
}

impl<'de> Deserialize<'de> for TxOutput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let object = Map::<String, Value>::deserialize(deserializer)?;
        let (success, payload) = split_on_success::<D::Error>(object)?;

        if success {
            serde_json::from_value(payload)
                .map(TxOutput::Success)
                .map_err(D::Error::custom)
        } else {
            let wire: TxFailureWire = serde_json::from_value(payload).map_err(D::Error::custom)?;
            TxFailure::try_from(wire)
                .map(TxOutput::Failure)
                .map_err(D::Error::custom)
        }
    }
}

/// Outcome of a get-method run. Narrower than [`TxOutput`]: failures carry
/// only the engine's error text.
#[derive(Debug, Clone, PartialEq)]
pub enum GetMethodOutput {
    Success(GetMethodSuccessPayload),
    Failure { error: String },
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GetMethodSuccessPayload {
    pub stack: Boc,
    #[serde_as(as = "DisplayFromStr")]
    pub gas_used: u64,
    pub vm_exit_code: i32,
    pub vm_log: String,
    #[serde(deserialize_with = "nullable")]
    pub missing_library: Option<String>,
    #[serde(default)]
    pub debug_log: String,
}

#[derive(Deserialize)]
struct GetMethodFailureWire {
    error: String,
}

impl<'de> Deserialize<'de> for GetMethodOutput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let object = Map::<String, Value>::deserialize(deserializer)?;
        let (success, payload) = split_on_success::<D::Error>(object)?;

        if success {
            serde_json::from_value(payload)
                .map(GetMethodOutput::Success)
                .map_err(D::Error::custom)
        } else {
            let wire: GetMethodFailureWire =
                serde_json::from_value(payload).map_err(D::Error::custom)?;
            Ok(GetMethodOutput::Failure { error: wire.error })
        }
    }
}

/// Engine build information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    pub commit_hash: String,
    pub commit_date: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct VersionWire {
    emulator_lib_commit_hash: String,
    emulator_lib_commit_date: String,
}

/// Decode the (non-enveloped) version document.
pub fn decode_version(raw: &str) -> BridgeResult<VersionInfo> {
    let wire: VersionWire = serde_json::from_str(raw)
        .map_err(|e| BridgeError::Protocol(format!("malformed version response: {}", e)))?;
    Ok(VersionInfo {
        commit_hash: wire.emulator_lib_commit_hash,
        commit_date: wire.emulator_lib_commit_date,
    })
}
