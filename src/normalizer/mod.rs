// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Maps decoded engine responses onto caller-facing results.
//!
//! Protocol-level rejections become [`BridgeError::Emulation`]; VM-level
//! outcomes, successful or not, become values. Debug output and engine logs
//! are kept in their own fields and never folded into `vm_log`.

mod result;

pub use result::{
    EmulationOutput, ExecutionResult, GetMethodOutcome, GetMethodResult, GetMethodSuccess,
};

use crate::codec::{CallResponse, GetMethodOutput, TxOutput};
use crate::errors::{BridgeError, BridgeResult};

pub fn normalize_emulation(response: CallResponse<TxOutput>) -> BridgeResult<EmulationOutput> {
    let (output, logs) = match response {
        CallResponse::Ok { output, logs } => (output, logs),
        CallResponse::Err { message } => return Err(BridgeError::Emulation { message }),
    };

    let (result, debug_log) = match output {
        TxOutput::Success(success) => (
            ExecutionResult::Success {
                transaction: success.transaction,
                shard_account: success.shard_account,
                vm_log: success.vm_log,
                actions: success.actions,
            },
            success.debug_log,
        ),
        TxOutput::Failure(failure) => (
            ExecutionResult::Failure {
                error: failure.error,
                compute: failure.compute,
                external_not_accepted: failure.external_not_accepted,
            },
            failure.debug_log,
        ),
    };

    Ok(EmulationOutput {
        result,
        debug_log,
        logs,
    })
}

pub fn normalize_get_method(response: CallResponse<GetMethodOutput>) -> BridgeResult<GetMethodResult> {
    let (output, logs) = match response {
        CallResponse::Ok { output, logs } => (output, logs),
        CallResponse::Err { message } => return Err(BridgeError::Emulation { message }),
    };

    let (outcome, debug_log) = match output {
        GetMethodOutput::Success(payload) => (
            GetMethodOutcome::Success(GetMethodSuccess {
                stack: payload.stack,
                gas_used: payload.gas_used,
                vm_exit_code: payload.vm_exit_code,
                vm_log: payload.vm_log,
                missing_library: payload.missing_library,
            }),
            payload.debug_log,
        ),
        GetMethodOutput::Failure { error } => (GetMethodOutcome::Failure { error }, String::new()),
    };

    Ok(GetMethodResult {
        outcome,
        debug_log,
        logs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode, ComputeFailure};
    use crate::engine::stub;

    fn emulation(raw: &str) -> BridgeResult<EmulationOutput> {
        normalize_emulation(decode::<TxOutput>(raw)?)
    }

    #[test]
    fn test_success_carries_all_fields() {
        let output = emulation(&stub::tx_success()).unwrap();

        assert_eq!(output.logs, "emulator log");
        let ExecutionResult::Success {
            transaction,
            shard_account,
            vm_log,
            actions,
        } = output.result
        else {
            panic!("expected success");
        };
        assert_eq!(transaction.as_str(), stub::EMPTY_CELL);
        assert_eq!(shard_account.as_str(), stub::EMPTY_CELL);
        assert_eq!(vm_log, "execute SETCP 0");
        assert_eq!(actions, None);
    }

    #[test]
    fn test_compute_failure_has_exit_code_and_log() {
        let output = emulation(&stub::tx_failure("exit code 33", Some(("trace", 33)))).unwrap();

        assert!(!output.result.is_success());
        assert_eq!(output.result.vm_exit_code(), Some(33));
        assert_eq!(output.result.vm_log(), Some("trace"));
        assert_eq!(
            output.result,
            ExecutionResult::Failure {
                error: "exit code 33".to_string(),
                compute: Some(ComputeFailure {
                    vm_log: "trace".to_string(),
                    vm_exit_code: 33,
                }),
                external_not_accepted: false,
            }
        );
    }

    #[test]
    fn test_pre_compute_failure_has_no_vm_detail() {
        let output = emulation(&stub::tx_failure("cannot pay storage", None)).unwrap();

        assert_eq!(output.result.vm_exit_code(), None);
        assert_eq!(output.result.vm_log(), None);
    }

    #[test]
    fn test_external_not_accepted_is_surfaced() {
        let raw = r#"{"ok":true,"logs":"","output":{"success":false,"error":"External message not accepted","external_not_accepted":true,"vm_log":"v","vm_exit_code":0}}"#;
        let output = emulation(raw).unwrap();

        assert!(matches!(
            output.result,
            ExecutionResult::Failure {
                external_not_accepted: true,
                ..
            }
        ));
    }

    #[test]
    fn test_protocol_failure_becomes_emulation_error() {
        let err = emulation(&stub::protocol_failure("Can't deserialize message boc")).unwrap_err();
        assert!(matches!(
            err,
            BridgeError::Emulation { ref message } if message == "Can't deserialize message boc"
        ));
    }

    #[test]
    fn test_get_method_debug_log_is_separate_from_vm_log() {
        let result = normalize_get_method(decode(&stub::get_method_success(0)).unwrap()).unwrap();

        assert_eq!(result.debug_log, "#DEBUG#: get-method");
        let GetMethodOutcome::Success(success) = result.outcome else {
            panic!("expected success");
        };
        assert_eq!(success.vm_log, "execute PUSHINT 0");
        assert_eq!(success.gas_used, 1234);
        assert_eq!(success.missing_library, None);
    }

    #[test]
    fn test_get_method_failure_is_narrow() {
        let raw = r#"{"ok":true,"logs":"","output":{"success":false,"error":"Can't deserialize code"}}"#;
        let result = normalize_get_method(decode(raw).unwrap()).unwrap();

        assert_eq!(
            result.outcome,
            GetMethodOutcome::Failure {
                error: "Can't deserialize code".to_string()
            }
        );
    }

    #[test]
    fn test_get_method_protocol_failure() {
        let err = normalize_get_method(decode(&stub::protocol_failure("bad stack")).unwrap()).unwrap_err();
        assert!(err.to_string().contains("bad stack"));
    }
}
