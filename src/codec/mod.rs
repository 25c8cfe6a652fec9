// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Wire codec for the engine boundary.
//!
//! Turns strongly-typed call requests into the engine's flat JSON parameter
//! schema and decodes the engine's JSON responses back into typed values.
//!
//! # Layout
//!
//! * `types` - validated value types (config blobs, cells, seeds, amounts)
//! * `params` - parameter schemas for get-method and emulation calls
//! * `response` - envelope validation and payload decoding
//!
//! # Encoding rules
//!
//! | Field kind | Encoding |
//! |---|---|
//! | balances, gas limits, logical times, extra currencies | decimal string |
//! | random seed | lowercase hex |
//! | code, data, stack, libs, accounts, messages, config | base64 BOC |
//! | absent optional fields | omitted, never `null` |

mod params;
mod response;
mod types;

pub use params::{EmulationFlags, EmulationParams, ExtraCurrencies, GetMethodParams};
pub use response::{
    decode, decode_version, CallResponse, ComputeFailure, GetMethodOutput,
    GetMethodSuccessPayload, TxFailure, TxOutput, TxSuccess, VersionInfo,
};
pub use types::{validate_address, Amount, Boc, ConfigBlob, RandSeed, Verbosity};

use crate::errors::{BridgeError, BridgeResult};
use std::fmt;

/// Which façade operation a request belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallKind {
    GetMethod,
    Transaction,
    TickTock,
    Version,
}

impl fmt::Display for CallKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CallKind::GetMethod => "run_get_method",
            CallKind::Transaction => "run_transaction",
            CallKind::TickTock => "run_tick_tock",
            CallKind::Version => "get_version",
        };
        f.write_str(name)
    }
}

/// A get-method call: JSON params plus the positional stack and config.
#[derive(Debug, Clone, PartialEq)]
pub struct GetMethodRequest {
    pub params: GetMethodParams,
    pub stack: Boc,
    pub config: ConfigBlob,
}

/// A transaction or tick-tock emulation against a cached engine handle.
#[derive(Debug, Clone, PartialEq)]
pub struct EmulationRequest {
    pub config: ConfigBlob,
    pub verbosity: Verbosity,
    pub libs: Option<Boc>,
    pub shard_account: Boc,
    /// Inbound message; always `None` for tick-tock transactions.
    pub message: Option<Boc>,
    pub params: EmulationParams,
}

/// One engine call, built fresh from caller arguments and never reused.
#[derive(Debug, Clone, PartialEq)]
pub enum CallRequest {
    GetMethod(GetMethodRequest),
    Transaction(EmulationRequest),
    TickTock(EmulationRequest),
}

impl CallRequest {
    pub fn kind(&self) -> CallKind {
        match self {
            CallRequest::GetMethod(_) => CallKind::GetMethod,
            CallRequest::Transaction(_) => CallKind::Transaction,
            CallRequest::TickTock(_) => CallKind::TickTock,
        }
    }

    /// Canonical params JSON for this call.
    pub fn encode(&self) -> BridgeResult<String> {
        let encoded = match self {
            CallRequest::GetMethod(request) => serde_json::to_string(&request.params),
            CallRequest::Transaction(request) | CallRequest::TickTock(request) => {
                serde_json::to_string(&request.params)
            }
        };
        encoded.map_err(|e| BridgeError::Protocol(format!("failed to encode {} params: {}", self.kind(), e)))
    }
}
