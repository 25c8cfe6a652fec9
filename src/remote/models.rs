// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::codec::Boc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::{serde_as, DisplayFromStr};

/// JSON-RPC request structure.
#[derive(Debug, Serialize)]
pub(crate) struct JsonRpcRequest<'a, T: Serialize> {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'a str,
    pub params: T,
}

/// JSON-RPC response structure. `result` stays untyped until the error
/// member has been checked.
#[derive(Debug, Deserialize)]
pub(crate) struct JsonRpcResponse {
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<JsonRpcError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct JsonRpcError {
    pub code: i64,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct ContractStateParams<'a> {
    pub address: &'a str,
}

/// Identifier of the last transaction applied to an account.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastTransactionId {
    pub is_exact: bool,
    #[serde_as(as = "DisplayFromStr")]
    pub lt: u64,
    /// Base64 transaction hash.
    pub hash: String,
}

/// Block the state was read from.
#[serde_as]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timings {
    #[serde_as(as = "DisplayFromStr")]
    pub gen_lt: u64,
    pub gen_utime: u32,
}

/// Account state as reported by a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ContractState {
    Exists {
        /// Serialized account cell.
        account: Boc,
        #[serde(rename = "lastTransactionId")]
        last_transaction: LastTransactionId,
        timings: Timings,
    },
    NotExists {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        timings: Option<Timings>,
    },
}

impl ContractState {
    pub fn exists(&self) -> bool {
        matches!(self, ContractState::Exists { .. })
    }
}
