// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! JSON-RPC client for account-state lookups.

use super::models::{ContractState, ContractStateParams, JsonRpcRequest, JsonRpcResponse};
use crate::config::RemoteConfig;
use crate::errors::RemoteLookupError;
use crate::observability::messages::remote::{LookupFailed, LookupStarted};
use crate::traits::AccountStateSource;
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::{debug, warn};

const GET_CONTRACT_STATE: &str = "getContractState";

pub struct RpcAccountStateClient {
    http_client: reqwest::Client,
    endpoint: String,
    request_id: AtomicU64,
}

impl RpcAccountStateClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, RemoteLookupError> {
        let http_client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            endpoint: endpoint.into(),
            request_id: AtomicU64::new(1),
        })
    }

    /// Build a client from options. `Ok(None)` when no endpoint is configured.
    pub fn from_config(config: &RemoteConfig) -> Result<Option<Self>, RemoteLookupError> {
        config
            .endpoint
            .as_deref()
            .map(|endpoint| Self::new(endpoint, config.timeout()))
            .transpose()
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn fetch(&self, address: &str) -> Result<ContractState, RemoteLookupError> {
        let id = self.request_id.fetch_add(1, Ordering::SeqCst);
        debug!(
            "{}",
            LookupStarted {
                endpoint: &self.endpoint,
                address,
                request_id: id,
            }
        );

        let response = self
            .http_client
            .post(&self.endpoint)
            .json(&contract_state_request(id, address))
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        interpret_response(status, &body)
    }
}

fn contract_state_request(id: u64, address: &str) -> JsonRpcRequest<'static, ContractStateParams<'_>> {
    JsonRpcRequest {
        jsonrpc: "2.0",
        id,
        method: GET_CONTRACT_STATE,
        params: ContractStateParams { address },
    }
}

/// Validate an HTTP response to `getContractState`.
pub(crate) fn interpret_response(status: u16, body: &str) -> Result<ContractState, RemoteLookupError> {
    if status != 200 {
        return Err(RemoteLookupError::Status {
            status,
            body: body.to_string(),
        });
    }

    let response: JsonRpcResponse = serde_json::from_str(body)
        .map_err(|e| RemoteLookupError::Schema(format!("not a JSON-RPC response: {}", e)))?;

    if let Some(error) = response.error {
        return Err(RemoteLookupError::Rpc {
            code: error.code,
            message: error.message,
        });
    }

    let result = response
        .result
        .ok_or_else(|| RemoteLookupError::Schema("response has neither result nor error".to_string()))?;

    serde_json::from_value(result).map_err(|e| RemoteLookupError::Schema(e.to_string()))
}

#[async_trait]
impl AccountStateSource for RpcAccountStateClient {
    async fn contract_state(&self, address: &str) -> Result<ContractState, RemoteLookupError> {
        self.fetch(address).await.map_err(|e| {
            warn!("{}", LookupFailed { address, error: &e });
            e
        })
    }

    fn name(&self) -> &'static str {
        "json-rpc"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::{LastTransactionId, Timings};
    use serde_json::json;

    const CELL: &str = "te6cckEBAQEAAgAAAEysuc0=";
    const ADDRESS: &str = "0:0000000000000000000000000000000000000000000000000000000000000000";

    #[test]
    fn test_request_shape() {
        let value = serde_json::to_value(contract_state_request(7, ADDRESS)).unwrap();
        assert_eq!(
            value,
            json!({
                "jsonrpc": "2.0",
                "id": 7,
                "method": "getContractState",
                "params": { "address": ADDRESS },
            })
        );
    }

    #[test]
    fn test_exists_variant() {
        let body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": {
                "type": "exists",
                "account": CELL,
                "lastTransactionId": { "isExact": true, "lt": "47000000000003", "hash": "abc=" },
                "timings": { "genLt": "47000000000010", "genUtime": 1700000000 },
            },
        })
        .to_string();

        let state = interpret_response(200, &body).unwrap();

        assert!(state.exists());
        let ContractState::Exists {
            account,
            last_transaction,
            timings,
        } = state
        else {
            panic!("expected existing account");
        };
        assert_eq!(account.as_str(), CELL);
        assert_eq!(
            last_transaction,
            LastTransactionId {
                is_exact: true,
                lt: 47_000_000_000_003,
                hash: "abc=".to_string(),
            }
        );
        assert_eq!(
            timings,
            Timings {
                gen_lt: 47_000_000_000_010,
                gen_utime: 1_700_000_000,
            }
        );
    }

    #[test]
    fn test_not_exists_variant_without_timings() {
        let body = r#"{"jsonrpc":"2.0","id":1,"result":{"type":"notExists"}}"#;
        assert_eq!(
            interpret_response(200, body).unwrap(),
            ContractState::NotExists { timings: None }
        );
    }

    #[test]
    fn test_non_200_is_status_error() {
        let err = interpret_response(502, "bad gateway").unwrap_err();
        assert!(matches!(err, RemoteLookupError::Status { status: 502, .. }));
    }

    #[test]
    fn test_rpc_error_object() {
        let body = r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32602,"message":"invalid address"}}"#;
        let err = interpret_response(200, body).unwrap_err();
        assert!(matches!(
            err,
            RemoteLookupError::Rpc { code: -32602, ref message } if message == "invalid address"
        ));
    }

    #[test]
    fn test_schema_errors() {
        for body in [
            "<html>",
            r#"{"jsonrpc":"2.0","id":1}"#,
            r#"{"jsonrpc":"2.0","id":1,"result":{"type":"frozen"}}"#,
            r#"{"jsonrpc":"2.0","id":1,"result":{"type":"exists","account":"AAAA"}}"#,
        ] {
            assert!(
                matches!(interpret_response(200, body), Err(RemoteLookupError::Schema(_))),
                "expected schema error for {}",
                body
            );
        }
    }

    #[test]
    fn test_from_config_without_endpoint() {
        let client = RpcAccountStateClient::from_config(&RemoteConfig::default()).unwrap();
        assert!(client.is_none());
    }

    #[test]
    fn test_from_config_with_endpoint() {
        let config = RemoteConfig {
            endpoint: Some("http://127.0.0.1:8081/jsonRPC".to_string()),
            timeout_seconds: 3,
        };
        let client = RpcAccountStateClient::from_config(&config).unwrap().unwrap();
        assert_eq!(client.endpoint(), "http://127.0.0.1:8081/jsonRPC");
        assert_eq!(client.name(), "json-rpc");
    }
}
