// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Account-state lookups over JSON-RPC.
//!
//! Supplies the serialized account cell an emulation starts from. Any
//! malformed or unsuccessful response fails the lookup without retry.

mod client;
mod models;

pub use client::RpcAccountStateClient;
pub use models::{ContractState, LastTransactionId, Timings};
