// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Caller-facing arguments for the bridge operations.
//!
//! Fields left as `None` fall back to the bridge's [`BridgeOptions`].

use crate::codec::{
    validate_address, Boc, CallRequest, ConfigBlob, EmulationFlags, EmulationParams,
    EmulationRequest, ExtraCurrencies, GetMethodParams, GetMethodRequest, RandSeed, Verbosity,
};
use crate::config::BridgeOptions;
use crate::errors::BridgeResult;

#[derive(Debug, Clone, PartialEq)]
pub struct GetMethodArgs {
    pub code: Boc,
    pub data: Boc,
    /// Raw (`wc:hex`) or user-friendly address of the contract.
    pub address: String,
    pub method_id: i32,
    /// Serialized input stack.
    pub stack: Boc,
    pub balance: u64,
    pub gas_limit: u64,
    pub random_seed: RandSeed,
    pub unix_time: u32,
    pub config: ConfigBlob,
    pub libs: Option<Boc>,
    pub extra_currencies: Option<ExtraCurrencies>,
    pub prev_blocks_info: Option<Boc>,
    pub verbosity: Option<Verbosity>,
    pub debug_enabled: Option<bool>,
}

impl GetMethodArgs {
    pub(crate) fn into_request(self, options: &BridgeOptions) -> BridgeResult<CallRequest> {
        validate_address(&self.address)?;

        let verbosity = self.verbosity.unwrap_or(options.verbosity);
        let params = GetMethodParams {
            code: self.code,
            data: self.data,
            verbosity: verbosity.ordinal(),
            libs: self.libs,
            prev_blocks_info: self.prev_blocks_info,
            address: self.address,
            unixtime: self.unix_time,
            balance: self.balance,
            extra_currencies: self.extra_currencies,
            rand_seed: self.random_seed,
            gas_limit: self.gas_limit,
            method_id: self.method_id,
            debug_enabled: self.debug_enabled.unwrap_or(options.debug_enabled),
        };

        Ok(CallRequest::GetMethod(GetMethodRequest {
            params,
            stack: self.stack,
            config: self.config,
        }))
    }
}

/// Inputs shared by ordinary and tick-tock transactions.
#[derive(Debug, Clone, PartialEq)]
pub struct EmulationArgs {
    pub config: ConfigBlob,
    pub verbosity: Option<Verbosity>,
    pub libs: Option<Boc>,
    pub shard_account: Boc,
    /// Unix time the transaction is emulated at.
    pub now: u32,
    /// Logical time of the transaction.
    pub lt: u64,
    pub random_seed: Option<RandSeed>,
    pub ignore_chksig: bool,
    pub debug_enabled: Option<bool>,
    pub flags: Option<EmulationFlags>,
    pub prev_blocks_info: Option<Boc>,
}

impl EmulationArgs {
    fn into_request(self, options: &BridgeOptions, message: Option<Boc>, tick_tock: Option<TickTock>) -> EmulationRequest {
        let params = EmulationParams {
            unixtime: self.now,
            lt: self.lt,
            rand_seed: self.random_seed,
            ignore_chksig: self.ignore_chksig,
            debug_enabled: self.debug_enabled.unwrap_or(options.debug_enabled),
            is_tick_tock: tick_tock.is_some(),
            is_tock: tick_tock == Some(TickTock::Tock),
            flags: self.flags.unwrap_or_default().or(options.flags),
            prev_blocks_info: self.prev_blocks_info,
        };

        EmulationRequest {
            config: self.config,
            verbosity: self.verbosity.unwrap_or(options.verbosity),
            libs: self.libs,
            shard_account: self.shard_account,
            message,
            params,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransactionArgs {
    pub common: EmulationArgs,
    /// Inbound message cell.
    pub message: Boc,
}

impl TransactionArgs {
    pub(crate) fn into_request(self, options: &BridgeOptions) -> BridgeResult<CallRequest> {
        Ok(CallRequest::Transaction(
            self.common.into_request(options, Some(self.message), None),
        ))
    }
}

/// Which half of a special-account tick-tock to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickTock {
    Tick,
    Tock,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TickTockArgs {
    pub common: EmulationArgs,
    pub which: TickTock,
}

impl TickTockArgs {
    pub(crate) fn into_request(self, options: &BridgeOptions) -> BridgeResult<CallRequest> {
        Ok(CallRequest::TickTock(
            self.common.into_request(options, None, Some(self.which)),
        ))
    }
}
