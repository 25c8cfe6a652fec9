// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Flat JSON parameter schemas understood by the engine.
//!
//! Field names and encodings are fixed by the engine:
//! - balances, gas limits, logical times and extra-currency entries are
//!   decimal strings (the engine parses them as arbitrary-precision integers)
//! - seeds are hex, cells are base64
//! - optional fields are omitted when absent, never sent as `null`

use super::types::{Amount, Boc, RandSeed};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};
use std::collections::BTreeMap;

/// Extra currencies keyed by currency id.
pub type ExtraCurrencies = BTreeMap<u32, Amount>;

/// Parameters of a single get-method run.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetMethodParams {
    pub code: Boc,
    pub data: Boc,
    pub verbosity: i32,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub libs: Option<Boc>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub prev_blocks_info: Option<Boc>,
    pub address: String,
    pub unixtime: u32,
    #[serde_as(as = "DisplayFromStr")]
    pub balance: u64,
    #[serde_as(as = "Option<BTreeMap<DisplayFromStr, DisplayFromStr>>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_currencies: Option<ExtraCurrencies>,
    #[serde_as(as = "DisplayFromStr")]
    pub rand_seed: RandSeed,
    #[serde_as(as = "DisplayFromStr")]
    pub gas_limit: u64,
    pub method_id: i32,
    pub debug_enabled: bool,
}

/// Engine-tunable transaction behaviour.
///
/// `None` leaves the flag off the wire so the engine applies its own
/// default (shown per field).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmulationFlags {
    /// Keep frozen accounts whose storage debt exceeds the deletion limit. Engine default: `true`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_delete_frozen_accounts: Option<bool>,
    /// Charge action-phase fees even when the action phase fails. Engine default: `true`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charge_action_fees_on_fail: Option<bool>,
    /// Carry the full inbound body in bounced messages. Engine default: `false`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_body_in_bounced: Option<bool>,
    /// Reject messages carrying unknown extra currencies. Engine default: `true`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict_extra_currency: Option<bool>,
    /// Honour authority marks on special accounts. Engine default: `false`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authority_marks_enabled: Option<bool>,
}

impl EmulationFlags {
    /// Field-wise: flags set here win, unset ones come from `fallback`.
    pub fn or(self, fallback: EmulationFlags) -> EmulationFlags {
        EmulationFlags {
            disable_delete_frozen_accounts: self
                .disable_delete_frozen_accounts
                .or(fallback.disable_delete_frozen_accounts),
            charge_action_fees_on_fail: self
                .charge_action_fees_on_fail
                .or(fallback.charge_action_fees_on_fail),
            full_body_in_bounced: self.full_body_in_bounced.or(fallback.full_body_in_bounced),
            strict_extra_currency: self.strict_extra_currency.or(fallback.strict_extra_currency),
            authority_marks_enabled: self
                .authority_marks_enabled
                .or(fallback.authority_marks_enabled),
        }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Parameters of an ordinary or tick-tock transaction emulation.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmulationParams {
    pub unixtime: u32,
    #[serde_as(as = "DisplayFromStr")]
    pub lt: u64,
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rand_seed: Option<RandSeed>,
    pub ignore_chksig: bool,
    pub debug_enabled: bool,
    #[serde(skip_serializing_if = "is_false", default)]
    pub is_tick_tock: bool,
    #[serde(skip_serializing_if = "is_false", default)]
    pub is_tock: bool,
    #[serde(flatten)]
    pub flags: EmulationFlags,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub prev_blocks_info: Option<Boc>,
}
