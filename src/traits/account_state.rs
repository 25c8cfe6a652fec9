// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use crate::errors::RemoteLookupError;
use crate::remote::ContractState;

/// Source of on-chain account state used to build emulation inputs.
#[async_trait]
pub trait AccountStateSource: Send + Sync {
    async fn contract_state(&self, address: &str) -> Result<ContractState, RemoteLookupError>;

    fn name(&self) -> &'static str;
}
