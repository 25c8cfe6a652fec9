// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod bridge;
mod config;
mod remote;

pub use bridge::{BridgeError, BridgeResult, HandleOperation};
pub use config::ConfigError;
pub use remote::RemoteLookupError;
