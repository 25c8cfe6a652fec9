// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Default timeout for account-state lookups
pub const DEFAULT_REMOTE_TIMEOUT_SECONDS: u64 = 10;
/// Minimum accepted lookup timeout
pub const MIN_REMOTE_TIMEOUT_SECONDS: u64 = 1;
/// Maximum accepted lookup timeout
pub const MAX_REMOTE_TIMEOUT_SECONDS: u64 = 120;
/// Log filter used by `init_tracing` when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "tvm_bridge=info";
