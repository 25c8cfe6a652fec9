// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! Message types follow a struct-based pattern with a `Display`
//! implementation, so log text lives in one place instead of being scattered
//! across `tracing` call sites.
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::handle` - native emulator handle lifecycle
//! * `messages::call` - engine call dispatch and outcomes
//! * `messages::remote` - account-state lookups against a JSON-RPC node
//!
//! # Usage
//!
//! ```rust
//! use tvm_bridge::observability::messages::call::CallDispatched;
//! use tvm_bridge::codec::CallKind;
//!
//! let msg = CallDispatched {
//!     kind: CallKind::GetMethod,
//!     params_len: 512,
//! };
//!
//! tracing::debug!("{}", msg);
//! ```

pub mod messages;

use tracing_subscriber::EnvFilter;

/// Install a global `fmt` subscriber.
///
/// `RUST_LOG` wins over `default_filter` when set. Returns `false` when a
/// global subscriber was already installed, which is harmless in tests.
pub fn init_tracing(default_filter: &str) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::consts::DEFAULT_LOG_FILTER;

    #[test]
    fn test_init_tracing_is_idempotent() {
        init_tracing(DEFAULT_LOG_FILTER);
        assert!(!init_tracing(DEFAULT_LOG_FILTER));
    }
}
