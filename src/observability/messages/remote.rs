// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for account-state lookups.

use std::fmt::{Display, Formatter};

/// An account-state request is being sent.
///
/// # Log Level
/// `debug!` - Per-request detail
pub struct LookupStarted<'a> {
    pub endpoint: &'a str,
    pub address: &'a str,
    pub request_id: u64,
}

impl Display for LookupStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Requesting state of {} from {} (request {})",
            self.address, self.endpoint, self.request_id
        )
    }
}

/// An account-state request failed.
///
/// # Log Level
/// `warn!` - Caller receives an error
///
/// # Example
/// ```
/// use tvm_bridge::observability::messages::remote::LookupFailed;
///
/// let error = std::io::Error::new(std::io::ErrorKind::TimedOut, "timed out");
/// let msg = LookupFailed {
///     address: "0:0000000000000000000000000000000000000000000000000000000000000000",
///     error: &error,
/// };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct LookupFailed<'a> {
    pub address: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for LookupFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "State lookup for {} failed: {}", self.address, self.error)
    }
}
