// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Native emulator handle management.
//!
//! A bridge instance keeps at most one emulator handle alive. The handle is
//! bound to the `(config, verbosity)` pair it was created with; a request for
//! a different pair destroys it and creates a fresh one.

pub mod cache;
pub mod handle;
#[cfg(test)]
pub mod stub;

pub use cache::HandleCache;
pub use handle::{EngineHandle, HandleKey};
