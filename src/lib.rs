// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod bridge;     // execution façade
pub mod codec;      // engine wire protocol
pub mod config;     // bridge options
pub mod engine;     // emulator handle lifecycle
pub mod errors;     // error handling
pub mod normalizer; // typed results
pub mod observability;
pub mod remote;     // account-state lookups
pub mod signing;    // signature domains
pub mod traits;     // engine + collaborator seams

pub use bridge::Bridge;
