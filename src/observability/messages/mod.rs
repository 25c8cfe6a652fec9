// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! # Organization
//!
//! * `handle` - emulator handle create, reuse, replace and destroy events
//! * `call` - engine call dispatch, protocol failures and VM failures
//! * `remote` - account-state lookups
//!
//! # Usage Pattern
//!
//! ```rust
//! use tvm_bridge::observability::messages::handle::HandleReused;
//! use tvm_bridge::traits::RawHandle;
//!
//! let msg = HandleReused {
//!     handle: RawHandle(7),
//! };
//!
//! tracing::trace!("{}", msg);
//! ```

pub mod call;
pub mod handle;
pub mod remote;
