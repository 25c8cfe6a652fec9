// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod account_state;
pub mod engine;

pub use account_state::AccountStateSource;
pub use engine::{Engine, RawHandle};
