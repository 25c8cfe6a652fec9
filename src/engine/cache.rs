// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use super::handle::{EngineHandle, HandleKey};
use crate::codec::{ConfigBlob, Verbosity};
use crate::errors::BridgeResult;
use crate::observability::messages::handle::{HandleDestroyFailed, HandleReplaced, HandleReused};
use crate::traits::{Engine, RawHandle};
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Holds at most one live emulator handle, keyed by `(config, verbosity)`.
///
/// Not thread-safe on its own; the bridge serializes access. Dropping the
/// cache destroys the live handle.
pub struct HandleCache {
    engine: Arc<dyn Engine>,
    slot: Option<EngineHandle>,
}

impl HandleCache {
    pub fn new(engine: Arc<dyn Engine>) -> Self {
        Self { engine, slot: None }
    }

    /// Return a handle created for exactly this key, replacing the cached
    /// one if the key differs.
    ///
    /// A failed destroy of the stale handle is logged and does not prevent
    /// the create. A failed create leaves the cache empty.
    pub fn ensure_handle(
        &mut self,
        config: &ConfigBlob,
        verbosity: Verbosity,
    ) -> BridgeResult<RawHandle> {
        if let Some(handle) = &self.slot {
            let key = handle.key();
            if key.config == *config && key.verbosity == verbosity {
                trace!("{}", HandleReused { handle: handle.raw() });
                return Ok(handle.raw());
            }
        }

        if let Some(stale) = self.slot.take() {
            let raw = stale.raw();
            debug!(
                "{}",
                HandleReplaced {
                    handle: raw,
                    config_changed: stale.key().config != *config,
                    verbosity_changed: stale.key().verbosity != verbosity,
                }
            );
            if let Err(e) = stale.release() {
                warn!("{}", HandleDestroyFailed { handle: raw, error: &e });
            }
        }

        let handle = EngineHandle::open(
            Arc::clone(&self.engine),
            HandleKey {
                config: config.clone(),
                verbosity,
            },
        )?;
        let raw = handle.raw();
        self.slot = Some(handle);
        Ok(raw)
    }

    pub fn current_key(&self) -> Option<&HandleKey> {
        self.slot.as_ref().map(EngineHandle::key)
    }

    pub fn current_handle(&self) -> Option<RawHandle> {
        self.slot.as_ref().map(EngineHandle::raw)
    }

    pub fn engine(&self) -> &Arc<dyn Engine> {
        &self.engine
    }

    /// Destroy the live handle, if any, and report the outcome.
    pub fn clear(&mut self) -> BridgeResult<()> {
        match self.slot.take() {
            Some(handle) => handle.release(),
            None => Ok(()),
        }
    }
}
