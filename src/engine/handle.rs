// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::codec::{ConfigBlob, Verbosity};
use crate::errors::{BridgeError, BridgeResult, HandleOperation};
use crate::observability::messages::handle::{
    HandleCreateFailed, HandleCreated, HandleDestroyFailed, HandleDestroyed,
};
use crate::traits::{Engine, RawHandle};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// What an emulator handle was created for. Two keys are equal when the
/// config text and the verbosity level are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HandleKey {
    pub config: ConfigBlob,
    pub verbosity: Verbosity,
}

/// Owned native emulator handle.
///
/// The native handle is destroyed exactly once: either explicitly through
/// [`EngineHandle::release`], which reports failure, or on drop, which can
/// only log it.
pub struct EngineHandle {
    raw: RawHandle,
    key: HandleKey,
    engine: Arc<dyn Engine>,
    released: bool,
}

impl EngineHandle {
    pub fn open(engine: Arc<dyn Engine>, key: HandleKey) -> BridgeResult<Self> {
        match engine.create(key.config.as_str(), key.verbosity.ordinal()) {
            Ok(raw) => {
                debug!(
                    "{}",
                    HandleCreated {
                        handle: raw,
                        engine: engine.name(),
                        verbosity: key.verbosity,
                        config_len: key.config.as_str().len(),
                    }
                );
                Ok(Self {
                    raw,
                    key,
                    engine,
                    released: false,
                })
            }
            Err(e) => {
                error!(
                    "{}",
                    HandleCreateFailed {
                        engine: engine.name(),
                        verbosity: key.verbosity,
                        error: &*e,
                    }
                );
                Err(BridgeError::HandleLifecycle {
                    operation: HandleOperation::Create,
                    reason: format!("{:#}", e),
                })
            }
        }
    }

    pub fn raw(&self) -> RawHandle {
        self.raw
    }

    pub fn key(&self) -> &HandleKey {
        &self.key
    }

    /// Destroy the native handle now and report the outcome.
    pub fn release(mut self) -> BridgeResult<()> {
        self.released = true;
        self.engine
            .destroy(self.raw)
            .map(|()| debug!("{}", HandleDestroyed { handle: self.raw }))
            .map_err(|e| BridgeError::HandleLifecycle {
                operation: HandleOperation::Destroy,
                reason: format!("{:#}", e),
            })
    }
}

impl Drop for EngineHandle {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        match self.engine.destroy(self.raw) {
            Ok(()) => debug!("{}", HandleDestroyed { handle: self.raw }),
            Err(e) => warn!(
                "{}",
                HandleDestroyFailed {
                    handle: self.raw,
                    error: &*e,
                }
            ),
        }
    }
}

impl fmt::Debug for EngineHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineHandle")
            .field("raw", &self.raw)
            .field("engine", &self.engine.name())
            .field("verbosity", &self.key.verbosity)
            .field("released", &self.released)
            .finish()
    }
}
