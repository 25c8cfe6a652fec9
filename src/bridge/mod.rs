// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The execution façade.
//!
//! Arguments are validated and encoded before the engine sees them. The raw
//! response is decoded and normalized before the caller sees it.
//!
//! # Concurrency
//!
//! All engine calls of one bridge, including get-method and version calls,
//! queue on a single FIFO lock and run on the blocking thread pool. Two
//! transactions with different configs therefore never interleave on the
//! cached handle. Separate bridges share nothing.
//!
//! # Example
//!
//! ```rust,ignore
//! let bridge = Bridge::create(engine, Some(load_options("bridge.yaml")?)).await;
//! let output = bridge.run_transaction(args).await?;
//! if let ExecutionResult::Failure { error, .. } = &output.result {
//!     eprintln!("transaction failed: {}", error);
//! }
//! ```

pub mod args;

pub use args::{EmulationArgs, GetMethodArgs, TickTock, TickTockArgs, TransactionArgs};

use crate::codec::{decode, decode_version, Boc, CallKind, CallRequest, GetMethodOutput, TxOutput, VersionInfo};
use crate::config::BridgeOptions;
use crate::engine::{HandleCache, HandleKey};
use crate::errors::{BridgeError, BridgeResult};
use crate::normalizer::{
    normalize_emulation, normalize_get_method, EmulationOutput, ExecutionResult, GetMethodResult,
};
use crate::observability::messages::call::{
    CallCompleted, CallDispatched, MalformedResponse, ProtocolRejected, VmFailed,
};
use crate::traits::Engine;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

/// Typed, resource-safe entry point to one engine.
///
/// Cloning shares the handle cache and call queue. The cached emulator
/// handle is destroyed when the last clone is dropped.
#[derive(Clone)]
pub struct Bridge {
    engine: Arc<dyn Engine>,
    cache: Arc<Mutex<HandleCache>>,
    options: BridgeOptions,
}

impl Bridge {
    pub async fn create(engine: Arc<dyn Engine>, options: Option<BridgeOptions>) -> Self {
        let options = options.unwrap_or_default();
        info!(
            "Bridge created for {} engine (default verbosity: {})",
            engine.name(),
            options.verbosity
        );

        Self {
            cache: Arc::new(Mutex::new(HandleCache::new(Arc::clone(&engine)))),
            engine,
            options,
        }
    }

    pub fn options(&self) -> &BridgeOptions {
        &self.options
    }

    pub fn engine_name(&self) -> &'static str {
        self.engine.name()
    }

    /// Key of the currently cached emulator handle, if any.
    pub async fn cached_handle_key(&self) -> Option<HandleKey> {
        self.cache.lock().await.current_key().cloned()
    }

    /// Run a get-method. Does not create or reuse an emulator handle.
    pub async fn run_get_method(&self, args: GetMethodArgs) -> BridgeResult<GetMethodResult> {
        let request = args.into_request(&self.options)?;
        let raw = self.execute(request).await?;

        let result = decode::<GetMethodOutput>(&raw).and_then(normalize_get_method);
        report(CallKind::GetMethod, result)
    }

    pub async fn run_transaction(&self, args: TransactionArgs) -> BridgeResult<EmulationOutput> {
        let request = args.into_request(&self.options)?;
        self.emulate(request).await
    }

    pub async fn run_tick_tock(&self, args: TickTockArgs) -> BridgeResult<EmulationOutput> {
        let request = args.into_request(&self.options)?;
        self.emulate(request).await
    }

    pub async fn get_version(&self) -> BridgeResult<VersionInfo> {
        let raw = self
            .with_cache(|cache| {
                cache
                    .engine()
                    .version()
                    .map_err(|e| BridgeError::Engine(format!("{:#}", e)))
            })
            .await?;
        report(CallKind::Version, decode_version(&raw))
    }

    /// Destroy the cached handle now instead of on drop, reporting failure.
    pub async fn shutdown(&self) -> BridgeResult<()> {
        self.with_cache(|cache| cache.clear()).await
    }

    async fn emulate(&self, request: CallRequest) -> BridgeResult<EmulationOutput> {
        let kind = request.kind();
        let raw = self.execute(request).await?;

        let output = report(kind, decode::<TxOutput>(&raw).and_then(normalize_emulation))?;
        if let ExecutionResult::Failure { error, .. } = &output.result {
            debug!(
                "{}",
                VmFailed {
                    kind,
                    error,
                    vm_exit_code: output.result.vm_exit_code(),
                }
            );
        }
        Ok(output)
    }

    async fn execute(&self, request: CallRequest) -> BridgeResult<String> {
        self.with_cache(move |cache| dispatch(cache, &request)).await
    }

    /// Run `f` on the blocking pool once every earlier call has finished.
    async fn with_cache<F, T>(&self, f: F) -> BridgeResult<T>
    where
        F: FnOnce(&mut HandleCache) -> BridgeResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let mut guard = Arc::clone(&self.cache).lock_owned().await;
        tokio::task::spawn_blocking(move || f(&mut *guard)).await?
    }
}

/// Encode and run one call against the engine. Caller holds the queue lock.
fn dispatch(cache: &mut HandleCache, request: &CallRequest) -> BridgeResult<String> {
    let kind = request.kind();
    let params = request.encode()?;
    debug!(
        "{}",
        CallDispatched {
            kind,
            params_len: params.len(),
        }
    );

    let started = Instant::now();
    let raw = match request {
        CallRequest::GetMethod(request) => cache.engine().run_get_method(
            &params,
            request.stack.as_str(),
            request.config.as_str(),
        ),
        CallRequest::Transaction(request) | CallRequest::TickTock(request) => {
            let handle = cache.ensure_handle(&request.config, request.verbosity)?;
            cache.engine().emulate(
                handle,
                request.libs.as_ref().map(Boc::as_str),
                request.shard_account.as_str(),
                request.message.as_ref().map(Boc::as_str),
                &params,
            )
        }
    }
    .map_err(|e| BridgeError::Engine(format!("{:#}", e)))?;

    debug!(
        "{}",
        CallCompleted {
            kind,
            elapsed: started.elapsed(),
            response_len: raw.len(),
        }
    );
    Ok(raw)
}

/// Log decode and protocol failures once, at the façade boundary.
fn report<T>(kind: CallKind, result: BridgeResult<T>) -> BridgeResult<T> {
    match &result {
        Err(BridgeError::Emulation { message }) => {
            warn!("{}", ProtocolRejected { kind, message })
        }
        Err(e @ BridgeError::Protocol(_)) => error!("{}", MalformedResponse { kind, error: e }),
        _ => {}
    }
    result
}
