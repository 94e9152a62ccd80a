//! Per-view cancellation.
//!
//! Each mounted view owns a [`ViewScope`]. Work started on behalf of the view
//! runs through [`ViewScope::run`] or holds a [`ScopeGuard`]; once the scope is
//! cancelled (or dropped) that work stops before it can touch view state.

use crate::{ClientError, ClientResult};

use std::future::Future;
use std::time::Duration;

use log::debug;
use tokio::sync::watch;
use tokio::task::JoinHandle;

pub struct ViewScope {
    cancel_tx: watch::Sender<bool>,
}

impl ViewScope {
    pub fn new() -> Self {
        let (cancel_tx, _) = watch::channel(false);
        Self { cancel_tx }
    }

    /// Cancel all work bound to this scope. Idempotent.
    pub fn cancel(&self) {
        if !self.cancel_tx.send_replace(true) {
            debug!("View scope cancelled");
        }
    }

    pub fn is_cancelled(&self) -> bool {
        *self.cancel_tx.borrow()
    }

    /// Guard for work that outlives the current call (spawned tasks)
    pub fn guard(&self) -> ScopeGuard {
        ScopeGuard {
            cancel_rx: self.cancel_tx.subscribe(),
        }
    }

    /// Run `operation` unless the scope is cancelled first.
    pub async fn run<F, T>(&self, operation: F) -> ClientResult<T>
    where
        F: Future<Output = ClientResult<T>>,
    {
        let mut guard = self.guard();
        tokio::select! {
            biased;
            _ = guard.cancelled() => Err(ClientError::cancelled()),
            result = operation => result,
        }
    }

    /// Run `action` after `delay` unless the scope is cancelled in the meantime.
    ///
    /// The task resolves to `true` when the action ran.
    pub fn run_after<A>(&self, delay: Duration, action: A) -> JoinHandle<bool>
    where
        A: FnOnce() + Send + 'static,
    {
        let mut guard = self.guard();
        tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = guard.cancelled() => false,
                _ = tokio::time::sleep(delay) => {
                    if guard.is_cancelled() {
                        return false;
                    }
                    action();
                    true
                }
            }
        })
    }
}

impl Default for ViewScope {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ViewScope {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Observer side of a [`ViewScope`].
pub struct ScopeGuard {
    cancel_rx: watch::Receiver<bool>,
}

impl ScopeGuard {
    /// Wait until the scope is cancelled (or gone)
    pub async fn cancelled(&mut self) {
        let _ = self.cancel_rx.wait_for(|cancelled| *cancelled).await;
    }

    pub fn is_cancelled(&self) -> bool {
        *self.cancel_rx.borrow()
    }
}
