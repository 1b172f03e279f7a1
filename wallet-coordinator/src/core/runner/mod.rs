//! Operation runner
//!
//! Owns the lifetime of every in-flight asynchronous call issued by the
//! coordinator. `cancel_all` aborts the tasks holding those calls, which
//! prevents any further result delivery; the store-side work itself may
//! still run to completion, its result is simply discarded.

use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::task::AbortHandle;

/// Cancellable handle registry for outstanding operations.
///
/// Cloning is cheap and shares the registry, so chained operations can be
/// issued from inside a running one.
#[derive(Debug, Clone, Default)]
pub struct OperationRunner {
    handles: Arc<Mutex<Vec<AbortHandle>>>,
}

impl OperationRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn the operation and retain its abort handle
    pub fn run<F>(&self, operation: F) -> AbortHandle
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::spawn(operation).abort_handle();
        let mut handles = self.lock_handles();
        handles.retain(|h| !h.is_finished());
        handles.push(handle.clone());
        handle
    }

    /// Abort every retained operation
    pub fn cancel_all(&self) {
        let drained: Vec<AbortHandle> = self.lock_handles().drain(..).collect();
        for handle in drained {
            handle.abort();
        }
    }

    /// Number of operations still in flight
    pub fn outstanding(&self) -> usize {
        self.lock_handles().iter().filter(|h| !h.is_finished()).count()
    }

    fn lock_handles(&self) -> std::sync::MutexGuard<'_, Vec<AbortHandle>> {
        self.handles.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
