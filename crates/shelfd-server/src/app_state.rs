//! Shared application state.
//!
//! Built once at process start and handed to every handler through axum's
//! state extractor. The store and counter live here instead of process-wide
//! singletons; single-instance-per-process semantics come from constructing
//! the state exactly once in `main`.

use std::sync::Arc;
use std::time::Instant;

use shelfd_core::metrics::RequestCounter;
use shelfd_core::ItemStore;

use crate::readiness::{MemoryStoreCheck, ReadinessCheck};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: ItemStore,
    requests: RequestCounter,
    checks: Vec<Arc<dyn ReadinessCheck>>,
    started_at: Instant,
}

impl AppState {
    pub fn new() -> Self {
        // The in-memory store needs no connection setup, so its readiness
        // check is a placeholder that always reports ok.
        let checks: Vec<Arc<dyn ReadinessCheck>> = vec![Arc::new(MemoryStoreCheck)];

        Self {
            inner: Arc::new(AppStateInner {
                store: ItemStore::new(),
                requests: RequestCounter::new(),
                checks,
                started_at: Instant::now(),
            }),
        }
    }

    pub fn store(&self) -> &ItemStore {
        &self.inner.store
    }

    pub fn requests(&self) -> &RequestCounter {
        &self.inner.requests
    }

    pub fn readiness_checks(&self) -> &[Arc<dyn ReadinessCheck>] {
        &self.inner.checks
    }

    /// Whole seconds since this state was constructed.
    pub fn uptime_seconds(&self) -> u64 {
        self.inner.started_at.elapsed().as_secs()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
