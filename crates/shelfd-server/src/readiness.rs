//! Readiness checks.
//!
//! `/ready` reports a `checks` map keyed by subsystem name. Real downstream
//! checks (database, cache, ...) plug in by implementing `ReadinessCheck`
//! and registering in `AppState::new`; the response shape stays fixed.

use async_trait::async_trait;

#[async_trait]
pub trait ReadinessCheck: Send + Sync {
    /// Subsystem name as it appears in the `checks` map.
    fn name(&self) -> &'static str;

    /// Individual status string, `"ok"` when healthy.
    async fn check(&self) -> &'static str;
}

/// The in-memory store requires no connection setup and cannot degrade,
/// so this check never reports anything but ok.
pub struct MemoryStoreCheck;

#[async_trait]
impl ReadinessCheck for MemoryStoreCheck {
    fn name(&self) -> &'static str {
        "memoryStore"
    }

    async fn check(&self) -> &'static str {
        "ok"
    }
}
