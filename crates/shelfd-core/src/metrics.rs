//! Process-wide request accounting.
//!
//! A single monotonically increasing counter, incremented once per inbound
//! request regardless of outcome. Reset only by process restart.

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Default)]
pub struct RequestCounter {
    total: AtomicU64,
}

impl RequestCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment by 1. Called exactly once per request, before dispatch.
    pub fn inc(&self) {
        self.total.fetch_add(1, Ordering::Relaxed);
    }

    /// Point-in-time total since process start.
    pub fn total(&self) -> u64 {
        self.total.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_is_monotonic() {
        let c = RequestCounter::new();
        assert_eq!(c.total(), 0);
        c.inc();
        c.inc();
        assert_eq!(c.total(), 2);
    }
}
