//! Static members: one count shared by every `Counter` in the process.

use std::sync::atomic::{AtomicU64, Ordering};

/// Number of `Counter` values constructed since process start. Starts at zero,
/// only ever incremented, never torn down.
static COUNT: AtomicU64 = AtomicU64::new(0);

/// Zero-sized marker whose construction bumps the shared count.
#[derive(Debug)]
pub struct Counter {
    _private: (),
}

impl Counter {
    pub fn new() -> Self {
        let previous = COUNT.fetch_add(1, Ordering::SeqCst);
        tracing::trace!(count = previous + 1, "counter constructed");
        Self { _private: () }
    }

    /// Current value of the shared count.
    pub fn count() -> u64 {
        COUNT.load(Ordering::SeqCst)
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::new()
    }
}
