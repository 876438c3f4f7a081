//! Monotonic request generations for last-request-wins UI flows.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Token identifying one analysis request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize)]
pub struct Generation(u64);

/// Issues strictly increasing [`Generation`] tokens.
///
/// A UI that fires a new request while an older one is still in flight keeps
/// only the completion whose generation is current and drops the rest,
/// instead of debouncing callbacks.
#[derive(Debug, Default)]
pub struct GenerationCounter {
    last_issued: AtomicU64,
}

impl GenerationCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new request, making every earlier generation stale.
    pub fn begin(&self) -> Generation {
        Generation(self.last_issued.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// True while `generation` belongs to the most recently started request.
    pub fn is_current(&self, generation: Generation) -> bool {
        self.last_issued.load(Ordering::Relaxed) == generation.0
    }
}
