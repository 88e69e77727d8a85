//! Request statistics for diagnostics.

use serde::{Deserialize, Serialize};

/// Counters collected by a [`LifeEngine`](super::LifeEngine).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineStats {
    /// Successful `resolve` calls.
    pub requests: u64,

    /// Requests answered entirely from history.
    pub cache_hits: u64,

    /// Generations computed by the step rule.
    pub generations_computed: u64,

    /// Requests resolved to an earlier generation because the engine is stable.
    pub stable_truncations: u64,
}

impl EngineStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fraction of successful requests served from history.
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        if self.requests == 0 {
            0.0
        } else {
            self.cache_hits as f64 / self.requests as f64
        }
    }
}
