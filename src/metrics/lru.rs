//! Recency (LRU) tier metrics.

use std::collections::BTreeMap;

use super::{CoreTierMetrics, TierMetrics};

/// Metrics for an [`LruTier`](crate::LruTier).
///
/// The recency policy has no bookkeeping beyond the core counters; the
/// struct exists so every policy reports through the same shape.
#[derive(Debug, Default, Clone)]
pub struct LruTierMetrics {
    /// Counters common to all tier policies.
    pub core: CoreTierMetrics,
}

impl LruTierMetrics {
    /// Creates zeroed metrics.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TierMetrics for LruTierMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.core.to_btreemap()
    }

    fn policy_name(&self) -> &'static str {
        "LRU"
    }
}
