//! Frequency (LFU) tier metrics.

use std::collections::BTreeMap;

use super::{CoreTierMetrics, TierMetrics};

/// Metrics for an [`LfuTier`](crate::LfuTier).
#[derive(Debug, Default, Clone)]
pub struct LfuTierMetrics {
    /// Counters common to all tier policies.
    pub core: CoreTierMetrics,

    /// Writes that pinned an existing key's access count back to 1.
    ///
    /// Every successful write leaves the count at 1, so a key kept alive by
    /// writes alone never accumulates frequency. This counter makes that
    /// visible to operators.
    pub frequency_resets: u64,
}

impl LfuTierMetrics {
    /// Creates zeroed metrics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a write that reset an existing key's access count.
    pub fn record_frequency_reset(&mut self) {
        self.frequency_resets += 1;
    }
}

impl TierMetrics for LfuTierMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        let mut metrics = self.core.to_btreemap();
        metrics.insert(
            "frequency_resets".to_string(),
            self.frequency_resets as f64,
        );
        metrics
    }

    fn policy_name(&self) -> &'static str {
        "LFU"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_resets_reported() {
        let mut m = LfuTierMetrics::new();
        m.record_frequency_reset();
        m.record_frequency_reset();
        assert_eq!(m.metrics().get("frequency_resets"), Some(&2.0));
        assert_eq!(m.policy_name(), "LFU");
    }
}
