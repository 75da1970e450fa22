//! Tier metrics system.
//!
//! Each tier tracks counters about its own traffic and reports them through
//! a common trait as a `BTreeMap`. BTreeMap rather than HashMap so readings
//! always come out in the same key order — reproducible test output and
//! stable rendering for whatever presentation layer consumes them. With a
//! dozen keys the O(log n) lookup cost is irrelevant.
//!
//! The engine never renders or prints metrics itself; it only exposes the
//! readings.

use std::collections::BTreeMap;

pub mod lfu;
pub mod lru;

pub use lfu::LfuTierMetrics;
pub use lru::LruTierMetrics;

/// Counters common to every tier policy.
///
/// All counts are entry counts; the engine is not size-aware.
#[derive(Debug, Default, Clone)]
pub struct CoreTierMetrics {
    /// Lookups that probed this tier (hits + misses).
    pub requests: u64,

    /// Lookups answered by this tier.
    pub cache_hits: u64,

    /// Entries written into this tier.
    pub insertions: u64,

    /// Entries evicted by the tier's policy under capacity pressure.
    pub evictions: u64,
}

impl CoreTierMetrics {
    /// Records a lookup answered by this tier.
    pub fn record_hit(&mut self) {
        self.requests += 1;
        self.cache_hits += 1;
    }

    /// Records a lookup that probed this tier and found nothing.
    pub fn record_miss(&mut self) {
        self.requests += 1;
    }

    /// Records an entry written into this tier.
    pub fn record_insertion(&mut self) {
        self.insertions += 1;
    }

    /// Records a policy eviction.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Fraction of probes answered by this tier, in `[0.0, 1.0]`.
    pub fn hit_rate(&self) -> f64 {
        if self.requests > 0 {
            self.cache_hits as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Fraction of probes that missed, in `[0.0, 1.0]`.
    pub fn miss_rate(&self) -> f64 {
        if self.requests > 0 {
            (self.requests - self.cache_hits) as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Core readings as deterministic key-value pairs.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = BTreeMap::new();
        metrics.insert("cache_hits".to_string(), self.cache_hits as f64);
        metrics.insert(
            "cache_misses".to_string(),
            (self.requests - self.cache_hits) as f64,
        );
        metrics.insert("evictions".to_string(), self.evictions as f64);
        metrics.insert("hit_rate".to_string(), self.hit_rate());
        metrics.insert("insertions".to_string(), self.insertions as f64);
        metrics.insert("miss_rate".to_string(), self.miss_rate());
        metrics.insert("requests".to_string(), self.requests as f64);
        metrics
    }
}

/// Uniform metrics-reporting interface over tier policies.
pub trait TierMetrics {
    /// All readings for the tier, keys sorted for deterministic output.
    fn metrics(&self) -> BTreeMap<String, f64>;

    /// Name of the policy the readings belong to (e.g. `"LRU"`).
    fn policy_name(&self) -> &'static str;
}
