//! Tiered cache hierarchy.
//!
//! A [`TieredCache`] composes an ordered sequence of tiers over one logical
//! key space. Index 0 is the fastest, highest-priority tier; lookups probe
//! tiers in ascending index order and stop at the first hit, insertions
//! always land in tier 0. Tiers are appended at the end of the order — the
//! newest tier is the lowest-priority one — and removed by explicit index,
//! shifting later tiers down by one.
//!
//! # Residency is not exclusive
//!
//! The hierarchy does not keep a key in exactly one tier. An insertion
//! writes tier 0 without removing the key from tiers that already hold it,
//! and the refresh pass below rewrites an entry only inside the tier that
//! already holds it. "Tiered" here means ordered lookup priority, not
//! exclusive residency: the same key can live in several tiers at once,
//! and a hit at tier k never seeds tiers `0..k`.
//!
//! # The refresh pass
//!
//! After every insertion and every lookup hit, each tier at index 1 and
//! above that currently holds the key has its entry removed and reinserted
//! with the fresh value. That resets the entry's recency or frequency
//! bookkeeping in place; it never relocates the entry toward tier 0. On a
//! lookup hit at tier k ≥ 1 the pass covers tier k itself, so the hit's own
//! bookkeeping bump is immediately reset by the reinsertion. Tier 0 is
//! skipped: an insertion just wrote it directly, and a tier-0 hit keeps its
//! bookkeeping bump.
//!
//! # Locking
//!
//! One `parking_lot::Mutex` over the tier sequence serializes every public
//! operation for its full duration, including all per-tier work it
//! triggers. The tiers' own locks are therefore never contended here; they
//! exist so a tier handed out standalone stays safe (see
//! [`Tier`](crate::tier::Tier)).

use core::fmt;
use core::hash::Hash;
use core::num::NonZeroUsize;
use std::collections::BTreeMap;

use parking_lot::Mutex;
use tracing::{debug, trace};

use crate::config::{LfuTierConfig, LruTierConfig, TierConfig, TieredCacheConfig};
use crate::error::{CacheError, CacheResult};
use crate::lfu::LfuTier;
use crate::lru::LruTier;
use crate::tier::{EvictionPolicy, Tier};

/// Snapshot of one tier's state, produced by [`TieredCache::snapshot`].
///
/// Plain data for an external presentation layer to render; the engine
/// itself never prints.
#[derive(Clone)]
pub struct TierSnapshot<K, V> {
    /// The tier's eviction policy.
    pub policy: EvictionPolicy,
    /// The tier's fixed capacity.
    pub capacity: NonZeroUsize,
    /// Number of entries currently held.
    pub len: usize,
    /// Key/value pairs in the tier's internal order.
    pub entries: Vec<(K, V)>,
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for TierSnapshot<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TierSnapshot")
            .field("policy", &self.policy)
            .field("capacity", &self.capacity)
            .field("len", &self.len)
            .field("entries", &self.entries)
            .finish()
    }
}

/// A multi-tier cache over one logical key space.
///
/// # Examples
///
/// ```
/// use tiercache_rs::{EvictionPolicy, TieredCache};
///
/// let cache: TieredCache<String, String> = TieredCache::new();
/// cache.add_tier(3, EvictionPolicy::Lru).unwrap();
/// cache.add_tier(2, EvictionPolicy::Lfu).unwrap();
///
/// cache.put("a".into(), "value_a".into()).unwrap();
/// assert_eq!(cache.get(&"a".to_string()), Some("value_a".to_string()));
/// assert_eq!(cache.get(&"missing".to_string()), None);
/// ```
pub struct TieredCache<K, V> {
    tiers: Mutex<Vec<Box<dyn Tier<K, V> + Send>>>,
}

impl<K, V> TieredCache<K, V>
where
    K: Hash + Eq + Clone + Send + 'static,
    V: Clone + Send + 'static,
{
    /// Creates a hierarchy with no tiers.
    ///
    /// Tiers are added with [`add_tier`](Self::add_tier); insertions fail
    /// until at least one exists.
    pub fn new() -> Self {
        Self {
            tiers: Mutex::new(Vec::new()),
        }
    }

    /// Builds a whole hierarchy from a configuration.
    ///
    /// The configuration's tier order is lookup order. Capacities were
    /// already validated when each [`TierConfig`] was built, so this cannot
    /// fail.
    pub fn init(config: TieredCacheConfig) -> Self {
        let cache = Self::new();
        {
            let mut tiers = cache.tiers.lock();
            for tier_config in config.tiers {
                tiers.push(Self::build_tier(tier_config));
            }
        }
        cache
    }

    fn build_tier(config: TierConfig) -> Box<dyn Tier<K, V> + Send> {
        match config.policy {
            EvictionPolicy::Lru => {
                Box::new(LruTier::init(LruTierConfig::new(config.capacity), None))
            }
            EvictionPolicy::Lfu => {
                Box::new(LfuTier::init(LfuTierConfig::new(config.capacity), None))
            }
        }
    }

    /// Appends a tier at the end of the hierarchy (lowest priority).
    ///
    /// # Errors
    ///
    /// [`CacheError::ZeroCapacity`] if `capacity` is zero.
    pub fn add_tier(&self, capacity: usize, policy: EvictionPolicy) -> CacheResult<()> {
        let config = TierConfig::new(capacity, policy)?;
        let mut tiers = self.tiers.lock();
        tiers.push(Self::build_tier(config));
        debug!(capacity, policy = %policy, tiers = tiers.len(), "tier appended");
        Ok(())
    }

    /// Appends an externally built tier at the end of the hierarchy.
    ///
    /// This is the seam for policies beyond the built-in two: anything
    /// implementing [`Tier`] slots in without changes to the hierarchy's
    /// control flow. The tier keeps whatever contents it already holds.
    pub fn push_tier(&self, tier: Box<dyn Tier<K, V> + Send>) {
        let mut tiers = self.tiers.lock();
        tiers.push(tier);
        debug!(tiers = tiers.len(), "tier appended");
    }

    /// Removes the tier at `index`; later tiers shift down by one.
    ///
    /// # Errors
    ///
    /// [`CacheError::TierOutOfRange`] if `index` is outside
    /// `[0, tier_count)`.
    pub fn remove_tier(&self, index: usize) -> CacheResult<()> {
        let mut tiers = self.tiers.lock();
        if index >= tiers.len() {
            return Err(CacheError::TierOutOfRange {
                index,
                count: tiers.len(),
            });
        }
        tiers.remove(index);
        debug!(index, tiers = tiers.len(), "tier removed");
        Ok(())
    }

    /// Number of tiers currently configured.
    pub fn tier_count(&self) -> usize {
        self.tiers.lock().len()
    }

    /// Looks the key up tier by tier, fastest first.
    ///
    /// The first hit wins: the scan stops, the refresh pass runs, and the
    /// value is returned. Tiers before the hit are left untouched apart
    /// from a miss count — they do not gain the key.
    pub fn get(&self, key: &K) -> Option<V> {
        let tiers = self.tiers.lock();
        let mut hit = None;
        for (index, tier) in tiers.iter().enumerate() {
            if let Some(value) = tier.get(key) {
                hit = Some((index, value));
                break;
            }
            tier.record_miss();
        }
        match hit {
            Some((index, value)) => {
                trace!(tier = index, "lookup hit");
                Self::refresh_lower_tiers(tiers.as_slice(), key, &value);
                Some(value)
            }
            None => {
                trace!("lookup miss");
                None
            }
        }
    }

    /// Writes the pair into tier 0 unconditionally, then runs the refresh
    /// pass over the remaining tiers.
    ///
    /// # Errors
    ///
    /// [`CacheError::NoTiers`] if the hierarchy has no tiers.
    pub fn put(&self, key: K, value: V) -> CacheResult<()> {
        let tiers = self.tiers.lock();
        let first = tiers.first().ok_or(CacheError::NoTiers)?;
        first.put(key.clone(), value.clone());
        trace!("inserted into tier 0");
        Self::refresh_lower_tiers(tiers.as_slice(), &key, &value);
        Ok(())
    }

    /// Rewrites the entry inside every tier at index 1 and above that
    /// already holds the key. The entry stays in its tier; only its
    /// bookkeeping and value are reset.
    fn refresh_lower_tiers(tiers: &[Box<dyn Tier<K, V> + Send>], key: &K, value: &V) {
        for tier in tiers.iter().skip(1) {
            if tier.contains(key) {
                tier.remove(key);
                tier.put(key.clone(), value.clone());
            }
        }
    }

    /// Snapshot of every tier's contents, in tier order. Performs no
    /// mutation.
    pub fn snapshot(&self) -> Vec<TierSnapshot<K, V>> {
        self.tiers
            .lock()
            .iter()
            .map(|tier| TierSnapshot {
                policy: tier.policy(),
                capacity: tier.capacity(),
                len: tier.len(),
                entries: tier.entries(),
            })
            .collect()
    }

    /// Metric readings for every tier, in tier order.
    pub fn metrics(&self) -> Vec<BTreeMap<String, f64>> {
        self.tiers.lock().iter().map(|tier| tier.metrics()).collect()
    }
}

impl<K, V> Default for TieredCache<K, V>
where
    K: Hash + Eq + Clone + Send + 'static,
    V: Clone + Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for TieredCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tiers = self.tiers.lock();
        let mut list = f.debug_list();
        for tier in tiers.iter() {
            list.entry(&format_args!(
                "{} tier ({}/{})",
                tier.policy(),
                tier.len(),
                tier.capacity()
            ));
        }
        list.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_tier_cache() -> TieredCache<&'static str, &'static str> {
        let cache = TieredCache::new();
        cache.add_tier(3, EvictionPolicy::Lru).unwrap();
        cache.add_tier(2, EvictionPolicy::Lfu).unwrap();
        cache
    }

    #[test]
    fn test_put_requires_a_tier() {
        let cache: TieredCache<&str, &str> = TieredCache::new();
        assert_eq!(cache.put("k", "v"), Err(CacheError::NoTiers));
    }

    #[test]
    fn test_put_lands_in_tier_zero() {
        let cache = two_tier_cache();
        cache.put("a", "value_a").unwrap();
        let snapshot = cache.snapshot();
        assert_eq!(snapshot[0].entries, vec![("a", "value_a")]);
        assert!(snapshot[1].entries.is_empty());
    }

    #[test]
    fn test_get_scans_in_tier_order() {
        let cache = two_tier_cache();
        cache.put("a", "v1").unwrap();
        assert_eq!(cache.get(&"a"), Some("v1"));
        assert_eq!(cache.get(&"missing"), None);
    }

    #[test]
    fn test_hit_in_lower_tier_does_not_seed_faster_tiers() {
        use crate::LfuTier;
        use core::num::NonZeroUsize;

        let cache: TieredCache<&str, &str> = TieredCache::new();
        cache.add_tier(3, EvictionPolicy::Lru).unwrap();
        // Inject a pre-populated tier behind it.
        let warm = LfuTier::new(NonZeroUsize::new(2).unwrap());
        warm.put("deep", "v_deep");
        cache.push_tier(Box::new(warm));

        assert_eq!(cache.get(&"deep"), Some("v_deep"));
        let snapshot = cache.snapshot();
        // The hit was served from tier 1 and tier 0 did not gain the key.
        assert!(snapshot[0].entries.is_empty());
        assert_eq!(snapshot[1].entries, vec![("deep", "v_deep")]);
    }

    #[test]
    fn test_lower_tiers_never_gain_keys_through_put() {
        let cache = two_tier_cache();
        for key in ["a", "b", "c", "d", "e"] {
            cache.put(key, "x").unwrap();
        }
        // Insertions only ever write tier 0; eviction discards rather than
        // demoting, so tier 1 stays empty.
        assert!(cache.snapshot()[1].entries.is_empty());
    }

    #[test]
    fn test_remove_tier_out_of_range() {
        let cache = two_tier_cache();
        assert_eq!(
            cache.remove_tier(2),
            Err(CacheError::TierOutOfRange { index: 2, count: 2 })
        );
        assert!(cache.remove_tier(0).is_ok());
        assert_eq!(cache.tier_count(), 1);
    }

    #[test]
    fn test_add_tier_zero_capacity() {
        let cache: TieredCache<&str, &str> = TieredCache::new();
        assert_eq!(
            cache.add_tier(0, EvictionPolicy::Lru),
            Err(CacheError::ZeroCapacity)
        );
        assert_eq!(cache.tier_count(), 0);
    }

    #[test]
    fn test_init_from_config() {
        let config = TieredCacheConfig {
            tiers: vec![
                TierConfig::new(3, EvictionPolicy::Lru).unwrap(),
                TierConfig::new(2, EvictionPolicy::Lfu).unwrap(),
            ],
        };
        let cache: TieredCache<&str, &str> = TieredCache::init(config);
        assert_eq!(cache.tier_count(), 2);
        let snapshot = cache.snapshot();
        assert_eq!(snapshot[0].policy, EvictionPolicy::Lru);
        assert_eq!(snapshot[1].policy, EvictionPolicy::Lfu);
    }

    #[test]
    fn test_snapshot_reports_capacity_and_len() {
        let cache = two_tier_cache();
        cache.put("a", "v").unwrap();
        let snapshot = cache.snapshot();
        assert_eq!(snapshot[0].capacity.get(), 3);
        assert_eq!(snapshot[0].len, 1);
        assert_eq!(snapshot[1].capacity.get(), 2);
        assert_eq!(snapshot[1].len, 0);
    }

    #[test]
    fn test_metrics_in_tier_order() {
        let cache = two_tier_cache();
        cache.put("a", "v").unwrap();
        cache.get(&"a");
        cache.get(&"absent");
        let metrics = cache.metrics();
        assert_eq!(metrics.len(), 2);
        assert_eq!(metrics[0].get("cache_hits"), Some(&1.0));
        // Tier 1 was probed only by the total miss; the tier-0 hit stopped
        // the scan before reaching it.
        assert_eq!(metrics[1].get("cache_misses"), Some(&1.0));
    }
}
