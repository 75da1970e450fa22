//! Frequency (LFU) tier implementation.
//!
//! The frequency tier tracks an access count per entry and evicts the entry
//! with the lowest count when a new key arrives at capacity. Entries are
//! held in original insertion order, and that order is the eviction
//! tie-break: among entries tied on the minimum count, the earliest-inserted
//! one goes. Updates never move an entry in the order; only eviction or
//! removal ends a position, and re-insertion starts a fresh one at the back.
//!
//! Two properties of the write path are deliberate and load-bearing:
//!
//! - Only reads raise the counter. Every successful write — including an
//!   overwrite of an existing key — leaves the key's count at exactly 1.
//!   A key kept alive by writes alone therefore competes for eviction as if
//!   it were cold. The tier's `frequency_resets` metric counts how often an
//!   existing key's count was pinned back.
//! - Eviction scans the insertion order for the minimum count, which makes
//!   the tie-break exact rather than approximate. The scan is O(n) in the
//!   tier's length; tiers are small by construction.
//!
//! # Thread safety
//!
//! [`LfuTier`] guards its segment with a `parking_lot::Mutex`; the same
//! standalone-versus-hierarchy locking notes as [`LruTier`](crate::LruTier)
//! apply.

use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::num::NonZeroUsize;
use std::collections::BTreeMap;

use parking_lot::Mutex;

use crate::config::LfuTierConfig;
use crate::entry::TierEntry;
use crate::list::{NodeRef, OrderList};
use crate::meta::FrequencyMeta;
use crate::metrics::{LfuTierMetrics, TierMetrics};
use crate::tier::{EvictionPolicy, Tier};

#[cfg(feature = "hashbrown")]
use hashbrown::hash_map::DefaultHashBuilder;
#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

/// Internal LFU segment containing the actual algorithm.
///
/// Single-threaded; [`LfuTier`] owns one behind its lock. The order list is
/// insertion order and is never reordered in place.
pub(crate) struct LfuSegment<K, V, S = DefaultHashBuilder> {
    config: LfuTierConfig,
    list: OrderList<TierEntry<K, V, FrequencyMeta>>,
    map: HashMap<K, NodeRef, S>,
    metrics: LfuTierMetrics,
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> LfuSegment<K, V, S> {
    pub(crate) fn with_hasher(config: LfuTierConfig, hash_builder: S) -> Self {
        let cap = config.capacity.get();
        LfuSegment {
            config,
            list: OrderList::with_capacity(cap),
            map: HashMap::with_capacity_and_hasher(cap.next_power_of_two(), hash_builder),
            metrics: LfuTierMetrics::new(),
        }
    }

    #[inline]
    pub(crate) fn cap(&self) -> NonZeroUsize {
        self.config.capacity
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    #[inline]
    pub(crate) fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    #[inline]
    pub(crate) fn metrics(&self) -> &LfuTierMetrics {
        &self.metrics
    }

    pub(crate) fn get(&mut self, key: &K) -> Option<&V> {
        let node = self.map.get(key).copied()?;
        self.metrics.core.record_hit();
        let entry = self.list.get_mut(node)?;
        entry.metadata.increment();
        Some(&entry.value)
    }

    pub(crate) fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(&node) = self.map.get(&key) {
            // Overwrite in place; the entry keeps its insertion-order
            // position, and its count is pinned back to 1.
            if let Some(entry) = self.list.get_mut(node) {
                entry.value = value;
                entry.metadata.pin();
            }
            self.metrics.core.record_insertion();
            self.metrics.record_frequency_reset();
            return None;
        }

        let mut evicted = None;
        if self.map.len() >= self.config.capacity.get() {
            evicted = self.evict_least_frequent();
        }

        let node = self
            .list
            .push_back(TierEntry::with_metadata(key.clone(), value, FrequencyMeta::new(1)));
        self.map.insert(key, node);
        self.metrics.core.record_insertion();
        evicted
    }

    /// Removes the entry with the minimum access count; among ties, the
    /// earliest-inserted one (first encountered in insertion order).
    fn evict_least_frequent(&mut self) -> Option<(K, V)> {
        let mut victim: Option<(NodeRef, u64)> = None;
        for (node, entry) in self.list.iter_with_refs() {
            match victim {
                Some((_, min)) if entry.metadata.count >= min => {}
                _ => victim = Some((node, entry.metadata.count)),
            }
        }
        let (node, _) = victim?;
        let entry = self.list.remove(node)?;
        self.map.remove(&entry.key);
        self.metrics.core.record_eviction();
        Some(entry.into_pair())
    }

    pub(crate) fn remove(&mut self, key: &K) -> Option<V> {
        let node = self.map.remove(key)?;
        self.list.remove(node).map(|entry| entry.value)
    }

    pub(crate) fn record_miss(&mut self) {
        self.metrics.core.record_miss();
    }

    pub(crate) fn clear(&mut self) {
        self.map.clear();
        self.list.clear();
    }
}

impl<K: Clone, V: Clone, S> LfuSegment<K, V, S> {
    /// Contents in original insertion order.
    pub(crate) fn entries(&self) -> Vec<(K, V)> {
        self.list
            .iter()
            .map(|entry| (entry.key.clone(), entry.value.clone()))
            .collect()
    }
}

impl<K, V, S> fmt::Debug for LfuSegment<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LfuSegment")
            .field("capacity", &self.config.capacity)
            .field("len", &self.map.len())
            .finish()
    }
}

/// A frequency (Least Frequently Used) tier.
///
/// The tier counts reads per entry and evicts the entry with the lowest
/// count when a new key arrives at capacity, resolving ties toward the
/// earliest-inserted entry. Every successful write leaves the written key's
/// count at exactly 1; only reads raise it.
///
/// # Examples
///
/// ```
/// use tiercache_rs::LfuTier;
/// use tiercache_rs::tier::Tier;
/// use core::num::NonZeroUsize;
///
/// let tier = LfuTier::new(NonZeroUsize::new(2).unwrap());
/// tier.put("rare", 1);
/// tier.put("popular", 2);
///
/// // Raise "popular"'s count.
/// for _ in 0..10 {
///     tier.get(&"popular");
/// }
///
/// // "rare" has the lower count and is evicted.
/// assert_eq!(tier.put("new", 3), Some(("rare", 1)));
/// assert_eq!(tier.get(&"popular"), Some(2));
/// ```
#[derive(Debug)]
pub struct LfuTier<K, V, S = DefaultHashBuilder> {
    segment: Mutex<LfuSegment<K, V, S>>,
}

impl<K: Hash + Eq + Clone, V: Clone> LfuTier<K, V> {
    /// Creates a frequency tier with the given capacity.
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self::init(LfuTierConfig::new(capacity), None)
    }

    /// Creates a frequency tier from a configuration, with an optional hasher.
    pub fn init(config: LfuTierConfig, hasher: Option<DefaultHashBuilder>) -> Self {
        Self {
            segment: Mutex::new(LfuSegment::with_hasher(config, hasher.unwrap_or_default())),
        }
    }
}

impl<K: Hash + Eq + Clone, V: Clone, S: BuildHasher> LfuTier<K, V, S> {
    /// Creates a frequency tier with a custom hash builder.
    pub fn with_hasher(config: LfuTierConfig, hash_builder: S) -> Self {
        Self {
            segment: Mutex::new(LfuSegment::with_hasher(config, hash_builder)),
        }
    }

    /// Removes every entry. Capacity is unchanged.
    pub fn clear(&self) {
        self.segment.lock().clear();
    }
}

impl<K: Hash + Eq + Clone, V: Clone, S: BuildHasher> Tier<K, V> for LfuTier<K, V, S> {
    fn policy(&self) -> EvictionPolicy {
        EvictionPolicy::Lfu
    }

    fn capacity(&self) -> NonZeroUsize {
        self.segment.lock().cap()
    }

    fn len(&self) -> usize {
        self.segment.lock().len()
    }

    fn is_empty(&self) -> bool {
        self.segment.lock().is_empty()
    }

    fn contains(&self, key: &K) -> bool {
        self.segment.lock().contains(key)
    }

    fn get(&self, key: &K) -> Option<V> {
        self.segment.lock().get(key).cloned()
    }

    fn put(&self, key: K, value: V) -> Option<(K, V)> {
        self.segment.lock().put(key, value)
    }

    fn remove(&self, key: &K) -> Option<V> {
        self.segment.lock().remove(key)
    }

    fn entries(&self) -> Vec<(K, V)> {
        self.segment.lock().entries()
    }

    fn record_miss(&self) {
        self.segment.lock().record_miss();
    }

    fn metrics(&self) -> BTreeMap<String, f64> {
        self.segment.lock().metrics().metrics()
    }
}
