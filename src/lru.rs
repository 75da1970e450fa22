//! Recency (LRU) tier implementation.
//!
//! The recency tier keeps entries ordered by access recency, most recent at
//! the back of its order list, and evicts the single front (least recently
//! used) entry when a new key arrives at capacity. All operations are O(1).
//!
//! # Algorithm
//!
//! A hash map resolves keys to list nodes; the list carries the entries.
//! A hit relinks the node at the back; eviction pops the front. The
//! eviction tie-break is strict order — there is exactly one front element.
//!
//! # Thread safety
//!
//! [`LruTier`] guards its segment with a `parking_lot::Mutex`, so a tier is
//! safe to share standalone. Inside a [`TieredCache`](crate::TieredCache)
//! this lock is never contended: the hierarchy's own lock has already
//! serialized every caller before any tier method runs.

use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::num::NonZeroUsize;
use std::collections::BTreeMap;

use parking_lot::Mutex;

use crate::config::LruTierConfig;
use crate::entry::TierEntry;
use crate::list::{NodeRef, OrderList};
use crate::metrics::{LruTierMetrics, TierMetrics};
use crate::tier::{EvictionPolicy, Tier};

#[cfg(feature = "hashbrown")]
use hashbrown::hash_map::DefaultHashBuilder;
#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

/// Internal LRU segment containing the actual algorithm.
///
/// Single-threaded; [`LruTier`] owns one behind its lock. The map stores
/// list handles, which stay valid until the node they name is removed.
pub(crate) struct LruSegment<K, V, S = DefaultHashBuilder> {
    config: LruTierConfig,
    list: OrderList<TierEntry<K, V>>,
    map: HashMap<K, NodeRef, S>,
    metrics: LruTierMetrics,
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> LruSegment<K, V, S> {
    pub(crate) fn with_hasher(config: LruTierConfig, hash_builder: S) -> Self {
        let cap = config.capacity.get();
        LruSegment {
            config,
            list: OrderList::with_capacity(cap),
            map: HashMap::with_capacity_and_hasher(cap.next_power_of_two(), hash_builder),
            metrics: LruTierMetrics::new(),
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
    pub(crate) fn metrics(&self) -> &LruTierMetrics {
        &self.metrics
    }

    pub(crate) fn get(&mut self, key: &K) -> Option<&V> {
        let node = self.map.get(key).copied()?;
        self.list.move_to_back(node);
        self.metrics.core.record_hit();
        self.list.get(node).map(|entry| &entry.value)
    }

    pub(crate) fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(&node) = self.map.get(&key) {
            // Existing key: refresh recency, then write the value.
            self.list.move_to_back(node);
            if let Some(entry) = self.list.get_mut(node) {
                entry.value = value;
            }
            self.metrics.core.record_insertion();
            return None;
        }

        let mut evicted = None;
        if self.map.len() >= self.config.capacity.get() {
            if let Some(entry) = self.list.pop_front() {
                self.map.remove(&entry.key);
                self.metrics.core.record_eviction();
                evicted = Some(entry.into_pair());
            }
        }

        let node = self.list.push_back(TierEntry::new(key.clone(), value));
        self.map.insert(key, node);
        self.metrics.core.record_insertion();
        evicted
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

impl<K: Clone, V: Clone, S> LruSegment<K, V, S> {
    /// Contents from least to most recently used.
    pub(crate) fn entries(&self) -> Vec<(K, V)> {
        self.list
            .iter()
            .map(|entry| (entry.key.clone(), entry.value.clone()))
            .collect()
    }
}

impl<K, V, S> fmt::Debug for LruSegment<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruSegment")
            .field("capacity", &self.config.capacity)
            .field("len", &self.map.len())
            .finish()
    }
}

/// A recency (Least Recently Used) tier.
///
/// The tier has a fixed capacity and evicts its least recently used entry
/// when a new key arrives at capacity. Reads and writes both refresh an
/// entry's recency.
///
/// # Examples
///
/// ```
/// use tiercache_rs::LruTier;
/// use tiercache_rs::tier::Tier;
/// use core::num::NonZeroUsize;
///
/// let tier = LruTier::new(NonZeroUsize::new(2).unwrap());
/// tier.put("apple", 1);
/// tier.put("banana", 2);
///
/// // Accessing "apple" refreshes its recency.
/// assert_eq!(tier.get(&"apple"), Some(1));
///
/// // A third key evicts the least recently used entry.
/// tier.put("cherry", 3);
/// assert_eq!(tier.get(&"banana"), None);
/// assert_eq!(tier.get(&"apple"), Some(1));
/// ```
#[derive(Debug)]
pub struct LruTier<K, V, S = DefaultHashBuilder> {
    segment: Mutex<LruSegment<K, V, S>>,
}

impl<K: Hash + Eq + Clone, V: Clone> LruTier<K, V> {
    /// Creates a recency tier with the given capacity.
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self::init(LruTierConfig::new(capacity), None)
    }

    /// Creates a recency tier from a configuration, with an optional hasher.
    pub fn init(config: LruTierConfig, hasher: Option<DefaultHashBuilder>) -> Self {
        Self {
            segment: Mutex::new(LruSegment::with_hasher(config, hasher.unwrap_or_default())),
        }
    }
}

impl<K: Hash + Eq + Clone, V: Clone, S: BuildHasher> LruTier<K, V, S> {
    /// Creates a recency tier with a custom hash builder.
    pub fn with_hasher(config: LruTierConfig, hash_builder: S) -> Self {
        Self {
            segment: Mutex::new(LruSegment::with_hasher(config, hash_builder)),
        }
    }

    /// Removes every entry. Capacity is unchanged.
    pub fn clear(&self) {
        self.segment.lock().clear();
    }
}

impl<K: Hash + Eq + Clone, V: Clone, S: BuildHasher> Tier<K, V> for LruTier<K, V, S> {
    fn policy(&self) -> EvictionPolicy {
        EvictionPolicy::Lru
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
