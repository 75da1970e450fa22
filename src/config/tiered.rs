//! Configuration for the tiered cache hierarchy.

use core::fmt;
use core::num::NonZeroUsize;

use crate::error::{CacheError, CacheResult};
use crate::tier::EvictionPolicy;

/// Configuration for one tier slot in a hierarchy: how many entries it holds
/// and which policy evicts them.
///
/// Use [`TierConfig::new`] when the capacity arrives as a plain integer (for
/// example from user input); it rejects zero. Construct the struct directly
/// when the capacity is already a `NonZeroUsize`.
#[derive(Clone, Copy)]
pub struct TierConfig {
    /// Maximum number of key-value pairs the tier can hold.
    pub capacity: NonZeroUsize,
    /// The eviction policy governing the tier.
    pub policy: EvictionPolicy,
}

impl TierConfig {
    /// Validates `capacity` and builds a tier configuration.
    ///
    /// # Errors
    ///
    /// [`CacheError::ZeroCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize, policy: EvictionPolicy) -> CacheResult<Self> {
        let capacity = NonZeroUsize::new(capacity).ok_or(CacheError::ZeroCapacity)?;
        Ok(Self { capacity, policy })
    }
}

impl fmt::Debug for TierConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TierConfig")
            .field("capacity", &self.capacity)
            .field("policy", &self.policy)
            .finish()
    }
}

/// Configuration for a whole [`TieredCache`](crate::TieredCache).
///
/// Tier order is lookup order: index 0 is the fastest, highest-priority
/// tier. An empty list is valid configuration — tiers can also be added one
/// by one after construction — but insertions against an empty hierarchy
/// fail.
///
/// # Examples
///
/// ```
/// use tiercache_rs::config::{TierConfig, TieredCacheConfig};
/// use tiercache_rs::{EvictionPolicy, TieredCache};
///
/// let config = TieredCacheConfig {
///     tiers: vec![
///         TierConfig::new(3, EvictionPolicy::Lru).unwrap(),
///         TierConfig::new(2, EvictionPolicy::Lfu).unwrap(),
///     ],
/// };
/// let cache: TieredCache<String, String> = TieredCache::init(config);
/// assert_eq!(cache.tier_count(), 2);
/// ```
#[derive(Clone, Default)]
pub struct TieredCacheConfig {
    /// Tier configurations in lookup order (fastest first).
    pub tiers: Vec<TierConfig>,
}

impl fmt::Debug for TieredCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TieredCacheConfig")
            .field("tiers", &self.tiers)
            .finish()
    }
}
