//! Configuration for the recency (LRU) tier.

use core::fmt;
use core::num::NonZeroUsize;

/// Configuration for an [`LruTier`](crate::LruTier).
///
/// The tier evicts its least recently accessed entry when a new key arrives
/// at capacity. Capacity is an entry count, fixed for the tier's lifetime.
///
/// # Examples
///
/// ```
/// use tiercache_rs::config::LruTierConfig;
/// use tiercache_rs::LruTier;
/// use core::num::NonZeroUsize;
///
/// let config = LruTierConfig {
///     capacity: NonZeroUsize::new(1000).unwrap(),
/// };
/// let tier: LruTier<String, i32> = LruTier::init(config, None);
/// ```
#[derive(Clone, Copy)]
pub struct LruTierConfig {
    /// Maximum number of key-value pairs the tier can hold.
    pub capacity: NonZeroUsize,
}

impl LruTierConfig {
    /// Creates a configuration with the given capacity.
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self { capacity }
    }
}

impl fmt::Debug for LruTierConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruTierConfig")
            .field("capacity", &self.capacity)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lru_config_creation() {
        let config = LruTierConfig::new(NonZeroUsize::new(100).unwrap());
        assert_eq!(config.capacity.get(), 100);
    }
}
