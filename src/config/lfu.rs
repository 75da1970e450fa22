//! Configuration for the frequency (LFU) tier.

use core::fmt;
use core::num::NonZeroUsize;

/// Configuration for an [`LfuTier`](crate::LfuTier).
///
/// The tier evicts the entry with the lowest access count when a new key
/// arrives at capacity; ties go to the earliest-inserted entry among the
/// tied. Capacity is an entry count, fixed for the tier's lifetime.
///
/// # Examples
///
/// ```
/// use tiercache_rs::config::LfuTierConfig;
/// use tiercache_rs::LfuTier;
/// use core::num::NonZeroUsize;
///
/// let config = LfuTierConfig {
///     capacity: NonZeroUsize::new(500).unwrap(),
/// };
/// let tier: LfuTier<String, i32> = LfuTier::init(config, None);
/// ```
#[derive(Clone, Copy)]
pub struct LfuTierConfig {
    /// Maximum number of key-value pairs the tier can hold.
    pub capacity: NonZeroUsize,
}

impl LfuTierConfig {
    /// Creates a configuration with the given capacity.
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self { capacity }
    }
}

impl fmt::Debug for LfuTierConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LfuTierConfig")
            .field("capacity", &self.capacity)
            .finish()
    }
}
