//! Configuration structures.
//!
//! Each component has its own configuration struct with public fields, so a
//! configuration is just a struct literal — no builders, no hidden defaults.
//!
//! | Config | Component | Description |
//! |--------|-----------|-------------|
//! | `LruTierConfig` | [`LruTier`](crate::LruTier) | Recency tier |
//! | `LfuTierConfig` | [`LfuTier`](crate::LfuTier) | Frequency tier |
//! | `TierConfig` | one tier slot in a hierarchy | Capacity + policy |
//! | `TieredCacheConfig` | [`TieredCache`](crate::TieredCache) | Ordered tier list |
//!
//! Capacities are `NonZeroUsize` throughout: a zero-capacity tier is not a
//! tier, and rejecting it at construction keeps eviction from ever running
//! against an empty store. [`TierConfig::new`] is the validated entry point
//! for capacities arriving as plain integers from a presentation layer.
//!
//! # Examples
//!
//! ```
//! use tiercache_rs::config::{TierConfig, TieredCacheConfig};
//! use tiercache_rs::EvictionPolicy;
//!
//! let config = TieredCacheConfig {
//!     tiers: vec![
//!         TierConfig::new(3, EvictionPolicy::Lru).unwrap(),
//!         TierConfig::new(2, EvictionPolicy::Lfu).unwrap(),
//!     ],
//! };
//! assert_eq!(config.tiers.len(), 2);
//! ```

pub mod lfu;
pub mod lru;
pub mod tiered;

pub use lfu::LfuTierConfig;
pub use lru::LruTierConfig;
pub use tiered::{TierConfig, TieredCacheConfig};
