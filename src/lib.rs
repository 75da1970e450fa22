#![doc = include_str!("../README.md")]
//!
//! ---
//!
//! # Code Reference
//!
//! ## Quick Reference
//!
//! | Type | Description | Role |
//! |------|-------------|------|
//! | [`TieredCache`] | Ordered hierarchy of tiers | Orchestrator: lookup, insertion, refresh |
//! | [`LruTier`] | Least Recently Used tier | Recency-based eviction |
//! | [`LfuTier`] | Least Frequently Used tier | Frequency-based eviction |
//! | [`Tier`](tier::Tier) | Tier contract | Seam for further policies |
//!
//! ## Hierarchy Semantics
//!
//! ```text
//! get(k) ──▶ tier 0 ──miss──▶ tier 1 ──miss──▶ tier 2 ──▶ ... ──▶ None
//!               │                │
//!              hit              hit
//!               │                │
//!               ▼                ▼
//!            return        refresh pass over tiers 1.. that hold k,
//!                           then return (tiers 0..k stay untouched)
//!
//! put(k, v) ──▶ tier 0 (always), then refresh pass over tiers 1..
//! ```
//!
//! Residency is not exclusive: a key can live in several tiers at once, and
//! lookup priority — not relocation — is what "tiered" means here. See
//! [`tiered`] for the full semantics.
//!
//! ## Choosing a Tier Policy
//!
//! | Policy | Evicts | Best for |
//! |--------|--------|----------|
//! | [`LruTier`] | Least recently accessed entry | Temporal locality |
//! | [`LfuTier`] | Lowest access count (earliest-inserted on ties) | Stable popularity |
//!
//! ## Example
//!
//! ```rust
//! use tiercache_rs::{EvictionPolicy, TieredCache};
//!
//! let cache: TieredCache<String, String> = TieredCache::new();
//! cache.add_tier(3, EvictionPolicy::Lru).unwrap();
//! cache.add_tier(2, EvictionPolicy::Lfu).unwrap();
//!
//! cache.put("a".into(), "value_a".into()).unwrap();
//! cache.put("b".into(), "value_b".into()).unwrap();
//!
//! assert_eq!(cache.get(&"a".to_string()), Some("value_a".to_string()));
//!
//! // Inspect per-tier contents without mutating anything.
//! for (index, tier) in cache.snapshot().iter().enumerate() {
//!     println!("L{} [{}]: {:?}", index + 1, tier.policy, tier.entries);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`tiered`]: the tiered hierarchy orchestrator
//! - [`lru`]: recency (LRU) tier implementation
//! - [`lfu`]: frequency (LFU) tier implementation
//! - [`tier`]: the tier contract and eviction-policy selector
//! - [`config`]: configuration structures for all components
//! - [`metrics`]: per-tier metrics collection
//! - [`error`]: the error taxonomy

/// Tier entry type.
///
/// Provides the generic `TierEntry<K, V, M>` structure that holds a key, a
/// value, and policy-private metadata.
pub mod entry;

/// Policy-specific metadata types.
pub mod meta;

/// Order-maintaining list used by the tier implementations.
///
/// Internal infrastructure; use the tier types instead.
pub(crate) mod list;

/// Error taxonomy for configuration and use of the hierarchy.
pub mod error;

/// The tier contract and eviction-policy selector.
pub mod tier;

/// Configuration structures.
pub mod config;

/// Recency (Least Recently Used) tier implementation.
///
/// Provides a fixed-capacity tier that evicts the least recently used entry
/// when a new key arrives at capacity.
pub mod lru;

/// Frequency (Least Frequently Used) tier implementation.
///
/// Provides a fixed-capacity tier that evicts the entry with the lowest
/// access count, resolving ties toward the earliest-inserted entry.
pub mod lfu;

/// The tiered hierarchy orchestrator.
///
/// Composes tiers into an ordered hierarchy with cross-tier lookup,
/// insertion, and the refresh pass, behind a single coarse lock.
pub mod tiered;

/// Per-tier metrics collection and reporting.
pub mod metrics;

// Re-export the main types
pub use error::{CacheError, CacheResult};
pub use lfu::LfuTier;
pub use lru::LruTier;
pub use tier::{EvictionPolicy, Tier};
pub use tiered::{TierSnapshot, TieredCache};

// Re-export entry and metadata types
pub use entry::TierEntry;
pub use meta::FrequencyMeta;
