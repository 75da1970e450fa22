//! Error types for hierarchy configuration and use.
//!
//! Every fallible operation in this crate fails synchronously and atomically:
//! either the whole operation happened or none of it did, so there is never
//! partial state to roll back. Callers are expected to surface these errors
//! to whatever presentation layer sits on top of the engine.

use thiserror::Error;

/// Errors returned by [`TieredCache`](crate::TieredCache) operations and by
/// tier configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// An eviction-policy name did not match any supported policy.
    #[error("unsupported eviction policy: {0:?}")]
    UnknownPolicy(String),

    /// A tier was configured with a capacity of zero. Capacity must be a
    /// positive entry count; a zero-capacity tier would be asked to evict
    /// from an empty store on its first insertion.
    #[error("tier capacity must be greater than zero")]
    ZeroCapacity,

    /// A tier index was outside the current hierarchy bounds.
    #[error("tier index {index} out of range for hierarchy of {count} tiers")]
    TierOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of tiers in the hierarchy at the time of the call.
        count: usize,
    },

    /// An insertion was attempted against a hierarchy with no tiers.
    #[error("cannot insert into a hierarchy with no tiers")]
    NoTiers,
}

/// Convenience alias for results carrying a [`CacheError`].
pub type CacheResult<T> = Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            CacheError::UnknownPolicy("FIFO".into()).to_string(),
            "unsupported eviction policy: \"FIFO\""
        );
        assert_eq!(
            CacheError::TierOutOfRange { index: 3, count: 2 }.to_string(),
            "tier index 3 out of range for hierarchy of 2 tiers"
        );
        assert_eq!(
            CacheError::NoTiers.to_string(),
            "cannot insert into a hierarchy with no tiers"
        );
    }
}
