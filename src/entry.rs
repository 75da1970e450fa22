//! Tier entry type.
//!
//! Provides a generic `TierEntry<K, V, M>` structure shared by the tier
//! implementations. The `M` parameter carries policy-private metadata so
//! each policy can track its own bookkeeping without affecting the core
//! entry shape: the recency tier uses `()` (its bookkeeping is the entry's
//! position in the order list), the frequency tier uses
//! [`FrequencyMeta`](crate::meta::FrequencyMeta).
//!
//! An entry is owned exclusively by the tier currently holding it. It is
//! created by an insertion into that tier, has its metadata mutated only by
//! that tier's own operations, and is dropped by that tier's eviction, by an
//! explicit remove, or by the hierarchy's remove-then-reinsert refresh.

use core::fmt;

/// A single cached key/value pair plus policy-private metadata.
///
/// # Examples
///
/// ```
/// use tiercache_rs::entry::TierEntry;
///
/// let entry: TierEntry<&str, i32> = TierEntry::new("key", 42);
/// assert_eq!(entry.key, "key");
/// assert_eq!(entry.value, 42);
/// ```
pub struct TierEntry<K, V, M = ()> {
    /// The cached key.
    pub key: K,

    /// The cached value.
    pub value: V,

    /// Policy-private bookkeeping. `()` for policies whose bookkeeping is
    /// positional (recency).
    pub metadata: M,
}

impl<K, V> TierEntry<K, V> {
    /// Creates an entry without policy metadata.
    #[inline]
    pub fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            metadata: (),
        }
    }
}

impl<K, V, M> TierEntry<K, V, M> {
    /// Creates an entry carrying policy metadata.
    ///
    /// # Examples
    ///
    /// ```
    /// use tiercache_rs::entry::TierEntry;
    /// use tiercache_rs::meta::FrequencyMeta;
    ///
    /// let entry = TierEntry::with_metadata("key", "value", FrequencyMeta::new(1));
    /// assert_eq!(entry.metadata.count, 1);
    /// ```
    #[inline]
    pub fn with_metadata(key: K, value: V, metadata: M) -> Self {
        Self {
            key,
            value,
            metadata,
        }
    }

    /// Splits the entry back into its key/value pair, dropping the metadata.
    #[inline]
    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K: Clone, V: Clone, M: Clone> Clone for TierEntry<K, V, M> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            value: self.value.clone(),
            metadata: self.metadata.clone(),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug, M: fmt::Debug> fmt::Debug for TierEntry<K, V, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TierEntry")
            .field("key", &self.key)
            .field("value", &self.value)
            .field("metadata", &self.metadata)
            .finish()
    }
}
