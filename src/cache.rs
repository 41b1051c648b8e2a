//! Key/value cache used by the translation provider
//!
//! The provider stores resolved translations behind the [`Cache`] trait so the
//! storage can be swapped out. [`InMemoryCache`] is the default implementation:
//! a sharded concurrent map whose entries may carry a time-to-live.
//!
//! Expiration is checked lazily on every read, so an expired entry is never
//! returned even if [`InMemoryCache::purge_expired`] has not run.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::hash::Hash;
use std::time::{Duration, Instant};

/// Generic key/value store with optional per-entry expiration
pub trait Cache<K, V>: Send + Sync {
    /// Look up a live entry. Unknown and expired keys are a miss, never an error.
    fn get(&self, key: &K) -> Option<V>;

    /// Insert or overwrite an entry
    fn set(&self, key: K, value: V, expire: Option<Duration>);

    /// Insert the entry only if no live entry exists for the key
    ///
    /// Returns `true` if the value was stored. The check and the insert happen
    /// atomically per key: of several concurrent writers exactly one wins.
    fn set_if_absent(&self, key: K, value: V, expire: Option<Duration>) -> bool;

    fn remove(&self, key: &K);

    fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }
}

#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    expires_at: Option<Instant>,
}

impl<V> CacheEntry<V> {
    /// A time-to-live past the representable range never expires
    fn new(value: V, expire: Option<Duration>) -> Self {
        Self {
            value,
            expires_at: expire.and_then(|ttl| Instant::now().checked_add(ttl)),
        }
    }

    fn is_expired(&self) -> bool {
        self.expires_at
            .map(|deadline| Instant::now() >= deadline)
            .unwrap_or(false)
    }
}

/// In-process cache backed by a [`DashMap`]
#[derive(Debug)]
pub struct InMemoryCache<K, V>
where
    K: Eq + Hash,
{
    entries: DashMap<K, CacheEntry<V>>,
}

impl<K, V> InMemoryCache<K, V>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Number of live entries
    pub fn len(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| !entry.value().is_expired())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every expired entry, returning how many were removed
    pub fn purge_expired(&self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        before.saturating_sub(self.entries.len())
    }
}

impl<K, V> Default for InMemoryCache<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Cache<K, V> for InMemoryCache<K, V>
where
    K: Eq + Hash + Send + Sync,
    V: Clone + Send + Sync,
{
    fn get(&self, key: &K) -> Option<V> {
        // The read guard must be released before removing from the same shard.
        match self.entries.get(key) {
            Some(entry) if !entry.is_expired() => return Some(entry.value.clone()),
            Some(_) => {}
            None => return None,
        }
        self.entries.remove_if(key, |_, entry| entry.is_expired());
        None
    }

    fn set(&self, key: K, value: V, expire: Option<Duration>) {
        self.entries.insert(key, CacheEntry::new(value, expire));
    }

    fn set_if_absent(&self, key: K, value: V, expire: Option<Duration>) -> bool {
        match self.entries.entry(key) {
            Entry::Occupied(mut occupied) => {
                if occupied.get().is_expired() {
                    occupied.insert(CacheEntry::new(value, expire));
                    true
                } else {
                    false
                }
            }
            Entry::Vacant(vacant) => {
                vacant.insert(CacheEntry::new(value, expire));
                true
            }
        }
    }

    fn remove(&self, key: &K) {
        self.entries.remove(key);
    }
}
