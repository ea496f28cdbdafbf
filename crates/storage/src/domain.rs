//! Sharded in-memory domain
//!
//! # Design
//!
//! - DashMap: sharded by default, reads only take a shard read lock
//! - FxHash: fast non-crypto hash for short string keys
//! - Size accounting: an atomic running total of key + value bytes, so
//!   quota checks never have to walk the map
//!
//! A domain is the storage unit behind every store. It knows nothing about
//! registration fallbacks or quotas; those live in the stores.

use dashmap::DashMap;
use defaults_core::Value;
use rustc_hash::FxHasher;
use std::hash::BuildHasherDefault;
use std::sync::atomic::{AtomicUsize, Ordering};

type FxBuildHasher = BuildHasherDefault<FxHasher>;

/// Concurrent string-keyed map of stored values
#[derive(Debug, Default)]
pub struct MemoryDomain {
    entries: DashMap<String, Value, FxBuildHasher>,
    /// Sum of `entry_size` over all entries
    total_bytes: AtomicUsize,
}

/// Bytes an entry counts for in `total_bytes`
#[inline]
pub(crate) fn entry_size(key: &str, value: &Value) -> usize {
    key.len() + value.approximate_size()
}

impl MemoryDomain {
    /// Create an empty domain
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a domain with room for `capacity` keys
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: DashMap::with_capacity_and_hasher(capacity, FxBuildHasher::default()),
            total_bytes: AtomicUsize::new(0),
        }
    }

    /// Clone of the value under `key`
    pub fn get(&self, key: &str) -> Option<Value> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    /// Returns `true` if `key` is present
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert or replace; returns the previous value
    pub fn insert(&self, key: &str, value: Value) -> Option<Value> {
        let added = entry_size(key, &value);
        let previous = self.entries.insert(key.to_string(), value);
        self.total_bytes.fetch_add(added, Ordering::AcqRel);
        if let Some(old) = &previous {
            self.total_bytes
                .fetch_sub(entry_size(key, old), Ordering::AcqRel);
        }
        previous
    }

    /// Remove `key`; returns the removed value
    pub fn remove(&self, key: &str) -> Option<Value> {
        let (key, value) = self.entries.remove(key)?;
        self.total_bytes
            .fetch_sub(entry_size(&key, &value), Ordering::AcqRel);
        Some(value)
    }

    /// Snapshot of the keys, unordered
    pub fn keys(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.key().clone()).collect()
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the domain holds no keys
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total bytes accounted to keys and values
    pub fn total_bytes(&self) -> usize {
        self.total_bytes.load(Ordering::Acquire)
    }

    /// Size the entry under `key` currently accounts for (0 if absent)
    pub fn size_of(&self, key: &str) -> usize {
        self.entries
            .get(key)
            .map(|entry| entry_size(entry.key(), entry.value()))
            .unwrap_or(0)
    }
}
