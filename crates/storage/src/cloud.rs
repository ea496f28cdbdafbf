//! CloudStore: cloud-synchronized mirror
//!
//! ## Quotas
//!
//! Cloud key-value storage is small and bounded. Every write is checked
//! against a `CloudQuota`:
//! - key length in UTF-8 bytes
//! - number of keys
//! - total bytes of keys and values
//!
//! A write that would break a limit is dropped: the previous value (if any)
//! stays, the violation is logged at `warn` and counted. `try_set` reports
//! the violation to callers that want to know.
//!
//! Quota checks and the write they guard run under one lock so concurrent
//! writers cannot jointly overshoot the total. Reads do not take it.

use crate::domain::{entry_size, MemoryDomain};
use defaults_core::{DefaultsStore, Value};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;
use tracing::{debug, warn};

/// Limits enforced by a `CloudStore`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloudQuota {
    /// Maximum number of keys
    pub max_keys: usize,
    /// Maximum key length in UTF-8 bytes
    pub max_key_bytes: usize,
    /// Maximum total bytes of keys and values
    pub max_total_bytes: usize,
}

impl CloudQuota {
    /// No limits
    pub const UNLIMITED: CloudQuota = CloudQuota {
        max_keys: usize::MAX,
        max_key_bytes: usize::MAX,
        max_total_bytes: usize::MAX,
    };
}

impl Default for CloudQuota {
    fn default() -> Self {
        Self {
            max_keys: 1024,
            max_key_bytes: 64,
            max_total_bytes: 1024 * 1024,
        }
    }
}

/// Why a cloud write was dropped
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuotaViolation {
    /// Key is longer than `max_key_bytes`
    #[error("key is {length} bytes (max {max})")]
    KeyTooLong {
        /// Key length in bytes
        length: usize,
        /// Limit
        max: usize,
    },
    /// Store already holds `max_keys` keys
    #[error("store holds {max} keys (max {max})")]
    TooManyKeys {
        /// Limit
        max: usize,
    },
    /// Write would push the total past `max_total_bytes`
    #[error("write would use {required} bytes (max {max})")]
    TotalSizeExceeded {
        /// Total after the write
        required: usize,
        /// Limit
        max: usize,
    },
}

/// Cloud-synchronized key-value mirror
#[derive(Debug, Default)]
pub struct CloudStore {
    domain: MemoryDomain,
    quota: CloudQuota,
    write_lock: Mutex<()>,
    violations: AtomicU64,
}

impl CloudStore {
    /// Create an empty store with the default quota
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with a custom quota
    pub fn with_quota(quota: CloudQuota) -> Self {
        Self {
            quota,
            ..Self::default()
        }
    }

    /// Quota in force
    pub fn quota(&self) -> CloudQuota {
        self.quota
    }

    /// Number of writes dropped so far
    pub fn quota_violations(&self) -> u64 {
        self.violations.load(Ordering::Relaxed)
    }

    /// Total bytes currently used
    pub fn used_bytes(&self) -> usize {
        self.domain.total_bytes()
    }

    /// Store `value` unless it breaks the quota
    ///
    /// # Errors
    ///
    /// Returns the violated limit; the store is left unchanged.
    pub fn try_set(&self, key: &str, value: Value) -> Result<(), QuotaViolation> {
        let _guard = self.write_lock.lock();

        if key.len() > self.quota.max_key_bytes {
            return Err(QuotaViolation::KeyTooLong {
                length: key.len(),
                max: self.quota.max_key_bytes,
            });
        }

        let existing = self.domain.size_of(key);
        if !self.domain.contains(key) && self.domain.len() >= self.quota.max_keys {
            return Err(QuotaViolation::TooManyKeys {
                max: self.quota.max_keys,
            });
        }

        let required = self.domain.total_bytes() - existing + entry_size(key, &value);
        if required > self.quota.max_total_bytes {
            return Err(QuotaViolation::TotalSizeExceeded {
                required,
                max: self.quota.max_total_bytes,
            });
        }

        self.domain.insert(key, value);
        Ok(())
    }
}

impl DefaultsStore for CloudStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.domain.get(key)
    }

    fn set(&self, key: &str, value: Value) {
        if let Err(violation) = self.try_set(key, value) {
            self.violations.fetch_add(1, Ordering::Relaxed);
            warn!(key, %violation, "dropped cloud write over quota");
        }
    }

    fn remove(&self, key: &str) {
        let _guard = self.write_lock.lock();
        if self.domain.remove(key).is_some() {
            debug!(key, "removed cloud value");
        }
    }

    fn keys(&self) -> Vec<String> {
        self.domain.keys()
    }
}
