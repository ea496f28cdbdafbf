//! LocalStore: local preferences store
//!
//! ## Domains
//!
//! A local store has two layers:
//! - the persistent domain, which every write, remove and clear touches
//! - the registration domain, app-supplied fallbacks installed with
//!   `register_defaults`
//!
//! Reads look in the persistent domain first and fall back to the
//! registration domain. Registered values are never written into the
//! persistent domain, are not reported by `keys()`, and survive `clear()`.

use crate::domain::MemoryDomain;
use defaults_core::{DefaultsStore, Value};
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::debug;

/// Local preferences store
///
/// # Example
///
/// ```
/// use defaults_core::{DefaultsStore, Value};
/// use defaults_storage::LocalStore;
///
/// let store = LocalStore::new();
/// store.register_defaults([("volume".to_string(), Value::from(7i64))]);
/// assert_eq!(store.integer("volume"), 7);
///
/// store.set_integer("volume", 3);
/// assert_eq!(store.integer("volume"), 3);
///
/// store.clear();
/// assert_eq!(store.integer("volume"), 7);
/// ```
#[derive(Debug, Default)]
pub struct LocalStore {
    persistent: MemoryDomain,
    registered: RwLock<HashMap<String, Value>>,
}

impl LocalStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Install fallback values, replacing earlier registrations of the same keys
    pub fn register_defaults(&self, defaults: impl IntoIterator<Item = (String, Value)>) {
        let mut registered = self.registered.write();
        let before = registered.len();
        registered.extend(defaults);
        debug!(
            added = registered.len() - before,
            total = registered.len(),
            "registered local defaults"
        );
    }

    /// Copy of the registration domain
    pub fn registered_defaults(&self) -> HashMap<String, Value> {
        self.registered.read().clone()
    }

    /// Value in the persistent domain only, ignoring registrations
    pub fn persistent_value(&self, key: &str) -> Option<Value> {
        self.persistent.get(key)
    }
}

impl DefaultsStore for LocalStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.persistent
            .get(key)
            .or_else(|| self.registered.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) {
        self.persistent.insert(key, value);
    }

    fn remove(&self, key: &str) {
        if self.persistent.remove(key).is_some() {
            debug!(key, "removed local value");
        }
    }

    fn keys(&self) -> Vec<String> {
        self.persistent.keys()
    }

    fn exists(&self, key: &str) -> bool {
        self.persistent.contains(key) || self.registered.read().contains_key(key)
    }
}
