//! Defaults: typed facade over a backing store
//!
//! ## Design
//!
//! `Defaults` is a stateless facade. It holds an `Arc` to the store and a
//! copy of its config; all state lives in the store. Cloning is an `Arc`
//! clone, and any number of facades over one store see the same data.
//!
//! ## API
//!
//! - **Typed**: `get`, `set`, `exists`, `remove`, `clear`. The key's value
//!   type picks the store operation at compile time.
//! - **Dynamic**: `proxy`, `set_dynamic`, `set_json` for callers holding only
//!   a string key.
//! - **Archival**: `archive`, `unarchive` and their optional forms go through
//!   the type's routed layer; `archive_serde`, `unarchive_serde` take any
//!   serde type without declaring routing.
//! - **Raw values**: `archive_raw`, `unarchive_raw` and their optional forms.
//!
//! ## Contract violations
//!
//! Absence and type mismatch never fail. Programming errors (a value the
//! archive codec cannot encode, a JSON `null`) are logged at `error` and then
//! either returned or turned into a panic, per `DefaultsConfig`.

use crate::archive::{archive_into, unarchive_from};
use crate::config::{DefaultsConfig, ViolationPolicy};
use crate::proxy::{DynamicValue, Proxy};
use crate::raw::{load_raw, save_raw, RawRepresentable};
use crate::value::{DefaultsValue, KeyValue, Slot};
use defaults_core::{DefaultsKey, DefaultsResult, DefaultsStore, Value};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error};

/// Typed facade over a `DefaultsStore`
///
/// # Example
///
/// ```
/// use defaults_primitives::{Defaults, DefaultsKey};
/// use defaults_storage::LocalStore;
///
/// const RETRY_COUNT: DefaultsKey<i64> = DefaultsKey::new("retry_count");
///
/// let defaults = Defaults::new(LocalStore::new());
/// assert_eq!(defaults.get(&RETRY_COUNT), 0);
///
/// defaults.set(&RETRY_COUNT, 5)?;
/// assert_eq!(defaults.get(&RETRY_COUNT), 5);
///
/// defaults.set(&RETRY_COUNT.optional(), None)?;
/// assert!(!defaults.exists(&RETRY_COUNT));
/// # Ok::<(), defaults_primitives::DefaultsError>(())
/// ```
pub struct Defaults<S: ?Sized> {
    store: Arc<S>,
    config: DefaultsConfig,
}

impl<S: DefaultsStore> Defaults<S> {
    /// Wrap `store` with the default config
    pub fn new(store: S) -> Self {
        Self::with_config(store, DefaultsConfig::default())
    }

    /// Wrap `store` with `config`
    pub fn with_config(store: S, config: DefaultsConfig) -> Self {
        Self::from_arc(Arc::new(store), config)
    }
}

impl<S: DefaultsStore + ?Sized> Defaults<S> {
    /// Wrap a shared store (also accepts `Arc<dyn DefaultsStore>`)
    pub fn from_arc(store: Arc<S>, config: DefaultsConfig) -> Self {
        Self { store, config }
    }

    /// Get the underlying store reference
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Config in force
    pub fn config(&self) -> &DefaultsConfig {
        &self.config
    }

    pub(crate) fn slot<'a>(&'a self, key: &'a str) -> Slot<'a, S> {
        Slot::new(&*self.store, key, self.config.archive_codec)
    }

    /// Apply the violation policy to a write result
    pub(crate) fn enforce<T>(&self, result: DefaultsResult<T>) -> DefaultsResult<T> {
        if let Err(e) = &result {
            if e.is_programming_error() {
                error!(error = %e, "defaults contract violation");
                if self.config.contract_violation == ViolationPolicy::Panic {
                    panic!("defaults contract violation: {}", e);
                }
            }
        }
        result
    }

    // ========== Typed API ==========

    /// Read the value under `key`
    ///
    /// Non-optional keys fall back to the type's zero on absence or mismatch;
    /// optional keys read `None`.
    pub fn get<T: KeyValue>(&self, key: &DefaultsKey<T>) -> T {
        T::read(self.slot(key.name()))
    }

    /// Write `value` under `key`; `None` on an optional key removes it
    ///
    /// `Ok` means the facade handed the value to the store, not that the store
    /// kept it. `CloudStore` drops writes that break its quota (logged and
    /// counted in `quota_violations`); call `CloudStore::try_set` through
    /// `store()` when the caller needs to know.
    ///
    /// # Errors
    ///
    /// Only archived custom types can fail, when the value cannot be encoded.
    pub fn set<T: KeyValue>(&self, key: &DefaultsKey<T>, value: T) -> DefaultsResult<()> {
        self.enforce(value.write(self.slot(key.name())))
    }

    /// Returns `true` if the store holds a value under `key`
    pub fn exists<T>(&self, key: &DefaultsKey<T>) -> bool {
        self.store.exists(key.name())
    }

    /// Remove `key`
    pub fn remove<T>(&self, key: &DefaultsKey<T>) {
        self.store.remove(key.name());
    }

    /// Remove every key the store enumerates
    pub fn clear(&self) {
        self.store.clear();
        debug!("cleared defaults store");
    }

    // ========== Dynamic API ==========

    /// Coercion view of a raw string key
    pub fn proxy(&self, key: impl Into<String>) -> Proxy<'_, S> {
        Proxy::new(self, key.into())
    }

    /// Write a dynamically-typed value; `Absent` removes the key
    pub fn set_dynamic(&self, key: &str, value: DynamicValue) {
        debug!(key, kind = value.kind(), "dynamic write");
        let store = &*self.store;
        match value {
            DynamicValue::String(s) => store.set(key, Value::String(s)),
            DynamicValue::Integer(i) => store.set_integer(key, i),
            DynamicValue::Double(d) => store.set_double(key, d),
            DynamicValue::Bool(b) => store.set_bool(key, b),
            DynamicValue::Url(url) => store.set_url(key, Some(&url)),
            DynamicValue::Object(object) => store.set(key, object),
            DynamicValue::Absent => store.remove(key),
        }
    }

    /// Write a JSON document; a top-level `null` removes the key
    ///
    /// # Errors
    ///
    /// A `null` nested inside an array or object has no stored form and is a
    /// contract violation; the store is not touched.
    pub fn set_json(&self, key: &str, json: serde_json::Value) -> DefaultsResult<()> {
        let value = self.enforce(DynamicValue::from_json(json))?;
        self.set_dynamic(key, value);
        Ok(())
    }

    // ========== Archival API ==========

    /// Store `value` through its routed layer
    ///
    /// The type's one `DefaultsValue` impl decides the stored form: types
    /// routed with `impl_raw_defaults!` store their raw scalar, types routed
    /// with `impl_archived_defaults!` store a tagged blob, and built-ins use
    /// their own store setter.
    ///
    /// # Errors
    ///
    /// Contract violation if an archived value cannot be encoded.
    pub fn archive<T: DefaultsValue>(&self, key: &DefaultsKey<T>, value: T) -> DefaultsResult<()> {
        self.enforce(value.save(self.slot(key.name())))
    }

    /// Store `value` through its routed layer, or remove the key when `None`
    ///
    /// # Errors
    ///
    /// Contract violation if an archived value cannot be encoded.
    pub fn archive_optional<T: DefaultsValue>(
        &self,
        key: &DefaultsKey<Option<T>>,
        value: Option<T>,
    ) -> DefaultsResult<()> {
        self.enforce(value.write(self.slot(key.name())))
    }

    /// Load `key` through its routed layer; `None` if absent, mismatched or
    /// undecodable
    pub fn unarchive<T: DefaultsValue>(&self, key: &DefaultsKey<T>) -> Option<T> {
        T::load(self.slot(key.name()))
    }

    /// Load an optional key through its routed layer
    pub fn unarchive_optional<T: DefaultsValue>(&self, key: &DefaultsKey<Option<T>>) -> Option<T> {
        T::load(self.slot(key.name()))
    }

    /// Archive any serde value as a tagged blob, without declaring routing
    ///
    /// Raw-value routing is bypassed here; use `archive` for enums.
    ///
    /// # Errors
    ///
    /// Contract violation if the codec cannot encode `value`.
    pub fn archive_serde<T: Serialize>(
        &self,
        key: &DefaultsKey<T>,
        value: &T,
    ) -> DefaultsResult<()> {
        self.enforce(archive_into(self.slot(key.name()), value))
    }

    /// Decode a blob written by `archive_serde`; `None` if absent, undecodable
    /// or archived from another type
    pub fn unarchive_serde<T: DeserializeOwned>(&self, key: &DefaultsKey<T>) -> Option<T> {
        unarchive_from(self.slot(key.name()))
    }

    // ========== Raw-value API ==========

    /// Store the raw scalar of `value`
    ///
    /// # Errors
    ///
    /// Raw scalars always store; the `Result` mirrors `set`.
    pub fn archive_raw<T: RawRepresentable>(
        &self,
        key: &DefaultsKey<T>,
        value: &T,
    ) -> DefaultsResult<()> {
        save_raw(self.slot(key.name()), value)
    }

    /// Store the raw scalar of `value`, or remove the key when `None`
    ///
    /// # Errors
    ///
    /// Raw scalars always store; the `Result` mirrors `set`.
    pub fn archive_raw_optional<T: RawRepresentable>(
        &self,
        key: &DefaultsKey<Option<T>>,
        value: Option<&T>,
    ) -> DefaultsResult<()> {
        match value {
            Some(value) => save_raw(self.slot(key.name()), value),
            None => {
                self.store.remove(key.name());
                Ok(())
            }
        }
    }

    /// Rebuild the case from the stored raw scalar
    pub fn unarchive_raw<T: RawRepresentable>(&self, key: &DefaultsKey<T>) -> Option<T> {
        load_raw(self.slot(key.name()))
    }

    /// Rebuild the case under an optional key
    pub fn unarchive_raw_optional<T: RawRepresentable>(
        &self,
        key: &DefaultsKey<Option<T>>,
    ) -> Option<T> {
        load_raw(self.slot(key.name()))
    }
}

impl<S: ?Sized> Clone for Defaults<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            config: self.config,
        }
    }
}

impl<S: ?Sized> fmt::Debug for Defaults<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Defaults")
            .field("store", &std::any::type_name::<S>())
            .field("config", &self.config)
            .finish()
    }
}
