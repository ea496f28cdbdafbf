//! Backing store capability
//!
//! `DefaultsStore` is the operation set the typed facade needs from any
//! string-keyed store. Implementations provide four primitives (`get`, `set`,
//! `remove`, `keys`); everything else has a default built on top of them that
//! stores may override.
//!
//! Thread safety: all methods take `&self` and must be safe to call
//! concurrently (requires Send + Sync). Each call is atomic for its key; there
//! is no cross-key atomicity.

use crate::contract::Url;
use crate::value::{Number, Value};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Untyped string-keyed store (local preferences or a cloud mirror)
///
/// The typed getters follow the same policy as the facade one level down:
/// `Option` getters return `None` on absence or when the stored value has
/// another shape, and the numeric getters fall back to `0`, `0.0`, `false`.
pub trait DefaultsStore: Send + Sync {
    /// Get the value stored under `key`
    fn get(&self, key: &str) -> Option<Value>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: Value);

    /// Remove `key`; removing an absent key is a no-op
    fn remove(&self, key: &str);

    /// Keys currently held by the store, in no particular order
    fn keys(&self) -> Vec<String>;

    /// Returns `true` if `key` holds a value
    fn exists(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Remove every key reported by `keys()`
    ///
    /// Stores with layers that `keys()` does not report keep those layers.
    fn clear(&self) {
        for key in self.keys() {
            self.remove(&key);
        }
    }

    /// Store `value`, or remove the key when it is `None`
    fn set_optional(&self, key: &str, value: Option<Value>) {
        match value {
            Some(value) => self.set(key, value),
            None => self.remove(key),
        }
    }

    // ========== Typed getters ==========

    /// String stored under `key`
    fn string(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// List stored under `key`, elements left untyped
    fn array(&self, key: &str) -> Option<Vec<Value>> {
        match self.get(key)? {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Mapping stored under `key`
    fn dictionary(&self, key: &str) -> Option<HashMap<String, Value>> {
        match self.get(key)? {
            Value::Dictionary(d) => Some(d),
            _ => None,
        }
    }

    /// Blob stored under `key`
    fn data(&self, key: &str) -> Option<Vec<u8>> {
        match self.get(key)? {
            Value::Data(d) => Some(d),
            _ => None,
        }
    }

    /// Date stored under `key`
    fn date(&self, key: &str) -> Option<DateTime<Utc>> {
        self.get(key)?.as_date()
    }

    /// Number stored under `key`
    fn number(&self, key: &str) -> Option<Number> {
        self.get(key)?.as_number()
    }

    /// URL stored under `key`; `None` if the string does not parse
    fn url(&self, key: &str) -> Option<Url> {
        Url::parse(self.string(key)?).ok()
    }

    /// Integer view of `key`, `0` when absent or not a number
    fn integer(&self, key: &str) -> i64 {
        self.number(key).map(|n| n.int_value()).unwrap_or(0)
    }

    /// Double view of `key`, `0.0` when absent or not a number
    fn double(&self, key: &str) -> f64 {
        self.number(key).map(|n| n.double_value()).unwrap_or(0.0)
    }

    /// Boolean view of `key`, `false` when absent or not a number
    fn bool(&self, key: &str) -> bool {
        self.number(key).map(|n| n.bool_value()).unwrap_or(false)
    }

    // ========== Typed setters ==========

    /// Store a string
    fn set_string(&self, key: &str, value: &str) {
        self.set(key, Value::String(value.to_string()));
    }

    /// Store an integer
    fn set_integer(&self, key: &str, value: i64) {
        self.set(key, Value::Number(Number::Int(value)));
    }

    /// Store a double
    fn set_double(&self, key: &str, value: f64) {
        self.set(key, Value::Number(Number::Float(value)));
    }

    /// Store a boolean
    fn set_bool(&self, key: &str, value: bool) {
        self.set(key, Value::Number(Number::Bool(value)));
    }

    /// Store a blob
    fn set_data(&self, key: &str, value: Vec<u8>) {
        self.set(key, Value::Data(value));
    }

    /// Store a date
    fn set_date(&self, key: &str, value: DateTime<Utc>) {
        self.set(key, Value::Date(value));
    }

    /// Store a URL as its string form, or remove the key when `None`
    fn set_url(&self, key: &str, url: Option<&Url>) {
        self.set_optional(key, url.map(|u| Value::String(u.as_str().to_string())));
    }
}
