//! Coercion proxy for raw string keys
//!
//! A `Proxy` is what callers without a compile-time key type get: a key name
//! and read accessors for every primitive, each in an optional form and a
//! defaulting `*_value` form. The accessors reuse the typed layer's
//! `DefaultsValue::load` and `DefaultValue::default_value`, so a proxy read
//! and a typed read of the same slot always agree.
//!
//! Writes take a `DynamicValue`, a closed set of runtime-typed values.

use crate::defaults::Defaults;
use crate::value::{DefaultValue, DefaultsValue, Slot};
use chrono::{DateTime, Utc};
use defaults_core::{DefaultsError, DefaultsResult, DefaultsStore, Number, Url, Value};
use std::collections::HashMap;

/// Runtime-typed value for string-keyed writes
#[derive(Debug, Clone, PartialEq)]
pub enum DynamicValue {
    /// Stored as a string
    String(String),
    /// Stored as an integer number
    Integer(i64),
    /// Stored as a double number
    Double(f64),
    /// Stored as a boolean number
    Bool(bool),
    /// Stored as its string form
    Url(Url),
    /// Stored as-is (lists, mappings, blobs, dates)
    Object(Value),
    /// Removes the key
    Absent,
}

impl DynamicValue {
    /// Variant name, for logs
    pub fn kind(&self) -> &'static str {
        match self {
            DynamicValue::String(_) => "string",
            DynamicValue::Integer(_) => "integer",
            DynamicValue::Double(_) => "double",
            DynamicValue::Bool(_) => "bool",
            DynamicValue::Url(_) => "url",
            DynamicValue::Object(_) => "object",
            DynamicValue::Absent => "absent",
        }
    }

    /// Convert a JSON document
    ///
    /// A top-level `null` is `Absent`. Arrays and objects become
    /// `Object`; JSON numbers that fit `i64` become `Integer`, others `Double`.
    ///
    /// # Errors
    ///
    /// `DefaultsError::UnsupportedValue` for `null` inside an array or object.
    pub fn from_json(json: serde_json::Value) -> DefaultsResult<Self> {
        Ok(match json {
            serde_json::Value::Null => DynamicValue::Absent,
            serde_json::Value::Bool(b) => DynamicValue::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => DynamicValue::Integer(i),
                None => DynamicValue::Double(n.as_f64().ok_or_else(|| {
                    DefaultsError::UnsupportedValue(format!("number {} is not representable", n))
                })?),
            },
            serde_json::Value::String(s) => DynamicValue::String(s),
            nested @ (serde_json::Value::Array(_) | serde_json::Value::Object(_)) => {
                DynamicValue::Object(Value::try_from(nested)?)
            }
        })
    }
}

impl From<String> for DynamicValue {
    fn from(s: String) -> Self {
        DynamicValue::String(s)
    }
}

impl From<&str> for DynamicValue {
    fn from(s: &str) -> Self {
        DynamicValue::String(s.to_string())
    }
}

impl From<i64> for DynamicValue {
    fn from(i: i64) -> Self {
        DynamicValue::Integer(i)
    }
}

impl From<f64> for DynamicValue {
    fn from(d: f64) -> Self {
        DynamicValue::Double(d)
    }
}

impl From<bool> for DynamicValue {
    fn from(b: bool) -> Self {
        DynamicValue::Bool(b)
    }
}

impl From<Url> for DynamicValue {
    fn from(url: Url) -> Self {
        DynamicValue::Url(url)
    }
}

impl From<Value> for DynamicValue {
    fn from(value: Value) -> Self {
        DynamicValue::Object(value)
    }
}

impl<T: Into<DynamicValue>> From<Option<T>> for DynamicValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(DynamicValue::Absent, Into::into)
    }
}

/// String-keyed coercion view over a `Defaults` facade
pub struct Proxy<'a, S: ?Sized> {
    defaults: &'a Defaults<S>,
    key: String,
}

impl<'a, S: DefaultsStore + ?Sized> Proxy<'a, S> {
    pub(crate) fn new(defaults: &'a Defaults<S>, key: String) -> Self {
        Self { defaults, key }
    }

    /// Key name
    pub fn key(&self) -> &str {
        &self.key
    }

    fn slot(&self) -> Slot<'_, S> {
        self.defaults.slot(&self.key)
    }

    fn load<T: DefaultsValue>(&self) -> Option<T> {
        T::load(self.slot())
    }

    fn load_or_default<T: DefaultValue>(&self) -> T {
        self.load().unwrap_or_else(T::default_value)
    }

    // ========== Optional views ==========

    /// Stored value, untyped
    pub fn object(&self) -> Option<Value> {
        self.load()
    }

    /// String view
    pub fn string(&self) -> Option<String> {
        self.load()
    }

    /// List view, elements untyped
    pub fn array(&self) -> Option<Vec<Value>> {
        self.load()
    }

    /// Mapping view
    pub fn dictionary(&self) -> Option<HashMap<String, Value>> {
        self.load()
    }

    /// Blob view
    pub fn data(&self) -> Option<Vec<u8>> {
        self.load()
    }

    /// Date view
    pub fn date(&self) -> Option<DateTime<Utc>> {
        self.load()
    }

    /// Number view
    pub fn number(&self) -> Option<Number> {
        self.load()
    }

    /// Integer view
    pub fn int(&self) -> Option<i64> {
        self.load()
    }

    /// Double view
    pub fn double(&self) -> Option<f64> {
        self.load()
    }

    /// Boolean view
    pub fn bool(&self) -> Option<bool> {
        self.load()
    }

    /// URL view
    pub fn url(&self) -> Option<Url> {
        self.load()
    }

    // ========== Defaulting views ==========

    /// String view, `""` on miss
    pub fn string_value(&self) -> String {
        self.load_or_default()
    }

    /// List view, empty on miss
    pub fn array_value(&self) -> Vec<Value> {
        self.load_or_default()
    }

    /// Mapping view, empty on miss
    pub fn dictionary_value(&self) -> HashMap<String, Value> {
        self.load_or_default()
    }

    /// Blob view, empty on miss
    pub fn data_value(&self) -> Vec<u8> {
        self.load_or_default()
    }

    /// Number view, integer `0` on miss
    pub fn number_value(&self) -> Number {
        self.load_or_default()
    }

    /// Integer view, `0` on miss
    pub fn int_value(&self) -> i64 {
        self.load_or_default()
    }

    /// Double view, `0.0` on miss
    pub fn double_value(&self) -> f64 {
        self.load_or_default()
    }

    /// Boolean view, `false` on miss
    pub fn bool_value(&self) -> bool {
        self.load_or_default()
    }

    // ========== Writes ==========

    /// Returns `true` if the key holds a value
    pub fn exists(&self) -> bool {
        self.defaults.store().exists(&self.key)
    }

    /// Remove the key
    pub fn remove(&self) {
        self.defaults.store().remove(&self.key);
    }

    /// Write a dynamically-typed value; `Absent` removes the key
    pub fn set(&self, value: impl Into<DynamicValue>) {
        self.defaults.set_dynamic(&self.key, value.into());
    }

    /// Write a JSON document
    ///
    /// # Errors
    ///
    /// See `Defaults::set_json`.
    pub fn set_json(&self, json: serde_json::Value) -> DefaultsResult<()> {
        self.defaults.set_json(&self.key, json)
    }

    /// Write `value()` only if the key is absent; returns whether it wrote
    pub fn set_if_absent<F>(&self, value: F) -> bool
    where
        F: FnOnce() -> DynamicValue,
    {
        if self.exists() {
            return false;
        }
        self.set(value());
        true
    }

    /// Add to the integer view and store the sum; returns the sum
    ///
    /// An absent or non-numeric value counts as zero. Overflow wraps.
    pub fn add_int(&self, delta: i64) -> i64 {
        let sum = self.int_value().wrapping_add(delta);
        self.set(DynamicValue::Integer(sum));
        sum
    }

    /// Add to the double view and store the sum; returns the sum
    pub fn add_double(&self, delta: f64) -> f64 {
        let sum = self.double_value() + delta;
        self.set(DynamicValue::Double(sum));
        sum
    }

    /// Shorthand for `add_int(1)`
    pub fn increment(&self) -> i64 {
        self.add_int(1)
    }
}
