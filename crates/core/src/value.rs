//! Stored value model
//!
//! This module defines:
//! - Value: the tagged union every backing store holds
//! - Number: integer, double and boolean unified behind lossy views
//!
//! ## Property-list rules
//!
//! - Absence is `Option::None`, never a variant. A key maps to at most one
//!   value; writing "absent" removes the key.
//! - Containers cannot hold absent elements, so JSON `null` has no
//!   representation and is rejected at the conversion boundary.
//! - The store never records the caller's type intent. The same `Number`
//!   can be read back as an integer, a double or a boolean.

use crate::error::{DefaultsError, DefaultsResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Unified numeric value
///
/// Integers, doubles and booleans share one storage slot kind. Each view
/// converts from whichever representation was written:
/// - `int_value`: floats truncate toward zero, `true` is 1
/// - `double_value`: integers widen, `true` is 1.0
/// - `bool_value`: anything non-zero is `true`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Number {
    /// Boolean
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point (IEEE-754)
    Float(f64),
}

impl Number {
    /// View as a signed integer
    pub fn int_value(&self) -> i64 {
        match *self {
            Number::Bool(b) => i64::from(b),
            Number::Int(i) => i,
            // `as` saturates at the bounds and maps NaN to 0
            Number::Float(f) => f as i64,
        }
    }

    /// View as a double
    pub fn double_value(&self) -> f64 {
        match *self {
            Number::Bool(b) => {
                if b {
                    1.0
                } else {
                    0.0
                }
            }
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    /// View as a boolean
    pub fn bool_value(&self) -> bool {
        match *self {
            Number::Bool(b) => b,
            Number::Int(i) => i != 0,
            Number::Float(f) => f != 0.0,
        }
    }
}

impl Default for Number {
    fn default() -> Self {
        Number::Int(0)
    }
}

impl From<i64> for Number {
    fn from(i: i64) -> Self {
        Number::Int(i)
    }
}

impl From<f64> for Number {
    fn from(f: f64) -> Self {
        Number::Float(f)
    }
}

impl From<bool> for Number {
    fn from(b: bool) -> Self {
        Number::Bool(b)
    }
}

/// Value held by a backing store under one key
///
/// Different variants are never equal: `String("1") != Number(Int(1))`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// UTF-8 string (URLs are stored as strings too)
    String(String),
    /// Integer, double or boolean
    Number(Number),
    /// Opaque binary blob
    Data(Vec<u8>),
    /// Point in time
    Date(DateTime<Utc>),
    /// Ordered list of values
    Array(Vec<Value>),
    /// String-keyed mapping of values
    Dictionary(HashMap<String, Value>),
}

impl Value {
    /// Get the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "String",
            Value::Number(_) => "Number",
            Value::Data(_) => "Data",
            Value::Date(_) => "Date",
            Value::Array(_) => "Array",
            Value::Dictionary(_) => "Dictionary",
        }
    }

    /// Get as &str if this is a String value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the number if this is a Number value
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as &[u8] if this is a Data value
    pub fn as_data(&self) -> Option<&[u8]> {
        match self {
            Value::Data(d) => Some(d),
            _ => None,
        }
    }

    /// Get the date if this is a Date value
    pub fn as_date(&self) -> Option<DateTime<Utc>> {
        match self {
            Value::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Get as &[Value] if this is an Array value
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Get as &HashMap if this is a Dictionary value
    pub fn as_dictionary(&self) -> Option<&HashMap<String, Value>> {
        match self {
            Value::Dictionary(d) => Some(d),
            _ => None,
        }
    }

    /// Approximate in-memory footprint, used for store quota accounting
    pub fn approximate_size(&self) -> usize {
        match self {
            Value::String(s) => s.len(),
            Value::Number(_) => 8,
            Value::Data(d) => d.len(),
            Value::Date(_) => 8,
            Value::Array(a) => a.iter().map(Value::approximate_size).sum(),
            Value::Dictionary(d) => d
                .iter()
                .map(|(k, v)| k.len() + v.approximate_size())
                .sum(),
        }
    }
}

// ============================================================================
// From implementations for ergonomic API usage
// ============================================================================

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Number(Number::Bool(b))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Number(Number::Int(i))
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Number(Number::Int(i64::from(i)))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Number(Number::Float(f))
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::Data(b)
    }
}

impl From<&[u8]> for Value {
    fn from(b: &[u8]) -> Self {
        Value::Data(b.to_vec())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(d: DateTime<Utc>) -> Self {
        Value::Date(d)
    }
}

impl From<Vec<Value>> for Value {
    fn from(a: Vec<Value>) -> Self {
        Value::Array(a)
    }
}

impl From<HashMap<String, Value>> for Value {
    fn from(d: HashMap<String, Value>) -> Self {
        Value::Dictionary(d)
    }
}

// ============================================================================
// serde_json interop
// ============================================================================

impl TryFrom<serde_json::Value> for Value {
    type Error = DefaultsError;

    /// Convert a JSON document into a stored value
    ///
    /// Fails on `null` at any depth: a store cannot hold an absent element.
    fn try_from(v: serde_json::Value) -> DefaultsResult<Self> {
        match v {
            serde_json::Value::Null => Err(DefaultsError::UnsupportedValue(
                "null has no stored representation".to_string(),
            )),
            serde_json::Value::Bool(b) => Ok(Value::Number(Number::Bool(b))),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Ok(Value::Number(Number::Int(i))),
                // u64 beyond i64::MAX and real fractions land here
                None => Ok(Value::Number(Number::Float(n.as_f64().unwrap_or(0.0)))),
            },
            serde_json::Value::String(s) => Ok(Value::String(s)),
            serde_json::Value::Array(arr) => arr
                .into_iter()
                .map(Value::try_from)
                .collect::<DefaultsResult<Vec<_>>>()
                .map(Value::Array),
            serde_json::Value::Object(obj) => obj
                .into_iter()
                .map(|(k, v)| Value::try_from(v).map(|v| (k, v)))
                .collect::<DefaultsResult<HashMap<_, _>>>()
                .map(Value::Dictionary),
        }
    }
}
