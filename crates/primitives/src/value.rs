//! Typed dispatch traits
//!
//! A key's value type alone decides how it is read and written. The routing
//! is three traits deep:
//!
//! - `DefaultsValue`: a type that can occupy a slot. Loading yields `None` on
//!   absence or when the stored value has another shape; it never fails.
//! - `DefaultValue`: a `DefaultsValue` with a documented zero, used by the
//!   non-optional form of a key.
//! - `KeyValue`: what a `DefaultsKey<T>` may be parameterized with. Every
//!   `T: DefaultValue` reads with fallback, and every `Option<T>` of a
//!   `DefaultsValue` reads optionally and removes the key on `None`.
//!
//! Built-in impls are fixed here. Custom types get exactly one
//! `DefaultsValue` impl from `impl_archived_defaults!` or
//! `impl_raw_defaults!`, so a type can never route two ways.

use crate::archive::ArchiveCodec;
use chrono::{DateTime, Utc};
use defaults_core::{DefaultsResult, DefaultsStore, Number, Url, Value};
use std::collections::HashMap;
use std::fmt;

/// One addressed slot: a store, a key name and the codec for archived values
pub struct Slot<'a, S: ?Sized> {
    store: &'a S,
    key: &'a str,
    codec: ArchiveCodec,
}

impl<'a, S: DefaultsStore + ?Sized> Slot<'a, S> {
    /// Address `key` in `store`
    pub fn new(store: &'a S, key: &'a str, codec: ArchiveCodec) -> Self {
        Self { store, key, codec }
    }

    /// Backing store
    #[inline]
    pub fn store(&self) -> &'a S {
        self.store
    }

    /// Key name
    #[inline]
    pub fn key(&self) -> &'a str {
        self.key
    }

    /// Codec used by the archival layer
    #[inline]
    pub fn codec(&self) -> ArchiveCodec {
        self.codec
    }

    /// Remove the key
    pub fn remove(&self) {
        self.store.remove(self.key);
    }
}

impl<S: ?Sized> Clone for Slot<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for Slot<'_, S> {}

impl<S: ?Sized> fmt::Debug for Slot<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slot")
            .field("key", &self.key)
            .field("codec", &self.codec)
            .finish()
    }
}

/// A type that can be stored in, and read back from, one slot
pub trait DefaultsValue: Sized {
    /// Read the slot; `None` on absence or shape mismatch
    fn load<S: DefaultsStore + ?Sized>(slot: Slot<'_, S>) -> Option<Self>;

    /// Write `self` into the slot
    ///
    /// # Errors
    ///
    /// Only archived values can fail, when they cannot be encoded.
    fn save<S: DefaultsStore + ?Sized>(self, slot: Slot<'_, S>) -> DefaultsResult<()>;
}

/// A `DefaultsValue` with a zero returned on absence or mismatch
pub trait DefaultValue: DefaultsValue {
    /// The zero value
    fn default_value() -> Self;
}

/// Types a `DefaultsKey` may carry
pub trait KeyValue: Sized {
    /// Read the slot, applying the default policy
    fn read<S: DefaultsStore + ?Sized>(slot: Slot<'_, S>) -> Self;

    /// Write into the slot
    ///
    /// # Errors
    ///
    /// Propagates the value's `save` error.
    fn write<S: DefaultsStore + ?Sized>(self, slot: Slot<'_, S>) -> DefaultsResult<()>;
}

impl<T: DefaultValue> KeyValue for T {
    fn read<S: DefaultsStore + ?Sized>(slot: Slot<'_, S>) -> Self {
        T::load(slot).unwrap_or_else(T::default_value)
    }

    fn write<S: DefaultsStore + ?Sized>(self, slot: Slot<'_, S>) -> DefaultsResult<()> {
        self.save(slot)
    }
}

impl<T: DefaultsValue> KeyValue for Option<T> {
    fn read<S: DefaultsStore + ?Sized>(slot: Slot<'_, S>) -> Self {
        T::load(slot)
    }

    fn write<S: DefaultsStore + ?Sized>(self, slot: Slot<'_, S>) -> DefaultsResult<()> {
        match self {
            Some(value) => value.save(slot),
            None => {
                slot.remove();
                Ok(())
            }
        }
    }
}

// ============================================================================
// Scalars
// ============================================================================

impl DefaultsValue for String {
    fn load<S: DefaultsStore + ?Sized>(slot: Slot<'_, S>) -> Option<Self> {
        slot.store().string(slot.key())
    }

    fn save<S: DefaultsStore + ?Sized>(self, slot: Slot<'_, S>) -> DefaultsResult<()> {
        slot.store().set(slot.key(), Value::String(self));
        Ok(())
    }
}

impl DefaultValue for String {
    fn default_value() -> Self {
        String::new()
    }
}

impl DefaultsValue for i64 {
    fn load<S: DefaultsStore + ?Sized>(slot: Slot<'_, S>) -> Option<Self> {
        slot.store().number(slot.key()).map(|n| n.int_value())
    }

    fn save<S: DefaultsStore + ?Sized>(self, slot: Slot<'_, S>) -> DefaultsResult<()> {
        slot.store().set_integer(slot.key(), self);
        Ok(())
    }
}

impl DefaultValue for i64 {
    fn default_value() -> Self {
        0
    }
}

impl DefaultsValue for f64 {
    fn load<S: DefaultsStore + ?Sized>(slot: Slot<'_, S>) -> Option<Self> {
        slot.store().number(slot.key()).map(|n| n.double_value())
    }

    fn save<S: DefaultsStore + ?Sized>(self, slot: Slot<'_, S>) -> DefaultsResult<()> {
        slot.store().set_double(slot.key(), self);
        Ok(())
    }
}

impl DefaultValue for f64 {
    fn default_value() -> Self {
        0.0
    }
}

impl DefaultsValue for bool {
    fn load<S: DefaultsStore + ?Sized>(slot: Slot<'_, S>) -> Option<Self> {
        slot.store().number(slot.key()).map(|n| n.bool_value())
    }

    fn save<S: DefaultsStore + ?Sized>(self, slot: Slot<'_, S>) -> DefaultsResult<()> {
        slot.store().set_bool(slot.key(), self);
        Ok(())
    }
}

impl DefaultValue for bool {
    fn default_value() -> Self {
        false
    }
}

impl DefaultsValue for Number {
    fn load<S: DefaultsStore + ?Sized>(slot: Slot<'_, S>) -> Option<Self> {
        slot.store().number(slot.key())
    }

    fn save<S: DefaultsStore + ?Sized>(self, slot: Slot<'_, S>) -> DefaultsResult<()> {
        slot.store().set(slot.key(), Value::Number(self));
        Ok(())
    }
}

impl DefaultValue for Number {
    fn default_value() -> Self {
        Number::Int(0)
    }
}

// Url, dates and raw values have no meaningful zero: optional keys only.

impl DefaultsValue for Url {
    fn load<S: DefaultsStore + ?Sized>(slot: Slot<'_, S>) -> Option<Self> {
        slot.store().url(slot.key())
    }

    fn save<S: DefaultsStore + ?Sized>(self, slot: Slot<'_, S>) -> DefaultsResult<()> {
        slot.store().set_url(slot.key(), Some(&self));
        Ok(())
    }
}

impl DefaultsValue for DateTime<Utc> {
    fn load<S: DefaultsStore + ?Sized>(slot: Slot<'_, S>) -> Option<Self> {
        slot.store().date(slot.key())
    }

    fn save<S: DefaultsStore + ?Sized>(self, slot: Slot<'_, S>) -> DefaultsResult<()> {
        slot.store().set_date(slot.key(), self);
        Ok(())
    }
}

impl DefaultsValue for Value {
    fn load<S: DefaultsStore + ?Sized>(slot: Slot<'_, S>) -> Option<Self> {
        slot.store().get(slot.key())
    }

    fn save<S: DefaultsStore + ?Sized>(self, slot: Slot<'_, S>) -> DefaultsResult<()> {
        slot.store().set(slot.key(), self);
        Ok(())
    }
}

// ============================================================================
// Blobs, opaque lists and mappings
// ============================================================================

impl DefaultsValue for Vec<u8> {
    fn load<S: DefaultsStore + ?Sized>(slot: Slot<'_, S>) -> Option<Self> {
        slot.store().data(slot.key())
    }

    fn save<S: DefaultsStore + ?Sized>(self, slot: Slot<'_, S>) -> DefaultsResult<()> {
        slot.store().set_data(slot.key(), self);
        Ok(())
    }
}

impl DefaultValue for Vec<u8> {
    fn default_value() -> Self {
        Vec::new()
    }
}

impl DefaultsValue for Vec<Value> {
    fn load<S: DefaultsStore + ?Sized>(slot: Slot<'_, S>) -> Option<Self> {
        slot.store().array(slot.key())
    }

    fn save<S: DefaultsStore + ?Sized>(self, slot: Slot<'_, S>) -> DefaultsResult<()> {
        slot.store().set(slot.key(), Value::Array(self));
        Ok(())
    }
}

impl DefaultValue for Vec<Value> {
    fn default_value() -> Self {
        Vec::new()
    }
}

impl DefaultsValue for HashMap<String, Value> {
    fn load<S: DefaultsStore + ?Sized>(slot: Slot<'_, S>) -> Option<Self> {
        slot.store().dictionary(slot.key())
    }

    fn save<S: DefaultsStore + ?Sized>(self, slot: Slot<'_, S>) -> DefaultsResult<()> {
        slot.store().set(slot.key(), Value::Dictionary(self));
        Ok(())
    }
}

impl DefaultValue for HashMap<String, Value> {
    fn default_value() -> Self {
        HashMap::new()
    }
}

// ============================================================================
// Typed lists
// ============================================================================

/// Element type of a typed list
///
/// Typed lists are all-or-nothing: if any stored element fails
/// `from_element`, the whole list reads as absent.
pub trait ListElement: Sized {
    /// View a stored element as `Self`
    fn from_element(value: &Value) -> Option<Self>;

    /// Stored form of `self`
    fn into_element(self) -> Value;
}

impl ListElement for String {
    fn from_element(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_string)
    }

    fn into_element(self) -> Value {
        Value::String(self)
    }
}

impl ListElement for i64 {
    fn from_element(value: &Value) -> Option<Self> {
        value.as_number().map(|n| n.int_value())
    }

    fn into_element(self) -> Value {
        Value::from(self)
    }
}

impl ListElement for f64 {
    fn from_element(value: &Value) -> Option<Self> {
        value.as_number().map(|n| n.double_value())
    }

    fn into_element(self) -> Value {
        Value::from(self)
    }
}

impl ListElement for bool {
    fn from_element(value: &Value) -> Option<Self> {
        value.as_number().map(|n| n.bool_value())
    }

    fn into_element(self) -> Value {
        Value::from(self)
    }
}

impl ListElement for Vec<u8> {
    fn from_element(value: &Value) -> Option<Self> {
        value.as_data().map(<[u8]>::to_vec)
    }

    fn into_element(self) -> Value {
        Value::Data(self)
    }
}

impl ListElement for DateTime<Utc> {
    fn from_element(value: &Value) -> Option<Self> {
        value.as_date()
    }

    fn into_element(self) -> Value {
        Value::Date(self)
    }
}

impl<T: ListElement> DefaultsValue for Vec<T> {
    fn load<S: DefaultsStore + ?Sized>(slot: Slot<'_, S>) -> Option<Self> {
        let elements = slot.store().array(slot.key())?;
        elements.iter().map(T::from_element).collect()
    }

    fn save<S: DefaultsStore + ?Sized>(self, slot: Slot<'_, S>) -> DefaultsResult<()> {
        let elements = self.into_iter().map(ListElement::into_element).collect();
        slot.store().set(slot.key(), Value::Array(elements));
        Ok(())
    }
}

impl<T: ListElement> DefaultValue for Vec<T> {
    fn default_value() -> Self {
        Vec::new()
    }
}

/// Give a `DefaultsValue` type the non-optional key form, using `Default::default()` as its zero
#[macro_export]
macro_rules! impl_default_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::DefaultValue for $ty {
                fn default_value() -> Self {
                    <$ty as ::std::default::Default>::default()
                }
            }
        )+
    };
}
