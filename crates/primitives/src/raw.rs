//! Raw-value layer
//!
//! Enumerations persist as their underlying raw scalar, written with the
//! scalar's own setter. Reading loads the scalar and rebuilds the case; a raw
//! value with no matching case, or a stored value of another type, reads as
//! `None`.
//!
//! Raw reads match the stored kind exactly. The lossy `Number` views used by
//! plain typed getters do not apply here, so a stored `Float(3.9)` or
//! `Bool(true)` never rebuilds an `i64`-backed case.

use crate::value::{DefaultsValue, Slot};
use defaults_core::{DefaultsResult, DefaultsStore};

/// Scalar types usable as a raw value
pub trait RawScalar: DefaultsValue + private::Sealed {}

impl RawScalar for String {}
impl RawScalar for i64 {}
impl RawScalar for f64 {}
impl RawScalar for bool {}

mod private {
    use defaults_core::{Number, Value};

    pub trait Sealed: Sized {
        /// Scalar held by `value` when it is stored as exactly this kind
        fn from_stored(value: &Value) -> Option<Self>;
    }

    impl Sealed for String {
        fn from_stored(value: &Value) -> Option<Self> {
            value.as_str().map(str::to_string)
        }
    }

    impl Sealed for i64 {
        fn from_stored(value: &Value) -> Option<Self> {
            match value.as_number()? {
                Number::Int(i) => Some(i),
                _ => None,
            }
        }
    }

    impl Sealed for f64 {
        fn from_stored(value: &Value) -> Option<Self> {
            match value.as_number()? {
                Number::Float(f) => Some(f),
                _ => None,
            }
        }
    }

    impl Sealed for bool {
        fn from_stored(value: &Value) -> Option<Self> {
            match value.as_number()? {
                Number::Bool(b) => Some(b),
                _ => None,
            }
        }
    }
}

/// Type with a lossless mapping to a raw scalar
///
/// ```
/// use defaults_primitives::RawRepresentable;
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// enum Theme { Light = 1, Dark = 2 }
///
/// impl RawRepresentable for Theme {
///     type Raw = i64;
///
///     fn raw_value(&self) -> i64 {
///         *self as i64
///     }
///
///     fn from_raw_value(raw: i64) -> Option<Self> {
///         match raw {
///             1 => Some(Theme::Light),
///             2 => Some(Theme::Dark),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait RawRepresentable: Sized {
    /// Underlying scalar
    type Raw: RawScalar;

    /// Scalar for this case
    fn raw_value(&self) -> Self::Raw;

    /// Case for `raw`, or `None` if no case has that raw value
    fn from_raw_value(raw: Self::Raw) -> Option<Self>;
}

/// Load the slot's scalar and rebuild the case
pub fn load_raw<T, S>(slot: Slot<'_, S>) -> Option<T>
where
    T: RawRepresentable,
    S: DefaultsStore + ?Sized,
{
    let stored = slot.store().get(slot.key())?;
    <T::Raw as private::Sealed>::from_stored(&stored).and_then(T::from_raw_value)
}

/// Store the raw scalar of `value`
pub fn save_raw<T, S>(slot: Slot<'_, S>, value: &T) -> DefaultsResult<()>
where
    T: RawRepresentable,
    S: DefaultsStore + ?Sized,
{
    value.raw_value().save(slot)
}

/// Route `RawRepresentable` types through the raw-value layer
///
/// Use this instead of `impl_archived_defaults!` for enums that are also
/// serializable: the raw scalar is what other readers of the store expect.
#[macro_export]
macro_rules! impl_raw_defaults {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::DefaultsValue for $ty {
                fn load<S: $crate::DefaultsStore + ?Sized>(
                    slot: $crate::Slot<'_, S>,
                ) -> ::std::option::Option<Self> {
                    $crate::raw::load_raw(slot)
                }

                fn save<S: $crate::DefaultsStore + ?Sized>(
                    self,
                    slot: $crate::Slot<'_, S>,
                ) -> $crate::DefaultsResult<()> {
                    $crate::raw::save_raw(slot, &self)
                }
            }
        )+
    };
}
