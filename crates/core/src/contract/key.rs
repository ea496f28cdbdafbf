//! Typed key descriptor
//!
//! A `DefaultsKey<T>` pairs a store key name with the static type of the
//! value living under it. The type is a phantom: nothing about `T` is stored,
//! it only selects which accessor the facade uses.
//!
//! ## Identity
//!
//! Two keys with the same name address the same slot, whatever their `T`.
//! Nothing checks that the declarations agree; that is the declaring code's
//! responsibility.

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Statically-typed handle to one slot of a backing store
///
/// Usually declared once as a constant:
///
/// ```
/// use defaults_core::DefaultsKey;
///
/// const RETRY_COUNT: DefaultsKey<i64> = DefaultsKey::new("retry_count");
/// const LAST_USER: DefaultsKey<Option<String>> = DefaultsKey::new("last_user");
/// ```
pub struct DefaultsKey<T> {
    name: Cow<'static, str>,
    // fn() -> T keeps the key Send + Sync for any T
    _value: PhantomData<fn() -> T>,
}

impl<T> DefaultsKey<T> {
    /// Declare a key with a static name (usable in `const` context)
    pub const fn new(name: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            _value: PhantomData,
        }
    }

    /// Declare a key whose name is only known at runtime
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            _value: PhantomData,
        }
    }

    /// Name of the slot in the backing store
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Same slot, read and written as `Option<T>`
    pub fn optional(&self) -> DefaultsKey<Option<T>> {
        DefaultsKey {
            name: self.name.clone(),
            _value: PhantomData,
        }
    }

    /// Same slot, viewed as another value type
    pub fn retyped<U>(&self) -> DefaultsKey<U> {
        DefaultsKey {
            name: self.name.clone(),
            _value: PhantomData,
        }
    }
}

impl<T> Clone for DefaultsKey<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            _value: PhantomData,
        }
    }
}

impl<T> fmt::Debug for DefaultsKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultsKey")
            .field("name", &self.name)
            .field("type", &std::any::type_name::<T>())
            .finish()
    }
}

impl<T> fmt::Display for DefaultsKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl<T> PartialEq for DefaultsKey<T> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<T> Eq for DefaultsKey<T> {}

impl<T> Hash for DefaultsKey<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl<T> AsRef<str> for DefaultsKey<T> {
    fn as_ref(&self) -> &str {
        &self.name
    }
}
