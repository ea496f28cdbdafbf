//! keyed-defaults - statically-typed keys over untyped preference stores
//!
//! Declare a key once with its value type, then read and write through it.
//! Absent keys and values of the wrong shape read as the type's zero (or
//! `None` for optional keys); they never error.
//!
//! # Quick Start
//!
//! ```
//! use keyed_defaults::{Defaults, DefaultsKey, LocalStore};
//!
//! const RETRY_COUNT: DefaultsKey<i64> = DefaultsKey::new("retry_count");
//! const THEME: DefaultsKey<Option<String>> = DefaultsKey::new("theme");
//!
//! let defaults = Defaults::new(LocalStore::new());
//! assert_eq!(defaults.get(&RETRY_COUNT), 0);
//!
//! defaults.set(&RETRY_COUNT, 5)?;
//! defaults.set(&THEME, Some("dark".to_string()))?;
//!
//! // callers without a key type go through the coercion proxy
//! assert_eq!(defaults.proxy("retry_count").int_value(), 5);
//! # Ok::<(), keyed_defaults::DefaultsError>(())
//! ```
//!
//! # Architecture
//!
//! - `defaults-core`: stored value model, key descriptor, store capability, errors
//! - `defaults-storage`: in-memory local and cloud stores
//! - `defaults-primitives`: typed facade, proxy, archival and raw-value layers

pub use defaults_primitives::*;
pub use defaults_storage::{CloudQuota, CloudStore, LocalStore, MemoryDomain, QuotaViolation};
pub use defaults_core::UrlError;
