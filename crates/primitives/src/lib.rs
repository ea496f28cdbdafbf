//! Primitives layer for keyed-defaults
//!
//! Provides the typed facade over any `DefaultsStore`:
//! - **Defaults**: typed `get`/`set` keyed by `DefaultsKey<T>`
//! - **Proxy**: string-keyed coercion view with safe defaults
//! - **Archival**: serde values stored as blobs
//! - **Raw values**: enums stored as their raw scalar
//!
//! ## Design Principle: Stateless Facades
//!
//! `Defaults` holds only an `Arc` to its store and a copy of its config.
//! All state lives in the store, so any number of facades over the same store
//! see the same data, and cloning a facade is an `Arc` clone.
//!
//! ## Routing
//!
//! The key's value type alone decides the store operation, at compile time:
//!
//! ```
//! use defaults_primitives::{Defaults, DefaultsKey};
//! use defaults_storage::LocalStore;
//!
//! const LAUNCHES: DefaultsKey<i64> = DefaultsKey::new("launches");
//! const NICKNAME: DefaultsKey<Option<String>> = DefaultsKey::new("nickname");
//!
//! let defaults = Defaults::new(LocalStore::new());
//! assert_eq!(defaults.get(&LAUNCHES), 0);
//! assert_eq!(defaults.get(&NICKNAME), None);
//!
//! defaults.set(&LAUNCHES, 1).unwrap();
//! defaults.set(&NICKNAME, Some("ace".to_string())).unwrap();
//! assert_eq!(defaults.get(&LAUNCHES), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod archive;
pub mod config;
pub mod defaults;
pub mod proxy;
pub mod raw;
pub mod shared;
pub mod value;

pub use archive::ArchiveCodec;
pub use config::{DefaultsConfig, ViolationPolicy, CONFIG_FILE_NAME};
pub use defaults::Defaults;
pub use proxy::{DynamicValue, Proxy};
pub use raw::{RawRepresentable, RawScalar};
pub use shared::{cloud_defaults, local_defaults};
pub use value::{DefaultValue, DefaultsValue, KeyValue, ListElement, Slot};

// Re-exported so the routing macros and downstream code need one import path
pub use defaults_core::{
    DateTime, DefaultsError, DefaultsKey, DefaultsResult, DefaultsStore, Number, Url, Utc, Value,
};
