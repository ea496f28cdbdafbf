//! Core types and traits for keyed-defaults
//!
//! This crate defines the foundational types used throughout the system:
//! - Value / Number: the untyped stored-value model shared by every store
//! - DefaultsKey: phantom-typed key descriptor
//! - Url: validated absolute URL stored as a string
//! - DefaultsStore: the capability a backing store must provide
//! - Error: DefaultsError / DefaultsResult

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod contract;
pub mod error;
pub mod traits;
pub mod value;

pub use contract::{DefaultsKey, Url, UrlError};
pub use error::{DefaultsError, DefaultsResult};
pub use traits::DefaultsStore;
pub use value::{Number, Value};

/// Re-exported so downstream crates name the same date type the store uses
pub use chrono::{DateTime, Utc};
