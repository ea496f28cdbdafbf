//! Contract types for the public API
//!
//! These types define what application code hands to the facade:
//!
//! - `key`: phantom-typed key descriptor (`DefaultsKey<T>`)
//! - `url`: validated absolute URL (`Url`)
//!
//! ## Usage
//!
//! ```
//! use defaults_core::contract::{DefaultsKey, Url};
//!
//! const HOMEPAGE: DefaultsKey<Option<Url>> = DefaultsKey::new("homepage");
//! assert_eq!(HOMEPAGE.name(), "homepage");
//! ```

pub mod key;
pub mod url;

// Re-exports
pub use key::DefaultsKey;
pub use url::{Url, UrlError};
