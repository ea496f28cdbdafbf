//! Process-wide facades
//!
//! One lazily-created facade per persistence domain, for code that has no
//! facade threaded through to it. Both use the default config.

use crate::defaults::Defaults;
use defaults_storage::{CloudStore, LocalStore};
use once_cell::sync::Lazy;

static LOCAL: Lazy<Defaults<LocalStore>> = Lazy::new(|| Defaults::new(LocalStore::new()));

static CLOUD: Lazy<Defaults<CloudStore>> = Lazy::new(|| Defaults::new(CloudStore::new()));

/// Shared facade over the process-local store
pub fn local_defaults() -> &'static Defaults<LocalStore> {
    &LOCAL
}

/// Shared facade over the cloud mirror store
///
/// Writes over the default quota are dropped by the store while `set` still
/// returns `Ok`; see [`CloudStore::try_set`].
pub fn cloud_defaults() -> &'static Defaults<CloudStore> {
    &CLOUD
}
