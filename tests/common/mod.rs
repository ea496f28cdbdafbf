//! Shared test utilities for all integration test suites.
//!
//! Import via `mod common;` from any test's main.rs.

#![allow(dead_code)]
#![allow(unused_imports)]

use std::sync::Once;

pub use keyed_defaults::{
    CloudQuota, CloudStore, Defaults, DefaultsConfig, DefaultsError, DefaultsKey, DefaultsStore,
    DynamicValue, LocalStore, Number, Url, Value, ViolationPolicy,
};

static INIT_TRACING: Once = Once::new();

/// Route `tracing` output through the test harness so it shows on failure.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

/// Facade over a fresh local store, contract violations returned as errors.
pub fn local() -> Defaults<LocalStore> {
    init_tracing();
    Defaults::with_config(LocalStore::new(), erroring_config())
}

/// Facade over a fresh cloud store with `quota`.
pub fn cloud(quota: CloudQuota) -> Defaults<CloudStore> {
    init_tracing();
    Defaults::with_config(CloudStore::with_quota(quota), erroring_config())
}

/// Config that returns contract violations instead of panicking.
pub fn erroring_config() -> DefaultsConfig {
    DefaultsConfig::default().with_contract_violation(ViolationPolicy::Error)
}

/// Build a stored list from anything convertible to `Value`.
pub fn list<I, T>(items: I) -> Value
where
    I: IntoIterator<Item = T>,
    T: Into<Value>,
{
    Value::Array(items.into_iter().map(Into::into).collect())
}
