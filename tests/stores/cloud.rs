//! Cloud store: quotas under the facade

use crate::common::*;
use keyed_defaults::{CloudQuota, QuotaViolation};

const NOTE: DefaultsKey<String> = DefaultsKey::new("note");

fn tight() -> CloudQuota {
    CloudQuota {
        max_keys: 3,
        max_key_bytes: 16,
        max_total_bytes: 64,
    }
}

#[test]
fn over_quota_write_keeps_previous_value() {
    let defaults = cloud(tight());
    defaults.set(&NOTE, "short".to_string()).unwrap();
    // the facade write succeeds from the caller's view; the store drops it
    defaults.set(&NOTE, "y".repeat(100)).unwrap();
    assert_eq!(defaults.get(&NOTE), "short");
    assert_eq!(defaults.store().quota_violations(), 1);
}

#[test]
fn key_limit_applies_to_new_keys_only() {
    let defaults = cloud(tight());
    for i in 0..3i64 {
        defaults.proxy(format!("k{i}")).set(i);
    }
    defaults.proxy("k3").set(3i64);
    assert!(!defaults.proxy("k3").exists());
    defaults.proxy("k0").set(10i64);
    assert_eq!(defaults.proxy("k0").int_value(), 10);
}

#[test]
fn try_set_reports_violation() {
    let store = CloudStore::with_quota(tight());
    let err = store
        .try_set("a-very-long-key-name", Value::from(1i64))
        .unwrap_err();
    assert!(matches!(err, QuotaViolation::KeyTooLong { .. }));
}

#[test]
fn cloud_and_local_are_independent() {
    let local = local();
    let cloud = cloud(CloudQuota::default());
    cloud.set(&NOTE, "synced".to_string()).unwrap();
    assert!(!local.exists(&NOTE));
    assert_eq!(cloud.get(&NOTE), "synced");
}

#[test]
fn clear_frees_quota() {
    let defaults = cloud(tight());
    defaults.set(&NOTE, "x".repeat(50)).unwrap();
    defaults.clear();
    assert_eq!(defaults.store().used_bytes(), 0);
    defaults.set(&NOTE, "z".repeat(50)).unwrap();
    assert_eq!(defaults.get(&NOTE).len(), 50);
}

#[test]
fn dropped_write_is_visible_through_try_set() {
    let defaults = cloud(tight());
    let key = DefaultsKey::<String>::new("a-very-long-key-name");
    defaults.set(&key, "kept?".to_string()).unwrap();
    assert!(!defaults.exists(&key));
    assert_eq!(defaults.store().quota_violations(), 1);

    let err = defaults
        .store()
        .try_set(key.name(), Value::from("kept?"))
        .unwrap_err();
    assert!(matches!(err, QuotaViolation::KeyTooLong { length: 20, max: 16 }));
    assert_eq!(defaults.store().quota_violations(), 1);
}
