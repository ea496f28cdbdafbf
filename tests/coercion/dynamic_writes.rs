//! Writes through `DynamicValue` and JSON

use crate::common::*;
use serde_json::json;

#[test]
fn each_variant_lands_in_matching_slot_kind() {
    let defaults = local();
    defaults.set_dynamic("s", DynamicValue::String("x".into()));
    defaults.set_dynamic("i", DynamicValue::Integer(3));
    defaults.set_dynamic("d", DynamicValue::Double(0.5));
    defaults.set_dynamic("b", DynamicValue::Bool(false));
    defaults.set_dynamic("o", DynamicValue::Object(list(["a"])));

    let store = defaults.store();
    assert_eq!(store.get("s"), Some(Value::from("x")));
    assert_eq!(store.number("i"), Some(Number::Int(3)));
    assert_eq!(store.number("d"), Some(Number::Float(0.5)));
    assert_eq!(store.number("b"), Some(Number::Bool(false)));
    assert_eq!(store.array("o").map(|a| a.len()), Some(1));
}

#[test]
fn absent_removes() {
    let defaults = local();
    defaults.set_dynamic("k", DynamicValue::Integer(1));
    defaults.set_dynamic("k", DynamicValue::Absent);
    assert!(!defaults.proxy("k").exists());
}

#[test]
fn json_document_becomes_dictionary() {
    let defaults = local();
    defaults
        .set_json("profile", json!({ "name": "lin", "langs": ["rust", "c"], "age": 30 }))
        .unwrap();
    let profile = defaults.proxy("profile").dictionary_value();
    assert_eq!(profile.get("name"), Some(&Value::from("lin")));
    assert_eq!(profile.get("age"), Some(&Value::from(30i64)));
    assert_eq!(profile.get("langs"), Some(&list(["rust", "c"])));
}

#[test]
fn json_null_inside_container_is_a_contract_violation() {
    let defaults = local();
    defaults.proxy("k").set(5i64);
    let err = defaults.set_json("k", json!([1, null])).unwrap_err();
    assert!(err.is_programming_error());
    // the previous value is untouched
    assert_eq!(defaults.proxy("k").int(), Some(5));
}

#[test]
#[should_panic]
fn json_null_panics_under_panic_policy() {
    let config = DefaultsConfig::default().with_contract_violation(ViolationPolicy::Panic);
    let defaults = Defaults::with_config(LocalStore::new(), config);
    let _ = defaults.set_json("k", json!({ "a": null }));
}

#[test]
fn json_scalars() {
    let defaults = local();
    defaults.set_json("flag", json!(true)).unwrap();
    defaults.set_json("big", json!(u64::MAX)).unwrap();
    assert_eq!(defaults.proxy("flag").number(), Some(Number::Bool(true)));
    assert_eq!(defaults.proxy("big").double(), Some(u64::MAX as f64));
}
