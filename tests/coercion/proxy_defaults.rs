//! Proxy reads agree with typed reads

use crate::common::*;
use std::collections::HashMap;

fn seeded() -> Defaults<LocalStore> {
    let defaults = local();
    let store = defaults.store();
    store.set_string("s", "text");
    store.set_integer("i", 42);
    store.set_double("d", 1.5);
    store.set_bool("b", true);
    store.set_data("blob", vec![7, 8]);
    store.set("list", list([1i64, 2]));
    defaults
}

#[test]
fn defaulting_views_match_typed_defaults() {
    let defaults = seeded();
    for key in ["s", "i", "d", "b", "blob", "list", "missing"] {
        let proxy = defaults.proxy(key);
        assert_eq!(proxy.string_value(), defaults.get(&DefaultsKey::<String>::new(key)));
        assert_eq!(proxy.int_value(), defaults.get(&DefaultsKey::<i64>::new(key)));
        assert_eq!(proxy.double_value(), defaults.get(&DefaultsKey::<f64>::new(key)));
        assert_eq!(proxy.bool_value(), defaults.get(&DefaultsKey::<bool>::new(key)));
        assert_eq!(proxy.data_value(), defaults.get(&DefaultsKey::<Vec<u8>>::new(key)));
        assert_eq!(proxy.array_value(), defaults.get(&DefaultsKey::<Vec<Value>>::new(key)));
        assert_eq!(
            proxy.dictionary_value(),
            defaults.get(&DefaultsKey::<HashMap<String, Value>>::new(key))
        );
        assert_eq!(proxy.number_value(), defaults.get(&DefaultsKey::<Number>::new(key)));
    }
}

#[test]
fn optional_views_match_typed_optionals() {
    let defaults = seeded();
    for key in ["s", "i", "d", "b", "blob", "list", "missing"] {
        let proxy = defaults.proxy(key);
        assert_eq!(proxy.string(), defaults.get(&DefaultsKey::<Option<String>>::new(key)));
        assert_eq!(proxy.int(), defaults.get(&DefaultsKey::<Option<i64>>::new(key)));
        assert_eq!(proxy.url(), defaults.get(&DefaultsKey::<Option<Url>>::new(key)));
        assert_eq!(proxy.object(), defaults.get(&DefaultsKey::<Option<Value>>::new(key)));
    }
}

#[test]
fn missing_key_zeroes() {
    let defaults = local();
    let proxy = defaults.proxy("nothing");
    assert_eq!(proxy.object(), None);
    assert_eq!(proxy.string_value(), "");
    assert_eq!(proxy.int_value(), 0);
    assert_eq!(proxy.double_value(), 0.0);
    assert!(!proxy.bool_value());
    assert_eq!(proxy.number_value(), Number::Int(0));
    assert_eq!(proxy.date(), None);
}

#[test]
fn integer_reads_as_bool_and_double() {
    let defaults = seeded();
    let proxy = defaults.proxy("i");
    assert_eq!(proxy.double(), Some(42.0));
    assert_eq!(proxy.bool(), Some(true));
    assert_eq!(proxy.string(), None);
}
