//! Typed lists are all-or-nothing

use crate::common::*;
use keyed_defaults::{DateTime, Utc};
use proptest::prelude::*;

const NAMES: DefaultsKey<Vec<String>> = DefaultsKey::new("names");
const MAYBE_NAMES: DefaultsKey<Option<Vec<String>>> = DefaultsKey::new("names");
const SCORES: DefaultsKey<Vec<i64>> = DefaultsKey::new("scores");
const WEIGHTS: DefaultsKey<Vec<f64>> = DefaultsKey::new("weights");
const FLAGS: DefaultsKey<Vec<bool>> = DefaultsKey::new("flags");
const STAMPS: DefaultsKey<Vec<DateTime<Utc>>> = DefaultsKey::new("stamps");

#[test]
fn one_bad_element_empties_the_list() {
    let defaults = local();
    defaults.store().set(
        "names",
        Value::Array(vec![Value::from("a"), Value::from(2i64), Value::from("c")]),
    );
    assert!(defaults.get(&NAMES).is_empty());
    assert_eq!(defaults.get(&MAYBE_NAMES), None);
}

#[test]
fn homogeneous_list_reads_back() {
    let defaults = local();
    defaults.store().set("names", list(["a", "b", "c"]));
    assert_eq!(defaults.get(&NAMES), vec!["a", "b", "c"]);
}

#[test]
fn empty_list_is_present() {
    let defaults = local();
    defaults.set(&MAYBE_NAMES, Some(Vec::new())).unwrap();
    assert_eq!(defaults.get(&MAYBE_NAMES), Some(Vec::new()));
}

#[test]
fn numeric_lists_convert_between_kinds() {
    let defaults = local();
    defaults.set(&WEIGHTS, vec![1.9, -0.5]).unwrap();
    let as_ints: DefaultsKey<Vec<i64>> = WEIGHTS.retyped();
    assert_eq!(defaults.get(&as_ints), vec![1, 0]);

    defaults.set(&FLAGS, vec![true, false]).unwrap();
    let as_ints: DefaultsKey<Vec<i64>> = FLAGS.retyped();
    assert_eq!(defaults.get(&as_ints), vec![1, 0]);
}

#[test]
fn string_list_is_not_numeric() {
    let defaults = local();
    defaults.store().set("scores", list(["1", "2"]));
    assert!(defaults.get(&SCORES).is_empty());
}

#[test]
fn non_list_value_is_absent() {
    let defaults = local();
    defaults.store().set_string("stamps", "yesterday");
    assert!(defaults.get(&STAMPS).is_empty());
}

proptest! {
    #[test]
    fn prop_string_lists_round_trip(items in prop::collection::vec(".{0,12}", 0..20)) {
        let defaults = local();
        defaults.set(&NAMES, items.clone()).unwrap();
        prop_assert_eq!(defaults.get(&NAMES), items);
    }

    #[test]
    fn prop_any_foreign_element_empties(
        items in prop::collection::vec("[a-z]{1,4}", 1..10),
        position in any::<prop::sample::Index>(),
        intruder in any::<i64>(),
    ) {
        let defaults = local();
        let mut stored: Vec<Value> = items.into_iter().map(Value::from).collect();
        let at = position.index(stored.len());
        stored[at] = Value::from(intruder);
        defaults.store().set("names", Value::Array(stored));
        prop_assert!(defaults.get(&NAMES).is_empty());
    }
}
