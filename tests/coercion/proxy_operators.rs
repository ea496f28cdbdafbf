//! set_if_absent, add_int, add_double, increment

use crate::common::*;
use std::sync::Arc;
use std::thread;

#[test]
fn set_if_absent_keeps_existing() {
    let defaults = local();
    let proxy = defaults.proxy("greeting");
    assert!(proxy.set_if_absent(|| "hello".into()));
    assert!(!proxy.set_if_absent(|| "bye".into()));
    assert_eq!(proxy.string_value(), "hello");
}

#[test]
fn set_if_absent_sees_registered_defaults() {
    let defaults = local();
    defaults
        .store()
        .register_defaults([("greeting".to_string(), Value::from("hi"))]);
    assert!(!defaults.proxy("greeting").set_if_absent(|| "hello".into()));
}

#[test]
fn add_int_on_absent_and_mismatched() {
    let defaults = local();
    assert_eq!(defaults.proxy("n").add_int(3), 3);
    assert_eq!(defaults.proxy("n").add_int(-5), -2);

    defaults.store().set_string("s", "seven");
    assert_eq!(defaults.proxy("s").add_int(1), 1);
}

#[test]
fn increment_is_add_one() {
    let defaults = local();
    let proxy = defaults.proxy("launches");
    for expected in 1..=4 {
        assert_eq!(proxy.increment(), expected);
    }
    assert_eq!(defaults.get(&DefaultsKey::<i64>::new("launches")), 4);
}

#[test]
fn add_double_truncates_when_read_as_int() {
    let defaults = local();
    let proxy = defaults.proxy("x");
    proxy.add_double(2.5);
    proxy.add_double(0.25);
    assert_eq!(proxy.double_value(), 2.75);
    assert_eq!(proxy.int_value(), 2);
}

#[test]
fn concurrent_distinct_counters() {
    let defaults = Arc::new(local());
    let handles: Vec<_> = (0..4)
        .map(|t| {
            let defaults = Arc::clone(&defaults);
            thread::spawn(move || {
                let proxy = defaults.proxy(format!("counter.{t}"));
                for _ in 0..50 {
                    proxy.increment();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    for t in 0..4 {
        assert_eq!(defaults.proxy(format!("counter.{t}")).int_value(), 50);
    }
}
