//! Optional keys: `None` on miss, removal on `None` write

use crate::common::*;
use keyed_defaults::{DateTime, Utc};

const HOMEPAGE: DefaultsKey<Option<Url>> = DefaultsKey::new("homepage");
const LAST_SEEN: DefaultsKey<Option<DateTime<Utc>>> = DefaultsKey::new("last_seen");
const NICKNAME: DefaultsKey<Option<String>> = DefaultsKey::new("nickname");
const RAW: DefaultsKey<Option<Value>> = DefaultsKey::new("raw");

#[test]
fn absent_reads_none() {
    let defaults = local();
    assert_eq!(defaults.get(&HOMEPAGE), None);
    assert_eq!(defaults.get(&LAST_SEEN), None);
    assert_eq!(defaults.get(&NICKNAME), None);
    assert_eq!(defaults.get(&RAW), None);
}

#[test]
fn none_write_removes_key() {
    let defaults = local();
    defaults.set(&NICKNAME, Some("ace".to_string())).unwrap();
    assert!(defaults.exists(&NICKNAME));
    defaults.set(&NICKNAME, None).unwrap();
    assert!(!defaults.exists(&NICKNAME));
    assert!(defaults.store().keys().is_empty());
}

#[test]
fn url_round_trip_and_invalid_string() {
    let defaults = local();
    let url = Url::parse("https://example.com/docs").unwrap();
    defaults.set(&HOMEPAGE, Some(url.clone())).unwrap();
    assert_eq!(defaults.get(&HOMEPAGE), Some(url));

    defaults.store().set_string("homepage", "no scheme here");
    assert_eq!(defaults.get(&HOMEPAGE), None);
}

#[test]
fn date_round_trip() {
    let defaults = local();
    let now = Utc::now();
    defaults.set(&LAST_SEEN, Some(now)).unwrap();
    assert_eq!(defaults.get(&LAST_SEEN), Some(now));
}

#[test]
fn raw_value_slot_sees_any_shape() {
    let defaults = local();
    defaults.store().set_integer("raw", 9);
    assert_eq!(defaults.get(&RAW), Some(Value::from(9i64)));
    defaults.set(&RAW, Some(list(["a", "b"]))).unwrap();
    assert_eq!(defaults.store().array("raw").map(|a| a.len()), Some(2));
}

#[test]
fn optional_of_non_optional_key_agrees() {
    let defaults = local();
    let count = DefaultsKey::<i64>::new("count");
    assert_eq!(defaults.get(&count.optional()), None);
    defaults.set(&count, 0).unwrap();
    assert_eq!(defaults.get(&count.optional()), Some(0));
}
