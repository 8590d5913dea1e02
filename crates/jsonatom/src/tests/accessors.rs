use crate::{Value, ValueKind, parse};

#[test]
fn default_is_null() {
    assert_eq!(Value::default(), Value::Null);
    assert!(Value::default().is_null());
}

#[test]
fn set_and_get_boolean() {
    let mut v = Value::default();
    v.set_bool(true);
    assert_eq!(v.kind(), ValueKind::True);
    assert!(v.as_bool());

    v.set_bool(false);
    assert_eq!(v.kind(), ValueKind::False);
    assert!(!v.as_bool());
    assert!(v.is_bool());
}

#[test]
fn set_and_get_number() {
    let mut v = Value::default();
    v.set_number(3.25);
    assert_eq!(v.kind(), ValueKind::Number);
    assert_eq!(v.as_number(), 3.25);
}

#[test]
fn set_and_get_string() {
    let mut v = Value::default();
    v.set_string(b"hello");
    assert_eq!(v.kind(), ValueKind::String);
    assert_eq!(v.as_bytes(), "hello");
}

#[test]
fn set_string_copies_independently_of_the_source() {
    let mut v = Value::default();
    {
        let source = alloc::vec![b'x', b'y', b'z'];
        v.set_string(&source);
        // `source` drops here; the value keeps its own storage.
    }
    assert_eq!(v.as_bytes(), "xyz");
}

#[test]
fn set_string_twice_replaces_the_first_payload() {
    let mut v = Value::default();
    v.set_string(b"first allocation");
    v.set_string(b"second");
    assert_eq!(v.as_bytes(), "second");
}

#[test]
fn embedded_nuls_are_ordinary_bytes() {
    let mut v = Value::default();
    v.set_string(b"Hello\0World");
    assert_eq!(v.as_bytes().len(), 11);
    assert_eq!(v.as_bytes(), &b"Hello\0World"[..]);
}

#[test]
fn setters_release_prior_payload_on_repurpose() {
    // String -> boolean -> number: each overwrite drops what came before.
    let mut v = parse(b"\"owned heap bytes\"").unwrap();
    v.set_bool(true);
    assert!(v.as_bool());
    v.set_number(0.5);
    assert_eq!(v.as_number(), 0.5);
    v.set_null();
    assert!(v.is_null());
}

#[test]
fn from_conversions() {
    assert_eq!(Value::from(true), Value::True);
    assert_eq!(Value::from(false), Value::False);
    assert_eq!(Value::from(2.0), Value::Number(2.0));
    assert_eq!(Value::from(&b"bytes"[..]).as_bytes(), "bytes");
}

#[test]
#[should_panic(expected = "as_bool on a Null value")]
fn as_bool_on_wrong_tag_panics() {
    let _ = Value::Null.as_bool();
}

#[test]
#[should_panic(expected = "as_number on a True value")]
fn as_number_on_wrong_tag_panics() {
    let _ = Value::True.as_number();
}

#[test]
#[should_panic(expected = "as_bytes on a Number value")]
fn as_bytes_on_wrong_tag_panics() {
    let _ = Value::Number(1.0).as_bytes();
}
