use std::cell::Cell;

use proptest::{prop_assert, prop_assert_eq, proptest};

use super::Expected;

#[test]
fn value_arm() {
    let expected: Expected<i32, String> = Expected::Value(4);

    assert!(expected.has_value());
    assert!(!expected.has_error());
    assert_eq!(*expected.value(), 4);
    assert_eq!(expected.as_error(), None);
}

#[test]
fn error_arm() {
    let expected: Expected<i32, String> = Expected::Error("bad".to_string());

    assert!(expected.has_error());
    assert!(!expected.has_value());
    assert_eq!(expected.error(), "bad");
    assert_eq!(expected.as_value(), None);
}

#[test]
#[should_panic(expected = "on an `Error` value")]
fn value_of_error_panics() {
    let expected: Expected<i32, &str> = Expected::Error("bad");
    let _ = expected.value();
}

#[test]
#[should_panic(expected = "on a `Value` value")]
fn error_of_value_panics() {
    let expected: Expected<i32, &str> = Expected::Value(1);
    let _ = expected.error();
}

#[test]
fn value_or_falls_back_on_error() {
    assert_eq!(Expected::<i32, &str>::Value(3).value_or(7), 3);
    assert_eq!(Expected::<i32, &str>::Error("bad").value_or(7), 7);
}

#[test]
fn transform_skips_error_arm() {
    let called = Cell::new(false);
    let expected: Expected<i32, &str> = Expected::Error("bad");

    let transformed = expected.transform(|value| {
        called.set(true);
        value.to_string()
    });

    assert!(!called.get());
    assert_eq!(transformed, Expected::Error("bad"));
}

#[test]
fn transform_by_reference() {
    let expected: Expected<Vec<i32>, &str> = Expected::Value(vec![1, 2, 3]);
    let length = expected.as_ref().transform(Vec::len);

    assert_eq!(length, Expected::Value(3));
    assert_eq!(expected.value(), &vec![1, 2, 3]);
}

#[test]
fn question_mark_through_result() {
    fn double(expected: Expected<i32, &'static str>) -> Result<i32, &'static str> {
        let value = expected.into_result()?;
        Ok(value * 2)
    }

    assert_eq!(double(Expected::Value(21)), Ok(42));
    assert_eq!(double(Expected::Error("bad")), Err("bad"));
}

proptest! {
    #[test]
    fn result_conversion_preserves_arm(value in proptest::num::i64::ANY, is_ok in proptest::bool::ANY) {
        let result: Result<i64, i64> = if is_ok { Ok(value) } else { Err(value) };
        let expected = Expected::from(result);

        prop_assert_eq!(expected.has_value(), is_ok);
        prop_assert_eq!(Result::from(expected), result);
    }

    #[test]
    fn transform_applies_to_value(value in proptest::num::i32::ANY) {
        let expected: Expected<i32, ()> = Expected::Value(value);
        let transformed = expected.transform(i64::from);

        prop_assert!(transformed.has_value());
        prop_assert_eq!(*transformed.value(), i64::from(value));
    }
}
