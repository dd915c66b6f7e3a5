//! Structural dispatch over heterogeneous values.
//!
//! Rules are tried top to bottom and the first match wins, so an integer
//! never reaches the list or person arms.

use std::fmt;

use itertools::Itertools;
use serde_json::{Number, Value};

#[derive(Debug, Clone, PartialEq)]
pub enum Classification<'a> {
    PositiveInteger(&'a Number),
    NegativeInteger(&'a Number),
    Zero,
    Text(&'a str),
    List {
        first: &'a Value,
        second: &'a Value,
        rest: &'a [Value],
    },
    Person {
        name: &'a Value,
        age: &'a Value,
    },
    Unknown,
}

pub fn classify(value: &Value) -> Classification<'_> {
    match value {
        Value::Number(n) if is_positive_integer(n) => Classification::PositiveInteger(n),
        Value::Number(n) if n.as_i64().is_some_and(|x| x < 0) => Classification::NegativeInteger(n),
        Value::Number(n) if n.as_f64() == Some(0.0) => Classification::Zero,
        Value::String(s) => Classification::Text(s),
        Value::Array(items) => match items.as_slice() {
            [first, second, rest @ ..] => Classification::List {
                first,
                second,
                rest,
            },
            _ => Classification::Unknown,
        },
        Value::Object(map) if map.len() == 2 => match (map.get("name"), map.get("age")) {
            (Some(name), Some(age)) => Classification::Person { name, age },
            _ => Classification::Unknown,
        },
        _ => Classification::Unknown,
    }
}

/// Classifies `value` and renders the result.
pub fn describe(value: &Value) -> String {
    classify(value).to_string()
}

fn is_positive_integer(n: &Number) -> bool {
    match (n.as_i64(), n.as_u64()) {
        (Some(x), _) => x > 0,
        (None, Some(_)) => true,
        _ => false,
    }
}

// Person fields print strings bare; list elements always print as JSON.
fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl fmt::Display for Classification<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::PositiveInteger(n) => write!(f, "Positive integer: {}", n),
            Classification::NegativeInteger(n) => write!(f, "Negative integer: {}", n),
            Classification::Zero => write!(f, "Zero"),
            Classification::Text(s) => write!(f, "String: {}", s),
            Classification::List {
                first,
                second,
                rest,
            } => write!(
                f,
                "List with at least 2 elements: {}, {}, rest: [{}]",
                first,
                second,
                rest.iter().join(", ")
            ),
            Classification::Person { name, age } => {
                write!(f, "Person dict: {}, {} years old", plain(name), plain(age))
            }
            Classification::Unknown => write!(f, "Unknown pattern"),
        }
    }
}

/// The inputs printed by the feature tour.
pub fn sample_inputs() -> Vec<Value> {
    vec![
        Value::from(42),
        Value::from(-5),
        Value::from(0),
        Value::from("hello"),
        serde_json::json!([1, 2, 3, 4]),
        serde_json::json!({"name": "Alice", "age": 30}),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sample_inputs() {
        let described: Vec<String> = sample_inputs().iter().map(describe).collect();
        assert_eq!(
            described,
            vec![
                "Positive integer: 42",
                "Negative integer: -5",
                "Zero",
                "String: hello",
                "List with at least 2 elements: 1, 2, rest: [3, 4]",
                "Person dict: Alice, 30 years old",
            ]
        );
    }

    #[test]
    fn test_list_binds_first_second_and_rest() {
        let value = json!([1, 2, 3, 4]);
        match classify(&value) {
            Classification::List {
                first,
                second,
                rest,
            } => {
                assert_eq!(first, &json!(1));
                assert_eq!(second, &json!(2));
                assert_eq!(rest, &[json!(3), json!(4)][..]);
            }
            other => panic!("expected list, got {:?}", other),
        }
    }

    #[test]
    fn test_two_element_list_has_empty_rest() {
        assert_eq!(
            describe(&json!(["a", "b"])),
            r#"List with at least 2 elements: "a", "b", rest: []"#
        );
    }

    #[test]
    fn test_list_elements_render_alike() {
        assert_eq!(
            describe(&json!(["a", "b", "c"])),
            r#"List with at least 2 elements: "a", "b", rest: ["c"]"#
        );
        assert_eq!(
            describe(&json!([[1], null, true])),
            "List with at least 2 elements: [1], null, rest: [true]"
        );
    }

    #[test]
    fn test_short_lists_are_unknown() {
        assert_eq!(classify(&json!([])), Classification::Unknown);
        assert_eq!(classify(&json!([1])), Classification::Unknown);
    }

    #[test]
    fn test_person_requires_exactly_name_and_age() {
        assert_eq!(describe(&json!({"name": "Bob", "age": 7})), "Person dict: Bob, 7 years old");
        assert_eq!(classify(&json!({"name": "Bob"})), Classification::Unknown);
        assert_eq!(
            classify(&json!({"name": "Bob", "age": 7, "city": "Oslo"})),
            Classification::Unknown
        );
        assert_eq!(classify(&json!({"first": 1, "age": 7})), Classification::Unknown);
    }

    #[test]
    fn test_large_unsigned_is_positive() {
        let value = json!(u64::MAX);
        assert!(matches!(classify(&value), Classification::PositiveInteger(_)));
    }

    #[test]
    fn test_float_zero_is_zero_but_other_floats_are_unknown() {
        assert_eq!(classify(&json!(0.0)), Classification::Zero);
        assert_eq!(classify(&json!(1.5)), Classification::Unknown);
        assert_eq!(classify(&json!(-2.5)), Classification::Unknown);
    }

    #[test]
    fn test_other_values_fall_through() {
        assert_eq!(describe(&Value::Null), "Unknown pattern");
        assert_eq!(describe(&json!(true)), "Unknown pattern");
        assert_eq!(describe(&json!(false)), "Unknown pattern");
    }
}
