//! Structural comparison of JSON response bodies.
//!
//! Bodies are decoded into `serde_json::Value` and compared with a dedicated
//! equality instead of the derived `PartialEq`, so the rules are explicit:
//! object key order is ignored, array order is significant, numbers compare
//! by value (`1` equals `1.0`), and values of different JSON types never
//! match (`1` does not equal `"1"`).
use std::cmp::Ordering;

use serde_json::{Map, Number, Value};


/// Decodes a response body that must hold a JSON object at the top level.
///
/// # Errors
///
/// Returns the decoder error when the text is not valid JSON or its root is
/// not an object.
pub fn parse_body(text: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str::<Map<String, Value>>(text).map(Value::Object)
}

#[must_use]
pub fn structurally_equal(expected: &Value, actual: &Value) -> bool {
    match (expected, actual) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(left), Value::Bool(right)) => left == right,
        (Value::Number(left), Value::Number(right)) => numbers_equal(left, right),
        (Value::String(left), Value::String(right)) => left == right,
        (Value::Array(left), Value::Array(right)) => {
            left.len() == right.len()
                && left
                    .iter()
                    .zip(right.iter())
                    .all(|(left, right)| structurally_equal(left, right))
        }
        (Value::Object(left), Value::Object(right)) => {
            left.len() == right.len()
                && left.iter().all(|(key, left)| {
                    right
                        .get(key)
                        .is_some_and(|right| structurally_equal(left, right))
                })
        }
        _ => false,
    }
}

fn numbers_equal(left: &Number, right: &Number) -> bool {
    if let (Some(left), Some(right)) = (left.as_i64(), right.as_i64()) {
        return left == right;
    }
    if let (Some(left), Some(right)) = (left.as_u64(), right.as_u64()) {
        return left == right;
    }
    match (left.as_f64(), right.as_f64()) {
        (Some(left), Some(right)) => left.partial_cmp(&right) == Some(Ordering::Equal),
        _ => false,
    }
}

/// Path of the first difference between two values, `/`-separated.
///
/// The root is reported as `/`. Returns `None` when the values are equal.
#[must_use]
pub fn first_difference(expected: &Value, actual: &Value) -> Option<String> {
    let mut path = Vec::new();
    if find_difference(expected, actual, &mut path) {
        Some(format!("/{}", path.join("/")))
    } else {
        None
    }
}

fn find_difference(expected: &Value, actual: &Value, path: &mut Vec<String>) -> bool {
    match (expected, actual) {
        (Value::Array(left), Value::Array(right)) if left.len() == right.len() => {
            for (index, (left, right)) in left.iter().zip(right.iter()).enumerate() {
                path.push(index.to_string());
                if find_difference(left, right, path) {
                    return true;
                }
                path.pop();
            }
            false
        }
        (Value::Object(left), Value::Object(right)) => {
            for (key, left) in left {
                path.push(key.clone());
                match right.get(key) {
                    Some(right) => {
                        if find_difference(left, right, path) {
                            return true;
                        }
                    }
                    None => return true,
                }
                path.pop();
            }
            if let Some(extra) = right.keys().find(|key| !left.contains_key(*key)) {
                path.push(extra.clone());
                return true;
            }
            false
        }
        _ => !structurally_equal(expected, actual),
    }
}

/// Two-space indented rendering with keys in sorted order.
#[must_use]
pub fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
