//! JSON helpers shared by the validators: rendering offending values and
//! strict equality for literals.

use serde_json::{Number, Value};

/// Render a possibly absent value the way it appears in error messages.
///
/// Present values render as compact JSON; absence renders as `undefined`.
///
/// ```
/// use serde_json::json;
/// use shapeguard::json::render;
///
/// assert_eq!(render(Some(&json!("a"))), "\"a\"");
/// assert_eq!(render(Some(&json!({"a": [1, null]}))), "{\"a\":[1,null]}");
/// assert_eq!(render(None), "undefined");
/// ```
pub fn render(value: Option<&Value>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => "undefined".to_string(),
    }
}

/// Strict equality without cross-type coercion.
///
/// Numbers compare by numeric value, so `1` equals `1.0`. Arrays and objects
/// compare element by element with the same rule. Object key order does not
/// matter.
///
/// ```
/// use serde_json::json;
/// use shapeguard::json::strict_eq;
///
/// assert!(strict_eq(&json!(1), &json!(1.0)));
/// assert!(!strict_eq(&json!(1), &json!("1")));
/// assert!(!strict_eq(&json!(true), &json!(1)));
/// ```
pub fn strict_eq(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => number_eq(a, b),
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| strict_eq(x, y))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(key, x)| b.get(key).is_some_and(|y| strict_eq(x, y)))
        }
        _ => left == right,
    }
}

fn number_eq(a: &Number, b: &Number) -> bool {
    if a.is_f64() || b.is_f64() {
        a.as_f64() == b.as_f64()
    } else {
        a == b
    }
}
