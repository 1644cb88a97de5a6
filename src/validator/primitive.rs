//! Leaf validators: JSON primitive types and literal values.

use serde_json::Value;

use super::{Outcome, Validator};
use crate::json::{render, strict_eq};
use crate::{Validation, ValidationError};

#[inline]
fn check(path: &str, value: Option<&Value>, ok: bool, expected: &str) -> Outcome {
    if ok {
        Validation::success(())
    } else {
        Validation::failure(ValidationError::mismatch(path, expected, value))
    }
}

/// Accept a JSON string.
pub fn string(path: &str, value: Option<&Value>) -> Outcome {
    check(path, value, matches!(value, Some(Value::String(_))), "string")
}

/// Accept a JSON number, integer or floating point.
pub fn number(path: &str, value: Option<&Value>) -> Outcome {
    check(path, value, matches!(value, Some(Value::Number(_))), "number")
}

/// Accept `true` or `false`.
pub fn boolean(path: &str, value: Option<&Value>) -> Outcome {
    check(path, value, matches!(value, Some(Value::Bool(_))), "boolean")
}

/// Accept exactly a present JSON `null`.
pub fn nullable(path: &str, value: Option<&Value>) -> Outcome {
    check(path, value, matches!(value, Some(Value::Null)), "null")
}

/// Accept exactly an absent value.
///
/// ```
/// use serde_json::json;
/// use shapeguard::prelude::*;
///
/// assert!(undefinedable("root", None).is_success());
/// assert_eq!(
///     undefinedable("root", Some(&json!(null))).err().unwrap().to_string(),
///     "root is not undefined: null"
/// );
/// ```
pub fn undefinedable(path: &str, value: Option<&Value>) -> Outcome {
    check(path, value, value.is_none(), "undefined")
}

/// Validator for one exact value. Created by [`literal`].
#[derive(Debug, Clone)]
pub struct Literal {
    expected: Value,
    rendered: String,
}

/// Accept only values strictly equal to `expected`.
///
/// There is no coercion across types: `literal(1)` rejects `"1"` and `true`.
/// Numbers compare by value, so `literal(1)` accepts `1.0`.
///
/// ```
/// use serde_json::json;
/// use shapeguard::prelude::*;
///
/// let one = literal(1);
/// assert!(one.validate_value("root", &json!(1)).is_success());
/// assert_eq!(
///     one.validate_value("root", &json!("1")).err().unwrap().to_string(),
///     "root is not 1: \"1\""
/// );
/// ```
pub fn literal(expected: impl Into<Value>) -> Literal {
    let expected = expected.into();
    let rendered = render(Some(&expected));
    Literal { expected, rendered }
}

impl Validator for Literal {
    fn validate(&self, path: &str, value: Option<&Value>) -> Outcome {
        let ok = value.is_some_and(|v| strict_eq(v, &self.expected));
        check(path, value, ok, &self.rendered)
    }
}
