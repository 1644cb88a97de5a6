//! Adapters that turn a validator into a non-failing extractor or predicate.
//!
//! These are the only places where a validation error is discarded instead of
//! reported. With the `tracing` feature enabled, the discarded error is logged
//! at `debug` level.

use serde_json::Value;

use super::{Outcome, Validator};
use crate::Validation;

/// Path label used when an adapter runs its validator.
pub const ROOT_PATH: &str = ".";

fn run<V: Validator>(validator: &V, value: &Value) -> bool {
    let outcome: Outcome = validator.validate(ROOT_PATH, Some(value));
    match outcome {
        Validation::Success(()) => true,
        Validation::Failure(_error) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                path = _error.path(),
                error = %_error,
                "discarding validation error"
            );
            false
        }
    }
}

/// Extracts values that pass a validator. Created by [`value_of`].
#[derive(Debug, Clone)]
pub struct ValueOf<V> {
    validator: V,
}

/// Wrap `validator` so it returns the value itself on success and `None` on
/// failure.
///
/// ```
/// use serde_json::json;
/// use shapeguard::prelude::*;
///
/// let input = json!("string");
/// let get = value_of(string);
/// assert!(std::ptr::eq(get.get(&input).unwrap(), &input));
/// assert_eq!(get.get(&json!(1)), None);
/// ```
pub fn value_of<V: Validator>(validator: V) -> ValueOf<V> {
    ValueOf { validator }
}

impl<V: Validator> ValueOf<V> {
    /// Return `value` unchanged if it passes, otherwise `None`.
    pub fn get<'a>(&self, value: &'a Value) -> Option<&'a Value> {
        run(&self.validator, value).then_some(value)
    }
}

/// Boolean type check backed by a validator. Created by [`type_of`].
#[derive(Debug, Clone)]
pub struct TypeOf<V> {
    validator: V,
}

/// Wrap `validator` as a predicate: `true` on success, `false` on failure.
///
/// ```
/// use serde_json::json;
/// use shapeguard::prelude::*;
///
/// let is_string = type_of(string);
/// assert!(is_string.check(&json!("string")));
/// assert!(!is_string.check(&json!(1)));
/// ```
pub fn type_of<V: Validator>(validator: V) -> TypeOf<V> {
    TypeOf { validator }
}

impl<V: Validator> TypeOf<V> {
    /// Whether `value` passes the validator.
    pub fn check(&self, value: &Value) -> bool {
        run(&self.validator, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::{array, number, object, string, ObjectValidator};
    use serde_json::json;

    #[test]
    fn test_value_of_returns_same_reference() {
        let input = json!({"a": ["x", "y"]});
        let get = value_of(object(ObjectValidator::new().field("a", array(string))));
        let out = get.get(&input).unwrap();
        assert!(std::ptr::eq(out, &input));
    }

    #[test]
    fn test_value_of_failure_is_none() {
        assert_eq!(value_of(string).get(&json!(1)), None);
        assert_eq!(value_of(array(number)).get(&json!([1, "2"])), None);
    }

    #[test]
    fn test_type_of() {
        assert!(type_of(string).check(&json!("string")));
        assert!(!type_of(string).check(&json!(1)));
        assert!(type_of(array(number)).check(&json!([])));
    }

    #[test]
    fn test_adapters_agree() {
        let shape = object(ObjectValidator::new().field("id", number));
        let get = value_of(shape.clone());
        let is = type_of(shape);
        for input in [json!({"id": 1}), json!({"id": "1"}), json!(null), json!([])] {
            assert_eq!(is.check(&input), get.get(&input).is_some());
        }
    }

    #[cfg(feature = "tracing")]
    #[tracing_test::traced_test]
    #[test]
    fn test_discarded_error_is_logged() {
        assert!(!type_of(array(number)).check(&json!([1, "2"])));
        assert!(logs_contain("discarding validation error"));
        assert!(logs_contain(".[1] is not number: \"2\""));
    }
}
