//! Variant validators: unions and the `null` / absent shorthands.
//!
//! A variant collapses its alternatives' failures into one leaf error whose
//! cause is their flattened causes joined with `" | "`. Nested error trees of
//! failed alternatives are not kept.

use serde_json::Value;

use super::{BoxedValidator, Outcome, Validator};
use crate::{Validation, ValidationError};

/// Validator for "any one of" several alternatives. Created by [`union`] or
/// [`union!`](crate::union!).
#[derive(Debug, Clone)]
pub struct Union {
    alternatives: Vec<BoxedValidator>,
}

/// Accept a value that passes at least one of `alternatives`.
///
/// Alternatives are tried in order and the first success wins; the rest are not
/// run. Overlapping alternatives are therefore resolved purely by order. A union
/// with no alternatives accepts nothing and reports `never`.
///
/// ```
/// use serde_json::json;
/// use shapeguard::prelude::*;
///
/// let id = union([string.boxed(), number.boxed()]);
/// assert!(id.validate_value("root", &json!(7)).is_success());
/// assert_eq!(
///     id.validate_value("root", &json!(true)).err().unwrap().to_string(),
///     "root is not string | number: true"
/// );
/// ```
pub fn union<I>(alternatives: I) -> Union
where
    I: IntoIterator<Item = BoxedValidator>,
{
    Union {
        alternatives: alternatives.into_iter().collect(),
    }
}

impl Union {
    /// Number of alternatives.
    pub fn len(&self) -> usize {
        self.alternatives.len()
    }

    /// Whether the union has no alternatives.
    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }
}

impl Validator for Union {
    fn validate(&self, path: &str, value: Option<&Value>) -> Outcome {
        let mut causes = Vec::with_capacity(self.alternatives.len());
        for alternative in &self.alternatives {
            match alternative.validate(path, value) {
                Validation::Success(()) => return Validation::success(()),
                Validation::Failure(error) => causes.push(error.cause().expected().to_string()),
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(path, alternatives = causes.len(), "no union alternative matched");

        let expected = if causes.is_empty() {
            "never".to_string()
        } else {
            causes.join(" | ")
        };
        Validation::failure(ValidationError::mismatch(path, expected, value))
    }
}

/// Validator that also accepts `null`. Created by [`null_or`].
#[derive(Debug, Clone)]
pub struct NullOr<V> {
    inner: V,
}

/// Accept a present `null`, or a value that passes `inner`.
///
/// `null` is checked first. When `inner` fails, the error is a leaf at the same
/// path with cause `"<inner cause> | null"`.
///
/// ```
/// use serde_json::json;
/// use shapeguard::prelude::*;
///
/// let name = null_or(string);
/// assert!(name.validate_value("root", &json!(null)).is_success());
/// assert_eq!(
///     name.validate_value("root", &json!(0)).err().unwrap().to_string(),
///     "root is not string | null: 0"
/// );
/// ```
pub fn null_or<V: Validator>(inner: V) -> NullOr<V> {
    NullOr { inner }
}

impl<V: Validator> Validator for NullOr<V> {
    fn validate(&self, path: &str, value: Option<&Value>) -> Outcome {
        if matches!(value, Some(Value::Null)) {
            return Validation::success(());
        }
        self.inner
            .validate(path, value)
            .map_err(|error| collapse(path, &error, "null", value))
    }
}

/// Validator that also accepts an absent value. Created by [`undefined_or`].
#[derive(Debug, Clone)]
pub struct UndefinedOr<V> {
    inner: V,
}

/// Accept an absent value, or a value that passes `inner`.
///
/// This is how optional object fields and trailing tuple positions are declared.
/// When `inner` fails, the error is a leaf at the same path with cause
/// `"<inner cause> | undefined"`.
pub fn undefined_or<V: Validator>(inner: V) -> UndefinedOr<V> {
    UndefinedOr { inner }
}

impl<V: Validator> Validator for UndefinedOr<V> {
    fn validate(&self, path: &str, value: Option<&Value>) -> Outcome {
        if value.is_none() {
            return Validation::success(());
        }
        self.inner
            .validate(path, value)
            .map_err(|error| collapse(path, &error, "undefined", value))
    }
}

fn collapse(
    path: &str,
    error: &ValidationError,
    fallback: &str,
    value: Option<&Value>,
) -> ValidationError {
    let expected = format!("{} | {}", error.cause().expected(), fallback);
    ValidationError::mismatch(path, expected, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::{
        array, boolean, literal, nullable, number, object, string, undefinedable, ObjectValidator,
        ValidatorExt,
    };
    use serde_json::json;

    fn message(outcome: Outcome) -> String {
        outcome.err().map(|e| e.to_string()).unwrap_or_default()
    }

    #[test]
    fn test_null_or() {
        let v = null_or(string);
        assert!(v.validate_value("root", &json!("a")).is_success());
        assert!(v.validate_value("root", &json!(null)).is_success());

        assert_eq!(message(v.validate("root", None)), "root is not string | null: undefined");
        assert_eq!(message(v.validate_value("root", &json!(0))), "root is not string | null: 0");
        assert_eq!(
            message(v.validate_value("root", &json!(true))),
            "root is not string | null: true"
        );
    }

    #[test]
    fn test_undefined_or() {
        let v = undefined_or(number);
        assert!(v.validate_value("root", &json!(0)).is_success());
        assert!(v.validate("root", None).is_success());

        assert_eq!(
            message(v.validate_value("root", &json!(null))),
            "root is not number | undefined: null"
        );
        assert_eq!(
            message(v.validate_value("root", &json!("a"))),
            "root is not number | undefined: \"a\""
        );
    }

    #[test]
    fn test_null_or_collapses_nested_tree() {
        let v = null_or(object(ObjectValidator::new().field("id", number)));
        let err = v.validate_value("root", &json!({"id": "x"})).err().unwrap();
        assert!(err.is_leaf());
        assert_eq!(err.to_string(), "root is not object | null: {\"id\":\"x\"}");
    }

    #[test]
    fn test_stacked_wrappers() {
        let v = undefined_or(null_or(boolean));
        assert!(v.validate("root", None).is_success());
        assert!(v.validate_value("root", &json!(null)).is_success());
        assert_eq!(
            message(v.validate_value("root", &json!(1))),
            "root is not boolean | null | undefined: 1"
        );
    }

    #[test]
    fn test_union() {
        let v = union([string.boxed(), number.boxed()]);
        assert!(v.validate_value("root", &json!("a")).is_success());
        assert!(v.validate_value("root", &json!(0)).is_success());

        assert_eq!(message(v.validate("root", None)), "root is not string | number: undefined");
        for (input, rendered) in [
            (json!(null), "null"),
            (json!(true), "true"),
            (json!({}), "{}"),
            (json!([]), "[]"),
        ] {
            assert_eq!(
                message(v.validate_value("root", &input)),
                format!("root is not string | number: {}", rendered)
            );
        }
    }

    #[test]
    fn test_union_of_literals() {
        let scheme = union([literal("http").boxed(), literal("https").boxed()]);
        assert!(scheme.validate_value("root", &json!("https")).is_success());
        assert_eq!(
            message(scheme.validate_value("root", &json!("test"))),
            "root is not \"http\" | \"https\": \"test\""
        );
    }

    #[test]
    fn test_union_first_match_short_circuits() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let counting = move |path: &str, value: Option<&Value>| {
            counter.fetch_add(1, Ordering::SeqCst);
            number(path, value)
        };

        let v = union([literal(1).boxed(), literal(1).boxed(), counting.boxed()]);
        assert!(v.validate_value("root", &json!(1)).is_success());
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert!(v.validate_value("root", &json!(2)).is_success());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_union_flattens_compound_causes() {
        let v = union([array(number).boxed(), nullable.boxed(), undefinedable.boxed()]);
        assert!(v.validate("root", None).is_success());
        assert_eq!(
            message(v.validate_value("root", &json!(["x"]))),
            "root is not array | null | undefined: [\"x\"]"
        );
    }

    #[test]
    fn test_empty_union_accepts_nothing() {
        let v = union(Vec::<BoxedValidator>::new());
        assert!(v.is_empty());
        assert_eq!(v.len(), 0);
        assert_eq!(message(v.validate_value("root", &json!(1))), "root is not never: 1");
    }
}
