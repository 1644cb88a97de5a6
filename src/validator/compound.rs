//! Compound validators: arrays, objects, and tuples.
//!
//! Each compound validator checks every child even after one has failed. Child
//! failures are accumulated with [`Validation::and`] and reported together as
//! one composite error at the compound's own path.

use serde_json::Value;

use super::{BoxedValidator, Outcome, Validator};
use crate::{NonEmptyVec, Validation, ValidationError};

fn aggregate<I>(path: &str, shape: &'static str, outcomes: I) -> Outcome
where
    I: IntoIterator<Item = Outcome>,
{
    outcomes
        .into_iter()
        .map(|outcome| outcome.map_err(NonEmptyVec::singleton))
        .fold(Validation::success(()), |acc, outcome| {
            acc.and(outcome).map(|_| ())
        })
        .map_err(|errors| {
            #[cfg(feature = "tracing")]
            tracing::trace!(path, shape, failures = errors.len(), "compound validation failed");
            ValidationError::nested(path, shape, errors)
        })
}

/// Validator for arrays whose elements all match one validator. Created by [`array`].
#[derive(Debug, Clone)]
pub struct Array<V> {
    element: V,
}

/// Accept an array whose every element passes `element`.
///
/// Elements are checked at `path[index]`. An empty array always passes.
///
/// ```
/// use serde_json::json;
/// use shapeguard::prelude::*;
///
/// let names = array(string);
/// assert!(names.validate_value("root", &json!([])).is_success());
///
/// let err = names.validate_value("root", &json!(["a", 1, "c"])).err().unwrap();
/// assert_eq!(err.to_string(), "root[1] is not string: 1");
/// ```
pub fn array<V: Validator>(element: V) -> Array<V> {
    Array { element }
}

impl<V: Validator> Validator for Array<V> {
    fn validate(&self, path: &str, value: Option<&Value>) -> Outcome {
        let Some(Value::Array(items)) = value else {
            return Validation::failure(ValidationError::mismatch(path, "array", value));
        };

        aggregate(
            path,
            "array",
            items.iter().enumerate().map(|(index, item)| {
                self.element
                    .validate(&format!("{}[{}]", path, index), Some(item))
            }),
        )
    }
}

/// The declared fields of an object shape, in declaration order.
///
/// Build it once per record shape and reuse it for every validation call.
///
/// ```
/// use shapeguard::prelude::*;
///
/// let fields = ObjectValidator::new()
///     .field("id", number)
///     .field("name", string)
///     .field("email", undefined_or(string));
///
/// assert_eq!(fields.names().collect::<Vec<_>>(), vec!["id", "name", "email"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ObjectValidator {
    fields: Vec<(String, BoxedValidator)>,
}

impl ObjectValidator {
    /// An object shape with no declared fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a field.
    ///
    /// Declaring a name twice replaces the earlier validator and keeps the
    /// earlier position.
    pub fn field<V>(mut self, name: impl Into<String>, validator: V) -> Self
    where
        V: Validator + 'static,
    {
        let name = name.into();
        let validator = BoxedValidator::new(validator);
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = validator,
            None => self.fields.push((name, validator)),
        }
        self
    }

    /// The declared field names, in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no fields are declared.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, BoxedValidator)> for ObjectValidator {
    fn from_iter<I: IntoIterator<Item = (K, BoxedValidator)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(ObjectValidator::new(), |fields, (name, validator)| {
                fields.field(name, validator)
            })
    }
}

/// Validator for JSON objects with declared fields. Created by [`object`].
#[derive(Debug, Clone)]
pub struct Object {
    fields: ObjectValidator,
}

/// Accept a JSON object whose declared fields pass their validators.
///
/// Fields are checked at `path.field` in declaration order. A missing field is
/// passed to its validator as absent, so `undefined_or` fields may be omitted.
/// Keys that are not declared are never inspected.
///
/// ```
/// use serde_json::json;
/// use shapeguard::prelude::*;
///
/// let point = object(ObjectValidator::new().field("x", number).field("y", number));
///
/// assert!(point.validate_value("root", &json!({"x": 1, "y": 2, "z": 3})).is_success());
/// assert_eq!(
///     point.validate_value("root", &json!({"x": 1})).err().unwrap().to_string(),
///     "root.y is not number: undefined"
/// );
/// ```
pub fn object(fields: ObjectValidator) -> Object {
    Object { fields }
}

impl Object {
    /// The declared fields.
    pub fn fields(&self) -> &ObjectValidator {
        &self.fields
    }
}

impl Validator for Object {
    fn validate(&self, path: &str, value: Option<&Value>) -> Outcome {
        let Some(Value::Object(map)) = value else {
            return Validation::failure(ValidationError::mismatch(path, "object", value));
        };

        aggregate(
            path,
            "object",
            self.fields.fields.iter().map(|(name, validator)| {
                validator.validate(&format!("{}.{}", path, name), map.get(name))
            }),
        )
    }
}

/// Validator for fixed-position arrays. Created by [`tuple`] or [`tuple!`](crate::tuple!).
#[derive(Debug, Clone)]
pub struct Tuple {
    positions: Vec<BoxedValidator>,
}

/// Accept an array whose leading positions pass the given validators in order.
///
/// Position `i` is checked at `path[i]`. A position past the end of the input is
/// passed as absent. Elements beyond the declared positions are ignored.
///
/// ```
/// use serde_json::json;
/// use shapeguard::prelude::*;
///
/// let pair = tuple![string, number];
/// assert!(pair.validate_value("root", &json!(["a", 0, "ignored"])).is_success());
/// assert_eq!(
///     pair.validate_value("root", &json!([])).err().unwrap().to_string(),
///     "root[0] is not string: undefined\nroot[1] is not number: undefined"
/// );
/// ```
pub fn tuple<I>(positions: I) -> Tuple
where
    I: IntoIterator<Item = BoxedValidator>,
{
    Tuple {
        positions: positions.into_iter().collect(),
    }
}

impl Tuple {
    /// Number of declared positions.
    pub fn arity(&self) -> usize {
        self.positions.len()
    }
}

impl Validator for Tuple {
    fn validate(&self, path: &str, value: Option<&Value>) -> Outcome {
        let Some(Value::Array(items)) = value else {
            return Validation::failure(ValidationError::mismatch(path, "tuple", value));
        };

        aggregate(
            path,
            "tuple",
            self.positions.iter().enumerate().map(|(index, validator)| {
                validator.validate(&format!("{}[{}]", path, index), items.get(index))
            }),
        )
    }
}
