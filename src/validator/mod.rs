//! Composable validators for untyped JSON
//!
//! A [`Validator`] takes a path label and a possibly absent value and returns an
//! [`Outcome`]. Success carries nothing. Failure carries a [`ValidationError`]
//! tree. Failure is never signalled by a boolean; callers that want one use
//! [`type_of`].
//!
//! Validators are built once by composition and reused. They hold no state, so
//! a single instance can be shared between fields, calls, and threads.
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use shapeguard::prelude::*;
//!
//! let user = object! {
//!     "name" => string,
//!     "age" => null_or(number),
//!     "tags" => array(string),
//!     "scheme" => union![literal("http"), literal("https")],
//! };
//!
//! let ok = json!({"name": "ada", "age": null, "tags": [], "scheme": "https"});
//! assert!(user.validate_value("root", &ok).is_success());
//!
//! let bad = json!({"name": 1, "age": "x", "tags": ["a", 2], "scheme": "ftp"});
//! let err = user.validate_value("root", &bad).err().unwrap();
//! assert_eq!(
//!     err.to_string(),
//!     [
//!         "root.name is not string: 1",
//!         "root.age is not number | null: \"x\"",
//!         "root.tags[1] is not string: 2",
//!         "root.scheme is not \"http\" | \"https\": \"ftp\"",
//!     ]
//!     .join("\n")
//! );
//! ```
//!
//! # Recursive shapes
//!
//! A plain function can name itself, which is how self-similar data such as
//! trees is described. Validation then descends as deep as the input does, so
//! recursion depth is limited only by the thread stack.
//!
//! ```rust
//! use serde_json::{json, Value};
//! use shapeguard::prelude::*;
//!
//! fn tree(path: &str, value: Option<&Value>) -> Outcome {
//!     union![number, array(tree)].validate(path, value)
//! }
//!
//! assert!(tree.validate_value("root", &json!([1, [2, [3]]])).is_success());
//! assert_eq!(
//!     tree.validate_value("root", &json!([1, "x"])).err().unwrap().to_string(),
//!     "root is not number | array: [1,\"x\"]"
//! );
//! ```

mod adapter;
mod compound;
mod primitive;
mod variant;

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::{Validation, ValidationError};

pub use adapter::{type_of, value_of, TypeOf, ValueOf, ROOT_PATH};
pub use compound::{array, object, tuple, Array, Object, ObjectValidator, Tuple};
pub use primitive::{boolean, literal, nullable, number, string, undefinedable, Literal};
pub use variant::{null_or, undefined_or, union, NullOr, UndefinedOr, Union};

/// The result of running a validator.
pub type Outcome = Validation<(), ValidationError>;

/// A check that a value at a path has a particular shape.
///
/// `None` stands for an absent value: a missing object field, a tuple position
/// past the end of the input, or nothing at all. `Some(&Value::Null)` is a
/// present JSON `null`.
///
/// Any `Fn(&str, Option<&Value>) -> Outcome` is a validator, so plain functions
/// such as [`string`] compose directly.
pub trait Validator: Send + Sync {
    /// Validate `value`, reporting failures relative to `path`.
    fn validate(&self, path: &str, value: Option<&Value>) -> Outcome;
}

impl<F> Validator for F
where
    F: Fn(&str, Option<&Value>) -> Outcome + Send + Sync,
{
    #[inline]
    fn validate(&self, path: &str, value: Option<&Value>) -> Outcome {
        self(path, value)
    }
}

/// A type-erased, cheaply cloneable validator.
///
/// Object fields, tuple positions, and union alternatives usually have
/// different concrete validator types, so they are stored as `BoxedValidator`.
/// Cloning shares the underlying validator.
#[derive(Clone)]
pub struct BoxedValidator(Arc<dyn Validator>);

impl BoxedValidator {
    /// Erase the type of a validator.
    pub fn new<V>(validator: V) -> Self
    where
        V: Validator + 'static,
    {
        BoxedValidator(Arc::new(validator))
    }
}

impl fmt::Debug for BoxedValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BoxedValidator")
            .field(&"<validator>")
            .finish()
    }
}

impl Validator for BoxedValidator {
    #[inline]
    fn validate(&self, path: &str, value: Option<&Value>) -> Outcome {
        self.0.validate(path, value)
    }
}

/// Extension methods available on every validator.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use shapeguard::prelude::*;
///
/// let maybe_count = number.or_null();
/// assert!(maybe_count.validate_value("root", &json!(null)).is_success());
/// assert!(maybe_count.clone().type_of().check(&json!(3)));
/// assert!(!maybe_count.type_of().check(&json!("3")));
/// ```
pub trait ValidatorExt: Validator + Sized {
    /// Validate a present value.
    fn validate_value(&self, path: &str, value: &Value) -> Outcome {
        self.validate(path, Some(value))
    }

    /// Erase the concrete type. See [`BoxedValidator`].
    fn boxed(self) -> BoxedValidator
    where
        Self: 'static,
    {
        BoxedValidator::new(self)
    }

    /// Also accept `null`. Same as [`null_or`].
    fn or_null(self) -> NullOr<Self> {
        null_or(self)
    }

    /// Also accept an absent value. Same as [`undefined_or`].
    fn or_undefined(self) -> UndefinedOr<Self> {
        undefined_or(self)
    }

    /// Convert into a value extractor. Same as [`value_of`].
    fn value_of(self) -> ValueOf<Self> {
        value_of(self)
    }

    /// Convert into a boolean type check. Same as [`type_of`].
    fn type_of(self) -> TypeOf<Self> {
        type_of(self)
    }
}

impl<V: Validator> ValidatorExt for V {}
