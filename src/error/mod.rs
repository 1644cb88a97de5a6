//! Path-annotated validation errors
//!
//! A [`ValidationError`] is a node in a failure tree. A leaf describes one direct
//! mismatch: what was expected at a path and what was found there. A composite
//! gathers the failures of an array's elements, an object's fields, or a tuple's
//! positions.
//!
//! The rendered message of a composite lists every leaf in its subtree, one per
//! line, each already qualified by its full path:
//!
//! ```
//! use serde_json::json;
//! use shapeguard::prelude::*;
//!
//! let err = array(string)
//!     .validate_value("root", &json!([1, "a", true]))
//!     .err()
//!     .unwrap();
//!
//! assert_eq!(err.path(), "root");
//! assert_eq!(err.leaf_count(), 2);
//! assert_eq!(
//!     err.to_string(),
//!     "root[0] is not string: 1\nroot[2] is not string: true"
//! );
//! ```

#[cfg(feature = "serde")]
mod serde_impl;

use std::error::Error as StdError;
use std::fmt;

use serde_json::Value;

use crate::json::render;
use crate::NonEmptyVec;

/// Why validation failed at a given path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cause {
    /// A direct mismatch.
    Mismatch {
        /// Description of what was expected: a type name, a rendered literal, or
        /// a `" | "`-joined list of alternatives.
        expected: String,
        /// The offending value rendered as JSON (`undefined` when absent).
        actual: String,
    },
    /// Failures of nested elements, fields, or positions, in the order they
    /// were checked.
    Nested {
        /// The compound shape that owns the children: `"array"`, `"object"` or
        /// `"tuple"`.
        shape: &'static str,
        /// The child failures.
        errors: Box<NonEmptyVec<ValidationError>>,
    },
}

impl Cause {
    /// The flattened cause text.
    ///
    /// For a mismatch this is the expected description; for a nested cause it is
    /// the compound shape name. Union-like validators join these texts when they
    /// collapse their alternatives' failures into one leaf.
    pub fn expected(&self) -> &str {
        match self {
            Cause::Mismatch { expected, .. } => expected,
            Cause::Nested { shape, .. } => shape,
        }
    }
}

/// A validation failure, annotated with the path at which it occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    path: String,
    cause: Cause,
}

impl ValidationError {
    /// Create a leaf error: the value at `path` is not `expected`.
    ///
    /// ```
    /// use serde_json::json;
    /// use shapeguard::ValidationError;
    ///
    /// let err = ValidationError::mismatch("root", "number", Some(&json!("a")));
    /// assert_eq!(err.to_string(), "root is not number: \"a\"");
    /// ```
    pub fn mismatch(
        path: impl Into<String>,
        expected: impl Into<String>,
        actual: Option<&Value>,
    ) -> Self {
        ValidationError {
            path: path.into(),
            cause: Cause::Mismatch {
                expected: expected.into(),
                actual: render(actual),
            },
        }
    }

    /// Create a composite error from the failures of a compound shape's children.
    pub fn nested(
        path: impl Into<String>,
        shape: &'static str,
        errors: NonEmptyVec<ValidationError>,
    ) -> Self {
        ValidationError {
            path: path.into(),
            cause: Cause::Nested {
                shape,
                errors: Box::new(errors),
            },
        }
    }

    /// Where the failure occurred, relative to the root label.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Why the failure occurred.
    pub fn cause(&self) -> &Cause {
        &self.cause
    }

    /// Whether this error is a direct mismatch with no children.
    pub fn is_leaf(&self) -> bool {
        matches!(self.cause, Cause::Mismatch { .. })
    }

    /// The direct children of a composite error; `None` for a leaf.
    pub fn children(&self) -> Option<&NonEmptyVec<ValidationError>> {
        match &self.cause {
            Cause::Mismatch { .. } => None,
            Cause::Nested { errors, .. } => Some(&**errors),
        }
    }

    /// All leaf errors in the subtree, depth first, in reporting order.
    pub fn leaves(&self) -> Leaves<'_> {
        Leaves { stack: vec![self] }
    }

    /// Number of leaf errors in the subtree.
    pub fn leaf_count(&self) -> usize {
        self.leaves().count()
    }

    /// The rendered message. Same as the `Display` output.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cause {
            Cause::Mismatch { expected, actual } => {
                write!(f, "{} is not {}: {}", self.path, expected, actual)
            }
            Cause::Nested { errors, .. } => {
                for (i, error) in errors.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{}", error)?;
                }
                Ok(())
            }
        }
    }
}

impl StdError for ValidationError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.cause {
            Cause::Mismatch { .. } => None,
            Cause::Nested { errors, .. } => Some(errors.head()),
        }
    }
}

/// Depth-first iterator over the leaf errors of a [`ValidationError`].
#[derive(Debug)]
pub struct Leaves<'a> {
    stack: Vec<&'a ValidationError>,
}

impl<'a> Iterator for Leaves<'a> {
    type Item = &'a ValidationError;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(error) = self.stack.pop() {
            match &error.cause {
                Cause::Mismatch { .. } => return Some(error),
                Cause::Nested { errors, .. } => {
                    let len = self.stack.len();
                    self.stack.extend(errors.iter());
                    self.stack[len..].reverse();
                }
            }
        }
        None
    }
}
