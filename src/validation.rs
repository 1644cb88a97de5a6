//! Validation type for accumulating errors
//!
//! `Validation` is the outcome every validator returns. It looks like `Result`,
//! but [`Validation::and`] keeps both sides' failures instead of stopping at the
//! first one, which is what lets an array or object report every bad element
//! in a single pass.
//!
//! # Examples
//!
//! ```
//! use shapeguard::Validation;
//!
//! let v1 = Validation::<(), _>::failure(vec!["root[0] is not string: 1"]);
//! let v2 = Validation::<(), _>::failure(vec!["root[2] is not string: true"]);
//!
//! assert_eq!(
//!     v1.and(v2),
//!     Validation::Failure(vec!["root[0] is not string: 1", "root[2] is not string: true"])
//! );
//! ```

use crate::Semigroup;

/// A validation that either succeeds with a value or fails with accumulated errors
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the error value (must implement `Semigroup` for accumulation)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<T, E> {
    /// Successful validation with a value
    Success(T),
    /// Failed validation with accumulated errors
    Failure(E),
}

impl<T, E> Validation<T, E> {
    /// Create a successful validation
    #[inline]
    pub fn success(value: T) -> Self {
        Validation::Success(value)
    }

    /// Create a failed validation
    #[inline]
    pub fn failure(error: E) -> Self {
        Validation::Failure(error)
    }

    /// Convert this validation to a Result, so callers can use `?`
    ///
    /// # Examples
    ///
    /// ```
    /// use shapeguard::prelude::*;
    /// use serde_json::json;
    ///
    /// fn check(input: &serde_json::Value) -> Result<(), ValidationError> {
    ///     string.validate_value("root", input).into_result()?;
    ///     Ok(())
    /// }
    ///
    /// assert!(check(&json!("a")).is_ok());
    /// assert_eq!(check(&json!(1)).unwrap_err().to_string(), "root is not string: 1");
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Validation::Success(value) => Ok(value),
            Validation::Failure(error) => Err(error),
        }
    }

    /// Check if this validation is successful
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Validation::Success(_))
    }

    /// Check if this validation failed
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Validation::Failure(_))
    }

    /// Return the error, discarding a success value
    #[inline]
    pub fn err(self) -> Option<E> {
        match self {
            Validation::Success(_) => None,
            Validation::Failure(error) => Some(error),
        }
    }

    /// Transform the success value if present
    #[inline]
    pub fn map<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Validation::Success(value) => Validation::Success(f(value)),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// Transform the error value if present
    ///
    /// # Examples
    ///
    /// ```
    /// use shapeguard::{NonEmptyVec, Validation};
    ///
    /// let v = Validation::<(), _>::failure("root is not null: 0");
    /// let lifted = v.map_err(NonEmptyVec::singleton);
    /// assert_eq!(lifted, Validation::Failure(NonEmptyVec::singleton("root is not null: 0")));
    /// ```
    #[inline]
    pub fn map_err<E2, F>(self, f: F) -> Validation<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Validation::Success(value) => Validation::Success(value),
            Validation::Failure(error) => Validation::Failure(f(error)),
        }
    }
}

impl<T, E: Semigroup> Validation<T, E> {
    /// Combine two validations, accumulating errors using the Semigroup instance
    ///
    /// If both validations are successful, returns a success with a tuple of both values.
    /// If either or both fail, accumulates the errors using `Semigroup::combine`.
    pub fn and<U>(self, other: Validation<U, E>) -> Validation<(T, U), E> {
        match (self, other) {
            (Validation::Success(a), Validation::Success(b)) => Validation::Success((a, b)),
            (Validation::Failure(e1), Validation::Failure(e2)) => {
                Validation::Failure(e1.combine(e2))
            }
            (Validation::Failure(e), _) => Validation::Failure(e),
            (_, Validation::Failure(e)) => Validation::Failure(e),
        }
    }
}
