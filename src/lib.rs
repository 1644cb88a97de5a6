//! # Shapeguard
//!
//! Composable validators for untyped JSON at trust boundaries.
//!
//! Data that arrives from a network payload, a config file, or any other
//! `serde_json::Value` source is checked against a shape declared once in code.
//! The result is either a confirmation that the value has that shape, or a
//! [`ValidationError`] tree that reports every mismatch with its full path.
//!
//! ## Quick Example
//!
//! ```rust
//! use serde_json::json;
//! use shapeguard::prelude::*;
//!
//! let child = object! {
//!     "flags" => undefined_or(array(union![boolean, number])),
//!     "pair" => tuple![boolean, literal(true)],
//! };
//! let parent = object! {
//!     "string" => string,
//!     "children" => array(child.clone()),
//!     "last" => tuple![child.clone(), null_or(child)],
//! };
//!
//! let input = json!({
//!     "string": 1,
//!     "children": [{"flags": [true, 1], "pair": [false, true]}],
//!     "last": [{}, "x"],
//! });
//!
//! match parent.validate_value("root", &input) {
//!     Validation::Success(()) => unreachable!(),
//!     Validation::Failure(err) => assert_eq!(
//!         err.to_string(),
//!         [
//!             "root.string is not string: 1",
//!             "root.last[0].pair is not tuple: undefined",
//!             "root.last[1] is not object | null: \"x\"",
//!         ]
//!         .join("\n")
//!     ),
//! }
//! ```
//!
//! ## Absent values
//!
//! JSON has no `undefined`. Validators receive `Option<&Value>`, where `None`
//! marks a missing object field or a tuple position past the end of the input.
//! [`undefined_or`] accepts it, which is how optional fields are declared.
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events when compound validators fail and when
//!   adapters discard an error.
//! - `serde`: `Serialize` for [`ValidationError`] reports.
//! - `proptest`: the [`testing::arb_json`] strategy.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

#[macro_use]
mod macros;

pub mod error;
pub mod json;
pub mod nonempty;
pub mod semigroup;
pub mod testing;
pub mod validation;
pub mod validator;

// Re-exports
pub use error::{Cause, ValidationError};
pub use nonempty::NonEmptyVec;
pub use semigroup::Semigroup;
pub use validation::Validation;
pub use validator::{
    array, boolean, literal, null_or, nullable, number, object, string, tuple, type_of,
    undefined_or, undefinedable, union, value_of, BoxedValidator, ObjectValidator, Outcome,
    Validator, ValidatorExt,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Cause, ValidationError};
    pub use crate::validation::Validation;
    pub use crate::validator::{
        boolean, literal, null_or, nullable, number, string, type_of, undefined_or,
        undefinedable, value_of, BoxedValidator, ObjectValidator, Outcome, Validator,
        ValidatorExt,
    };
    pub use crate::{array, object, tuple, union};
}
