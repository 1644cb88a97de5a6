//! Testing utilities for code that builds validators
//!
//! # Assertion Macros
//!
//! ```rust
//! use serde_json::json;
//! use shapeguard::prelude::*;
//! use shapeguard::{assert_error_message, assert_invalid, assert_valid};
//!
//! let pair = tuple![string, number];
//!
//! assert_valid!(pair.validate_value("root", &json!(["a", 1])));
//! assert_invalid!(pair.validate_value("root", &json!(null)));
//! assert_error_message!(
//!     pair.validate_value("root", &json!([true])),
//!     "root[0] is not string: true\nroot[1] is not number: undefined"
//! );
//! ```
//!
//! # Property Testing
//!
//! With the `proptest` feature enabled, [`arb_json`] generates arbitrary
//! `serde_json::Value` trees to feed validators.

/// Assert that a validator outcome is a success.
///
/// Panics with the rendered error message if it is a failure.
#[macro_export]
macro_rules! assert_valid {
    ($outcome:expr) => {
        match $outcome {
            $crate::Validation::Success(_) => {}
            $crate::Validation::Failure(e) => {
                panic!("Expected valid, got errors:\n{}", e);
            }
        }
    };
}

/// Assert that a validator outcome is a failure.
#[macro_export]
macro_rules! assert_invalid {
    ($outcome:expr) => {
        match $outcome {
            $crate::Validation::Failure(_) => {}
            $crate::Validation::Success(v) => {
                panic!("Expected invalid, got Success: {:?}", v);
            }
        }
    };
}

/// Assert that a validator outcome fails with exactly the given rendered message.
#[macro_export]
macro_rules! assert_error_message {
    ($outcome:expr, $expected:expr) => {
        match $outcome {
            $crate::Validation::Failure(e) => {
                assert_eq!(e.to_string(), $expected);
            }
            $crate::Validation::Success(v) => {
                panic!(
                    "Expected failure with message {:?}, got Success: {:?}",
                    $expected, v
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;
#[cfg(feature = "proptest")]
use serde_json::Value;

/// Strategy for arbitrary JSON values, nested up to four levels deep.
#[cfg(feature = "proptest")]
pub fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        (-1.0e6f64..1.0e6).prop_map(Value::from),
        "[a-z]{0,8}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..8).prop_map(Value::Array),
            prop::collection::vec(("[a-z]{1,6}", inner), 0..8)
                .prop_map(|entries| Value::Object(entries.into_iter().collect())),
        ]
    })
}
