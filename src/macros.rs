//! Composition macros.
//!
//! Object fields, tuple positions, and union alternatives usually have different
//! concrete validator types. These macros box each one so heterogeneous
//! validators can be listed inline.

/// Build a [`Union`](crate::validator::Union) from a list of validators.
///
/// ```
/// use serde_json::json;
/// use shapeguard::prelude::*;
///
/// let flag = union![boolean, literal("yes"), literal("no")];
/// assert!(flag.validate_value("root", &json!("no")).is_success());
/// assert_eq!(
///     flag.validate_value("root", &json!(1)).err().unwrap().to_string(),
///     "root is not boolean | \"yes\" | \"no\": 1"
/// );
/// ```
#[macro_export]
macro_rules! union {
    ($($validator:expr),* $(,)?) => {
        {
            let validators: ::std::vec::Vec<$crate::validator::BoxedValidator> = ::std::vec![
                $($crate::validator::BoxedValidator::new($validator)),*
            ];
            $crate::validator::union(validators)
        }
    };
}

/// Build a [`Tuple`](crate::validator::Tuple) from a list of validators, one per
/// position.
///
/// ```
/// use serde_json::json;
/// use shapeguard::prelude::*;
///
/// let entry = tuple![string, number];
/// assert!(entry.validate_value("root", &json!(["a", 1])).is_success());
/// ```
#[macro_export]
macro_rules! tuple {
    ($($validator:expr),* $(,)?) => {
        {
            let validators: ::std::vec::Vec<$crate::validator::BoxedValidator> = ::std::vec![
                $($crate::validator::BoxedValidator::new($validator)),*
            ];
            $crate::validator::tuple(validators)
        }
    };
}

/// Build an [`Object`](crate::validator::Object) from `"field" => validator`
/// pairs, in declaration order.
///
/// ```
/// use serde_json::json;
/// use shapeguard::prelude::*;
///
/// let point = object! { "x" => number, "y" => number };
/// assert!(point.validate_value("root", &json!({"x": 0, "y": 1})).is_success());
/// ```
#[macro_export]
macro_rules! object {
    ($($name:expr => $validator:expr),* $(,)?) => {
        $crate::validator::object(
            $crate::validator::ObjectValidator::new()
                $(.field($name, $validator))*
        )
    };
}
