//! Tests and examples for the testing utilities
//!
//! Demonstrates how code that declares validators for its own payloads can be
//! tested with the assertion macros.

use serde_json::{json, Value};
use shapeguard::prelude::*;
use shapeguard::{assert_error_message, assert_invalid, assert_valid};

// Example domain shapes
fn address() -> BoxedValidator {
    object! {
        "street" => string,
        "zip" => union![string, number],
    }
    .boxed()
}

fn user() -> BoxedValidator {
    object! {
        "email" => string,
        "age" => number,
        "address" => null_or(address()),
        "nickname" => undefined_or(string),
    }
    .boxed()
}

// Custom validators written as plain functions
fn email(path: &str, value: Option<&Value>) -> Outcome {
    match value.and_then(Value::as_str) {
        Some(s) if s.contains('@') && s.contains('.') => Validation::success(()),
        _ => Validation::failure(ValidationError::mismatch(path, "email", value)),
    }
}

fn adult(path: &str, value: Option<&Value>) -> Outcome {
    match value.and_then(Value::as_f64) {
        Some(age) if age >= 18.0 => Validation::success(()),
        _ => Validation::failure(ValidationError::mismatch(path, "age >= 18", value)),
    }
}

#[test]
fn test_valid_user() {
    let input = json!({
        "email": "user@example.com",
        "age": 30,
        "address": {"street": "Main", "zip": 12345}
    });
    assert_valid!(user().validate_value("user", &input));
}

#[test]
fn test_null_address_is_valid() {
    let input = json!({"email": "a@b.c", "age": 1, "address": null});
    assert_valid!(user().validate_value("user", &input));
}

#[test]
fn test_missing_address_is_invalid() {
    let input = json!({"email": "a@b.c", "age": 1});
    assert_invalid!(user().validate_value("user", &input));
    assert_error_message!(
        user().validate_value("user", &input),
        "user.address is not object | null: undefined"
    );
}

#[test]
fn test_multiple_errors_in_one_message() {
    let input = json!({"email": 7, "age": "old", "address": null, "nickname": false});
    assert_error_message!(
        user().validate_value("user", &input),
        "user.email is not string: 7\n\
         user.age is not number: \"old\"\n\
         user.nickname is not string | undefined: false"
    );
}

#[test]
fn test_custom_validators_compose() {
    let signup = object! {
        "email" => email,
        "age" => adult,
    };

    assert_valid!(signup.validate_value("form", &json!({"email": "x@y.z", "age": 18})));
    assert_error_message!(
        signup.validate_value("form", &json!({"email": "nope", "age": 17})),
        "form.email is not email: \"nope\"\nform.age is not age >= 18: 17"
    );
}

#[test]
fn test_custom_validator_inside_union() {
    let contact = union![email, nullable];
    assert_valid!(contact.validate_value("root", &json!(null)));
    assert_error_message!(
        contact.validate_value("root", &json!("nope")),
        "root is not email | null: \"nope\""
    );
}

#[test]
fn test_list_of_users() {
    let users = array(user());
    let input = json!([
        {"email": "a@b.c", "age": 20, "address": null},
        {"email": "d@e.f", "age": 21, "address": {"street": 1, "zip": true}}
    ]);
    assert_error_message!(
        users.validate_value("users", &input),
        "users[1].address is not object | null: {\"street\":1,\"zip\":true}"
    );
}

#[test]
fn test_macros_accept_validation_of_any_type() {
    let ok: Validation<i32, String> = Validation::success(5);
    assert_valid!(ok);

    let bad: Validation<i32, String> = Validation::failure("boom".to_string());
    assert_invalid!(bad.clone());
    assert_error_message!(bad, "boom");
}
