//! Integration tests for integer, float and boolean validation.

use jsonvalid::{JsonPath, Schema, ValueError, ValueValidator};
use serde_json::{json, Value};

/// Helper to extract the success value from a Validation
fn unwrap_success<T, E: std::fmt::Debug>(v: stillwater::Validation<T, E>) -> T {
    v.into_result().unwrap()
}

/// Helper to extract the error value from a Validation
fn unwrap_failure<T, E>(v: stillwater::Validation<T, E>) -> E
where
    T: std::fmt::Debug,
{
    v.into_result().unwrap_err()
}

#[test]
fn test_int_coercion() {
    let schema = Schema::int();
    let cases = [
        (json!(42), 42),
        (json!(-7), -7),
        (json!(3.99), 3),
        (json!(-3.99), -3),
        (json!("123"), 123),
        (json!("-5"), -5),
        (json!(i64::MAX), i64::MAX),
    ];

    for (input, expected) in cases {
        let result = schema.validate(&input, &JsonPath::root());
        assert_eq!(unwrap_success(result), expected, "input {}", input);
    }
}

#[test]
fn test_int_rejects_other_shapes() {
    let schema = Schema::int();
    let inputs = [
        json!("12.5"),
        json!("abc"),
        json!(""),
        json!(u64::MAX),
        json!(true),
        json!([1]),
        json!({"n": 1}),
    ];

    for input in inputs {
        let errors = unwrap_failure(schema.validate(&input, &JsonPath::root()));
        assert_eq!(errors.first().code(), "invalid_type", "input {}", input);
        assert_eq!(errors.first().message(), "Value must be an integer");
    }
}

#[test]
fn test_int_truncation_saturates() {
    let result = Schema::int().validate(&json!(1e30), &JsonPath::root());
    assert_eq!(unwrap_success(result), i64::MAX);
}

#[test]
fn test_int_absent() {
    let root = JsonPath::root();
    assert_eq!(unwrap_success(Schema::int().validate(&Value::Null, &root)), 0);
    assert_eq!(unwrap_success(Schema::int().default(10).validate(&Value::Null, &root)), 10);

    let errors = unwrap_failure(Schema::int().required().validate(&Value::Null, &root));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.first().code(), "required");
}

#[test]
fn test_int_bounds_report_threshold() {
    let schema = Schema::int().min(18).max(65);

    let errors = unwrap_failure(schema.validate(&json!(17), &JsonPath::root()));
    assert_eq!(errors.first().code(), "invalid");
    assert_eq!(errors.first().message(), "Value must be at least 18");

    let errors = unwrap_failure(schema.validate(&json!("66"), &JsonPath::root()));
    assert_eq!(errors.first().message(), "Value must be at most 65");

    assert!(schema.validate(&json!(18), &JsonPath::root()).is_success());
}

#[test]
fn test_int_one_of() {
    let schema = Schema::int().one_of([1, 2, 3]);
    assert!(schema.validate(&json!("2"), &JsonPath::root()).is_success());

    let errors = unwrap_failure(schema.validate(&json!(4), &JsonPath::root()));
    assert_eq!(errors.first().code(), "invalid");
}

#[test]
fn test_int_custom_transform() {
    let schema = Schema::int()
        .custom(|n| Ok(n * 100))
        .custom(|n| {
            if n % 2 == 0 {
                Ok(n)
            } else {
                Err(ValueError::new("odd", "Value must be even"))
            }
        });

    let result = schema.validate(&json!(3), &JsonPath::root());
    assert_eq!(unwrap_success(result), 300);
}

#[test]
fn test_float_coercion() {
    let schema = Schema::float();
    let cases = [
        (json!(1.5), 1.5),
        (json!(2), 2.0),
        (json!("3.25"), 3.25),
        (json!("-1e3"), -1000.0),
    ];

    for (input, expected) in cases {
        let result = schema.validate(&input, &JsonPath::root());
        assert_eq!(unwrap_success(result), expected, "input {}", input);
    }
}

#[test]
fn test_float_rejects_other_shapes() {
    let schema = Schema::float();
    for input in [json!("abc"), json!("NaN"), json!("inf"), json!(false), json!([1.0])] {
        let errors = unwrap_failure(schema.validate(&input, &JsonPath::root()));
        assert_eq!(errors.first().code(), "invalid_type", "input {}", input);
        assert_eq!(errors.first().message(), "Value must be a floating point number");
    }
}

#[test]
fn test_float_bounds() {
    let schema = Schema::float().min(0.5).max(1.5);

    let errors = unwrap_failure(schema.validate(&json!(0.25), &JsonPath::root()));
    assert_eq!(errors.first().message(), "Value must be at least 0.5");

    let errors = unwrap_failure(schema.validate(&json!(2), &JsonPath::root()));
    assert_eq!(errors.first().message(), "Value must be at most 1.5");
}

#[test]
fn test_float_absent() {
    let root = JsonPath::root();
    assert_eq!(unwrap_success(Schema::float().validate(&Value::Null, &root)), 0.0);
    assert_eq!(unwrap_success(Schema::float().default(9.5).validate(&Value::Null, &root)), 9.5);
    assert!(Schema::float().required().validate(&Value::Null, &root).is_failure());
}

#[test]
fn test_float_custom_producing_nan_is_rejected() {
    let schema = Schema::float().custom(|_| Ok(f64::NAN));
    let result = schema.validate_value(&json!(1.0), &JsonPath::root()).unwrap();
    assert_eq!(unwrap_failure(result).first().code(), "invalid_type");
}

#[test]
fn test_bool_only_native() {
    let schema = Schema::bool();
    assert!(unwrap_success(schema.validate(&json!(true), &JsonPath::root())));

    for input in [json!("true"), json!(1), json!("yes")] {
        let errors = unwrap_failure(schema.validate(&input, &JsonPath::root()));
        assert_eq!(errors.first().code(), "invalid_type");
        assert_eq!(errors.first().message(), "Value must be a boolean");
    }
}

#[test]
fn test_bool_absent() {
    let root = JsonPath::root();
    assert!(!unwrap_success(Schema::bool().validate(&Value::Null, &root)));
    assert!(unwrap_success(Schema::bool().default(true).validate(&Value::Null, &root)));
    assert!(Schema::bool().required().validate(&Value::Null, &root).is_failure());
}

#[test]
fn test_required_does_not_alter_original() {
    let optional = Schema::int().min(0);
    let required = optional.required();

    assert!(optional.validate(&Value::Null, &JsonPath::root()).is_success());
    assert!(required.validate(&Value::Null, &JsonPath::root()).is_failure());
}

#[test]
fn test_validate_value_produces_json_numbers() {
    let root = JsonPath::root();
    let int = Schema::int().validate_value(&json!("8"), &root).unwrap();
    assert_eq!(unwrap_success(int), json!(8));

    let float = Schema::float().validate_value(&json!("0.5"), &root).unwrap();
    assert_eq!(unwrap_success(float), json!(0.5));

    let boolean = Schema::bool().validate_value(&Value::Null, &root).unwrap();
    assert_eq!(unwrap_success(boolean), json!(false));
}
