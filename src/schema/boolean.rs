//! Boolean validation.

use serde_json::Value;
use stillwater::Validation;

use crate::error::{ValidationError, ValueError};
use crate::path::JsonPath;

use super::traits::{absent, fail, ValidateResult, ValueValidator};

/// A validator for boolean values.
///
/// Only native JSON booleans are accepted; `"true"`, `1` and other truthy
/// forms are `invalid_type`.
#[derive(Clone, Debug)]
pub struct BoolValidator {
    required: bool,
    default_value: bool,
}

impl BoolValidator {
    /// Creates an optional boolean validator defaulting to `false`.
    pub fn new() -> Self {
        Self {
            required: false,
            default_value: false,
        }
    }

    /// Returns a copy that rejects absent values.
    pub fn required(&self) -> Self {
        Self {
            required: true,
            ..self.clone()
        }
    }

    /// Returns a copy that yields `value` when the input is absent.
    pub fn default(&self, value: bool) -> Self {
        Self {
            default_value: value,
            ..self.clone()
        }
    }

    /// Validates a value against this validator.
    pub fn validate(&self, value: &Value, path: &JsonPath) -> Validation<bool, ValidationError> {
        match value {
            Value::Null => absent(self.required, || self.default_value, path),
            Value::Bool(b) => Validation::Success(*b),
            _ => fail(path, ValueError::invalid_type("Value must be a boolean")),
        }
    }
}

impl Default for BoolValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueValidator for BoolValidator {
    fn validate_value(&self, value: &Value, path: &JsonPath) -> ValidateResult {
        Ok(self.validate(value, path).map(Value::Bool))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepts_booleans() {
        let validator = BoolValidator::new();
        assert_eq!(validator.validate(&json!(true), &JsonPath::root()).into_result().unwrap(), true);
        assert_eq!(validator.validate(&json!(false), &JsonPath::root()).into_result().unwrap(), false);
    }

    #[test]
    fn test_rejects_truthy_forms() {
        let validator = BoolValidator::new();
        for value in [json!("true"), json!(1), json!(0), json!([]), json!({})] {
            let errors = validator.validate(&value, &JsonPath::root()).into_result().unwrap_err();
            assert_eq!(errors.first().code(), "invalid_type");
        }
    }

    #[test]
    fn test_absent() {
        let root = JsonPath::root();
        assert_eq!(BoolValidator::new().validate(&Value::Null, &root).into_result().unwrap(), false);
        assert_eq!(
            BoolValidator::new().default(true).validate(&Value::Null, &root).into_result().unwrap(),
            true
        );

        let errors = BoolValidator::new().required().validate(&Value::Null, &root).into_result().unwrap_err();
        assert_eq!(errors.first().code(), "required");
    }

    #[test]
    fn test_required_accepts_false() {
        let result = BoolValidator::new().required().validate(&json!(false), &JsonPath::root());
        assert!(result.is_success());
    }
}
