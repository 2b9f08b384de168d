//! Array validation.
//!
//! This module provides [`ArrayValidator`], which validates every element of an
//! array against one item validator and reports the errors of all invalid
//! elements together.

use std::sync::Arc;

use serde_json::Value;
use stillwater::{Semigroup, Validation};

use crate::error::{ValidationError, ValueError};
use crate::path::JsonPath;

use super::traits::{absent, fail, ValidateResult, ValueValidator};
use super::Validator;

/// A validator for arrays.
///
/// Validation never stops at the first bad element: every element is checked
/// at `path[index]` and all element errors are returned in index order. An
/// absent array defaults to an empty one, and an empty array counts as "not
/// provided" when the validator is required.
///
/// # Example
///
/// ```rust
/// use jsonvalid::{JsonPath, Schema};
/// use serde_json::json;
///
/// let scores = Schema::array_of(Schema::int().required()).min_len(1);
///
/// let result = scores.validate(&json!([3, "4", 5.9]), &JsonPath::root()).unwrap();
/// assert_eq!(result.into_result().unwrap(), vec![json!(3), json!(4), json!(5)]);
///
/// let result = scores.validate(&json!([null, 1, "x"]), &JsonPath::root()).unwrap();
/// let errors = result.into_result().unwrap_err();
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors.first().path.to_string(), "[0]");
/// ```
#[derive(Clone, Debug, Default)]
pub struct ArrayValidator {
    required: bool,
    min_len: usize,
    item: Option<Arc<Validator>>,
}

impl ArrayValidator {
    /// Creates an optional array validator with no item validator.
    ///
    /// Without an item validator elements are passed through unchanged.
    pub fn new() -> Self {
        Self {
            required: false,
            min_len: 0,
            item: None,
        }
    }

    /// Returns a copy that rejects absent and empty arrays.
    pub fn required(&self) -> Self {
        Self {
            required: true,
            ..self.clone()
        }
    }

    /// Returns a copy that requires at least `min_len` elements.
    pub fn min_len(&self, min_len: usize) -> Self {
        Self {
            min_len,
            ..self.clone()
        }
    }

    /// Returns a copy that validates each element with `item`.
    pub fn of(&self, item: impl Into<Validator>) -> Self {
        Self {
            item: Some(Arc::new(item.into())),
            ..self.clone()
        }
    }

    /// Validates a value against this validator.
    ///
    /// If the array is shorter than the minimum length, the length error is
    /// appended after any element errors.
    pub fn validate(&self, value: &Value, path: &JsonPath) -> ValidateResult<Vec<Value>> {
        let items = match value {
            Value::Null => return Ok(absent(self.required, Vec::new, path)),
            Value::Array(items) => items,
            _ => return Ok(fail(path, ValueError::invalid_type("Value must be an array"))),
        };

        if items.is_empty() && self.required {
            return Ok(fail(path, ValueError::REQUIRED));
        }

        let mut validated = Vec::with_capacity(items.len());
        let mut errors: Option<ValidationError> = None;

        for (index, item) in items.iter().enumerate() {
            let outcome = match &self.item {
                Some(validator) => validator.validate_value(item, &path.elem(index))?,
                None => Validation::Success(item.clone()),
            };

            match outcome {
                Validation::Success(v) => validated.push(v),
                Validation::Failure(e) => errors = errors.combine(Some(e)),
            }
        }

        // Failed elements still count toward the length.
        if items.len() < self.min_len {
            let too_short = ValidationError::at(
                path.clone(),
                ValueError::invalid(format!(
                    "Value must be an array of at least {} element(s)",
                    self.min_len
                )),
            );
            errors = errors.combine(Some(too_short));
        }

        Ok(match errors {
            Some(errors) => Validation::Failure(errors),
            None => Validation::Success(validated),
        })
    }
}

impl ValueValidator for ArrayValidator {
    fn validate_value(&self, value: &Value, path: &JsonPath) -> ValidateResult {
        Ok(self.validate(value, path)?.map(Value::Array))
    }
}
