//! The validator capability shared by every schema node.
//!
//! [`ValueValidator`] is what lets an array hold an item validator, or an object
//! hold property validators, of any kind.

use serde_json::Value;
use stillwater::Validation;

use crate::error::{InternalError, ValidationError, ValueError};
use crate::path::JsonPath;

/// Outcome of validating one value.
///
/// The outer `Result` carries failures that must abort the whole traversal
/// (see [`InternalError`]); the inner `Validation` carries the normalized value
/// or the accumulated field errors.
pub type ValidateResult<T = Value> = Result<Validation<T, ValidationError>, InternalError>;

/// A schema node that validates and normalizes JSON values.
///
/// `Value::Null` stands for an absent value. Implementations must be stateless
/// with respect to validation so one tree can serve concurrent callers, which
/// is why the trait requires `Send + Sync`.
///
/// # Example
///
/// ```rust
/// use jsonvalid::{JsonPath, Schema, ValueValidator};
/// use serde_json::json;
///
/// let validators: Vec<Box<dyn ValueValidator>> = vec![
///     Box::new(Schema::string().required()),
///     Box::new(Schema::int().min(0)),
/// ];
///
/// for validator in &validators {
///     let result = validator.validate_value(&json!("7"), &JsonPath::root()).unwrap();
///     assert!(result.is_success());
/// }
/// ```
pub trait ValueValidator: Send + Sync {
    /// Validates `value` located at `path`.
    fn validate_value(&self, value: &Value, path: &JsonPath) -> ValidateResult;
}

impl<V: ValueValidator + ?Sized> ValueValidator for Box<V> {
    fn validate_value(&self, value: &Value, path: &JsonPath) -> ValidateResult {
        (**self).validate_value(value, path)
    }
}

impl<V: ValueValidator + ?Sized> ValueValidator for std::sync::Arc<V> {
    fn validate_value(&self, value: &Value, path: &JsonPath) -> ValidateResult {
        (**self).validate_value(value, path)
    }
}

/// A single-error failure at `path`.
pub(crate) fn fail<T>(path: &JsonPath, error: ValueError) -> Validation<T, ValidationError> {
    Validation::Failure(ValidationError::at(path.clone(), error))
}

/// Resolves an absent value: `required` fails, otherwise `default` is used.
pub(crate) fn absent<T>(
    required: bool,
    default: impl FnOnce() -> T,
    path: &JsonPath,
) -> Validation<T, ValidationError> {
    if required {
        fail(path, ValueError::REQUIRED)
    } else {
        Validation::Success(default())
    }
}
