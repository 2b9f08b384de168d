//! Numeric validation.
//!
//! This module provides [`IntValidator`] and [`FloatValidator`]. Both coerce
//! numbers and numeric strings to their target type before running their
//! checks.

use std::collections::HashSet;

use serde_json::{Number, Value};
use stillwater::Validation;

use crate::error::{ValidationError, ValueError};
use crate::path::JsonPath;

use super::chain::CheckChain;
use super::traits::{absent, fail, ValidateResult, ValueValidator};

const INT_TYPE_MESSAGE: &str = "Value must be an integer";
const FLOAT_TYPE_MESSAGE: &str = "Value must be a floating point number";

/// A validator for integer values.
///
/// Accepted inputs:
/// - integral JSON numbers within `i64`;
/// - fractional JSON numbers, truncated toward zero (saturating at the `i64`
///   bounds, with no range check);
/// - strings holding a base-10 integer.
///
/// Unsigned numbers above `i64::MAX`, unparsable strings and every other JSON
/// type are `invalid_type`.
///
/// Out-of-range handling depends on how the number is written: the integer
/// literal `18446744073709551615` is `invalid_type`, while the same magnitude
/// written as `1.8446744073709552e19` saturates to `i64::MAX`.
///
/// # Example
///
/// ```rust
/// use jsonvalid::{JsonPath, Schema};
/// use serde_json::json;
///
/// let age = Schema::int().min(0).max(150);
///
/// let result = age.validate(&json!("42"), &JsonPath::root());
/// assert_eq!(result.into_result().unwrap(), 42);
///
/// let result = age.validate(&json!(-1), &JsonPath::root());
/// assert_eq!(
///     result.into_result().unwrap_err().first().message(),
///     "Value must be at least 0"
/// );
/// ```
#[derive(Clone, Debug)]
pub struct IntValidator {
    required: bool,
    default_value: i64,
    checks: CheckChain<i64>,
}

impl IntValidator {
    /// Creates an optional integer validator defaulting to `0`.
    pub fn new() -> Self {
        Self {
            required: false,
            default_value: 0,
            checks: CheckChain::new(),
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
    pub fn default(&self, value: i64) -> Self {
        Self {
            default_value: value,
            ..self.clone()
        }
    }

    /// Returns a copy with `check` appended to the check chain.
    pub fn custom<F>(&self, check: F) -> Self
    where
        F: Fn(i64) -> Result<i64, ValueError> + Send + Sync + 'static,
    {
        Self {
            checks: self.checks.with(check),
            ..self.clone()
        }
    }

    /// Accepts only the listed values.
    pub fn one_of(&self, values: impl IntoIterator<Item = i64>) -> Self {
        let allowed: HashSet<i64> = values.into_iter().collect();
        self.custom(move |value| {
            if allowed.contains(&value) {
                Ok(value)
            } else {
                Err(ValueError::INVALID)
            }
        })
    }

    /// Requires the value to be at least `min`.
    pub fn min(&self, min: i64) -> Self {
        self.custom(move |value| {
            if value < min {
                Err(ValueError::invalid(format!("Value must be at least {}", min)))
            } else {
                Ok(value)
            }
        })
    }

    /// Requires the value to be at most `max`.
    pub fn max(&self, max: i64) -> Self {
        self.custom(move |value| {
            if value > max {
                Err(ValueError::invalid(format!("Value must be at most {}", max)))
            } else {
                Ok(value)
            }
        })
    }

    /// Validates a value against this validator.
    pub fn validate(&self, value: &Value, path: &JsonPath) -> Validation<i64, ValidationError> {
        let n = match value {
            Value::Null => return absent(self.required, || self.default_value, path),
            Value::Number(num) => coerce_number_to_int(num),
            Value::String(s) => s.parse::<i64>().ok(),
            _ => None,
        };

        let Some(n) = n else {
            return fail(path, ValueError::invalid_type(INT_TYPE_MESSAGE));
        };

        match self.checks.apply(n) {
            Ok(n) => Validation::Success(n),
            Err(error) => fail(path, error),
        }
    }
}

impl Default for IntValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueValidator for IntValidator {
    fn validate_value(&self, value: &Value, path: &JsonPath) -> ValidateResult {
        Ok(self.validate(value, path).map(|n| Value::Number(n.into())))
    }
}

fn coerce_number_to_int(num: &Number) -> Option<i64> {
    if let Some(n) = num.as_i64() {
        return Some(n);
    }
    if num.is_u64() {
        // Integral but beyond i64: an exact parse would overflow.
        return None;
    }
    num.as_f64().map(|f| f as i64)
}

/// A validator for floating point values.
///
/// Accepts JSON numbers and strings holding a float. Non-finite results (for
/// example the string `"NaN"`) cannot be represented in JSON and are rejected
/// as `invalid_type`, like every other JSON type.
///
/// # Example
///
/// ```rust
/// use jsonvalid::{JsonPath, Schema};
/// use serde_json::json;
///
/// let ratio = Schema::float().min(0.0).max(1.0);
///
/// let result = ratio.validate(&json!("0.25"), &JsonPath::root());
/// assert_eq!(result.into_result().unwrap(), 0.25);
/// ```
#[derive(Clone, Debug)]
pub struct FloatValidator {
    required: bool,
    default_value: f64,
    checks: CheckChain<f64>,
}

impl FloatValidator {
    /// Creates an optional float validator defaulting to `0.0`.
    pub fn new() -> Self {
        Self {
            required: false,
            default_value: 0.0,
            checks: CheckChain::new(),
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
    pub fn default(&self, value: f64) -> Self {
        Self {
            default_value: value,
            ..self.clone()
        }
    }

    /// Returns a copy with `check` appended to the check chain.
    pub fn custom<F>(&self, check: F) -> Self
    where
        F: Fn(f64) -> Result<f64, ValueError> + Send + Sync + 'static,
    {
        Self {
            checks: self.checks.with(check),
            ..self.clone()
        }
    }

    /// Requires the value to be at least `min`.
    pub fn min(&self, min: f64) -> Self {
        self.custom(move |value| {
            if value < min {
                Err(ValueError::invalid(format!("Value must be at least {}", min)))
            } else {
                Ok(value)
            }
        })
    }

    /// Requires the value to be at most `max`.
    pub fn max(&self, max: f64) -> Self {
        self.custom(move |value| {
            if value > max {
                Err(ValueError::invalid(format!("Value must be at most {}", max)))
            } else {
                Ok(value)
            }
        })
    }

    /// Validates a value against this validator.
    pub fn validate(&self, value: &Value, path: &JsonPath) -> Validation<f64, ValidationError> {
        let f = match value {
            Value::Null => return absent(self.required, || self.default_value, path),
            Value::Number(num) => num.as_f64(),
            Value::String(s) => s.parse::<f64>().ok(),
            _ => None,
        };

        let Some(f) = f.filter(|f| f.is_finite()) else {
            return fail(path, ValueError::invalid_type(FLOAT_TYPE_MESSAGE));
        };

        match self.checks.apply(f) {
            Ok(f) => Validation::Success(f),
            Err(error) => fail(path, error),
        }
    }
}

impl Default for FloatValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueValidator for FloatValidator {
    fn validate_value(&self, value: &Value, path: &JsonPath) -> ValidateResult {
        Ok(self.validate(value, path).and_then(|f| match Number::from_f64(f) {
            Some(num) => Validation::Success(Value::Number(num)),
            // A custom check produced NaN or an infinity.
            None => fail(path, ValueError::invalid_type(FLOAT_TYPE_MESSAGE)),
        }))
    }
}
