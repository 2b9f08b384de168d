//! String validation.
//!
//! This module provides [`StringValidator`] for validating string values, with
//! trimming transformations, membership and pattern checks.

use std::collections::HashSet;

use regex::Regex;
use serde_json::Value;
use stillwater::Validation;

use crate::error::{ValidationError, ValueError};
use crate::path::JsonPath;

use super::chain::CheckChain;
use super::traits::{absent, fail, ValidateResult, ValueValidator};

/// A validator for string values.
///
/// Only native JSON strings are accepted. Checks run in registration order and
/// may transform the value; the first failing check becomes the field error.
/// Required-ness is re-evaluated after the checks, so a value that only becomes
/// empty after trimming is still reported as `required`.
///
/// # Example
///
/// ```rust
/// use jsonvalid::{JsonPath, Schema};
/// use serde_json::json;
///
/// let name = Schema::string().strip().required();
///
/// let result = name.validate(&json!("  Ada  "), &JsonPath::root());
/// assert_eq!(result.into_result().unwrap(), "Ada");
///
/// let result = name.validate(&json!("   "), &JsonPath::root());
/// assert_eq!(result.into_result().unwrap_err().first().code(), "required");
/// ```
#[derive(Clone, Debug)]
pub struct StringValidator {
    required: bool,
    default_value: String,
    checks: CheckChain<String>,
}

impl StringValidator {
    /// Creates an optional string validator defaulting to `""`.
    pub fn new() -> Self {
        Self {
            required: false,
            default_value: String::new(),
            checks: CheckChain::new(),
        }
    }

    /// Returns a copy that rejects absent and empty values.
    pub fn required(&self) -> Self {
        Self {
            required: true,
            ..self.clone()
        }
    }

    /// Returns a copy that yields `value` when the input is absent.
    pub fn default(&self, value: impl Into<String>) -> Self {
        Self {
            default_value: value.into(),
            ..self.clone()
        }
    }

    /// Returns a copy with `check` appended to the check chain.
    ///
    /// # Example
    ///
    /// ```rust
    /// use jsonvalid::{JsonPath, Schema, ValueError};
    /// use serde_json::json;
    ///
    /// let slug = Schema::string().custom(|value| {
    ///     if value.contains(' ') {
    ///         Err(ValueError::invalid("Slugs cannot contain spaces"))
    ///     } else {
    ///         Ok(value.to_lowercase())
    ///     }
    /// });
    ///
    /// let result = slug.validate(&json!("Hello"), &JsonPath::root());
    /// assert_eq!(result.into_result().unwrap(), "hello");
    /// ```
    pub fn custom<F>(&self, check: F) -> Self
    where
        F: Fn(String) -> Result<String, ValueError> + Send + Sync + 'static,
    {
        Self {
            checks: self.checks.with(check),
            ..self.clone()
        }
    }

    /// Trims leading and trailing whitespace.
    pub fn strip(&self) -> Self {
        self.custom(|value| Ok(value.trim().to_string()))
    }

    /// Trims the value and collapses every inner whitespace run, newlines
    /// included, into a single space.
    pub fn strip_single_line(&self) -> Self {
        self.custom(|value| Ok(normalize_line(&value)))
    }

    /// Accepts only the listed values.
    pub fn one_of<I, S>(&self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let allowed: HashSet<String> = values.into_iter().map(Into::into).collect();
        self.custom(move |value| {
            if allowed.contains(&value) {
                Ok(value)
            } else {
                Err(ValueError::INVALID)
            }
        })
    }

    /// Requires the value to match the regular expression `expr`.
    ///
    /// Returns an error if `expr` does not compile.
    pub fn matches(&self, expr: &str) -> Result<Self, regex::Error> {
        Ok(self.matches_regex(Regex::new(expr)?))
    }

    /// Requires the value to match `regex`.
    pub fn matches_regex(&self, regex: Regex) -> Self {
        self.custom(move |value| {
            if regex.is_match(&value) {
                Ok(value)
            } else {
                Err(ValueError::INVALID)
            }
        })
    }

    /// Requires at least `min` characters (Unicode scalar values).
    pub fn min_len(&self, min: usize) -> Self {
        self.custom(move |value| {
            if value.chars().count() < min {
                Err(ValueError::invalid(format!(
                    "Value must be at least {} character(s) long",
                    min
                )))
            } else {
                Ok(value)
            }
        })
    }

    /// Requires at most `max` characters (Unicode scalar values).
    pub fn max_len(&self, max: usize) -> Self {
        self.custom(move |value| {
            if value.chars().count() > max {
                Err(ValueError::invalid(format!(
                    "Value must be at most {} character(s) long",
                    max
                )))
            } else {
                Ok(value)
            }
        })
    }

    /// Validates a value against this validator.
    pub fn validate(&self, value: &Value, path: &JsonPath) -> Validation<String, ValidationError> {
        let s = match value {
            Value::Null => return absent(self.required, || self.default_value.clone(), path),
            Value::String(s) => s.clone(),
            _ => return fail(path, ValueError::invalid_type("Value must be a string")),
        };

        let s = match self.checks.apply(s) {
            Ok(s) => s,
            Err(error) => return fail(path, error),
        };

        if s.is_empty() && self.required {
            return fail(path, ValueError::REQUIRED);
        }

        Validation::Success(s)
    }
}

impl Default for StringValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueValidator for StringValidator {
    fn validate_value(&self, value: &Value, path: &JsonPath) -> ValidateResult {
        Ok(self.validate(value, path).map(Value::String))
    }
}

/// Trims `s` and replaces each run of inner whitespace with one space.
pub fn normalize_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
