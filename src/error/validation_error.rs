//! Field errors and their ordered aggregate.
//!
//! [`ValidationError`] is the only error surfaced for invalid input. It wraps a
//! `NonEmptyVec<FieldError>` so a failed validation always carries at least one
//! located error, and implements `Semigroup` so errors found in independent
//! subtrees can be concatenated in discovery order.

use std::fmt::{self, Display};

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};
use stillwater::prelude::*;

use crate::path::JsonPath;

use super::value_error::ValueError;

/// A [`ValueError`] located at a specific path.
///
/// Serialises flat as `{"path": ..., "code": ..., "message": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Where in the document the error occurred.
    pub path: JsonPath,
    /// What went wrong.
    #[serde(flatten)]
    pub error: ValueError,
}

impl FieldError {
    /// Creates a field error.
    pub fn new(path: JsonPath, error: ValueError) -> Self {
        Self { path, error }
    }

    /// The error code.
    pub fn code(&self) -> &str {
        &self.error.code
    }

    /// The human-readable message.
    pub fn message(&self) -> &str {
        &self.error.message
    }
}

impl Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_root() {
            write!(f, "(root): {}", self.error)
        } else {
            write!(f, "{}: {}", self.path, self.error)
        }
    }
}

/// An ordered, non-empty collection of field errors.
///
/// Insertion order is discovery order during traversal. Concatenation appends
/// the right-hand errors after the left-hand ones:
///
/// ```rust
/// use jsonvalid::{JsonPath, ValidationError, ValueError};
///
/// let name = ValidationError::at(JsonPath::root().prop("name"), ValueError::REQUIRED);
/// let age = ValidationError::at(JsonPath::root().prop("age"), ValueError::INVALID);
///
/// let combined = name.concat(age);
/// assert_eq!(combined.len(), 2);
/// assert_eq!(combined.first().path.to_string(), "name");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError(NonEmptyVec<FieldError>);

impl ValidationError {
    /// Creates a validation error containing a single field error.
    pub fn single(error: FieldError) -> Self {
        Self(NonEmptyVec::singleton(error))
    }

    /// Shorthand for a single `error` located at `path`.
    pub fn at(path: JsonPath, error: ValueError) -> Self {
        Self::single(FieldError::new(path, error))
    }

    /// Creates a validation error from a list of field errors.
    ///
    /// Returns `None` if `errors` is empty.
    pub fn from_vec(errors: Vec<FieldError>) -> Option<Self> {
        NonEmptyVec::from_vec(errors).map(Self)
    }

    /// Returns a new error with `other`'s field errors appended after these.
    pub fn concat(self, other: Self) -> Self {
        self.combine(other)
    }

    /// Returns the number of field errors.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; a validation error holds at least one field error.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns an iterator over the field errors in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Returns the first field error discovered.
    pub fn first(&self) -> &FieldError {
        self.0.head()
    }

    /// Returns all field errors located at `path`.
    pub fn at_path(&self, path: &JsonPath) -> Vec<&FieldError> {
        self.0.iter().filter(|e| &e.path == path).collect()
    }

    /// Returns all field errors with the given code.
    pub fn with_code(&self, code: &str) -> Vec<&FieldError> {
        self.0.iter().filter(|e| e.code() == code).collect()
    }

    /// Converts this collection into a `Vec<FieldError>`.
    pub fn into_vec(self) -> Vec<FieldError> {
        self.0.into_vec()
    }
}

impl Semigroup for ValidationError {
    fn combine(self, other: Self) -> Self {
        ValidationError(self.0.combine(other.0))
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "validation error: {} invalid field(s):", self.len())?;
        for (i, error) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

impl Serialize for ValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for error in self.iter() {
            seq.serialize_element(error)?;
        }
        seq.end()
    }
}

impl IntoIterator for ValidationError {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationError {
    type Item = &'a FieldError;
    type IntoIter = Box<dyn Iterator<Item = &'a FieldError> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.0.iter())
    }
}

// Validation errors cross thread boundaries in batch validation.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ValidationError>();
    assert_sync::<ValidationError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn at(name: &str, error: ValueError) -> ValidationError {
        ValidationError::at(JsonPath::root().prop(name), error)
    }

    #[test]
    fn test_single() {
        let errors = at("name", ValueError::REQUIRED);
        assert_eq!(errors.len(), 1);
        assert!(!errors.is_empty());
        assert_eq!(errors.first().code(), "required");
        assert_eq!(errors.first().message(), "This field is required");
    }

    #[test]
    fn test_from_vec_rejects_empty() {
        assert!(ValidationError::from_vec(Vec::new()).is_none());
    }

    #[test]
    fn test_concat_preserves_order() {
        let combined = at("a", ValueError::REQUIRED)
            .concat(at("b", ValueError::INVALID))
            .concat(at("c", ValueError::INVALID_PROPERTY));

        let paths: Vec<String> = combined.iter().map(|e| e.path.to_string()).collect();
        assert_eq!(paths, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_concat_is_associative() {
        let e1 = at("a", ValueError::REQUIRED);
        let e2 = at("b", ValueError::INVALID);
        let e3 = at("c", ValueError::INVALID);

        let left = e1.clone().concat(e2.clone()).concat(e3.clone());
        let right = e1.concat(e2.concat(e3));

        assert_eq!(left, right);
    }

    #[test]
    fn test_concat_leaves_inputs_reusable() {
        let left = at("a", ValueError::REQUIRED);
        let right = at("b", ValueError::INVALID);

        let combined = left.clone().concat(right.clone());

        assert_eq!(combined.len(), 2);
        assert_eq!(left.len(), 1);
        assert_eq!(right.len(), 1);
    }

    #[test]
    fn test_queries() {
        let path_a = JsonPath::root().prop("a");
        let errors = at("a", ValueError::REQUIRED)
            .concat(at("a", ValueError::INVALID))
            .concat(at("b", ValueError::REQUIRED));

        assert_eq!(errors.at_path(&path_a).len(), 2);
        assert_eq!(errors.with_code("required").len(), 2);
        assert_eq!(errors.with_code("invalid").len(), 1);
    }

    #[test]
    fn test_field_error_serialized_shape() {
        let error = FieldError::new(JsonPath::root().prop("items").elem(1), ValueError::REQUIRED);
        assert_eq!(
            serde_json::to_value(&error).unwrap(),
            json!({"path": "items[1]", "code": "required", "message": "This field is required"})
        );
    }

    #[test]
    fn test_validation_error_serializes_as_list() {
        let errors = at("a", ValueError::REQUIRED).concat(at("b", ValueError::INVALID));
        let value = serde_json::to_value(&errors).unwrap();

        assert_eq!(value.as_array().map(Vec::len), Some(2));
        assert_eq!(value[1]["path"], "b");
        assert_eq!(value[1]["code"], "invalid");
    }

    #[test]
    fn test_display() {
        let errors = at("name", ValueError::REQUIRED)
            .concat(ValidationError::at(JsonPath::root(), ValueError::INVALID));
        let display = errors.to_string();

        assert!(display.contains("2 invalid field(s)"));
        assert!(display.contains("name: This field is required (required)"));
        assert!(display.contains("(root): Invalid value (invalid)"));
    }

    #[test]
    fn test_into_iter() {
        let errors = at("a", ValueError::REQUIRED).concat(at("b", ValueError::INVALID));
        let collected: Vec<FieldError> = errors.into_iter().collect();
        assert_eq!(collected.len(), 2);
    }
}
