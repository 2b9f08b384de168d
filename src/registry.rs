//! Named validator storage.
//!
//! [`SchemaRegistry`] lets an application build its validators once at
//! startup and look them up by name from any thread afterwards.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::Value;
use stillwater::Validation;

use crate::error::{InternalError, ValidationError};
use crate::path::JsonPath;
use crate::schema::{Validator, ValueValidator};

type ValidatorMap = Arc<RwLock<HashMap<String, Arc<Validator>>>>;

/// A thread-safe map from names to validators.
///
/// Clones share the same storage. Lookups take a read lock and return an
/// `Arc`, so validation itself runs without holding the lock.
///
/// # Example
///
/// ```rust
/// use jsonvalid::{Schema, SchemaRegistry};
/// use serde_json::json;
///
/// let registry = SchemaRegistry::new();
/// registry
///     .register(
///         "Login",
///         Schema::object([
///             Schema::prop("user", Schema::string().required()),
///             Schema::prop("remember", Schema::bool()),
///         ]),
///     )
///     .unwrap();
///
/// let result = registry.validate("Login", &json!({"user": "ada"})).unwrap();
/// assert!(result.is_success());
///
/// assert!(registry.validate("Signup", &json!({})).is_err());
/// ```
#[derive(Clone)]
pub struct SchemaRegistry {
    validators: ValidatorMap,
}

impl SchemaRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            validators: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Registers `validator` under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateName`] if the name is taken; the
    /// existing validator is kept.
    pub fn register(
        &self,
        name: impl Into<String>,
        validator: impl Into<Validator>,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        let validator = validator.into();
        let mut validators = self.validators.write();

        if validators.contains_key(&name) {
            return Err(RegistryError::DuplicateName(name));
        }

        tracing::trace!(name = %name, kind = validator.kind(), "registered schema");
        validators.insert(name, Arc::new(validator));
        Ok(())
    }

    /// Returns the validator registered under `name`.
    pub fn get(&self, name: &str) -> Option<Arc<Validator>> {
        self.validators.read().get(name).cloned()
    }

    /// Returns true if `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.validators.read().contains_key(name)
    }

    /// Returns the registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.validators.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Returns the number of registered validators.
    pub fn len(&self) -> usize {
        self.validators.read().len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.validators.read().is_empty()
    }

    /// Validates `value` at the root path with the validator named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::SchemaNotFound`] for an unknown name, and
    /// [`RegistryError::Internal`] if validation had to be aborted.
    pub fn validate(
        &self,
        name: &str,
        value: &Value,
    ) -> Result<Validation<Value, ValidationError>, RegistryError> {
        let validator = self
            .get(name)
            .ok_or_else(|| RegistryError::SchemaNotFound(name.to_string()))?;

        Ok(validator.validate_value(value, &JsonPath::root())?)
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur during registry operations.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Attempted to register a validator under a name that already exists.
    #[error("schema '{0}' already registered")]
    DuplicateName(String),

    /// Attempted to validate with a name that doesn't exist.
    #[error("schema '{0}' not found")]
    SchemaNotFound(String),

    /// The named validator aborted.
    #[error(transparent)]
    Internal(#[from] InternalError),
}
