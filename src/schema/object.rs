//! Object validation.
//!
//! This module provides [`ObjectValidator`] for validating JSON objects against
//! a set of declared properties, and [`ObjectProp`] which binds a property name
//! to its validator.

use std::sync::Arc;

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use stillwater::{Semigroup, Validation};

use crate::convert::{unmarshal_absent, unmarshal_object, StructTarget};
use crate::error::{ValidationError, ValueError};
use crate::path::JsonPath;

use super::traits::{absent, fail, ValidateResult, ValueValidator};
use super::Validator;

/// A property name bound to the validator for its value.
#[derive(Clone, Debug)]
pub struct ObjectProp {
    name: String,
    validator: Validator,
}

impl ObjectProp {
    /// Creates a property binding.
    pub fn new(name: impl Into<String>, validator: impl Into<Validator>) -> Self {
        Self {
            name: name.into(),
            validator: validator.into(),
        }
    }

    /// The property name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The property's validator.
    pub fn validator(&self) -> &Validator {
        &self.validator
    }
}

/// A validator for JSON objects.
///
/// Validation visits every property provided in the input (in document order),
/// reporting undeclared ones as `invalid_property`, and then every declared
/// property missing from the input, which is validated as `null` so its own
/// validator decides between `required` and its default. All field errors are
/// returned together; an object with errors yields no partial result.
///
/// An absent object is `null` unless the validator is required.
///
/// # Example
///
/// ```rust
/// use jsonvalid::{JsonPath, Schema};
/// use serde_json::json;
///
/// let user = Schema::object([
///     Schema::prop("name", Schema::string().strip().required()),
///     Schema::prop("age", Schema::int().min(0)),
///     Schema::prop("admin", Schema::bool()),
/// ]);
///
/// let result = user.validate(&json!({"name": " Ada ", "age": "36"}), &JsonPath::root()).unwrap();
/// assert_eq!(
///     result.into_result().unwrap(),
///     json!({"name": "Ada", "age": 36, "admin": false})
/// );
///
/// let result = user.validate(&json!({"age": -1, "role": "x"}), &JsonPath::root()).unwrap();
/// assert_eq!(result.into_result().unwrap_err().len(), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ObjectValidator {
    required: bool,
    props: Arc<IndexMap<String, ObjectProp>>,
    target: Option<StructTarget>,
}

impl ObjectValidator {
    /// Creates an optional object validator with no declared properties.
    pub fn new() -> Self {
        Self {
            required: false,
            props: Arc::new(IndexMap::new()),
            target: None,
        }
    }

    /// Creates an object validator declaring `props`.
    ///
    /// When two props share a name the last one wins.
    pub fn with_props(props: impl IntoIterator<Item = ObjectProp>) -> Self {
        let props = props
            .into_iter()
            .map(|prop| (prop.name.clone(), prop))
            .collect();
        Self {
            props: Arc::new(props),
            ..Self::new()
        }
    }

    /// Returns a copy that rejects absent values.
    pub fn required(&self) -> Self {
        Self {
            required: true,
            ..self.clone()
        }
    }

    /// Returns a copy declaring property `name`, replacing any earlier
    /// declaration of the same name.
    pub fn prop(&self, name: impl Into<String>, validator: impl Into<Validator>) -> Self {
        let prop = ObjectProp::new(name, validator);
        let mut props = IndexMap::clone(&self.props);
        props.insert(prop.name.clone(), prop);
        Self {
            props: Arc::new(props),
            ..self.clone()
        }
    }

    /// Returns a copy that converts validated objects through `target`.
    ///
    /// See [`StructTarget`] for how the conversion shapes the result.
    pub fn unmarshal_to(&self, target: StructTarget) -> Self {
        Self {
            target: Some(target),
            ..self.clone()
        }
    }

    /// Returns the declared property for `name`.
    pub fn get_prop(&self, name: &str) -> Option<&ObjectProp> {
        self.props.get(name)
    }

    /// Iterates over the declared properties in declaration order.
    pub fn props(&self) -> impl Iterator<Item = &ObjectProp> {
        self.props.values()
    }

    /// Validates a value and returns the generic property map.
    ///
    /// No structural conversion is applied. `None` means the object was absent
    /// and not required.
    pub fn validate_map(
        &self,
        value: &Value,
        path: &JsonPath,
    ) -> ValidateResult<Option<Map<String, Value>>> {
        let object = match value {
            Value::Null => return Ok(absent(self.required, || None, path)),
            Value::Object(object) => object,
            _ => return Ok(fail(path, ValueError::invalid_type("Value must be an object"))),
        };

        let mut validated = Map::new();
        let mut errors: Option<ValidationError> = None;

        for (name, provided) in object {
            let prop_path = path.prop(name.as_str());
            let outcome = match self.props.get(name) {
                Some(prop) => prop.validator.validate_value(provided, &prop_path)?,
                None => fail(&prop_path, ValueError::INVALID_PROPERTY),
            };

            match outcome {
                Validation::Success(v) => {
                    validated.insert(name.clone(), v);
                }
                Validation::Failure(e) => errors = errors.combine(Some(e)),
            }
        }

        for (name, prop) in self.props.iter() {
            if object.contains_key(name) {
                continue;
            }

            match prop.validator.validate_value(&Value::Null, &path.prop(name.as_str()))? {
                Validation::Success(v) => {
                    validated.insert(name.clone(), v);
                }
                Validation::Failure(e) => errors = errors.combine(Some(e)),
            }
        }

        Ok(match errors {
            Some(errors) => Validation::Failure(errors),
            None => Validation::Success(Some(validated)),
        })
    }

    /// Validates a value against this validator.
    ///
    /// Returns the validated object, converted through the configured
    /// [`StructTarget`] if there is one, or `null` if the object was absent.
    pub fn validate(&self, value: &Value, path: &JsonPath) -> ValidateResult<Value> {
        let validated = match self.validate_map(value, path)? {
            Validation::Success(Some(validated)) => validated,
            Validation::Success(None) => return Ok(Validation::Success(Value::Null)),
            Validation::Failure(errors) => return Ok(Validation::Failure(errors)),
        };

        match &self.target {
            Some(target) => Ok(Validation::Success(target.apply(&validated)?)),
            None => Ok(Validation::Success(Value::Object(validated))),
        }
    }

    /// Validates a value and converts the validated object into `T`.
    ///
    /// This is the typed entry point for a root object: it ignores any
    /// configured [`StructTarget`] and decodes straight into `T`. Use
    /// `T = Box<U>` to receive a boxed instance, or `T = Option<U>` to accept an
    /// absent object.
    ///
    /// # Example
    ///
    /// ```rust
    /// use jsonvalid::{JsonPath, Schema};
    /// use serde::Deserialize;
    /// use serde_json::json;
    ///
    /// #[derive(Deserialize)]
    /// struct Signup {
    ///     email: String,
    ///     newsletter: bool,
    /// }
    ///
    /// let schema = Schema::object([
    ///     Schema::prop("email", Schema::string().strip().required()),
    ///     Schema::prop("newsletter", Schema::bool()),
    /// ]);
    ///
    /// let signup: Signup = schema
    ///     .validate_into(&json!({"email": " a@b.c "}), &JsonPath::root())
    ///     .unwrap()
    ///     .into_result()
    ///     .unwrap();
    ///
    /// assert_eq!(signup.email, "a@b.c");
    /// assert!(!signup.newsletter);
    /// ```
    pub fn validate_into<T: DeserializeOwned>(
        &self,
        value: &Value,
        path: &JsonPath,
    ) -> ValidateResult<T> {
        Ok(match self.validate_map(value, path)? {
            Validation::Success(Some(validated)) => Validation::Success(unmarshal_object(&validated)?),
            Validation::Success(None) => Validation::Success(unmarshal_absent()?),
            Validation::Failure(errors) => Validation::Failure(errors),
        })
    }
}

impl ValueValidator for ObjectValidator {
    fn validate_value(&self, value: &Value, path: &JsonPath) -> ValidateResult {
        self.validate(value, path)
    }
}
