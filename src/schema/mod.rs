//! Validators for JSON values.
//!
//! Every validator takes a decoded [`serde_json::Value`] plus the path where
//! it sits and returns either the normalized value or every field error found
//! beneath that path. Composite validators (arrays and objects) never stop at
//! the first bad child.
//!
//! Validators are immutable: configuration methods return a modified copy and
//! leave the receiver as it was, so a base validator can be shared and
//! specialized freely.
//!
//! # Example
//!
//! ```rust
//! use jsonvalid::{JsonPath, Schema};
//! use serde_json::json;
//!
//! let schema = Schema::object([
//!     Schema::prop("title", Schema::string().strip_single_line().required()),
//!     Schema::prop("tags", Schema::array_of(Schema::string().required())),
//! ]);
//!
//! let result = schema
//!     .validate(&json!({"title": " Hello \n world ", "tags": ["a", ""]}), &JsonPath::root())
//!     .unwrap();
//!
//! let errors = result.into_result().unwrap_err();
//! assert_eq!(errors.first().path.to_string(), "tags[1]");
//! ```

mod array;
mod boolean;
mod chain;
mod numeric;
mod object;
mod string;
mod traits;

pub use array::ArrayValidator;
pub use boolean::BoolValidator;
pub use chain::ValueCheck;
pub use numeric::{FloatValidator, IntValidator};
pub use object::{ObjectProp, ObjectValidator};
pub use string::{normalize_line, StringValidator};
pub use traits::{ValidateResult, ValueValidator};

use serde_json::Value;

use crate::path::JsonPath;

/// Entry point for building validators.
///
/// Each factory returns an optional validator with the zero default of its
/// type; chain configuration methods onto it.
pub struct Schema;

impl Schema {
    /// Creates a string validator.
    pub fn string() -> StringValidator {
        StringValidator::new()
    }

    /// Creates an integer validator.
    pub fn int() -> IntValidator {
        IntValidator::new()
    }

    /// Creates a floating point validator.
    pub fn float() -> FloatValidator {
        FloatValidator::new()
    }

    /// Creates a boolean validator.
    pub fn bool() -> BoolValidator {
        BoolValidator::new()
    }

    /// Creates an array validator that passes elements through unchecked.
    pub fn array() -> ArrayValidator {
        ArrayValidator::new()
    }

    /// Creates an array validator checking every element with `item`.
    pub fn array_of(item: impl Into<Validator>) -> ArrayValidator {
        ArrayValidator::new().of(item)
    }

    /// Creates an object validator declaring `props`.
    pub fn object(props: impl IntoIterator<Item = ObjectProp>) -> ObjectValidator {
        ObjectValidator::with_props(props)
    }

    /// Binds a property name to a validator, for use with [`Schema::object`].
    pub fn prop(name: impl Into<String>, validator: impl Into<Validator>) -> ObjectProp {
        ObjectProp::new(name, validator)
    }
}

/// Any validator, as held inside arrays and objects.
///
/// The variant set is closed; user-defined rules hook in through the `custom`
/// checks of the scalar validators.
#[derive(Clone, Debug)]
pub enum Validator {
    String(StringValidator),
    Int(IntValidator),
    Float(FloatValidator),
    Bool(BoolValidator),
    Array(ArrayValidator),
    Object(ObjectValidator),
}

impl Validator {
    /// Returns a short name for the kind of value this validator accepts.
    pub fn kind(&self) -> &'static str {
        match self {
            Validator::String(_) => "string",
            Validator::Int(_) => "int",
            Validator::Float(_) => "float",
            Validator::Bool(_) => "bool",
            Validator::Array(_) => "array",
            Validator::Object(_) => "object",
        }
    }
}

impl ValueValidator for Validator {
    fn validate_value(&self, value: &Value, path: &JsonPath) -> ValidateResult {
        match self {
            Validator::String(v) => v.validate_value(value, path),
            Validator::Int(v) => v.validate_value(value, path),
            Validator::Float(v) => v.validate_value(value, path),
            Validator::Bool(v) => v.validate_value(value, path),
            Validator::Array(v) => v.validate_value(value, path),
            Validator::Object(v) => v.validate_value(value, path),
        }
    }
}

macro_rules! impl_from_validator {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Validator {
                fn from(v: $ty) -> Self {
                    Validator::$variant(v)
                }
            }
        )*
    };
}

impl_from_validator! {
    String => StringValidator,
    Int => IntValidator,
    Float => FloatValidator,
    Bool => BoolValidator,
    Array => ArrayValidator,
    Object => ObjectValidator,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_factories_build_optional_validators() {
        let validators: Vec<Validator> = vec![
            Schema::string().into(),
            Schema::int().into(),
            Schema::float().into(),
            Schema::bool().into(),
            Schema::array().into(),
            ObjectValidator::new().into(),
        ];

        let kinds: Vec<&str> = validators.iter().map(Validator::kind).collect();
        assert_eq!(kinds, vec!["string", "int", "float", "bool", "array", "object"]);

        let expected = [json!(""), json!(0), json!(0.0), json!(false), json!([]), Value::Null];
        for (validator, expected) in validators.iter().zip(expected) {
            let result = validator.validate_value(&Value::Null, &JsonPath::root()).unwrap();
            assert_eq!(result.into_result().unwrap(), expected);
        }
    }

    #[test]
    fn test_dispatch_preserves_path() {
        let validator: Validator = Schema::int().required().into();
        let path = JsonPath::root().prop("count");
        let result = validator.validate_value(&Value::Null, &path).unwrap();

        let errors = result.into_result().unwrap_err();
        assert_eq!(errors.first().path, path);
    }

    #[test]
    fn test_validator_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Validator>();
    }
}
