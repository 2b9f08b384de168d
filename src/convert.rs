//! Conversion of validated objects into caller-defined types.
//!
//! Conversion goes through a JSON round trip: the validated map is encoded and
//! then decoded into the target type with serde. Any failure here means the
//! schema and the target type disagree, which is a programming error, so it is
//! reported as an [`InternalError`] rather than a field error.

use std::any::type_name;
use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::InternalError;

/// Decodes a validated object into `T`.
///
/// # Example
///
/// ```rust
/// use jsonvalid::convert::unmarshal_object;
/// use serde::Deserialize;
/// use serde_json::json;
///
/// #[derive(Deserialize)]
/// struct Page {
///     number: u32,
/// }
///
/// let map = json!({"number": 4}).as_object().cloned().unwrap();
/// let page: Page = unmarshal_object(&map).unwrap();
/// assert_eq!(page.number, 4);
/// ```
pub fn unmarshal_object<T: DeserializeOwned>(object: &Map<String, Value>) -> Result<T, InternalError> {
    let encoded = serde_json::to_vec(object).map_err(|e| {
        tracing::debug!(target_type = type_name::<T>(), error = %e, "failed to encode validated object");
        InternalError::Encode(e)
    })?;

    serde_json::from_slice(&encoded).map_err(|e| {
        tracing::debug!(target_type = type_name::<T>(), error = %e, "failed to decode validated object");
        InternalError::Decode {
            target: type_name::<T>(),
            source: e,
        }
    })
}

/// Decodes an absent object into `T`.
///
/// Only types that accept `null`, such as `Option<U>`, succeed.
pub fn unmarshal_absent<T: DeserializeOwned>() -> Result<T, InternalError> {
    serde_json::from_value(Value::Null).map_err(|e| {
        tracing::debug!(target_type = type_name::<T>(), error = %e, "failed to decode absent object");
        InternalError::Decode {
            target: type_name::<T>(),
            source: e,
        }
    })
}

/// A structured type that validated objects are converted into.
///
/// When attached to an [`ObjectValidator`](crate::ObjectValidator), the
/// validated object is decoded into `T` and encoded back, so the result holds
/// exactly the shape `T` serializes to: renamed fields, skipped fields and
/// serde defaults all apply. The round trip must produce a JSON object,
/// otherwise validation aborts with [`InternalError::NotAStructure`].
///
/// `StructTarget::of::<Box<U>>()` converts through a boxed `U`; the resulting
/// shape is the same as for `U`.
///
/// Any type that serializes to a JSON object is accepted, so map types such as
/// `BTreeMap<String, Value>` work as targets alongside structs. Scalars and
/// sequences do not.
///
/// # Example
///
/// ```rust
/// use jsonvalid::{JsonPath, Schema, StructTarget};
/// use serde::{Deserialize, Serialize};
/// use serde_json::json;
///
/// #[derive(Serialize, Deserialize)]
/// struct Credentials {
///     user: String,
///     #[serde(skip_serializing)]
///     password: String,
/// }
///
/// let schema = Schema::object([
///     Schema::prop("user", Schema::string().required()),
///     Schema::prop("password", Schema::string().required()),
/// ])
/// .unmarshal_to(StructTarget::of::<Credentials>());
///
/// let result = schema
///     .validate(&json!({"user": "ada", "password": "hunter2"}), &JsonPath::root())
///     .unwrap();
/// assert_eq!(result.into_result().unwrap(), json!({"user": "ada"}));
/// ```
#[derive(Clone, Copy)]
pub struct StructTarget {
    type_name: &'static str,
    reshape: fn(&Map<String, Value>) -> Result<Value, InternalError>,
}

impl StructTarget {
    /// Creates a target for `T`.
    pub fn of<T: Serialize + DeserializeOwned>() -> Self {
        Self {
            type_name: type_name::<T>(),
            reshape: reshape_through::<T>,
        }
    }

    /// The name of the target type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Converts a validated object through the target type.
    pub fn apply(&self, object: &Map<String, Value>) -> Result<Value, InternalError> {
        let reshaped = (self.reshape)(object)?;
        if reshaped.is_object() {
            Ok(reshaped)
        } else {
            tracing::debug!(target_type = self.type_name, "conversion target is not a structure");
            Err(InternalError::NotAStructure {
                target: self.type_name,
            })
        }
    }
}

impl fmt::Debug for StructTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StructTarget").field(&self.type_name).finish()
    }
}

fn reshape_through<T: Serialize + DeserializeOwned>(
    object: &Map<String, Value>,
) -> Result<Value, InternalError> {
    let typed: T = unmarshal_object(object)?;
    serde_json::to_value(&typed).map_err(InternalError::Encode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Account {
        #[serde(rename = "accountId")]
        id: u64,
        #[serde(default)]
        active: bool,
    }

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {other}"),
        }
    }

    #[test]
    fn test_unmarshal_object() {
        let account: Account = unmarshal_object(&object(json!({"accountId": 7}))).unwrap();
        assert_eq!(account, Account { id: 7, active: false });
    }

    #[test]
    fn test_unmarshal_object_mismatch() {
        let result = unmarshal_object::<Account>(&object(json!({"accountId": "seven"})));
        match result {
            Err(InternalError::Decode { target, .. }) => assert!(target.ends_with("Account")),
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_unmarshal_absent() {
        let value: Option<Account> = unmarshal_absent().unwrap();
        assert!(value.is_none());
        assert!(unmarshal_absent::<Account>().is_err());
    }

    #[test]
    fn test_target_reshapes() {
        let target = StructTarget::of::<Account>();
        let value = target
            .apply(&object(json!({"accountId": 1, "ignored": "x"})))
            .unwrap();
        assert_eq!(value, json!({"accountId": 1, "active": false}));
    }

    #[test]
    fn test_boxed_target_has_same_shape() {
        let plain = StructTarget::of::<Account>();
        let boxed = StructTarget::of::<Box<Account>>();
        let input = object(json!({"accountId": 2, "active": true}));

        assert_eq!(plain.apply(&input).unwrap(), boxed.apply(&input).unwrap());
        assert!(boxed.type_name().contains("Box"));
    }

    #[test]
    fn test_non_structure_target() {
        #[derive(Deserialize)]
        struct Flag {
            on: bool,
        }

        impl Serialize for Flag {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_bool(self.on)
            }
        }

        let target = StructTarget::of::<Flag>();
        match target.apply(&object(json!({"on": true}))) {
            Err(InternalError::NotAStructure { target }) => assert!(target.ends_with("Flag")),
            other => panic!("expected NotAStructure, got {other:?}"),
        }
    }

    #[test]
    fn test_map_target_is_a_structure() {
        let target = StructTarget::of::<std::collections::BTreeMap<String, Value>>();
        let value = target.apply(&object(json!({"b": 1, "a": 2}))).unwrap();
        assert_eq!(value, json!({"a": 2, "b": 1}));
    }
}
