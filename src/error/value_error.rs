//! Value-level error descriptors.

use std::borrow::Cow;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Stable, machine-checkable error codes.
pub mod codes {
    /// The value is absent (or empty, for strings and arrays) but required.
    pub const REQUIRED: &str = "required";
    /// The value has the right type but fails a constraint.
    pub const INVALID: &str = "invalid";
    /// The value cannot be coerced to the expected type.
    pub const INVALID_TYPE: &str = "invalid_type";
    /// The object contains a property the schema does not declare.
    pub const INVALID_PROPERTY: &str = "invalid_property";
}

/// Why a single value is invalid: a code plus a human-readable message.
///
/// Serialises as `{"code": ..., "message": ...}`.
///
/// # Example
///
/// ```rust
/// use jsonvalid::ValueError;
///
/// let error = ValueError::new("too_young", "Applicants must be 18 or older");
/// assert_eq!(error.code, "too_young");
/// assert_eq!(ValueError::REQUIRED.message, "This field is required");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValueError {
    /// Error code (see [`codes`]).
    pub code: Cow<'static, str>,
    /// Human-readable error message.
    pub message: Cow<'static, str>,
}

impl ValueError {
    /// The value is required but absent.
    pub const REQUIRED: ValueError = ValueError {
        code: Cow::Borrowed(codes::REQUIRED),
        message: Cow::Borrowed("This field is required"),
    };

    /// Generic constraint failure.
    pub const INVALID: ValueError = ValueError {
        code: Cow::Borrowed(codes::INVALID),
        message: Cow::Borrowed("Invalid value"),
    };

    /// A property not declared by the object schema.
    pub const INVALID_PROPERTY: ValueError = ValueError {
        code: Cow::Borrowed(codes::INVALID_PROPERTY),
        message: Cow::Borrowed("Invalid property"),
    };

    /// Creates a value error with an arbitrary code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Creates an `invalid` error with a specific message.
    pub fn invalid(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(codes::INVALID, message)
    }

    /// Creates an `invalid_type` error with a specific message.
    pub fn invalid_type(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(codes::INVALID_TYPE, message)
    }
}

impl Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.code)
    }
}
