//! Error types for validation failures.
//!
//! Expected input problems are reported as a [`ValidationError`]: an ordered,
//! non-empty list of [`FieldError`]s, each a [`ValueError`] located at a
//! [`JsonPath`](crate::JsonPath). Anything else (a body that is not JSON, a
//! structural conversion that cannot be performed) has its own error type and is
//! never merged into the field errors.

mod failure;
mod validation_error;
mod value_error;

pub use failure::{Error, InternalError, ParseError};
pub use validation_error::{FieldError, ValidationError};
pub use value_error::{codes, ValueError};
