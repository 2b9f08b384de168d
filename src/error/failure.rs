//! Non-validation failures.
//!
//! These errors are never accumulated with field errors: they abort the
//! validation that produced them and propagate unchanged to the caller.

use std::io;

use super::validation_error::ValidationError;

/// A programmer or configuration error raised while validating.
///
/// Currently only produced by the structural converter, when a validated object
/// cannot be turned into the configured target type.
#[derive(Debug, thiserror::Error)]
pub enum InternalError {
    /// The validated object could not be re-encoded.
    #[error("cannot encode validated object: {0}")]
    Encode(#[source] serde_json::Error),

    /// The validated object does not decode into the target type.
    #[error("cannot unmarshal object to {target}: {source}")]
    Decode {
        target: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The target type does not encode back to a JSON object.
    #[error("cannot unmarshal object to {target}: target is not a structure")]
    NotAStructure { target: &'static str },
}

/// The request body could not be turned into a generic JSON object.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Reading the body failed.
    #[error("failed to read request body: {0}")]
    Read(#[from] io::Error),

    /// The body is larger than the configured limit.
    #[error("request body exceeds {limit} bytes")]
    TooLarge { limit: u64 },

    /// The body is not well-formed JSON.
    #[error("malformed JSON body: {0}")]
    Json(#[from] serde_json::Error),

    /// The body is well-formed JSON but not an object.
    #[error("request body must be a JSON object")]
    NotAnObject,
}

/// Any failure of a parse-and-validate call.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input was not well-formed; carries no path information.
    #[error("parse error")]
    Parse(#[from] ParseError),

    /// The input was well-formed but invalid.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// Validation could not be completed.
    #[error(transparent)]
    Internal(#[from] InternalError),
}

impl Error {
    /// Returns the field errors if this is a validation failure.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Error::Validation(errors) => Some(errors),
            _ => None,
        }
    }

    /// Returns true if the input could not be parsed.
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse(_))
    }
}
