//! Parsing and validating request bodies.
//!
//! A body is read in full, decoded as a generic JSON object and validated at
//! the root path. Read and decode failures carry no path information and are
//! reported as [`Error::Parse`]; everything after decoding behaves exactly like
//! [`ObjectValidator::validate`].

use std::io::Read;

use serde_json::{Map, Value};
use stillwater::Validation;

use crate::error::{Error, ParseError};
use crate::path::JsonPath;
use crate::schema::ObjectValidator;

/// Limits applied while reading a request body.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IngestOptions {
    /// Maximum body size in bytes. `None` reads the whole body.
    pub max_body_bytes: Option<u64>,
}

impl IngestOptions {
    /// Options with no body limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy limiting bodies to `limit` bytes.
    pub fn max_body_bytes(self, limit: u64) -> Self {
        Self {
            max_body_bytes: Some(limit),
        }
    }
}

impl ObjectValidator {
    /// Reads a JSON body from `reader` and validates it at the root path.
    ///
    /// A `null` body is validated like `{}`, so required properties still
    /// report `required`. Any body that is not an object or `null` is a parse
    /// error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use jsonvalid::{Error, Schema};
    ///
    /// let schema = Schema::object([Schema::prop("q", Schema::string().required())]);
    ///
    /// let value = schema.parse_and_validate_body(&br#"{"q": "rust"}"#[..]).unwrap();
    /// assert_eq!(value["q"], "rust");
    ///
    /// let err = schema.parse_and_validate_body(&b"{not json"[..]).unwrap_err();
    /// assert!(matches!(err, Error::Parse(_)));
    /// assert_eq!(err.to_string(), "parse error");
    /// ```
    pub fn parse_and_validate_body<R: Read>(&self, reader: R) -> Result<Value, Error> {
        self.parse_and_validate_body_with(reader, &IngestOptions::default())
    }

    /// Like [`parse_and_validate_body`](Self::parse_and_validate_body), with
    /// explicit read limits.
    pub fn parse_and_validate_body_with<R: Read>(
        &self,
        reader: R,
        options: &IngestOptions,
    ) -> Result<Value, Error> {
        let body = read_body(reader, options).inspect_err(|e| {
            tracing::debug!(error = %e, "failed to read request body");
        })?;
        self.parse_and_validate_slice(&body)
    }

    /// Decodes `bytes` as a JSON body and validates it at the root path.
    pub fn parse_and_validate_slice(&self, bytes: &[u8]) -> Result<Value, Error> {
        let value = decode_object(bytes).inspect_err(|e| {
            tracing::debug!(error = %e, "failed to decode request body");
        })?;

        match self.validate(&value, &JsonPath::root())? {
            Validation::Success(value) => Ok(value),
            Validation::Failure(errors) => {
                tracing::debug!(errors = errors.len(), "request body failed validation");
                Err(Error::Validation(errors))
            }
        }
    }
}

fn read_body<R: Read>(reader: R, options: &IngestOptions) -> Result<Vec<u8>, ParseError> {
    let mut body = Vec::new();
    match options.max_body_bytes {
        Some(limit) => {
            // One byte past the limit is enough to tell an oversized body apart.
            reader.take(limit.saturating_add(1)).read_to_end(&mut body)?;
            if body.len() as u64 > limit {
                return Err(ParseError::TooLarge { limit });
            }
        }
        None => {
            let mut reader = reader;
            reader.read_to_end(&mut body)?;
        }
    }
    Ok(body)
}

fn decode_object(bytes: &[u8]) -> Result<Value, ParseError> {
    match serde_json::from_slice(bytes)? {
        value @ Value::Object(_) => Ok(value),
        Value::Null => Ok(Value::Object(Map::new())),
        _ => Err(ParseError::NotAnObject),
    }
}
