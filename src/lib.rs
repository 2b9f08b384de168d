//! # jsonvalid
//!
//! Declarative validation and normalization of untyped JSON documents, such as
//! HTTP request bodies.
//!
//! ## Overview
//!
//! A schema is a tree of composable validators. Validating a decoded
//! [`serde_json::Value`] against it either produces a normalized value (types
//! coerced, strings trimmed, defaults filled in, optionally converted into a
//! caller-defined struct) or a [`ValidationError`] listing *every* invalid
//! field, each with a path like `users[1].email` and a machine-readable code.
//! Errors are accumulated with stillwater's `Validation`, so one pass reports
//! all problems instead of stopping at the first.
//!
//! ## Core Types
//!
//! - [`Schema`]: factory for the built-in validators
//! - [`ObjectValidator`], [`ArrayValidator`], [`StringValidator`],
//!   [`IntValidator`], [`FloatValidator`], [`BoolValidator`]
//! - [`JsonPath`]: location of a value within a document
//! - [`ValueError`], [`FieldError`], [`ValidationError`]: field-level errors
//! - [`Error`]: everything a parse-and-validate call can fail with
//!
//! ## Example
//!
//! ```rust
//! use jsonvalid::{Error, Schema};
//!
//! let schema = Schema::object([
//!     Schema::prop("email", Schema::string().strip().required()),
//!     Schema::prop("age", Schema::int().min(13)),
//!     Schema::prop("tags", Schema::array_of(Schema::string().one_of(["a", "b"]))),
//! ]);
//!
//! let body = br#"{"email": "  ", "age": "9", "tags": ["a", "z"], "admin": true}"#;
//! let err = schema.parse_and_validate_slice(body).unwrap_err();
//!
//! let errors = err.as_validation().unwrap();
//! let codes: Vec<(String, &str)> = errors
//!     .iter()
//!     .map(|e| (e.path.to_string(), e.code()))
//!     .collect();
//!
//! assert_eq!(
//!     codes,
//!     vec![
//!         ("email".to_string(), "required"),
//!         ("age".to_string(), "invalid"),
//!         ("tags[1]".to_string(), "invalid"),
//!         ("admin".to_string(), "invalid_property"),
//!     ]
//! );
//! ```

pub mod batch;
pub mod convert;
pub mod error;
pub mod ingest;
pub mod path;
pub mod registry;
pub mod schema;

pub use convert::StructTarget;
pub use error::{Error, FieldError, InternalError, ParseError, ValidationError, ValueError};
pub use ingest::IngestOptions;
pub use path::{JsonPath, PathSegment};
pub use registry::{RegistryError, SchemaRegistry};
pub use schema::{
    ArrayValidator, BoolValidator, FloatValidator, IntValidator, ObjectProp, ObjectValidator,
    Schema, StringValidator, ValidateResult, Validator, ValueValidator,
};
