//! Parallel validation of independent documents.

use rayon::prelude::*;
use serde_json::Value;

use crate::path::JsonPath;
use crate::schema::{ValidateResult, ValueValidator};

/// Validates every document in `values` against `validator`.
///
/// Documents are validated in parallel on the rayon thread pool, each at the
/// root path. Results are returned in input order, one per document, so an
/// internal error in one document does not affect the others.
///
/// # Example
///
/// ```rust
/// use jsonvalid::batch::validate_batch;
/// use jsonvalid::Schema;
/// use serde_json::json;
///
/// let schema = Schema::object([Schema::prop("id", Schema::int().required())]);
/// let docs = vec![json!({"id": 1}), json!({}), json!({"id": "3"})];
///
/// let results = validate_batch(&schema, &docs);
/// let ok: Vec<bool> = results
///     .iter()
///     .map(|r| r.as_ref().unwrap().is_success())
///     .collect();
/// assert_eq!(ok, vec![true, false, true]);
/// ```
pub fn validate_batch<V>(validator: &V, values: &[Value]) -> Vec<ValidateResult>
where
    V: ValueValidator + ?Sized,
{
    let root = JsonPath::root();
    values
        .par_iter()
        .map(|value| validator.validate_value(value, &root))
        .collect()
}
