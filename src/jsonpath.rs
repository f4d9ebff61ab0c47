use lazy_static::lazy_static;
use serde_json::Value;

use crate::{env::Environment, errors::JSONPathError, result::EvaluationResult, Query};

lazy_static! {
    pub static ref ENV: Environment = Environment::standard();
}

/// Evaluate `query` against `value` with standard settings.
pub fn find<'v>(query: &Query, value: &'v Value) -> Result<EvaluationResult<'v>, JSONPathError> {
    query.find(value, &ENV)
}
