use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JSONPathErrorType {
    DepthError,
    JSONError,
}

impl fmt::Display for JSONPathErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JSONPathErrorType::DepthError => f.write_str("depth error"),
            JSONPathErrorType::JSONError => f.write_str("json error"),
        }
    }
}

#[derive(Debug, Error)]
#[error("{kind}: {msg}")]
pub struct JSONPathError {
    pub kind: JSONPathErrorType,
    pub msg: String,
}

impl JSONPathError {
    pub fn new(kind: JSONPathErrorType, msg: String) -> Self {
        Self { kind, msg }
    }

    /// A scan reached a container nested deeper than `limit`, at normalized path `path`.
    pub fn depth(limit: usize, path: String) -> Self {
        Self {
            kind: JSONPathErrorType::DepthError,
            msg: format!("maximum nesting depth of {limit} exceeded at {path}"),
        }
    }

    pub fn json(msg: String) -> Self {
        Self {
            kind: JSONPathErrorType::JSONError,
            msg,
        }
    }
}

impl From<serde_json::Error> for JSONPathError {
    fn from(err: serde_json::Error) -> Self {
        JSONPathError::json(err.to_string())
    }
}
