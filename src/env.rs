use serde::Deserialize;

use crate::errors::JSONPathError;

/// The deepest container a deep scan will visit below its starting node,
/// unless configured otherwise.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Evaluation settings shared by every token in a query.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Environment {
    pub max_depth: usize,
}

impl Environment {
    pub fn standard() -> Self {
        Environment {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Load settings from a JSON configuration document. Missing fields keep
    /// their standard values.
    pub fn from_json(config: &str) -> Result<Self, JSONPathError> {
        Ok(serde_json::from_str(config)?)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::standard()
    }
}
