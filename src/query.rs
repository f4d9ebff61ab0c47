use std::fmt;

use log::debug;
use serde_json::Value;

use crate::{
    env::Environment,
    errors::JSONPathError,
    node::Node,
    result::EvaluationResult,
    token::Token,
};

/// A sequence of tokens applied left to right, starting from the root of a
/// JSON document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub tokens: Vec<Token>,
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "${}",
            self.tokens
                .iter()
                .map(|t| t.to_string())
                .collect::<Vec<String>>()
                .join("")
        )
    }
}

impl Query {
    pub fn new(tokens: Vec<Token>) -> Self {
        Query { tokens }
    }

    /// `$`, a query that selects the document itself.
    pub fn root() -> Self {
        Query { tokens: Vec::new() }
    }

    pub fn deep_scan(mut self, indices: impl IntoIterator<Item = i64>) -> Self {
        self.tokens.push(Token::deep_scan(indices));
        self
    }

    pub fn wildcard(mut self) -> Self {
        self.tokens.push(Token::Wildcard);
        self
    }

    pub fn index(mut self, index: i64) -> Self {
        self.tokens.push(Token::ArrayAccessor { index });
        self
    }

    pub fn find<'v>(
        &self,
        value: &'v Value,
        env: &Environment,
    ) -> Result<EvaluationResult<'v>, JSONPathError> {
        let rv = self
            .tokens
            .iter()
            .try_fold(EvaluationResult::single(Node::root(value)), |current, token| {
                token.apply(current, env)
            })?;

        debug!("{self} matched {} nodes", rv.len());
        Ok(rv)
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// True if this query can select at most one node.
    pub fn is_singular(&self) -> bool {
        self.tokens
            .iter()
            .all(|token| matches!(token, Token::ArrayAccessor { .. }))
    }
}
