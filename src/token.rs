use std::fmt;

use log::trace;

use crate::{
    env::Environment,
    errors::JSONPathError,
    node::{Node, NodeList},
    result::{EvaluationResult, ScopeKind},
    segment::deep_scan,
    selector::{expand, select_index},
};

/// A single step in a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `..[i, j, ...]`, select indices from every array at any depth.
    DeepScanArrayAccessor { indices: Vec<i64> },
    /// `[*]`, every immediate child.
    Wildcard,
    /// `[i]`, one index of the current array.
    ArrayAccessor { index: i64 },
}

impl Token {
    pub fn deep_scan(indices: impl IntoIterator<Item = i64>) -> Self {
        Token::DeepScanArrayAccessor {
            indices: indices.into_iter().collect(),
        }
    }

    /// The scope of this token's output given the scope of its input. Deep scans
    /// and wildcards always start a new set of roots.
    pub fn output_scope(&self, input: ScopeKind) -> ScopeKind {
        match self {
            Token::DeepScanArrayAccessor { .. } | Token::Wildcard => ScopeKind::Wildcard,
            Token::ArrayAccessor { .. } => input,
        }
    }

    /// Apply this token to the output of the previous step.
    ///
    /// A wildcard scoped input is read one node at a time and the outputs are
    /// concatenated in node order. A single scoped input is read once, from its
    /// first node.
    pub fn apply<'v>(
        &self,
        current: EvaluationResult<'v>,
        env: &Environment,
    ) -> Result<EvaluationResult<'v>, JSONPathError> {
        let scope = self.output_scope(current.scope);
        let nodes = match current.scope {
            ScopeKind::Wildcard => {
                let mut nodes: NodeList<'v> = Vec::new();
                for node in current.nodes.iter() {
                    nodes.append(&mut self.read(node, env)?);
                }
                nodes
            }
            ScopeKind::Single => match current.nodes.first() {
                Some(node) => self.read(node, env)?,
                None => Vec::new(),
            },
        };

        trace!("{self} produced {} nodes with {:?} scope", nodes.len(), scope);
        Ok(EvaluationResult::new(nodes, scope))
    }

    /// Read one node in isolation.
    pub fn read<'v>(
        &self,
        node: &Node<'v>,
        env: &Environment,
    ) -> Result<NodeList<'v>, JSONPathError> {
        match self {
            Token::DeepScanArrayAccessor { indices } => deep_scan(node, indices, env.max_depth),
            Token::Wildcard => Ok(expand(node)),
            Token::ArrayAccessor { index } => Ok(select_index(node, *index).into_iter().collect()),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::DeepScanArrayAccessor { indices } => {
                write!(
                    f,
                    "..[{}]",
                    indices
                        .iter()
                        .map(|i| i.to_string())
                        .collect::<Vec<String>>()
                        .join(", ")
                )
            }
            Token::Wildcard => f.write_str("[*]"),
            Token::ArrayAccessor { index } => write!(f, "[{index}]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn canonical_form() {
        assert_eq!(Token::deep_scan([0, -1]).to_string(), "..[0, -1]");
        assert_eq!(Token::deep_scan(Vec::new()).to_string(), "..[]");
        assert_eq!(Token::Wildcard.to_string(), "[*]");
        assert_eq!(Token::ArrayAccessor { index: -2 }.to_string(), "[-2]");
    }

    #[test]
    fn deep_scan_results_are_a_new_root() {
        let value = json!([[1]]);
        let env = Environment::standard();
        let rv = Token::deep_scan([0])
            .apply(EvaluationResult::single(Node::root(&value)), &env)
            .unwrap();
        assert!(rv.is_wildcard_scope());
    }

    #[test]
    fn array_accessor_keeps_scope() {
        let value = json!([[1, 2], [3, 4]]);
        let env = Environment::standard();
        let token = Token::ArrayAccessor { index: 1 };

        let single = token
            .apply(EvaluationResult::single(Node::root(&value)), &env)
            .unwrap();
        assert_eq!(single.scope, ScopeKind::Single);
        assert_eq!(single.values(), vec![&json!([3, 4])]);

        let roots = Token::Wildcard
            .apply(EvaluationResult::single(Node::root(&value)), &env)
            .unwrap();
        let wild = token.apply(roots, &env).unwrap();
        assert_eq!(wild.scope, ScopeKind::Wildcard);
        assert_eq!(wild.values(), vec![&json!(2), &json!(4)]);
    }

    #[test]
    fn empty_single_scope() {
        let env = Environment::standard();
        let rv = Token::Wildcard
            .apply(EvaluationResult::new(Vec::new(), ScopeKind::Single), &env)
            .unwrap();
        assert!(rv.is_empty());
        assert!(rv.is_wildcard_scope());
    }
}
