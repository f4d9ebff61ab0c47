use serde_json::Value;

use crate::node::{Node, NodeList};

/// How the next token in a chain interprets a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScopeKind {
    /// One aggregate context. The next token reads the first node only.
    #[default]
    Single,
    /// Independent roots. The next token reads each node on its own and the
    /// outputs are concatenated in node order.
    Wildcard,
}

/// The ordered output of a token, tagged with its scope. Nodes are kept in
/// the order they were matched and may repeat.
#[derive(Debug, Clone)]
pub struct EvaluationResult<'v> {
    pub nodes: NodeList<'v>,
    pub scope: ScopeKind,
}

impl<'v> EvaluationResult<'v> {
    pub fn new(nodes: NodeList<'v>, scope: ScopeKind) -> Self {
        EvaluationResult { nodes, scope }
    }

    pub fn single(node: Node<'v>) -> Self {
        EvaluationResult {
            nodes: vec![node],
            scope: ScopeKind::Single,
        }
    }

    pub fn is_wildcard_scope(&self) -> bool {
        self.scope == ScopeKind::Wildcard
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node<'v>> {
        self.nodes.iter()
    }

    pub fn values(&self) -> Vec<&'v Value> {
        self.nodes.iter().map(|n| n.value).collect()
    }

    pub fn paths(&self) -> Vec<String> {
        self.nodes.iter().map(|n| n.path()).collect()
    }

    pub fn into_values(self) -> Vec<Value> {
        self.nodes.into_iter().map(|n| n.value.clone()).collect()
    }
}

impl<'v> IntoIterator for EvaluationResult<'v> {
    type Item = Node<'v>;
    type IntoIter = std::vec::IntoIter<Node<'v>>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}
