use serde_json::Value;

use crate::node::{Node, NodeList};

/// Resolve a possibly negative array index against an array of `length`
/// elements. Negative indices count back from the end. Out of range indices
/// resolve to `None`.
pub fn norm_index(index: i64, length: usize) -> Option<usize> {
    if index < 0 {
        index
            .checked_abs()
            .and_then(|i| usize::try_from(i).ok())
            .and_then(|i| length.checked_sub(i))
    } else {
        usize::try_from(index).ok().filter(|i| *i < length)
    }
}

/// Select `index` from `node` when it is an array.
pub fn select_index<'v>(node: &Node<'v>, index: i64) -> Option<Node<'v>> {
    let array = node.value.as_array()?;
    let i = norm_index(index, array.len())?;
    Some(Node::new_array_element(&array[i], &node.location, i))
}

/// The immediate children of `node`: array elements in order, or object
/// member values in insertion order. Scalars have no children.
pub fn expand<'v>(node: &Node<'v>) -> NodeList<'v> {
    match node.value {
        Value::Array(arr) => arr
            .iter()
            .enumerate()
            .map(|(i, v)| Node::new_array_element(v, &node.location, i))
            .collect(),
        Value::Object(obj) => obj
            .iter()
            .map(|(k, v)| Node::new_object_member(v, &node.location, k))
            .collect(),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => Vec::new(),
    }
}
