use log::warn;
use serde_json::Value;

use crate::{
    errors::JSONPathError,
    node::{Node, NodeList},
    selector::norm_index,
};

/// Select `indices` from every array at or below `node`.
///
/// Matches come out in pre-order: an array's own selections, in `indices`
/// order, precede the matches found in its elements, and each element's
/// matches stay contiguous in document order. Objects contribute no
/// selections of their own but are searched in insertion order.
///
/// Traversal uses an explicit stack. Visiting a container more than
/// `max_depth` levels below `node` fails with a depth error.
pub fn deep_scan<'v>(
    node: &Node<'v>,
    indices: &[i64],
    max_depth: usize,
) -> Result<NodeList<'v>, JSONPathError> {
    let mut nodes: NodeList<'v> = Vec::new();
    let mut stack: Vec<(Node<'v>, usize)> = vec![(node.clone(), 0)];

    while let Some((node, depth)) = stack.pop() {
        if depth > max_depth {
            let path = node.path();
            warn!("deep scan aborted at {path}, deeper than {max_depth}");
            return Err(JSONPathError::depth(max_depth, path));
        }

        // Children are pushed in reverse so the leftmost is visited next.
        match node.value {
            Value::Array(arr) => {
                nodes.extend(indices.iter().filter_map(|index| {
                    norm_index(*index, arr.len())
                        .map(|i| Node::new_array_element(&arr[i], &node.location, i))
                }));

                stack.extend(
                    arr.iter()
                        .enumerate()
                        .rev()
                        .filter(|(_, v)| is_container(v))
                        .map(|(i, v)| (Node::new_array_element(v, &node.location, i), depth + 1)),
                );
            }
            Value::Object(obj) => {
                stack.extend(
                    obj.iter()
                        .rev()
                        .filter(|(_, v)| is_container(v))
                        .map(|(k, v)| (Node::new_object_member(v, &node.location, k), depth + 1)),
                );
            }
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => (),
        }
    }

    Ok(nodes)
}

fn is_container(value: &Value) -> bool {
    matches!(value, Value::Array(_) | Value::Object(_))
}
