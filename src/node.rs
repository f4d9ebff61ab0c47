use std::iter;

use serde_json::Value;

use crate::conslist::ConsList;

pub type Location = ConsList<PathElement>;
pub type NodeList<'v> = Vec<Node<'v>>;

/// A value matched during evaluation, borrowed from the queried document,
/// together with where it was found.
#[derive(Debug, Clone)]
pub struct Node<'v> {
    pub value: &'v Value,
    pub location: Location,
}

/// An array element index or object member name in a Node's location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathElement {
    Index(usize),
    Name(String),
}

impl<'v> Node<'v> {
    pub fn root(value: &'v Value) -> Self {
        Node {
            value,
            location: Location::new(),
        }
    }

    pub fn new_array_element(value: &'v Value, location: &Location, index: usize) -> Self {
        Node {
            value,
            location: location.append(PathElement::Index(index)),
        }
    }

    pub fn new_object_member(value: &'v Value, location: &Location, name: &str) -> Self {
        Node {
            value,
            location: location.append(PathElement::Name(name.to_owned())),
        }
    }

    /// The location of this node's value in the query argument as a normalized path.
    pub fn path(&self) -> String {
        let mut elements: Vec<String> = self
            .location
            .iter()
            .map(|e| match e {
                PathElement::Index(i) => format!("[{}]", i),
                PathElement::Name(s) => format!("['{}']", escape_name(s)),
            })
            .collect();
        elements.reverse();

        iter::once(String::from("$"))
            .chain(elements)
            .collect::<Vec<String>>()
            .join("")
    }
}

/// Escape a member name for use inside a single quoted normalized path selector.
fn escape_name(name: &str) -> String {
    let mut escaped = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '\u{8}' => escaped.push_str("\\b"),
            '\u{c}' => escaped.push_str("\\f"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if c < '\u{20}' => escaped.push_str(&format!("\\u{:04x}", c as u32)),
            c => escaped.push(c),
        }
    }
    escaped
}
