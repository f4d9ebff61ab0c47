//! Evaluation of the JSONPath deep scan array accessor, `..[i, j, ...]`, and
//! its interaction with wildcard expansion, over `serde_json` documents.
//!
//! A [`Query`] is a chain of [`Token`]s. Each token produces an
//! [`EvaluationResult`]: an ordered list of matched nodes tagged with a
//! [`ScopeKind`]. Deep scans and wildcards produce a wildcard scope, so the
//! next token is applied to every match independently rather than to the
//! matches as one array.
//!
//! ```
//! use jsonpath_deepscan::{errors::JSONPathError, find, JsonCodec, Query};
//!
//! fn main() -> Result<(), JSONPathError> {
//!     let codec = JsonCodec::new();
//!     let value = codec.parse("[1, [2], [3, 4], [5, 6, 7]]")?;
//!
//!     let q = Query::root().deep_scan([0, -1]);
//!     let rv = find(&q, &value)?;
//!
//!     assert_eq!(codec.render(&rv)?, "[1,[5,6,7],2,2,3,4,5,7]");
//!     Ok(())
//! }
//! ```
//!
//! Every match remembers where it was found.
//!
//! ```
//! use jsonpath_deepscan::{errors::JSONPathError, find, Query};
//! use serde_json::json;
//!
//! fn main() -> Result<(), JSONPathError> {
//!     let value = json!({"a": [[1, 2]]});
//!     let rv = find(&Query::root().deep_scan([1]), &value)?;
//!
//!     assert_eq!(rv.paths(), vec!["$['a'][0][1]"]);
//!     Ok(())
//! }
//! ```
//!
//! Deep scans walk the document with an explicit stack and stop with a
//! [`JSONPathErrorType::DepthError`] when a container is nested deeper than
//! [`Environment::max_depth`] below the scan's starting node.
pub mod codec;
pub mod conslist;
pub mod env;
pub mod errors;
pub mod jsonpath;
pub mod node;
pub mod query;
pub mod result;
pub mod segment;
pub mod selector;
pub mod token;

pub use codec::JsonCodec;
pub use env::Environment;
pub use errors::JSONPathError;
pub use errors::JSONPathErrorType;
pub use jsonpath::find;
pub use node::{Node, NodeList, PathElement};
pub use query::Query;
pub use result::{EvaluationResult, ScopeKind};
pub use selector::norm_index;
pub use token::Token;
