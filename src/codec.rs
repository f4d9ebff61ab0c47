use std::io::Read;

use serde::{
    ser::{SerializeMap, SerializeSeq},
    Serialize, Serializer,
};
use serde_json::Value;

use crate::{errors::JSONPathError, result::EvaluationResult};

/// Reads JSON documents and renders evaluation results as JSON text.
///
/// Rendering always emits object members sorted by key, whatever order they
/// were inserted in. Construct one and pass it to whatever needs it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonCodec {
    pretty: bool,
}

impl JsonCodec {
    pub fn new() -> Self {
        JsonCodec { pretty: false }
    }

    pub fn pretty() -> Self {
        JsonCodec { pretty: true }
    }

    pub fn parse(&self, text: &str) -> Result<Value, JSONPathError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn parse_reader<R: Read>(&self, reader: R) -> Result<Value, JSONPathError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Render matched values as a JSON array, in evaluation order.
    pub fn render(&self, result: &EvaluationResult<'_>) -> Result<String, JSONPathError> {
        self.encode(&SortedNodes(result))
    }

    pub fn render_value(&self, value: &Value) -> Result<String, JSONPathError> {
        self.encode(&SortedValue(value))
    }

    fn encode<T: Serialize>(&self, value: &T) -> Result<String, JSONPathError> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(value)?)
        } else {
            Ok(serde_json::to_string(value)?)
        }
    }
}

struct SortedNodes<'a, 'v>(&'a EvaluationResult<'v>);

impl Serialize for SortedNodes<'_, '_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for node in self.0.iter() {
            seq.serialize_element(&SortedValue(node.value))?;
        }
        seq.end()
    }
}

struct SortedValue<'a>(&'a Value);

impl Serialize for SortedValue<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Value::Array(arr) => {
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for v in arr {
                    seq.serialize_element(&SortedValue(v))?;
                }
                seq.end()
            }
            Value::Object(obj) => {
                let mut members: Vec<(&String, &Value)> = obj.iter().collect();
                // Keys sort by UTF-16 code units, not by bytes.
                members.sort_by(|a, b| a.0.encode_utf16().cmp(b.0.encode_utf16()));

                let mut map = serializer.serialize_map(Some(members.len()))?;
                for (k, v) in members {
                    map.serialize_entry(k, &SortedValue(v))?;
                }
                map.end()
            }
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
                self.0.serialize(serializer)
            }
        }
    }
}
