//! JSON text → `serde_json::Value`, keeping object key order

use serde::Deserialize;
use serde_json::Value;

use crate::error::{FlowError, Result};

/// Document preloaded by the editor.
pub const SAMPLE_JSON: &str = r#"{
  "user": {
    "name": "Atharva",
    "age": 23,
    "address": {
      "city": "Pune",
      "zip": "411017"
    },
    "hobbies": [
      "cinema",
      "photography"
    ]
  },
  "items": [
    {
      "id": 1,
      "price": 19.99,
      "tags": [
        "sale",
        "new"
      ]
    },
    {
      "id": 2,
      "price": 5.49,
      "tags": []
    }
  ],
  "active": true
}"#;

/// Parse `text` with no nesting limit.
///
/// serde_json stops at 128 levels by default; here the recursion limit is
/// lifted and the parser grows its stack on demand instead.
pub fn parse_json(text: &str) -> Result<Value> {
    let mut de = serde_json::Deserializer::from_str(text);
    de.disable_recursion_limit();
    Value::deserialize(serde_stacker::Deserializer::new(&mut de))
        .and_then(|value| de.end().map(|()| value))
        .map_err(|e| invalid_json(&e))
}

fn invalid_json(e: &serde_json::Error) -> FlowError {
    FlowError::InvalidJson {
        line: e.line(),
        column: e.column(),
        message: strip_position(e),
    }
}

/// serde_json appends " at line L column C" to its messages; keep just the reason.
fn strip_position(err: &serde_json::Error) -> String {
    let full = err.to_string();
    let suffix = format!(" at line {} column {}", err.line(), err.column());
    full.strip_suffix(&suffix).unwrap_or(&full).to_string()
}
