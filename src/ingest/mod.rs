pub mod claude;

use std::io::Read;

use color_eyre::eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A hook payload as delivered by the host: one JSON object with
/// string keys and loosely-typed values. Key order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HookPayload {
    fields: Map<String, Value>,
}

impl HookPayload {
    pub fn from_map(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Whether `key` is present at all, regardless of its value (null included).
    pub fn has(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// The value at `key` rendered as display text, if it has one.
    pub fn text(&self, key: &str) -> Option<String> {
        self.get(key).and_then(display_value)
    }

    pub fn text_or(&self, key: &str, default: &str) -> String {
        self.text(key).unwrap_or_else(|| default.to_string())
    }

    /// The nested object at `key`; `None` if absent or not an object.
    pub fn object(&self, key: &str) -> Option<&Map<String, Value>> {
        self.get(key).and_then(Value::as_object)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Two-space indented JSON dump of the whole payload.
    pub fn to_pretty_json(&self) -> String {
        pretty_json(&self.fields)
    }
}

/// Display text for a JSON value. Strings are shown verbatim, null has no
/// text, and everything else is shown as compact JSON.
pub fn display_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Two-space indented JSON; falls back to compact output if pretty printing fails.
pub fn pretty_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .or_else(|_| serde_json::to_string(value))
        .unwrap_or_default()
}

/// Read all of `reader` as UTF-8 text.
pub fn read_input<R: Read>(mut reader: R) -> Result<String> {
    let mut input = String::new();
    reader
        .read_to_string(&mut input)
        .wrap_err("Failed to read hook data from stdin")?;
    Ok(input)
}

/// Parse raw hook input.
///
/// Returns `Ok(None)` when the input is empty after trimming, and an error
/// when it is not a JSON object.
pub fn parse_payload(input: &str) -> std::result::Result<Option<HookPayload>, serde_json::Error> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    serde_json::from_str::<HookPayload>(trimmed).map(Some)
}
