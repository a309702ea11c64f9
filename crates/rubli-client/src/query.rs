//! Query-string construction.
//!
//! Filters are plain structs with `Option` fields. Before a request goes out
//! they are flattened into `key=value` pairs; `None`, JSON `null`, and empty
//! strings are dropped entirely so the backend never sees `?search=` and
//! filters on the empty string.

use serde::Serialize;
use serde_json::Value;

use crate::error::ClientError;

/// Ordered list of encoded-on-render query pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Flatten a serializable filter struct (or JSON object) into pairs.
    ///
    /// Scalars are rendered the way JSON stringifies them (`true`, `42`,
    /// `0.3`, raw text). Arrays become comma-separated lists; empty arrays
    /// are dropped like empty strings.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidQuery`] if `value` does not serialize to
    /// a JSON object.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self, ClientError> {
        let json = serde_json::to_value(value)
            .map_err(|error| ClientError::InvalidQuery(error.to_string()))?;
        let Value::Object(map) = json else {
            return Err(ClientError::InvalidQuery(format!(
                "expected an object, got {}",
                json_kind(&json)
            )));
        };

        let mut params = Self::new();
        for (key, value) in map {
            if let Some(rendered) = render_value(&value) {
                params.pairs.push((key, rendered));
            }
        }
        Ok(params)
    }

    /// Append `key=value` unless the value is absent or renders empty.
    pub fn push<V: ToString>(&mut self, key: &str, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            let rendered = value.to_string();
            if !rendered.is_empty() {
                self.pairs.push((key.to_string(), rendered));
            }
        }
        self
    }

    /// Builder-style [`Self::push`].
    #[must_use]
    pub fn with<V: ToString>(mut self, key: &str, value: Option<V>) -> Self {
        self.push(key, value);
        self
    }

    /// Value for `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Raw (unencoded) pairs in insertion order.
    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Render as `a=1&b=two`, percent-encoding keys and values. No leading `?`.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(key),
                    urlencoding::encode(value)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

fn render_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) => {
            let parts = items.iter().filter_map(render_value).collect::<Vec<_>>();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join(","))
            }
        }
        Value::Object(_) => Some(value.to_string()),
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
