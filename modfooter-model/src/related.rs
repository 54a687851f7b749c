use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Identifier of a related entity. The admin API emits either numeric
/// or textual ids depending on the database backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RelatedId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RelatedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RelatedId {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for RelatedId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for RelatedId {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// A reference to another stored entity, as attached to a content item.
///
/// `content_type` is the canonical (usually PascalCase) name of the
/// referenced type. Every other key of the JSON object lands in `fields`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedEntity {
    pub id: RelatedId,
    #[serde(alias = "__contentType")]
    pub content_type: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl RelatedEntity {
    /// Creates a related entity with no extra fields.
    #[must_use]
    pub fn new(id: impl Into<RelatedId>, content_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content_type: content_type.into(),
            fields: Map::new(),
        }
    }

    /// Adds an arbitrary field.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Raw access to an arbitrary field.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Returns a field as display text, if it holds a usable value.
    ///
    /// Non-empty strings are returned as-is and numbers in their JSON
    /// text form. `null`, booleans, arrays, objects and `""` yield `None`.
    /// The key `id` resolves to the entity id.
    pub fn field_text(&self, key: &str) -> Option<String> {
        if key == "id" {
            return Some(self.id.to_string());
        }
        match self.fields.get(key)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}
