use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Declarative description of one form field and its constraints.
///
/// A form schema is a tree of these variants with an `object` at the root.
/// The set is closed: every constraint the editor can express is a tagged
/// variant here, so validation is a plain recursive match with no runtime
/// type inspection. Schemas arrive as JSON (`{"type": "string", ...}`) from
/// whoever configures the form and are never mutated by this workspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldSchema {
    String {
        #[serde(default)]
        required: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min_length: Option<usize>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_length: Option<usize>,
        /// Regular expression the whole value must match.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pattern: Option<String>,
        /// Closed list of accepted values (a select field).
        #[serde(default, skip_serializing_if = "Option::is_none")]
        choices: Option<Vec<String>>,
    },
    Number {
        #[serde(default)]
        required: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        minimum: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        maximum: Option<f64>,
    },
    Integer {
        #[serde(default)]
        required: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        minimum: Option<i64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        maximum: Option<i64>,
    },
    Boolean {
        #[serde(default)]
        required: bool,
    },
    /// Calendar date entered as `YYYY-MM-DD`.
    Date {
        #[serde(default)]
        required: bool,
    },
    Object {
        properties: BTreeMap<String, FieldSchema>,
    },
    Array {
        items: Box<FieldSchema>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min_items: Option<usize>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_items: Option<usize>,
    },
}

impl FieldSchema {
    /// Builds the initial document value for this schema: empty strings for
    /// text-like fields, `null` for numbers, `false` for booleans, and
    /// recursively-defaulted containers. The result is structurally
    /// consistent with the schema, so a freshly created form validates and
    /// renders without special cases for "no data yet".
    pub fn default_document(&self) -> Value {
        match self {
            FieldSchema::String { .. } | FieldSchema::Date { .. } => {
                Value::String(String::new())
            }
            FieldSchema::Number { .. } | FieldSchema::Integer { .. } => Value::Null,
            FieldSchema::Boolean { .. } => Value::Bool(false),
            FieldSchema::Object { properties } => Value::Object(
                properties
                    .iter()
                    .map(|(name, field)| (name.clone(), field.default_document()))
                    .collect(),
            ),
            FieldSchema::Array { .. } => Value::Array(Vec::new()),
        }
    }
}
