//! Schema validation for observation documents.
//!
//! [`DataValidator`] interprets the closed constraint grammar of
//! [`FieldSchema`] by recursive traversal of the document tree, producing a
//! verdict and a field-path-keyed error map from the same pass so the two
//! can never disagree. Validation is pure and synchronous: same schema and
//! document in, same result out.

use chrono::NaiveDate;
use common::model::schema::FieldSchema;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Field path (`site.name`, `samples[2]`) to human-readable message.
pub type ErrorMap = BTreeMap<String, String>;

/// Result of one validation pass over a document snapshot. Serializable so
/// hosting layers can ship the error map to whatever renders the form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Validation {
    pub is_valid: bool,
    pub error_map: ErrorMap,
}

/// Validates documents against one schema.
pub struct DataValidator<'a> {
    schema: &'a FieldSchema,
}

impl<'a> DataValidator<'a> {
    pub fn new(schema: &'a FieldSchema) -> Self {
        Self { schema }
    }

    /// Runs the full constraint traversal. `is_valid` holds exactly when the
    /// returned map is empty.
    pub fn validate(&self, data: &Value) -> Validation {
        let mut errors = ErrorMap::new();
        check_value(self.schema, data, "", &mut errors);
        Validation {
            is_valid: errors.is_empty(),
            error_map: errors,
        }
    }
}

fn child_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}.{name}")
    }
}

fn item_path(parent: &str, index: usize) -> String {
    format!("{parent}[{index}]")
}

fn report(errors: &mut ErrorMap, path: &str, message: impl Into<String>) {
    let key = if path.is_empty() { "." } else { path };
    errors.insert(key.to_string(), message.into());
}

fn check_value(schema: &FieldSchema, value: &Value, path: &str, errors: &mut ErrorMap) {
    match schema {
        FieldSchema::String {
            required,
            min_length,
            max_length,
            pattern,
            choices,
        } => check_string(
            value, path, *required, *min_length, *max_length, pattern, choices, errors,
        ),
        FieldSchema::Number {
            required,
            minimum,
            maximum,
        } => match value {
            Value::Null => {
                if *required {
                    report(errors, path, "This field is required");
                }
            }
            Value::Number(n) => {
                let n = n.as_f64().unwrap_or_default();
                if let Some(min) = minimum {
                    if n < *min {
                        report(errors, path, format!("Must be at least {min}"));
                    }
                }
                if let Some(max) = maximum {
                    if n > *max {
                        report(errors, path, format!("Must be at most {max}"));
                    }
                }
            }
            _ => report(errors, path, "Must be a number"),
        },
        FieldSchema::Integer {
            required,
            minimum,
            maximum,
        } => match value {
            Value::Null => {
                if *required {
                    report(errors, path, "This field is required");
                }
            }
            Value::Number(n) => match n.as_i64() {
                Some(n) => {
                    if let Some(min) = minimum {
                        if n < *min {
                            report(errors, path, format!("Must be at least {min}"));
                        }
                    }
                    if let Some(max) = maximum {
                        if n > *max {
                            report(errors, path, format!("Must be at most {max}"));
                        }
                    }
                }
                None => report(errors, path, "Must be a whole number"),
            },
            _ => report(errors, path, "Must be a whole number"),
        },
        FieldSchema::Boolean { required } => match value {
            Value::Bool(_) => {}
            Value::Null => {
                if *required {
                    report(errors, path, "This field is required");
                }
            }
            _ => report(errors, path, "Must be true or false"),
        },
        FieldSchema::Date { required } => match value {
            Value::Null => {
                if *required {
                    report(errors, path, "This field is required");
                }
            }
            Value::String(s) if s.is_empty() => {
                if *required {
                    report(errors, path, "This field is required");
                }
            }
            Value::String(s) => {
                if NaiveDate::parse_from_str(s, "%Y-%m-%d").is_err() {
                    report(errors, path, "Must be a date in YYYY-MM-DD format");
                }
            }
            _ => report(errors, path, "Must be a date in YYYY-MM-DD format"),
        },
        FieldSchema::Object { properties } => match value {
            Value::Object(fields) => {
                for (name, field_schema) in properties {
                    let field_value = fields.get(name).unwrap_or(&Value::Null);
                    check_value(field_schema, field_value, &child_path(path, name), errors);
                }
            }
            Value::Null => {
                // Treat a missing group as all-empty so required children
                // still surface individually.
                for (name, field_schema) in properties {
                    check_value(field_schema, &Value::Null, &child_path(path, name), errors);
                }
            }
            _ => report(errors, path, "Must be a group of fields"),
        },
        FieldSchema::Array {
            items,
            min_items,
            max_items,
        } => match value {
            Value::Array(entries) => {
                if let Some(min) = min_items {
                    if entries.len() < *min {
                        report(errors, path, format!("Must have at least {min} items"));
                    }
                }
                if let Some(max) = max_items {
                    if entries.len() > *max {
                        report(errors, path, format!("Must have at most {max} items"));
                    }
                }
                for (index, entry) in entries.iter().enumerate() {
                    check_value(items, entry, &item_path(path, index), errors);
                }
            }
            Value::Null => {
                if min_items.is_some_and(|min| min > 0) {
                    report(errors, path, "This field is required");
                }
            }
            _ => report(errors, path, "Must be a list"),
        },
    }
}

#[allow(clippy::too_many_arguments)]
fn check_string(
    value: &Value,
    path: &str,
    required: bool,
    min_length: Option<usize>,
    max_length: Option<usize>,
    pattern: &Option<String>,
    choices: &Option<Vec<String>>,
    errors: &mut ErrorMap,
) {
    let text = match value {
        Value::String(s) => s.as_str(),
        Value::Null => "",
        _ => {
            report(errors, path, "Must be text");
            return;
        }
    };

    if text.is_empty() {
        if required {
            report(errors, path, "This field is required");
        }
        return;
    }

    let length = text.chars().count();
    if let Some(min) = min_length {
        if length < min {
            report(errors, path, format!("Must be at least {min} characters"));
            return;
        }
    }
    if let Some(max) = max_length {
        if length > max {
            report(errors, path, format!("Must be at most {max} characters"));
            return;
        }
    }

    if let Some(choices) = choices {
        if !choices.iter().any(|choice| choice == text) {
            report(
                errors,
                path,
                format!("Must be one of: {}", choices.join(", ")),
            );
            return;
        }
    }

    if let Some(pattern) = pattern {
        match Regex::new(pattern) {
            Ok(re) => {
                if !re.is_match(text) {
                    report(errors, path, "Does not match the required format");
                }
            }
            Err(err) => {
                // A broken pattern is a schema authoring mistake; surface it
                // at the field rather than panicking mid-validation.
                log::warn!("unusable pattern at '{}': {}", path, err);
                report(errors, path, "Field pattern is not a valid expression");
            }
        }
    }
}
