// veda-ingest-core/src/domain/form.rs

use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;
use tracing::warn;

/// One problem found in submitted form data. `path` is a JSON pointer into the data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormViolation {
    pub path: String,
    pub kind: ViolationKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViolationKind {
    Missing,
    WrongType { expected: String },
    NotAllowed { value: String },
    PatternMismatch { pattern: String },
}

impl fmt::Display for FormViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ViolationKind::Missing => write!(f, "{}: required field is missing", self.path),
            ViolationKind::WrongType { expected } => {
                write!(f, "{}: expected a value of type '{}'", self.path, expected)
            }
            ViolationKind::NotAllowed { value } => {
                write!(f, "{}: '{}' is not an allowed value", self.path, value)
            }
            ViolationKind::PatternMismatch { pattern } => {
                write!(f, "{}: does not match pattern '{}'", self.path, pattern)
            }
        }
    }
}

/// Cleans raw form output before submission.
///
/// Strings are trimmed. Nulls, empty strings, empty arrays and empty objects are
/// dropped from objects and arrays, recursively. Numbers and booleans are kept as-is.
pub fn normalize_form_data(data: &Value) -> Value {
    normalize(data).unwrap_or(Value::Null)
}

fn normalize(value: &Value) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| Value::String(trimmed.to_string()))
        }
        Value::Array(items) => {
            let kept: Vec<Value> = items.iter().filter_map(normalize).collect();
            (!kept.is_empty()).then_some(Value::Array(kept))
        }
        Value::Object(fields) => {
            let kept: Map<String, Value> = fields
                .iter()
                .filter_map(|(k, v)| normalize(v).map(|v| (k.clone(), v)))
                .collect();
            (!kept.is_empty()).then_some(Value::Object(kept))
        }
        other => Some(other.clone()),
    }
}

/// Checks `data` against the subset of JSON Schema the ingest forms rely on:
/// `required`, `type`, `enum` and `pattern`, walking `properties` and array `items`.
/// Violations come back ordered by path.
pub fn validate_form_data(schema: &Value, data: &Value) -> Vec<FormViolation> {
    let mut violations = Vec::new();
    check_node(schema, data, "", &mut violations);
    violations.sort_by(|a, b| a.path.cmp(&b.path));
    violations
}

fn check_node(schema: &Value, data: &Value, path: &str, out: &mut Vec<FormViolation>) {
    if let Some(expected) = schema.get("type").and_then(Value::as_str)
        && !matches_type(expected, data)
    {
        out.push(FormViolation {
            path: display_path(path),
            kind: ViolationKind::WrongType {
                expected: expected.to_string(),
            },
        });
        return;
    }

    if let Some(allowed) = schema.get("enum").and_then(Value::as_array)
        && !allowed.contains(data)
    {
        out.push(FormViolation {
            path: display_path(path),
            kind: ViolationKind::NotAllowed {
                value: render_value(data),
            },
        });
    }

    if let (Some(pattern), Some(text)) = (schema.get("pattern").and_then(Value::as_str), data.as_str()) {
        match Regex::new(pattern) {
            Ok(re) if !re.is_match(text) => out.push(FormViolation {
                path: display_path(path),
                kind: ViolationKind::PatternMismatch {
                    pattern: pattern.to_string(),
                },
            }),
            Ok(_) => {}
            Err(e) => warn!(%pattern, error = %e, "Skipping invalid schema pattern"),
        }
    }

    match data {
        Value::Object(fields) => {
            if let Some(required) = schema.get("required").and_then(Value::as_array) {
                for key in required.iter().filter_map(Value::as_str) {
                    if !fields.contains_key(key) {
                        out.push(FormViolation {
                            path: format!("{}/{}", path, key),
                            kind: ViolationKind::Missing,
                        });
                    }
                }
            }
            if let Some(properties) = schema.get("properties").and_then(Value::as_object) {
                for (key, sub_schema) in properties {
                    if let Some(value) = fields.get(key) {
                        check_node(sub_schema, value, &format!("{}/{}", path, key), out);
                    }
                }
            }
        }
        Value::Array(items) => {
            if let Some(item_schema) = schema.get("items") {
                for (i, item) in items.iter().enumerate() {
                    check_node(item_schema, item, &format!("{}/{}", path, i), out);
                }
            }
        }
        _ => {}
    }
}

fn matches_type(expected: &str, value: &Value) -> bool {
    match expected {
        "object" => value.is_object(),
        "array" => value.is_array(),
        "string" => value.is_string(),
        "number" => value.is_number(),
        "integer" => value.is_i64() || value.is_u64(),
        "boolean" => value.is_boolean(),
        "null" => value.is_null(),
        // Unknown keywords are not ours to reject.
        _ => true,
    }
}

fn display_path(path: &str) -> String {
    if path.is_empty() {
        "/".to_string()
    } else {
        path.to_string()
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
