//! Java default-value literals for schema fields.
//!
//! Rules are applied in order; the first match wins:
//!
//! 1. `Infinity` on `float`/`double` becomes the matching `POSITIVE_INFINITY` constant
//! 2. `long` values get an `L` suffix, `float` values an `f` suffix
//! 3. `boolean` values are lowercased
//! 4. `String` fields are wrapped in double quotes as-is; a missing or empty value is `""`
//! 5. any other missing value is `null`
//! 6. scalar enums become `Enum.value`
//! 7. two-dimensional arrays are `null`
//! 8. arrays become `new T[]{...}` with string elements quoted
//! 9. scalar maps and keys are `null`
//! 10. anything else is the value as written

use restbind_descriptor::FieldDescriptor;
use serde_json::Value;

use crate::type_mapper::{OBJECT, STRING};

pub const NULL: &str = "null";

/// Render the default value of `field`, whose translated Java type is `java_type`.
///
/// `root_schema` is the sentinel schema name that stands for `Object` in array
/// element position.
pub fn render(field: &FieldDescriptor, java_type: &str, root_schema: &str) -> String {
    let Some(value) = field.value.as_ref().filter(|v| !v.is_null()) else {
        return if java_type == STRING {
            "\"\"".to_string()
        } else {
            NULL.to_string()
        };
    };
    let text = value_text(value);

    match java_type {
        "float" | "double" if text == "Infinity" || text == "-Infinity" => {
            let class = if java_type == "float" { "Float" } else { "Double" };
            let constant = if text.starts_with('-') {
                "NEGATIVE_INFINITY"
            } else {
                "POSITIVE_INFINITY"
            };
            return format!("{}.{}", class, constant);
        }
        "long" => return format!("{}L", text),
        "float" => return format!("{}f", text),
        "boolean" => return text.to_lowercase(),
        STRING if text.is_empty() => return "\"\"".to_string(),
        STRING => return format!("\"{}\"", text),
        _ => {}
    }

    if field.is_enum() && !java_type.ends_with("[]") {
        let class = field.schema_name.as_deref().unwrap_or(java_type);
        return format!("{}.{}", class, text);
    }
    if java_type.ends_with("[][]") {
        return NULL.to_string();
    }
    if let Some(element) = java_type.strip_suffix("[]") {
        let element = if element == root_schema { OBJECT } else { element };
        return array_literal(field, element, value);
    }
    if field.is_map() || field.is_key() {
        return NULL.to_string();
    }
    text
}

fn array_literal(field: &FieldDescriptor, element: &str, value: &Value) -> String {
    let items = match value {
        Value::Array(items) => items
            .iter()
            .map(|item| array_element(field, element, item))
            .collect::<Vec<_>>()
            .join(", "),
        Value::String(s) => s
            .trim()
            .trim_start_matches('[')
            .trim_end_matches(']')
            .trim()
            .to_string(),
        other => value_text(other),
    };
    format!("new {}[]{{{}}}", element, items)
}

fn array_element(field: &FieldDescriptor, element: &str, item: &Value) -> String {
    match item {
        Value::String(s) if field.is_enum() => format!("{}.{}", element, s),
        Value::String(s) => format!("\"{}\"", s),
        other => value_text(other),
    }
}

/// Text of a JSON value as it appears in source: strings unquoted, numbers as written.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
