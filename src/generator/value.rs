use super::types::TypeTranslator;
use crate::source::FieldRecord;
use serde_json::Value;

/// Produce a Java source literal for a field's declared default value.
///
/// Dispatch is keyed by the translated target type, in a significant
/// precedence order: the `Infinity` rule must hit before the generic
/// numeric-suffix rules, and the String empty-not-null asymmetry must be
/// preserved (string defaults are never `null`; every other absent value
/// is). Map- and key-typed fields need custom (de)serialization, so their
/// defaults are deliberately left as a `null` placeholder.
pub fn java_value(field: &FieldRecord, translator: &TypeTranslator) -> anyhow::Result<String> {
    let token = field.type_token.as_str();
    let java_type = translator.translate(token, field.schema_name_str())?;
    let value = field.value.as_ref().filter(|v| !v.is_null());

    let is_infinity = matches!(value, Some(Value::String(s)) if s == "Infinity");
    if java_type == "float" && is_infinity {
        return Ok("Float.POSITIVE_INFINITY".to_string());
    }
    if java_type == "double" && is_infinity {
        return Ok("Double.POSITIVE_INFINITY".to_string());
    }
    if let Some(v) = value {
        if java_type == "long" {
            return Ok(format!("{}L", render_scalar(v)));
        }
        if java_type == "float" {
            return Ok(format!("{}f", render_scalar(v)));
        }
        if java_type == "boolean" {
            return Ok(render_scalar(v).to_lowercase());
        }
    }
    if java_type == "String" {
        return Ok(match value {
            Some(Value::String(s)) if !s.is_empty() => format!("\"{s}\""),
            Some(v) if !matches!(v, Value::String(_)) => format!("\"{}\"", render_scalar(v)),
            // Empty and absent both become the explicit empty string.
            _ => "\"\"".to_string(),
        });
    }
    let Some(v) = value else {
        return Ok("null".to_string());
    };
    if token.starts_with("enum") {
        return Ok(format!("{}.{}", field.schema_name_str(), render_scalar(v)));
    }
    if token.ends_with("[][]") {
        return Ok("null".to_string()); // TODO: nested-array defaults
    }
    if token.ends_with("[]") {
        let mut base = if field.is_schema {
            field.schema_name_str()
        } else {
            token.split('[').next().unwrap_or(token)
        };
        if base == "Iced" {
            base = "Object";
        }
        let elements = match v {
            Value::Array(items) => items
                .iter()
                .map(render_element)
                .collect::<Vec<_>>()
                .join(", "),
            other => render_element(other),
        };
        return Ok(format!("new {base}[]{{{elements}}}"));
    }
    if token.starts_with("Map") {
        return Ok("null".to_string()); // TODO: handle Map
    }
    if token.starts_with("Key") {
        return Ok("null".to_string()); // TODO: handle Key
    }
    Ok(render_scalar(v))
}

fn render_scalar(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

/// Array element rendering; strings keep their Java quotes.
fn render_element(v: &Value) -> String {
    match v {
        Value::String(s) => format!("\"{s}\""),
        other => render_scalar(other),
    }
}
