//! Short human-readable renderings of values, used for guard names and
//! error messages.
//!
//! Output is for people, not machines: long strings are clipped and deep or
//! wide containers are elided with `...`. Nothing here affects what a guard
//! accepts.
//!
//! ```rust
//! use serde_json::json;
//! use shapeguard::naming::describe;
//!
//! assert_eq!(describe(&json!({"id": 7, "tags": ["a", "b"]})), r#"{id: 7, tags: ["a", "b"]}"#);
//! assert_eq!(describe(&json!([1, 2, 3, 4, 5])), "[1, 2, 3, ...]");
//! ```

use serde_json::Value;

use crate::combinators::Literal;

const MAX_STRING: usize = 32;
const MAX_ITEMS: usize = 3;
const MAX_DEPTH: usize = 2;

/// Render a value.
pub fn describe(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value, 0);
    out
}

/// Render a possibly-missing value; a missing value renders as `undefined`.
pub fn describe_slot(value: Option<&Value>) -> String {
    value.map_or_else(|| "undefined".to_string(), describe)
}

/// Render a literal.
pub fn describe_literal(literal: &Literal) -> String {
    match literal {
        Literal::Undefined => "undefined".to_string(),
        Literal::Null => "null".to_string(),
        Literal::Bool(b) => b.to_string(),
        Literal::Int(n) => n.to_string(),
        Literal::UInt(n) => n.to_string(),
        Literal::Float(n) => n.to_string(),
        Literal::String(s) => quote(s),
    }
}

fn quote(s: &str) -> String {
    if s.chars().count() > MAX_STRING {
        let clipped: String = s.chars().take(MAX_STRING - 3).collect();
        format!("{:?}", clipped + "...")
    } else {
        format!("{:?}", s)
    }
}

fn write_value(out: &mut String, value: &Value, depth: usize) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => out.push_str(&quote(s)),
        Value::Array(items) if items.is_empty() => out.push_str("[]"),
        Value::Array(_) if depth >= MAX_DEPTH => out.push_str("[...]"),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().take(MAX_ITEMS).enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_value(out, item, depth + 1);
            }
            if items.len() > MAX_ITEMS {
                out.push_str(", ...");
            }
            out.push(']');
        }
        Value::Object(map) if map.is_empty() => out.push_str("{}"),
        Value::Object(_) if depth >= MAX_DEPTH => out.push_str("{...}"),
        Value::Object(map) => {
            out.push('{');
            for (i, (key, item)) in map.iter().take(MAX_ITEMS).enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(key);
                out.push_str(": ");
                write_value(out, item, depth + 1);
            }
            if map.len() > MAX_ITEMS {
                out.push_str(", ...");
            }
            out.push('}');
        }
    }
}
