//! Lenient readers for response JSON.
//!
//! The server is not strict about scalar encodings (`"0"` vs `0`,
//! `"true"` vs `true`), so every field is coerced rather than type-checked.
//! A field that cannot be coerced reads as its zero value.

use serde_json::Value;

/// Text value of a node; non-string scalars are rendered as JSON, `null` as "".
pub(crate) fn as_text(node: Option<&Value>) -> String {
    match node {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Integer value of a node; unparseable or out-of-range values read as 0.
pub(crate) fn as_int(node: Option<&Value>) -> i32 {
    match node {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .and_then(|v| i32::try_from(v).ok())
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

/// Boolean value of a node; only `true`, `"true"` and non-zero numbers are true.
pub(crate) fn as_bool(node: Option<&Value>) -> bool {
    match node {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s.trim().eq_ignore_ascii_case("true"),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        _ => false,
    }
}
