#![forbid(unsafe_code)]

use serde_json::{Map, Value};

/// Required string argument; rejects absence, null and non-string shapes.
pub(crate) fn require_str<'a>(
    args: &'a Map<String, Value>,
    key: &str,
) -> Result<&'a str, Value> {
    match args.get(key) {
        Some(Value::String(value)) => Ok(value.as_str()),
        _ => Err(crate::ai_error(
            "INVALID_INPUT",
            &format!("{key} is required and must be a string"),
        )),
    }
}

/// Optional string argument; absence and null both mean "not provided".
pub(crate) fn optional_str(
    args: &Map<String, Value>,
    key: &str,
) -> Result<Option<String>, Value> {
    match args.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(_) => Err(crate::ai_error(
            "INVALID_INPUT",
            &format!("{key} must be a string"),
        )),
    }
}

pub(crate) fn require_array<'a>(
    args: &'a Map<String, Value>,
    key: &str,
) -> Result<&'a Vec<Value>, Value> {
    match args.get(key) {
        Some(Value::Array(items)) => Ok(items),
        _ => Err(crate::ai_error(
            "INVALID_INPUT",
            &format!("{key} is required and must be an array"),
        )),
    }
}

/// Required array of strings, materialized in input order.
pub(crate) fn require_string_array(
    args: &Map<String, Value>,
    key: &str,
) -> Result<Vec<String>, Value> {
    let items = require_array(args, key)?;
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        let Some(text) = item.as_str() else {
            return Err(crate::ai_error(
                "INVALID_INPUT",
                &format!("{key} must be an array of strings"),
            ));
        };
        out.push(text.to_string());
    }
    Ok(out)
}

pub(crate) fn args_object(args: &Value) -> Result<&Map<String, Value>, Value> {
    args.as_object().ok_or_else(|| {
        crate::ai_error("INVALID_INPUT", "arguments must be an object")
    })
}
