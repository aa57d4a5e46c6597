use crate::domain::model::{Row, RowSet};
use crate::utils::error::{ConvertError, Result};
use serde_json::Value;

/// Decodes a raw text body into JSON. Empty or whitespace-only text is
/// rejected up front so callers get a parse error instead of an extraction
/// error for a blank payload.
pub fn decode_text(text: &str) -> Result<Value> {
    if text.trim().is_empty() {
        return Err(ConvertError::MalformedJson {
            detail: "input is empty".to_string(),
        });
    }
    serde_json::from_str(text).map_err(|e| ConvertError::MalformedJson {
        detail: e.to_string(),
    })
}

/// Normalises an arbitrary decoded JSON value into an ordered row set.
///
/// Callers (workflow engines) cannot agree on a single envelope shape, so a
/// fixed precedence chain decides which part of the document constitutes the
/// rows. First match wins:
///
/// 1. `{"value": {"transactions": [...]}}` — the most specific wrapper
/// 2. `{"transactions": [...]}`
/// 3. a mapping with exactly one key whose value is a list, any key name
/// 4. a bare list
/// 5. any other mapping, treated as a single row
///
/// Every branch that selects a list then requires each element to be an
/// object; a non-object element fails with its index.
pub fn extract_rows(input: Value) -> Result<RowSet> {
    match input {
        Value::Object(map) => {
            if let Some(Value::Object(inner)) = map.get("value") {
                if let Some(Value::Array(items)) = inner.get("transactions") {
                    return rows_from_list(items.clone());
                }
            }
            if let Some(Value::Array(items)) = map.get("transactions") {
                return rows_from_list(items.clone());
            }
            if map.len() == 1 {
                if let Some(Value::Array(items)) = map.values().next() {
                    return rows_from_list(items.clone());
                }
            }
            if map.is_empty() {
                return Err(ConvertError::UnsupportedShape);
            }
            Ok(vec![map])
        }
        Value::Array(items) => rows_from_list(items),
        _ => Err(ConvertError::UnsupportedShape),
    }
}

fn rows_from_list(items: Vec<Value>) -> Result<RowSet> {
    let mut rows: Vec<Row> = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match item {
            Value::Object(map) => rows.push(map),
            _ => return Err(ConvertError::InvalidRow { index }),
        }
    }
    Ok(rows)
}
