use crate::domain::model::{Cell, Row, Table};
use crate::utils::error::{ConvertError, Result};
use serde_json::Value;

/// Flattens a row set into a column-aligned table.
///
/// Headers are the union of all keys in first-seen order: rows are scanned
/// in sequence and each row's keys in the row's own key order, so column
/// order is derived from the input rather than from hash iteration. Nested
/// objects and arrays become one stringified cell; flattening is shallow so
/// the column set never depends on nesting depth.
pub fn build_table(rows: &[Row]) -> Result<Table> {
    if rows.is_empty() {
        return Err(ConvertError::EmptyRowSet);
    }

    let mut headers: Vec<String> = Vec::new();
    for row in rows {
        for key in row.keys() {
            if !headers.iter().any(|h| h == key) {
                headers.push(key.clone());
            }
        }
    }

    let mut data = Vec::with_capacity(rows.len());
    for row in rows {
        let cells: Vec<Cell> = headers
            .iter()
            .map(|header| match row.get(header) {
                None => Cell::Empty,
                Some(value) => cell_for(value),
            })
            .collect();
        data.push(cells);
    }

    Ok(Table {
        headers,
        rows: data,
    })
}

fn cell_for(value: &Value) -> Cell {
    match value {
        Value::Null => Cell::Null,
        Value::Bool(b) => Cell::Bool(*b),
        Value::Number(n) => Cell::Number(n.clone()),
        Value::String(s) => Cell::Text(s.clone()),
        // canonical JSON text; round-trips back to an equal structure
        Value::Object(_) | Value::Array(_) => Cell::Json(value.to_string()),
    }
}
