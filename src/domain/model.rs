use serde::Serialize;
use serde_json::{Map, Number, Value};

/// One record destined for one spreadsheet data row. Key order is the order
/// the keys appeared in the input document (`serde_json` with
/// `preserve_order`), which drives column order downstream.
pub type Row = Map<String, Value>;

/// Ordered, validated collection of rows extracted from one request.
pub type RowSet = Vec<Row>;

/// One spreadsheet cell. Nested structures are already stringified by the
/// time a value lands here, so the spreadsheet adapter can match
/// exhaustively without inspecting JSON again.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// The row has no value for this column.
    Empty,
    Null,
    Bool(bool),
    Number(Number),
    Text(String),
    /// Canonical JSON text of a nested object or array.
    Json(String),
}

/// Header row plus column-aligned data rows, ready for spreadsheet rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

/// Response contract of `POST /convert`. Field names are part of the wire
/// format consumed by workflow engines and must not change.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionResult {
    #[serde(rename = "fileName")]
    pub file_name: String,
    #[serde(rename = "excelFile")]
    pub excel_file: String,
    pub rows: RowSet,
}
