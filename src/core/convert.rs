use crate::core::{extract, table};
use crate::domain::model::ConversionResult;
use crate::domain::ports::SheetWriter;
use crate::utils::error::Result;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::Utc;
use serde_json::Value;

/// Request-scoped conversion pipeline. Constructed once at startup and shared
/// across requests; it holds no mutable state, so concurrent requests need no
/// coordination.
pub struct Converter<W: SheetWriter> {
    writer: W,
    filename_prefix: String,
}

impl<W: SheetWriter> Converter<W> {
    pub fn new(writer: W, filename_prefix: String) -> Self {
        Self {
            writer,
            filename_prefix,
        }
    }

    /// Runs the full pipeline: extract rows, build the table, encode the
    /// workbook, and assemble the response. Either the full result is
    /// produced or a typed error comes back; there are no partial results.
    pub fn convert(&self, input: Value) -> Result<ConversionResult> {
        let rows = extract::extract_rows(input)?;
        tracing::debug!("Extracted {} rows", rows.len());

        let table = table::build_table(&rows)?;
        tracing::debug!(
            "Built table with {} columns x {} rows",
            table.headers.len(),
            table.rows.len()
        );

        let workbook = self.writer.write(&table)?;
        tracing::debug!("Encoded workbook ({} bytes)", workbook.len());

        Ok(ConversionResult {
            file_name: self.file_name(),
            excel_file: BASE64.encode(&workbook),
            rows,
        })
    }

    // Same-second requests collide on purpose; callers disambiguate if needed.
    fn file_name(&self) -> String {
        format!(
            "{}-{}.xlsx",
            self.filename_prefix,
            Utc::now().format("%Y%m%d%H%M%S")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Table;
    use crate::utils::error::ConvertError;
    use serde_json::json;

    struct FakeWriter;

    impl SheetWriter for FakeWriter {
        fn write(&self, _table: &Table) -> Result<Vec<u8>> {
            Ok(b"workbook".to_vec())
        }
    }

    struct FailingWriter;

    impl SheetWriter for FailingWriter {
        fn write(&self, _table: &Table) -> Result<Vec<u8>> {
            Err(ConvertError::IoError(std::io::Error::other(
                "forced writer failure",
            )))
        }
    }

    fn converter() -> Converter<FakeWriter> {
        Converter::new(FakeWriter, "QIESI".to_string())
    }

    #[test]
    fn test_convert_assembles_result() {
        let result = converter()
            .convert(json!({"transactions": [{"a": 1}]}))
            .unwrap();
        assert_eq!(result.rows.len(), 1);
        assert_eq!(result.excel_file, BASE64.encode(b"workbook"));
    }

    #[test]
    fn test_file_name_format() {
        let name = converter().file_name();
        assert!(name.starts_with("QIESI-"));
        assert!(name.ends_with(".xlsx"));
        let digits = &name["QIESI-".len()..name.len() - ".xlsx".len()];
        assert_eq!(digits.len(), 14);
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_rows_echoed_unmodified() {
        // The echoed rows keep nested structure; only cells are stringified.
        let result = converter()
            .convert(json!([{"a": {"n": 1}}]))
            .unwrap();
        assert_eq!(result.rows[0].get("a").unwrap(), &json!({"n": 1}));
    }

    #[test]
    fn test_extraction_error_propagates() {
        assert!(matches!(
            converter().convert(json!(5)),
            Err(ConvertError::UnsupportedShape)
        ));
    }

    #[test]
    fn test_empty_list_rejected() {
        assert!(matches!(
            converter().convert(json!([])),
            Err(ConvertError::EmptyRowSet)
        ));
    }

    #[test]
    fn test_writer_failure_propagates() {
        let converter = Converter::new(FailingWriter, "QIESI".to_string());
        let err = converter.convert(json!([{"a": 1}])).unwrap_err();
        assert!(!err.is_client_error());
    }
}
