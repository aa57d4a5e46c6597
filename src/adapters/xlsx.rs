use crate::domain::model::{Cell, Table};
use crate::domain::ports::SheetWriter;
use crate::utils::error::Result;
use rust_xlsxwriter::Workbook;

const SHEET_NAME: &str = "Data";

/// Renders a table to XLSX bytes with `rust_xlsxwriter`. Header row first,
/// then one worksheet row per data row; empty and null cells are left blank.
#[derive(Debug, Clone, Default)]
pub struct XlsxSheetWriter;

impl XlsxSheetWriter {
    pub fn new() -> Self {
        Self
    }
}

impl SheetWriter for XlsxSheetWriter {
    fn write(&self, table: &Table) -> Result<Vec<u8>> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_NAME)?;

        for (col, header) in table.headers.iter().enumerate() {
            worksheet.write_string(0, col as u16, header.as_str())?;
        }

        for (i, row) in table.rows.iter().enumerate() {
            let sheet_row = (i + 1) as u32;
            for (col, cell) in row.iter().enumerate() {
                let col = col as u16;
                match cell {
                    Cell::Empty | Cell::Null => {}
                    Cell::Bool(b) => {
                        worksheet.write_boolean(sheet_row, col, *b)?;
                    }
                    Cell::Number(n) => match n.as_f64() {
                        Some(f) => {
                            worksheet.write_number(sheet_row, col, f)?;
                        }
                        // u64 outside f64 range; keep the digits as text
                        None => {
                            worksheet.write_string(sheet_row, col, n.to_string())?;
                        }
                    },
                    Cell::Text(s) => {
                        worksheet.write_string(sheet_row, col, s.as_str())?;
                    }
                    Cell::Json(s) => {
                        worksheet.write_string(sheet_row, col, s.as_str())?;
                    }
                }
            }
        }

        Ok(workbook.save_to_buffer()?)
    }
}
