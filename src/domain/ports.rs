use crate::domain::model::Table;
use crate::utils::error::Result;

/// Spreadsheet encoding seam. The converter only needs "table in, workbook
/// bytes out"; tests can swap in a failing writer to exercise the 500 path.
pub trait SheetWriter: Send + Sync {
    fn write(&self, table: &Table) -> Result<Vec<u8>>;
}
