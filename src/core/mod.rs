pub mod convert;
pub mod extract;
pub mod table;

pub use crate::domain::model::{Cell, ConversionResult, Row, RowSet, Table};
pub use crate::domain::ports::SheetWriter;
pub use crate::utils::error::Result;
pub use convert::Converter;
