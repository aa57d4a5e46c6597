pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod http;
pub mod utils;

pub use adapters::XlsxSheetWriter;
pub use config::ServerConfig;
pub use core::{ConversionResult, Converter};
pub use utils::error::{ConvertError, Result};
