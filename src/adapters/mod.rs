// Adapters: concrete implementations of domain ports.

pub mod xlsx;

pub use xlsx::XlsxSheetWriter;
