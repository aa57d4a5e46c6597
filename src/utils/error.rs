use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Invalid JSON input: {detail}")]
    MalformedJson { detail: String },

    #[error("Unsupported structure — expected transactions list, array, or object")]
    UnsupportedShape,

    #[error("Row {index} is not a JSON object")]
    InvalidRow { index: usize },

    #[error("No rows found in input")]
    EmptyRowSet,

    #[error("Excel generation failed: {0}")]
    Encoding(#[from] rust_xlsxwriter::XlsxError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl ConvertError {
    /// Extraction and validation failures are deterministic functions of the
    /// request body; only encoding and IO failures are the server's fault.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ConvertError::MalformedJson { .. }
                | ConvertError::UnsupportedShape
                | ConvertError::InvalidRow { .. }
                | ConvertError::EmptyRowSet
        )
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
