use thiserror::Error;

/// Error type that captures the failures a report run can hit.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Workbook error: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
    #[error("Chart rendering error: {0}")]
    Render(String),
    #[error("Fatal: invalid numeric input `{0}`")]
    InvalidNumber(String),
}

pub type Result<T> = std::result::Result<T, ReportError>;
