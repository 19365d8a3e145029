use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum TarifaError {
    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("provider not registered: {name}. Available: {}", .available.join(", "))]
    UnknownProvider {
        name: String,
        available: Vec<String>,
    },

    #[error("failed to load vendor profile from {path}: {reason}")]
    ProfileLoad { path: PathBuf, reason: String },

    #[error("invalid vendor profile: {0}")]
    ProfileInvalid(String),

    #[error("spreadsheet export failed: {0}")]
    Export(#[from] rust_xlsxwriter::XlsxError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
