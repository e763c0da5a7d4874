use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum RetexError {
    #[error("text extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("no text content in input")]
    EmptyInput,

    #[error("nothing recognizable recovered from input")]
    NothingRecovered,

    #[error("failed to load document from {path}: {reason}")]
    DocumentLoad { path: PathBuf, reason: String },

    #[error("unsupported input format: {0}. Expected .tex, .pdf or .txt")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
