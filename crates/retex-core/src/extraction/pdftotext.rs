use crate::error::RetexError;
use crate::extraction::TextExtractor;
use std::io::Write;
use std::process::Command;

/// PDF extraction backend using pdftotext (from poppler-utils).
///
/// Runs without `-layout`: the recoverer wants reading-order flowed
/// text, not column-aligned output.
pub struct PdftotextExtractor;

impl PdftotextExtractor {
    pub fn new() -> Self {
        PdftotextExtractor
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor for PdftotextExtractor {
    fn extract_text(&self, pdf_bytes: &[u8]) -> Result<String, RetexError> {
        // pdftotext wants a file path, so stage the bytes in a temp file
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| RetexError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .map_err(|e| RetexError::Extraction(e.to_string()))?;

        let output = Command::new("pdftotext")
            .arg(tmpfile.path())
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    RetexError::PdftotextNotFound
                } else {
                    RetexError::Extraction(format!("pdftotext failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(RetexError::PdftotextFailed { code, stderr });
        }

        // Page separators (form feed) just become blank lines to the
        // line-oriented recoverer.
        Ok(String::from_utf8_lossy(&output.stdout).replace('\x0c', "\n"))
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}
