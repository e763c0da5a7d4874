pub mod pdftotext;

use crate::error::RetexError;

/// Trait for PDF text extraction backends.
///
/// The recoverer only needs the flattened text stream; page structure
/// and positioning are irrelevant to it, so backends return one string.
pub trait TextExtractor: Send + Sync {
    /// Extract the plain text content of a PDF.
    fn extract_text(&self, pdf_bytes: &[u8]) -> Result<String, RetexError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
