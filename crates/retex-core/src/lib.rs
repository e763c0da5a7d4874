pub mod error;
pub mod extraction;
pub mod generate;
pub mod model;
pub mod parse;
pub mod recover;
pub mod template;
pub mod text;
pub mod vocab;

use error::RetexError;
use extraction::TextExtractor;
use model::ResumeDocument;
use recover::RecoverOptions;

pub use template::default_document;

/// Render a document to a complete standalone LaTeX file.
pub fn generate_latex(doc: &ResumeDocument) -> String {
    generate::generate(doc)
}

/// Main import entry point for LaTeX source: parse the markup back into
/// a document.
///
/// Unrecognized markup is skipped, never an error; only input that
/// yields nothing at all is reported as a failure.
pub fn import_latex(source: &str) -> Result<ResumeDocument, RetexError> {
    if source.trim().is_empty() {
        return Err(RetexError::EmptyInput);
    }
    let doc = parse::parse_latex(source);
    if doc.is_empty() {
        return Err(RetexError::NothingRecovered);
    }
    Ok(doc)
}

/// Import flattened plain text (as extracted from a PDF) through the
/// structural recoverer.
pub fn import_plain_text(text: &str, opts: &RecoverOptions) -> Result<ResumeDocument, RetexError> {
    if text.trim().is_empty() {
        return Err(RetexError::EmptyInput);
    }
    let doc = recover::recover(text, opts);
    if doc.is_empty() {
        return Err(RetexError::NothingRecovered);
    }
    Ok(doc)
}

/// Import a PDF: extract its text with the given backend, then recover
/// structure from the flattened text.
pub fn import_pdf(
    pdf_bytes: &[u8],
    extractor: &dyn TextExtractor,
    opts: &RecoverOptions,
) -> Result<ResumeDocument, RetexError> {
    let text = extractor.extract_text(pdf_bytes)?;
    import_plain_text(&text, opts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_latex_empty_input() {
        assert!(matches!(import_latex("  \n "), Err(RetexError::EmptyInput)));
    }

    #[test]
    fn test_import_latex_nothing_recovered() {
        let err = import_latex("\\documentclass{article}").unwrap_err();
        assert!(matches!(err, RetexError::NothingRecovered));
    }

    #[test]
    fn test_import_plain_text_minimal() {
        let doc = import_plain_text(
            "Jane Doe\nExperience\nAcme Corp Mumbai\nEngineer Jan 2020 \u{2013} Present\n\u{2022} Built thing",
            &RecoverOptions::default(),
        )
        .unwrap();
        assert_eq!(doc.header.name, "Jane Doe");
        assert_eq!(doc.sections.len(), 1);
    }
}
