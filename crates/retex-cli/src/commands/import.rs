use retex_core::error::RetexError;
use retex_core::extraction::pdftotext::PdftotextExtractor;
use retex_core::model::ResumeDocument;
use retex_core::recover::RecoverOptions;
use std::path::{Path, PathBuf};

use crate::output;

pub fn run(
    input_file: PathBuf,
    format: &str,
    output_format: &str,
    out: Option<PathBuf>,
) -> Result<(), RetexError> {
    let format = match format {
        "auto" => detect_format(&input_file)?,
        other => other.to_string(),
    };

    let opts = RecoverOptions::default();
    let doc: ResumeDocument = match format.as_str() {
        "latex" => {
            let source = std::fs::read_to_string(&input_file)?;
            retex_core::import_latex(&source)?
        }
        "pdf" => {
            let bytes = std::fs::read(&input_file)?;
            let extractor = PdftotextExtractor::new();
            retex_core::import_pdf(&bytes, &extractor, &opts)?
        }
        "text" => {
            let text = std::fs::read_to_string(&input_file)?;
            retex_core::import_plain_text(&text, &opts)?
        }
        other => return Err(RetexError::UnsupportedFormat(other.to_string())),
    };

    match out {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&doc)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Recovered {} section(s), written to {}",
                doc.sections.len(),
                path.display()
            );
        }
        None => match output_format {
            "summary" => output::summary::print(&doc),
            _ => output::json::print(&doc)?,
        },
    }

    Ok(())
}

fn detect_format(path: &Path) -> Result<String, RetexError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_lowercase();
    match ext.as_str() {
        "tex" => Ok("latex".to_string()),
        "pdf" => Ok("pdf".to_string()),
        "txt" => Ok("text".to_string()),
        _ => Err(RetexError::UnsupportedFormat(path.display().to_string())),
    }
}
