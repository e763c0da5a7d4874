use retex_core::error::RetexError;
use retex_core::model::ResumeDocument;
use std::path::PathBuf;

pub fn run(input_file: PathBuf, out: Option<PathBuf>) -> Result<(), RetexError> {
    let json = std::fs::read_to_string(&input_file)?;
    let doc: ResumeDocument = serde_json::from_str(&json).map_err(|e| RetexError::DocumentLoad {
        path: input_file.clone(),
        reason: e.to_string(),
    })?;

    let latex = retex_core::generate_latex(&doc);

    match out {
        Some(path) => {
            std::fs::write(&path, latex)?;
            eprintln!("LaTeX written to {}", path.display());
        }
        None => print!("{latex}"),
    }

    Ok(())
}
