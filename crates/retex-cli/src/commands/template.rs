use retex_core::error::RetexError;
use std::path::PathBuf;

pub fn run(out: Option<PathBuf>) -> Result<(), RetexError> {
    let doc = retex_core::default_document()?;
    let json = serde_json::to_string_pretty(&doc)?;

    match out {
        Some(path) => {
            std::fs::write(&path, json)?;
            eprintln!("Starter document written to {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
