use retex_core::error::RetexError;
use retex_core::model::ResumeDocument;

pub fn print(doc: &ResumeDocument) -> Result<(), RetexError> {
    let json = serde_json::to_string_pretty(doc)?;
    println!("{json}");
    Ok(())
}
