//! Built-in starter document.

use crate::error::RetexError;
use crate::model::ResumeDocument;

const DEFAULT_RESUME_JSON: &str = include_str!("../templates/default-resume.json");

/// The sample document new users start from: a fully populated resume
/// exercising every section kind.
pub fn default_document() -> Result<ResumeDocument, RetexError> {
    Ok(serde_json::from_str(DEFAULT_RESUME_JSON)?)
}
