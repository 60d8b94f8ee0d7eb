pub mod check;
pub mod config;
pub mod fill;
pub mod submit;

use questionnaire_core::FormAnswers;
use std::path::Path;

/// Read a JSON answers file.
pub fn load_answers(path: &Path) -> Result<FormAnswers, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let answers = serde_json::from_str(&content)
        .map_err(|e| format!("cannot parse {}: {e}", path.display()))?;
    Ok(answers)
}
