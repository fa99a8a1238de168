use crate::utils::{I18nTranslatorError, Result};
use serde_json::Value;
use std::path::Path;

/// Serializes the recreated document and writes it to the destination.
///
/// Callers invoke this only after recreation fully succeeded, so the
/// destination file never holds partial output.
pub fn write_document(path: &Path, document: &Value) -> Result<()> {
    let mut content = serde_json::to_string_pretty(document)?;
    content.push('\n');

    std::fs::write(path, content).map_err(|e| I18nTranslatorError::OutputWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
