use crate::utils::{I18nTranslatorError, Result};
use serde_json::Value;
use std::path::Path;

/// Loads and parses the source resource file.
///
/// Read and parse failures are reported separately so the caller can tell a
/// missing file apart from a malformed one.
pub fn read_document(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path).map_err(|e| I18nTranslatorError::InputRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| I18nTranslatorError::InputParse {
        path: path.to_path_buf(),
        source: e,
    })
}
