use std::path::Path;

use super::table::ArticleRow;
use crate::core::NsError;

/// File name offered for the JSON download.
pub const EXPORT_FILE_NAME: &str = "crypto_sentiment_data.json";

/// Serializes rows as a pretty-printed JSON array (two-space indent).
pub(crate) fn to_json(rows: &[&ArticleRow]) -> Result<String, NsError> {
    serde_json::to_string_pretty(rows).map_err(NsError::Export)
}

/// Parses an export back into rows.
///
/// # Errors
///
/// Returns [`NsError::Json`] if `json` is not an array of export records.
pub fn from_json(json: &str) -> Result<Vec<ArticleRow>, NsError> {
    serde_json::from_str(json).map_err(NsError::Json)
}

/// Writes an export to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`NsError::Io`] if the file cannot be written.
pub fn write_json(path: &Path, json: &str) -> Result<(), NsError> {
    std::fs::write(path, json)?;
    tracing::info!(path = %path.display(), bytes = json.len(), "export written");
    Ok(())
}
