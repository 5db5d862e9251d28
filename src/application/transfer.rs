//! JSON import and export of the quote collection.
//!
//! Export writes the full collection as a pretty-printed JSON document.
//! Import is atomic: the file must parse as a list of quote-shaped records
//! or the whole operation is rejected and the collection stays untouched.

use std::fs;
use std::path::Path;

use crate::domain::{AppError, Quote, Result};

/// Render the full collection as a pretty-printed JSON document.
///
/// # Errors
/// Returns error if serialization fails.
pub fn export_string(quotes: &[Quote]) -> Result<String> {
    serde_json::to_string_pretty(quotes).map_err(AppError::json_parse)
}

/// Write the full collection to `path` as pretty-printed JSON.
///
/// # Errors
/// Returns error if serialization or the file write fails.
pub fn export_to_file(quotes: &[Quote], path: &Path) -> Result<()> {
    let content = export_string(quotes)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| AppError::io("Failed to create export directory", e))?;
        }
    }

    fs::write(path, content)
        .map_err(|e| AppError::io(format!("Failed to write export: {}", path.display()), e))?;

    tracing::info!(path = %path.display(), count = quotes.len(), "Exported quotes");

    Ok(())
}

/// Parse an imported document into quotes.
///
/// Duplicates inside the document are accepted as-is.
///
/// # Errors
/// Returns `AppError::JsonParse` unless the document is a JSON list of
/// records with string `text` and `category` fields.
pub fn parse_import(content: &str) -> Result<Vec<Quote>> {
    serde_json::from_str::<Vec<Quote>>(content).map_err(AppError::json_parse)
}

/// Read and parse a user-supplied JSON file.
///
/// # Errors
/// Returns error if the file cannot be read or does not parse as a quote
/// list. Nothing is applied on failure.
pub fn import_from_file(path: &Path) -> Result<Vec<Quote>> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::io(format!("Failed to read import: {}", path.display()), e))?;
    parse_import(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_export_then_parse_roundtrip() {
        let quotes = vec![
            Quote::new("Believe in yourself.", "Motivation"),
            Quote::new("Stay curious.", "Learning"),
        ];
        let json = export_string(&quotes).unwrap();
        assert_eq!(parse_import(&json).unwrap(), quotes);
    }

    #[test]
    fn test_non_list_document_is_rejected() {
        assert!(parse_import(r#"{"text":"x","category":"y"}"#).is_err());
        assert!(parse_import("42").is_err());
        assert!(parse_import("not json").is_err());
    }

    #[test]
    fn test_malformed_record_rejects_whole_import() {
        // One good record, one missing a field: nothing gets through.
        let json = r#"[{"text":"a","category":"b"},{"text":"c"}]"#;
        assert!(parse_import(json).is_err());
    }

    #[test]
    fn test_duplicates_are_accepted_as_is() {
        let json = r#"[{"text":"a","category":"b"},{"text":"a","category":"b"}]"#;
        assert_eq!(parse_import(json).unwrap().len(), 2);
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("quotes.json");

        let quotes = vec![Quote::new("Ship it.", "Engineering")];
        export_to_file(&quotes, &path).unwrap();

        assert_eq!(import_from_file(&path).unwrap(), quotes);
    }
}
