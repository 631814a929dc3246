//! Persistence of the extraction document — the handoff file between the
//! extraction stage and the graph stage.

use crate::error::{FingraphError, Result};
use std::path::Path;

use super::AnnotatedDocument;

/// Read a persisted extraction document.
///
/// Strict on the envelope: an unreadable file, invalid JSON, or a document
/// without the `extractions` key is fatal for the run. Per-record content is
/// not validated here; the relationship filter handles malformed records.
pub fn read_document(path: &Path) -> Result<AnnotatedDocument> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        FingraphError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to read {}: {}", path.display(), e),
        ))
    })?;

    let document: AnnotatedDocument = serde_json::from_str(&content)?;
    Ok(document)
}

/// Write an extraction document as pretty-printed JSON.
pub fn write_document(path: &Path, document: &AnnotatedDocument) -> Result<()> {
    let json = serde_json::to_string_pretty(document)?;
    std::fs::write(path, json)?;
    Ok(())
}
