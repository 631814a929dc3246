//! Extraction stage: data model, prompt, Ollama client, and persistence.
//!
//! One `ExtractionRecord` is a single tagged span produced by the language
//! model (company, ticker, event, relationship, ...). Records are persisted
//! as an `AnnotatedDocument` — a JSON object with a top-level `extractions`
//! array — which is the only handoff between the extraction stage and the
//! graph stage.

pub mod extractor;
pub mod ollama;
pub mod prompt;
pub mod store;

pub use extractor::Extractor;
pub use ollama::OllamaClient;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Class tag marking a record as a directed subject-predicate-object relationship.
pub const RELATIONSHIP_CLASS: &str = "relationship";

/// Character span of an extraction within the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharInterval {
    pub start_pos: usize,
    pub end_pos: usize,
}

/// One unit emitted by the extraction stage: a class tag, the literal matched
/// span, an optional character interval, and class-dependent attributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionRecord {
    pub extraction_class: String,
    pub extraction_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub char_interval: Option<CharInterval>,
    /// Attribute values are expected to be strings, but the map is kept as raw
    /// JSON so a malformed value invalidates one record, not the whole parse.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Map<String, Value>>,
}

impl ExtractionRecord {
    /// Create a record with string attributes (the common case).
    pub fn new(
        class: impl Into<String>,
        text: impl Into<String>,
        attributes: &[(&str, &str)],
    ) -> Self {
        let map: Map<String, Value> = attributes
            .iter()
            .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
            .collect();
        Self {
            extraction_class: class.into(),
            extraction_text: text.into(),
            char_interval: None,
            attributes: if map.is_empty() { None } else { Some(map) },
        }
    }

    pub fn is_relationship(&self) -> bool {
        self.extraction_class == RELATIONSHIP_CLASS
    }

    /// Look up an attribute, returning it only if it is a non-empty string.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .as_ref()?
            .get(key)?
            .as_str()
            .filter(|s| !s.is_empty())
    }

    /// The (subject, predicate, object) of a valid relationship record.
    ///
    /// Returns `None` for non-relationship records and for relationship
    /// records missing any of the three attributes (or carrying empty or
    /// non-string values for them).
    pub fn relationship_triple(&self) -> Option<(&str, &str, &str)> {
        if !self.is_relationship() {
            return None;
        }
        let subject = self.attribute("subject")?;
        let predicate = self.attribute("predicate")?;
        let object = self.attribute("object")?;
        Some((subject, predicate, object))
    }
}

/// A persisted extraction run: source text plus the ordered record list.
///
/// `extractions` is required — a document without it fails deserialization,
/// which is fatal for the run. The remaining fields default so documents
/// produced by other tools still load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotatedDocument {
    #[serde(default = "Uuid::new_v4")]
    pub document_id: Uuid,
    #[serde(default = "Utc::now")]
    pub generated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub extractions: Vec<ExtractionRecord>,
}

impl AnnotatedDocument {
    /// Create a document for a freshly extracted source text.
    pub fn new(text: impl Into<String>, extractions: Vec<ExtractionRecord>) -> Self {
        Self {
            document_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            text: Some(text.into()),
            extractions,
        }
    }
}
