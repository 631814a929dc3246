use crate::config::LlmConfig;
use crate::error::Result;

use super::{prompt, AnnotatedDocument, CharInterval, ExtractionRecord, OllamaClient};

/// Extraction-stage orchestration: prompt the model, parse its output into
/// records, align spans back to the source text, and stamp the document.
pub struct Extractor {
    client: OllamaClient,
}

impl Extractor {
    pub fn new(client: OllamaClient) -> Self {
        Self { client }
    }

    pub fn from_config(config: &LlmConfig) -> Self {
        Self::new(OllamaClient::new(config))
    }

    /// Extract financial entities and relationships from one article.
    pub async fn extract(&self, text: &str) -> Result<AnnotatedDocument> {
        let extraction_prompt = prompt::build_extraction_prompt(text);

        let json_str = self.client.generate_json_with_retry(&extraction_prompt).await?;

        let mut records = parse_model_output(&json_str)?;
        log::info!("Model returned {} extraction records", records.len());

        align_char_intervals(text, &mut records);

        Ok(AnnotatedDocument::new(text, records))
    }
}

/// Parse the model's JSON output into extraction records.
///
/// Accepts either the requested envelope `{"extractions": [...]}` or a bare
/// array. Individual array entries that do not match the record shape are
/// dropped with a warning; only an output with no usable array at all is an
/// error.
fn parse_model_output(json_str: &str) -> Result<Vec<ExtractionRecord>> {
    let value: serde_json::Value = serde_json::from_str(json_str)?;

    let entries = match &value {
        serde_json::Value::Object(map) => map.get("extractions").and_then(|v| v.as_array()),
        serde_json::Value::Array(_) => value.as_array(),
        _ => None,
    };

    let entries = entries.ok_or_else(|| {
        crate::error::FingraphError::Llm(
            "Model output has no extractions array".to_string(),
        )
    })?;

    let mut records = Vec::with_capacity(entries.len());
    for entry in entries {
        match serde_json::from_value::<ExtractionRecord>(entry.clone()) {
            Ok(record) => records.push(record),
            Err(e) => log::warn!("Dropping malformed model record: {} ({})", entry, e),
        }
    }

    Ok(records)
}

/// Locate each extraction span in the source text (first occurrence).
///
/// Spans the model paraphrased rather than copied are left unaligned with
/// `char_interval: None`.
fn align_char_intervals(text: &str, records: &mut [ExtractionRecord]) {
    for record in records.iter_mut() {
        record.char_interval = text.find(&record.extraction_text).map(|start| CharInterval {
            start_pos: start,
            end_pos: start + record.extraction_text.len(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_envelope_output() {
        let records = parse_model_output(
            r#"{"extractions": [
                {"extraction_class": "company", "extraction_text": "Ford"},
                {"extraction_class": "ticker", "extraction_text": "F", "attributes": {"exchange": "NYSE"}}
            ]}"#,
        )
        .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].attribute("exchange"), Some("NYSE"));
    }

    #[test]
    fn test_parse_bare_array_output() {
        let records = parse_model_output(
            r#"[{"extraction_class": "company", "extraction_text": "General Motors"}]"#,
        )
        .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].extraction_class, "company");
    }

    #[test]
    fn test_parse_drops_malformed_entries() {
        let records = parse_model_output(
            r#"{"extractions": [
                {"extraction_class": "company", "extraction_text": "Ford"},
                {"wrong_shape": true},
                "just a string"
            ]}"#,
        )
        .unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_parse_no_array_is_error() {
        assert!(parse_model_output(r#"{"entities": []}"#).is_err());
        assert!(parse_model_output(r#""hello""#).is_err());
    }

    #[test]
    fn test_parse_invalid_json_is_error() {
        assert!(parse_model_output("not json at all").is_err());
    }

    #[test]
    fn test_align_char_intervals() {
        let text = "Ford (F) paid a special dividend of $0.65 in 2023.";
        let mut records = vec![
            ExtractionRecord::new("company", "Ford", &[]),
            ExtractionRecord::new("financial_figure", "$0.65", &[]),
            ExtractionRecord::new("event", "merger talks", &[]),
        ];
        align_char_intervals(text, &mut records);

        assert_eq!(
            records[0].char_interval,
            Some(CharInterval { start_pos: 0, end_pos: 4 })
        );
        let interval = records[1].char_interval.unwrap();
        assert_eq!(&text[interval.start_pos..interval.end_pos], "$0.65");
        // Paraphrased span not present in the text stays unaligned
        assert_eq!(records[2].char_interval, None);
    }
}
