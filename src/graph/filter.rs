//! Relationship filter: selects valid subject/predicate/object triples from
//! the full ordered record sequence.

use crate::extract::ExtractionRecord;

/// One directed relationship ready for graphing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triple {
    pub subject: String,
    pub predicate: String,
    pub object: String,
}

/// Result of filtering: valid triples in input order, plus the number of
/// relationship-class records that were skipped as malformed.
#[derive(Debug, Default)]
pub struct FilterOutcome {
    pub triples: Vec<Triple>,
    pub skipped: usize,
}

/// Select the valid relationship triples from an ordered record sequence.
///
/// Non-relationship records are ignored without comment. Relationship records
/// missing the attributes map, or missing any of `subject`/`predicate`/
/// `object`, or carrying empty or non-string values for them, are skipped with
/// a warning and counted — never aborting the run.
pub fn relationship_triples(records: &[ExtractionRecord]) -> FilterOutcome {
    let mut outcome = FilterOutcome::default();

    for record in records {
        if !record.is_relationship() {
            continue;
        }

        match record.relationship_triple() {
            Some((subject, predicate, object)) => outcome.triples.push(Triple {
                subject: subject.to_string(),
                predicate: predicate.to_string(),
                object: object.to_string(),
            }),
            None => {
                log::warn!(
                    "Skipping malformed relationship record (text: {:?}): needs non-empty subject/predicate/object",
                    record.extraction_text
                );
                outcome.skipped += 1;
            }
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relationship(subject: &str, predicate: &str, object: &str) -> ExtractionRecord {
        ExtractionRecord::new("relationship", "", &[
            ("subject", subject),
            ("predicate", predicate),
            ("object", object),
        ])
    }

    #[test]
    fn test_filter_ignores_non_relationship_classes() {
        let records = vec![
            ExtractionRecord::new("company", "NVIDIA Corporation", &[("type", "corporation")]),
            ExtractionRecord::new("ticker", "NVDA", &[]),
            ExtractionRecord::new("sentiment", "robust gains", &[("score", "positive")]),
        ];
        let outcome = relationship_triples(&records);
        assert!(outcome.triples.is_empty());
        // non-relationship records are expected, not skipped-as-malformed
        assert_eq!(outcome.skipped, 0);
    }

    #[test]
    fn test_filter_preserves_input_order() {
        let records = vec![
            relationship("NVIDIA Corporation", "ISSUES", "NVDA"),
            ExtractionRecord::new("company", "Groq", &[]),
            relationship("NVDA", "HAS_PRICE", "$190.53"),
        ];
        let outcome = relationship_triples(&records);
        assert_eq!(outcome.triples.len(), 2);
        assert_eq!(outcome.triples[0].predicate, "ISSUES");
        assert_eq!(outcome.triples[1].predicate, "HAS_PRICE");
    }

    #[test]
    fn test_filter_skips_malformed_and_continues() {
        let records = vec![
            ExtractionRecord::new("relationship", "no attributes at all", &[]),
            ExtractionRecord::new("relationship", "missing object", &[
                ("subject", "Ford"),
                ("predicate", "EXPERIENCED"),
            ]),
            ExtractionRecord::new("relationship", "empty predicate", &[
                ("subject", "Ford"),
                ("predicate", ""),
                ("object", "F"),
            ]),
            relationship("Ford", "ISSUES", "F"),
        ];
        let outcome = relationship_triples(&records);
        assert_eq!(outcome.triples.len(), 1);
        assert_eq!(outcome.skipped, 3);
        assert_eq!(outcome.triples[0].subject, "Ford");
    }

    #[test]
    fn test_filter_empty_input() {
        let outcome = relationship_triples(&[]);
        assert!(outcome.triples.is_empty());
        assert_eq!(outcome.skipped, 0);
    }
}
