//! Graph builder: converts the filtered relationship sequence into a
//! directed graph, one edge per valid record.

use crate::extract::ExtractionRecord;

use super::filter::{relationship_triples, Triple};
use super::RelationGraph;

/// Counts surfaced to the caller after a build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Valid relationship records graphed.
    pub relationships: usize,
    /// Malformed relationship records skipped by the filter.
    pub skipped: usize,
}

/// Build a graph from an ordered triple sequence.
///
/// Pure and deterministic: the same input order always yields the same node
/// set, edge set, and labels.
pub fn build_graph(triples: &[Triple]) -> RelationGraph {
    let mut graph = RelationGraph::new();
    for triple in triples {
        graph.add_relation(&triple.subject, &triple.predicate, &triple.object);
    }
    graph
}

/// Filter and build in one pass over the full persisted record sequence.
pub fn graph_from_records(records: &[ExtractionRecord]) -> (RelationGraph, BuildStats) {
    let outcome = relationship_triples(records);
    let graph = build_graph(&outcome.triples);
    let stats = BuildStats {
        relationships: outcome.triples.len(),
        skipped: outcome.skipped,
    };
    (graph, stats)
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

    /// Structural fingerprint for comparing two builds.
    fn shape(graph: &RelationGraph) -> (Vec<String>, Vec<(String, String, String)>) {
        let nodes = graph.nodes().map(|(_, n)| n.name.clone()).collect();
        let edges = graph
            .edges()
            .map(|(s, t, e)| {
                (
                    graph.entity(s).unwrap().name.clone(),
                    graph.entity(t).unwrap().name.clone(),
                    e.predicate.clone(),
                )
            })
            .collect();
        (nodes, edges)
    }

    #[test]
    fn test_no_relationships_yields_empty_graph() {
        let records = vec![
            ExtractionRecord::new("company", "NVIDIA Corporation", &[]),
            ExtractionRecord::new("ticker", "NVDA", &[]),
        ];
        let (graph, stats) = graph_from_records(&records);
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(stats.relationships, 0);
    }

    #[test]
    fn test_distinct_subjects_distinct_nodes() {
        let records = vec![
            relationship("NVIDIA Corporation", "PARTNERS_WITH", "Groq"),
            relationship("Ford", "ISSUES", "F"),
        ];
        let (graph, _) = graph_from_records(&records);
        assert!(graph.find_entity("NVIDIA Corporation").is_some());
        assert!(graph.find_entity("Ford").is_some());
        assert_ne!(
            graph.find_entity("NVIDIA Corporation"),
            graph.find_entity("Ford")
        );
    }

    #[test]
    fn test_shared_subject_single_node() {
        let records = vec![
            relationship("NVDA", "HAS_PRICE", "$190.53"),
            relationship("NVDA", "HAS_GAIN", "42%"),
        ];
        let (graph, _) = graph_from_records(&records);
        // NVDA, $190.53, 42%
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_malformed_record_contributes_nothing() {
        let records = vec![
            ExtractionRecord::new("relationship", "bad", &[("subject", "Ghost")]),
            relationship("Ford", "ISSUES", "F"),
        ];
        let (graph, stats) = graph_from_records(&records);
        // the malformed record's partial subject never becomes a node
        assert!(graph.find_entity("Ghost").is_none());
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(stats.skipped, 1);
        assert_eq!(stats.relationships, 1);
    }

    #[test]
    fn test_build_is_deterministic() {
        let records = vec![
            relationship("NVIDIA Corporation", "ISSUES", "NVDA"),
            relationship("NVIDIA Corporation", "PARTNERS_WITH", "Groq"),
            relationship("Groq", "PROVIDES_TALENT_TO", "NVIDIA Corporation"),
            relationship("NVDA", "HAS_PRICE", "$190.53"),
        ];
        let (first, _) = graph_from_records(&records);
        let (second, _) = graph_from_records(&records);
        assert_eq!(shape(&first), shape(&second));
    }

    #[test]
    fn test_reference_scenario() {
        // The NVIDIA/NVDA/$190.53 scenario: 3 nodes, 2 edges, exact labels.
        let records = vec![
            relationship("NVIDIA Corporation", "ISSUES", "NVDA"),
            ExtractionRecord::new("company", "", &[]),
            relationship("NVDA", "HAS_PRICE", "$190.53"),
        ];
        let (graph, stats) = graph_from_records(&records);

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(stats.relationships, 2);
        assert_eq!(stats.skipped, 0);

        let (_, edges) = shape(&graph);
        assert_eq!(edges[0], (
            "NVIDIA Corporation".to_string(),
            "NVDA".to_string(),
            "ISSUES".to_string()
        ));
        assert_eq!(edges[1], (
            "NVDA".to_string(),
            "$190.53".to_string(),
            "HAS_PRICE".to_string()
        ));
    }

    #[test]
    fn test_edge_never_reversed() {
        let (graph, _) = graph_from_records(&[relationship("Event", "HAPPENED_ON", "2025")]);
        let subject = graph.find_entity("Event").unwrap();
        let object = graph.find_entity("2025").unwrap();
        let (source, target, _) = graph.edges().next().unwrap();
        assert_eq!((source, target), (subject, object));
    }
}
