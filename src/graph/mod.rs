//! Knowledge graph module: relationship filtering and directed graph
//! construction over the persisted extraction records.
//!
//! Distinct subject/object strings become nodes (exact string identity, no
//! normalization) and every valid relationship record becomes one directed
//! edge subject -> object labeled with its predicate.

mod builder;
mod filter;

pub use builder::{build_graph, graph_from_records, BuildStats};
pub use filter::{relationship_triples, FilterOutcome, Triple};

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use serde::Serialize;
use std::collections::HashMap;

/// Node type tag carried by every graphed entity.
pub const ENTITY_TYPE: &str = "entity";

/// A graph vertex: one unique string seen as a relationship's subject or object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityNode {
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: String,
}

impl EntityNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            node_type: ENTITY_TYPE.to_string(),
        }
    }
}

/// A directed edge from subject to object, labeled with the predicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelationEdge {
    pub predicate: String,
}

impl RelationEdge {
    pub fn new(predicate: impl Into<String>) -> Self {
        Self {
            predicate: predicate.into(),
        }
    }
}

/// The relationship graph: a petgraph DiGraph plus a name index for
/// idempotent node creation.
///
/// DiGraph keeps parallel edges, so repeated triples (and same-pair triples
/// with different predicates) each contribute their own edge.
#[derive(Debug, Default)]
pub struct RelationGraph {
    graph: DiGraph<EntityNode, RelationEdge>,
    name_index: HashMap<String, NodeIndex>,
}

impl RelationGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the node for an entity name, creating it if absent.
    ///
    /// Re-encountering a name is a no-op: existing node attributes are never
    /// merged or overwritten.
    pub fn ensure_entity(&mut self, name: &str) -> NodeIndex {
        if let Some(&idx) = self.name_index.get(name) {
            return idx;
        }
        let idx = self.graph.add_node(EntityNode::new(name));
        self.name_index.insert(name.to_string(), idx);
        idx
    }

    /// Add one directed relationship edge (subject -> object). Self-loops are
    /// permitted.
    pub fn add_relation(&mut self, subject: &str, predicate: &str, object: &str) {
        let subject_idx = self.ensure_entity(subject);
        let object_idx = self.ensure_entity(object);
        self.graph
            .add_edge(subject_idx, object_idx, RelationEdge::new(predicate));
    }

    /// Find a node by entity name (exact, case-sensitive).
    pub fn find_entity(&self, name: &str) -> Option<NodeIndex> {
        self.name_index.get(name).copied()
    }

    pub fn entity(&self, idx: NodeIndex) -> Option<&EntityNode> {
        self.graph.node_weight(idx)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Iterate nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeIndex, &EntityNode)> {
        self.graph
            .node_indices()
            .map(move |idx| (idx, &self.graph[idx]))
    }

    /// Iterate edges in insertion order as (source, target, edge).
    pub fn edges(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex, &RelationEdge)> {
        self.graph
            .edge_references()
            .map(|e| (e.source(), e.target(), e.weight()))
    }

    /// Total degree of a node (incoming plus outgoing edges).
    pub fn degree(&self, idx: NodeIndex) -> usize {
        self.graph
            .edges_directed(idx, petgraph::Direction::Outgoing)
            .count()
            + self
                .graph
                .edges_directed(idx, petgraph::Direction::Incoming)
                .count()
    }
}
