//! vis-network renderer: physics-based interactive layout with the
//! configuration panel filtered to the physics controls.

use serde::Serialize;

use crate::error::{FingraphError, Result};
use crate::graph::RelationGraph;

use super::GraphRenderer;

/// Node record for the vis.DataSet nodes array.
#[derive(Serialize)]
struct VisNode {
    id: usize,
    label: String,
    title: String,
}

/// Edge record for the vis.DataSet edges array.
#[derive(Serialize)]
struct VisEdge {
    from: usize,
    to: usize,
    label: String,
    arrows: &'static str,
}

/// Renders the graph as one self-contained HTML page.
#[derive(Debug, Default)]
pub struct VisNetworkRenderer {
    /// Page title shown in the browser tab.
    pub title: String,
}

impl VisNetworkRenderer {
    pub fn new() -> Self {
        Self {
            title: "Financial Relationship Graph".to_string(),
        }
    }
}

impl GraphRenderer for VisNetworkRenderer {
    fn render(&self, graph: &RelationGraph) -> Result<String> {
        let nodes: Vec<VisNode> = graph
            .nodes()
            .map(|(idx, node)| VisNode {
                id: idx.index(),
                label: node.name.clone(),
                title: node.node_type.clone(),
            })
            .collect();

        let edges: Vec<VisEdge> = graph
            .edges()
            .map(|(source, target, edge)| VisEdge {
                from: source.index(),
                to: target.index(),
                label: edge.predicate.clone(),
                arrows: "to",
            })
            .collect();

        let nodes_json = to_inline_json(&nodes)?;
        let edges_json = to_inline_json(&edges)?;

        Ok(PAGE_TEMPLATE
            .replace("__TITLE__", &html_escape(&self.title))
            .replace("__NODES__", &nodes_json)
            .replace("__EDGES__", &edges_json))
    }
}

/// Serialize for embedding inside a <script> element. `</` is escaped so
/// entity text cannot terminate the script early.
fn to_inline_json<T: Serialize>(value: &T) -> Result<String> {
    let json = serde_json::to_string(value)
        .map_err(|e| FingraphError::Render(format!("Failed to serialize graph data: {}", e)))?;
    Ok(json.replace("</", "<\\/"))
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>__TITLE__</title>
<script src="https://unpkg.com/vis-network@9.1.9/standalone/umd/vis-network.min.js"></script>
<style>
  body { margin: 0; font-family: sans-serif; }
  #network { width: 100%; height: 75vh; border-bottom: 1px solid #ddd; }
  #config { width: 100%; height: 25vh; overflow-y: auto; }
</style>
</head>
<body>
<div id="network"></div>
<div id="config"></div>
<script>
  const nodes = new vis.DataSet(__NODES__);
  const edges = new vis.DataSet(__EDGES__);
  const container = document.getElementById("network");
  const options = {
    physics: {
      enabled: true,
      solver: "barnesHut",
      stabilization: { iterations: 200 }
    },
    edges: {
      font: { align: "middle" },
      smooth: { type: "dynamic" }
    },
    configure: {
      enabled: true,
      filter: ["physics"],
      container: document.getElementById("config")
    }
  };
  new vis.Network(container, { nodes: nodes, edges: edges }, options);
</script>
</body>
</html>
"#;
