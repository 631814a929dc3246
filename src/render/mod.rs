//! Visualization handoff: turns a built relationship graph into a single
//! self-contained interactive document.
//!
//! The renderer sits behind a trait so the graph stage never depends on a
//! specific layout engine.

mod vis_network;

pub use vis_network::VisNetworkRenderer;

use crate::error::Result;
use crate::graph::RelationGraph;
use std::path::Path;

/// Renders a relationship graph to a complete document (graph in, renderable
/// document out).
pub trait GraphRenderer {
    fn render(&self, graph: &RelationGraph) -> Result<String>;
}

/// Write the rendered page to its output location.
///
/// A failure here is fatal for the run but leaves the already-built graph
/// untouched (the renderer only borrows it).
pub fn write_page(path: &Path, html: &str) -> Result<()> {
    std::fs::write(path, html)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_page() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("graph.html");
        write_page(&path, "<html></html>").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<html></html>");
    }

    #[test]
    fn test_write_page_bad_directory_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing_dir").join("graph.html");
        assert!(write_page(&path, "<html></html>").is_err());
    }
}
