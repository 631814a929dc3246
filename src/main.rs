use anyhow::Result;
use fingraph::extract::store;
use fingraph::graph::graph_from_records;
use fingraph::render::{GraphRenderer, VisNetworkRenderer};
use fingraph::Config;

/// Graph stage: read the persisted extraction document, build the
/// relationship graph, render it as an interactive page.
///
/// Single linear pass, stateless across runs: read file -> filter -> build
/// graph -> render -> write file.
fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or("RUST_LOG", "info"),
    )
    .init();

    log::info!("Starting FinGraph v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::load()?;
    log::info!("Extractions file: {}", config.extractions_path().display());
    log::info!("Graph output: {}", config.graph_output_path().display());

    let document = store::read_document(config.extractions_path())?;
    log::info!(
        "Loaded document {} with {} extraction records",
        document.document_id,
        document.extractions.len()
    );

    let (graph, stats) = graph_from_records(&document.extractions);
    log::info!(
        "Built graph: {} nodes, {} edges ({} relationships graphed, {} skipped as malformed)",
        graph.node_count(),
        graph.edge_count(),
        stats.relationships,
        stats.skipped
    );

    let renderer = VisNetworkRenderer::new();
    let html = renderer.render(&graph)?;
    fingraph::render::write_page(config.graph_output_path(), &html)?;

    log::info!(
        "Wrote interactive graph to {}",
        config.graph_output_path().display()
    );

    Ok(())
}
