use fingraph::extract::store;
use fingraph::graph::graph_from_records;
use fingraph::Config;
use std::collections::BTreeMap;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load()?;
    let document = store::read_document(config.extractions_path())?;

    println!("\n=== FinGraph Extraction Statistics ===\n");
    println!("Document:  {}", document.document_id);
    println!("Generated: {}", document.generated_at);
    println!("Records:   {}", document.extractions.len());

    // Record counts by extraction class
    let mut class_counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in &document.extractions {
        *class_counts.entry(record.extraction_class.as_str()).or_insert(0) += 1;
    }

    println!("\nRecords by class:\n");
    println!("{:-<40}", "");
    println!("{:<25} {:>10}", "Class", "Count");
    println!("{:-<40}", "");
    for (class, count) in &class_counts {
        println!("{:<25} {:>10}", class, count);
    }
    println!("{:-<40}", "");

    // Graph shape
    let (graph, stats) = graph_from_records(&document.extractions);
    println!("\nRelationship graph:");
    println!("  Nodes:                 {}", graph.node_count());
    println!("  Edges:                 {}", graph.edge_count());
    println!("  Relationships graphed: {}", stats.relationships);
    println!("  Skipped (malformed):   {}", stats.skipped);

    // Highest-degree entities
    let mut degrees: Vec<_> = graph
        .nodes()
        .map(|(idx, node)| (node.name.as_str(), graph.degree(idx)))
        .collect();
    degrees.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));

    if !degrees.is_empty() {
        println!("\nMost connected entities:\n");
        println!("{:-<50}", "");
        println!("{:<38} {:>10}", "Entity", "Degree");
        println!("{:-<50}", "");
        for (name, degree) in degrees.iter().take(10) {
            println!("{:<38} {:>10}", name, degree);
        }
        println!("{:-<50}", "");
    }

    println!();

    Ok(())
}
