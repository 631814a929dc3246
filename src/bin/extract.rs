use anyhow::{Context, Result};
use clap::Parser;
use fingraph::extract::{store, Extractor};
use fingraph::Config;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "extract")]
#[command(about = "Extract financial entities and relationships from an article via Ollama")]
struct Args {
    /// Article text file to extract from
    input: PathBuf,

    /// Override the output path for the extraction document
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Skip the per-record console report
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or("RUST_LOG", "info"),
    )
    .init();

    let args = Args::parse();

    log::info!("Starting extraction");

    let config = Config::load()?;
    log::info!("Model: {} at {}", config.llm.model, config.llm.base_url);

    let text = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read article: {}", args.input.display()))?;
    log::info!("Read article: {} ({} chars)", args.input.display(), text.len());

    let extractor = Extractor::from_config(&config.llm);
    let document = extractor.extract(&text).await?;

    if !args.quiet {
        for extraction in &document.extractions {
            println!("Type: {}", extraction.extraction_class);
            println!("Text: '{}'", extraction.extraction_text);
            if let Some(interval) = extraction.char_interval {
                println!("Location: chars {}-{}", interval.start_pos, interval.end_pos);
            }
            if let Some(attributes) = &extraction.attributes {
                println!("Attributes: {}", serde_json::Value::Object(attributes.clone()));
            }
            println!("---");
        }
    }

    let output_path = args
        .output
        .unwrap_or_else(|| config.extractions_path().to_path_buf());
    store::write_document(&output_path, &document)?;

    log::info!(
        "Extraction successful: {} records written to {}",
        document.extractions.len(),
        output_path.display()
    );

    Ok(())
}
