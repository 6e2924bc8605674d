use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use papers_client::PubMedClient;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

mod export;

#[derive(Parser)]
#[command(
    name = "get-papers",
    about = "Search PubMed and flag papers with industry-affiliated authors",
    long_about = "Searches PubMed for a free-text query, fetches article metadata in \
                  batches, and marks papers with at least one pharma/biotech-affiliated \
                  author. Results go to a CSV file or, by default, to stdout as JSON."
)]
struct Cli {
    /// Query to search PubMed (free text, passed through as-is)
    query: String,

    /// Filename to save results as CSV (prints JSON to stdout if omitted)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    debug!(query = %cli.query, "Searching PubMed");

    let client = PubMedClient::new();

    let ids = client.search_papers(&cli.query).await;
    if ids.is_empty() {
        println!("No papers found for the given query.");
        return Ok(());
    }
    debug!(count = ids.len(), "Found papers");

    let outcome = client.fetch_paper_details(&ids).await;
    for failure in &outcome.failures {
        warn!(
            chunk = failure.chunk_index + 1,
            error = %failure.error,
            "A batch of papers could not be retrieved"
        );
    }
    if outcome.papers.is_empty() {
        println!("No paper details could be retrieved.");
        return Ok(());
    }

    match &cli.file {
        Some(path) => {
            export::write_csv(&outcome.papers, path)?;
            println!("Saved {} entries to {}", outcome.papers.len(), path.display());
        }
        None => {
            println!("{}", serde_json::to_string_pretty(&outcome.papers)?);
        }
    }

    Ok(())
}
