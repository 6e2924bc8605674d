//! CSV export sink

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use papers_client::PaperRecord;

/// Write records to a CSV file.
///
/// The header row comes from the record's field names and rows are written in
/// input order.
pub fn write_csv(papers: &[PaperRecord], path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    write_csv_to(papers, file)
}

fn write_csv_to<W: Write>(papers: &[PaperRecord], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for paper in papers {
        csv_writer
            .serialize(paper)
            .context("failed to serialize record to CSV")?;
    }
    csv_writer.flush().context("failed to flush CSV output")?;
    Ok(())
}
