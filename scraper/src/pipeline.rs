//! One run: paginate and enrich, then write the result once.

use crate::config::ScraperConfig;
use crate::error::Result;
use crate::http::Transport;
use crate::listing::{Completion, ListingFetcher};
use crate::pacing::DelayPolicy;
use crate::sink::write_records;
use std::path::PathBuf;

#[derive(Debug)]
pub struct RunSummary {
    pub total: usize,
    pub rows_written: usize,
    pub output_path: PathBuf,
    pub completion: Completion,
}

/// Fetches every listing and writes the merged records to
/// `config.output_path`.
///
/// A failed first listing request returns `Err` without touching the output
/// file. A later page failure still writes what was collected.
pub fn run<T, D>(config: &ScraperConfig, transport: &T, delay: D) -> Result<RunSummary>
where
    T: Transport,
    D: DelayPolicy,
{
    let harvest = ListingFetcher::new(config, transport, delay).fetch_all_listings()?;

    if !harvest.completion.is_complete() {
        tracing::warn!(kept = harvest.records.len(), "writing partial result");
    }

    let rows_written = write_records(&harvest.records, &config.output_path)?;
    println!(
        "💾 Wrote {} rows to {}",
        rows_written,
        config.output_path.display()
    );

    Ok(RunSummary {
        total: harvest.total,
        rows_written,
        output_path: config.output_path.clone(),
        completion: harvest.completion,
    })
}
