//! Workday Job Scraper
//!
//! Scrapes every PulteGroup posting from the Workday listing API,
//! enriches it from the detail page and saves the result to job_list.csv

use anyhow::{Context, Result};
use joblist_scraper::{Completion, FixedDelay, ReqwestTransport, ScraperConfig, logging, run};

fn main() -> Result<()> {
    logging::init();
    println!("🔍 Starting Workday Job Scraper...\n");

    let config = ScraperConfig::default();
    let transport = ReqwestTransport::new().context("Failed to build HTTP client")?;

    let summary = run(&config, &transport, FixedDelay(config.page_delay))
        .context("Job listing could not be fetched, nothing written")?;

    match &summary.completion {
        Completion::Complete => println!("\n✨ Scraping complete!"),
        Completion::Partial { offset, .. } => println!(
            "\n⚠️ Stopped early at offset {} of {}; saved what was collected.",
            offset, summary.total
        ),
    }
    Ok(())
}
