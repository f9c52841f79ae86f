//! Workday job listing scraper.
//!
//! Pages through the listing API, enriches each posting from the JSON-LD
//! block on its detail page and writes everything to one CSV file.

pub mod config;
pub mod detail;
pub mod error;
pub mod http;
pub mod listing;
pub mod logging;
pub mod pacing;
pub mod pipeline;
pub mod sink;

pub use config::ScraperConfig;
pub use detail::DetailExtractor;
pub use error::{Result, ScrapeError};
pub use http::{ReqwestTransport, Transport};
pub use listing::{Completion, Harvest, ListingFetcher};
pub use pacing::{DelayPolicy, FixedDelay, NoDelay};
pub use pipeline::{RunSummary, run};
pub use sink::write_records;
