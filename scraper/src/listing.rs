//! Paginated listing fetch with per-item enrichment.

use crate::config::ScraperConfig;
use crate::detail::DetailExtractor;
use crate::error::{Result, ScrapeError};
use crate::http::{HttpRequest, Transport};
use crate::pacing::{self, DelayPolicy};
use common::{ListingItem, ListingPage, ListingTotal, MergedRecord};
use serde::de::DeserializeOwned;
use serde_json::json;

/// How pagination ended.
#[derive(Debug)]
pub enum Completion {
    Complete,
    /// A loop page failed; records before `offset` are kept.
    Partial { offset: usize, reason: ScrapeError },
}

impl Completion {
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete)
    }
}

/// Everything collected by one pass over the listing endpoint.
#[derive(Debug)]
pub struct Harvest {
    pub total: usize,
    pub records: Vec<MergedRecord>,
    pub completion: Completion,
}

pub struct ListingFetcher<'a, T, D> {
    config: &'a ScraperConfig,
    transport: &'a T,
    delay: D,
}

impl<'a, T, D> ListingFetcher<'a, T, D>
where
    T: Transport,
    D: DelayPolicy,
{
    pub fn new(config: &'a ScraperConfig, transport: &'a T, delay: D) -> Self {
        Self {
            config,
            transport,
            delay,
        }
    }

    /// Walks every page and returns one merged record per posting, in order.
    ///
    /// Fails only when the first request at offset 0 fails. A failure on a
    /// later page ends the walk with [`Completion::Partial`].
    pub fn fetch_all_listings(&self) -> Result<Harvest> {
        let extractor = DetailExtractor::new(self.transport, &self.config.user_agent)?;

        let total = match self.request_page::<ListingTotal>(0) {
            Ok(probe) => probe.total,
            Err(e) => {
                tracing::error!(error = %e, "initial listing request failed");
                match e.status() {
                    Some(status) => println!("❌ Listing request failed, status: {}", status),
                    None => println!("❌ Listing request failed: {}", e),
                }
                return Err(e);
            }
        };
        println!("📊 Total jobs: {}", total);
        let step = self.config.page_size.max(1);
        let mut records = Vec::new();
        let mut offset = 0;
        let mut page_index = 0;

        while offset < total {
            let page = match self.request_page::<ListingPage>(offset) {
                Ok(page) => page,
                Err(reason) => {
                    tracing::warn!(
                        offset,
                        error = %reason,
                        "listing page failed, keeping partial result"
                    );
                    match reason.status() {
                        Some(status) => println!(
                            "❌ Page {} request failed, status: {}",
                            page_index + 1,
                            status
                        ),
                        None => println!("❌ Page {} request failed: {}", page_index + 1, reason),
                    }
                    return Ok(Harvest {
                        total,
                        records,
                        completion: Completion::Partial { offset, reason },
                    });
                }
            };

            tracing::info!(offset, count = page.job_postings.len(), "listing page fetched");
            for item in page.job_postings {
                records.push(self.enrich(&extractor, item));
            }

            offset += step;
            pacing::pause(&self.delay, page_index);
            page_index += 1;
        }

        Ok(Harvest {
            total,
            records,
            completion: Completion::Complete,
        })
    }

    fn enrich(&self, extractor: &DetailExtractor<'_, T>, item: ListingItem) -> MergedRecord {
        let company_url = self.config.detail_url(item.job_id());
        let detail = extractor.extract_detail(&company_url);

        println!(
            "📋 Found: {} ({})",
            item.title_text().as_deref().unwrap_or("Untitled"),
            if detail.is_some() { "detail ok" } else { "no detail" }
        );
        MergedRecord::merge(item, company_url, detail)
    }

    fn request_page<P: DeserializeOwned>(&self, offset: usize) -> Result<P> {
        let body = json!({
            "appliedFacets": {},
            "limit": self.config.page_size,
            "offset": offset,
        });
        let request = HttpRequest::post(&self.config.api_url, body.to_string())
            .header("Accept", "application/json")
            .header("Content-Type", "application/json")
            .header("User-Agent", self.config.user_agent.as_str());

        let response = self.transport.send(&request)?;
        if !response.is_success() {
            return Err(ScrapeError::Status {
                url: request.url,
                status: response.status,
            });
        }

        serde_json::from_str(&response.body).map_err(|source| ScrapeError::Decode {
            url: request.url,
            source,
        })
    }
}
