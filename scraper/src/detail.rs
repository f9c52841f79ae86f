//! Detail page enrichment.
//!
//! Job pages embed several JSON-LD blocks (organization, breadcrumbs, ...);
//! only the one carrying `datePosted` is the posting we want.

use crate::error::{Result, ScrapeError};
use crate::http::{HttpRequest, Transport};
use common::{DetailRecord, cell_text};
use scraper::{Html, Selector};
use serde_json::{Map, Value};

const JSON_LD_SELECTOR: &str = r#"script[type="application/ld+json"]"#;
const POSTING_KEY: &str = "datePosted";

/// Outcome of inspecting one JSON-LD block.
#[derive(Debug)]
pub enum Candidate {
    Posting(Map<String, Value>),
    Skip(SkipReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    Malformed(String),
    NotAnObject,
    NoDatePosted,
}

impl Candidate {
    /// Parses a block's text and checks it for `datePosted`.
    pub fn classify(text: &str) -> Self {
        match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(map)) if map.contains_key(POSTING_KEY) => Self::Posting(map),
            Ok(Value::Object(_)) => Self::Skip(SkipReason::NoDatePosted),
            Ok(_) => Self::Skip(SkipReason::NotAnObject),
            Err(e) => Self::Skip(SkipReason::Malformed(e.to_string())),
        }
    }
}

/// Selector matching `<script type="application/ld+json">` elements.
pub fn json_ld_selector() -> Result<Selector> {
    Selector::parse(JSON_LD_SELECTOR).map_err(|e| ScrapeError::Selector(e.to_string()))
}

/// First JSON-LD block in document order that is a posting.
pub fn find_posting(selector: &Selector, html: &str) -> Option<Map<String, Value>> {
    let document = Html::parse_document(html);

    document
        .select(selector)
        .map(|script| Candidate::classify(&script.text().collect::<String>()))
        .enumerate()
        .find_map(|(index, candidate)| match candidate {
            Candidate::Posting(map) => Some(map),
            Candidate::Skip(reason) => {
                tracing::debug!(index, ?reason, "skipping JSON-LD block");
                None
            }
        })
}

/// Maps a posting block onto the detail fields we keep.
pub fn detail_from_posting(posting: &Map<String, Value>) -> DetailRecord {
    let field = |key: &str| posting.get(key).and_then(cell_text);

    let address_country = posting
        .get("jobLocation")
        .and_then(|location| match location {
            Value::Array(places) => places.first(),
            other => Some(other),
        })
        .and_then(|location| location.get("address"))
        .and_then(|address| address.get("addressCountry"))
        .and_then(cell_text);

    DetailRecord {
        date_posted: field("datePosted"),
        employment_type: field("employmentType"),
        description: field("description"),
        address_country,
    }
}

pub struct DetailExtractor<'a, T> {
    transport: &'a T,
    user_agent: &'a str,
    selector: Selector,
}

impl<'a, T: Transport> DetailExtractor<'a, T> {
    pub fn new(transport: &'a T, user_agent: &'a str) -> Result<Self> {
        Ok(Self {
            transport,
            user_agent,
            selector: json_ld_selector()?,
        })
    }

    /// Fetches `url` and extracts its posting block.
    ///
    /// Never fails: a transport error or a page without a posting both
    /// come back as `None`.
    pub fn extract_detail(&self, url: &str) -> Option<DetailRecord> {
        let request = HttpRequest::get(url).header("User-Agent", self.user_agent);
        let response = match self.transport.send(&request) {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(%url, error = %e, "detail fetch failed");
                return None;
            }
        };

        let detail = find_posting(&self.selector, &response.body)
            .map(|posting| detail_from_posting(&posting));
        if detail.is_none() {
            tracing::warn!(%url, status = response.status, "no JSON-LD posting found");
        }
        detail
    }
}
