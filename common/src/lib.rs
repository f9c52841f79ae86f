//! Shared job records for the Workday listing scraper.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Output columns, in the order they are written.
pub const COLUMNS: [&str; 9] = [
    "title",
    "company_url",
    "locations",
    "post_date",
    "bullet_fields",
    "date_posted",
    "employment_type",
    "description",
    "address_country",
];

/// Only the count of matching jobs; the first response is read for this alone.
#[derive(Debug, Default, Deserialize, Clone, Copy)]
pub struct ListingTotal {
    #[serde(default)]
    pub total: usize,
}

/// One page of the listing endpoint's response.
#[derive(Debug, Default, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ListingPage {
    #[serde(default)]
    pub total: usize,
    #[serde(default)]
    pub job_postings: Vec<ListingItem>,
}

/// A summarized posting as returned by the listing endpoint.
///
/// Fields are kept as raw JSON so an oddly typed value never rejects the page.
#[derive(Debug, Default, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ListingItem {
    pub title: Option<Value>,
    pub external_path: Option<Value>,
    pub locations_text: Option<Value>,
    pub posted_on: Option<Value>,
    /// Free-form; usually an array of requisition ids.
    pub bullet_fields: Option<Value>,
}

impl ListingItem {
    /// Last `/` segment of the external path, or `""` when there is none
    /// or it is not a string.
    pub fn job_id(&self) -> &str {
        self.external_path
            .as_ref()
            .and_then(Value::as_str)
            .and_then(|path| path.rsplit('/').next())
            .unwrap_or("")
    }

    /// Title as cell text, if any.
    pub fn title_text(&self) -> Option<String> {
        self.title.as_ref().and_then(cell_text)
    }
}

/// Fields pulled from the JSON-LD `JobPosting` block of a detail page.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DetailRecord {
    pub date_posted: Option<String>,
    pub employment_type: Option<String>,
    pub description: Option<String>,
    pub address_country: Option<String>,
}

/// One output row: listing fields, detail fields and the detail URL.
///
/// Field order matches [`COLUMNS`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedRecord {
    pub title: Option<String>,
    pub company_url: String,
    pub locations: Option<String>,
    pub post_date: Option<String>,
    pub bullet_fields: Option<String>,
    pub date_posted: Option<String>,
    pub employment_type: Option<String>,
    pub description: Option<String>,
    pub address_country: Option<String>,
}

impl MergedRecord {
    /// Combines a listing item with its (possibly missing) detail record.
    pub fn merge(item: ListingItem, company_url: String, detail: Option<DetailRecord>) -> Self {
        let detail = detail.unwrap_or_default();
        Self {
            title: item.title.as_ref().and_then(cell_text),
            company_url,
            locations: item.locations_text.as_ref().and_then(cell_text),
            post_date: item.posted_on.as_ref().and_then(cell_text),
            bullet_fields: item.bullet_fields.as_ref().and_then(cell_text),
            date_posted: detail.date_posted,
            employment_type: detail.employment_type,
            description: detail.description,
            address_country: detail.address_country,
        }
    }
}

/// Renders a JSON value as a cell: strings verbatim, `null` as absent,
/// anything else as compact JSON.
pub fn cell_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_job_id_is_last_path_segment() {
        let item = ListingItem {
            external_path: Some(json!("/job/Tampa-FL/Project-Manager_R-1024")),
            ..Default::default()
        };
        assert_eq!(item.job_id(), "Project-Manager_R-1024");
    }

    #[test]
    fn test_job_id_empty_without_path() {
        assert_eq!(ListingItem::default().job_id(), "");
        let item = ListingItem {
            external_path: Some(json!("")),
            ..Default::default()
        };
        assert_eq!(item.job_id(), "");
        let item = ListingItem {
            external_path: Some(json!(42)),
            ..Default::default()
        };
        assert_eq!(item.job_id(), "");
    }

    #[test]
    fn test_listing_page_defaults_missing_fields() {
        let page: ListingPage = serde_json::from_str("{}").unwrap();
        assert_eq!(page.total, 0);
        assert!(page.job_postings.is_empty());
    }

    #[test]
    fn test_non_string_fields_do_not_reject_page() {
        let page: ListingPage = serde_json::from_str(
            r#"{"total": 2, "jobPostings": [
                {"title": "Ok", "externalPath": "/job/a/R-1"},
                {"title": 12345, "locationsText": ["Tampa", "Austin"], "postedOn": null}
            ]}"#,
        )
        .unwrap();
        assert_eq!(page.job_postings.len(), 2);

        let record = MergedRecord::merge(page.job_postings[1].clone(), String::new(), None);
        assert_eq!(record.title.as_deref(), Some("12345"));
        assert_eq!(record.locations.as_deref(), Some(r#"["Tampa","Austin"]"#));
        assert_eq!(record.post_date, None);
    }

    #[test]
    fn test_listing_total_ignores_postings() {
        let total: ListingTotal = serde_json::from_str(
            r#"{"total": 7, "jobPostings": [{"title": {"odd": true}}]}"#,
        )
        .unwrap();
        assert_eq!(total.total, 7);
    }

    #[test]
    fn test_merge_without_detail_leaves_detail_fields_empty() {
        let item = ListingItem {
            title: Some(json!("Superintendent")),
            locations_text: Some(json!("2 Locations")),
            bullet_fields: Some(json!(["R-77"])),
            ..Default::default()
        };
        let record = MergedRecord::merge(item, "https://example.test/R-77".to_string(), None);

        assert_eq!(record.title.as_deref(), Some("Superintendent"));
        assert_eq!(record.bullet_fields.as_deref(), Some(r#"["R-77"]"#));
        assert_eq!(record.date_posted, None);
        assert_eq!(record.employment_type, None);
        assert_eq!(record.description, None);
        assert_eq!(record.address_country, None);
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text(&json!(null)), None);
        assert_eq!(cell_text(&json!("FULL_TIME")), Some("FULL_TIME".to_string()));
        assert_eq!(cell_text(&json!(["A", "B"])), Some(r#"["A","B"]"#.to_string()));
        assert_eq!(cell_text(&json!(3)), Some("3".to_string()));
    }
}
