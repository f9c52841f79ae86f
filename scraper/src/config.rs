use std::path::PathBuf;
use std::time::Duration;

pub const API_URL: &str = "https://pultegroup.wd1.myworkdayjobs.com/wday/cxs/pultegroup/PGI/jobs";
pub const DETAIL_URL_PREFIX: &str = "https://pultegroup.wd1.myworkdayjobs.com/en-US/PGI/details/";
pub const PAGE_SIZE: usize = 20;
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/138.0.0.0 Safari/537.36 Edg/138.0.0.0";
pub const OUTPUT_FILE: &str = "job_list.csv";
pub const PAGE_DELAY: Duration = Duration::from_secs(3);

/// Everything a run needs to know. Built once, shared by reference.
#[derive(Debug, Clone)]
pub struct ScraperConfig {
    pub api_url: String,
    pub detail_url_prefix: String,
    pub page_size: usize,
    pub user_agent: String,
    pub output_path: PathBuf,
    pub page_delay: Duration,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            api_url: API_URL.to_string(),
            detail_url_prefix: DETAIL_URL_PREFIX.to_string(),
            page_size: PAGE_SIZE,
            user_agent: USER_AGENT.to_string(),
            output_path: PathBuf::from(OUTPUT_FILE),
            page_delay: PAGE_DELAY,
        }
    }
}

impl ScraperConfig {
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    pub fn with_detail_url_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.detail_url_prefix = prefix.into();
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn with_page_delay(mut self, delay: Duration) -> Self {
        self.page_delay = delay;
        self
    }

    /// Detail page URL for a job id: the prefix with the id appended.
    pub fn detail_url(&self, job_id: &str) -> String {
        format!("{}{}", self.detail_url_prefix, job_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_fixed_constants() {
        let config = ScraperConfig::default();
        assert_eq!(config.page_size, 20);
        assert_eq!(config.page_delay, Duration::from_secs(3));
        assert_eq!(config.output_path, PathBuf::from("job_list.csv"));
    }

    #[test]
    fn test_detail_url_appends_id() {
        let config = ScraperConfig::default().with_detail_url_prefix("https://jobs.test/details/");
        assert_eq!(config.detail_url("abc123"), "https://jobs.test/details/abc123");
        assert_eq!(config.detail_url(""), "https://jobs.test/details/");
    }
}
