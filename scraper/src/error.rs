use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("invalid selector: {0}")]
    Selector(String),
    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },
    #[error("unexpected body from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScrapeError {
    /// HTTP status carried by the error, if it came from a bad response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
