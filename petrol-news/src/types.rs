use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_FEED_NAME: &str = "News";
pub const DEFAULT_CATEGORY: &str = "news";

/// One configured feed, as listed in the feed list file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedConfig {
    pub url: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl FeedConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            name: None,
            category: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Display label, falling back to "News"
    pub fn display_name(&self) -> &str {
        non_blank(self.name.as_deref()).unwrap_or(DEFAULT_FEED_NAME)
    }

    /// Category key, falling back to "news"
    pub fn category_key(&self) -> &str {
        non_blank(self.category.as_deref()).unwrap_or(DEFAULT_CATEGORY)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// An entry as handed over by a feed source, before normalization.
/// Every field is optional; dates are kept as strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawEntry {
    pub title: Option<String>,
    pub link: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub published: Option<String>,
    pub updated: Option<String>,
}

/// Canonical news item. `link` is unique within one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub title: String,
    pub link: String,
    pub summary: String,
    pub category: String,
    pub feed_name: String,
    pub source_host: String,
    pub published_utc: String,
    pub published_sort: f64,
}

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub user_agent: String,
    pub timeout_seconds: u64,
    pub max_retries: u32,
    pub retry_delay_seconds: u64,
    pub max_feed_size_mb: usize,
    pub max_redirects: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: "Petrol-News/1.0".to_string(),
            timeout_seconds: 30,
            max_retries: 1,
            retry_delay_seconds: 2,
            max_feed_size_mb: 10,
            max_redirects: 5,
        }
    }
}

/// Caps applied while building the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Raw entries considered per feed, before dedup
    pub per_feed_entries: usize,
    /// Items kept in the ranked pool
    pub pool_size: usize,
    /// Cards per HTML section
    pub section_size: usize,
    /// Characters kept from a summary
    pub summary_chars: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            per_feed_entries: 20,
            pool_size: 120,
            section_size: 20,
            summary_chars: 280,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AggregatorError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {reason}")]
    HttpStatus { status: u16, reason: String },

    #[error("Feed parse error: {0}")]
    Parse(String),

    #[error("Invalid feed list {}: {}", .path.display(), .message)]
    Config { path: PathBuf, message: String },

    #[error("Feed size exceeds limit: {size_mb}MB")]
    FeedTooLarge { size_mb: usize },

    #[error("Failed to write {}: {}", .path.display(), .source)]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("General error: {0}")]
    General(String),
}

impl AggregatorError {
    /// Client errors and oversized documents fail the same way on every attempt
    pub fn is_retryable(&self) -> bool {
        match self {
            AggregatorError::HttpStatus { status, .. } => !(400..500).contains(status),
            AggregatorError::FeedTooLarge { .. } => false,
            _ => true,
        }
    }
}

pub type Result<T> = std::result::Result<T, AggregatorError>;

/// Why a raw entry did not make it into the pool
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntryRejection {
    #[error("entry has no link")]
    MissingLink,

    #[error("entry has no title")]
    MissingTitle,

    #[error("link already collected: {0}")]
    DuplicateLink(String),
}
