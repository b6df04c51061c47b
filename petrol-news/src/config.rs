use crate::rss_utils::url;
use crate::types::{AggregatorError, FeedConfig, FetchConfig, Limits, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub const HTML_FILE_NAME: &str = "index.html";
pub const JSON_FILE_NAME: &str = "news.json";

/// Everything one run needs, passed in explicitly
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub feeds_path: PathBuf,
    pub output_dir: PathBuf,
    pub fetch: FetchConfig,
    pub limits: Limits,
    pub site: SiteInfo,
}

impl RunConfig {
    pub fn new(feeds_path: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            feeds_path: feeds_path.into(),
            output_dir: output_dir.into(),
            fetch: FetchConfig::default(),
            limits: Limits::default(),
            site: SiteInfo::default(),
        }
    }

    pub fn with_fetch_config(mut self, fetch: FetchConfig) -> Self {
        self.fetch = fetch;
        self
    }
}

/// Branding text of the generated page
#[derive(Debug, Clone, PartialEq)]
pub struct SiteInfo {
    pub page_title: String,
    pub heading: String,
    pub tagline: String,
    pub meta_description: String,
    pub footer: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            page_title: "Petrol.lk | Sri Lanka Automotive & Motorsport News".to_string(),
            heading: "Petrol.lk".to_string(),
            tagline: "Sri Lanka-focused automotive and motorsport updates + global racing headlines".to_string(),
            meta_description: "Live updates on Sri Lanka automotive and motorsport news, plus global racing headlines.".to_string(),
            footer: "Petrol.lk aggregates headlines and links to original sources. Click through to read full articles.".to_string(),
        }
    }
}

/// Load the ordered feed list from a JSON file.
///
/// Any failure here is fatal for the run: without the list there is nothing to fetch.
pub fn load_feeds(path: &Path) -> Result<Vec<FeedConfig>> {
    debug!("Loading feed list from {}", path.display());

    let content = fs::read_to_string(path).map_err(|e| AggregatorError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let feeds = parse_feeds(&content).map_err(|e| AggregatorError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    for feed in feeds.iter().filter(|f| !url::is_valid_feed_url(&f.url)) {
        warn!("Feed {} has a non-HTTP url: {}", feed.display_name(), feed.url);
    }

    info!("Loaded {} feeds from {}", feeds.len(), path.display());
    Ok(feeds)
}

pub fn parse_feeds(content: &str) -> serde_json::Result<Vec<FeedConfig>> {
    serde_json::from_str(content)
}
