use crate::traits::FeedSource;
use crate::types::{AggregatorError, FetchConfig, RawEntry, Result};
use crate::{FeedParser, Fetcher};
use async_trait::async_trait;
use tracing::{info, warn};

/// Feed source that downloads documents over HTTP and parses them with feed-rs
pub struct HttpFeedSource {
    fetcher: Fetcher,
    parser: FeedParser,
}

impl HttpFeedSource {
    pub fn new(fetch_config: FetchConfig) -> Result<Self> {
        Ok(Self {
            fetcher: Fetcher::new(fetch_config)?,
            parser: FeedParser::new(),
        })
    }
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    fn source_name(&self) -> String {
        format!("HTTP ({})", self.fetcher.config().user_agent)
    }

    async fn fetch(&self, url: &str) -> Result<Vec<RawEntry>> {
        info!("Pulling RSS feed: {}", url);

        let fetch_result = self.fetcher.fetch_feed(url).await?;

        if !FeedParser::is_valid_feed_content(&fetch_result.content) {
            warn!("Response from {} does not look like a feed", url);
            return Err(AggregatorError::Parse(format!("{} did not return a feed document", url)));
        }

        let parsed_feed = self.parser.parse_feed(&fetch_result.content)?;

        info!(
            "Pulled {} entries from {} ({}, HTTP {}) in {}ms",
            parsed_feed.entries.len(),
            parsed_feed.title.as_deref().unwrap_or("untitled feed"),
            url,
            fetch_result.http_status,
            fetch_result.response_time_ms
        );
        Ok(parsed_feed.entries)
    }
}
