use crate::types::{RawEntry, Result};
use async_trait::async_trait;

/// Anything that can turn a feed URL into raw entries (HTTP, canned fixtures, ...)
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Human-readable name for this source
    fn source_name(&self) -> String;

    /// Fetch the entries of one feed, in the order the feed lists them.
    /// Transport and parse problems come back as `Err`; callers decide whether they are fatal.
    async fn fetch(&self, url: &str) -> Result<Vec<RawEntry>>;
}
