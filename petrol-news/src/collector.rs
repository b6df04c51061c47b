use crate::normalize::normalize_entry;
use crate::traits::FeedSource;
use crate::types::{EntryRejection, FeedConfig, Item, Limits};
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Counters for one collection pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectStats {
    pub feeds_configured: usize,
    pub feeds_failed: usize,
    pub entries_seen: usize,
    pub entries_rejected: usize,
    pub duplicates: usize,
}

/// Items admitted in collection order, plus what happened along the way
#[derive(Debug, Clone, Default)]
pub struct Collection {
    pub items: Vec<Item>,
    pub stats: CollectStats,
}

/// Walks the configured feeds in order and builds the deduplicated item pool
pub struct Collector<'a> {
    source: &'a dyn FeedSource,
    limits: Limits,
    seen_links: HashSet<String>,
}

impl<'a> Collector<'a> {
    pub fn new(source: &'a dyn FeedSource, limits: Limits) -> Self {
        Self {
            source,
            limits,
            seen_links: HashSet::new(),
        }
    }

    /// Fetch and normalize every feed. A failing feed contributes nothing; it never aborts the pass.
    pub async fn collect(mut self, feeds: &[FeedConfig]) -> Collection {
        let mut collection = Collection::default();
        collection.stats.feeds_configured = feeds.len();

        info!("Collecting from {} feeds via {}", feeds.len(), self.source.source_name());

        for feed in feeds {
            let entries = match self.source.fetch(&feed.url).await {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("Skipping feed {} ({}): {}", feed.display_name(), feed.url, e);
                    collection.stats.feeds_failed += 1;
                    continue;
                }
            };

            let before = collection.items.len();

            for entry in entries.iter().take(self.limits.per_feed_entries) {
                collection.stats.entries_seen += 1;

                match self.admit(normalize_entry(entry, feed, self.limits.summary_chars)) {
                    Ok(item) => collection.items.push(item),
                    Err(rejection @ EntryRejection::DuplicateLink(_)) => {
                        debug!("Skipping entry from {}: {}", feed.url, rejection);
                        collection.stats.duplicates += 1;
                    }
                    Err(rejection) => {
                        debug!("Skipping entry from {}: {}", feed.url, rejection);
                        collection.stats.entries_rejected += 1;
                    }
                }
            }

            info!(
                "Feed {}: {} entries, {} admitted",
                feed.display_name(),
                entries.len(),
                collection.items.len() - before
            );
        }

        collection
    }

    /// First-seen wins across the whole run
    fn admit(&mut self, normalized: Result<Item, EntryRejection>) -> Result<Item, EntryRejection> {
        let item = normalized?;
        if !self.seen_links.insert(item.link.clone()) {
            return Err(EntryRejection::DuplicateLink(item.link));
        }
        Ok(item)
    }
}
