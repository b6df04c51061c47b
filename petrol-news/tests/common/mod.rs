#![allow(dead_code)]

use async_trait::async_trait;
use petrol_news::{AggregatorError, FeedSource, RawEntry, Result};
use std::collections::HashMap;
use std::sync::{Mutex, Once};

static INIT: Once = Once::new();

pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Serves canned entries per URL; unknown URLs fail like an unreachable host
#[derive(Default)]
pub struct MockFeedSource {
    feeds: HashMap<String, std::result::Result<Vec<RawEntry>, String>>,
    calls: Mutex<Vec<String>>,
}

impl MockFeedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_feed(mut self, url: &str, entries: Vec<RawEntry>) -> Self {
        self.feeds.insert(url.to_string(), Ok(entries));
        self
    }

    pub fn with_failure(mut self, url: &str, message: &str) -> Self {
        self.feeds.insert(url.to_string(), Err(message.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl FeedSource for MockFeedSource {
    fn source_name(&self) -> String {
        "mock".to_string()
    }

    async fn fetch(&self, url: &str) -> Result<Vec<RawEntry>> {
        self.calls.lock().unwrap().push(url.to_string());
        match self.feeds.get(url) {
            Some(Ok(entries)) => Ok(entries.clone()),
            Some(Err(message)) => Err(AggregatorError::General(message.clone())),
            None => Err(AggregatorError::General(format!("no route to {}", url))),
        }
    }
}

pub fn entry(link: &str, title: &str, published: &str) -> RawEntry {
    RawEntry {
        title: Some(title.to_string()),
        link: Some(link.to_string()),
        published: Some(published.to_string()),
        ..RawEntry::default()
    }
}

/// `count` entries with distinct links, one hour apart, newest first
pub fn hourly_entries(prefix: &str, count: usize) -> Vec<RawEntry> {
    (0..count)
        .map(|i| {
            let hour = 23 - (i % 24);
            let day = 28 - (i / 24);
            entry(
                &format!("https://{}.example/{}", prefix, i),
                &format!("{} story {}", prefix, i),
                &format!("{:02} Feb 2024 {:02}:00:00 +0000", day, hour),
            )
        })
        .collect()
}
