use crate::types::{AggregatorError, RawEntry, Result};
use feed_rs::parser;
use tracing::{debug, info};

/// A parsed feed document
#[derive(Debug, Default)]
pub struct ParsedFeed {
    pub title: Option<String>,
    pub entries: Vec<RawEntry>,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FeedParser;

impl FeedParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse an RSS, Atom or JSON Feed document, keeping entries in document order.
    pub fn parse_feed(&self, content: &str) -> Result<ParsedFeed> {
        debug!("Parsing feed content ({} bytes)", content.len());

        let feed = parser::parse(content.as_bytes())
            .map_err(|e| AggregatorError::Parse(format!("Failed to parse feed: {}", e)))?;

        let title = feed.title.map(|t| t.content);
        let entries: Vec<RawEntry> = feed.entries.into_iter().map(Self::raw_entry).collect();

        info!("Parsed feed with {} entries", entries.len());

        Ok(ParsedFeed { title, entries })
    }

    fn raw_entry(entry: feed_rs::model::Entry) -> RawEntry {
        // RSS <description> lands in `summary`, full bodies (content:encoded, atom content) in `content`
        RawEntry {
            title: entry.title.map(|t| t.content),
            link: entry_link(&entry.links),
            summary: entry.summary.map(|s| s.content),
            description: entry.content.and_then(|c| c.body),
            published: entry.published.map(|dt| dt.to_rfc2822()),
            updated: entry.updated.map(|dt| dt.to_rfc2822()),
        }
    }

    /// Cheap sniff for RSS/Atom markers before handing a body to the parser
    pub fn is_valid_feed_content(content: &str) -> bool {
        let content_lower = content.to_lowercase();

        content_lower.contains("<rss")
            || content_lower.contains("<feed")
            || content_lower.contains("<rdf:rdf")
            || content_lower.contains("<channel")
            || content_lower.contains("jsonfeed.org/version")
    }
}

/// First `alternate` (or rel-less) href, else the first non-empty one.
/// Atom entries often list `replies`/`edit` links before the article.
fn entry_link(links: &[feed_rs::model::Link]) -> Option<String> {
    let mut hrefs = links
        .iter()
        .map(|l| (l.href.trim(), l.rel.as_deref().unwrap_or("")))
        .filter(|(href, _)| !href.is_empty());

    let first = hrefs.clone().next().map(|(href, _)| href);

    hrefs
        .find(|(_, rel)| rel.is_empty() || rel.eq_ignore_ascii_case("alternate"))
        .map(|(href, _)| href)
        .or(first)
        .map(str::to_string)
}
