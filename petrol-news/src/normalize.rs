use crate::dates;
use crate::rss_utils::{text, url};
use crate::types::{EntryRejection, FeedConfig, Item, RawEntry};

/// Turn a raw feed entry into a canonical item.
///
/// Entries without a link or title are rejected; everything else is defaulted.
pub fn normalize_entry(
    entry: &RawEntry,
    feed: &FeedConfig,
    summary_chars: usize,
) -> Result<Item, EntryRejection> {
    let link = trimmed(entry.link.as_deref());
    if link.is_empty() {
        return Err(EntryRejection::MissingLink);
    }

    let title = trimmed(entry.title.as_deref());
    if title.is_empty() {
        return Err(EntryRejection::MissingTitle);
    }

    // An empty summary falls through to the description
    let raw_summary = entry
        .summary
        .as_deref()
        .filter(|s| !s.is_empty())
        .or(entry.description.as_deref())
        .unwrap_or("");

    let published = dates::normalize_date([entry.published.as_deref(), entry.updated.as_deref()]);

    Ok(Item {
        title: title.to_string(),
        link: link.to_string(),
        summary: text::clean_summary(raw_summary, summary_chars),
        category: feed.category_key().to_string(),
        feed_name: feed.display_name().to_string(),
        source_host: url::source_host(link),
        published_utc: dates::to_iso_utc(&published),
        published_sort: dates::sort_key(&published),
    })
}

fn trimmed(value: Option<&str>) -> &str {
    value.map(str::trim).unwrap_or("")
}
