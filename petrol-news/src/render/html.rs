use crate::config::SiteInfo;
use crate::grouping::{group_items, FIXED_CATEGORIES};
use crate::rss_utils::text;
use crate::types::Item;
use chrono::{DateTime, Utc};
use html_escape::encode_quoted_attribute as escape;

pub const EMPTY_SECTION: &str = r#"<p class="empty">No items yet. Check feeds.json.</p>"#;

const STYLE: &str = r#"
    body { font-family: Arial, sans-serif; margin:0; background:#0b0f14; color:#e8edf2; }
    .wrap { max-width: 1100px; margin: 0 auto; padding: 20px; }
    header { padding: 18px 0 6px; }
    h1 { margin: 0 0 6px; font-size: 30px; }
    .sub { color:#9fb0c3; margin:0 0 18px; }
    .grid { display:grid; grid-template-columns:1fr; gap:18px; }
    @media (min-width: 900px) { .grid { grid-template-columns: 1fr 1fr; } }
    section { background:#121923; border:1px solid #223041; border-radius:14px; padding:14px; }
    section h2 { margin: 0 0 10px; font-size: 20px; }
    .card { background:#0f151e; border:1px solid #1f2a38; border-radius:10px; padding:12px; margin-bottom:10px; }
    .card h3 { margin:6px 0 8px; font-size:16px; line-height:1.35; }
    .card h3 a { color:#e8edf2; text-decoration:none; }
    .card h3 a:hover { text-decoration:underline; }
    .card p { margin:0 0 8px; color:#bfd0e2; font-size:14px; line-height:1.5; }
    .meta { display:flex; flex-wrap:wrap; gap:8px; font-size:12px; color:#93a4b7; }
    .tag { background:#1c2938; border:1px solid #2d4158; padding:2px 8px; border-radius:999px; }
    .readmore { font-size:13px; color:#7fc4ff; text-decoration:none; }
    .readmore:hover { text-decoration:underline; }
    footer { color:#93a4b7; font-size:13px; padding:16px 0 30px; }
    .empty { color:#93a4b7; }
"#;

/// Renders the sectioned, self-contained HTML page
pub struct HtmlRenderer<'a> {
    site: &'a SiteInfo,
    section_size: usize,
}

impl<'a> HtmlRenderer<'a> {
    pub fn new(site: &'a SiteInfo, section_size: usize) -> Self {
        Self { site, section_size }
    }

    /// Full page for a ranked pool. `generated_at` is stamped into the header.
    pub fn render(&self, items: &[Item], generated_at: DateTime<Utc>) -> String {
        let groups = group_items(items);
        let site = self.site;

        let mut page = String::with_capacity(16 * 1024);
        page.push_str("<!doctype html>\n<html lang=\"en\">\n<head>\n");
        page.push_str("  <meta charset=\"utf-8\" />\n");
        page.push_str("  <meta name=\"viewport\" content=\"width=device-width,initial-scale=1\" />\n");
        page.push_str(&format!("  <title>{}</title>\n", escape(&site.page_title)));
        page.push_str(&format!(
            "  <meta name=\"description\" content=\"{}\" />\n",
            escape(&site.meta_description)
        ));
        page.push_str(&format!("  <style>{}  </style>\n", STYLE));
        page.push_str("</head>\n<body>\n  <div class=\"wrap\">\n    <header>\n");
        page.push_str(&format!("      <h1>{}</h1>\n", escape(&site.heading)));
        page.push_str(&format!("      <p class=\"sub\">{}</p>\n", escape(&site.tagline)));
        page.push_str(&format!(
            "      <p class=\"sub\">Auto-generated: {}</p>\n",
            generated_at.format("%Y-%m-%d %H:%M UTC")
        ));
        page.push_str("    </header>\n\n    <div class=\"grid\">\n");

        for category in FIXED_CATEGORIES.iter() {
            let section_items = groups.get(category.key);
            let shown = &section_items[..section_items.len().min(self.section_size)];

            page.push_str("      <section>\n");
            page.push_str(&format!("        <h2>{}</h2>\n", escape(category.title)));
            page.push_str(&render_list(shown));
            page.push_str("\n      </section>\n\n");
        }

        page.push_str("    </div>\n\n");
        page.push_str(&format!("    <footer>\n      {}\n    </footer>\n", escape(&site.footer)));
        page.push_str("  </div>\n</body>\n</html>\n");
        page
    }
}

/// Cards for one section, or the empty placeholder
pub fn render_list(items: &[&Item]) -> String {
    if items.is_empty() {
        return EMPTY_SECTION.to_string();
    }

    items
        .iter()
        .map(|item| render_card(item))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_card(item: &Item) -> String {
    let summary = text::strip_angle_brackets(&item.summary);
    let link = escape(&item.link);

    format!(
        r#"
        <article class="card">
          <div class="meta">
            <span class="tag">{feed_name}</span>
            <span>{host}</span>
            <span>{published}</span>
          </div>
          <h3><a href="{link}" target="_blank" rel="noopener noreferrer">{title}</a></h3>
          <p>{summary}</p>
          <a class="readmore" href="{link}" target="_blank" rel="noopener noreferrer">Read full article</a>
        </article>
        "#,
        feed_name = escape(&item.feed_name),
        host = escape(&item.source_host),
        published = escape(&display_timestamp(&item.published_utc)),
        link = link,
        title = escape(&item.title),
        summary = escape(&summary),
    )
}

/// `2024-01-01T10:00:00+00:00` -> `2024-01-01 10:00:00 UTC`
pub fn display_timestamp(published_utc: &str) -> String {
    published_utc.replace('T', " ").replace("+00:00", " UTC")
}
