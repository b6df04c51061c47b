use crate::collector::{CollectStats, Collector};
use crate::config::{load_feeds, RunConfig};
use crate::output::write_outputs;
use crate::ranking::rank_and_truncate;
use crate::render::{render_json, HtmlRenderer};
use crate::sources::HttpFeedSource;
use crate::traits::FeedSource;
use crate::types::{FeedConfig, Item, Result};
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use tracing::info;

/// The ranked, capped pool of one run plus collection counters
#[derive(Debug, Clone)]
pub struct ItemPool {
    pub items: Vec<Item>,
    pub stats: CollectStats,
    pub items_collected: usize,
}

/// Both rendered artifacts, not yet written
#[derive(Debug, Clone)]
pub struct RenderedOutput {
    pub html: String,
    pub json: String,
}

/// Summary of a finished run
#[derive(Debug, Clone)]
pub struct RunReport {
    pub feeds_configured: usize,
    pub feeds_failed: usize,
    pub entries_seen: usize,
    pub entries_rejected: usize,
    pub duplicates: usize,
    pub items_collected: usize,
    pub items_published: usize,
    pub html_path: PathBuf,
    pub json_path: PathBuf,
}

/// Single-pass batch: load feeds -> collect -> rank -> render -> write
pub struct Pipeline {
    config: RunConfig,
    source: Box<dyn FeedSource>,
}

impl Pipeline {
    pub fn new(config: RunConfig, source: Box<dyn FeedSource>) -> Self {
        Self { config, source }
    }

    /// Pipeline backed by real HTTP fetching
    pub fn with_http_source(config: RunConfig) -> Result<Self> {
        let source = HttpFeedSource::new(config.fetch.clone())?;
        Ok(Self::new(config, Box::new(source)))
    }

    /// Collect every feed, then rank and cap the pool
    pub async fn build_pool(&self, feeds: &[FeedConfig]) -> ItemPool {
        let collection = Collector::new(self.source.as_ref(), self.config.limits)
            .collect(feeds)
            .await;

        let items_collected = collection.items.len();
        let items = rank_and_truncate(collection.items, self.config.limits.pool_size);

        info!("Ranked {} collected items, keeping {}", items_collected, items.len());

        ItemPool {
            items,
            stats: collection.stats,
            items_collected,
        }
    }

    pub fn render(&self, items: &[Item], generated_at: DateTime<Utc>) -> Result<RenderedOutput> {
        let html = HtmlRenderer::new(&self.config.site, self.config.limits.section_size)
            .render(items, generated_at);
        let json = render_json(items)?;
        Ok(RenderedOutput { html, json })
    }

    /// Run once. Only a bad feed list or a failed write is an error.
    pub async fn run(&self) -> Result<RunReport> {
        info!("Starting run with feed list {}", self.config.feeds_path.display());

        let feeds = load_feeds(&self.config.feeds_path)?;
        let pool = self.build_pool(&feeds).await;

        let rendered = self.render(&pool.items, Utc::now())?;
        let paths = write_outputs(&self.config.output_dir, &rendered.html, &rendered.json)?;

        Ok(RunReport {
            feeds_configured: pool.stats.feeds_configured,
            feeds_failed: pool.stats.feeds_failed,
            entries_seen: pool.stats.entries_seen,
            entries_rejected: pool.stats.entries_rejected,
            duplicates: pool.stats.duplicates,
            items_collected: pool.items_collected,
            items_published: pool.items.len(),
            html_path: paths.html_path,
            json_path: paths.json_path,
        })
    }
}
