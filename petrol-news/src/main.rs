use anyhow::Context;
use clap::Parser;
use petrol_news::{FetchConfig, Pipeline, RunConfig};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Build the Petrol.lk news page and JSON feed from the configured RSS/Atom feeds
#[derive(Debug, Parser)]
#[command(name = "petrol-news", version, about)]
struct Args {
    /// JSON feed list: [{"url": ..., "name": ..., "category": ...}]
    #[arg(long, env = "PETROL_FEEDS", default_value = "feeds.json")]
    feeds: PathBuf,

    /// Directory receiving index.html and news.json
    #[arg(long, env = "PETROL_OUTPUT_DIR", default_value = "public")]
    out: PathBuf,

    /// Per-request timeout when fetching a feed
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// Extra attempts for a feed that fails to download
    #[arg(long, default_value_t = 1)]
    max_retries: u32,

    #[arg(long, default_value = "Petrol-News/1.0")]
    user_agent: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let fetch_config = FetchConfig {
        user_agent: args.user_agent,
        timeout_seconds: args.timeout_secs,
        max_retries: args.max_retries,
        ..FetchConfig::default()
    };
    let config = RunConfig::new(&args.feeds, &args.out).with_fetch_config(fetch_config);

    let pipeline = Pipeline::with_http_source(config).context("building HTTP client")?;
    let report = pipeline
        .run()
        .await
        .with_context(|| format!("generating site from {}", args.feeds.display()))?;

    info!(
        "Done: {}/{} feeds ok, {} entries seen, {} rejected, {} duplicates, {} items collected, {} published",
        report.feeds_configured - report.feeds_failed,
        report.feeds_configured,
        report.entries_seen,
        report.entries_rejected,
        report.duplicates,
        report.items_collected,
        report.items_published
    );
    info!("HTML: {}", report.html_path.display());
    info!("JSON: {}", report.json_path.display());

    Ok(())
}
