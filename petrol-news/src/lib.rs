pub mod types;
pub mod config;
pub mod traits;
pub mod fetcher;
pub mod parser;
pub mod sources;
pub mod dates;
pub mod normalize;
pub mod rss_utils;
pub mod collector;
pub mod ranking;
pub mod grouping;
pub mod render;
pub mod output;
pub mod pipeline;

pub use types::*;
pub use config::{load_feeds, RunConfig, SiteInfo};
pub use traits::FeedSource;
pub use fetcher::Fetcher;
pub use parser::FeedParser;
pub use sources::HttpFeedSource;
pub use collector::{CollectStats, Collection, Collector};
pub use grouping::{group_items, Category, CategoryGroups, FIXED_CATEGORIES};
pub use pipeline::{Pipeline, RunReport};
