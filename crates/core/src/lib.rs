pub mod catalog;
pub mod config;
pub mod episodes;
pub mod metrics;
pub mod search;
pub mod show;
pub mod source;
pub mod testing;
pub mod thumbnail;

pub use catalog::{CatalogEntry, CatalogSnapshot, CatalogStore};
pub use config::{
    load_config, load_config_from_env, load_config_from_str, validate_config, Config,
    ConfigError, SearchConfig, ServerConfig, SourceConfig, ThumbnailConfig,
};
pub use episodes::{aggregate, parse_number, Episode, ShowDetail};
pub use search::{rank, DEFAULT_LIMIT};
pub use show::ShowDetailService;
pub use source::{AniworldSource, ShowPage, ShowSource, SourceError};
pub use thumbnail::{ThumbnailCache, ThumbnailError};
