use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Source base URL is an http(s) URL
/// - Fetch timeout and season concurrency are positive
/// - Search limits are positive and consistent
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    // Server validation
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    // Source validation
    let base_url = &config.source.base_url;
    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        return Err(ConfigError::ValidationError(format!(
            "source.base_url must start with http:// or https://, got '{}'",
            base_url
        )));
    }
    if config.source.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "source.timeout_secs cannot be 0".to_string(),
        ));
    }
    if config.source.season_fetch_concurrency == 0 {
        return Err(ConfigError::ValidationError(
            "source.season_fetch_concurrency cannot be 0".to_string(),
        ));
    }

    // Search validation
    if config.search.default_limit == 0 {
        return Err(ConfigError::ValidationError(
            "search.default_limit cannot be 0".to_string(),
        ));
    }
    if config.search.default_limit > config.search.max_limit {
        return Err(ConfigError::ValidationError(format!(
            "search.default_limit ({}) exceeds search.max_limit ({})",
            config.search.default_limit, config.search.max_limit
        )));
    }

    Ok(())
}
