use crate::config::types::Config;
use crate::url::ExcludePatterns;
use crate::ConfigError;
use url::Url;

pub const MAX_CONCURRENT_LIMIT: usize = 1000;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_discovery(config)?;
    validate_limits(config)?;
    validate_user_agent(&config.user_agent)?;
    ExcludePatterns::compile(&config.exclude_patterns)?;
    Ok(())
}

/// Validates the sitemap and base URLs
fn validate_discovery(config: &Config) -> Result<(), ConfigError> {
    let sitemap = non_blank(&config.sitemap_url);
    let base = non_blank(&config.base_url);

    match (sitemap, base) {
        (None, None) => {
            return Err(ConfigError::Validation(
                "either sitemap-url or base-url must be provided".to_string(),
            ))
        }
        (Some(_), Some(_)) => {
            tracing::warn!("Both sitemap-url and base-url are set; using the sitemap");
        }
        _ => {}
    }

    if let Some(sitemap) = sitemap {
        validate_http_url("sitemap-url", sitemap)?;
    }
    if let Some(base) = base {
        validate_http_url("base-url", base)?;
    }

    Ok(())
}

/// Validates timeout and concurrency bounds
fn validate_limits(config: &Config) -> Result<(), ConfigError> {
    if config.timeout < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout must be >= 1 second, got {}",
            config.timeout
        )));
    }

    if config.max_concurrent < 1 || config.max_concurrent > MAX_CONCURRENT_LIMIT {
        return Err(ConfigError::Validation(format!(
            "max-concurrent must be between 1 and {}, got {}",
            MAX_CONCURRENT_LIMIT, config.max_concurrent
        )));
    }

    Ok(())
}

fn validate_user_agent(user_agent: &str) -> Result<(), ConfigError> {
    if user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_http_url(field: &str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid {} '{}': {}", field, value, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "{} '{}' must use http or https",
            field, value
        )));
    }

    if url.host_str().is_none() {
        return Err(ConfigError::InvalidUrl(format!(
            "{} '{}' has no host",
            field, value
        )));
    }

    Ok(())
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
