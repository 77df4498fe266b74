//! Link Validator: broken-link discovery and checking
//!
//! This crate discovers the URLs of a website, either from its XML sitemap or by
//! crawling same-origin links, and checks every discovered URL for broken
//! status codes with bounded concurrency and rate limiting.

pub mod checker;
pub mod config;
pub mod crawler;
pub mod output;
pub mod url;

use thiserror::Error;

/// Main error type for link validator operations
#[derive(Debug, Error)]
pub enum LinkError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("No Content-Type header in response from {url}")]
    MissingContentType { url: String },

    #[error("Invalid sitemap at {url}: {message}")]
    Sitemap { url: String, message: String },

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid exclude pattern: {0}")]
    InvalidPattern(String),
}

/// Result type alias for link validator operations
pub type Result<T> = std::result::Result<T, LinkError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use checker::{LinkChecker, LinkResult};
pub use config::Config;
pub use crawler::{classify_mime, BaseResolver, Crawler, ResourceKind};
pub use crate::url::{resolve_url, ExcludePatterns};
