use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_MAX_DEPTH: u32 = 3;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = "GitHub-Action-Link-Checker/1.0";
pub const DEFAULT_MAX_CONCURRENT: usize = 10;

/// Main configuration structure for the link validator
///
/// Every key is optional in the TOML file; missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// Sitemap to read URLs from; takes precedence over `base_url`
    pub sitemap_url: Option<String>,

    /// Seed URL for crawling when no sitemap is given
    pub base_url: Option<String>,

    /// Maximum link distance from the seed when crawling
    pub max_depth: u32,

    /// Per-request timeout in seconds
    pub timeout: u64,

    /// User-Agent header sent with every request
    pub user_agent: String,

    /// Regular expressions; matching URLs are neither crawled nor checked
    pub exclude_patterns: Vec<String>,

    /// Exit non-zero when broken links are found
    pub fail_on_error: bool,

    /// Maximum number of in-flight link checks, also the per-second rate
    pub max_concurrent: usize,

    /// Enables debug logging
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sitemap_url: None,
            base_url: None,
            max_depth: DEFAULT_MAX_DEPTH,
            timeout: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            exclude_patterns: Vec::new(),
            fail_on_error: true,
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            verbose: false,
        }
    }
}

/// Where the URLs to check come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscoverySource {
    Sitemap(String),
    Crawl(String),
}

impl Config {
    /// The per-request timeout as a `Duration`
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// Picks the discovery source, preferring the sitemap
    ///
    /// Blank values count as unset.
    pub fn discovery_source(&self) -> Option<DiscoverySource> {
        let non_blank = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        non_blank(&self.sitemap_url)
            .map(DiscoverySource::Sitemap)
            .or_else(|| non_blank(&self.base_url).map(DiscoverySource::Crawl))
    }

    /// Applies command-line and environment overrides on top of this config
    pub fn apply(&mut self, overrides: ConfigOverrides) {
        if let Some(sitemap_url) = overrides.sitemap_url.filter(|v| !v.trim().is_empty()) {
            self.sitemap_url = Some(sitemap_url);
        }
        if let Some(base_url) = overrides.base_url.filter(|v| !v.trim().is_empty()) {
            self.base_url = Some(base_url);
        }
        if let Some(max_depth) = overrides.max_depth {
            self.max_depth = max_depth;
        }
        if let Some(timeout) = overrides.timeout {
            self.timeout = timeout;
        }
        if let Some(user_agent) = overrides.user_agent {
            self.user_agent = user_agent;
        }
        if let Some(patterns) = overrides.exclude_patterns {
            self.exclude_patterns = patterns
                .into_iter()
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty())
                .collect();
        }
        if let Some(fail_on_error) = overrides.fail_on_error {
            self.fail_on_error = fail_on_error;
        }
        if let Some(max_concurrent) = overrides.max_concurrent {
            self.max_concurrent = max_concurrent;
        }
        if let Some(verbose) = overrides.verbose {
            self.verbose = verbose;
        }
    }
}

/// Values that replace configuration file settings when present
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub sitemap_url: Option<String>,
    pub base_url: Option<String>,
    pub max_depth: Option<u32>,
    pub timeout: Option<u64>,
    pub user_agent: Option<String>,
    pub exclude_patterns: Option<Vec<String>>,
    pub fail_on_error: Option<bool>,
    pub max_concurrent: Option<usize>,
    pub verbose: Option<bool>,
}
