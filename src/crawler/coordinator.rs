//! Crawler coordinator - URL discovery orchestration
//!
//! This module contains the discovery entry points:
//! - Depth-bounded, depth-first crawling of a single site
//! - Per-page link extraction with base resolution
//! - Sitemap loading
//!
//! Exclude patterns are applied to every discovered URL except the seed.

use crate::config::Config;
use crate::crawler::base::BaseResolver;
use crate::crawler::fetcher::{build_http_client, fetch_page};
use crate::crawler::links::collect_site_links;
use crate::crawler::parser::parse_html;
use crate::crawler::sitemap::parse_sitemap;
use crate::url::ExcludePatterns;
use crate::LinkError;
use reqwest::Client;
use std::collections::HashSet;
use url::Url;

/// A URL waiting to be visited
#[derive(Debug, Clone, PartialEq, Eq)]
struct FrontierEntry {
    url: String,
    depth: u32,
}

/// Discovers URLs on a website by crawling or from its sitemap
#[derive(Debug, Clone)]
pub struct Crawler {
    client: Client,
    resolver: BaseResolver,
    excludes: ExcludePatterns,
}

impl Crawler {
    /// Creates a crawler from configuration
    ///
    /// # Arguments
    ///
    /// * `config` - The validated configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Crawler)` - Successfully created crawler
    /// * `Err(LinkError)` - Invalid exclude pattern or HTTP client failure
    pub fn new(config: &Config) -> Result<Self, LinkError> {
        let client = build_http_client(&config.user_agent, config.timeout_duration())?;
        let excludes = ExcludePatterns::compile(&config.exclude_patterns)?;
        Ok(Self::with_client(client, excludes))
    }

    /// Creates a crawler around an existing client
    pub fn with_client(client: Client, excludes: ExcludePatterns) -> Self {
        Self {
            resolver: BaseResolver::new(client.clone()),
            client,
            excludes,
        }
    }

    /// Crawls a site depth-first starting from `seed`
    ///
    /// # Traversal Rules
    ///
    /// - Each URL is visited at most once (exact string match)
    /// - URLs at `max_depth` are recorded but not expanded
    /// - Only links on the seed's host are followed
    /// - Excluded URLs are never recorded or expanded
    /// - A page that cannot be fetched or parsed ends its branch
    ///
    /// # Arguments
    ///
    /// * `seed` - The start URL
    /// * `max_depth` - Maximum link distance from the seed
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<String>)` - Discovered URLs, seed first, no duplicates
    /// * `Err(LinkError::UrlParse)` - The seed is not a valid URL
    pub async fn crawl_website(&self, seed: &str, max_depth: u32) -> Result<Vec<String>, LinkError> {
        let site_base = Url::parse(seed)?;
        tracing::info!("Crawling {} to depth {}", seed, max_depth);

        let mut visited: HashSet<String> = HashSet::new();
        let mut discovered = Vec::new();
        let mut frontier = vec![FrontierEntry {
            url: seed.to_string(),
            depth: 0,
        }];

        while let Some(entry) = frontier.pop() {
            if entry.depth > max_depth || visited.contains(&entry.url) {
                continue;
            }

            visited.insert(entry.url.clone());
            discovered.push(entry.url.clone());

            if entry.depth == max_depth {
                continue;
            }

            let current_url = match Url::parse(&entry.url) {
                Ok(url) => url,
                Err(e) => {
                    tracing::debug!("Skipping unparsable URL {}: {}", entry.url, e);
                    continue;
                }
            };

            let links = match self.extract_links(&entry.url, &current_url, &site_base).await {
                Ok(links) => links,
                Err(e) => {
                    tracing::debug!("Pruning branch at {}: {}", entry.url, e);
                    continue;
                }
            };

            tracing::debug!(
                "Found {} links on {} (depth {})",
                links.len(),
                entry.url,
                entry.depth
            );

            // Reverse push so children pop in document order
            for link in links.into_iter().rev() {
                if visited.contains(&link) || self.excludes.is_excluded(&link) {
                    continue;
                }
                frontier.push(FrontierEntry {
                    url: link,
                    depth: entry.depth + 1,
                });
            }
        }

        tracing::info!("Crawl discovered {} URLs", discovered.len());
        Ok(discovered)
    }

    /// Fetches a page and returns its same-host links
    ///
    /// The resolution base is the page's `<base href>` resolved against
    /// `current_url` when present, otherwise the result of [`BaseResolver`].
    ///
    /// # Arguments
    ///
    /// * `page_url` - The URL to fetch
    /// * `current_url` - The URL the page is considered to live at
    /// * `site_base` - Links must share this URL's host
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<String>)` - Absolute links in document order
    /// * `Err(LinkError)` - The page could not be fetched
    pub async fn extract_links(
        &self,
        page_url: &str,
        current_url: &Url,
        site_base: &Url,
    ) -> Result<Vec<String>, LinkError> {
        let body = fetch_page(&self.client, page_url).await?;
        let parsed = parse_html(&body);

        let declared_base = parsed
            .base_href
            .as_deref()
            .and_then(|href| match current_url.join(href) {
                Ok(base) => Some(base),
                Err(e) => {
                    tracing::warn!("Ignoring invalid <base href=\"{}\"> on {}: {}", href, page_url, e);
                    None
                }
            });

        let base = match declared_base {
            Some(base) => base,
            None => self.resolver.resolve(current_url).await,
        };

        tracing::trace!("Resolving links on {} against {}", page_url, base);
        Ok(collect_site_links(&parsed.hrefs, &base, site_base))
    }

    /// Loads the URL list of a sitemap
    ///
    /// # Arguments
    ///
    /// * `url` - The sitemap URL
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<String>)` - `urlset/url/loc` values minus excluded URLs
    /// * `Err(LinkError)` - Fetch failure, non-success status or bad XML
    pub async fn get_urls_from_sitemap(&self, url: &str) -> Result<Vec<String>, LinkError> {
        tracing::info!("Loading sitemap {}", url);
        let body = fetch_page(&self.client, url).await?;

        let locs = parse_sitemap(&body).map_err(|message| LinkError::Sitemap {
            url: url.to_string(),
            message,
        })?;

        let total = locs.len();
        let urls: Vec<String> = locs
            .into_iter()
            .filter(|loc| !self.excludes.is_excluded(loc))
            .collect();

        if urls.len() < total {
            tracing::info!("Excluded {} sitemap URLs", total - urls.len());
        }

        Ok(urls)
    }
}
