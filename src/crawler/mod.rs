//! Crawler module for URL discovery
//!
//! This module contains the discovery logic, including:
//! - HTTP fetching and Content-Type probing
//! - HTML parsing and link extraction
//! - Resolution-base heuristics for pages without `<base>`
//! - Depth-bounded crawling and sitemap loading

mod base;
mod coordinator;
mod fetcher;
mod links;
mod mime;
mod parser;
mod sitemap;

pub use base::{already_directory, by_extension, BaseResolver};
pub use coordinator::Crawler;
pub use fetcher::{build_http_client, fetch_page, probe_content_type, MAX_REDIRECTS};
pub use links::collect_site_links;
pub use mime::{classify_mime, content_type_essence, ResourceKind};
pub use parser::{parse_html, ParsedPage};
pub use sitemap::parse_sitemap;
