//! Per-page link resolution and same-host filtering

use crate::url::{is_same_host, resolve_url};
use url::Url;

/// Resolves raw hrefs against a page base and keeps same-host links
///
/// # Arguments
///
/// * `hrefs` - Raw anchor hrefs in document order
/// * `base` - The effective resolution base of the page
/// * `site_base` - The site whose host links must share
///
/// # Returns
///
/// Absolute URLs in document order, duplicates kept
pub fn collect_site_links(hrefs: &[String], base: &Url, site_base: &Url) -> Vec<String> {
    hrefs
        .iter()
        .filter_map(|href| resolve_url(href, base))
        .filter(|link| match Url::parse(link) {
            Ok(parsed) => is_same_host(&parsed, site_base),
            Err(_) => false,
        })
        .collect()
}
