//! Resolution-base computation for pages without a `<base>` tag
//!
//! Relative links on `/docs/guide` resolve differently depending on whether
//! `guide` is a file (links land in `/docs/`) or a directory (links land in
//! `/docs/guide/`). The resolver decides with a chain of strategies, cheapest
//! first, and falls back to directory treatment.

use crate::crawler::fetcher::probe_content_type;
use crate::crawler::mime::{classify_mime, ResourceKind};
use crate::url::{as_directory, extension, last_segment, parent_directory};
use reqwest::Client;
use url::Url;

/// Extensions recognized as files without a network probe
const RECOGNIZED_EXTENSIONS: &[&str] = &[
    "html", "htm", "php", "asp", "aspx", "jsp", "js", "css", "xml", "json", "txt", "pdf", "doc",
    "docx", "jpg", "jpeg", "png", "gif", "svg", "ico", "zip", "tar", "gz", "mp3", "mp4", "woff",
    "woff2", "ttf", "otf", "eot",
];

/// Computes the base URL that relative links on a page resolve against
#[derive(Debug, Clone)]
pub struct BaseResolver {
    client: Client,
}

impl BaseResolver {
    /// Creates a resolver that probes with the given client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Returns the resolution base for `url`
    ///
    /// # Strategy Chain
    ///
    /// 1. Path already ends in `/` → unchanged
    /// 2. Last segment has a recognized extension → parent directory
    /// 3. HEAD probe classifies the Content-Type → parent directory for
    ///    files, path plus `/` otherwise
    /// 4. Fallback → path plus `/`
    ///
    /// Query strings and fragments are preserved on every branch. Never fails:
    /// probe errors fall through to the default.
    pub async fn resolve(&self, url: &Url) -> Url {
        if let Some(base) = already_directory(url) {
            tracing::trace!("{} already names a directory", url);
            return base;
        }

        if let Some(base) = by_extension(url) {
            tracing::trace!("{} treated as a file by extension", url);
            return base;
        }

        if let Some(base) = self.by_content_type(url).await {
            return base;
        }

        tracing::trace!("{} defaulted to directory", url);
        as_directory(url)
    }

    /// Probes the URL and classifies its Content-Type
    ///
    /// Returns `None` when the probe fails for any reason.
    pub async fn by_content_type(&self, url: &Url) -> Option<Url> {
        match probe_content_type(&self.client, url).await {
            Ok(mime) => {
                let kind = classify_mime(&mime);
                tracing::trace!("{} probed as {} ({:?})", url, mime, kind);
                Some(base_for_kind(url, kind))
            }
            Err(e) => {
                tracing::trace!("Content-Type probe failed for {}: {}", url, e);
                None
            }
        }
    }
}

/// Returns the URL unchanged if its path already ends in `/`
pub fn already_directory(url: &Url) -> Option<Url> {
    url.path().ends_with('/').then(|| url.clone())
}

/// Returns the parent directory if the last segment has a recognized extension
pub fn by_extension(url: &Url) -> Option<Url> {
    let ext = extension(last_segment(url))?;
    RECOGNIZED_EXTENSIONS
        .contains(&ext.as_str())
        .then(|| parent_directory(url))
}

fn base_for_kind(url: &Url, kind: ResourceKind) -> Url {
    match kind {
        ResourceKind::File => parent_directory(url),
        ResourceKind::Directory => as_directory(url),
    }
}
