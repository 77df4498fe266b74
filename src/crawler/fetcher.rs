//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests made during discovery, including:
//! - Building HTTP clients with the configured user agent and timeout
//! - GET requests to fetch page and sitemap content
//! - HEAD requests to probe Content-Type during base resolution

use crate::crawler::mime::content_type_essence;
use crate::LinkError;
use reqwest::header::CONTENT_TYPE;
use reqwest::{redirect::Policy, Client};
use std::time::Duration;
use url::Url;

/// Maximum number of redirect hops followed by any request
pub const MAX_REDIRECTS: usize = 10;

/// Builds an HTTP client with proper configuration
///
/// Every request made through the client carries `user_agent` and is bounded
/// by `timeout`. Redirects are followed up to [`MAX_REDIRECTS`] hops.
///
/// # Arguments
///
/// * `user_agent` - The User-Agent header value
/// * `timeout` - Per-request timeout
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use link_validator::crawler::build_http_client;
/// use std::time::Duration;
///
/// let client = build_http_client("GitHub-Action-Link-Checker/1.0", Duration::from_secs(30)).unwrap();
/// ```
pub fn build_http_client(user_agent: &str, timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .connect_timeout(timeout.min(Duration::from_secs(10)))
        .redirect(Policy::limited(MAX_REDIRECTS))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and returns its body as text
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
///
/// # Returns
///
/// * `Ok(String)` - The response body
/// * `Err(LinkError::Http)` - Transport failure
/// * `Err(LinkError::Status)` - The final response was not 2xx
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, LinkError> {
    let response = client.get(url).send().await.map_err(|source| LinkError::Http {
        url: url.to_string(),
        source,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(LinkError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|source| LinkError::Http {
        url: url.to_string(),
        source,
    })
}

/// Sends a HEAD request and returns the normalized Content-Type
///
/// Redirects are followed; the Content-Type of the final response is used.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to probe
///
/// # Returns
///
/// * `Ok(String)` - Lowercased MIME type without parameters
/// * `Err(LinkError::Http)` - Transport failure
/// * `Err(LinkError::Status)` - Final status was 400 or above
/// * `Err(LinkError::MissingContentType)` - No usable Content-Type header
pub async fn probe_content_type(client: &Client, url: &Url) -> Result<String, LinkError> {
    let response = client
        .head(url.as_str())
        .send()
        .await
        .map_err(|source| LinkError::Http {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if status.is_client_error() || status.is_server_error() {
        return Err(LinkError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let essence = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(content_type_essence)
        .unwrap_or_default();

    if essence.is_empty() {
        return Err(LinkError::MissingContentType {
            url: url.to_string(),
        });
    }

    Ok(essence)
}
