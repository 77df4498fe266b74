//! Link status checking
//!
//! Checks a list of URLs concurrently. At most `max-concurrent` requests are
//! in flight at once (semaphore admission) and requests start at no more than
//! `max-concurrent` per second (token-rate limiter). Results come back in input
//! order.

use crate::config::Config;
use crate::crawler::build_http_client;
use crate::output::status_glyph;
use crate::LinkError;
use futures::future::join_all;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use std::num::NonZeroU32;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;
use tokio::sync::Semaphore;

type Limiter = RateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// Outcome of checking one URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkResult {
    /// The URL as given
    pub url: String,

    /// Final HTTP status, or 0 when no response was received
    pub status_code: u16,

    /// Failure description for broken links
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Time taken, e.g. `"12.3ms"`
    pub duration: String,
}

impl LinkResult {
    /// True for error statuses and for links that produced no response
    pub fn is_broken(&self) -> bool {
        self.status_code >= 400 || self.status_code == 0
    }
}

/// Concurrent, rate-limited link checker
pub struct LinkChecker {
    client: Client,
    semaphore: Semaphore,
    limiter: Limiter,
}

impl LinkChecker {
    /// Creates a checker from configuration
    ///
    /// # Arguments
    ///
    /// * `config` - Supplies user agent, timeout and `max-concurrent`
    ///
    /// # Returns
    ///
    /// * `Ok(LinkChecker)` - Ready to check links
    /// * `Err(LinkError)` - The HTTP client could not be built
    pub fn new(config: &Config) -> Result<Self, LinkError> {
        let client = build_http_client(&config.user_agent, config.timeout_duration())?;
        Ok(Self::with_client(client, config.max_concurrent))
    }

    /// Creates a checker around an existing client
    pub fn with_client(client: Client, max_concurrent: usize) -> Self {
        let permits = max_concurrent.max(1);
        let rate = NonZeroU32::new(u32::try_from(permits).unwrap_or(u32::MAX))
            .unwrap_or(NonZeroU32::MIN);

        Self {
            client,
            semaphore: Semaphore::new(permits),
            limiter: RateLimiter::direct(Quota::per_second(rate).allow_burst(rate)),
        }
    }

    /// Checks every URL and returns one result per URL, in input order
    ///
    /// Never fails as a whole: each failure is recorded in its own result.
    pub async fn check_links(&self, urls: &[String]) -> Vec<LinkResult> {
        let total = urls.len();
        let completed = AtomicUsize::new(0);
        tracing::info!("Checking {} links", total);

        let checks = urls.iter().map(|url| {
            let completed = &completed;
            async move {
                let result = match self.semaphore.acquire().await {
                    Ok(_permit) => {
                        self.limiter.until_ready().await;
                        self.check_single_link(url).await
                    }
                    Err(e) => LinkResult {
                        url: url.clone(),
                        status_code: 0,
                        error: Some(format!("admission failed: {}", e)),
                        duration: format!("{:?}", std::time::Duration::ZERO),
                    },
                };

                let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
                tracing::debug!(
                    "[{}/{}] {} {} ({})",
                    done,
                    total,
                    status_glyph(result.status_code),
                    result.url,
                    result.duration
                );
                result
            }
        });

        // join_all yields results in the order of its input futures
        join_all(checks).await
    }

    /// Checks one URL with HEAD, falling back to GET on transport errors
    pub async fn check_single_link(&self, url: &str) -> LinkResult {
        let start = Instant::now();

        let response = match self.client.head(url).send().await {
            Ok(response) => Ok(response),
            Err(head_error) => {
                tracing::trace!("HEAD failed for {}, retrying with GET: {}", url, head_error);
                self.client.get(url).send().await
            }
        };

        let (status_code, error) = match response {
            Ok(response) => classify_response(&response),
            Err(e) => (0, Some(format!("request failed: {}", e))),
        };

        LinkResult {
            url: url.to_string(),
            status_code,
            error,
            duration: format!("{:?}", start.elapsed()),
        }
    }
}

fn classify_response(response: &Response) -> (u16, Option<String>) {
    let status = response.status();
    let error = (status.as_u16() >= 400).then(|| status_error(status));
    (status.as_u16(), error)
}

fn status_error(status: StatusCode) -> String {
    format!(
        "HTTP {} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown Status")
    )
}
