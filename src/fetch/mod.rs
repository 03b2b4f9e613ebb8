//! Robots.txt fetcher
//!
//! Downloads robots.txt over HTTP with the behaviors the core analyzer
//! deliberately does not own: a request timeout, bounded redirect
//! following, and a streamed read that cuts the download off at the
//! conventional 500 KiB size limit. A truncated download is not a
//! failure; the partial body is returned flagged so analysis can still
//! run over it.

use crate::analyze::{analyze_with_options, AnalysisResult, AnalyzeOptions, SIZE_LIMIT_BYTES};
use crate::{RobotsError, Result};
use chrono::{DateTime, Utc};
use reqwest::{redirect::Policy, Client};
use std::time::Duration;
use url::Url;

/// Maximum redirect hops before giving up
const MAX_REDIRECTS: usize = 5;

/// Initial body buffer capacity, matching the streaming read granularity
const CHUNK_SIZE: usize = 8192;

/// A downloaded robots.txt body with its transport metadata
#[derive(Debug, Clone)]
pub struct FetchedRobots {
    /// Final URL after any redirects
    pub final_url: String,

    /// Body text, possibly truncated at [`SIZE_LIMIT_BYTES`]
    pub body: String,

    /// HTTP status code of the final response
    pub status: u16,

    /// Whether any redirect was followed
    pub redirected: bool,

    /// True when the download was cut off at the size limit
    pub size_limit_exceeded: bool,

    /// True when `body` is a truncated download
    pub partial_content: bool,

    /// When the fetch completed
    pub fetched_at: DateTime<Utc>,
}

/// Builds an HTTP client configured for robots.txt fetching
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client() -> std::result::Result<Client, reqwest::Error> {
    let user_agent = format!("robotscan/{}", env!("CARGO_PKG_VERSION"));

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .redirect(Policy::limited(MAX_REDIRECTS))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a robots.txt file, streaming the body with a size-limit cutoff
///
/// Non-success HTTP statuses are not errors here: the status is reported
/// in the result so the caller can pass it through to analysis. Only
/// transport-level problems fail.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - Absolute http(s) URL of the robots.txt file
///
/// # Returns
///
/// * `Ok(FetchedRobots)` - The body (possibly truncated) and metadata
/// * `Err(RobotsError::InvalidInput)` - The URL is unusable; no request was sent
/// * `Err(RobotsError::Timeout)` - The request timed out
/// * `Err(RobotsError::FetchFailed)` - Transport failure
pub async fn fetch_robots(client: &Client, url: &str) -> Result<FetchedRobots> {
    let requested = Url::parse(url).map_err(|e| RobotsError::InvalidInput {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    if requested.scheme() != "http" && requested.scheme() != "https" {
        return Err(RobotsError::InvalidInput {
            url: url.to_string(),
            reason: format!("unsupported scheme '{}'", requested.scheme()),
        });
    }

    tracing::debug!("Fetching robots.txt from {}", requested);

    let mut response = client
        .get(requested.clone())
        .send()
        .await
        .map_err(|e| classify_error(url, e))?;

    let status = response.status().as_u16();
    let final_url = response.url().to_string();
    let redirected = response.url() != &requested;

    // Stream the body, stopping once the cumulative size passes the limit
    let mut bytes: Vec<u8> = Vec::with_capacity(CHUNK_SIZE);
    let mut size_limit_exceeded = false;

    loop {
        match response.chunk().await {
            Ok(Some(chunk)) => {
                bytes.extend_from_slice(&chunk);
                if bytes.len() > SIZE_LIMIT_BYTES {
                    bytes.truncate(SIZE_LIMIT_BYTES);
                    size_limit_exceeded = true;
                    tracing::warn!(
                        "robots.txt at {} exceeds {} bytes, truncating",
                        final_url,
                        SIZE_LIMIT_BYTES
                    );
                    break;
                }
            }
            Ok(None) => break,
            Err(e) => return Err(classify_error(url, e)),
        }
    }

    let body = String::from_utf8_lossy(&bytes).into_owned();

    Ok(FetchedRobots {
        final_url,
        body,
        status,
        redirected,
        size_limit_exceeded,
        partial_content: size_limit_exceeded,
        fetched_at: Utc::now(),
    })
}

/// Analyzes a fetched robots.txt, folding its transport metadata into the result
pub fn analyze_fetched(fetched: &FetchedRobots) -> AnalysisResult {
    let options = AnalyzeOptions {
        status: fetched.status,
        redirected: fetched.redirected,
    };

    let mut result = analyze_with_options(&fetched.body, options);
    result.size_limit_exceeded = fetched.size_limit_exceeded;
    result.partial_content = fetched.partial_content;
    result
}

fn classify_error(url: &str, e: reqwest::Error) -> RobotsError {
    if e.is_timeout() {
        RobotsError::Timeout {
            url: url.to_string(),
        }
    } else {
        RobotsError::FetchFailed {
            url: url.to_string(),
            status: e.status().map(|s| s.as_u16()),
            source: e,
        }
    }
}
