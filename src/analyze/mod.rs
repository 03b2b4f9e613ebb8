//! Directive analyzer
//!
//! Single-pass aggregate statistics over robots.txt content: counts by
//! directive type, per-user-agent breakdowns, sitemap URLs, and size
//! metrics. The analyzer is deliberately lenient: it never fails, and
//! lines it cannot interpret simply contribute nothing. Strict checking
//! lives in the [`crate::validate`] module.

use crate::parse::{tokenize, DirectiveKind, LineKind};
use serde::Serialize;
use std::collections::HashMap;

/// Conventional robots.txt size limit (500 KiB), per Google's documentation
pub const SIZE_LIMIT_BYTES: usize = 500 * 1024;

/// Directive counts by type across the whole file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TypeCounts {
    pub allow: u64,
    pub disallow: u64,
    pub crawl_delay: u64,
    pub noindex: u64,
    pub sitemap: u64,
    pub user_agent: u64,
    pub other: u64,
}

impl TypeCounts {
    /// Total directive lines counted, across all types
    pub fn total(&self) -> u64 {
        self.allow
            + self.disallow
            + self.crawl_delay
            + self.noindex
            + self.sitemap
            + self.user_agent
            + self.other
    }
}

/// Directive counts attributed to one declared user agent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AgentCounts {
    pub allow: u64,
    pub disallow: u64,
    pub crawl_delay: u64,
    pub noindex: u64,
    pub other: u64,
}

/// Aggregate statistics for one robots.txt file
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    /// Number of comment lines (first non-whitespace character is '#')
    pub comment_count: u64,

    /// Raw content size in bytes
    pub size_bytes: usize,

    /// Raw content size in KiB
    pub size_kib: f64,

    /// Whether the content exceeds [`SIZE_LIMIT_BYTES`]
    pub over_size_limit: bool,

    /// Directive counts by type
    pub by_type: TypeCounts,

    /// Directive counts per declared user agent (key case preserved as
    /// written in the file). A key exists iff a `User-agent:` line
    /// declared it.
    pub by_user_agent: HashMap<String, AgentCounts>,

    /// Non-empty `Sitemap:` values in file order
    pub sitemap_urls: Vec<String>,

    /// HTTP status supplied by the caller, 200 when analyzing local content
    pub http_status: u16,

    /// Whether the fetch was redirected; pass-through from the caller
    pub redirected: bool,

    /// True when the fetch path truncated the download at the size limit
    pub size_limit_exceeded: bool,

    /// True when the analyzed content is a truncated download
    pub partial_content: bool,
}

/// Caller-supplied metadata folded into the result unchanged
#[derive(Debug, Clone, Copy)]
pub struct AnalyzeOptions {
    /// HTTP status to report (default 200)
    pub status: u16,
    /// Whether the content was obtained via a redirect (default false)
    pub redirected: bool,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            status: 200,
            redirected: false,
        }
    }
}

/// Analyzes robots.txt content with default metadata (HTTP 200, no redirect)
///
/// Never fails: empty input yields all-zero counts, and malformed lines
/// (no colon) are silently skipped.
pub fn analyze(content: &str) -> AnalysisResult {
    analyze_with_options(content, AnalyzeOptions::default())
}

/// Analyzes robots.txt content, folding in caller-supplied fetch metadata
///
/// # Arguments
///
/// * `content` - The raw robots.txt content
/// * `options` - HTTP status and redirect flag to report unchanged
///
/// # Returns
///
/// Aggregate statistics for the content; this operation never fails
pub fn analyze_with_options(content: &str, options: AnalyzeOptions) -> AnalysisResult {
    let size_bytes = content.len();

    let mut comment_count = 0u64;
    let mut by_type = TypeCounts::default();
    let mut by_user_agent: HashMap<String, AgentCounts> = HashMap::new();
    let mut sitemap_urls: Vec<String> = Vec::new();

    // Directives between one User-agent line and the next are attributed
    // to that agent. An empty agent name is still a tracked key.
    let mut current_agent: Option<String> = None;

    for line in tokenize(content) {
        let (name, value) = match line.kind {
            LineKind::Blank => continue,
            LineKind::Comment => {
                comment_count += 1;
                continue;
            }
            // No colon: contributes nothing here. The validator reports it.
            LineKind::Malformed => continue,
            LineKind::Directive { name, value } => (name, value),
        };

        match DirectiveKind::from_name(&name) {
            DirectiveKind::UserAgent => {
                by_type.user_agent += 1;
                current_agent = Some(value.to_string());
                // Idempotent: a repeated agent keeps its existing counts
                by_user_agent.entry(value.to_string()).or_default();
            }
            DirectiveKind::Allow => {
                by_type.allow += 1;
                if let Some(agent) = &current_agent {
                    agent_bucket(&mut by_user_agent, agent).allow += 1;
                }
            }
            DirectiveKind::Disallow => {
                by_type.disallow += 1;
                if let Some(agent) = &current_agent {
                    agent_bucket(&mut by_user_agent, agent).disallow += 1;
                }
            }
            DirectiveKind::CrawlDelay => {
                by_type.crawl_delay += 1;
                if let Some(agent) = &current_agent {
                    agent_bucket(&mut by_user_agent, agent).crawl_delay += 1;
                }
            }
            DirectiveKind::Noindex => {
                by_type.noindex += 1;
                if let Some(agent) = &current_agent {
                    agent_bucket(&mut by_user_agent, agent).noindex += 1;
                }
            }
            DirectiveKind::Sitemap => {
                by_type.sitemap += 1;
                // Empty sitemap values are counted but not collected
                if !value.is_empty() {
                    sitemap_urls.push(value.to_string());
                }
            }
            DirectiveKind::Other => {
                by_type.other += 1;
                if let Some(agent) = &current_agent {
                    agent_bucket(&mut by_user_agent, agent).other += 1;
                }
            }
        }
    }

    AnalysisResult {
        comment_count,
        size_bytes,
        size_kib: size_bytes as f64 / 1024.0,
        over_size_limit: size_bytes > SIZE_LIMIT_BYTES,
        by_type,
        by_user_agent,
        sitemap_urls,
        http_status: options.status,
        redirected: options.redirected,
        size_limit_exceeded: false,
        partial_content: false,
    }
}

fn agent_bucket<'a>(
    map: &'a mut HashMap<String, AgentCounts>,
    agent: &str,
) -> &'a mut AgentCounts {
    map.entry(agent.to_string()).or_default()
}
