//! Robotscan: a robots.txt analyzer and linter
//!
//! This crate parses robots.txt content to produce aggregate directive
//! statistics, and validates it against the robots exclusion conventions,
//! reporting line-numbered warnings and errors.

pub mod analyze;
pub mod fetch;
pub mod parse;
pub mod report;
pub mod validate;

use thiserror::Error;

/// Main error type for robotscan operations
///
/// The core `analyze` and `validate` functions never fail; these errors
/// only arise in the I/O layers around them (fetching, file reading).
#[derive(Debug, Error)]
pub enum RobotsError {
    #[error("Invalid robots.txt URL '{url}': {reason}")]
    InvalidInput { url: String, reason: String },

    #[error("Failed to fetch {url}: {source}")]
    FetchFailed {
        url: String,
        /// HTTP status, when one was received before the failure
        status: Option<u16>,
        source: reqwest::Error,
    },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for robotscan operations
pub type Result<T> = std::result::Result<T, RobotsError>;

// Re-export commonly used types
pub use analyze::{analyze, analyze_with_options, AnalysisResult, AnalyzeOptions};
pub use fetch::{analyze_fetched, fetch_robots, FetchedRobots};
pub use validate::{validate, ValidationResult};
