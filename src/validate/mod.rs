//! Syntax and semantics validator
//!
//! Strict counterpart to the lenient analyzer: walks the same logical
//! lines but reports problems instead of skipping them. Errors are fatal
//! violations (missing colon, empty user-agent, bad crawl-delay, bad
//! sitemap URL); warnings are stylistic or ordering concerns and never
//! affect validity.

use crate::parse::{tokenize, LineKind};
use serde::Serialize;
use url::Url;

/// Directive names the validator recognizes
const KNOWN_DIRECTIVES: &[&str] = &[
    "user-agent",
    "allow",
    "disallow",
    "crawl-delay",
    "crawldelay",
    "sitemap",
    "noindex",
    "request-rate",
    "visit-time",
    "host",
];

/// Directives that apply to the current user-agent group
const AGENT_SCOPED_DIRECTIVES: &[&str] =
    &["allow", "disallow", "crawl-delay", "crawldelay", "noindex"];

/// Outcome of validating one robots.txt file
///
/// Messages are in file order and prefixed with their 1-based line number.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    /// True iff no errors were found; warnings do not affect this
    pub is_valid: bool,

    /// Stylistic and ordering concerns
    pub warnings: Vec<String>,

    /// Fatal syntax and semantic violations
    pub errors: Vec<String>,
}

/// Validates robots.txt content
///
/// # Arguments
///
/// * `content` - The raw robots.txt content
///
/// # Returns
///
/// Line-numbered warnings and errors; this operation never fails, and an
/// empty error list signals a valid file
pub fn validate(content: &str) -> ValidationResult {
    let mut warnings: Vec<String> = Vec::new();
    let mut errors: Vec<String> = Vec::new();

    // Set by every user-agent line, including ones with an empty value
    let mut current_agent: Option<String> = None;

    for line in tokenize(content) {
        let (name, value) = match line.kind {
            LineKind::Blank | LineKind::Comment => continue,
            LineKind::Malformed => {
                errors.push(format!(
                    "Line {}: Invalid syntax - missing colon: \"{}\"",
                    line.number, line.raw
                ));
                continue;
            }
            LineKind::Directive { name, value } => (name, value),
        };

        // The remaining checks are independent; a single line can produce
        // both a warning and an error.
        if !KNOWN_DIRECTIVES.contains(&name.as_str()) {
            warnings.push(format!(
                "Line {}: Unknown directive \"{}\"",
                line.number, name
            ));
        }

        if name == "user-agent" {
            current_agent = Some(value.to_string());
            if value.is_empty() {
                errors.push(format!("Line {}: User-agent cannot be empty", line.number));
            }
        }

        if AGENT_SCOPED_DIRECTIVES.contains(&name.as_str()) && current_agent.is_none() {
            warnings.push(format!(
                "Line {}: \"{}\" directive should come after a User-agent directive",
                line.number, name
            ));
        }

        if name == "crawl-delay" || name == "crawldelay" {
            let delay = value.parse::<f64>();
            if !matches!(delay, Ok(d) if d >= 0.0) {
                errors.push(format!(
                    "Line {}: Crawl-delay value must be a non-negative number",
                    line.number
                ));
            }
        }

        if name == "sitemap" && !is_absolute_url(value) {
            errors.push(format!(
                "Line {}: Invalid sitemap URL: \"{}\"",
                line.number, value
            ));
        }
    }

    ValidationResult {
        is_valid: errors.is_empty(),
        warnings,
        errors,
    }
}

/// Checks that a value is a structurally valid absolute URL with a host
fn is_absolute_url(value: &str) -> bool {
    match Url::parse(value) {
        Ok(url) => url.has_host(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_file() {
        let content = "# robots for example.com\nUser-agent: *\nDisallow: /admin\nAllow: /public\nSitemap: https://example.com/sitemap.xml\n";
        let result = validate(content);
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_missing_colon() {
        let result = validate("User-agent *\nDisallow /admin");
        assert_eq!(result.errors.len(), 2);
        assert!(result.errors[0].contains("missing colon"));
        assert!(result.errors[1].contains("missing colon"));
        assert!(result.errors[0].starts_with("Line 1:"));
        assert!(result.errors[1].starts_with("Line 2:"));
        assert!(!result.is_valid);
    }

    #[test]
    fn test_missing_colon_quotes_original_line() {
        let result = validate("Disallow /admin");
        assert_eq!(
            result.errors[0],
            "Line 1: Invalid syntax - missing colon: \"Disallow /admin\""
        );
    }

    #[test]
    fn test_empty_user_agent() {
        let result = validate("User-agent:\nDisallow: /admin");
        assert!(!result.is_valid);
        assert!(result.errors[0].contains("User-agent cannot be empty"));
        // The empty agent still opens a group, so the disallow gets no
        // placement warning
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_directive_before_user_agent_is_warning_only() {
        let result = validate("Disallow: /admin\nUser-agent: *");
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("should come after a User-agent"));
        assert!(result.is_valid);
    }

    #[test]
    fn test_unknown_directive() {
        let result = validate("User-agent: *\nClean-param: ref");
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0], "Line 2: Unknown directive \"clean-param\"");
        assert!(result.is_valid);
    }

    #[test]
    fn test_known_extension_directives_accepted() {
        let result = validate("User-agent: *\nRequest-rate: 1/5\nVisit-time: 0600-0845\nHost: example.com");
        assert!(result.warnings.is_empty());
        assert!(result.is_valid);
    }

    #[test]
    fn test_crawl_delay_not_a_number() {
        let result = validate("User-agent: *\nCrawl-delay: fast");
        assert!(!result.is_valid);
        assert!(result.errors[0].contains("non-negative number"));
    }

    #[test]
    fn test_crawl_delay_negative() {
        let result = validate("User-agent: *\nCrawl-delay: -1");
        assert!(!result.is_valid);
        assert!(result.errors[0].contains("non-negative number"));
    }

    #[test]
    fn test_crawl_delay_decimal_ok() {
        let result = validate("User-agent: *\nCrawl-delay: 2.5");
        assert!(result.is_valid);
    }

    #[test]
    fn test_crawldelay_alias_checked_too() {
        let result = validate("User-agent: *\nCrawldelay: nope");
        assert!(!result.is_valid);
        assert!(result.errors[0].contains("non-negative number"));
    }

    #[test]
    fn test_invalid_sitemap_url() {
        let result = validate("Sitemap: not-a-url");
        assert!(!result.is_valid);
        assert_eq!(
            result.errors[0],
            "Line 1: Invalid sitemap URL: \"not-a-url\""
        );
    }

    #[test]
    fn test_sitemap_url_without_host() {
        let result = validate("Sitemap: file:something");
        assert!(!result.is_valid);
        assert!(result.errors[0].contains("Invalid sitemap URL"));
    }

    #[test]
    fn test_multiple_checks_on_one_line() {
        // Unknown directive that also fails no other check: one warning
        let result = validate("Unknown-thing: whatever");
        assert_eq!(result.warnings.len(), 1);
        assert!(result.is_valid);
    }

    #[test]
    fn test_blank_and_comment_lines_skipped() {
        let result = validate("\n# just a comment\n\n");
        assert!(result.is_valid);
        assert!(result.warnings.is_empty());
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_line_numbers_across_mixed_endings() {
        let result = validate("User-agent: *\r\nDisallow /a\rSitemap: bad");
        assert_eq!(result.errors.len(), 2);
        assert!(result.errors[0].starts_with("Line 2:"));
        assert!(result.errors[1].starts_with("Line 3:"));
    }

    #[test]
    fn test_idempotent() {
        let content = "User-agent: *\nCrawl-delay: nope\nSitemap: bad";
        let first = validate(content);
        let second = validate(content);
        assert_eq!(first.errors, second.errors);
        assert_eq!(first.warnings, second.warnings);
        assert_eq!(first.is_valid, second.is_valid);
    }
}
