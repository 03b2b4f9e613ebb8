//! Human-readable report output
//!
//! Formats analysis and validation results for the terminal.

use crate::analyze::AnalysisResult;
use crate::validate::ValidationResult;

/// Prints an analysis result to stdout in a formatted manner
pub fn print_analysis(result: &AnalysisResult) {
    println!("=== Robots.txt Analysis ===\n");

    println!("File:");
    println!("  Size: {} bytes ({:.1} KiB)", result.size_bytes, result.size_kib);
    if result.over_size_limit {
        println!("  ! Exceeds the 500 KiB size limit");
    }
    if result.partial_content {
        println!("  ! Download was truncated at the size limit");
    }
    println!("  HTTP status: {}", result.http_status);
    if result.redirected {
        println!("  Fetched via redirect");
    }
    println!("  Comments: {}", result.comment_count);
    println!();

    println!("Directives ({} total):", result.by_type.total());
    println!("  User-agent: {}", result.by_type.user_agent);
    println!("  Allow: {}", result.by_type.allow);
    println!("  Disallow: {}", result.by_type.disallow);
    println!("  Crawl-delay: {}", result.by_type.crawl_delay);
    println!("  Noindex: {}", result.by_type.noindex);
    println!("  Sitemap: {}", result.by_type.sitemap);
    println!("  Other: {}", result.by_type.other);
    println!();

    if !result.by_user_agent.is_empty() {
        println!("User Agents ({}):", result.by_user_agent.len());

        // Sort agents by name for stable output
        let mut agents: Vec<_> = result.by_user_agent.iter().collect();
        agents.sort_by(|a, b| a.0.cmp(b.0));

        for (agent, counts) in agents {
            let label = if agent.is_empty() { "(empty)" } else { agent };
            println!(
                "  {}: allow={} disallow={} crawl-delay={} noindex={} other={}",
                label, counts.allow, counts.disallow, counts.crawl_delay, counts.noindex, counts.other
            );
        }
        println!();
    }

    if !result.sitemap_urls.is_empty() {
        println!("Sitemaps ({}):", result.sitemap_urls.len());
        for url in &result.sitemap_urls {
            println!("  - {}", url);
        }
        println!();
    }
}

/// Prints a validation result to stdout in a formatted manner
pub fn print_validation(result: &ValidationResult) {
    println!("=== Robots.txt Validation ===\n");

    if !result.errors.is_empty() {
        println!("Errors ({}):", result.errors.len());
        for error in &result.errors {
            println!("  ✗ {}", error);
        }
        println!();
    }

    if !result.warnings.is_empty() {
        println!("Warnings ({}):", result.warnings.len());
        for warning in &result.warnings {
            println!("  ! {}", warning);
        }
        println!();
    }

    if result.is_valid {
        println!("✓ Valid robots.txt");
        if !result.warnings.is_empty() {
            println!("  ({} warnings, which do not affect validity)", result.warnings.len());
        }
    } else {
        println!("✗ Invalid robots.txt ({} errors)", result.errors.len());
    }
}
