//! Line tokenizer shared by the analyzer and validator
//!
//! Splits raw robots.txt content into logical lines on any line-ending
//! convention, then classifies each line structurally. No semantic checks
//! happen here; callers decide what a malformed or unknown line means.

/// Structural classification of one logical line
#[derive(Debug, Clone, PartialEq)]
pub enum LineKind<'a> {
    /// Empty after trimming
    Blank,
    /// First non-whitespace character is '#'
    Comment,
    /// Non-blank, non-comment line with no ':' separator
    Malformed,
    /// A `Name: value` directive split at the first colon
    Directive {
        /// Directive name, trimmed and lowercased
        name: String,
        /// Directive value, trimmed
        value: &'a str,
    },
}

/// One logical line with its 1-based source position
#[derive(Debug, Clone, PartialEq)]
pub struct Line<'a> {
    /// 1-based line number in the source
    pub number: usize,
    /// The raw line as it appeared, without its line terminator
    pub raw: &'a str,
    /// Structural classification
    pub kind: LineKind<'a>,
}

/// Directive kinds tracked by the analyzer
///
/// `crawl-delay` and `crawldelay` map to the same kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveKind {
    Allow,
    Disallow,
    CrawlDelay,
    Noindex,
    Sitemap,
    UserAgent,
    Other,
}

impl DirectiveKind {
    /// Maps a lowercased directive name to its kind
    pub fn from_name(name: &str) -> Self {
        match name {
            "allow" => Self::Allow,
            "disallow" => Self::Disallow,
            "crawl-delay" | "crawldelay" => Self::CrawlDelay,
            "noindex" => Self::Noindex,
            "sitemap" => Self::Sitemap,
            "user-agent" => Self::UserAgent,
            _ => Self::Other,
        }
    }
}

/// Splits content into logical lines, honoring `\r\n`, `\n`, and bare `\r`
///
/// A `\r\n` pair counts as a single separator, so line numbers stay correct
/// for files that mix conventions. A trailing separator does not produce a
/// final empty line.
///
/// # Arguments
///
/// * `content` - The raw robots.txt content
///
/// # Returns
///
/// The logical lines in source order, without their terminators
pub fn split_lines(content: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let bytes = content.as_bytes();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&content[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&content[start..i]);
                i += 1;
                // \r\n is one separator, not two
                if i < bytes.len() && bytes[i] == b'\n' {
                    i += 1;
                }
                start = i;
            }
            _ => i += 1,
        }
    }

    if start < bytes.len() {
        lines.push(&content[start..]);
    }

    lines
}

/// Tokenizes content into classified lines with 1-based numbers
pub fn tokenize(content: &str) -> Vec<Line<'_>> {
    split_lines(content)
        .into_iter()
        .enumerate()
        .map(|(idx, raw)| Line {
            number: idx + 1,
            raw,
            kind: classify(raw),
        })
        .collect()
}

/// Classifies a single raw line structurally
fn classify(raw: &str) -> LineKind<'_> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return LineKind::Blank;
    }

    if trimmed.starts_with('#') {
        return LineKind::Comment;
    }

    match trimmed.split_once(':') {
        Some((name, value)) => LineKind::Directive {
            name: name.trim().to_lowercase(),
            value: value.trim(),
        },
        None => LineKind::Malformed,
    }
}
