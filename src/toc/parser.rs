use glob::Pattern;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::toc::slug::slugify;

lazy_static! {
    /// An ATX heading: 1-6 `#` at column 0, at least one whitespace
    /// character, then the heading text. Matched per line.
    static ref HEADING_REGEX: Regex = Regex::new(r"^(#{1,6})\s+(.+)$").unwrap();

    /// A top-level heading line, used for title extraction and for the
    /// fallback insertion position.
    pub(crate) static ref H1_REGEX: Regex = Regex::new(r"^#\s+(.+)$").unwrap();
}

/// A single recognized heading line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading level, 1-6 (count of leading `#`)
    pub level: usize,
    /// Display text, trimmed of surrounding whitespace
    pub text: String,
    /// Derived anchor slug (not deduplicated against collisions)
    pub anchor: String,
    /// 1-based source line index, informational only
    pub line_number: usize,
}

/// Extract headings from markdown content in document order.
///
/// This is a pure line-oriented scan: there is no code-fence awareness, so a
/// `# line` inside a fenced block is still recognized. With `max_depth > 0`,
/// headings deeper than `max_depth` are dropped entirely. Headings whose text
/// matches any exclude pattern are dropped as well.
pub fn extract_headings(markdown: &str, max_depth: usize, exclude: &[Pattern]) -> Vec<Heading> {
    let mut headings = Vec::new();

    for (idx, line) in markdown.lines().enumerate() {
        let cap = match HEADING_REGEX.captures(line) {
            Some(cap) => cap,
            None => continue,
        };

        let level = cap[1].len();
        let text = cap[2].trim();

        // A marker with nothing but whitespace after it is not a heading
        if text.is_empty() {
            continue;
        }

        if max_depth > 0 && level > max_depth {
            continue;
        }

        if exclude.iter().any(|p| p.matches(text)) {
            continue;
        }

        headings.push(Heading {
            level,
            text: text.to_string(),
            anchor: slugify(text),
            line_number: idx + 1,
        });
    }

    headings
}

/// Extract the first top-level heading's text from markdown content
pub fn extract_title(markdown: &str) -> Option<String> {
    for line in markdown.lines() {
        if let Some(cap) = H1_REGEX.captures(line) {
            let text = cap[1].trim();
            if !text.is_empty() {
                return Some(text.to_string());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_headings() {
        let markdown = "# Top Heading\n\nText here.\n\n## Sub Heading\n\nMore text.";
        let headings = extract_headings(markdown, 0, &[]);

        assert_eq!(headings.len(), 2);
        assert_eq!(headings[0].level, 1);
        assert_eq!(headings[0].text, "Top Heading");
        assert_eq!(headings[0].anchor, "top-heading");
        assert_eq!(headings[0].line_number, 1);
        assert_eq!(headings[1].level, 2);
        assert_eq!(headings[1].line_number, 5);
    }

    #[test]
    fn test_document_order_preserved() {
        let markdown = "# A\n## B\n# C\n### D\n";
        let texts: Vec<String> = extract_headings(markdown, 0, &[])
            .into_iter()
            .map(|h| h.text)
            .collect();
        assert_eq!(texts, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_missing_space_is_not_a_heading() {
        assert!(extract_headings("#NoSpace\n", 0, &[]).is_empty());
    }

    #[test]
    fn test_bare_or_blank_marker_is_not_a_heading() {
        assert!(extract_headings("#\n", 0, &[]).is_empty());
        assert!(extract_headings("#   \n", 0, &[]).is_empty());
        assert!(extract_headings("######\n", 0, &[]).is_empty());
    }

    #[test]
    fn test_seven_hashes_not_a_heading() {
        assert!(extract_headings("####### Too deep\n", 0, &[]).is_empty());
    }

    #[test]
    fn test_indented_hash_is_not_a_heading() {
        assert!(extract_headings("  # Indented\n", 0, &[]).is_empty());
    }

    #[test]
    fn test_depth_filter_drops_deeper_headings() {
        let markdown = "# A\n## B\n# C\n### D\n";
        let headings = extract_headings(markdown, 1, &[]);
        assert_eq!(headings.len(), 2);
        assert_eq!(headings[0].text, "A");
        assert_eq!(headings[1].text, "C");
    }

    #[test]
    fn test_exclude_patterns_match_heading_text() {
        let markdown = "# Keep\n## License\n## Keep Too\n";
        let exclude = vec![Pattern::new("License*").unwrap()];
        let headings = extract_headings(markdown, 0, &exclude);
        assert_eq!(headings.len(), 2);
        assert_eq!(headings[1].text, "Keep Too");
    }

    #[test]
    fn test_code_fence_is_not_excluded() {
        // Known quirk: the scan is purely line-oriented.
        let markdown = "# Real\n```\n# Inside fence\n```\n";
        let headings = extract_headings(markdown, 0, &[]);
        assert_eq!(headings.len(), 2);
    }

    #[test]
    fn test_empty_input_gives_empty_sequence() {
        assert!(extract_headings("", 0, &[]).is_empty());
        assert!(extract_headings("no headings at all\n", 0, &[]).is_empty());
    }

    #[test]
    fn test_extract_title() {
        assert_eq!(
            extract_title("intro\n\n# The Title\n## Not this\n"),
            Some("The Title".to_string())
        );
        assert_eq!(extract_title("## Only subheadings\n"), None);
        assert_eq!(extract_title(""), None);
    }
}
