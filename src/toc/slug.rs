/// Derive a GitHub-compatible anchor slug from heading text.
///
/// Lowercase, spaces become hyphens, everything outside `[a-z0-9-]` is
/// dropped, hyphen runs collapse to one, leading/trailing hyphens are
/// trimmed. The result may be empty; anchors are not deduplicated across
/// headings that normalize to the same slug.
pub fn slugify(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter_map(|c| {
            if c == ' ' {
                Some('-')
            } else if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
                Some(c)
            } else {
                None
            }
        })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_text() {
        assert_eq!(slugify("Getting Started"), "getting-started");
        assert_eq!(slugify("FAQ"), "faq");
    }

    #[test]
    fn test_punctuation_removed() {
        assert_eq!(slugify("What's new?"), "whats-new");
        assert_eq!(slugify("C++ & Rust"), "c-rust");
    }

    #[test]
    fn test_hyphen_runs_collapsed() {
        assert_eq!(slugify("a -- b"), "a-b");
        assert_eq!(slugify("a - - b"), "a-b");
    }

    #[test]
    fn test_leading_trailing_hyphens_trimmed() {
        assert_eq!(slugify("- item -"), "item");
        assert_eq!(slugify("  spaced  "), "spaced");
    }

    #[test]
    fn test_digits_and_existing_hyphens_kept() {
        assert_eq!(slugify("Step 2: re-run"), "step-2-re-run");
    }

    #[test]
    fn test_no_alphanumerics_yields_empty() {
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn test_idempotent() {
        for text in ["Getting Started", "What's new?", "a -- b", "step-2"] {
            let once = slugify(text);
            assert_eq!(slugify(&once), once);
        }
    }

    #[test]
    fn test_plain_ascii_normal_form() {
        // Text already in [A-Za-z0-9 -] only needs lowercasing, space
        // substitution, collapsing and trimming.
        assert_eq!(slugify("My Heading-1"), "my-heading-1");
    }
}
