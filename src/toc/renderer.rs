use crate::annotate::BACK_TO_TOP_LINK;
use crate::toc::parser::Heading;
use crate::toc::{END_MARKER, START_MARKER};

/// Title line selection for the rendered block
#[derive(Debug, Clone)]
pub enum TocTitle {
    /// A localized `# <title>` line chosen by two-letter language code
    Localized(String),
    /// No title line; a back-to-top link is appended before the end marker
    None,
}

/// Resolve a language code to the title text. A trimmed, case-insensitive
/// `en` selects English; anything else falls back to Portuguese. Unknown
/// codes are not an error.
fn title_for_language(language: &str) -> &'static str {
    if language.trim().eq_ignore_ascii_case("en") {
        "Summary"
    } else {
        "Sumário"
    }
}

/// Render the full marker-delimited block for a heading sequence.
///
/// Each heading becomes `"<indent>- [<text>](#<anchor>)"` with two spaces of
/// indentation per level below 1. Pure function: identical inputs yield
/// byte-identical output, which is what makes re-generation idempotent.
pub fn render_block(headings: &[Heading], title: &TocTitle) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(headings.len() + 6);

    lines.push(START_MARKER.to_string());
    lines.push(String::new());

    if let TocTitle::Localized(language) = title {
        lines.push(format!("# {}", title_for_language(language)));
        lines.push(String::new());
    }

    for heading in headings {
        let indent = "  ".repeat(heading.level - 1);
        lines.push(format!("{}- [{}](#{})", indent, heading.text, heading.anchor));
    }

    if !headings.is_empty() {
        lines.push(String::new());
    }

    if let TocTitle::None = title {
        lines.push(BACK_TO_TOP_LINK.to_string());
        lines.push(String::new());
    }

    lines.push(END_MARKER.to_string());
    lines.join("\n")
}
