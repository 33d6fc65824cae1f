use lazy_static::lazy_static;
use regex::Regex;

/// Literal markers and links recognized by the annotation pass
pub const BEGIN_DOCS_MARKER: &str = "<!-- BEGIN_DOCS -->";
pub const END_DOCS_MARKER: &str = "<!-- END_DOCS -->";
pub const README_ANCHOR: &str = "<a name=\"readme-top\"></a>";
pub const BACK_TO_TOP_LINK: &str =
    "<p align=\"right\">(<a href=\"#readme-top\">back to top</a>)</p>";

lazy_static! {
    /// Top-level heading lines across the whole document
    static ref H1_LINE_REGEX: Regex = Regex::new(r"(?m)^#[ \t]+(.+)$").unwrap();
}

/// Annotate a README-style document with navigation affordances.
///
/// Ensures a begin marker and named anchor at the top, a back-to-top link at
/// the end of every level-1 heading section, and an end marker at the bottom.
/// Links already present in a section are preserved verbatim, never
/// duplicated, so the pass is idempotent.
pub fn annotate(content: &str) -> String {
    let mut content = content.to_string();

    if !content.contains(BEGIN_DOCS_MARKER) {
        content = format!("{}\n{}\n\n{}", BEGIN_DOCS_MARKER, README_ANCHOR, content);
    }

    add_back_to_top_links(&content)
}

/// Walk the level-1 heading sections and append the back-to-top link at the
/// end of each section that does not already contain one.
fn add_back_to_top_links(content: &str) -> String {
    let has_end_marker = content.contains(END_DOCS_MARKER);

    // The end marker is stripped during the walk and re-emitted exactly once
    let body = if has_end_marker {
        let end_pos = content.rfind(END_DOCS_MARKER).unwrap_or(content.len());
        &content[..end_pos]
    } else {
        content
    };

    let matches: Vec<usize> = H1_LINE_REGEX.find_iter(body).map(|m| m.start()).collect();

    if matches.is_empty() {
        // No headings: just make sure the end marker is there
        if !has_end_marker {
            return format!("{}\n{}\n", content, END_DOCS_MARKER);
        }
        return content.to_string();
    }

    let mut updated = String::with_capacity(content.len() + BACK_TO_TOP_LINK.len());
    updated.push_str(&body[..matches[0]]);

    for (i, &start) in matches.iter().enumerate() {
        let end = if i + 1 < matches.len() {
            matches[i + 1]
        } else {
            body.len()
        };
        let section = &body[start..end];

        updated.push_str(section);

        if !section.contains(BACK_TO_TOP_LINK) {
            // Normalize to one blank line before the link
            if !section.ends_with("\n\n") {
                if section.ends_with('\n') {
                    updated.push('\n');
                } else {
                    updated.push_str("\n\n");
                }
            }
            updated.push_str(BACK_TO_TOP_LINK);
            updated.push_str("\n\n");
        }
    }

    updated.push_str(END_DOCS_MARKER);
    updated.push('\n');
    updated
}
