use crate::toc::parser::H1_REGEX;
use crate::toc::{END_MARKER, START_MARKER};

/// Replace or insert the marker-delimited block inside a document.
///
/// When the first occurrence of the start marker precedes the last occurrence
/// of the end marker, the enclosed span (markers included) is replaced with
/// `block` and everything outside is kept byte-for-byte. Otherwise the block
/// is inserted at a fallback position: just under the first top-level heading
/// line, or at the absolute start of the document when there is none.
/// Repeated application with the same block is idempotent.
pub fn splice(document: &str, block: &str) -> String {
    let start = document.find(START_MARKER);
    let end = document.rfind(END_MARKER);

    match (start, end) {
        (Some(s), Some(e)) if s < e => {
            let mut updated = String::with_capacity(document.len() + block.len());
            updated.push_str(&document[..s]);
            updated.push_str(block);
            updated.push_str(&document[e + END_MARKER.len()..]);
            updated
        }
        _ => insert_at_fallback(document, block),
    }
}

/// Remove an existing marker-delimited block from a document, leaving the
/// surrounding text untouched. Used before heading extraction so a previously
/// generated block never feeds its own title back into the next one.
pub fn strip_block(document: &str) -> String {
    let start = document.find(START_MARKER);
    let end = document.rfind(END_MARKER);

    match (start, end) {
        (Some(s), Some(e)) if s < e => {
            let mut stripped = String::with_capacity(document.len());
            stripped.push_str(&document[..s]);
            stripped.push_str(&document[e + END_MARKER.len()..]);
            stripped
        }
        _ => document.to_string(),
    }
}

/// Insert the block just under the document's own title when it has one,
/// otherwise at the very start.
fn insert_at_fallback(document: &str, block: &str) -> String {
    match first_h1_line_end(document) {
        Some(pos) => {
            let head = &document[..pos];
            let tail = &document[pos..];
            let mut updated = String::with_capacity(document.len() + block.len() + 4);
            updated.push_str(head);
            if !head.ends_with('\n') {
                updated.push('\n');
            }
            updated.push('\n');
            updated.push_str(block);
            updated.push_str("\n\n");
            updated.push_str(tail);
            updated
        }
        None => format!("{}\n\n{}", block, document),
    }
}

/// Byte offset just past the first top-level heading line (newline included),
/// or None when the document has no such line.
fn first_h1_line_end(document: &str) -> Option<usize> {
    let mut offset = 0;
    for line in document.split_inclusive('\n') {
        let text = line.strip_suffix('\n').unwrap_or(line);
        if H1_REGEX.is_match(text) {
            return Some(offset + line.len());
        }
        offset += line.len();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(body: &str) -> String {
        format!("{}\n{}\n{}", START_MARKER, body, END_MARKER)
    }

    #[test]
    fn test_replaces_existing_block_in_place() {
        let doc = format!("intro\n{}\nafter\n", block("old"));
        let updated = splice(&doc, &block("new"));
        assert_eq!(updated, format!("intro\n{}\nafter\n", block("new")));
    }

    #[test]
    fn test_manual_edits_inside_markers_are_destroyed() {
        let doc = format!("{}\n", block("hand-written note"));
        let updated = splice(&doc, &block("generated"));
        assert!(!updated.contains("hand-written note"));
    }

    #[test]
    fn test_uses_first_start_and_last_end_marker() {
        let doc = format!(
            "{}\nx\n{}\ny\n{}\n",
            START_MARKER, END_MARKER, END_MARKER
        );
        let updated = splice(&doc, &block("new"));
        assert_eq!(updated, format!("{}\n", block("new")));
    }

    #[test]
    fn test_reversed_markers_fall_back_to_insertion() {
        let doc = format!("{}\ntext\n{}\n", END_MARKER, START_MARKER);
        let updated = splice(&doc, &block("new"));
        // No valid span, so the block is prepended instead
        assert!(updated.starts_with(START_MARKER));
        assert!(updated.contains("text\n"));
    }

    #[test]
    fn test_inserts_after_first_h1() {
        let doc = "# Title\nbody\n";
        let updated = splice(doc, &block("toc"));
        assert_eq!(
            updated,
            format!("# Title\n\n{}\n\nbody\n", block("toc"))
        );
    }

    #[test]
    fn test_inserts_at_start_without_h1() {
        let doc = "just text\n## only a subheading\n";
        let updated = splice(doc, &block("toc"));
        assert_eq!(
            updated,
            format!("{}\n\njust text\n## only a subheading\n", block("toc"))
        );
    }

    #[test]
    fn test_insert_into_empty_document() {
        let updated = splice("", &block("toc"));
        assert_eq!(updated, format!("{}\n\n", block("toc")));
    }

    #[test]
    fn test_h1_without_trailing_newline() {
        let updated = splice("# Title", &block("toc"));
        assert_eq!(updated, format!("# Title\n\n{}\n\n", block("toc")));
    }

    #[test]
    fn test_splice_is_idempotent() {
        let b = block("generated");
        for doc in ["# Title\nbody\n", "plain\n", ""] {
            let once = splice(doc, &b);
            assert_eq!(splice(&once, &b), once, "doc {:?}", doc);
        }
    }

    #[test]
    fn test_strip_block_removes_span() {
        let doc = format!("before\n{}\nafter\n", block("x"));
        assert_eq!(strip_block(&doc), "before\n\nafter\n");
    }

    #[test]
    fn test_strip_block_without_markers_is_identity() {
        assert_eq!(strip_block("no markers\n"), "no markers\n");
    }
}
