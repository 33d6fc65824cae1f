use std::path::{Path, PathBuf};

use glob::Pattern;
use log::debug;
use walkdir::WalkDir;

use crate::toc::{extract_title, slugify, END_MARKER, START_MARKER};
use crate::utils::error::{BoxResult, MdtocError};
use crate::utils::fs;

/// Options for documentation index generation
#[derive(Debug, Clone)]
pub struct IndexOptions {
    /// Root directory to scan
    pub root: PathBuf,
    /// Filename glob pattern; patterns containing `/` match the
    /// root-relative path instead
    pub pattern: Pattern,
    /// Glob patterns matched against root-relative paths; matches are skipped
    pub exclude: Vec<Pattern>,
    /// Maximum directory depth (0 = unlimited)
    pub max_depth: usize,
}

/// One indexed file: link label and root-relative path
#[derive(Debug, Clone, PartialEq, Eq)]
struct IndexEntry {
    title: String,
    rel_path: String,
}

/// Build the rendered documentation-index block for every markdown file under
/// the root, grouped by containing directory. The target file itself is never
/// listed. Directories appear in the order they are first seen during the
/// sorted walk; files keep walk order within their directory.
pub fn build_index(target: &Path, options: &IndexOptions) -> BoxResult<String> {
    if !options.root.is_dir() {
        return Err(Box::new(MdtocError::NotFound(
            options.root.display().to_string(),
        )));
    }

    let target_canonical = target.canonicalize().ok();
    let match_on_path = options.pattern.as_str().contains('/');

    // Directory sections in first-seen order
    let mut sections: Vec<(String, Vec<IndexEntry>)> = Vec::new();

    for entry in WalkDir::new(&options.root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
    {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let rel_path = match path.strip_prefix(&options.root) {
            Ok(rel) => rel.to_string_lossy().to_string(),
            Err(_) => continue,
        };

        let file_name = entry.file_name().to_string_lossy().to_string();
        let candidate = if match_on_path { &rel_path } else { &file_name };
        if !options.pattern.matches(candidate) {
            continue;
        }

        if path.canonicalize().ok() == target_canonical && target_canonical.is_some() {
            continue;
        }

        if options.exclude.iter().any(|p| p.matches(&rel_path)) {
            debug!("Excluding {}", rel_path);
            continue;
        }

        let dir = match Path::new(&rel_path).parent() {
            Some(parent) => parent.to_string_lossy().to_string(),
            None => String::new(),
        };

        // Depth counts the directory components; files at the root count as 1
        if options.max_depth > 0 {
            let depth = Path::new(&dir).components().count().max(1);
            if depth > options.max_depth {
                continue;
            }
        }

        let item = IndexEntry {
            title: index_title(path, &file_name)?,
            rel_path,
        };

        match sections.iter_mut().find(|(d, _)| *d == dir) {
            Some((_, entries)) => entries.push(item),
            None => sections.push((dir, vec![item])),
        }
    }

    Ok(render_index(&sections))
}

/// Link label for an indexed file: its first H1, or the slugified file stem
/// when it has none. The slugifier here is the same one used for anchors.
fn index_title(path: &Path, file_name: &str) -> BoxResult<String> {
    let content = fs::read_file(path)?;
    if let Some(title) = extract_title(&content) {
        return Ok(title);
    }

    let stem = Path::new(file_name)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| file_name.to_string());

    let label = slugify(&stem);
    if label.is_empty() {
        Ok(file_name.to_string())
    } else {
        Ok(label)
    }
}

fn render_index(sections: &[(String, Vec<IndexEntry>)]) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(START_MARKER.to_string());
    lines.push(String::new());
    lines.push("# Documentation Index".to_string());
    lines.push(String::new());

    for (dir, entries) in sections {
        if !dir.is_empty() {
            lines.push(format!("## {}", dir));
            lines.push(String::new());
        }
        for entry in entries {
            lines.push(format!("- [{}]({})", entry.title, entry.rel_path));
        }
        lines.push(String::new());
    }

    lines.push(END_MARKER.to_string());
    lines.join("\n")
}
