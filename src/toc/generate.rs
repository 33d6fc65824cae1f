use std::path::Path;

use log::debug;

use crate::toc::parser::extract_headings;
use crate::toc::renderer::render_block;
use crate::toc::splice::{splice, strip_block};
use crate::toc::TocOptions;
use crate::utils::error::{BoxResult, MdtocError};
use crate::utils::fs;

/// Generate the rendered TOC block for a markdown file.
///
/// Any previously generated block is stripped before heading extraction, so
/// the block's own title never becomes an entry of the next generation.
pub fn generate_toc(path: &Path, options: &TocOptions) -> BoxResult<String> {
    if !path.is_file() {
        return Err(Box::new(MdtocError::NotFound(path.display().to_string())));
    }

    let content = fs::read_file(path)?;
    let body = strip_block(&content);
    let headings = extract_headings(&body, options.max_depth, &options.exclude);
    debug!("Extracted {} headings from {}", headings.len(), path.display());

    Ok(render_block(&headings, &options.title))
}

/// Splice the rendered block into the target file and rewrite it whole.
/// A missing target is a hard error; it is never silently created.
pub fn update_file(path: &Path, block: &str) -> BoxResult<()> {
    if !path.is_file() {
        return Err(Box::new(MdtocError::NotFound(path.display().to_string())));
    }

    let content = fs::read_file(path)?;
    let updated = splice(&content, block);
    fs::write_file(path, &updated)
}
