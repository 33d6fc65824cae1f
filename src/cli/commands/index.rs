use std::path::PathBuf;

use glob::Pattern;
use log::{debug, info};

use crate::cli::commands::parse_patterns;
use crate::index::{build_index, IndexOptions};
use crate::toc;
use crate::utils::error::{BoxResult, MdtocError};

/// Handle the index command
pub fn handle_index_command(
    path: Option<PathBuf>,
    file: Option<PathBuf>,
    root: PathBuf,
    pattern: String,
    depth: usize,
    exclude: Option<String>,
    dry_run: bool,
) -> BoxResult<()> {
    let target = match file.or(path) {
        Some(target) => target,
        None => {
            return Err(Box::new(MdtocError::InvalidInput(
                "file path is required (provide it as an argument or with --file)".to_string(),
            )))
        }
    };

    if !target.is_file() {
        return Err(Box::new(MdtocError::NotFound(target.display().to_string())));
    }

    let pattern = Pattern::new(&pattern)
        .map_err(|e| MdtocError::Pattern(format!("{}: {}", pattern, e)))?;
    let exclude = parse_patterns(exclude)?;
    debug!(
        "Indexing {} under {} (pattern {})",
        target.display(),
        root.display(),
        pattern.as_str()
    );

    let options = IndexOptions {
        root,
        pattern,
        exclude,
        max_depth: depth,
    };

    info!("Generating documentation index for {}", target.display());
    let block = build_index(&target, &options)?;

    if dry_run {
        info!("Dry run mode - not updating file");
        println!("Dry run mode. The following documentation index would be generated:");
        println!("\n{}\n", block);
    } else {
        toc::update_file(&target, &block)?;
        info!("File updated successfully");
        println!(
            "Successfully updated {} with the generated documentation index",
            target.display()
        );
    }

    Ok(())
}
