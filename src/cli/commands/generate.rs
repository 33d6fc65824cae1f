use std::path::PathBuf;

use log::{debug, info};

use crate::cli::commands::parse_patterns;
use crate::toc::{self, TocOptions, TocTitle};
use crate::utils::error::{BoxResult, MdtocError};

/// Handle the generate command
#[allow(clippy::too_many_arguments)]
pub fn handle_generate_command(
    path: Option<PathBuf>,
    file: Option<PathBuf>,
    depth: usize,
    exclude: Option<String>,
    language: String,
    no_title: bool,
    dry_run: bool,
) -> BoxResult<()> {
    // The --file flag wins over the positional argument
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

    let exclude = parse_patterns(exclude)?;
    debug!(
        "Processing file {} (depth {}, {} exclude patterns)",
        target.display(),
        depth,
        exclude.len()
    );

    let options = TocOptions {
        max_depth: depth,
        exclude,
        title: if no_title {
            TocTitle::None
        } else {
            TocTitle::Localized(language)
        },
    };

    info!("Generating table of contents for {}", target.display());
    let block = toc::generate_toc(&target, &options)?;

    if dry_run {
        info!("Dry run mode - not updating file");
        println!("Dry run mode. The following table of contents would be generated:");
        println!("\n{}\n", block);
    } else {
        toc::update_file(&target, &block)?;
        info!("File updated successfully");
        println!(
            "Successfully updated {} with the generated table of contents",
            target.display()
        );
    }

    Ok(())
}
