use std::path::Path;

use log::{debug, info};

use crate::annotate;
use crate::utils::error::{BoxResult, MdtocError};
use crate::utils::fs;

/// Handle the analyze command
pub fn handle_analyze_command(file: &Path) -> BoxResult<()> {
    if !file.is_file() {
        return Err(Box::new(MdtocError::NotFound(file.display().to_string())));
    }

    debug!("Analyzing README file {}", file.display());
    let content = fs::read_file(file)?;

    info!("Processing headings and adding back-to-top links");
    let updated = annotate::annotate(&content);

    fs::write_file(file, &updated)?;
    info!("File updated successfully");
    println!(
        "Successfully updated {} with best practices",
        file.display()
    );

    Ok(())
}
