mod analyze;
mod generate;
mod index;

pub use analyze::handle_analyze_command;
pub use generate::handle_generate_command;
pub use index::handle_index_command;

use glob::Pattern;

use crate::utils::error::{BoxResult, MdtocError};

/// Split a comma-separated pattern list into compiled glob patterns
pub(crate) fn parse_patterns(raw: Option<String>) -> BoxResult<Vec<Pattern>> {
    let mut patterns = Vec::new();

    if let Some(raw) = raw {
        for part in raw.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            let pattern = Pattern::new(part)
                .map_err(|e| MdtocError::Pattern(format!("{}: {}", part, e)))?;
            patterns.push(pattern);
        }
    }

    Ok(patterns)
}
