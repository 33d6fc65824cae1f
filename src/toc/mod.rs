mod generate;
mod parser;
mod renderer;
mod slug;
mod splice;

pub use generate::{generate_toc, update_file};
pub use parser::{extract_headings, extract_title, Heading};
pub use renderer::{render_block, TocTitle};
pub use slug::slugify;
pub use splice::{splice, strip_block};

use glob::Pattern;

/// Sentinel markers bounding the generated block inside a document.
/// Anything a user places between them is replaced on the next run.
pub const START_MARKER: &str = "<!-- START_MDTOC -->";
pub const END_MARKER: &str = "<!-- END_MDTOC -->";

/// Options for table of contents generation
#[derive(Debug, Clone)]
pub struct TocOptions {
    /// Maximum heading level to include (0 = unlimited)
    pub max_depth: usize,
    /// Glob patterns matched against heading text; matching headings are dropped
    pub exclude: Vec<Pattern>,
    /// Title line selection for the rendered block
    pub title: TocTitle,
}

impl Default for TocOptions {
    fn default() -> Self {
        Self {
            max_depth: 0,
            exclude: Vec::new(),
            title: TocTitle::Localized(String::new()),
        }
    }
}
