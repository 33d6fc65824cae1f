use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "mdtoc")]
#[command(about = "Generate a table of contents for markdown files", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, default_value_t = false)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false)]
    pub debug: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a table of contents for a markdown file
    #[command(alias = "gen")]
    Generate {
        /// Path to the markdown file to update
        #[arg(value_name = "FILE")]
        path: Option<PathBuf>,

        /// Path to the markdown file to update (takes precedence over the positional)
        #[arg(short, long, value_name = "FILE")]
        file: Option<PathBuf>,

        /// Maximum heading depth (0 for unlimited)
        #[arg(short, long, default_value_t = 0)]
        depth: usize,

        /// Comma-separated list of heading patterns to exclude
        #[arg(short, long, value_name = "PATTERNS")]
        exclude: Option<String>,

        /// Title language (en or pt)
        #[arg(short, long, default_value = "pt")]
        language: String,

        /// Omit the title line and append a back-to-top link instead
        #[arg(long, default_value_t = false)]
        no_title: bool,

        /// Preview the generated block without writing the file
        #[arg(long, default_value_t = false)]
        dry_run: bool,
    },

    /// Build a documentation index from markdown files in a directory tree
    #[command(alias = "idx")]
    Index {
        /// Path to the markdown file to update
        #[arg(value_name = "FILE")]
        path: Option<PathBuf>,

        /// Path to the markdown file to update (takes precedence over the positional)
        #[arg(short, long, value_name = "FILE")]
        file: Option<PathBuf>,

        /// Root directory to scan for markdown files (defaults to ./)
        #[arg(short, long, value_name = "DIR", default_value = "./")]
        root: PathBuf,

        /// Filename glob pattern to match
        #[arg(short, long, default_value = "*.md")]
        pattern: String,

        /// Maximum directory depth (0 for unlimited)
        #[arg(short, long, default_value_t = 0)]
        depth: usize,

        /// Comma-separated list of path patterns to exclude
        #[arg(short, long, value_name = "PATTERNS")]
        exclude: Option<String>,

        /// Preview the generated block without writing the file
        #[arg(long, default_value_t = false)]
        dry_run: bool,
    },

    /// Analyze and update a README.md with navigation markers
    Analyze {
        /// Path to the README file to analyze
        #[arg(short, long, value_name = "FILE", default_value = "README.md")]
        file: PathBuf,
    },
}
