pub mod types;
pub mod commands;
pub mod logging;

use clap::Parser;

/// Run the command-line interface, returning the process exit code
pub fn run() -> i32 {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init_logging(cli.debug);

    // Configure backtrace
    logging::configure_backtrace(cli.trace);

    let result = match cli.command {
        types::Commands::Generate {
            path,
            file,
            depth,
            exclude,
            language,
            no_title,
            dry_run,
        } => commands::handle_generate_command(
            path, file, depth, exclude, language, no_title, dry_run,
        ),
        types::Commands::Index {
            path,
            file,
            root,
            pattern,
            depth,
            exclude,
            dry_run,
        } => commands::handle_index_command(path, file, root, pattern, depth, exclude, dry_run),
        types::Commands::Analyze { file } => commands::handle_analyze_command(&file),
    };

    match result {
        Ok(()) => 0,
        Err(e) => {
            log::error!("Command failed: {}", e);
            eprintln!("Error: {}", e);
            1
        }
    }
}
