// Module declarations
mod annotate;
mod cli;
mod index;
mod toc;
mod utils;

fn main() {
    // Run the CLI and propagate its exit code
    std::process::exit(cli::run());
}
