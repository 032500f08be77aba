//! Pacstash - stash pacman packages into dated directories and SquashFS images
//!
//! Entry point for the pacstash command-line application.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pacstash::cli::output::display_error;
use pacstash::cli::Cli;

fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins over -v/-q
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level().to_string().to_lowercase()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(failure) = cli.run() {
        display_error(&failure.error, failure.color);
        std::process::exit(1);
    }
}
