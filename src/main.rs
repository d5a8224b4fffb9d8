use std::path::Path;

use clap::Parser;
use matchbook::cli::commands::Cli;
use matchbook::cli::handlers;
use matchbook::io::config_io;
use matchbook::io::logging::{self, LogTarget};
use matchbook::io::store::MatchStore;

fn main() {
    if let Err(e) = run(Cli::parse()) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = config_io::load_config(cli.config.as_deref().map(Path::new))?;

    // The TUI owns the terminal, so it only logs to a configured file
    let target = match cli.command {
        None => LogTarget::FileOnly,
        Some(_) => LogTarget::Stderr,
    };
    logging::init_logging(&config.log, target)?;

    let store = MatchStore::new(config_io::resolve_store_path(cli.file.as_deref(), &config));

    match cli.command {
        // No subcommand → launch TUI
        None => matchbook::tui::run(store, &config.ui),
        Some(command) => handlers::dispatch(command, &store, cli.json),
    }
}
