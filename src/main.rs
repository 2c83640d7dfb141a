//! Flashsync - removable-media update installer
//!
//! Scans removable storage mounts for device-update bundles (a properties
//! descriptor, a JSON instructions document and an image directory),
//! validates their structure and installs them into a local storage root.

use clap::Parser;

mod bundle;
mod cli;
mod commands;
mod common;
mod descriptor;
mod error;
mod installer;
mod scanner;
#[cfg(test)]
mod temp;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Watch(args) => commands::watch::run(&cli.options, &args),
        Commands::Scan(args) => commands::scan::run(&cli.options, &args),
        Commands::Check(args) => commands::check::run(&args),
        Commands::Install(args) => commands::install::run(&cli.options, &args),
        Commands::Completions(args) => commands::completions::run(&args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
