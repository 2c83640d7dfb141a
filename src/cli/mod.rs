//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - watch: Watch command arguments
//! - scan: Scan command arguments
//! - check: Check command arguments
//! - install: Install command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub mod check;
pub mod completions;
pub mod install;
pub mod scan;
pub mod watch;

pub use check::CheckArgs;
pub use completions::CompletionsArgs;
pub use install::InstallArgs;
pub use scan::ScanArgs;
pub use watch::WatchArgs;

/// Flashsync - removable-media update installer
///
/// Validate device-update bundles found on removable storage and install
/// them into a local storage root.
#[derive(Parser, Debug)]
#[command(
    name = "flashsync",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Removable-media update bundle validator and installer",
    long_about = "Flashsync scans removable storage mounts for device-update bundles \
                  (a .properties descriptor, a JSON instructions document and an image \
                  directory), validates their structure and installs valid bundles into \
                  a local storage root.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  flashsync watch                        \x1b[90m# Poll /media every second\x1b[0m\n   \
                  flashsync scan -m /media -s /srv/dev   \x1b[90m# Single pass with explicit roots\x1b[0m\n   \
                  flashsync check usb/update.properties  \x1b[90m# Validate one descriptor\x1b[0m\n   \
                  flashsync install usb/update.properties \x1b[90m# Validate and install one bundle\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    #[command(flatten)]
    pub options: GlobalOptions,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command that touches the filesystem roots
#[derive(Args, Debug, Clone)]
pub struct GlobalOptions {
    /// Directory whose subdirectories are removable media mounts
    #[arg(
        long,
        short = 'm',
        global = true,
        value_name = "DIR",
        env = "FLASHSYNC_MEDIA_ROOT"
    )]
    pub media_root: Option<PathBuf>,

    /// Destination storage root for installed bundles
    #[arg(
        long,
        short = 's',
        global = true,
        value_name = "DIR",
        env = "FLASHSYNC_STORAGE_ROOT"
    )]
    pub storage_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan the media root periodically and install valid bundles
    Watch(WatchArgs),

    /// Scan the media root once and install valid bundles
    Scan(ScanArgs),

    /// Validate a single bundle descriptor without installing
    Check(CheckArgs),

    /// Validate and install a single bundle descriptor
    Install(InstallArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
