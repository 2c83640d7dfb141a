use clap::Parser;
use std::path::PathBuf;

/// Arguments for the check command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Validate a descriptor on a mounted stick:\n    flashsync check /media/usb0/update.properties")]
pub struct CheckArgs {
    /// Path to the bundle descriptor (.properties) file
    pub descriptor: PathBuf,
}
