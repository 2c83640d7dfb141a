use clap::Parser;

/// Arguments for the scan command
#[derive(Parser, Debug)]
pub struct ScanArgs {
    /// Print the scan summary as JSON instead of styled text
    #[arg(long)]
    pub json: bool,
}
