use clap::Parser;

/// Arguments for the watch command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Poll the default media root every second:\n    flashsync watch\n\n\
                   Poll a custom mount directory every 5 seconds:\n    flashsync watch -m /mnt/usb --interval 5")]
pub struct WatchArgs {
    /// Seconds between scans of the media root
    #[arg(long, value_name = "SECS", default_value_t = 1)]
    pub interval: u64,
}
