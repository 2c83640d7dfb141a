//! Watch command implementation
//!
//! Re-runs the scanner on a fixed interval, forever. A failing scan (for
//! example the media root vanishing when a stick is pulled) is reported
//! and the loop keeps going; nothing a single bundle does is fatal.

use std::thread;
use std::time::Duration;

use console::Style;

use crate::cli::{GlobalOptions, WatchArgs};
use crate::commands::helpers;
use crate::error::Result;
use crate::installer::Installer;
use crate::scanner;

/// Run watch command
pub fn run(options: &GlobalOptions, args: &WatchArgs) -> Result<()> {
    let media_root = helpers::resolve_media_root(options);
    let installer = Installer::new(helpers::resolve_storage_root(options));

    println!(
        "{} {} every {}s, installing into {}",
        Style::new().green().bold().apply_to("Watching"),
        media_root.display(),
        args.interval,
        installer.storage_root().display()
    );

    loop {
        match scanner::scan(&media_root, &installer) {
            Ok(summary) => {
                helpers::report_failures(&summary);
                if summary.installed > 0 || (options.verbose && summary.candidates > 0) {
                    helpers::report_summary(&summary);
                }
            }
            Err(e) => {
                eprintln!("{} {}", Style::new().red().bold().apply_to("Scan failed:"), e);
            }
        }

        thread::sleep(Duration::from_secs(args.interval));
    }
}
