//! Scan command implementation
//!
//! Runs a single pass over the media root, installing every valid bundle.
//! Per-bundle failures are reported and skipped; only a missing media root
//! fails the command.

use console::Style;

use crate::cli::{GlobalOptions, ScanArgs};
use crate::commands::helpers;
use crate::error::{FlashError, Result};
use crate::installer::Installer;
use crate::scanner;

/// Run scan command
pub fn run(options: &GlobalOptions, args: &ScanArgs) -> Result<()> {
    let media_root = helpers::resolve_media_root(options);
    let installer = Installer::new(helpers::resolve_storage_root(options));

    if options.verbose {
        println!(
            "{} {}",
            Style::new().bold().apply_to("Media root:"),
            media_root.display()
        );
        println!(
            "{} {}",
            Style::new().bold().apply_to("Storage root:"),
            installer.storage_root().display()
        );
    }

    let summary = scanner::scan(&media_root, &installer)?;
    helpers::report_failures(&summary);

    if args.json {
        let rendered = serde_json::to_string_pretty(&summary).map_err(|e| FlashError::IoError {
            message: e.to_string(),
        })?;
        println!("{rendered}");
    } else {
        helpers::report_summary(&summary);
    }

    Ok(())
}
