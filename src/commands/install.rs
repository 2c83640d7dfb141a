//! Install command implementation
//!
//! Validates a single bundle descriptor and installs it into the storage
//! root. The storage root comes from the global options, falling back to
//! the platform data directory.

use console::Style;

use crate::bundle;
use crate::cli::{GlobalOptions, InstallArgs};
use crate::commands::helpers;
use crate::error::Result;
use crate::installer::Installer;

/// Run install command
pub fn run(options: &GlobalOptions, args: &InstallArgs) -> Result<()> {
    let bundle = bundle::validate(&args.descriptor)?;
    let installer = Installer::new(helpers::resolve_storage_root(options));

    if options.verbose {
        println!(
            "{} {}",
            Style::new().bold().apply_to("Storage root:"),
            installer.storage_root().display()
        );
    }

    installer.install(&bundle)?;

    println!(
        "{} bundle for device {} into {}",
        Style::new().green().bold().apply_to("Installed"),
        Style::new().bold().yellow().apply_to(&bundle.device),
        installer.storage_root().display()
    );

    Ok(())
}
