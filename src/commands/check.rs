//! Check command implementation
//!
//! Validates a single bundle descriptor without installing anything.

use console::Style;

use crate::bundle;
use crate::cli::CheckArgs;
use crate::error::Result;

/// Run check command
pub fn run(args: &CheckArgs) -> Result<()> {
    let bundle = bundle::validate(&args.descriptor)?;

    println!(
        "{} bundle for device {}",
        Style::new().green().bold().apply_to("Valid"),
        Style::new().bold().yellow().apply_to(&bundle.device)
    );
    println!(
        "  {} {}",
        Style::new().bold().apply_to("Descriptor:"),
        bundle.descriptor_path.display()
    );
    println!(
        "  {} {}",
        Style::new().bold().apply_to("Instructions:"),
        bundle.instructions_path.display()
    );
    println!(
        "  {} {}",
        Style::new().bold().apply_to("Images:"),
        bundle.images_path.display()
    );

    Ok(())
}
