use clap::Parser;
use std::path::PathBuf;

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Install a bundle from a mounted stick:\n    flashsync install /media/usb0/update.properties\n\n\
                   Install into an explicit storage root:\n    flashsync install update.properties -s /srv/device")]
pub struct InstallArgs {
    /// Path to the bundle descriptor (.properties) file
    pub descriptor: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::super::{Cli, Commands};
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_cli_parsing_install() {
        let cli = Cli::try_parse_from(["flashsync", "install", "update.properties"]).unwrap();
        match cli.command {
            Commands::Install(args) => {
                assert_eq!(args.descriptor, PathBuf::from("update.properties"));
            }
            _ => panic!("Expected Install command"),
        }
    }
}
