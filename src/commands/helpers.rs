//! Command helper utilities

use std::path::PathBuf;

use console::Style;

use crate::cli::GlobalOptions;
use crate::scanner::ScanSummary;

/// Media root scanned when none is configured
pub const DEFAULT_MEDIA_ROOT: &str = "/media";

/// Resolve the media root from CLI options, falling back to the default
pub fn resolve_media_root(options: &GlobalOptions) -> PathBuf {
    options
        .media_root
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_MEDIA_ROOT))
}

/// Resolve the storage root from CLI options, falling back to the platform
/// data directory
pub fn resolve_storage_root(options: &GlobalOptions) -> PathBuf {
    options.storage_root.clone().unwrap_or_else(|| {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("flashsync")
            .join("device")
    })
}

/// Report per-bundle scan failures to stderr
pub fn report_failures(summary: &ScanSummary) {
    for failure in &summary.failures {
        eprintln!(
            "{} {}: {}",
            Style::new().red().bold().apply_to("Skipped"),
            failure.descriptor.display(),
            failure.error
        );
    }
}

/// Print a one-line scan summary
pub fn report_summary(summary: &ScanSummary) {
    let bundles = if summary.candidates == 1 {
        "bundle"
    } else {
        "bundles"
    };
    println!(
        "{} {} of {} {} ({} failed)",
        Style::new().green().bold().apply_to("Installed"),
        summary.installed,
        summary.candidates,
        bundles,
        summary.failed
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(media: Option<&str>, storage: Option<&str>) -> GlobalOptions {
        GlobalOptions {
            media_root: media.map(PathBuf::from),
            storage_root: storage.map(PathBuf::from),
            verbose: false,
        }
    }

    #[test]
    fn test_resolve_media_root_default() {
        let root = resolve_media_root(&options(None, None));
        assert_eq!(root, PathBuf::from(DEFAULT_MEDIA_ROOT));
    }

    #[test]
    fn test_resolve_media_root_explicit() {
        let root = resolve_media_root(&options(Some("/mnt/usb"), None));
        assert_eq!(root, PathBuf::from("/mnt/usb"));
    }

    #[test]
    fn test_resolve_storage_root_explicit() {
        let root = resolve_storage_root(&options(None, Some("/srv/device")));
        assert_eq!(root, PathBuf::from("/srv/device"));
    }

    #[test]
    fn test_resolve_storage_root_default_ends_with_device() {
        let root = resolve_storage_root(&options(None, None));
        assert!(root.ends_with("flashsync/device"));
    }
}
