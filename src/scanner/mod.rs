//! Media scanning
//!
//! Enumerates mount directories under a media root, recognizes candidate
//! bundle descriptors by extension and validates/installs each one. A
//! failing bundle never aborts the scan; failures are collected for the
//! caller to report, so a long-running watch loop survives bad media.

use std::path::{Path, PathBuf};

use serde::Serialize;
use walkdir::WalkDir;

use crate::bundle;
use crate::descriptor::DESCRIPTOR_EXTENSION;
use crate::error::{FlashError, Result, media_root_not_found};
use crate::installer::Installer;

/// Result of one pass over the media root
#[derive(Debug, Default, Serialize)]
pub struct ScanSummary {
    /// Descriptor files found
    pub candidates: usize,
    /// Bundles validated and installed
    pub installed: usize,
    /// Bundles that failed validation or install
    pub failed: usize,
    /// Per-bundle failures, in discovery order
    #[serde(skip)]
    pub failures: Vec<ScanFailure>,
}

/// A candidate bundle that failed to validate or install
#[derive(Debug)]
pub struct ScanFailure {
    /// The descriptor file that identified the bundle
    pub descriptor: PathBuf,
    /// What went wrong
    pub error: FlashError,
}

/// Scan the media root once, installing every valid bundle found.
///
/// Per-bundle failures are recorded in the summary, not propagated; only a
/// missing media root fails the scan itself.
pub fn scan(media_root: &Path, installer: &Installer) -> Result<ScanSummary> {
    let mut summary = ScanSummary::default();

    for descriptor in find_descriptors(media_root)? {
        summary.candidates += 1;
        match bundle::validate(&descriptor).and_then(|bundle| installer.install(&bundle)) {
            Ok(()) => summary.installed += 1,
            Err(error) => {
                summary.failed += 1;
                summary.failures.push(ScanFailure { descriptor, error });
            }
        }
    }

    Ok(summary)
}

/// Find candidate descriptors: files directly inside a mount directory
/// (depth 2 from the media root) carrying the descriptor extension
pub fn find_descriptors(media_root: &Path) -> Result<Vec<PathBuf>> {
    if !media_root.is_dir() {
        return Err(media_root_not_found(media_root));
    }

    let descriptors = WalkDir::new(media_root)
        .min_depth(2)
        .max_depth(2)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.path().extension().and_then(|ext| ext.to_str()) == Some(DESCRIPTOR_EXTENSION)
        })
        .map(walkdir::DirEntry::into_path)
        .collect();

    Ok(descriptors)
}
