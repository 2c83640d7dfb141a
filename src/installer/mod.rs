//! Bundle installation
//!
//! Replaces the three fixed destination resources under the storage root
//! (instructions file, images directory, config file) with a validated
//! bundle's contents. Each resource is staged next to its destination and
//! renamed into place, so a destination resource is never observable in a
//! partially written state. There is no atomicity across the three
//! resources: a failure aborts the remaining steps and completed steps are
//! not rolled back.

pub mod file_ops;

use std::path::{Path, PathBuf};

use crate::bundle::ValidatedBundle;
use crate::error::{Result, replace_failed};

/// Destination instructions file name
pub const INSTRUCTIONS_FILE: &str = "instructions";
/// Destination image directory name
pub const IMAGES_DIR: &str = "images";
/// Destination config file name (the installed descriptor)
pub const CONFIG_FILE: &str = "config";

/// Installs validated bundles into a storage root
#[derive(Debug, Clone)]
pub struct Installer {
    storage_root: PathBuf,
}

impl Installer {
    /// Create an installer for the given storage root
    pub fn new(storage_root: impl Into<PathBuf>) -> Self {
        Self {
            storage_root: storage_root.into(),
        }
    }

    /// The destination storage root
    pub fn storage_root(&self) -> &Path {
        &self.storage_root
    }

    /// Install a validated bundle, replacing instructions, images and
    /// config in that order
    pub fn install(&self, bundle: &ValidatedBundle) -> Result<()> {
        file_ops::ensure_dir(&self.storage_root)?;

        self.replace_file(&bundle.instructions_path, INSTRUCTIONS_FILE)?;
        self.replace_dir(&bundle.images_path, IMAGES_DIR)?;
        self.replace_file(&bundle.descriptor_path, CONFIG_FILE)?;

        Ok(())
    }

    fn replace_file(&self, source: &Path, resource: &str) -> Result<()> {
        file_ops::stage_file_replace(source, &self.storage_root, resource)
            .map_err(|e| replace_failed(resource, e.to_string()))
    }

    fn replace_dir(&self, source: &Path, resource: &str) -> Result<()> {
        file_ops::stage_dir_replace(source, &self.storage_root, resource)
            .map_err(|e| replace_failed(resource, e.to_string()))
    }
}
