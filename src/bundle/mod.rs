//! Bundle structural validation
//!
//! A bundle is valid when its descriptor carries all required keys, its
//! instructions document is a regular file parsing as a top-level JSON
//! object, and its image collection is a non-empty directory whose entries
//! all follow the `<integer>.<ext>` naming convention with unique stems.
//!
//! Validation order is fixed: descriptor, then instructions, then images.
//! When both sub-resources are invalid the instructions error surfaces.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::descriptor::BundleDescriptor;
use crate::error::{
    Result, duplicate_image_name, empty_image_collection, invalid_image_naming,
    invalid_instructions,
};

/// Allowed image file extensions
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "png"];

/// A structurally validated bundle, ready to install
#[derive(Debug, Clone)]
pub struct ValidatedBundle {
    /// Opaque device identifier from the descriptor
    pub device: String,
    /// Opaque content hash from the descriptor
    pub hash: String,
    /// The descriptor file, installed as the destination config
    pub descriptor_path: PathBuf,
    /// The validated instructions document
    pub instructions_path: PathBuf,
    /// The validated image collection directory
    pub images_path: PathBuf,
}

/// Validate the bundle identified by a descriptor file
pub fn validate(descriptor_path: &Path) -> Result<ValidatedBundle> {
    let descriptor = BundleDescriptor::load(descriptor_path)?;

    validate_instructions(&descriptor.instructions)?;
    validate_images(&descriptor.images)?;

    Ok(ValidatedBundle {
        device: descriptor.device,
        hash: descriptor.hash,
        descriptor_path: descriptor.path,
        instructions_path: descriptor.instructions,
        images_path: descriptor.images,
    })
}

/// Instructions must be a regular file containing a top-level JSON object.
/// Missing, unreadable, unparsable and non-object documents are
/// indistinguishable to the caller.
fn validate_instructions(path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(invalid_instructions(path, "not a regular file"));
    }

    let content = fs::read_to_string(path).map_err(|e| invalid_instructions(path, e.to_string()))?;
    let document: serde_json::Value =
        serde_json::from_str(&content).map_err(|e| invalid_instructions(path, e.to_string()))?;

    if !document.is_object() {
        return Err(invalid_instructions(path, "expected a JSON object at top level"));
    }

    Ok(())
}

/// The image collection must be a directory with at least one entry, every
/// entry named `<integer>.<ext>` with an allowed extension and a stem not
/// seen before. Duplicate detection is order-independent.
fn validate_images(dir: &Path) -> Result<()> {
    if !dir.is_dir() {
        return Err(empty_image_collection(dir));
    }

    let mut seen_stems: HashSet<String> = HashSet::new();
    let mut entries = 0usize;

    for entry in fs::read_dir(dir).map_err(|_| empty_image_collection(dir))? {
        let entry = entry?;
        let name = entry.file_name();
        let name = name.to_string_lossy();

        let stem = image_stem(&name).ok_or_else(|| invalid_image_naming(name.to_string()))?;
        if !seen_stems.insert(stem.to_string()) {
            return Err(duplicate_image_name(stem));
        }
        entries += 1;
    }

    if entries == 0 {
        return Err(empty_image_collection(dir));
    }

    Ok(())
}

/// Return the integer stem of a conventionally named image file, or None
/// when the name does not split into exactly `<integer>.<ext>` with an
/// allowed extension
fn image_stem(name: &str) -> Option<&str> {
    let mut parts = name.split('.');
    let stem = parts.next()?;
    let ext = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    if stem.is_empty() || !stem.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if !IMAGE_EXTENSIONS.contains(&ext) {
        return None;
    }

    Some(stem)
}
