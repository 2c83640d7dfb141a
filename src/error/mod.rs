//! Error types and handling for Flashsync
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`descriptor`]: Bundle descriptor errors
//! - [`bundle`]: Bundle content validation errors
//! - [`install`]: Install errors
//! - [`scanner`]: Media scanning errors

pub mod bundle;
pub mod descriptor;
pub mod install;
pub mod scanner;

pub use bundle::{
    duplicate_image_name, empty_image_collection, invalid_image_naming, invalid_instructions,
};
pub use descriptor::{missing_field, read_failed as descriptor_read_failed};
pub use install::replace_failed;
pub use scanner::media_root_not_found;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Flashsync operations
#[derive(Error, Diagnostic, Debug)]
pub enum FlashError {
    // Descriptor errors
    #[error("Descriptor is missing required field '{field}'")]
    #[diagnostic(
        code(flashsync::descriptor::missing_field),
        help("A bundle descriptor must define device, hash, instructions and images")
    )]
    MissingField { field: String },

    #[error("Failed to read descriptor: {path}")]
    #[diagnostic(code(flashsync::descriptor::read_failed))]
    DescriptorReadFailed { path: String, reason: String },

    // Bundle content errors
    #[error("Invalid instructions file: {path}")]
    #[diagnostic(
        code(flashsync::bundle::invalid_instructions),
        help("The instructions entry must point to a regular file containing a JSON object")
    )]
    InvalidInstructions { path: String, reason: String },

    #[error("Invalid image name: {name}")]
    #[diagnostic(
        code(flashsync::bundle::invalid_image_naming),
        help("Image files must be named <integer>.<ext> with ext one of: jpg, png")
    )]
    InvalidImageNaming { name: String },

    #[error("Duplicate image name: {stem}")]
    #[diagnostic(
        code(flashsync::bundle::duplicate_image_name),
        help("Two image files share the same integer stem")
    )]
    DuplicateImageName { stem: String },

    #[error("Image collection is empty or missing: {path}")]
    #[diagnostic(
        code(flashsync::bundle::empty_image_collection),
        help("The images entry must point to a directory containing at least one image file")
    )]
    EmptyOrMissingImageCollection { path: String },

    // Install errors
    #[error("Failed to replace {resource}: {reason}")]
    #[diagnostic(code(flashsync::install::replace_failed))]
    ReplaceFailed { resource: String, reason: String },

    // Scanner errors
    #[error("Media root not found: {path}")]
    #[diagnostic(
        code(flashsync::scanner::media_root_not_found),
        help("The media root must be a directory whose subdirectories are removable media mounts")
    )]
    MediaRootNotFound { path: String },

    // File system errors
    #[error("IO error: {message}")]
    #[diagnostic(code(flashsync::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for FlashError {
    fn from(err: std::io::Error) -> Self {
        FlashError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, FlashError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FlashError::MissingField {
            field: "device".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Descriptor is missing required field 'device'"
        );
    }

    #[test]
    fn test_error_code() {
        let err = missing_field("hash");
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("flashsync::descriptor::missing_field".to_string())
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let flash_err: FlashError = io_err.into();
        assert!(matches!(flash_err, FlashError::IoError { .. }));
    }

    #[test]
    fn test_descriptor_read_failed() {
        let err = descriptor_read_failed("/media/usb0/update.properties", "permission denied");
        assert!(matches!(err, FlashError::DescriptorReadFailed { .. }));
        assert!(err.to_string().contains("Failed to read descriptor"));
    }

    #[test]
    fn test_invalid_instructions() {
        let err = invalid_instructions("/media/usb0/i.json", "expected object at top level");
        assert!(matches!(err, FlashError::InvalidInstructions { .. }));
        assert!(err.to_string().contains("Invalid instructions file"));
    }

    #[test]
    fn test_invalid_image_naming() {
        let err = invalid_image_naming("cover.jpg");
        assert!(matches!(err, FlashError::InvalidImageNaming { .. }));
        assert!(err.to_string().contains("Invalid image name: cover.jpg"));
    }

    #[test]
    fn test_duplicate_image_name() {
        let err = duplicate_image_name("0");
        assert!(matches!(err, FlashError::DuplicateImageName { .. }));
        assert!(err.to_string().contains("Duplicate image name: 0"));
    }

    #[test]
    fn test_empty_image_collection() {
        let err = empty_image_collection("/media/usb0/imgs");
        assert!(matches!(
            err,
            FlashError::EmptyOrMissingImageCollection { .. }
        ));
        assert!(err.to_string().contains("empty or missing"));
    }

    #[test]
    fn test_replace_failed() {
        let err = replace_failed("images", "disk full");
        assert!(matches!(err, FlashError::ReplaceFailed { .. }));
        assert_eq!(err.to_string(), "Failed to replace images: disk full");
    }

    #[test]
    fn test_media_root_not_found() {
        let err = media_root_not_found("/media");
        assert!(matches!(err, FlashError::MediaRootNotFound { .. }));
        assert!(err.to_string().contains("Media root not found"));
    }
}
