//! Bundle content validation errors

use std::path::Path;

use super::FlashError;

/// Creates an invalid instructions file error
pub fn invalid_instructions(path: impl AsRef<Path>, reason: impl Into<String>) -> FlashError {
    FlashError::InvalidInstructions {
        path: path.as_ref().display().to_string(),
        reason: reason.into(),
    }
}

/// Creates an invalid image naming error
pub fn invalid_image_naming(name: impl Into<String>) -> FlashError {
    FlashError::InvalidImageNaming { name: name.into() }
}

/// Creates a duplicate image name error
pub fn duplicate_image_name(stem: impl Into<String>) -> FlashError {
    FlashError::DuplicateImageName { stem: stem.into() }
}

/// Creates an empty or missing image collection error
pub fn empty_image_collection(path: impl AsRef<Path>) -> FlashError {
    FlashError::EmptyOrMissingImageCollection {
        path: path.as_ref().display().to_string(),
    }
}
