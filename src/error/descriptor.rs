//! Bundle descriptor errors

use std::path::Path;

use super::FlashError;

/// Creates a missing required field error
pub fn missing_field(field: impl Into<String>) -> FlashError {
    FlashError::MissingField {
        field: field.into(),
    }
}

/// Creates a descriptor read failed error
pub fn read_failed(path: impl AsRef<Path>, reason: impl Into<String>) -> FlashError {
    FlashError::DescriptorReadFailed {
        path: path.as_ref().display().to_string(),
        reason: reason.into(),
    }
}
