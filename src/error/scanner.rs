//! Media scanning errors

use std::path::Path;

use super::FlashError;

/// Creates a media root not found error
pub fn media_root_not_found(path: impl AsRef<Path>) -> FlashError {
    FlashError::MediaRootNotFound {
        path: path.as_ref().display().to_string(),
    }
}
