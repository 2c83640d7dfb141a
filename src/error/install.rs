//! Install errors

use super::FlashError;

/// Creates a replace failed error for one destination resource
pub fn replace_failed(resource: impl Into<String>, reason: impl Into<String>) -> FlashError {
    FlashError::ReplaceFailed {
        resource: resource.into(),
        reason: reason.into(),
    }
}
