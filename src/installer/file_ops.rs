//! Staged replace operations for destination resources
//!
//! A resource is first copied to a temporary sibling under the storage root
//! and only then moved onto its destination name, so readers of the
//! destination never observe a partially written file or directory.

use std::fs;
use std::io;
use std::path::Path;

use crate::common::fs::copy_dir_recursive;

/// Ensure a directory exists
pub fn ensure_dir(path: &Path) -> io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Replace the destination file `storage_root/name` with a staged copy of
/// `source`
pub fn stage_file_replace(source: &Path, storage_root: &Path, name: &str) -> io::Result<()> {
    let staged = tempfile::Builder::new()
        .prefix(".staged-")
        .tempfile_in(storage_root)?;
    fs::copy(source, staged.path())?;

    let destination = storage_root.join(name);
    remove_existing(&destination)?;
    staged.persist(&destination).map_err(|e| e.error)?;

    Ok(())
}

/// Replace the destination directory `storage_root/name` with a staged
/// recursive copy of `source`. The old tree is removed only after the
/// staged copy has fully succeeded.
pub fn stage_dir_replace(source: &Path, storage_root: &Path, name: &str) -> io::Result<()> {
    if !source.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("source directory not found: {}", source.display()),
        ));
    }

    let staging = tempfile::Builder::new()
        .prefix(".staged-")
        .tempdir_in(storage_root)?;
    let staged_copy = staging.path().join(name);
    copy_dir_recursive(source, &staged_copy)?;

    let destination = storage_root.join(name);
    remove_existing(&destination)?;
    fs::rename(&staged_copy, &destination)?;

    Ok(())
}

/// Remove whatever currently occupies a destination path
fn remove_existing(path: &Path) -> io::Result<()> {
    if path.is_dir() {
        fs::remove_dir_all(path)?;
    } else if path.exists() {
        fs::remove_file(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_stage_file_replace_over_existing() {
        let temp = TempDir::new_in(crate::temp::temp_dir_base()).unwrap();
        let source = temp.path().join("new.json");
        fs::write(&source, "new").unwrap();
        let storage = temp.path().join("storage");
        fs::create_dir_all(&storage).unwrap();
        fs::write(storage.join("instructions"), "old").unwrap();

        stage_file_replace(&source, &storage, "instructions").unwrap();

        assert_eq!(
            fs::read_to_string(storage.join("instructions")).unwrap(),
            "new"
        );
    }

    #[test]
    fn test_stage_file_replace_over_directory_remnant() {
        let temp = TempDir::new_in(crate::temp::temp_dir_base()).unwrap();
        let source = temp.path().join("new.json");
        fs::write(&source, "new").unwrap();
        let storage = temp.path().join("storage");
        fs::create_dir_all(storage.join("instructions")).unwrap();

        stage_file_replace(&source, &storage, "instructions").unwrap();

        assert!(storage.join("instructions").is_file());
    }

    #[test]
    fn test_stage_dir_replace_missing_source() {
        let temp = TempDir::new_in(crate::temp::temp_dir_base()).unwrap();
        let storage = temp.path().join("storage");
        fs::create_dir_all(&storage).unwrap();

        let err = stage_dir_replace(&temp.path().join("gone"), &storage, "images").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_stage_dir_replace_swaps_whole_tree() {
        let temp = TempDir::new_in(crate::temp::temp_dir_base()).unwrap();
        let source = temp.path().join("imgs");
        fs::create_dir_all(&source).unwrap();
        fs::write(source.join("0.png"), "img").unwrap();
        let storage = temp.path().join("storage");
        fs::create_dir_all(storage.join("images")).unwrap();
        fs::write(storage.join("images/5.jpg"), "stale").unwrap();

        stage_dir_replace(&source, &storage, "images").unwrap();

        assert!(storage.join("images/0.png").exists());
        assert!(!storage.join("images/5.jpg").exists());
    }
}
