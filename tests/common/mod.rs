//! Common test utilities for Flashsync integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A media root and storage root pair for integration tests
#[allow(dead_code)]
pub struct TestMedia {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Directory whose subdirectories play the role of removable mounts
    pub media_root: PathBuf,
    /// Destination storage root
    pub storage_root: PathBuf,
}

#[allow(dead_code)]
impl TestMedia {
    /// Create a new test media layout with an empty media root
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let media_root = temp.path().join("media");
        let storage_root = temp.path().join("storage");
        std::fs::create_dir_all(&media_root).expect("Failed to create media root");
        Self {
            temp,
            media_root,
            storage_root,
        }
    }

    /// Create a mount directory under the media root
    pub fn create_mount(&self, name: &str) -> PathBuf {
        let mount = self.media_root.join(name);
        std::fs::create_dir_all(&mount).expect("Failed to create mount directory");
        mount
    }

    /// Write a complete well-formed bundle into a mount directory.
    ///
    /// Descriptor: `device=X`, `hash=Y`, instructions `./i.json` containing
    /// `{"a":1}`, images `./imgs` containing `0.png`. Returns the descriptor
    /// path.
    pub fn write_valid_bundle(&self, mount_name: &str) -> PathBuf {
        let mount = self.create_mount(mount_name);
        let descriptor = mount.join("update.properties");
        std::fs::write(
            &descriptor,
            "device=X\nhash=Y\ninstructions=./i.json\nimages=./imgs\n",
        )
        .expect("Failed to write descriptor");
        std::fs::write(mount.join("i.json"), r#"{"a":1}"#)
            .expect("Failed to write instructions");
        std::fs::create_dir_all(mount.join("imgs")).expect("Failed to create image directory");
        std::fs::write(mount.join("imgs/0.png"), "png-bytes").expect("Failed to write image");
        descriptor
    }

    /// Write a file relative to a mount directory
    pub fn write_file(&self, mount_name: &str, path: &str, content: &str) -> PathBuf {
        let file_path = self.media_root.join(mount_name).join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Read a file from the storage root
    pub fn read_storage(&self, path: &str) -> String {
        std::fs::read_to_string(self.storage_root.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in the storage root
    pub fn storage_exists(&self, path: &str) -> bool {
        self.storage_root.join(path).exists()
    }
}
