//! Bundle descriptor (.properties) parsing
//!
//! A descriptor is a properties-format text file identifying an update
//! bundle and pointing at its sub-resources. Required keys: `device`,
//! `hash`, `instructions`, `images`. The two path-valued keys are resolved
//! relative to the descriptor's containing directory.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, descriptor_read_failed, missing_field};

/// File extension by which the scanner recognizes candidate descriptors
pub const DESCRIPTOR_EXTENSION: &str = "properties";

/// Required descriptor keys, in reporting order
const REQUIRED_FIELDS: &[&str] = &["device", "hash", "instructions", "images"];

/// A parsed bundle descriptor with sub-resource paths resolved
#[derive(Debug, Clone)]
pub struct BundleDescriptor {
    /// Opaque device identifier
    pub device: String,
    /// Opaque content hash; presence is required, the value is not checked
    pub hash: String,
    /// The descriptor file itself
    pub path: PathBuf,
    /// Resolved path to the instructions document
    pub instructions: PathBuf,
    /// Resolved path to the image collection directory
    pub images: PathBuf,
}

impl BundleDescriptor {
    /// Load and parse a descriptor file, checking required keys
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|e| descriptor_read_failed(path, e.to_string()))?;
        let entries = parse_properties(&content);

        for field in REQUIRED_FIELDS {
            if !entries.contains_key(*field) {
                return Err(missing_field(*field));
            }
        }

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        let get = |key: &str| entries.get(key).cloned().unwrap_or_default();

        Ok(Self {
            device: get("device"),
            hash: get("hash"),
            path: path.to_path_buf(),
            instructions: resolve_relative(base, &get("instructions")),
            images: resolve_relative(base, &get("images")),
        })
    }
}

/// Resolve a descriptor value against the descriptor's directory.
///
/// Values are always sub-resource paths; leading separators are stripped so
/// a value like `/imgs` resolves under the descriptor's directory rather
/// than the filesystem root.
fn resolve_relative(base: &Path, value: &str) -> PathBuf {
    base.join(value.trim_start_matches(['/', '\\']))
}

/// Parse properties-format text into a key-value map.
///
/// One `key=value` pair per line (`:` is accepted as an alternate
/// separator). Blank lines and lines starting with `#` or `!` are ignored.
/// A line with no separator yields the key with an empty value.
pub fn parse_properties(content: &str) -> HashMap<String, String> {
    let mut entries = HashMap::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }

        match split_key_value(line) {
            Some((key, value)) => {
                entries.insert(unescape(key.trim()), unescape(value.trim()));
            }
            None => {
                entries.insert(unescape(line), String::new());
            }
        }
    }

    entries
}

/// Split a line at the first unescaped `=` or `:`
fn split_key_value(line: &str) -> Option<(&str, &str)> {
    let mut escaped = false;
    for (idx, ch) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            '=' | ':' => return Some((&line[..idx], &line[idx + 1..])),
            _ => {}
        }
    }
    None
}

/// Resolve backslash escapes: `\t`, `\n`, `\r`, `\\`; any other escaped
/// character is kept literally (so `\=` and `\:` survive key splitting)
fn unescape(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }
        match chars.next() {
            Some('t') => result.push('\t'),
            Some('n') => result.push('\n'),
            Some('r') => result.push('\r'),
            Some(other) => result.push(other),
            None => result.push('\\'),
        }
    }

    result
}
