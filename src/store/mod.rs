//! Saved request-document directory.
//!
//! # Responsibilities
//! - Resolve the document root: configured path, then `~/.post`, then a
//!   host-supplied fallback
//! - List saved documents for the picker
//! - Produce the path for a newly created document
//!
//! # Design Decisions
//! - A missing root directory is an empty listing, not an error
//! - Listings are sorted so picker output is stable across platforms

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::Config;

/// Conventional dot-directory under the user's home.
const HOME_DIR_NAME: &str = ".post";

/// Resolve the directory where request documents live.
pub fn resolve_root(config: &Config, fallback: &Path) -> PathBuf {
    if !config.root.is_empty() {
        return PathBuf::from(&config.root);
    }
    if let Some(home) = env::var_os("HOME") {
        return Path::new(&home).join(HOME_DIR_NAME);
    }
    fallback.to_path_buf()
}

/// List the saved documents under `root`, sorted by name. A missing
/// directory yields an empty list.
pub fn list(root: &Path) -> Vec<String> {
    let Ok(entries) = fs::read_dir(root) else {
        return Vec::new();
    };
    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();
    names.sort();
    names
}

/// Create the root directory if needed and return the path of a new
/// document named `<name>.post`.
pub fn new_document(root: &Path, name: &str) -> io::Result<PathBuf> {
    let name = name.trim();
    if name.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "document name is empty",
        ));
    }
    fs::create_dir_all(root)?;
    Ok(root.join(format!("{name}.post")))
}
