//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

/// Runtime configuration for the request-document runner.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Master switch; nothing runs when false.
    pub enable: bool,

    /// Whether the host should associate the document file extension
    /// with this tool automatically.
    pub detect: bool,

    /// Directory where request documents are created and listed.
    /// Empty = fall back to `~/.post`, then host storage.
    pub root: String,

    /// Proxy URL for outbound requests. Empty = direct connection.
    pub agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enable: true,
            detect: true,
            root: String::new(),
            agent: String::new(),
        }
    }
}
