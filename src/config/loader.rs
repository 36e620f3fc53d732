//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::Config;

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&content).map_err(ConfigError::Parse)
}

/// Load configuration when a file is given and present; otherwise use
/// defaults. Only a file that exists but cannot be read or parsed is an
/// error.
pub fn load_or_default(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) if path.exists() => load_config(path),
        _ => Ok(Config::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn absent_path_yields_defaults() {
        assert_eq!(load_or_default(None).unwrap(), Config::default());
        let missing = env::temp_dir().join("reqdoc-no-such-config.toml");
        assert_eq!(
            load_or_default(Some(&missing)).unwrap(),
            Config::default()
        );
    }

    #[test]
    fn present_file_is_parsed() {
        let path = env::temp_dir().join(format!("reqdoc-config-{}.toml", std::process::id()));
        fs::write(&path, "enable = false\nroot = \"/srv/posts\"\n").unwrap();
        let config = load_config(&path).unwrap();
        assert!(!config.enable);
        assert_eq!(config.root, "/srv/posts");
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let path = env::temp_dir().join(format!("reqdoc-bad-config-{}.toml", std::process::id()));
        fs::write(&path, "enable = maybe").unwrap();
        assert!(matches!(
            load_config(&path),
            Err(ConfigError::Parse(_))
        ));
        fs::remove_file(&path).unwrap();
    }
}
