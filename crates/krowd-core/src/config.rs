//! Config file resolution
//!
//! Catalog and settings files use a two-layer resolution:
//! 1. An explicit override path, or the data dir
//!    (~/.local/share/krowd/config/<file>)
//! 2. Fall back to built-in defaults (compiled into binary)

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Venue catalog file name
pub const CATALOG_FILE: &str = "cities.toml";
/// Alert settings file name
pub const SETTINGS_FILE: &str = "settings.toml";

/// Where a config value came from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConfigSource {
    /// Read from a file on disk
    File(PathBuf),
    /// Built-in defaults
    #[default]
    Builtin,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::Builtin => write!(f, "built-in defaults"),
        }
    }
}

/// Directory holding user config overrides
pub fn config_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("krowd").join("config"))
}

/// Default override path for a config file
pub fn default_config_path(file_name: &str) -> Option<PathBuf> {
    config_dir().map(|d| d.join(file_name))
}

/// Decide which file to read for `file_name`
///
/// An explicit path that does not exist falls back to built-in defaults
/// without consulting the data dir.
pub fn locate(override_path: Option<&Path>, file_name: &str) -> ConfigSource {
    if let Some(path) = override_path {
        if path.exists() {
            return ConfigSource::File(path.to_path_buf());
        }
        tracing::warn!(
            path = %path.display(),
            "Config override not found, using built-in defaults"
        );
        return ConfigSource::Builtin;
    }

    match default_config_path(file_name) {
        Some(path) if path.exists() => ConfigSource::File(path),
        _ => ConfigSource::Builtin,
    }
}

/// Read the file behind `source`; `None` means use built-in defaults
pub fn read_source(source: &ConfigSource) -> Result<Option<String>> {
    match source {
        ConfigSource::File(path) => Ok(Some(fs::read_to_string(path)?)),
        ConfigSource::Builtin => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_locate_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "proactive_alerts = false").unwrap();

        let source = locate(Some(file.path()), SETTINGS_FILE);
        assert_eq!(source, ConfigSource::File(file.path().to_path_buf()));

        let content = read_source(&source).unwrap().unwrap();
        assert!(content.contains("proactive_alerts"));
    }

    #[test]
    fn test_locate_missing_override_uses_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        let source = locate(Some(&missing), CATALOG_FILE);
        assert_eq!(source, ConfigSource::Builtin);
        assert!(read_source(&source).unwrap().is_none());
        assert_eq!(source.to_string(), "built-in defaults");
    }

    #[test]
    fn test_default_config_path_layout() {
        if let Some(path) = default_config_path(CATALOG_FILE) {
            assert!(path.ends_with("krowd/config/cities.toml"));
        }
    }
}
