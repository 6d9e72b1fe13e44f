use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File looked up in the working directory at startup.
pub const SETTINGS_FILE: &str = "error_basics.toml";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Colourise results and errors on stdout.
    pub color: bool,
    /// `tracing` filter directive for the stderr diagnostics.
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            log_filter: "warn".to_string(),
        }
    }
}

impl Settings {
    pub fn parse(content: &str, path: &Path) -> Result<Self, SettingsError> {
        toml::from_str(content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `path`, falling back to defaults when it does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, SettingsError> {
        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content, path),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(SettingsError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Like [`Settings::load_or_default`], but an unreadable or malformed file
    /// also yields defaults. The error is handed back so the caller can log it
    /// once logging is up.
    pub fn load_or_fallback(path: &Path) -> (Self, Option<SettingsError>) {
        match Self::load_or_default(path) {
            Ok(settings) => (settings, None),
            Err(err) => (Self::default(), Some(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let settings = Settings::load_or_default(&dir.path().join(SETTINGS_FILE)).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_overrides() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "color = false\nlog_filter = \"error_basics=debug\"\n").unwrap();

        let settings = Settings::load_or_default(&path).unwrap();
        assert!(!settings.color);
        assert_eq!(settings.log_filter, "error_basics=debug");
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let settings = Settings::parse("color = false", Path::new("inline.toml")).unwrap();
        assert!(!settings.color);
        assert_eq!(settings.log_filter, "warn");
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = Settings::parse("colour = true", Path::new("typo.toml")).unwrap_err();
        assert!(matches!(err, SettingsError::Parse { .. }));
        assert!(err.to_string().contains("typo.toml"));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = Settings::parse("color = ", Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, SettingsError::Parse { .. }));
    }

    #[test]
    fn test_fallback_on_malformed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "colour = false\n").unwrap();

        let (settings, err) = Settings::load_or_fallback(&path);
        assert_eq!(settings, Settings::default());
        assert!(matches!(err, Some(SettingsError::Parse { .. })));
    }

    #[test]
    fn test_fallback_keeps_valid_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "color = false\n").unwrap();

        let (settings, err) = Settings::load_or_fallback(&path);
        assert!(!settings.color);
        assert!(err.is_none());
    }

    #[test]
    fn test_fallback_on_unreadable_file() {
        let dir = tempdir().unwrap();
        let (settings, err) = Settings::load_or_fallback(dir.path());
        assert_eq!(settings, Settings::default());
        assert!(matches!(err, Some(SettingsError::Read { .. })));
    }

    #[test]
    fn test_directory_is_read_error() {
        let dir = tempdir().unwrap();
        let err = Settings::load_or_default(dir.path()).unwrap_err();
        assert!(matches!(err, SettingsError::Read { .. }));
    }
}
