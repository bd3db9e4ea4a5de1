// Configuration: where the three text files live and when to suggest a
// cleanup. Defaults match the conventional file names in the working
// directory; `download-log.json` next to them may override any field.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE: &str = "download-log.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub store_path: PathBuf,
    pub report_path: PathBuf,
    pub backup_path: PathBuf,
    /// A category at or above this many records triggers the cleanup hint.
    pub cleanup_threshold: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            store_path: "downloads.txt".into(),
            report_path: "summary.txt".into(),
            backup_path: "backup.txt".into(),
            cleanup_threshold: 5,
        }
    }
}

impl AppConfig {
    /// Defaults with every file placed under `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        AppConfig::default().resolve(dir.as_ref())
    }

    /// Read `dir/download-log.json` if present, otherwise use defaults.
    /// Relative paths are resolved against `dir`.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let dir = dir.as_ref();
        let path = dir.join(CONFIG_FILE);
        let config = match std::fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str::<AppConfig>(&text)
                .map_err(|source| ConfigError::Parse {
                    path: path.clone(),
                    source,
                })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => AppConfig::default(),
            Err(source) => return Err(ConfigError::Read { path, source }),
        };
        log::debug!("using config {:?}", config);
        Ok(config.resolve(dir))
    }

    fn resolve(self, dir: &Path) -> Self {
        let join = |p: PathBuf| if p.is_absolute() { p } else { dir.join(p) };
        AppConfig {
            store_path: join(self.store_path),
            report_path: join(self.report_path),
            backup_path: join(self.backup_path),
            cleanup_threshold: self.cleanup_threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(dir.path()).unwrap();
        assert_eq!(config, AppConfig::in_dir(dir.path()));
        assert_eq!(config.store_path, dir.path().join("downloads.txt"));
        assert_eq!(config.report_path, dir.path().join("summary.txt"));
        assert_eq!(config.backup_path, dir.path().join("backup.txt"));
        assert_eq!(config.cleanup_threshold, 5);
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            r#"{ "backup_path": "old/backup.txt", "cleanup_threshold": 3 }"#,
        )
        .unwrap();
        let config = AppConfig::load(dir.path()).unwrap();
        assert_eq!(config.backup_path, dir.path().join("old/backup.txt"));
        assert_eq!(config.store_path, dir.path().join("downloads.txt"));
        assert_eq!(config.cleanup_threshold, 3);
    }

    #[test]
    fn invalid_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "{ not json").unwrap();
        let err = AppConfig::load(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }), "{err:?}");
    }
}
