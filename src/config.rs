//! Optional `snippets.toml` settings

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "snippets.toml";
pub const DEFAULT_DATABASE: &str = "snippets.db";
pub const DEFAULT_LOG_FILE: &str = "snippets.log";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SnippetsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl SnippetsConfig {
    /// Config pointing at a specific database file
    pub fn for_database(database: &Path) -> Self {
        Self {
            database: Some(database.to_path_buf()),
            ..Self::default()
        }
    }

    /// Read settings from `path` (or `snippets.toml`). A missing file yields `None`.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Option<Self>> {
        let path = path.unwrap_or(Path::new(CONFIG_FILE));
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err).with_context(|| format!("reading {}", path.display()));
            }
        };

        let config = toml::from_str(&contents)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(Some(config))
    }

    /// Write settings to `path`; an existing file is only replaced with `force`.
    pub fn save(&self, path: &Path, force: bool) -> anyhow::Result<()> {
        if path.exists() && !force {
            anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents).with_context(|| format!("writing {}", path.display()))
    }

    pub fn database_path(&self) -> PathBuf {
        self.database.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE))
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_file.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = SnippetsConfig::load(Some(&dir.path().join("absent.toml"))).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let config = SnippetsConfig::for_database(Path::new("data/notes.db"));

        config.save(&path, false).unwrap();
        let loaded = SnippetsConfig::load(Some(&path)).unwrap().unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.database_path(), PathBuf::from("data/notes.db"));
        assert_eq!(loaded.log_path(), PathBuf::from(DEFAULT_LOG_FILE));
    }

    #[test]
    fn test_save_refuses_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let config = SnippetsConfig::default();

        config.save(&path, false).unwrap();
        assert!(config.save(&path, false).is_err());
        config.save(&path, true).unwrap();
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "databse = \"typo.db\"\n").unwrap();

        let err = SnippetsConfig::load(Some(&path)).unwrap_err();
        assert!(format!("{:#}", err).contains("parsing"));
    }

    #[test]
    fn test_defaults() {
        let config = SnippetsConfig::default();
        assert_eq!(config.database_path(), PathBuf::from(DEFAULT_DATABASE));
        assert_eq!(config.log_path(), PathBuf::from(DEFAULT_LOG_FILE));
    }
}
