//! Configuration management for Redactum
//!
//! Provider records live in a JSON document at
//! `<user config dir>/redactum/config.json`. The document holds API keys, so
//! it is written owner-only. Callers pass a [`ConfigStore`] explicitly; there
//! is no process-wide config singleton.

mod types;

pub use types::*;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{RedactumError, Result};

/// Environment variable that relocates the config directory.
pub const CONFIG_DIR_ENV: &str = "REDACTUM_CONFIG_DIR";

/// Load/save access to the persisted [`ProviderSet`].
pub trait ConfigStore {
    /// Read the provider set. A missing document yields the default set.
    fn load(&self) -> Result<ProviderSet>;

    /// Replace the persisted provider set.
    fn save(&self, set: &ProviderSet) -> Result<()>;
}

/// [`ConfigStore`] backed by a JSON file.
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    /// Store at the default per-user location.
    pub fn new() -> Self {
        Self::at(Self::default_path())
    }

    /// Store at an explicit file path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the Redactum configuration directory.
    ///
    /// `REDACTUM_CONFIG_DIR` wins; otherwise the platform config dir
    /// (`~/.config/redactum` on Linux).
    pub fn dir() -> PathBuf {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            if !dir.trim().is_empty() {
                return PathBuf::from(dir);
            }
        }
        dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join("redactum")
    }

    /// Returns the path to the config file.
    pub fn default_path() -> PathBuf {
        Self::dir().join("config.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Result<ProviderSet> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "No config file, using defaults");
            return Ok(ProviderSet::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            RedactumError::Config(format!("failed to read {}: {}", self.path.display(), e))
        })?;
        let set = serde_json::from_str(&content).map_err(|e| {
            RedactumError::Config(format!("failed to parse {}: {}", self.path.display(), e))
        })?;
        Ok(set)
    }

    fn save(&self, set: &ProviderSet) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    RedactumError::Config(format!(
                        "failed to create {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let content = serde_json::to_string_pretty(set)?;
        write_private(&self.path, content.as_bytes()).map_err(|e| {
            RedactumError::Config(format!("failed to write {}: {}", self.path.display(), e))
        })?;
        debug!(path = %self.path.display(), providers = set.providers.len(), "Config saved");
        Ok(())
    }
}

/// Write `content` to `path`, readable and writable by the owner only.
#[cfg(unix)]
fn write_private(path: &Path, content: &[u8]) -> std::io::Result<()> {
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    // mode() only applies on creation
    file.set_permissions(fs::Permissions::from_mode(0o600))?;
    file.write_all(content)?;
    file.sync_all()
}

#[cfg(not(unix))]
fn write_private(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(content)?;
    file.sync_all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_file_returns_default() {
        let dir = tempdir().unwrap();
        let store = FileConfigStore::at(dir.path().join("config.json"));
        let set = store.load().unwrap();
        assert_eq!(set, ProviderSet::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let store = FileConfigStore::at(dir.path().join("nested").join("config.json"));

        let mut set = ProviderSet::default();
        set.upsert_active(ProviderRecord::new(
            "groq",
            "gsk_test",
            "llama-3.3-70b-versatile",
            "https://api.groq.com/openai/v1/chat/completions",
        ));
        store.save(&set).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, set);
    }

    #[test]
    fn test_saved_document_shape() {
        let dir = tempdir().unwrap();
        let store = FileConfigStore::at(dir.path().join("config.json"));
        let mut set = ProviderSet::default();
        set.upsert_active(ProviderRecord::new("openai", "sk", "gpt-4o", "https://x"));
        store.save(&set).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(raw["active_provider"], "openai");
        assert_eq!(raw["providers"]["openai"]["name"], "openai");
        assert_eq!(raw["providers"]["openai"]["api_key"], "sk");
        assert_eq!(raw["providers"]["openai"]["model"], "gpt-4o");
        assert_eq!(raw["providers"]["openai"]["base_url"], "https://x");
    }

    #[cfg(unix)]
    #[test]
    fn test_save_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{}").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        let store = FileConfigStore::at(&path);
        store.save(&ProviderSet::default()).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600);
    }

    #[test]
    fn test_load_invalid_json_is_config_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{not json").unwrap();

        let err = FileConfigStore::at(&path).load().unwrap_err();
        assert!(matches!(err, RedactumError::Config(_)));
        assert!(err.to_string().contains("failed to parse"));
    }

    #[test]
    fn test_save_reports_directory_it_could_not_create() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let store = FileConfigStore::at(blocker.join("redactum").join("config.json"));

        let err = store.save(&ProviderSet::default()).unwrap_err();
        assert!(matches!(err, RedactumError::Config(_)));
        let msg = err.to_string();
        assert!(msg.contains("failed to create"), "got {}", msg);
        assert!(msg.contains("blocker"), "got {}", msg);
    }

    #[test]
    fn test_load_tolerates_dangling_active_provider() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"active_provider":"ghost","providers":{}}"#).unwrap();

        let set = FileConfigStore::at(&path).load().unwrap();
        assert_eq!(set.active_provider, "ghost");
    }

    #[test]
    fn test_default_path_ends_with_config_json() {
        let path = FileConfigStore::default_path();
        assert!(path.ends_with("config.json"));
    }
}
