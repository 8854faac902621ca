use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const STORAGE_FILE: &str = "storage.json";

pub const TOKEN_KEY: &str = "token";
pub const USER_ID_KEY: &str = "userId";
pub const CHAT_ID_KEY: &str = "chatId";
pub const CHAT_TITLE_KEY: &str = "chatTitle";

/// Persistent string key-value store, written through on every change.
///
/// Holds the auth token plus convenience copies of the session
/// identifiers so they survive a restart.
#[derive(Debug, Default)]
pub struct LocalStore {
    path: Option<PathBuf>,
    values: BTreeMap<String, String>,
}

impl LocalStore {
    /// Open (or lazily create) `storage.json` inside `dir`
    pub fn open(dir: &Path) -> Result<Self> {
        let path = dir.join(STORAGE_FILE);

        let values = if path.exists() {
            let json = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read local storage: {}", path.display()))?;
            if json.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&json)
                    .with_context(|| format!("Failed to parse local storage: {}", path.display()))?
            }
        } else {
            BTreeMap::new()
        };

        Ok(Self { path: Some(path), values })
    }

    /// A store that never touches disk
    pub fn in_memory() -> Self {
        Self::default()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) -> Result<()> {
        self.values.insert(key.to_string(), value.into());
        self.flush()
    }

    pub fn remove(&mut self, key: &str) -> Result<()> {
        if self.values.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(&self.values)
            .context("Failed to serialize local storage")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write local storage: {}", path.display()))
    }
}
