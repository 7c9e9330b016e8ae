//! Pluggable key-value persistence backends.
//!
//! The store treats persistence as a tiny string key-value interface so the
//! actual medium stays an embedder choice: an in-memory map for tests, a
//! directory of files on desktop, or whatever the host platform offers.

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

/// Key-value persistence used by the archive store.
///
/// Writes are full-snapshot overwrites; there is no incremental update.
pub trait StorageBackend {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> io::Result<()>;
    fn remove(&mut self, key: &str);
}

/// In-memory backend, mainly for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// File-per-key backend rooted at a directory.
#[derive(Debug)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Backend rooted at the default data directory, when one can be
    /// resolved from the environment.
    pub fn default_location() -> Option<Self> {
        default_data_dir().map(Self::new)
    }

    /// Backend rooted at the configured `storage.data_dir`, or the default
    /// data directory when none is configured.
    pub fn from_settings(settings: &crate::config::StorageSettings) -> Option<Self> {
        match &settings.data_dir {
            Some(dir) => Some(Self::new(dir.clone())),
            None => Self::default_location(),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileBackend {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.path_for(key), value)
    }

    fn remove(&mut self, key: &str) {
        let _ = std::fs::remove_file(self.path_for(key));
    }
}

/// Compute the default data directory under `$XDG_DATA_HOME/dacapo`
/// or `~/.local/share/dacapo` when `XDG_DATA_HOME` is not set.
pub fn default_data_dir() -> Option<PathBuf> {
    let data_home = if let Some(xdg) = std::env::var_os("XDG_DATA_HOME") {
        Some(PathBuf::from(xdg))
    } else if let Some(home) = std::env::var_os("HOME") {
        Some(PathBuf::from(home).join(".local").join("share"))
    } else {
        None
    };

    data_home.map(|d| d.join("dacapo"))
}
