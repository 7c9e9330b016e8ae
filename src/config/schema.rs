use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/dacapo/config.toml` or `~/.config/dacapo/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `DACAPO__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub storage: StorageSettings,
    pub playback: PlaybackSettings,
    pub navigation: NavigationSettings,
    pub gallery: GallerySettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Key the archive snapshot is persisted under. Versioned by naming
    /// convention; bump the suffix when the payload shape changes.
    pub key: String,
    /// Directory for the file backend. `None` means the XDG default
    /// (`$XDG_DATA_HOME/dacapo` or `~/.local/share/dacapo`).
    pub data_dir: Option<std::path::PathBuf>,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            key: "dacapo_archive_v1".to_string(),
            data_dir: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Watchdog for endpoint attempts that hang without firing any signal
    /// (milliseconds). Set to 0 to disable.
    pub attempt_timeout_ms: u64,
    /// Length of the cache-defeating nonce appended to each endpoint.
    pub nonce_len: usize,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            attempt_timeout_ms: 15_000,
            nonce_len: 12,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NavigationSettings {
    /// Suppression window after a programmatic selection, during which
    /// externally observed marker changes are ignored (milliseconds).
    pub guard_window_ms: u64,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self { guard_window_ms: 100 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GallerySettings {
    /// How many tracks an album shows before the list is expanded.
    pub collapsed_tracks: usize,
}

impl Default for GallerySettings {
    fn default() -> Self {
        Self { collapsed_tracks: 8 }
    }
}
