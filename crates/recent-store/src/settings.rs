//! Persistence of recent-file settings across application restarts.

use std::fs::{self, OpenOptions};
use std::io::Write;

use fs2::FileExt;
use recent_paths::NormalizedPath;
use serde::{Serialize, de::DeserializeOwned};

use crate::{Error, RecentFiles, Result};

/// Format-agnostic settings store.
///
/// The on-disk format is detected from the file extension — `.toml`,
/// `.json`, `.yaml`/`.yml`. Writes go to a temp file in the target directory
/// under an advisory lock and are renamed into place, so a crashed writer
/// never leaves a half-written settings file behind.
#[derive(Debug, Default)]
pub struct SettingsStore;

impl SettingsStore {
    pub fn new() -> Self {
        Self
    }

    /// Conventional settings location for `app_name` under the platform
    /// configuration directory, e.g. `~/.config/<app>/recent-files.json`.
    pub fn default_location(app_name: &str) -> Result<NormalizedPath> {
        let base = dirs::config_dir().ok_or(Error::NoConfigDir)?;
        Ok(NormalizedPath::new(base.join(app_name).join("recent-files.json")))
    }

    /// Load a settings value from `path`, format per extension.
    pub fn load<T: DeserializeOwned>(&self, path: &NormalizedPath) -> Result<T> {
        let native = path.to_native();
        let content = fs::read_to_string(&native).map_err(|e| Error::io(&native, e))?;
        tracing::debug!(%path, "loading settings");

        match extension_of(path)?.as_str() {
            "toml" => toml::from_str(&content).map_err(|e| Error::Parse {
                path: native,
                format: "TOML".into(),
                message: e.to_string(),
            }),
            "json" => serde_json::from_str(&content).map_err(|e| Error::Parse {
                path: native,
                format: "JSON".into(),
                message: e.to_string(),
            }),
            _ => serde_yaml::from_str(&content).map_err(|e| Error::Parse {
                path: native,
                format: "YAML".into(),
                message: e.to_string(),
            }),
        }
    }

    /// Save a settings value to `path` atomically, format per extension.
    pub fn save<T: Serialize>(&self, path: &NormalizedPath, value: &T) -> Result<()> {
        let content = match extension_of(path)?.as_str() {
            "toml" => toml::to_string_pretty(value).map_err(|e| Error::Serialize {
                path: path.to_native(),
                format: "TOML".into(),
                message: e.to_string(),
            })?,
            "json" => serde_json::to_string_pretty(value).map_err(|e| Error::Serialize {
                path: path.to_native(),
                format: "JSON".into(),
                message: e.to_string(),
            })?,
            _ => serde_yaml::to_string(value).map_err(|e| Error::Serialize {
                path: path.to_native(),
                format: "YAML".into(),
                message: e.to_string(),
            })?,
        };
        tracing::debug!(%path, "saving settings");
        write_atomic(path, content.as_bytes())
    }

    /// Load the recent-file list, falling back to an empty list when the
    /// file is missing or unreadable. A parse failure is logged and
    /// discarded rather than propagated; stale settings must never block
    /// application startup.
    pub fn load_or_default(&self, path: &NormalizedPath) -> RecentFiles {
        if !path.exists() {
            return RecentFiles::new();
        }
        match self.load(path) {
            Ok(list) => list,
            Err(e) => {
                tracing::warn!(%path, "discarding unreadable recent-file list: {e}");
                RecentFiles::new()
            }
        }
    }
}

fn extension_of(path: &NormalizedPath) -> Result<String> {
    let extension = path.extension().unwrap_or("").to_lowercase();
    match extension.as_str() {
        "toml" | "json" | "yaml" | "yml" => Ok(extension),
        _ => Err(Error::UnsupportedFormat { extension }),
    }
}

/// Write `content` via a locked temp file in the same directory, then rename
/// over the target.
fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let native = path.to_native();
    if let Some(parent) = native.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    // Same directory as the target so the rename stays on one filesystem.
    let temp_name = format!(
        ".{}.{}.tmp",
        native
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = native.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file
        .lock_exclusive()
        .map_err(|_| Error::LockFailed {
            path: native.clone(),
        })?;

    temp_file
        .write_all(content)
        .and_then(|()| temp_file.sync_all())
        .map_err(|e| Error::io(&temp_path, e))?;

    FileExt::unlock(&temp_file).map_err(|_| Error::LockFailed {
        path: native.clone(),
    })?;

    fs::rename(&temp_path, &native).map_err(|e| Error::io(&native, e))
}
