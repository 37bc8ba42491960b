//! Settings file (`~/.config/menu-dat/settings.toml`) and data-directory
//! resolution.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use menu_dat_core::ExtraTranslations;

/// Canonical path to the settings file: `~/.config/menu-dat/settings.toml`.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("menu-dat").join("settings.toml")
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub paths: PathSettings,
    pub save: SaveSettings,
    #[serde(skip_serializing_if = "ExtraTranslations::is_empty")]
    pub translations: ExtraTranslations,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct PathSettings {
    /// Directory holding BOX.DAT, ICON.DAT and META.DAT
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    /// Where timestamped backups go (default: `<data_dir>/backup`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct SaveSettings {
    /// Copy the existing file aside before every save
    pub backup: bool,
    /// Save anyway when the backup copy fails
    pub proceed_without_backup: bool,
}

impl Default for SaveSettings {
    fn default() -> Self {
        Self {
            backup: true,
            proceed_without_backup: false,
        }
    }
}

/// Where the data directory came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DataDirSource {
    CommandLine,
    Settings,
    CurrentDir,
}

impl std::fmt::Display for DataDirSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CommandLine => write!(f, "--data-dir"),
            Self::Settings => write!(f, "settings.toml"),
            Self::CurrentDir => write!(f, "current directory"),
        }
    }
}

impl Settings {
    pub(crate) fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Load the settings file, falling back to defaults when it is missing
    /// or cannot be parsed.
    pub(crate) fn load() -> Self {
        Self::load_from(&settings_path())
    }

    pub(crate) fn load_from(path: &Path) -> Self {
        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                log::warn!("Could not read {}: {}", path.display(), e);
                return Self::default();
            }
        };
        match Self::from_toml(&contents) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!(
                    "Ignoring invalid settings file {}: {}",
                    path.display(),
                    e.message()
                );
                Self::default()
            }
        }
    }

    /// Save to the canonical settings path.
    pub(crate) fn save(&self) -> io::Result<()> {
        self.save_to(&settings_path())
    }

    /// Write atomically: serialize to `<path>.toml.tmp`, then rename over.
    pub(crate) fn save_to(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let serialized = toml::to_string_pretty(self).map_err(io::Error::other)?;
        let tmp = path.with_extension("toml.tmp");
        std::fs::write(&tmp, &serialized)?;
        std::fs::rename(&tmp, path)?;
        Ok(())
    }

    /// Resolve the data directory using a priority chain:
    ///
    /// 1. CLI override (if `Some`)
    /// 2. `paths.data_dir` in `settings.toml`
    /// 3. Current working directory
    pub(crate) fn resolve_data_dir(&self, cli_override: Option<PathBuf>) -> (PathBuf, DataDirSource) {
        if let Some(p) = cli_override {
            return (p, DataDirSource::CommandLine);
        }
        if let Some(p) = self.paths.data_dir.as_ref().filter(|p| !p.as_os_str().is_empty()) {
            return (p.clone(), DataDirSource::Settings);
        }
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        (cwd, DataDirSource::CurrentDir)
    }

    /// Backup directory for containers stored in `data_dir`.
    pub(crate) fn backup_dir(&self, data_dir: &Path) -> PathBuf {
        self.paths
            .backup_dir
            .clone()
            .unwrap_or_else(|| data_dir.join("backup"))
    }
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
