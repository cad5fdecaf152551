//! Application settings: library root, emulator location, ledger location.
//!
//! Stored at `~/.config/ctr-playtime/settings.toml`. Values are resolved once
//! (command-line override, then the settings file, then a default) and the
//! resulting [`Settings`] is passed by value to whatever needs it.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::ledger::LEDGER_FILE_NAME;

/// Emulator binary looked up when `emulator_path` names a directory.
pub const EMULATOR_BINARY: &str = if cfg!(windows) {
    "citra-qt.exe"
} else {
    "citra-qt"
};

/// Canonical path to the settings file: `~/.config/ctr-playtime/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("ctr-playtime").join("settings.toml")
}

/// Default ledger location: next to the installed executable.
pub fn default_ledger_path() -> PathBuf {
    let base = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));
    base.join(LEDGER_FILE_NAME)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory scanned recursively for cartridge images.
    pub roms_path: Option<PathBuf>,
    /// Emulator executable, or the directory containing it.
    pub emulator_path: Option<PathBuf>,
    /// Overrides [`default_ledger_path`].
    pub ledger_path: Option<PathBuf>,
}

impl Settings {
    /// Load from [`settings_path`]. A missing file yields defaults.
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from(&settings_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(SettingsError::io(path, e)),
        };
        toml::from_str(&contents).map_err(|e| SettingsError::Parse {
            path: path.display().to_string(),
            source: e,
        })
    }

    /// Save to [`settings_path`].
    pub fn save(&self) -> Result<(), SettingsError> {
        self.save_to(&settings_path())
    }

    /// Write atomically (temp file + rename).
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::io(parent, e))?;
        }
        let serialized = toml::to_string_pretty(self)?;
        let tmp = path.with_extension("toml.tmp");
        std::fs::write(&tmp, &serialized).map_err(|e| SettingsError::io(&tmp, e))?;
        std::fs::rename(&tmp, path).map_err(|e| SettingsError::io(path, e))?;
        Ok(())
    }

    /// Apply command-line overrides; `None` keeps the stored value.
    pub fn with_overrides(
        mut self,
        roms_path: Option<PathBuf>,
        emulator_path: Option<PathBuf>,
        ledger_path: Option<PathBuf>,
    ) -> Self {
        if roms_path.is_some() {
            self.roms_path = roms_path;
        }
        if emulator_path.is_some() {
            self.emulator_path = emulator_path;
        }
        if ledger_path.is_some() {
            self.ledger_path = ledger_path;
        }
        self
    }

    /// Library root, falling back to the current directory.
    pub fn roms_root(&self) -> PathBuf {
        self.roms_path.clone().unwrap_or_else(|| {
            std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
        })
    }

    /// Emulator binary to launch. A directory gets [`EMULATOR_BINARY`] appended.
    pub fn emulator_executable(&self) -> Option<PathBuf> {
        let path = self.emulator_path.as_ref()?;
        if path.is_dir() {
            Some(path.join(EMULATOR_BINARY))
        } else {
            Some(path.clone())
        }
    }

    pub fn ledger_file(&self) -> PathBuf {
        self.ledger_path.clone().unwrap_or_else(default_ledger_path)
    }
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
