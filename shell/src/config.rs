//! Shell configuration.
//!
//! Persisted as pretty JSON under the local data directory. Every field
//! carries a serde default so configs written by older builds keep loading.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// How amounts are rendered across the UI.
///
/// Replaces the old process-global display toggle: the preference lives
/// here and views read it through the shell.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AmountDisplay {
    /// Native MRD units.
    Coin,
    /// Converted fiat estimate.
    Fiat,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ShellConfig {
    #[serde(default = "default_amount_display")]
    pub amount_display: AmountDisplay,

    /// Minimizing the window sends it to the tray instead of the taskbar.
    #[serde(default = "default_minimize_to_tray")]
    pub minimize_to_tray: bool,

    /// Closing the window hides it instead of quitting.
    #[serde(default = "default_minimize_on_close")]
    pub minimize_on_close: bool,

    /// Show incoming transaction/message popups even while the window
    /// is active.
    #[serde(default = "default_notify_when_active")]
    pub notify_when_active: bool,
}

fn default_amount_display() -> AmountDisplay {
    AmountDisplay::Coin
}

fn default_minimize_to_tray() -> bool {
    false
}

fn default_minimize_on_close() -> bool {
    true
}

fn default_notify_when_active() -> bool {
    false
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig {
            amount_display: default_amount_display(),
            minimize_to_tray: default_minimize_to_tray(),
            minimize_on_close: default_minimize_on_close(),
            notify_when_active: default_notify_when_active(),
        }
    }
}

impl ShellConfig {
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config: ShellConfig = serde_json::from_str(&contents)?;
            Ok(config)
        } else {
            let config = ShellConfig::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("Meridian")
            .join("shell_config.json")
    }
}
