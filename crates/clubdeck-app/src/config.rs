//! Settings loaded from `.clubdeck/config.toml`.
//!
//! Every field has a default; a missing file is normal and an unparsable
//! one degrades to defaults with a warning.

use std::path::Path;

use serde::{Deserialize, Serialize};

use clubdeck_core::prelude::*;
use clubdeck_core::Role;

const CONFIG_FILENAME: &str = "config.toml";
const CLUBDECK_DIR: &str = ".clubdeck";

/// Top-level settings.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub demo: DemoSettings,
}

/// Demo behavior knobs.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DemoSettings {
    /// Starting role. `None` means the demo default (highest privilege).
    pub default_role: Option<Role>,

    /// Start as guest, ignoring `default_role`.
    pub start_as_guest: bool,

    /// Offer window for the countdown banner.
    pub offer_hours: u64,

    /// Auto-advance interval for the feature carousel.
    pub carousel_interval_ms: u64,

    /// Show the countdown banner at startup.
    pub show_banner: bool,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            default_role: None,
            start_as_guest: false,
            offer_hours: 72,
            carousel_interval_ms: 5000,
            show_banner: true,
        }
    }
}

/// Load settings from `<dir>/.clubdeck/config.toml`, falling back to
/// defaults when the file is missing or invalid.
pub fn load_settings(dir: &Path) -> Settings {
    let path = dir.join(CLUBDECK_DIR).join(CONFIG_FILENAME);
    let raw = match std::fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(_) => {
            debug!("no config at {}, using defaults", path.display());
            return Settings::default();
        }
    };
    match toml::from_str(&raw) {
        Ok(settings) => {
            info!("loaded settings from {}", path.display());
            settings
        }
        Err(e) => {
            warn!("invalid config at {} ({e}); using defaults", path.display());
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.demo.offer_hours, 72);
        assert_eq!(settings.demo.carousel_interval_ms, 5000);
        assert!(settings.demo.show_banner);
        assert_eq!(settings.demo.default_role, None);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings(dir.path());
        assert_eq!(settings.demo.offer_hours, 72);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config_dir = dir.path().join(CLUBDECK_DIR);
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(
            config_dir.join(CONFIG_FILENAME),
            "[demo]\ndefault_role = \"host\"\noffer_hours = 24\n",
        )
        .unwrap();

        let settings = load_settings(dir.path());
        assert_eq!(settings.demo.default_role, Some(Role::Host));
        assert_eq!(settings.demo.offer_hours, 24);
        assert_eq!(settings.demo.carousel_interval_ms, 5000); // default kept
    }

    #[test]
    fn test_invalid_config_degrades_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config_dir = dir.path().join(CLUBDECK_DIR);
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(config_dir.join(CONFIG_FILENAME), "demo = 12").unwrap();

        let settings = load_settings(dir.path());
        assert_eq!(settings.demo.offer_hours, 72);
    }
}
