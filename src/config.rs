//! Launcher configuration.
//!
//! Read from `~/.config/kano-launcher/config.json`, then overridden by
//! `KANO_APPS_DIR` / `KANO_LOCALE`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_APPS_DIR: &str = "/usr/share/applications";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    /// Directory holding the `.app` files.
    pub apps_dir: PathBuf,
    /// Locale used for `locale/<locale>` overrides. Empty disables them.
    pub locale: String,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            apps_dir: PathBuf::from(DEFAULT_APPS_DIR),
            locale: std::env::var("LANG")
                .map(|lang| locale_from_lang(&lang))
                .unwrap_or_default(),
        }
    }
}

impl LauncherConfig {
    /// Load from the user config file and environment.
    pub fn load() -> Self {
        let mut config = config_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default();

        if let Ok(dir) = std::env::var("KANO_APPS_DIR") {
            config.apps_dir = PathBuf::from(dir);
        }
        if let Ok(locale) = std::env::var("KANO_LOCALE") {
            config.locale = locale;
        }

        config
    }

    /// Load from config file, or return default if missing or malformed.
    pub fn load_from(path: &Path) -> Self {
        fs::read_to_string(path)
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default()
    }
}

/// Get config file path (~/.config/kano-launcher/config.json).
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("kano-launcher").join("config.json"))
}

/// "es_AR.UTF-8" -> "es_AR", "C" / "POSIX" -> "".
pub fn locale_from_lang(lang: &str) -> String {
    let locale = lang.split(['.', '@']).next().unwrap_or_default();

    match locale {
        "C" | "POSIX" => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_from_lang() {
        assert_eq!(locale_from_lang("es_AR.UTF-8"), "es_AR");
        assert_eq!(locale_from_lang("de_DE@euro"), "de_DE");
        assert_eq!(locale_from_lang("en_GB"), "en_GB");
        assert_eq!(locale_from_lang("C"), "");
        assert_eq!(locale_from_lang("POSIX"), "");
        assert_eq!(locale_from_lang(""), "");
    }

    #[test]
    fn test_load_from_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"apps_dir": "/opt/apps"}"#).unwrap();

        let config = LauncherConfig::load_from(&path);
        assert_eq!(config.apps_dir, PathBuf::from("/opt/apps"));
        assert_eq!(config.locale, LauncherConfig::default().locale);
    }

    #[test]
    fn test_load_from_malformed_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();

        assert_eq!(LauncherConfig::load_from(&path), LauncherConfig::default());
    }
}
