//! App descriptor parsing.

use crate::error::AppError;
use log::{debug, warn};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Parsed from .app files.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct App {
    /// Value of the `type` key, e.g. "app".
    pub app_type: String,
    pub title: String,
    pub tagline: String,
    /// Unique-ish identifier, e.g. "make-minecraft".
    pub slug: String,
    pub origin: String,
    pub icon: String,
    pub colour: String,
    pub categories: Vec<String>,
    pub packages: Vec<String>,
    pub dependencies: Vec<String>,
    pub launch_command: String,
    pub overrides: Vec<String>,
    /// Whether the app gets a desktop icon.
    pub desktop: bool,
    pub priority: i64,
}

impl App {
    /// Build an app from an already parsed JSON object.
    /// Missing or wrongly typed keys fall back to the field's default.
    pub fn from_object(obj: &Map<String, Value>) -> Self {
        Self {
            app_type: get_string(obj, "type"),
            title: get_string(obj, "title"),
            tagline: get_string(obj, "tagline"),
            slug: get_string(obj, "slug"),
            origin: get_string(obj, "origin"),
            icon: get_string(obj, "icon"),
            colour: get_string(obj, "colour"),
            categories: get_string_array(obj, "categories"),
            packages: get_string_array(obj, "packages"),
            dependencies: get_string_array(obj, "dependencies"),
            launch_command: get_string(obj, "launch_command"),
            overrides: get_string_array(obj, "overrides"),
            desktop: get_bool(obj, "desktop"),
            priority: get_int(obj, "priority"),
        }
    }

    /// Parse an app from a JSON document.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        parse_object(text).map(|obj| Self::from_object(&obj))
    }

    /// Parse a single .app file.
    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        read_object(path).map(|obj| Self::from_object(&obj))
    }

    /// Parse a localized .app file on top of its canonical counterpart.
    ///
    /// Keys set in the localized file win; everything else comes from
    /// `fallback_path`. A broken localized file is logged and ignored.
    pub fn from_localized_file(path: &Path, fallback_path: &Path) -> Result<Self, AppError> {
        let mut obj = read_object(fallback_path)?;

        match read_object(path) {
            Ok(localized) => merge_over(&mut obj, localized),
            Err(e) => warn!("Ignoring localized app file: {}", e),
        }

        Ok(Self::from_object(&obj))
    }

    /// An app needs at least a slug and a title to be shown.
    pub fn is_valid(&self) -> bool {
        !self.slug.is_empty() && !self.title.is_empty()
    }

    pub fn in_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c.eq_ignore_ascii_case(category))
    }
}

/// Parse text that must hold a JSON object.
fn parse_object(text: &str) -> Result<Map<String, Value>, serde_json::Error> {
    match serde_json::from_str(text)? {
        Value::Object(obj) => Ok(obj),
        _ => Err(<serde_json::Error as serde::de::Error>::custom(
            "expected a JSON object",
        )),
    }
}

fn read_object(path: &Path) -> Result<Map<String, Value>, AppError> {
    let content = fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_object(&content).map_err(|source| AppError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Copy every non-null key of `overlay` into `base`.
fn merge_over(base: &mut Map<String, Value>, overlay: Map<String, Value>) {
    for (key, value) in overlay {
        if !value.is_null() {
            base.insert(key, value);
        }
    }
}

fn get_string(obj: &Map<String, Value>, key: &str) -> String {
    match obj.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => {
            debug!("Key '{}' is not a string: {}", key, other);
            String::new()
        }
        None => String::new(),
    }
}

fn get_string_array(obj: &Map<String, Value>, key: &str) -> Vec<String> {
    match obj.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|v| v.as_str().map(String::from))
            .collect(),
        Some(other) => {
            debug!("Key '{}' is not an array: {}", key, other);
            Vec::new()
        }
        None => Vec::new(),
    }
}

fn get_bool(obj: &Map<String, Value>, key: &str) -> bool {
    obj.get(key).and_then(Value::as_bool).unwrap_or(false)
}

fn get_int(obj: &Map<String, Value>, key: &str) -> i64 {
    match obj.get(key) {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const CANONICAL: &str = r#"{
        "type": "app",
        "title": "Make Music",
        "tagline": "Code your own music",
        "slug": "make-music",
        "icon": "make-music",
        "categories": ["code", "media"],
        "dependencies": ["sonic-pi"],
        "launch_command": "kano-launcher sonic-pi",
        "desktop": true,
        "priority": 30
    }"#;

    #[test]
    fn test_from_json_reads_all_fields() {
        let app = App::from_json(CANONICAL).unwrap();

        assert_eq!(app.app_type, "app");
        assert_eq!(app.title, "Make Music");
        assert_eq!(app.slug, "make-music");
        assert_eq!(app.categories, vec!["code", "media"]);
        assert_eq!(app.dependencies, vec!["sonic-pi"]);
        assert!(app.packages.is_empty());
        assert!(app.desktop);
        assert_eq!(app.priority, 30);
        assert!(app.is_valid());
    }

    #[test]
    fn test_from_json_ignores_unknown_and_mistyped_keys() {
        let app = App::from_json(r#"{"slug": 5, "title": "X", "extra": [1, 2], "priority": 2.0}"#)
            .unwrap();

        assert_eq!(app.slug, "");
        assert_eq!(app.title, "X");
        assert_eq!(app.priority, 2);
        assert!(!app.is_valid());
    }

    #[test]
    fn test_from_json_rejects_non_objects() {
        assert!(App::from_json("[1, 2, 3]").is_err());
        assert!(App::from_json("{ not json").is_err());
    }

    #[test]
    fn test_localized_fields_win() {
        let dir = tempfile::tempdir().unwrap();
        let canonical = dir.path().join("make-music.app");
        let localized = dir.path().join("make-music.es.app");
        fs::write(&canonical, CANONICAL).unwrap();
        fs::write(
            &localized,
            r#"{"title": "Crea Música", "tagline": null, "categories": ["código"]}"#,
        )
        .unwrap();

        let app = App::from_localized_file(&localized, &canonical).unwrap();

        assert_eq!(app.title, "Crea Música");
        assert_eq!(app.tagline, "Code your own music");
        assert_eq!(app.categories, vec!["código"]);
        assert_eq!(app.launch_command, "kano-launcher sonic-pi");
        assert_eq!(app.priority, 30);
    }

    #[test]
    fn test_broken_localized_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let canonical = dir.path().join("a.app");
        let localized = dir.path().join("a.i18n");
        fs::write(&canonical, CANONICAL).unwrap();
        fs::write(&localized, "garbage").unwrap();

        let app = App::from_localized_file(&localized, &canonical).unwrap();
        assert_eq!(app, App::from_json(CANONICAL).unwrap());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = App::from_file(&dir.path().join("nope.app")).unwrap_err();
        assert!(matches!(err, AppError::Io { .. }));
    }

    #[test]
    fn test_in_category_ignores_case() {
        let app = App::from_json(CANONICAL).unwrap();
        assert!(app.in_category("Media"));
        assert!(!app.in_category("games"));
    }
}
