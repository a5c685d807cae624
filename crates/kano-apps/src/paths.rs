//! Path helpers for app and locale directories.

use std::path::{Path, PathBuf};

/// Extension of app definition files.
pub const APP_EXTENSION: &str = "app";

/// Get the locale override directory for `locale` under `apps_dir`.
/// Returns None when the locale is empty or the directory does not exist.
pub fn locale_directory(apps_dir: &Path, locale: &str) -> Option<PathBuf> {
    if locale.is_empty() {
        return None;
    }

    let dir = apps_dir.join("locale").join(locale);
    dir.is_dir().then_some(dir)
}

/// List the `*.app` file names directly inside `dir`.
///
/// Only regular files are returned, hidden files are skipped and the result
/// is sorted by name ignoring case. A missing or unreadable directory yields
/// an empty list.
pub fn list_app_files(dir: &Path) -> Vec<String> {
    let walker = walkdir::WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true);

    let mut names: Vec<String> = walker
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| e.file_name().to_str().map(String::from))
        .filter(|name| !name.starts_with('.') && is_app_file(name))
        .collect();

    names.sort_by_key(|name| name.to_lowercase());
    names
}

fn is_app_file(name: &str) -> bool {
    Path::new(name).extension().and_then(|e| e.to_str()) == Some(APP_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_list_app_files_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["zeta.app", "Beta.app", "alpha.app", "notes.txt", ".hidden.app"] {
            fs::write(dir.path().join(name), "{}").unwrap();
        }
        fs::create_dir(dir.path().join("folder.app")).unwrap();
        fs::create_dir_all(dir.path().join("locale/es_AR")).unwrap();
        fs::write(dir.path().join("locale/es_AR/alpha.app"), "{}").unwrap();

        assert_eq!(
            list_app_files(dir.path()),
            vec!["alpha.app", "Beta.app", "zeta.app"]
        );
    }

    #[test]
    fn test_list_app_files_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(list_app_files(&dir.path().join("missing")).is_empty());
    }

    #[test]
    fn test_locale_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("locale/es_AR")).unwrap();

        assert_eq!(
            locale_directory(dir.path(), "es_AR"),
            Some(dir.path().join("locale/es_AR"))
        );
        assert_eq!(locale_directory(dir.path(), "pt_BR"), None);
        assert_eq!(locale_directory(dir.path(), ""), None);
    }
}
