//! Ordered app collection.

use crate::app::App;
use crate::error::AppError;
use std::path::Path;

/// Apps in the order they were added. Duplicates are allowed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppList {
    apps: Vec<App>,
}

impl AppList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_app(&mut self, app: App) {
        self.apps.push(app);
    }

    /// Parse `path` and append it.
    pub fn add_app_from_file(&mut self, path: &Path) -> Result<(), AppError> {
        self.add_app(App::from_file(path)?);
        Ok(())
    }

    /// Parse localized `path` over canonical `fallback_path` and append it.
    pub fn add_localized_app_from_file(
        &mut self,
        path: &Path,
        fallback_path: &Path,
    ) -> Result<(), AppError> {
        self.add_app(App::from_localized_file(path, fallback_path)?);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, App> {
        self.apps.iter()
    }

    pub fn last(&self) -> Option<&App> {
        self.apps.last()
    }

    /// First app with the given slug.
    pub fn find_by_slug(&self, slug: &str) -> Option<&App> {
        self.apps.iter().find(|a| a.slug == slug)
    }

    /// Apps in display order: highest priority first, ties keep insertion order.
    pub fn by_priority(&self) -> Vec<&App> {
        let mut sorted: Vec<&App> = self.apps.iter().collect();
        sorted.sort_by(|a, b| b.priority.cmp(&a.priority));
        sorted
    }

    pub fn in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a App> + 'a {
        self.apps.iter().filter(move |a| a.in_category(category))
    }
}

impl IntoIterator for AppList {
    type Item = App;
    type IntoIter = std::vec::IntoIter<App>;

    fn into_iter(self) -> Self::IntoIter {
        self.apps.into_iter()
    }
}

impl<'a> IntoIterator for &'a AppList {
    type Item = &'a App;
    type IntoIter = std::slice::Iter<'a, App>;

    fn into_iter(self) -> Self::IntoIter {
        self.apps.iter()
    }
}
