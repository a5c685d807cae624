//! The built-in App Store entry.

use crate::app::App;

/// Definition of the "get more apps" entry appended to every app list.
pub const STORE_APP_JSON: &str = r##"{
    "type": "app",
    "title": "App Store",
    "tagline": "Go to Kano World to install more",
    "slug": "want-more",

    "origin": "-",

    "icon": "app-store",
    "colour": "#fda96f",

    "categories": [
        "code",
        "media",
        "games",
        "others",
        "tools",
        "experimental"
    ],

    "packages": [],
    "dependencies": ["chromium"],
    "launch_command": "kano-world-launcher /apps/",
    "overrides": [],
    "desktop": false,
    "priority": -10000
}"##;

/// Slug of the store entry.
pub const STORE_APP_SLUG: &str = "want-more";

pub fn store_app() -> Result<App, serde_json::Error> {
    App::from_json(STORE_APP_JSON)
}
