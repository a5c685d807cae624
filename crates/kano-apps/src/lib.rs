//! kano-apps: Installed app list for the Kano launcher.
//!
//! Provides:
//! - Parsing of `.app` definition files (JSON) with localized overrides
//! - Directory scanning of `<apps dir>/*.app` and `<apps dir>/locale/<locale>/`
//! - A populator that builds the list on a worker thread and publishes it once
//! - The built-in App Store entry, always last in the list

mod app;
mod app_list;
mod error;
mod paths;
mod populator;
mod store;

pub use app::App;
pub use app_list::AppList;
pub use error::AppError;
pub use paths::{APP_EXTENSION, list_app_files, locale_directory};
pub use populator::{
    CancellationToken, InstalledAppListPopulator, Interruptible, RefreshOutcome, RefreshWorker,
    spawn_refresh,
};
pub use store::{STORE_APP_JSON, STORE_APP_SLUG, store_app};
