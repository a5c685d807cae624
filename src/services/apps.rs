//! Installed app list service.
//!
//! Wraps the kano-apps crate and forwards finished lists to the event bus.

use crate::config::LauncherConfig;
use crate::event_bus::{self, LauncherEvent};
use kano_apps::{InstalledAppListPopulator, RefreshWorker};
use log::info;
use std::sync::Arc;

/// Start populating the installed app list in the background.
/// The result arrives as [`LauncherEvent::AppsReady`] on the event bus.
pub fn start_populating(config: &LauncherConfig) -> Result<RefreshWorker, std::io::Error> {
    info!(
        "Populating installed apps from {} (locale: {:?})",
        config.apps_dir.display(),
        config.locale
    );

    let populator = Arc::new(InstalledAppListPopulator::new(
        &config.apps_dir,
        &config.locale,
    ));
    populator.on_apps_ready(|apps| event_bus::send(LauncherEvent::AppsReady(apps)));

    kano_apps::spawn_refresh(populator)
}
