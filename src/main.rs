//! kano-launcher - Lists the installed Kano apps
//!
//! Populates the app list on a worker thread and receives it on the main
//! thread through the event bus.

mod config;
mod event_bus;
mod services;

use config::LauncherConfig;
use event_bus::LauncherEvent;
use kano_apps::{AppList, RefreshOutcome};
use log::{info, warn};
use std::error::Error;
use std::path::PathBuf;
use std::time::Duration;

const EVENT_POLL_INTERVAL_MS: u64 = 50;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut config = LauncherConfig::load();
    if let Some(dir) = std::env::args().nth(1) {
        config.apps_dir = PathBuf::from(dir);
    }

    // Subscribe before the worker starts so the result cannot be missed
    let mut event_rx = event_bus::subscribe();
    let worker = services::apps::start_populating(&config)?;

    let apps = loop {
        let finished = worker.is_finished();

        let ready = event_bus::drain(&mut event_rx)
            .into_iter()
            .map(|event| match event {
                LauncherEvent::AppsReady(apps) => apps,
            })
            .last();

        if let Some(apps) = ready {
            break Some(apps);
        }
        if finished {
            break None;
        }

        std::thread::sleep(Duration::from_millis(EVENT_POLL_INTERVAL_MS));
    };

    match worker.join()? {
        RefreshOutcome::Published { count } => info!("App list ready with {} apps", count),
        RefreshOutcome::Cancelled => warn!("App list population was interrupted"),
    }

    if let Some(apps) = apps {
        print_apps(&apps);
    }

    Ok(())
}

fn print_apps(apps: &AppList) {
    for app in apps.by_priority() {
        if !app.is_valid() {
            continue;
        }
        println!("{:<24} {:>6}  {}", app.slug, app.priority, app.title);
        if !app.tagline.is_empty() {
            println!("{:<24} {:>6}  {}", "", "", app.tagline);
        }
    }
}
