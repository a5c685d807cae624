//! Installed app list populator.
//!
//! Scans an apps directory on a worker thread and hands the finished
//! [`AppList`] to registered handlers. Scanning can be interrupted between
//! files; an interrupted scan publishes nothing.

use crate::app_list::AppList;
use crate::error::AppError;
use crate::paths::{list_app_files, locale_directory};
use crate::store::store_app;
use log::{debug, error, info, warn};

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use std::thread::{self, JoinHandle};

type AppsReadyHandler = Arc<dyn Fn(AppList) + Send + Sync>;

/// Cooperative cancellation flag shared between a scan and its owner.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the scan to stop at its next checkpoint.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Polled by a scan before each file.
pub trait Interruptible {
    fn interruption_requested(&self) -> bool;
}

impl Interruptible for CancellationToken {
    fn interruption_requested(&self) -> bool {
        self.is_cancelled()
    }
}

/// Result of a single refresh.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The list was handed to handlers. `count` includes the store entry.
    Published { count: usize },
    /// Interrupted before finishing; nothing was published.
    Cancelled,
}

/// Builds the installed app list from `*.app` files.
pub struct InstalledAppListPopulator {
    apps_dir: PathBuf,
    /// `<apps_dir>/locale/<locale>`, resolved once at construction.
    i18n_apps_dir: Option<PathBuf>,
    handlers: RwLock<Vec<AppsReadyHandler>>,
}

impl InstalledAppListPopulator {
    pub fn new(apps_dir: impl Into<PathBuf>, locale: &str) -> Self {
        let apps_dir = apps_dir.into();
        let i18n_apps_dir = locale_directory(&apps_dir, locale);

        if let Some(dir) = &i18n_apps_dir {
            debug!("Located i18n directory: {}", dir.display());
        }

        Self {
            apps_dir,
            i18n_apps_dir,
            handlers: RwLock::new(Vec::new()),
        }
    }

    pub fn apps_dir(&self) -> &Path {
        &self.apps_dir
    }

    /// Whether a locale override directory was found at construction.
    pub fn i18n_available(&self) -> bool {
        self.i18n_apps_dir.is_some()
    }

    /// Register a handler for finished app lists.
    /// Called once per successful refresh, never for a cancelled one.
    pub fn on_apps_ready<F>(&self, handler: F)
    where
        F: Fn(AppList) + Send + Sync + 'static,
    {
        self.handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Arc::new(handler));
    }

    /// Scan the apps directory and publish the result.
    ///
    /// `token` is checked before each file. Files that fail to parse are
    /// logged and skipped.
    pub fn refresh(&self, token: &impl Interruptible) -> RefreshOutcome {
        let app_files = list_app_files(&self.apps_dir);
        debug!(
            "Looking in {} and found files {:?}",
            self.apps_dir.display(),
            app_files
        );

        let mut apps = AppList::new();

        for app_file in &app_files {
            if token.interruption_requested() {
                debug!("Apps: Interrupt requested while parsing apps");
                return RefreshOutcome::Cancelled;
            }

            let en_file_path = self.apps_dir.join(app_file);
            let result = match self.localized_path(app_file) {
                Some(i18n_file_path) => {
                    debug!("Found i18n app file {}", app_file);
                    apps.add_localized_app_from_file(&i18n_file_path, &en_file_path)
                }
                None => apps.add_app_from_file(&en_file_path),
            };

            if let Err(e) = result {
                warn!("Skipping app file: {}", e);
            }
        }

        match store_app() {
            Ok(app) => apps.add_app(app),
            Err(e) => error!("Failed to load App Store JSON: {}", e),
        }

        let count = apps.len();
        self.publish(apps);
        info!("Populated {} apps from {}", count, self.apps_dir.display());

        RefreshOutcome::Published { count }
    }

    fn localized_path(&self, app_file: &str) -> Option<PathBuf> {
        let path = self.i18n_apps_dir.as_ref()?.join(app_file);
        path.is_file().then_some(path)
    }

    fn publish(&self, apps: AppList) {
        let handlers: Vec<AppsReadyHandler> = self
            .handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        if let Some((last, rest)) = handlers.split_last() {
            for handler in rest {
                handler(apps.clone());
            }
            last(apps);
        }
    }
}

/// A refresh running on its own thread.
pub struct RefreshWorker {
    token: CancellationToken,
    handle: JoinHandle<RefreshOutcome>,
}

impl RefreshWorker {
    /// Ask the worker to stop before its next file.
    pub fn request_interruption(&self) {
        self.token.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the refresh to finish.
    pub fn join(self) -> Result<RefreshOutcome, AppError> {
        self.handle.join().map_err(|_| AppError::WorkerPanicked)
    }
}

/// Run `populator.refresh` on a dedicated thread.
pub fn spawn_refresh(
    populator: Arc<InstalledAppListPopulator>,
) -> Result<RefreshWorker, std::io::Error> {
    let token = CancellationToken::new();
    let worker_token = token.clone();

    let handle = thread::Builder::new()
        .name("app-list-populator".into())
        .spawn(move || populator.refresh(&worker_token))?;

    Ok(RefreshWorker { token, handle })
}
