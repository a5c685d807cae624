//! Event bus for cross-thread communication.
//!
//! Background workers send [`LauncherEvent`]s through a tokio broadcast
//! channel; the UI thread polls its receiver and drains pending events.

use kano_apps::AppList;
use std::sync::OnceLock;
use tokio::sync::broadcast::{self, Receiver, Sender};

/// Broadcast channel capacity.
pub const CHANNEL_CAPACITY: usize = 16;

/// Events delivered to the UI thread.
#[derive(Clone, Debug)]
pub enum LauncherEvent {
    /// A finished installed app list.
    AppsReady(AppList),
}

static LAUNCHER_SENDER: OnceLock<Sender<LauncherEvent>> = OnceLock::new();

fn get_sender() -> &'static Sender<LauncherEvent> {
    LAUNCHER_SENDER.get_or_init(|| {
        let (tx, _rx) = broadcast::channel(CHANNEL_CAPACITY);
        tx
    })
}

/// Send an event to all subscribers. Non-blocking.
/// If no receivers, the event is dropped.
#[inline]
pub fn send(event: LauncherEvent) {
    let _ = get_sender().send(event);
}

/// Subscribe to the event bus.
/// Returns a new receiver that will receive all future events.
pub fn subscribe() -> Receiver<LauncherEvent> {
    get_sender().subscribe()
}

/// Drain all pending events from a receiver.
/// Handles RecvError::Lagged by continuing to drain.
pub fn drain(rx: &mut Receiver<LauncherEvent>) -> Vec<LauncherEvent> {
    let mut events = Vec::new();

    loop {
        match rx.try_recv() {
            Ok(event) => events.push(event),
            Err(broadcast::error::TryRecvError::Empty) => break,
            Err(broadcast::error::TryRecvError::Lagged(_)) => continue,
            Err(broadcast::error::TryRecvError::Closed) => break,
        }
    }

    events
}
