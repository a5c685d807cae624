//! Background services for the launcher.
//!
//! - `apps` - Installed app list population

pub mod apps;
