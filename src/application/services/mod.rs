//! Application Services - Long-lived components owned by the tray shell

pub mod icon_loader;
pub mod notifier;

pub use icon_loader::{IconLoader, IconSource, LoadedIcon};
pub use notifier::{Notifier, DEFAULT_TIMEOUT_MS};
