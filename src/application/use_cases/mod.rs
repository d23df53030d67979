//! Use Cases - Single-purpose operations triggered by the tray shell

pub mod launch_elevated;
pub mod load_entries;

pub use launch_elevated::{Launcher, FALLBACK_DISPLAY_NAME, LAUNCH_FAILED_TITLE};
pub use load_entries::{parse_catalog, Catalog, ConfigLoader, CONFIG_ERROR_TITLE};
