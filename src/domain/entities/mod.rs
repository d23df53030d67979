//! Domain Entities - Core business objects

pub mod launch_entry;

pub use launch_entry::{LaunchEntry, LaunchEntryRecord};
