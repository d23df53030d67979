//! Shared Utilities Module
//!
//! Contains utilities that are shared across layers.

pub mod config;
pub mod wide;

pub use config::{exe_dir, AppPaths, Settings, SettingsOrigin};
