//! Elevate Tray library
//!
//! The binary in main.rs is the Windows tray shell. Everything it calls into
//! lives here without Windows dependencies, so the launch list, launcher,
//! icon fallback and menu logic build and test on any host.

// Include the log module first so the log! macros work everywhere
#[macro_use]
pub mod log;

pub mod adapters;
pub mod application;
pub mod domain;
pub mod shared;

pub use adapters::{ControllerResult, TrayController, TrayMessage};
pub use application::{ConfigLoader, IconLoader, Launcher, Notifier};
pub use domain::{ConfigError, LaunchEntry, LaunchError};
