//! Domain Layer - Pure data and error types
//!
//! This layer contains:
//! - **Entities**: `LaunchEntry`, one launchable target
//! - **Domain Errors**: Error types for configuration, launching and icons
//!
//! # Clean Architecture Rules
//! - No operating system calls
//! - Testable without mocks

pub mod entities;
pub mod errors;

// Re-export commonly used types
pub use entities::*;
pub use errors::{ConfigError, ElevationError, IconError, LaunchError, SettingsError};
