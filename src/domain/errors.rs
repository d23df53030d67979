//! Domain layer error types
//!
//! Each error is caught at the boundary of the component that touches the
//! external resource and turned into an empty list or `false` plus a user
//! notification. None of them terminate the process.

use std::path::PathBuf;

use thiserror::Error;

/// Reading the launch list failed.
///
/// A missing file is not represented here: it yields an empty list.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// File exists but could not be read
    #[error("Could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File content is not a JSON array of entries
    #[error("Malformed configuration in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// The OS refused an elevated start request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElevationError {
    /// The user declined the consent prompt
    Cancelled,
    /// Target file does not exist
    NotFound(PathBuf),
    /// Any other OS failure
    Os { code: i32, message: String },
}

impl std::fmt::Display for ElevationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ElevationError::Cancelled => write!(f, "The operation was canceled by the user"),
            ElevationError::NotFound(p) => write!(f, "File not found: {}", p.display()),
            ElevationError::Os { code, message } => {
                write!(f, "{} (os error {})", message, code)
            }
        }
    }
}

impl std::error::Error for ElevationError {}

/// Launching an entry failed
#[derive(Error, Debug)]
pub enum LaunchError {
    /// Blank path; the OS was never asked
    #[error("Application path cannot be empty.")]
    EmptyPath,

    /// The OS refused or failed to start the process (includes elevation denial)
    #[error("Failed to launch {display_name}: {source}")]
    Os {
        display_name: String,
        #[source]
        source: ElevationError,
    },
}

/// One step of the icon fallback chain failed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IconError {
    #[error("Icon file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Could not load icon {}: {message}", .path.display())]
    Load { path: PathBuf, message: String },
}

/// Optional settings file could not be used
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
