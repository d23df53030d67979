//! NotificationPort - interface to the host shell's toast/balloon surface

use std::time::Duration;

/// Severity icon shown with a notification
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// A transient notification
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub title: String,
    pub message: String,
    /// How long the toast should stay up (the host may ignore this)
    pub timeout: Duration,
}

/// Notification display error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationError {
    /// Host surface is gone (tray icon removed, window destroyed)
    Unavailable,
    /// Host rejected the request
    Rejected(String),
}

impl std::fmt::Display for NotificationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationError::Unavailable => write!(f, "Notification surface unavailable"),
            NotificationError::Rejected(s) => write!(f, "Notification rejected: {}", s),
        }
    }
}

impl std::error::Error for NotificationError {}

/// Port interface for the host notification surface
pub trait NotificationPort {
    /// Display a notification
    fn show(&self, notification: &Notification) -> Result<(), NotificationError>;
}

/// A notification port that drops everything
pub struct NullNotificationPort;

impl NotificationPort for NullNotificationPort {
    fn show(&self, _notification: &Notification) -> Result<(), NotificationError> {
        Ok(())
    }
}
