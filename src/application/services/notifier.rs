//! Notifier - severity-tagged toasts through the host shell
//!
//! A thin dispatch wrapper over [`NotificationPort`]. It holds no state
//! besides the port and the default timeout. A failed display is logged
//! and never reaches the caller.

use std::rc::Rc;
use std::time::Duration;

use crate::application::ports::{Notification, NotificationPort, Severity};

/// Default time a toast stays up
pub const DEFAULT_TIMEOUT_MS: u64 = 3000;

/// Shows info/warning/error notifications
pub struct Notifier {
    port: Rc<dyn NotificationPort>,
    default_timeout: Duration,
}

impl Notifier {
    /// Create a notifier decorating the given host surface
    pub fn new(port: Rc<dyn NotificationPort>) -> Self {
        Self {
            port,
            default_timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }

    /// Builder pattern: override the default timeout
    pub fn with_default_timeout(mut self, timeout: Duration) -> Self {
        self.default_timeout = timeout;
        self
    }

    pub fn default_timeout(&self) -> Duration {
        self.default_timeout
    }

    pub fn info(&self, title: &str, message: &str) {
        self.notify(Severity::Info, title, message, self.default_timeout);
    }

    pub fn warn(&self, title: &str, message: &str) {
        self.notify(Severity::Warning, title, message, self.default_timeout);
    }

    pub fn error(&self, title: &str, message: &str) {
        self.notify(Severity::Error, title, message, self.default_timeout);
    }

    /// Dispatch a notification with an explicit severity
    pub fn notify(&self, severity: Severity, title: &str, message: &str, timeout: Duration) {
        let notification = Notification {
            severity,
            title: title.to_string(),
            message: message.to_string(),
            timeout,
        };

        if let Err(e) = self.port.show(&notification) {
            log_warn!(
                "Notifier: could not show {:?} '{}': {}",
                severity,
                title,
                e
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::notification_port::testing::{
        BrokenNotificationPort, RecordingNotificationPort,
    };

    #[test]
    fn test_severity_mapping() {
        let port = Rc::new(RecordingNotificationPort::new());
        let notifier = Notifier::new(port.clone());

        notifier.info("Title", "info body");
        notifier.warn("Title", "warn body");
        notifier.error("Title", "error body");

        let shown = port.shown.borrow();
        assert_eq!(shown.len(), 3);
        assert_eq!(shown[0].severity, Severity::Info);
        assert_eq!(shown[1].severity, Severity::Warning);
        assert_eq!(shown[2].severity, Severity::Error);
        assert_eq!(shown[2].message, "error body");
    }

    #[test]
    fn test_default_timeout() {
        let port = Rc::new(RecordingNotificationPort::new());
        let notifier = Notifier::new(port.clone());

        notifier.info("a", "b");
        assert_eq!(port.shown.borrow()[0].timeout, Duration::from_millis(3000));
    }

    #[test]
    fn test_custom_timeouts() {
        let port = Rc::new(RecordingNotificationPort::new());
        let notifier =
            Notifier::new(port.clone()).with_default_timeout(Duration::from_millis(500));

        notifier.warn("a", "b");
        notifier.notify(Severity::Error, "a", "b", Duration::from_secs(10));

        let shown = port.shown.borrow();
        assert_eq!(shown[0].timeout, Duration::from_millis(500));
        assert_eq!(shown[1].timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_port_failure_is_swallowed() {
        let notifier = Notifier::new(Rc::new(BrokenNotificationPort));
        notifier.error("Launch failed", "nothing to see");
    }
}
