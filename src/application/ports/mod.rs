//! Application Ports - Interfaces for external dependencies
//!
//! Ports define what the operating system and the host tray shell must
//! provide. The Win32 binary implements them; tests use the `Null*` and
//! recording implementations.

pub mod elevation_port;
pub mod icon_port;
pub mod notification_port;

pub use elevation_port::{ElevationError, ElevationPort, ElevationRequest, NullElevationPort};
pub use icon_port::{IconPort, NullIconPort};
pub use notification_port::{
    Notification, NotificationError, NotificationPort, NullNotificationPort, Severity,
};
