//! Launcher - start a configured application as administrator
//!
//! The request goes to the OS through [`ElevationPort`] and the call returns
//! as soon as the OS accepted or refused it. `true` means "the start request
//! was accepted", not "the application ran".

use std::rc::Rc;

use crate::application::ports::{ElevationPort, ElevationRequest};
use crate::application::services::Notifier;
use crate::domain::entities::launch_entry::is_blank;
use crate::domain::entities::LaunchEntry;
use crate::domain::errors::LaunchError;

/// Name used in messages when an entry has no display name
pub const FALLBACK_DISPLAY_NAME: &str = "application";

/// Title of launch failure notices
pub const LAUNCH_FAILED_TITLE: &str = "Launch failed";

/// Starts entries elevated and reports failures
pub struct Launcher<E: ElevationPort> {
    port: E,
    notifier: Rc<Notifier>,
}

impl<E: ElevationPort> Launcher<E> {
    pub fn new(port: E, notifier: Rc<Notifier>) -> Self {
        Self { port, notifier }
    }

    pub fn port(&self) -> &E {
        &self.port
    }

    /// Request an elevated start without reporting anything
    pub fn try_launch(&self, path: &str, display_name: Option<&str>) -> Result<(), LaunchError> {
        if is_blank(path) {
            return Err(LaunchError::EmptyPath);
        }

        let request = ElevationRequest::new(path.trim());
        log!("Launcher: requesting elevated start of {:?}", request.path);

        self.port
            .start_elevated(&request)
            .map_err(|source| LaunchError::Os {
                display_name: display_name_or_fallback(display_name).to_string(),
                source,
            })
    }

    /// Request an elevated start; on failure show one error notice and
    /// return `false`
    pub fn launch_elevated(&self, path: &str, display_name: Option<&str>) -> bool {
        match self.try_launch(path, display_name) {
            Ok(()) => {
                log!(
                    "Launcher: start of '{}' accepted",
                    display_name_or_fallback(display_name)
                );
                true
            }
            Err(e) => {
                log_error!("Launcher: {}", e);
                self.notifier.error(LAUNCH_FAILED_TITLE, &e.to_string());
                false
            }
        }
    }

    pub fn launch_entry(&self, entry: &LaunchEntry) -> bool {
        self.launch_elevated(&entry.path, Some(&entry.display_name))
    }
}

fn display_name_or_fallback(display_name: Option<&str>) -> &str {
    match display_name.map(str::trim) {
        Some(name) if !name.is_empty() => name,
        _ => FALLBACK_DISPLAY_NAME,
    }
}
