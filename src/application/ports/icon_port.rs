//! IconPort - interface for loading the tray icon
//!
//! Handles are opaque to the application layer. Handles loaded from a file
//! are owned and must be given back through [`IconPort::release`]; the
//! system default is shared and never released.

use std::path::Path;

use crate::domain::errors::IconError;

/// Port interface for icon resources
pub trait IconPort {
    /// Platform icon handle
    type Handle: Clone + std::fmt::Debug;

    /// Load an icon file. Any filesystem or decode failure is an error.
    fn load_from_file(&self, path: &Path) -> Result<Self::Handle, IconError>;

    /// The platform's stock application icon; cannot fail
    fn system_default(&self) -> Self::Handle;

    /// Free a handle returned by [`IconPort::load_from_file`]
    fn release(&self, handle: &Self::Handle);
}

/// An icon port with no files, only a placeholder default
pub struct NullIconPort;

impl IconPort for NullIconPort {
    type Handle = ();

    fn load_from_file(&self, path: &Path) -> Result<(), IconError> {
        Err(IconError::NotFound(path.to_path_buf()))
    }

    fn system_default(&self) {}

    fn release(&self, _handle: &()) {}
}
