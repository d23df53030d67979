//! Interface Adapters Layer
//!
//! This layer converts between the tray shell's events and the use cases.
//! It contains:
//! - **Controllers**: Handle tray events, translate to use case calls
//! - **Presenters**: Format the entry list as a menu model
//!
//! # Clean Architecture Rules
//! - Depends on application and domain layers
//! - No platform calls; the Win32 shell only renders what it is given

pub mod controllers;
pub mod presenters;

pub use controllers::*;
pub use presenters::*;
