//! Controllers - translate tray events into use case calls

pub mod tray_controller;

pub use tray_controller::{ControllerResult, TrayController, TrayMessage};
