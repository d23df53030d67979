//! Presenters - format use case output for the tray shell

pub mod menu_presenter;

pub use menu_presenter::{MenuCommand, MenuItem, MenuPresenter};
