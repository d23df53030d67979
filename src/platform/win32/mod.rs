//! Win32 platform implementation

pub mod elevation;
pub mod icon;
pub mod menu;
pub mod tray;
pub mod window;

pub use elevation::ShellElevation;
pub use icon::Win32IconPort;
pub use menu::show_popup_menu;
pub use tray::TrayIcon;
pub use window::{
    clear_event_handler, create_hidden_window, destroy_window, register_window_class,
    set_event_handler, unregister_window_class, ShellEvent,
};

pub use elevate_tray::shared::wide::{copy_to_fixed, to_wide};
