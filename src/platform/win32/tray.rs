//! Notification-area icon and balloon tips
//!
//! [`TrayIcon`] is the host notification surface: it implements
//! [`NotificationPort`] by showing balloon tips on the icon.

use std::cell::Cell;

use windows::core::Error;
use windows::Win32::Foundation::HWND;
use windows::Win32::UI::Shell::{
    Shell_NotifyIconW, NIF_ICON, NIF_INFO, NIF_MESSAGE, NIF_TIP, NIIF_ERROR, NIIF_INFO,
    NIIF_WARNING, NIM_ADD, NIM_DELETE, NIM_MODIFY, NOTIFYICONDATAW, NOTIFY_ICON_INFOTIP_FLAGS,
};
use windows::Win32::UI::WindowsAndMessaging::{HICON, WM_APP};

use elevate_tray::application::ports::{
    Notification, NotificationError, NotificationPort, Severity,
};
use elevate_tray::{log, log_warn};

use super::copy_to_fixed;

/// Callback message the shell posts for mouse activity on the icon
pub const WM_APP_TRAY: u32 = WM_APP + 1;

const TRAY_ICON_ID: u32 = 1;

/// The application's icon in the notification area
pub struct TrayIcon {
    hwnd: HWND,
    icon: HICON,
    tooltip: String,
    added: Cell<bool>,
}

impl TrayIcon {
    /// Add the icon to the notification area
    pub fn add(hwnd: HWND, icon: HICON, tooltip: &str) -> Result<Self, Error> {
        let tray = Self {
            hwnd,
            icon,
            tooltip: tooltip.to_string(),
            added: Cell::new(false),
        };
        tray.register()?;
        Ok(tray)
    }

    fn base_data(&self) -> NOTIFYICONDATAW {
        NOTIFYICONDATAW {
            cbSize: std::mem::size_of::<NOTIFYICONDATAW>() as u32,
            hWnd: self.hwnd,
            uID: TRAY_ICON_ID,
            ..Default::default()
        }
    }

    fn register(&self) -> Result<(), Error> {
        let mut nid = self.base_data();
        nid.uFlags = NIF_ICON | NIF_MESSAGE | NIF_TIP;
        nid.uCallbackMessage = WM_APP_TRAY;
        nid.hIcon = self.icon;
        copy_to_fixed(&mut nid.szTip, &self.tooltip);

        unsafe {
            if !Shell_NotifyIconW(NIM_ADD, &nid).as_bool() {
                return Err(Error::from_win32());
            }
        }

        self.added.set(true);
        log!("TrayIcon: added");
        Ok(())
    }

    /// Re-add after Explorer restarted and dropped every icon
    pub fn restore(&self) {
        self.added.set(false);
        if let Err(e) = self.register() {
            log_warn!("TrayIcon: could not restore icon: {:?}", e);
        }
    }

    /// Remove the icon; later calls do nothing
    pub fn remove(&self) {
        if !self.added.replace(false) {
            return;
        }
        let nid = self.base_data();
        unsafe {
            let _ = Shell_NotifyIconW(NIM_DELETE, &nid);
        }
        log!("TrayIcon: removed");
    }
}

impl Drop for TrayIcon {
    fn drop(&mut self) {
        self.remove();
    }
}

fn info_flags(severity: Severity) -> NOTIFY_ICON_INFOTIP_FLAGS {
    match severity {
        Severity::Info => NIIF_INFO,
        Severity::Warning => NIIF_WARNING,
        Severity::Error => NIIF_ERROR,
    }
}

impl NotificationPort for TrayIcon {
    fn show(&self, notification: &Notification) -> Result<(), NotificationError> {
        if !self.added.get() {
            return Err(NotificationError::Unavailable);
        }

        let mut nid = self.base_data();
        nid.uFlags = NIF_INFO;
        nid.dwInfoFlags = info_flags(notification.severity);
        nid.Anonymous.uTimeout = notification.timeout.as_millis().min(u32::MAX as u128) as u32;
        copy_to_fixed(&mut nid.szInfoTitle, &notification.title);
        copy_to_fixed(&mut nid.szInfo, &notification.message);

        unsafe {
            if !Shell_NotifyIconW(NIM_MODIFY, &nid).as_bool() {
                return Err(NotificationError::Rejected(format!(
                    "{:?}",
                    Error::from_win32()
                )));
            }
        }
        Ok(())
    }
}
