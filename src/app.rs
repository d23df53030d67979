//! Application state and tray message handling
//!
//! [`App`] is the composition root of the Windows shell: it builds every
//! component once at startup, hands each its collaborators, and tears them
//! down exactly once at exit.

use std::rc::Rc;

use windows::core::Error;
use windows::Win32::Foundation::HWND;
use windows::Win32::UI::WindowsAndMessaging::HICON;

use elevate_tray::adapters::{ControllerResult, TrayController, TrayMessage};
use elevate_tray::application::{ConfigLoader, IconLoader, Launcher, Notifier};
use elevate_tray::shared::{AppPaths, Settings};
use elevate_tray::{log, log_error};

use crate::platform::win32::{
    destroy_window, show_popup_menu, ShellElevation, ShellEvent, TrayIcon, Win32IconPort,
};

/// Main application state
pub struct App {
    hwnd: HWND,
    controller: TrayController<ShellElevation>,
    tray: Rc<TrayIcon>,
    icon_loader: IconLoader<Win32IconPort>,
    shut_down: bool,
}

impl App {
    /// Build the component graph and load the launch list
    pub fn new(hwnd: HWND, settings: &Settings, paths: &AppPaths) -> Result<Self, Error> {
        let mut icon_loader = IconLoader::new(Win32IconPort, paths.icon_candidates());
        let icon: HICON = icon_loader.load_icon().handle;

        let tray = Rc::new(TrayIcon::add(hwnd, icon, &settings.tooltip)?);

        let notifier = Rc::new(
            Notifier::new(tray.clone()).with_default_timeout(settings.notifications.timeout()),
        );
        let loader = ConfigLoader::new(paths.apps_file(), Rc::clone(&notifier));
        let launcher = Launcher::new(ShellElevation::new(hwnd), Rc::clone(&notifier));
        let mut controller = TrayController::new(loader, launcher, notifier)
            .with_load_summary(settings.notifications.show_load_summary);

        controller.startup();
        log!(
            "App: {} applications available from {:?}",
            controller.entries().len(),
            paths.apps_file()
        );

        Ok(Self {
            hwnd,
            controller,
            tray,
            icon_loader,
            shut_down: false,
        })
    }

    /// React to an event from the host window
    pub fn handle_event(&mut self, event: ShellEvent) {
        match event {
            ShellEvent::MenuGesture => self.dispatch(TrayMessage::MenuRequested),
            ShellEvent::TaskbarCreated => {
                log!("App: taskbar recreated, restoring tray icon");
                self.tray.restore();
            }
        }
    }

    fn dispatch(&mut self, message: TrayMessage) {
        match self.controller.handle_message(message) {
            ControllerResult::None => {}
            ControllerResult::ShowMenu(items) => match show_popup_menu(self.hwnd, &items) {
                Ok(Some(id)) => self.dispatch(TrayMessage::Command(id)),
                Ok(None) => {}
                Err(e) => log_error!("App: context menu failed: {:?}", e),
            },
            ControllerResult::Exit => self.request_exit(),
        }
    }

    fn request_exit(&mut self) {
        log!("App: exit requested");
        self.shutdown();
        // WM_DESTROY posts WM_QUIT, which ends the message loop
        destroy_window(self.hwnd);
    }

    /// Remove the tray icon, then release the icon it displayed. Idempotent.
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        self.shut_down = true;

        self.tray.remove();
        self.icon_loader.dispose();
        log!("App: shut down");
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.shutdown();
    }
}
