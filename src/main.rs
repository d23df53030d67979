//! Elevate Tray - launch configured applications as administrator
//!
//! Right-click (or double-click) the tray icon to pick an application from
//! `apps.json`.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod platform;

#[cfg(target_os = "windows")]
mod app;

#[cfg(target_os = "windows")]
fn main() {
    use std::cell::RefCell;
    use std::rc::Rc;

    use windows::Win32::UI::WindowsAndMessaging::{
        DispatchMessageW, GetMessageW, TranslateMessage, MSG,
    };

    use elevate_tray::shared::{AppPaths, Settings, SettingsOrigin};
    use elevate_tray::{log, log_error, log_warn};

    use app::App;
    use platform::win32::{
        clear_event_handler, create_hidden_window, destroy_window, register_window_class,
        set_event_handler, unregister_window_class,
    };

    let paths = AppPaths::discover();
    let (settings, origin) = Settings::load(&paths);

    // Initialize logging as soon as we know whether it is wanted
    log::init(settings.logging.enabled);
    log!("main() starting, exe dir {:?}", paths.exe_dir);
    match origin {
        SettingsOrigin::Defaults => log!("No settings file, using defaults"),
        SettingsOrigin::File(path) => log!("Loaded settings from {:?}", path),
        SettingsOrigin::Rejected { path, error } => {
            log_warn!("Ignoring settings file {:?}: {}", path, error)
        }
    }
    log!("Settings: {:?}", settings);

    if let Err(e) = register_window_class() {
        log_error!("FATAL: Failed to register window class: {:?}", e);
        return;
    }

    let hwnd = match create_hidden_window() {
        Ok(h) => h,
        Err(e) => {
            log_error!("FATAL: Failed to create window: {:?}", e);
            unregister_window_class();
            return;
        }
    };

    let app = match App::new(hwnd, &settings, &paths) {
        Ok(a) => Rc::new(RefCell::new(a)),
        Err(e) => {
            log_error!("FATAL: Failed to create tray icon: {:?}", e);
            destroy_window(hwnd);
            unregister_window_class();
            return;
        }
    };

    let app_clone = app.clone();
    set_event_handler(move |_hwnd, event| match app_clone.try_borrow_mut() {
        Ok(mut app) => app.handle_event(event),
        Err(_) => log_warn!("Re-entrant {:?} while the app is busy, skipping", event),
    });

    log!("Elevate Tray started. Entering message loop.");

    unsafe {
        let mut msg = MSG::default();
        loop {
            let ret = GetMessageW(&mut msg, None, 0, 0);
            if ret.0 <= 0 {
                log!("GetMessageW returned {}, exiting loop", ret.0);
                break;
            }
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }

    log!("Cleaning up...");
    clear_event_handler();
    app.borrow_mut().shutdown();
    drop(app);
    unregister_window_class();

    log!("Elevate Tray exited normally.");
    log::shutdown();
}

#[cfg(not(target_os = "windows"))]
fn main() {
    eprintln!("elevate-tray needs Windows: it lives in the notification area and uses UAC elevation.");
}
