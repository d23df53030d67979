//! Hidden host window for the tray icon
//!
//! The window never shows. Its procedure turns the few messages the tray
//! cares about into [`ShellEvent`]s and hands them to the handler installed
//! with [`set_event_handler`]; everything else gets default processing.

use std::cell::{Cell, RefCell};

use windows::core::{w, Error, PCWSTR};
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, DefWindowProcW, DestroyWindow, PostQuitMessage, RegisterClassExW,
    RegisterWindowMessageW, UnregisterClassW, WM_CONTEXTMENU, WM_DESTROY, WM_LBUTTONDBLCLK,
    WM_RBUTTONUP, WNDCLASSEXW, WS_EX_TOOLWINDOW, WS_OVERLAPPED,
};

use elevate_tray::{log, log_warn};

use super::tray::WM_APP_TRAY;

const WINDOW_CLASS_NAME: PCWSTR = w!("ElevateTrayWindowClass");

/// Something the tray shell has to react to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShellEvent {
    /// Right-click, double-click or keyboard activation of the icon
    MenuGesture,
    /// Explorer restarted and forgot every notification icon
    TaskbarCreated,
}

type EventHandler = Box<dyn FnMut(HWND, ShellEvent)>;

thread_local! {
    static EVENT_HANDLER: RefCell<Option<EventHandler>> = RefCell::new(None);
    /// Id of the "TaskbarCreated" broadcast, 0 until registered
    static TASKBAR_CREATED: Cell<u32> = Cell::new(0);
}

/// Install the handler that receives shell events on the UI thread
pub fn set_event_handler(handler: impl FnMut(HWND, ShellEvent) + 'static) {
    EVENT_HANDLER.with(|slot| *slot.borrow_mut() = Some(Box::new(handler)));
}

/// Drop the handler; later events are ignored
pub fn clear_event_handler() {
    EVENT_HANDLER.with(|slot| slot.borrow_mut().take());
}

#[derive(Debug, PartialEq, Eq)]
enum Route {
    Deliver(ShellEvent),
    Consume,
    Default,
}

fn route(msg: u32, lparam: LPARAM) -> Route {
    if msg == WM_APP_TRAY {
        // Legacy (pre-v4) callback: the low word of lparam is the mouse message
        return match (lparam.0 as u32) & 0xFFFF {
            WM_RBUTTONUP | WM_LBUTTONDBLCLK | WM_CONTEXTMENU => {
                Route::Deliver(ShellEvent::MenuGesture)
            }
            _ => Route::Consume,
        };
    }

    let taskbar_created = TASKBAR_CREATED.with(Cell::get);
    if taskbar_created != 0 && msg == taskbar_created {
        return Route::Deliver(ShellEvent::TaskbarCreated);
    }

    Route::Default
}

fn deliver(hwnd: HWND, event: ShellEvent) {
    // The popup menu and the UAC prompt pump messages while a handler runs
    EVENT_HANDLER.with(|slot| match slot.try_borrow_mut() {
        Ok(mut guard) => {
            if let Some(handler) = guard.as_mut() {
                handler(hwnd, event);
            }
        }
        Err(_) => log_warn!("Window: dropped {:?} during another event", event),
    });
}

unsafe extern "system" fn wnd_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    match route(msg, lparam) {
        Route::Deliver(event) => {
            deliver(hwnd, event);
            LRESULT(0)
        }
        Route::Consume => LRESULT(0),
        Route::Default if msg == WM_DESTROY => {
            log!("Window: destroyed, leaving message loop");
            PostQuitMessage(0);
            LRESULT(0)
        }
        Route::Default => DefWindowProcW(hwnd, msg, wparam, lparam),
    }
}

/// Register the window class and the Explorer restart broadcast
pub fn register_window_class() -> Result<(), Error> {
    unsafe {
        let hinstance = GetModuleHandleW(None)?;
        let class = WNDCLASSEXW {
            cbSize: std::mem::size_of::<WNDCLASSEXW>() as u32,
            lpfnWndProc: Some(wnd_proc),
            hInstance: hinstance.into(),
            lpszClassName: WINDOW_CLASS_NAME,
            ..Default::default()
        };
        if RegisterClassExW(&class) == 0 {
            return Err(Error::from_win32());
        }

        let id = RegisterWindowMessageW(w!("TaskbarCreated"));
        if id == 0 {
            log_warn!("Window: TaskbarCreated not registered, Explorer restarts lose the icon");
        }
        TASKBAR_CREATED.with(|cell| cell.set(id));
    }
    Ok(())
}

pub fn unregister_window_class() {
    unsafe {
        if let Ok(hinstance) = GetModuleHandleW(None) {
            let _ = UnregisterClassW(WINDOW_CLASS_NAME, hinstance);
        }
    }
}

/// Create the never-shown window that owns the tray icon
pub fn create_hidden_window() -> Result<HWND, Error> {
    unsafe {
        let hinstance = GetModuleHandleW(None)?;
        CreateWindowExW(
            WS_EX_TOOLWINDOW,
            WINDOW_CLASS_NAME,
            w!("Elevate Tray"),
            WS_OVERLAPPED,
            0,
            0,
            0,
            0,
            None,
            None,
            hinstance,
            None,
        )
    }
}

pub fn destroy_window(hwnd: HWND) {
    unsafe {
        let _ = DestroyWindow(hwnd);
    }
}

#[cfg(test)]
mod tests {
    use windows::Win32::UI::WindowsAndMessaging::{WM_APP, WM_MOUSEMOVE, WM_TIMER};

    use super::*;

    fn tray(mouse: u32) -> Route {
        route(WM_APP_TRAY, LPARAM(mouse as isize))
    }

    #[test]
    fn test_menu_gestures_are_delivered() {
        for mouse in [WM_RBUTTONUP, WM_LBUTTONDBLCLK, WM_CONTEXTMENU] {
            assert_eq!(tray(mouse), Route::Deliver(ShellEvent::MenuGesture));
        }
    }

    #[test]
    fn test_other_tray_traffic_is_consumed() {
        assert_eq!(tray(WM_MOUSEMOVE), Route::Consume);
    }

    #[test]
    fn test_taskbar_created_is_delivered_once_registered() {
        let id = WM_APP + 0x300;
        assert_eq!(route(id, LPARAM(0)), Route::Default);

        TASKBAR_CREATED.with(|cell| cell.set(id));
        assert_eq!(route(id, LPARAM(0)), Route::Deliver(ShellEvent::TaskbarCreated));
        assert_eq!(route(WM_TIMER, LPARAM(0)), Route::Default);
    }
}
