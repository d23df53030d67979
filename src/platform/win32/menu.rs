//! Tray context menu

use windows::core::{Error, PCWSTR};
use windows::Win32::Foundation::{HWND, LPARAM, POINT, WPARAM};
use windows::Win32::UI::WindowsAndMessaging::{
    AppendMenuW, CreatePopupMenu, DestroyMenu, GetCursorPos, PostMessageW, SetForegroundWindow,
    TrackPopupMenu, HMENU, MF_GRAYED, MF_SEPARATOR, MF_STRING, TPM_BOTTOMALIGN, TPM_NONOTIFY,
    TPM_RETURNCMD, TPM_RIGHTBUTTON, WM_NULL,
};

use elevate_tray::adapters::presenters::MenuItem;

use super::to_wide;

/// Show the menu at the cursor and wait for a pick.
///
/// Returns the chosen command id, or `None` when dismissed.
pub fn show_popup_menu(hwnd: HWND, items: &[MenuItem]) -> Result<Option<u32>, Error> {
    unsafe {
        let menu = CreatePopupMenu()?;
        let result = fill_and_track(hwnd, menu, items);
        let _ = DestroyMenu(menu);
        result
    }
}

unsafe fn fill_and_track(hwnd: HWND, menu: HMENU, items: &[MenuItem]) -> Result<Option<u32>, Error> {
    for item in items {
        match item {
            MenuItem::Separator => AppendMenuW(menu, MF_SEPARATOR, 0, PCWSTR::null())?,
            MenuItem::Command { id, label, enabled } => {
                let wide = to_wide(label);
                let flags = if *enabled {
                    MF_STRING
                } else {
                    MF_STRING | MF_GRAYED
                };
                AppendMenuW(menu, flags, *id as usize, PCWSTR(wide.as_ptr()))?;
            }
        }
    }

    let mut pt = POINT::default();
    GetCursorPos(&mut pt)?;

    // Without the foreground switch the menu does not close on outside clicks
    let _ = SetForegroundWindow(hwnd);
    let picked = TrackPopupMenu(
        menu,
        TPM_RETURNCMD | TPM_NONOTIFY | TPM_RIGHTBUTTON | TPM_BOTTOMALIGN,
        pt.x,
        pt.y,
        0,
        hwnd,
        None,
    );
    let _ = PostMessageW(hwnd, WM_NULL, WPARAM(0), LPARAM(0));

    Ok((picked.0 > 0).then_some(picked.0 as u32))
}
