//! Tray icon loading from .ico files and the stock application icon

use std::path::Path;

use windows::core::PCWSTR;
use windows::Win32::UI::WindowsAndMessaging::{
    DestroyIcon, GetSystemMetrics, LoadIconW, LoadImageW, HICON, IDI_APPLICATION, IMAGE_ICON,
    LR_LOADFROMFILE, SM_CXSMICON, SM_CYSMICON,
};

use elevate_tray::application::ports::IconPort;
use elevate_tray::domain::errors::IconError;

use super::to_wide;

/// [`IconPort`] producing `HICON`s
pub struct Win32IconPort;

impl IconPort for Win32IconPort {
    type Handle = HICON;

    fn load_from_file(&self, path: &Path) -> Result<HICON, IconError> {
        if !path.is_file() {
            return Err(IconError::NotFound(path.to_path_buf()));
        }

        let wide = to_wide(&path.to_string_lossy());
        unsafe {
            LoadImageW(
                None,
                PCWSTR(wide.as_ptr()),
                IMAGE_ICON,
                GetSystemMetrics(SM_CXSMICON),
                GetSystemMetrics(SM_CYSMICON),
                LR_LOADFROMFILE,
            )
        }
        .map(|handle| HICON(handle.0))
        .map_err(|e| IconError::Load {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        })
    }

    fn system_default(&self) -> HICON {
        // Shared icon: never passed to DestroyIcon
        unsafe { LoadIconW(None, IDI_APPLICATION) }.unwrap_or_default()
    }

    fn release(&self, handle: &HICON) {
        unsafe {
            let _ = DestroyIcon(*handle);
        }
    }
}
