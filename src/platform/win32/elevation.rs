//! Elevated process start through the shell's "runas" verb
//!
//! `ShellExecuteExW` shows the UAC consent prompt and returns once the
//! request was accepted or refused. The child is never waited on.

use windows::core::{w, PCWSTR};
use windows::Win32::Foundation::{
    ERROR_CANCELLED, ERROR_FILE_NOT_FOUND, ERROR_PATH_NOT_FOUND, HWND,
};
use windows::Win32::UI::Shell::{
    ShellExecuteExW, SEE_MASK_FLAG_NO_UI, SEE_MASK_NOASYNC, SHELLEXECUTEINFOW,
};
use windows::Win32::UI::WindowsAndMessaging::SW_SHOWNORMAL;

use elevate_tray::application::ports::{ElevationError, ElevationPort, ElevationRequest};

use super::to_wide;

/// [`ElevationPort`] backed by `ShellExecuteExW`
pub struct ShellElevation {
    /// Window that owns the consent prompt
    owner: HWND,
}

impl ShellElevation {
    pub fn new(owner: HWND) -> Self {
        Self { owner }
    }
}

impl ElevationPort for ShellElevation {
    fn start_elevated(&self, request: &ElevationRequest) -> Result<(), ElevationError> {
        let file = to_wide(&request.path.to_string_lossy());
        let dir = request
            .working_dir
            .as_ref()
            .map(|d| to_wide(&d.to_string_lossy()));

        let mut info = SHELLEXECUTEINFOW {
            cbSize: std::mem::size_of::<SHELLEXECUTEINFOW>() as u32,
            // NO_UI: failures are reported by balloon, not by a shell dialog
            fMask: SEE_MASK_NOASYNC | SEE_MASK_FLAG_NO_UI,
            hwnd: self.owner,
            lpVerb: w!("runas"),
            lpFile: PCWSTR(file.as_ptr()),
            lpDirectory: dir
                .as_ref()
                .map_or(PCWSTR::null(), |d| PCWSTR(d.as_ptr())),
            nShow: SW_SHOWNORMAL.0,
            ..Default::default()
        };

        unsafe { ShellExecuteExW(&mut info) }.map_err(|e| {
            let code = e.code();
            if code == ERROR_CANCELLED.to_hresult() {
                ElevationError::Cancelled
            } else if code == ERROR_FILE_NOT_FOUND.to_hresult()
                || code == ERROR_PATH_NOT_FOUND.to_hresult()
            {
                ElevationError::NotFound(request.path.clone())
            } else {
                ElevationError::Os {
                    code: code.0,
                    message: e.message().to_string(),
                }
            }
        })
    }
}
