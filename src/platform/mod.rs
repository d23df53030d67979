//! Platform abstraction layer
//!
//! Currently only Windows (win32) is supported.

#[cfg(target_os = "windows")]
pub mod win32;
