//! Application Configuration
//!
//! Two files drive the tray:
//! - `apps.json` beside the executable: the launch list (see `ConfigLoader`)
//! - `settings.toml` (optional): tooltip, toast timeout and logging switches

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::application::services::DEFAULT_TIMEOUT_MS;
use crate::domain::errors::SettingsError;

/// Name of the launch list file
pub const APPS_FILE_NAME: &str = "apps.json";

/// Name of the tray icon file
pub const ICON_FILE_NAME: &str = "app.ico";

/// Name of the optional settings file
pub const SETTINGS_FILE_NAME: &str = "settings.toml";

/// Folder under the user config dir that may hold settings.toml
pub const APP_DIR_NAME: &str = "elevate-tray";

/// Get the directory where the executable is located
pub fn exe_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

// ============================================================================
// PATHS
// ============================================================================

/// Resolved file locations
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppPaths {
    /// Directory of the running executable
    pub exe_dir: PathBuf,
    /// Process working directory
    pub working_dir: PathBuf,
}

impl AppPaths {
    /// Resolve from the running process
    pub fn discover() -> Self {
        let working_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::new(exe_dir(), working_dir)
    }

    pub fn new(exe_dir: impl Into<PathBuf>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            exe_dir: exe_dir.into(),
            working_dir: working_dir.into(),
        }
    }

    /// `apps.json` beside the executable
    pub fn apps_file(&self) -> PathBuf {
        self.exe_dir.join(APPS_FILE_NAME)
    }

    /// Icon files to try, in order
    pub fn icon_candidates(&self) -> Vec<PathBuf> {
        let mut candidates = vec![self.exe_dir.join(ICON_FILE_NAME)];
        let in_cwd = self.working_dir.join(ICON_FILE_NAME);
        if !candidates.contains(&in_cwd) {
            candidates.push(in_cwd);
        }
        candidates
    }

    /// Settings files to try, in order: user config dir, then exe dir
    pub fn settings_candidates(&self) -> Vec<PathBuf> {
        let mut candidates = Vec::new();
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join(APP_DIR_NAME).join(SETTINGS_FILE_NAME));
        }
        candidates.push(self.exe_dir.join(SETTINGS_FILE_NAME));
        candidates
    }
}

// ============================================================================
// SETTINGS (settings.toml)
// ============================================================================

/// Optional user settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Tray icon tooltip
    #[serde(default = "default_tooltip")]
    pub tooltip: String,

    #[serde(default)]
    pub notifications: NotificationSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tooltip: default_tooltip(),
            notifications: NotificationSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

fn default_tooltip() -> String {
    "Elevate Tray".to_string()
}

/// Toast settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NotificationSettings {
    /// Default toast duration in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Show "Loaded N of M applications" after a manual reload
    #[serde(default = "default_true")]
    pub show_load_summary: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            show_load_summary: true,
        }
    }
}

impl NotificationSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

/// Log file settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

fn default_true() -> bool {
    true
}

/// Where the active settings came from. Reported by the caller once the
/// log is open.
#[derive(Debug)]
pub enum SettingsOrigin {
    /// No settings file among the candidates
    Defaults,
    /// Parsed from this file
    File(PathBuf),
    /// A file exists but could not be used; defaults apply
    Rejected { path: PathBuf, error: SettingsError },
}

impl Settings {
    /// First existing settings file among the candidates
    pub fn find_config_path(candidates: &[PathBuf]) -> Option<PathBuf> {
        candidates.iter().find(|candidate| candidate.is_file()).cloned()
    }

    /// Load settings from the standard locations, falling back to defaults
    pub fn load(paths: &AppPaths) -> (Self, SettingsOrigin) {
        Self::load_first(&paths.settings_candidates())
    }

    /// Load the first existing candidate. Only that file is tried; a broken
    /// file means defaults, not the next candidate.
    pub fn load_first(candidates: &[PathBuf]) -> (Self, SettingsOrigin) {
        let Some(path) = Self::find_config_path(candidates) else {
            return (Self::default(), SettingsOrigin::Defaults);
        };

        match Self::load_from_path(&path) {
            Ok(settings) => (settings, SettingsOrigin::File(path)),
            Err(error) => (Self::default(), SettingsOrigin::Rejected { path, error }),
        }
    }

    /// Load settings from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::{NamedTempFile, TempDir};

    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.tooltip, "Elevate Tray");
        assert_eq!(settings.notifications.timeout(), Duration::from_millis(3000));
        assert!(settings.notifications.show_load_summary);
        assert!(settings.logging.enabled);
    }

    #[test]
    fn test_parse_partial_settings() {
        let settings: Settings = toml::from_str(
            r#"
tooltip = "Admin tools"

[notifications]
timeout_ms = 5000
"#,
        )
        .unwrap();

        assert_eq!(settings.tooltip, "Admin tools");
        assert_eq!(settings.notifications.timeout_ms, 5000);
        assert!(settings.notifications.show_load_summary);
        assert!(settings.logging.enabled);
    }

    #[test]
    fn test_load_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nenabled = false").unwrap();
        file.flush().unwrap();

        let settings = Settings::load_from_path(file.path()).unwrap();
        assert!(!settings.logging.enabled);
    }

    #[test]
    fn test_load_from_path_rejects_bad_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "tooltip = [unclosed").unwrap();
        file.flush().unwrap();

        assert!(matches!(
            Settings::load_from_path(file.path()),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn test_settings_in_exe_dir_are_found() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(SETTINGS_FILE_NAME), "tooltip = \"Here\"\n").unwrap();
        let candidates = vec![
            dir.path().join("user").join(SETTINGS_FILE_NAME),
            dir.path().join(SETTINGS_FILE_NAME),
        ];

        let (settings, origin) = Settings::load_first(&candidates);
        assert_eq!(settings.tooltip, "Here");
        assert!(matches!(origin, SettingsOrigin::File(p) if p == candidates[1]));
    }

    #[test]
    fn test_first_candidate_wins() {
        let dir = TempDir::new().unwrap();
        let user = dir.path().join("user.toml");
        let exe = dir.path().join("exe.toml");
        std::fs::write(&user, "tooltip = \"User\"\n").unwrap();
        std::fs::write(&exe, "tooltip = \"Exe\"\n").unwrap();

        let (settings, _) = Settings::load_first(&[user, exe]);
        assert_eq!(settings.tooltip, "User");
    }

    #[test]
    fn test_no_settings_file_means_defaults() {
        let dir = TempDir::new().unwrap();
        let (settings, origin) = Settings::load_first(&[dir.path().join(SETTINGS_FILE_NAME)]);

        assert_eq!(settings, Settings::default());
        assert!(matches!(origin, SettingsOrigin::Defaults));
    }

    #[test]
    fn test_malformed_settings_are_reported_not_applied() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);
        std::fs::write(&path, "[notifications]\ntimeout_ms = \"soon\"\n").unwrap();

        let (settings, origin) = Settings::load_first(&[path.clone()]);
        assert_eq!(settings, Settings::default());
        match origin {
            SettingsOrigin::Rejected { path: rejected, error } => {
                assert_eq!(rejected, path);
                assert!(matches!(error, SettingsError::Parse(_)));
            }
            other => panic!("expected a rejected file, got {:?}", other),
        }
    }

    #[test]
    fn test_paths() {
        let paths = AppPaths::new("/opt/tray", "/home/user");
        assert_eq!(paths.apps_file(), PathBuf::from("/opt/tray/apps.json"));
        assert_eq!(
            paths.icon_candidates(),
            vec![
                PathBuf::from("/opt/tray/app.ico"),
                PathBuf::from("/home/user/app.ico")
            ]
        );
    }

    #[test]
    fn test_icon_candidates_dedup_when_same_dir() {
        let paths = AppPaths::new("/opt/tray", "/opt/tray");
        assert_eq!(paths.icon_candidates().len(), 1);
    }
}
