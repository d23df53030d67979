//! LaunchEntry entity - one application that can be started elevated
//!
//! Entries come from `apps.json`, a JSON array of objects with `Path` and
//! `DisplayName` string fields:
//!
//! ```json
//! [ { "Path": "C:\\Windows\\System32\\notepad.exe", "DisplayName": "Notepad" } ]
//! ```

use serde::Deserialize;

/// Raw record as it appears in the configuration file.
///
/// Missing fields and JSON `null` both deserialize to `None`. Keys are
/// case-sensitive; anything other than `Path` and `DisplayName` is ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct LaunchEntryRecord {
    #[serde(rename = "Path", default)]
    pub path: Option<String>,

    #[serde(rename = "DisplayName", default)]
    pub display_name: Option<String>,
}

/// A validated (path, display name) pair. List order is menu order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LaunchEntry {
    /// Filesystem path to the executable
    pub path: String,
    /// Label shown in the tray menu
    pub display_name: String,
}

impl LaunchEntry {
    /// Create a new entry. No validation happens here; see [`LaunchEntry::is_valid`].
    pub fn new(path: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            display_name: display_name.into(),
        }
    }

    /// Both fields carry at least one non-whitespace character
    pub fn is_valid(&self) -> bool {
        !is_blank(&self.path) && !is_blank(&self.display_name)
    }

    /// Convert a raw record, dropping it when either field is blank.
    ///
    /// Kept values are trimmed so the launcher never sees padded paths.
    pub fn from_record(record: LaunchEntryRecord) -> Option<Self> {
        let trimmed = |value: Option<String>| value.as_deref().map_or("", str::trim).to_string();
        let entry = Self::new(trimmed(record.path), trimmed(record.display_name));
        Some(entry).filter(Self::is_valid)
    }
}

/// True for empty and whitespace-only strings
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
