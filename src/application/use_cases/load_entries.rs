//! ConfigLoader - read the launch list from `apps.json`
//!
//! Every call is one fresh read-then-parse of the file; reloading is just
//! calling [`ConfigLoader::load`] again. Records that fail the validity
//! check are dropped silently, only the counts are logged.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::application::services::Notifier;
use crate::domain::entities::{LaunchEntry, LaunchEntryRecord};
use crate::domain::errors::ConfigError;

/// Title used for configuration notices
pub const CONFIG_ERROR_TITLE: &str = "Configuration";

/// Result of one successful load
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    /// Valid entries in file order
    pub entries: Vec<LaunchEntry>,
    /// Number of records in the file, valid or not
    pub total: usize,
}

impl Catalog {
    /// Records dropped by the validity check
    pub fn skipped(&self) -> usize {
        self.total.saturating_sub(self.entries.len())
    }
}

/// Parse the configuration text into a catalog.
///
/// A leading UTF-8 BOM is ignored and a top-level `null` counts as an empty
/// list.
pub fn parse_catalog(content: &str) -> Result<Catalog, serde_json::Error> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let records: Option<Vec<LaunchEntryRecord>> = serde_json::from_str(content)?;
    let records = records.unwrap_or_default();

    let total = records.len();
    let entries = records
        .into_iter()
        .filter_map(LaunchEntry::from_record)
        .collect();

    Ok(Catalog { entries, total })
}

/// Loads launch entries from a fixed file
pub struct ConfigLoader {
    path: PathBuf,
    notifier: Rc<Notifier>,
}

impl ConfigLoader {
    pub fn new(path: impl Into<PathBuf>, notifier: Rc<Notifier>) -> Self {
        Self {
            path: path.into(),
            notifier,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the valid entries.
    ///
    /// A missing file yields an empty list and a warning notice. Unreadable
    /// or malformed files are returned as [`ConfigError`].
    pub fn load(&self) -> Result<Vec<LaunchEntry>, ConfigError> {
        self.load_catalog().map(|catalog| catalog.entries)
    }

    /// Like [`ConfigLoader::load`] but keeps the record count
    pub fn load_catalog(&self) -> Result<Catalog, ConfigError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log_warn!("ConfigLoader: {:?} not found, no applications loaded", self.path);
                self.notifier.warn(
                    CONFIG_ERROR_TITLE,
                    &format!(
                        "{} was not found. No applications are available.",
                        self.file_name()
                    ),
                );
                return Ok(Catalog::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let catalog = parse_catalog(&content).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })?;

        log!(
            "ConfigLoader: {} of {} entries valid in {:?}",
            catalog.entries.len(),
            catalog.total,
            self.path
        );
        Ok(catalog)
    }

    /// Load, turning any [`ConfigError`] into an error notice and an empty list
    pub fn load_or_empty(&self) -> Vec<LaunchEntry> {
        self.load_catalog_or_empty().entries
    }

    pub fn load_catalog_or_empty(&self) -> Catalog {
        match self.load_catalog() {
            Ok(catalog) => catalog,
            Err(e) => {
                log_error!("ConfigLoader: {}", e);
                self.notifier.error(CONFIG_ERROR_TITLE, &e.to_string());
                Catalog::default()
            }
        }
    }

    fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}
