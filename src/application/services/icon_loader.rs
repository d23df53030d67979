//! IconLoader - tray icon lookup with fallback and caching
//!
//! Candidate files are tried in order (beside the executable, then the
//! working directory). When none loads, the platform default icon is used,
//! which never fails. The first result is cached for the life of the loader.
//!
//! The loader owns what it loaded: [`IconLoader::dispose`] releases it
//! exactly once and runs automatically on drop.

use std::path::PathBuf;
use std::rc::Rc;

use crate::application::ports::IconPort;

/// Where a loaded icon came from
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IconSource {
    File(PathBuf),
    SystemDefault,
}

/// A cached icon handle
#[derive(Debug)]
pub struct LoadedIcon<H> {
    pub handle: H,
    pub source: IconSource,
}

impl<H> LoadedIcon<H> {
    /// Loaded from a file, so the loader must release it
    pub fn is_owned(&self) -> bool {
        matches!(self.source, IconSource::File(_))
    }
}

/// Loads and owns the tray icon
pub struct IconLoader<P: IconPort> {
    port: P,
    candidates: Vec<PathBuf>,
    cached: Option<Rc<LoadedIcon<P::Handle>>>,
    disposed: bool,
}

impl<P: IconPort> IconLoader<P> {
    /// Create a loader trying `candidates` in order
    pub fn new(port: P, candidates: Vec<PathBuf>) -> Self {
        Self {
            port,
            candidates,
            cached: None,
            disposed: false,
        }
    }

    /// Get the icon, loading it on first use.
    ///
    /// Repeated calls return the same `Rc` without touching the filesystem.
    pub fn load_icon(&mut self) -> Rc<LoadedIcon<P::Handle>> {
        if let Some(cached) = &self.cached {
            return Rc::clone(cached);
        }

        if self.disposed {
            log_warn!("IconLoader: load after dispose, handing out the system default");
            return Rc::new(LoadedIcon {
                handle: self.port.system_default(),
                source: IconSource::SystemDefault,
            });
        }

        let icon = Rc::new(self.resolve());
        self.cached = Some(Rc::clone(&icon));
        icon
    }

    /// The cached icon, if one was loaded
    pub fn cached(&self) -> Option<&Rc<LoadedIcon<P::Handle>>> {
        self.cached.as_ref()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Release the owned icon. Safe to call more than once.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;

        if let Some(icon) = self.cached.take() {
            if icon.is_owned() {
                log!("IconLoader: releasing icon from {:?}", icon.source);
                self.port.release(&icon.handle);
            }
        }
    }

    /// Walk the fallback chain
    fn resolve(&self) -> LoadedIcon<P::Handle> {
        for path in &self.candidates {
            match self.port.load_from_file(path) {
                Ok(handle) => {
                    log!("IconLoader: loaded {:?}", path);
                    return LoadedIcon {
                        handle,
                        source: IconSource::File(path.clone()),
                    };
                }
                Err(e) => log!("IconLoader: {}, trying next", e),
            }
        }

        log_warn!("IconLoader: no icon file found, using system default");
        LoadedIcon {
            handle: self.port.system_default(),
            source: IconSource::SystemDefault,
        }
    }
}

impl<P: IconPort> Drop for IconLoader<P> {
    fn drop(&mut self) {
        self.dispose();
    }
}
