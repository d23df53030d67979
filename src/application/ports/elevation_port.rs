//! ElevationPort - interface for starting a process as administrator
//!
//! Implementations hand the request to the platform shell so the user sees
//! the normal consent prompt. The call is fire-and-forget: it returns once
//! the OS accepted (or refused) the start request.

use std::path::{Path, PathBuf};

pub use crate::domain::errors::ElevationError;

/// What to start
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElevationRequest {
    /// Executable to start
    pub path: PathBuf,
    /// Working directory for the new process, normally the executable's folder
    pub working_dir: Option<PathBuf>,
}

impl ElevationRequest {
    /// Build a request that runs `path` from its own directory
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let working_dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf);
        Self { path, working_dir }
    }
}

/// Port interface for elevated process start
pub trait ElevationPort {
    /// Ask the OS to start the target with administrator rights
    fn start_elevated(&self, request: &ElevationRequest) -> Result<(), ElevationError>;
}

/// An elevation port that accepts every request without starting anything
pub struct NullElevationPort;

impl ElevationPort for NullElevationPort {
    fn start_elevated(&self, _request: &ElevationRequest) -> Result<(), ElevationError> {
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;

    use super::*;

    /// Records requests and answers with a scripted result
    pub struct RecordingElevationPort {
        pub requests: RefCell<Vec<ElevationRequest>>,
        pub outcome: Result<(), ElevationError>,
    }

    impl RecordingElevationPort {
        pub fn accepting() -> Self {
            Self {
                requests: RefCell::new(Vec::new()),
                outcome: Ok(()),
            }
        }

        pub fn failing(error: ElevationError) -> Self {
            Self {
                requests: RefCell::new(Vec::new()),
                outcome: Err(error),
            }
        }

        pub fn calls(&self) -> usize {
            self.requests.borrow().len()
        }
    }

    impl ElevationPort for RecordingElevationPort {
        fn start_elevated(&self, request: &ElevationRequest) -> Result<(), ElevationError> {
            self.requests.borrow_mut().push(request.clone());
            self.outcome.clone()
        }
    }
}
