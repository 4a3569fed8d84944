//! Error types for scaffolding runs

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Terminal failures for a scaffolding run
///
/// Every variant aborts the run; there is no local recovery. Filesystem
/// variants carry the failing path so the user can see exactly where the run
/// stopped. Files written earlier in the same run are left in place, so
/// re-invoking the tool overwrites and completes the partial tree.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The interactive prompt could not be presented or read
    #[error("could not read project name from the terminal")]
    InputUnavailable(#[source] io::Error),

    /// The project name cannot be used as a directory name
    #[error("invalid project name {name:?}: {reason}")]
    InvalidName { name: String, reason: &'static str },

    /// A planned directory could not be created
    #[error("failed to create directory {}", .path.display())]
    PathCreation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A planned file could not be written after its directory existed
    #[error("failed to write file {}", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScaffoldError {
    /// The filesystem path the run failed on, when there is one
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            ScaffoldError::PathCreation { path, .. } | ScaffoldError::FileWrite { path, .. } => {
                Some(path)
            }
            _ => None,
        }
    }
}
