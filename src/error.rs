use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::actions::check_path_exists::PathKind;

pub type Result<T> = std::result::Result<T, UninstallError>;

/// Every way an uninstall can fail. All of them mean a filesystem operation
/// did not go through, so callers abort on any variant.
#[derive(Debug, Error)]
pub enum UninstallError {
    #[error("Could not determine the home directory of the current user")]
    HomeNotFound,

    #[error("Failed to inspect '{}'", path.display())]
    Inspect {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Refusing to remove '{}': it is a {kind}, not a file", path.display())]
    NotAFile { path: PathBuf, kind: PathKind },

    #[error("Failed to delete file: {}", path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
