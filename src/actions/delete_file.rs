use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Result, UninstallError};

/// Removes the file or symlink at `path`. Returns `false` when something
/// else got there first and the entry is already gone.
pub(crate) fn execute(path: &Path) -> Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
        Err(source) => Err(UninstallError::Remove {
            path: path.to_path_buf(),
            source,
        }),
    }
}
