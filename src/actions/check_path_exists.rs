use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Result, UninstallError};

/// What occupies a path, looked up without following symlinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    Missing,
    File,
    Symlink,
    Directory,
    Other,
}

impl PathKind {
    /// Whether `remove_file` is the right way to get rid of this entry.
    pub fn is_removable(self) -> bool {
        matches!(self, PathKind::File | PathKind::Symlink)
    }
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PathKind::Missing => "missing path",
            PathKind::File => "file",
            PathKind::Symlink => "symbolic link",
            PathKind::Directory => "directory",
            PathKind::Other => "special file",
        };
        f.write_str(name)
    }
}

pub(crate) fn execute(path: &Path) -> Result<PathKind> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(PathKind::Missing),
        Err(source) => {
            return Err(UninstallError::Inspect {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    let file_type = metadata.file_type();
    let kind = if file_type.is_symlink() {
        PathKind::Symlink
    } else if file_type.is_file() {
        PathKind::File
    } else if file_type.is_dir() {
        PathKind::Directory
    } else {
        PathKind::Other
    };
    Ok(kind)
}
