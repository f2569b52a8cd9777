use std::path::{Path, PathBuf};

use crate::error::{Result, UninstallError};

pub(crate) fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or(UninstallError::HomeNotFound)
}

/// Resolves `relative` against `home`.
pub(crate) fn join_home(home: &Path, relative: &Path) -> PathBuf {
    // `Path::join` would discard `home` for an absolute argument.
    let relative = relative.strip_prefix("/").unwrap_or(relative);
    home.join(relative)
}
