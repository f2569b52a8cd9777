use colored::*;
use log::debug;
use std::path::{Path, PathBuf};

use crate::actions::{check_path_exists, delete_file};
use crate::actions::check_path_exists::PathKind;
use crate::config::InstallTarget;
use crate::error::{Result, UninstallError};
use crate::fs::{home_dir, join_home};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Removed(PathBuf),
    NotInstalled(PathBuf),
}

/// Removes the default install target from the current user's home directory.
pub fn uninstall() -> Result<Outcome> {
    uninstall_from(&home_dir()?, &InstallTarget::default())
}

/// Removes `target` from under `home`. Succeeds without touching anything when
/// the target is not there; fails if it is a directory or special file.
pub fn uninstall_from(home: &Path, target: &InstallTarget) -> Result<Outcome> {
    let path = join_home(home, &target.relative_path());
    debug!("Uninstall target: {}", path.display());

    let kind = check_path_exists::execute(&path)?;
    debug!("Found {} at {}", kind, path.display());
    match kind {
        PathKind::Missing => {
            debug!("Nothing installed at {}, skipping", path.display());
            Ok(Outcome::NotInstalled(path))
        }
        kind if kind.is_removable() => {
            println!("{} {}", "Removing".green(), path.display());
            if !delete_file::execute(&path)? {
                debug!("{} vanished before it could be deleted", path.display());
            }
            Ok(Outcome::Removed(path))
        }
        kind => Err(UninstallError::NotAFile { path, kind }),
    }
}
