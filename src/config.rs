use std::env::consts::EXE_SUFFIX;
use std::path::PathBuf;

pub const DEFAULT_INSTALL_DIR: &str = ".cargo/bin";
pub const DEFAULT_BINARY_NAME: &str = "mdbook-plantuml-renderer";

/// Where the installed binary lives, relative to the home directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallTarget {
    pub install_dir: PathBuf,
    pub binary_name: String,
}

impl InstallTarget {
    pub fn new(install_dir: impl Into<PathBuf>, binary_name: impl Into<String>) -> Self {
        Self {
            install_dir: install_dir.into(),
            binary_name: binary_name.into(),
        }
    }

    pub fn relative_path(&self) -> PathBuf {
        self.install_dir.join(&self.binary_name)
    }
}

impl Default for InstallTarget {
    fn default() -> Self {
        Self::new(
            DEFAULT_INSTALL_DIR,
            format!("{}{}", DEFAULT_BINARY_NAME, EXE_SUFFIX),
        )
    }
}
