//! Removes the `mdbook-plantuml-renderer` binary that `cargo install` placed
//! under the current user's home directory.

pub mod actions;
pub mod config;
pub mod error;
pub mod executor;
pub mod fs;

pub use config::InstallTarget;
pub use error::UninstallError;
pub use executor::{uninstall, uninstall_from, Outcome};
