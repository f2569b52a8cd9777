use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use log::info;

use plantuml_uninstall::{uninstall, Outcome};

/// Remove the mdbook-plantuml-renderer binary from ~/.cargo/bin
#[derive(Parser)]
#[command(name = "mdbook-plantuml-uninstall")]
#[command(version, about, long_about = None)]
struct Cli {}

fn main() {
    Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    if let Err(err) = run() {
        eprintln!("{} {:#}", "Error:".red(), err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    match uninstall().context("Uninstall failed")? {
        Outcome::Removed(path) => info!("Removed {}", path.display()),
        Outcome::NotInstalled(path) => info!("Nothing to remove at {}", path.display()),
    }
    Ok(())
}
