//! Command-line interface for `pacremove`.
//!
//! Helper methods on [`Cli`] accept a [`FileConfig`] reference so that
//! config-file values act as defaults that CLI arguments can override.

use std::path::{Path, PathBuf};

use clap::Parser;

use pacspace::config::{FileConfig, RemovalOptions};

/// Estimate the disk space freed by recursively removing a package.
///
/// Runs `pacman -Rcs -p` (a dry run, nothing is removed) and sums the size of
/// every package the cascade would take with it.
#[derive(Parser, Debug)]
#[command(name = "pacremove")]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Package whose recursive removal is simulated
    package: String,

    /// Run pacman directly instead of through sudo
    #[arg(long)]
    no_sudo: bool,

    /// Output the result as a single JSON object
    #[arg(long)]
    json: bool,

    /// Show debug logging on stderr
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Read configuration from this file instead of the default location
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<PathBuf>,
}

impl Cli {
    #[must_use]
    pub fn package(&self) -> &str {
        &self.package
    }

    #[must_use]
    pub const fn json(&self) -> bool {
        self.json
    }

    #[must_use]
    pub const fn verbose(&self) -> bool {
        self.verbose
    }

    #[must_use]
    pub fn config_path(&self) -> Option<&Path> {
        self.config.as_deref()
    }

    /// Resolve removal options.
    ///
    /// `--no-sudo` wins; otherwise the config file's `use_sudo`, then `true`.
    #[must_use]
    pub fn removal_options(&self, config: &FileConfig) -> RemovalOptions {
        RemovalOptions {
            use_sudo: !self.no_sudo
                && config
                    .removal
                    .use_sudo
                    .unwrap_or(RemovalOptions::default().use_sudo),
        }
    }
}
