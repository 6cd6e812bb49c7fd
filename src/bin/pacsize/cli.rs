//! Command-line interface for `pacsize`.
//!
//! Helper methods on [`Cli`] accept a [`FileConfig`] reference so that
//! config-file values act as defaults that CLI arguments can override.

use std::path::{Path, PathBuf};

use clap::Parser;

use pacspace::config::{FileConfig, ProfileOptions};

/// Profile the installed footprint of a package's dependency tree.
///
/// Resolves every dependency with `pactree`, looks up installed sizes with a
/// single `pacman -Si` call, and estimates how the total splits between
/// `/opt` and `/usr`. With no arguments the ROCm HIP SDK is profiled.
#[derive(Parser, Debug)]
#[command(name = "pacsize")]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Package whose dependency tree is profiled [default: rocm-hip-sdk]
    #[arg(short = 't', long)]
    target: Option<String>,

    /// Number of packages listed in the ranked table [default: 10]
    #[arg(short = 'n', long)]
    top: Option<usize>,

    /// Output the report as a single JSON object
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

    /// Resolve profile options.
    ///
    /// Priority: CLI argument > config file > hardcoded default. The location
    /// pattern can only be changed through the config file.
    #[must_use]
    pub fn profile_options(&self, config: &FileConfig) -> ProfileOptions {
        let defaults = ProfileOptions::default();

        ProfileOptions {
            target: self
                .target
                .clone()
                .or_else(|| config.profile.target.clone())
                .unwrap_or(defaults.target),
            top: self.top.or(config.profile.top).unwrap_or(defaults.top),
            opt_pattern: config
                .profile
                .opt_pattern
                .clone()
                .unwrap_or(defaults.opt_pattern),
        }
    }
}
