//! # pacremove
//!
//! Estimate how much disk space removing a package would free.
//!
//! ```bash
//! pacremove rocm-hip-sdk
//! pacremove --no-sudo --json rocm-hip-sdk
//! ```

mod cli;

use std::process::exit;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use pacspace::{
    command::SystemRunner, config::load_config, logging, output::JsonRemovalOutput,
    pacman::Pacman, utils::format_size,
};

use cli::Cli;

/// Width of the rule lines around the result.
const RULE_WIDTH: usize = 40;

/// Entry point for `pacremove`.
///
/// Usage errors and runtime errors both exit with status 1.
fn main() {
    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let code = i32::from(err.use_stderr());
            // a failed write has nowhere left to be reported
            err.print().ok();
            exit(code);
        }
    };

    if let Err(err) = inner_main(&args) {
        eprintln!("Error: {err}");

        exit(1);
    }
}

/// Run the dry-run removal and print the result.
///
/// # Errors
///
/// Returns errors from loading an explicit config file, a missing pacman or
/// sudo binary, a failed pacman run, or JSON serialization.
fn inner_main(args: &Cli) -> Result<()> {
    logging::init(args.verbose());

    let config = load_config(args.config_path())?;
    let removal = args.removal_options(&config);
    let json_mode = args.json();
    let package = args.package();

    if !json_mode {
        println!("Calculating space freed by removing '{package}' recursively...");
    }

    let pacman = Pacman::new(SystemRunner::new(config.command_env())).with_sudo(removal.use_sudo);
    let total = pacman.removal_size(package)?;

    if json_mode {
        let output = JsonRemovalOutput::new(package, total);
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        let rule = "-".repeat(RULE_WIDTH);
        println!("{rule}");
        println!(
            "Space to be freed: {}",
            format_size(total).bright_green().bold()
        );
        println!("{rule}");
    }

    Ok(())
}
