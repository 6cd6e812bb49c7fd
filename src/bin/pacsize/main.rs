//! # pacsize
//!
//! Profile the installed footprint of a dependency tree and estimate how it
//! splits between `/opt` and `/usr`.
//!
//! ```bash
//! pacsize
//! pacsize --target rocm-hip-sdk --top 20 --json
//! ```

mod cli;

use std::process::exit;

use anyhow::Result;
use clap::Parser;
use pacspace::{
    command::SystemRunner, config::load_config, location::LocationClassifier, logging,
    output::JsonProfileOutput, pacman::Pacman, pactree::Pactree, progress, report::Distribution,
};

use cli::Cli;

/// Entry point for `pacsize`.
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

/// Resolve the dependency tree, query sizes, and print the distribution.
///
/// # Errors
///
/// Returns errors from loading an explicit config file, an invalid location
/// pattern, a missing pactree or pacman binary, or JSON serialization.
fn inner_main(args: &Cli) -> Result<()> {
    logging::init(args.verbose());

    let config = load_config(args.config_path())?;
    let profile = args.profile_options(&config);
    let classifier = LocationClassifier::new(&profile.opt_pattern)?;
    let json_mode = args.json();

    let runner = SystemRunner::new(config.command_env());
    let pactree = Pactree::new(&runner);
    let pacman = Pacman::new(&runner);

    if !json_mode {
        println!("Resolving full dependency tree for {}...", profile.target);
    }
    let dependencies = pactree.dependencies(&profile.target)?;

    if !json_mode {
        println!("Found {} dependencies.", dependencies.len());
        println!("Querying package sizes...");
    }

    let spinner = progress::spinner("Running pacman -Si...", json_mode);
    let sizes = pacman.installed_sizes(&dependencies);
    spinner.finish_and_clear();

    let distribution = Distribution::from_sizes(sizes?, &classifier);

    if json_mode {
        let output =
            JsonProfileOutput::new(&profile.target, dependencies.len(), &distribution, profile.top);
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        distribution.print_report(profile.top);
    }

    Ok(())
}
