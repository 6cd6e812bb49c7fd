//! Configuration for both command-line tools.
//!
//! Values come from three layers: CLI arguments, the TOML file described in
//! [`file`], and hardcoded defaults.

pub mod env;
pub mod file;
pub mod options;

pub use env::CommandEnv;
pub use file::{FileConfig, load_config};
pub use options::{DEFAULT_TARGET, DEFAULT_TOP, ProfileOptions, RemovalOptions};
