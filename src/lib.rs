//! # pacspace
//!
//! Disk-space estimates for pacman-based systems, built on the text output of
//! `pacman` and `pactree`.
//!
//! Two command-line tools share this library:
//!
//! - `pacremove <package>` sums the sizes reported by a recursive cascade
//!   removal dry run (`pacman -Rcs -p`) to show how much space removing the
//!   package would free.
//! - `pacsize` resolves a dependency tree with `pactree`, looks up every
//!   installed size in one `pacman -Si` call, and splits the footprint
//!   between `/opt` and `/usr` using a package-name heuristic.
//!
//! External commands always run with a pinned `PATH` and `LC_ALL` so their
//! output stays in the format the parsers in [`pacman::parse`] and
//! [`pactree`] expect.

pub mod command;
pub mod config;
pub mod error;
pub mod location;
pub mod logging;
pub mod output;
pub mod pacman;
pub mod pactree;
pub mod progress;
pub mod report;
pub mod utils;

pub use config::{CommandEnv, ProfileOptions, RemovalOptions};
pub use error::PacError;
