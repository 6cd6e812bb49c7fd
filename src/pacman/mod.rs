//! Size queries against the pacman package manager.
//!
//! [`Pacman`] wraps a [`CommandRunner`] and exposes the two queries the tools
//! need: the bytes freed by a recursive cascade removal, and the installed
//! size of a batch of packages.

pub mod parse;

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::command::{CommandRunner, Invocation, Program};
use crate::error::Result;

pub use parse::{ParserState, parse_byte_line, parse_size_blocks, sum_byte_lines};

/// Installed size in bytes, keyed by package name.
pub type PackageSizeMap = BTreeMap<String, u64>;

/// Client for the pacman queries used by both tools.
#[derive(Debug)]
pub struct Pacman<R> {
    runner: R,
    use_sudo: bool,
}

impl<R: CommandRunner> Pacman<R> {
    /// Create a client that runs pacman without `sudo`.
    #[must_use]
    pub const fn new(runner: R) -> Self {
        Self {
            runner,
            use_sudo: false,
        }
    }

    /// Run the removal dry run through `sudo`.
    #[must_use]
    pub const fn with_sudo(mut self, use_sudo: bool) -> Self {
        self.use_sudo = use_sudo;
        self
    }

    /// Compute the bytes freed by recursively removing `package`.
    ///
    /// Runs `pacman -Rcs -p --print-format %s <package>`, which prints the
    /// size of every package the cascade would remove, and sums those lines.
    /// Nothing is removed.
    ///
    /// # Errors
    ///
    /// - [`PacError::MissingBinary`](crate::error::PacError::MissingBinary) if
    ///   pacman (or sudo, when enabled) is not on the search path
    /// - [`PacError::CommandFailed`](crate::error::PacError::CommandFailed)
    ///   with pacman's stderr if the dry run exits non-zero
    pub fn removal_size(&self, package: &str) -> Result<u64> {
        let invocation = Invocation::new(
            Program::PACMAN,
            ["-Rcs", "-p", "--print-format", "%s", package],
        )
        .privileged(self.use_sudo);

        let output = self
            .runner
            .run(&invocation)?
            .into_success(Program::PACMAN)?;

        let total = sum_byte_lines(&output.stdout);
        debug!(package, total, "summed removal dry run");

        Ok(total)
    }

    /// Look up the installed size of every package in `packages`.
    ///
    /// All names are passed to a single `pacman -Si` call. An empty slice
    /// returns an empty map without running pacman. Names pacman does not
    /// know are simply absent from the result.
    ///
    /// # Errors
    ///
    /// Returns [`PacError::MissingBinary`](crate::error::PacError::MissingBinary)
    /// or [`PacError::Spawn`](crate::error::PacError::Spawn) if pacman cannot
    /// be run. A non-zero exit is only logged.
    pub fn installed_sizes<S: AsRef<str>>(&self, packages: &[S]) -> Result<PackageSizeMap> {
        if packages.is_empty() {
            return Ok(PackageSizeMap::new());
        }

        let mut args = vec!["-Si"];
        args.extend(packages.iter().map(AsRef::as_ref));
        let output = self.runner.run(&Invocation::new(Program::PACMAN, args))?;

        if !output.success() {
            warn!(
                status = %output.status,
                "pacman -Si reported an error; sizes may be incomplete"
            );
        }

        let sizes = parse_size_blocks(&output.stdout);
        debug!(
            requested = packages.len(),
            parsed = sizes.len(),
            "parsed installed sizes"
        );

        Ok(sizes)
    }
}
