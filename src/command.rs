//! External command invocation.
//!
//! Every call to `pacman`, `pactree` or `sudo` goes through the
//! [`CommandRunner`] trait so the clients in [`crate::pacman`] and
//! [`crate::pactree`] can be exercised against canned output. The
//! [`SystemRunner`] implementation resolves binaries on a fixed search path and
//! runs them with a cleared environment so that their output is always the
//! untranslated English text the parsers expect.

use std::fmt;
use std::path::PathBuf;
use std::process::{Command, ExitStatus};

use tracing::debug;

use crate::config::CommandEnv;
use crate::error::{PacError, Result};

/// An external program this crate knows how to call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Program {
    /// Binary name looked up on the search path
    pub name: &'static str,

    /// Remediation hint shown when the binary is missing
    pub hint: Option<&'static str>,
}

impl Program {
    /// The package manager.
    pub const PACMAN: Self = Self {
        name: "pacman",
        hint: None,
    };

    /// The dependency-tree tool shipped with `pacman-contrib`.
    pub const PACTREE: Self = Self {
        name: "pactree",
        hint: Some("Please install it with: sudo pacman -S pacman-contrib"),
    };

    /// Privilege elevation wrapper.
    pub const SUDO: Self = Self {
        name: "sudo",
        hint: None,
    };

    fn missing(self) -> PacError {
        PacError::MissingBinary {
            name: self.name.to_string(),
            hint: self.hint,
        }
    }
}

/// A single external command to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: Program,
    pub args: Vec<String>,

    /// Run the program through `sudo`
    pub privileged: bool,
}

impl Invocation {
    #[must_use]
    pub fn new<I, S>(program: Program, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program,
            args: args.into_iter().map(Into::into).collect(),
            privileged: false,
        }
    }

    #[must_use]
    pub const fn privileged(mut self, privileged: bool) -> Self {
        self.privileged = privileged;
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.privileged {
            write!(f, "{} ", Program::SUDO.name)?;
        }
        write!(f, "{}", self.program.name)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Captured result of a finished command.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    #[must_use]
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Convert an unsuccessful exit into [`PacError::CommandFailed`].
    ///
    /// # Errors
    ///
    /// Returns the failure with the trimmed stderr text when the exit status
    /// is non-zero.
    pub fn into_success(self, program: Program) -> Result<Self> {
        if self.success() {
            return Ok(self);
        }

        Err(PacError::CommandFailed {
            program: program.name.to_string(),
            status: self.status,
            stderr: self.stderr.trim().to_string(),
        })
    }
}

/// Runs external commands and captures their output.
///
/// Implementations block until the child exits.
pub trait CommandRunner {
    /// Run `invocation` to completion.
    ///
    /// # Errors
    ///
    /// Returns [`PacError::MissingBinary`] when the program cannot be found
    /// and [`PacError::Spawn`] when it cannot be started. A non-zero exit is
    /// not an error at this level.
    fn run(&self, invocation: &Invocation) -> Result<CommandOutput>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, invocation: &Invocation) -> Result<CommandOutput> {
        (**self).run(invocation)
    }
}

/// [`CommandRunner`] backed by real child processes.
#[derive(Debug, Clone)]
pub struct SystemRunner {
    env: CommandEnv,
}

impl SystemRunner {
    #[must_use]
    pub const fn new(env: CommandEnv) -> Self {
        Self { env }
    }

    /// Resolve `program` to an absolute path on the configured search path.
    ///
    /// # Errors
    ///
    /// Returns [`PacError::MissingBinary`] if no executable with that name
    /// exists in any search path entry.
    pub fn locate(&self, program: Program) -> Result<PathBuf> {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("/"));

        which::which_in(program.name, Some(&self.env.search_path), cwd)
            .map_err(|_| program.missing())
    }

    fn command(&self, invocation: &Invocation) -> Result<Command> {
        let binary = self.locate(invocation.program)?;

        let mut command = if invocation.privileged {
            let mut sudo = Command::new(self.locate(Program::SUDO)?);
            sudo.arg(&binary);
            sudo
        } else {
            Command::new(&binary)
        };

        command
            .args(&invocation.args)
            .env_clear()
            .env("LC_ALL", &self.env.locale)
            .env("PATH", &self.env.search_path);

        Ok(command)
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<CommandOutput> {
        let mut command = self.command(invocation)?;
        debug!(command = %invocation, "running external command");

        let output = command.output().map_err(|source| PacError::Spawn {
            program: invocation.program.name.to_string(),
            source,
        })?;

        debug!(
            status = %output.status,
            stdout_bytes = output.stdout.len(),
            stderr_bytes = output.stderr.len(),
            "command finished"
        );

        Ok(CommandOutput {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
