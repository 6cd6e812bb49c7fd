//! Dependency resolution through `pactree`.
//!
//! `pactree -u -s <target>` walks the sync database and prints the target and
//! every transitive dependency once, one name per line.

use tracing::{debug, warn};

use crate::command::{CommandRunner, Invocation, Program};
use crate::error::Result;

/// Client for the `pactree` dependency listing.
#[derive(Debug)]
pub struct Pactree<R> {
    runner: R,
}

impl<R: CommandRunner> Pactree<R> {
    #[must_use]
    pub const fn new(runner: R) -> Self {
        Self { runner }
    }

    /// Resolve the flat, deduplicated dependency list of `target`.
    ///
    /// The list includes `target` itself, as printed by pactree.
    ///
    /// # Errors
    ///
    /// Returns [`PacError::MissingBinary`](crate::error::PacError::MissingBinary)
    /// with an install hint if pactree is not on the search path. A non-zero
    /// exit is logged and whatever was printed is still returned.
    pub fn dependencies(&self, target: &str) -> Result<Vec<String>> {
        let invocation = Invocation::new(Program::PACTREE, ["-u", "-s", target]);
        let output = self.runner.run(&invocation)?;

        if !output.success() {
            warn!(
                package = target,
                status = %output.status,
                stderr = output.stderr.trim(),
                "pactree reported an error"
            );
        }

        let packages = parse_dependency_list(&output.stdout);
        debug!(package = target, count = packages.len(), "resolved dependency list");

        Ok(packages)
    }
}

/// Split pactree output into package names, dropping blank lines.
#[must_use]
pub fn parse_dependency_list(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PacError;
    use crate::pacman::tests::FakeRunner;

    #[test]
    fn test_parse_dependency_list() {
        let output = "rocm-hip-sdk\nhip-runtime-amd\n\n  glibc  \n   \nrocm-llvm\n";

        assert_eq!(
            parse_dependency_list(output),
            vec!["rocm-hip-sdk", "hip-runtime-amd", "glibc", "rocm-llvm"]
        );
    }

    #[test]
    fn test_parse_dependency_list_empty() {
        assert!(parse_dependency_list("").is_empty());
        assert!(parse_dependency_list("\n\n").is_empty());
    }

    #[test]
    fn test_dependencies_invocation() {
        let runner = FakeRunner::with_stdout("rocm-hip-sdk\nglibc\n");
        let pactree = Pactree::new(&runner);

        let deps = pactree.dependencies("rocm-hip-sdk").unwrap();
        assert_eq!(deps, vec!["rocm-hip-sdk", "glibc"]);

        let calls = runner.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].program, Program::PACTREE);
        assert_eq!(calls[0].args, vec!["-u", "-s", "rocm-hip-sdk"]);
    }

    #[test]
    fn test_dependencies_missing_pactree_has_hint() {
        let runner = FakeRunner {
            missing: true,
            ..FakeRunner::default()
        };

        let err = Pactree::new(&runner).dependencies("foo").unwrap_err();
        assert!(matches!(err, PacError::MissingBinary { .. }));
        assert!(err.to_string().contains("pacman-contrib"));
    }

    #[test]
    fn test_dependencies_non_zero_exit_is_tolerated() {
        let runner = FakeRunner {
            stderr: "error: package 'nope' not found\n".to_string(),
            exit_code: 1,
            ..FakeRunner::default()
        };

        let deps = Pactree::new(&runner).dependencies("nope").unwrap();
        assert!(deps.is_empty());
    }
}
