//! Resolved options for the two pipelines.
//!
//! These structs hold the final values after CLI arguments and the
//! configuration file have been merged.

use crate::location::DEFAULT_OPT_PATTERN;

/// Package profiled by `pacsize` when no target is configured.
pub const DEFAULT_TARGET: &str = "rocm-hip-sdk";

/// Number of packages listed in the ranked table by default.
pub const DEFAULT_TOP: usize = 10;

/// Options for the dry-run removal estimate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemovalOptions {
    /// Whether to run `pacman` through `sudo`
    pub use_sudo: bool,
}

impl Default for RemovalOptions {
    fn default() -> Self {
        Self { use_sudo: true }
    }
}

/// Options for the install-footprint profile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileOptions {
    /// Package whose dependency tree is profiled
    pub target: String,

    /// Number of packages shown in the ranked table
    pub top: usize,

    /// Regex deciding which packages land under `/opt`
    pub opt_pattern: String,
}

impl Default for ProfileOptions {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET.to_string(),
            top: DEFAULT_TOP,
            opt_pattern: DEFAULT_OPT_PATTERN.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removal_defaults_to_sudo() {
        assert!(RemovalOptions::default().use_sudo);
    }

    #[test]
    fn test_profile_defaults() {
        let opts = ProfileOptions::default();

        assert_eq!(opts.target, "rocm-hip-sdk");
        assert_eq!(opts.top, 10);
        assert_eq!(opts.opt_pattern, DEFAULT_OPT_PATTERN);
    }
}
