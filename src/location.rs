//! Install-location heuristic.
//!
//! Package file manifests are not consulted. Instead a package name matching
//! the ROCm naming pattern is assumed to live under `/opt` (where ROCm
//! installs), and everything else under `/usr`. This is an approximation for
//! coarse space accounting only.

use std::fmt;

use regex::Regex;
use serde::Serialize;

use crate::error::Result;

/// Names of packages known to install into `/opt/rocm`.
pub const DEFAULT_OPT_PATTERN: &str =
    "^(rocm-|hip-|hsa-|miopen-|rccl|comgr|roc|amd|migraphx|mivisionx)";

/// Filesystem prefix a package is assumed to install under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Location {
    #[serde(rename = "/opt")]
    Opt,

    #[serde(rename = "/usr")]
    Usr,
}

impl Location {
    /// Every bucket, in report order.
    pub const ALL: [Self; 2] = [Self::Opt, Self::Usr];

    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Opt => "/opt",
            Self::Usr => "/usr",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad so `{:<10}` works in report tables
        f.pad(self.prefix())
    }
}

/// Assigns packages to a [`Location`] by name.
#[derive(Debug, Clone)]
pub struct LocationClassifier {
    opt: Regex,
}

impl LocationClassifier {
    /// Build a classifier from a regex matched at the start of package names.
    ///
    /// # Errors
    ///
    /// Returns [`PacError::InvalidPattern`](crate::error::PacError::InvalidPattern)
    /// if `pattern` is not a valid regex.
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self {
            opt: Regex::new(pattern)?,
        })
    }

    /// Classify `package`. Matching is case-sensitive and anchored at the
    /// start of the name.
    #[must_use]
    pub fn classify(&self, package: &str) -> Location {
        match self.opt.find(package) {
            Some(m) if m.start() == 0 => Location::Opt,
            _ => Location::Usr,
        }
    }
}
