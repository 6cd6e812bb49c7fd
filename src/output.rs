//! Structured JSON output for scripting and piping.
//!
//! When the `--json` flag is passed, these structures are serialized to stdout
//! as a single JSON object, replacing all human-readable output.

use serde::Serialize;

use crate::location::Location;
use crate::report::Distribution;
use crate::utils::format_size;

/// JSON document emitted by `pacremove --json`.
#[derive(Debug, Serialize)]
pub struct JsonRemovalOutput {
    /// Package whose recursive removal was simulated.
    pub package: String,

    /// Bytes that the removal would free.
    pub total_size: u64,

    /// Human-readable formatted total (e.g. `"1.50 GiB"`).
    pub total_size_formatted: String,
}

impl JsonRemovalOutput {
    #[must_use]
    pub fn new(package: &str, total_size: u64) -> Self {
        Self {
            package: package.to_string(),
            total_size,
            total_size_formatted: format_size(total_size),
        }
    }
}

/// JSON document emitted by `pacsize --json`.
#[derive(Debug, Serialize)]
pub struct JsonProfileOutput {
    /// Package whose dependency tree was profiled.
    pub target: String,

    /// Number of names pactree returned.
    pub dependency_count: usize,

    /// Largest packages, biggest first.
    pub packages: Vec<JsonPackageEntry>,

    /// Per-location totals, `/opt` first.
    pub distribution: Vec<JsonBucketSummary>,

    /// Sum over every package with a known size.
    pub total_size: u64,

    /// Human-readable formatted total.
    pub total_size_formatted: String,
}

/// A single ranked package in the JSON output.
#[derive(Debug, Serialize)]
pub struct JsonPackageEntry {
    pub name: String,
    pub location: Location,
    pub size: u64,
    pub size_formatted: String,
}

/// Share of the total attributed to one install location.
#[derive(Debug, Serialize)]
pub struct JsonBucketSummary {
    pub location: Location,
    pub size: u64,
    pub size_formatted: String,

    /// Percentage of the grand total, `0.0` when the total is zero.
    pub percent: f64,
}

impl JsonProfileOutput {
    /// Build the profile document, keeping only the `top` largest packages.
    #[must_use]
    pub fn new(
        target: &str,
        dependency_count: usize,
        distribution: &Distribution,
        top: usize,
    ) -> Self {
        Self {
            target: target.to_string(),
            dependency_count,
            packages: distribution
                .top(top)
                .iter()
                .map(|entry| JsonPackageEntry {
                    name: entry.name.clone(),
                    location: entry.location,
                    size: entry.size,
                    size_formatted: format_size(entry.size),
                })
                .collect(),
            distribution: Location::ALL
                .iter()
                .map(|&location| JsonBucketSummary {
                    location,
                    size: distribution.bucket_total(location),
                    size_formatted: format_size(distribution.bucket_total(location)),
                    percent: distribution.percentage(location),
                })
                .collect(),
            total_size: distribution.total(),
            total_size_formatted: format_size(distribution.total()),
        }
    }
}
