//! Aggregation and reporting of installed sizes.
//!
//! A [`Distribution`] ranks every package by size and splits the grand total
//! between the `/opt` and `/usr` buckets, in a single pass over the sorted
//! entries.

use colored::Colorize;
use serde::Serialize;

use crate::location::{Location, LocationClassifier};
use crate::pacman::PackageSizeMap;
use crate::utils::format_size;

/// Width of the rule lines in the profile report.
const RULE_WIDTH: usize = 50;

/// One package with its bucket and installed size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageEntry {
    pub name: String,
    pub location: Location,
    pub size: u64,
}

/// Packages ranked by size and their split across install locations.
#[derive(Debug, Clone, Default)]
pub struct Distribution {
    entries: Vec<PackageEntry>,
    opt: u64,
    usr: u64,
}

impl Distribution {
    /// Rank `sizes` by size (largest first) and accumulate bucket totals.
    ///
    /// Packages of equal size are ordered by name.
    #[must_use]
    pub fn from_sizes(sizes: PackageSizeMap, classifier: &LocationClassifier) -> Self {
        let mut ranked: Vec<(String, u64)> = sizes.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        let mut distribution = Self::default();
        for (name, size) in ranked {
            let location = classifier.classify(&name);
            match location {
                Location::Opt => distribution.opt = distribution.opt.saturating_add(size),
                Location::Usr => distribution.usr = distribution.usr.saturating_add(size),
            }
            distribution.entries.push(PackageEntry {
                name,
                location,
                size,
            });
        }

        distribution
    }

    /// All entries, largest first.
    #[must_use]
    pub fn entries(&self) -> &[PackageEntry] {
        &self.entries
    }

    /// The `n` largest entries (or fewer if there are not that many).
    #[must_use]
    pub fn top(&self, n: usize) -> &[PackageEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    #[must_use]
    pub const fn bucket_total(&self, location: Location) -> u64 {
        match location {
            Location::Opt => self.opt,
            Location::Usr => self.usr,
        }
    }

    /// Grand total across both buckets, saturating at `u64::MAX`.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.opt.saturating_add(self.usr)
    }

    /// Share of the grand total held by `location`, in percent.
    ///
    /// Returns `0.0` when the grand total is zero.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percentage(&self, location: Location) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.bucket_total(location) as f64 / total as f64 * 100.0
    }

    /// Render the ranked table and bucket summary as printed by `pacsize`.
    #[must_use]
    pub fn render(&self, top: usize) -> String {
        let rule = "-".repeat(RULE_WIDTH);
        let mut lines = vec![
            String::new(),
            format!(
                "{:<30} {:<10} {:<10}",
                format!("Top {top} Largest Packages"),
                "Dest",
                "Size"
            )
            .bold()
            .to_string(),
            rule.clone(),
        ];

        for entry in self.top(top) {
            lines.push(format!(
                "{:<30} {:<10} {:<10}",
                entry.name,
                entry.location,
                format_size(entry.size)
            ));
        }

        lines.push(rule);
        lines.push(String::new());
        lines.push("--- ESTIMATED DISTRIBUTION ---".bold().to_string());

        for location in Location::ALL {
            lines.push(format!(
                "{} Usage : {:<10} ({:.1}%)",
                location.prefix(),
                format_size(self.bucket_total(location)),
                self.percentage(location)
            ));
        }

        lines.push(format!(
            "TOTAL      : {}",
            format_size(self.total()).bright_green().bold()
        ));

        lines.join("\n")
    }

    /// Print the report to stdout.
    pub fn print_report(&self, top: usize) {
        println!("{}", self.render(top));
    }
}
