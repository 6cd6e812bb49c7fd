//! Parsers for pacman's text output.
//!
//! Two output shapes are understood:
//!
//! - `pacman -Rcs -p --print-format %s`: one decimal byte count per line.
//!   Anything that is not purely digits (warnings, blank lines) is ignored.
//! - `pacman -Si`: record blocks of `Field : value` lines. Only `Name` and
//!   `Installed Size` are read, and a size is attributed to the most recent
//!   `Name` seen in the same block.
//!
//! Both parsers are lenient: malformed lines are skipped, never fatal.

use tracing::debug;

use super::PackageSizeMap;
use crate::utils::parse_size;

const NAME_FIELD: &str = "Name";
const INSTALLED_SIZE_FIELD: &str = "Installed Size";

/// Interpret a single line as a byte count.
///
/// Returns `None` unless the trimmed line is a non-empty run of ASCII digits
/// that fits in a `u64`.
#[must_use]
pub fn parse_byte_line(line: &str) -> Option<u64> {
    let line = line.trim();
    if line.is_empty() || !line.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    line.parse().ok()
}

/// Sum every byte-count line in `output`.
#[must_use]
pub fn sum_byte_lines(output: &str) -> u64 {
    output
        .lines()
        .filter_map(parse_byte_line)
        .fold(0, u64::saturating_add)
}

/// State of the `pacman -Si` block parser.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ParserState {
    /// No package name is pending
    #[default]
    Idle,

    /// A `Name` line was seen and its size has not been read yet
    Named(String),
}

impl ParserState {
    /// Advance the parser by one line.
    ///
    /// Returns the next state and, when the line completes a record, the
    /// package name with its installed size in bytes.
    #[must_use]
    pub fn advance(self, line: &str) -> (Self, Option<(String, u64)>) {
        let line = line.trim();

        if line.starts_with(NAME_FIELD) {
            return match field_value(line) {
                Some("") => (Self::Idle, None),
                Some(name) => (Self::Named(name.to_string()), None),
                None => (self, None),
            };
        }

        if line.starts_with(INSTALLED_SIZE_FIELD)
            && let Self::Named(name) = &self
            && let Some(value) = field_value(line)
        {
            return match parse_size(value) {
                Some(size) => (Self::Idle, Some((name.clone(), size))),
                None => {
                    debug!(package = %name, value, "skipping unparsable installed size");
                    (Self::Idle, None)
                }
            };
        }

        (self, None)
    }
}

/// Return the trimmed text after the first `:` of a `Field : value` line.
fn field_value(line: &str) -> Option<&str> {
    line.split_once(':').map(|(_, value)| value.trim())
}

/// Parse `pacman -Si` output into a map of package name to installed bytes.
///
/// A later record for the same name replaces an earlier one.
#[must_use]
pub fn parse_size_blocks(output: &str) -> PackageSizeMap {
    let (_, sizes) = output.lines().fold(
        (ParserState::Idle, PackageSizeMap::new()),
        |(state, mut sizes), line| {
            let (next, record) = state.advance(line);
            if let Some((name, size)) = record {
                sizes.insert(name, size);
            }
            (next, sizes)
        },
    );

    sizes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_byte_line() {
        assert_eq!(parse_byte_line("12345"), Some(12345));
        assert_eq!(parse_byte_line("  678  "), Some(678));
        assert_eq!(parse_byte_line("0"), Some(0));
        assert_eq!(parse_byte_line(""), None);
        assert_eq!(parse_byte_line("   "), None);
        assert_eq!(parse_byte_line("abc"), None);
        assert_eq!(parse_byte_line("12 34"), None);
        assert_eq!(parse_byte_line("-5"), None);
        assert_eq!(parse_byte_line("1.5"), None);
    }

    #[test]
    fn test_parse_byte_line_overflow_is_skipped() {
        assert_eq!(parse_byte_line("99999999999999999999999"), None);
    }

    #[test]
    fn test_sum_byte_lines_ignores_noise() {
        let output = "12345\n\n  \nabc\n678\n";
        assert_eq!(sum_byte_lines(output), 13023);
    }

    #[test]
    fn test_sum_byte_lines_with_warnings() {
        let output = "warning: foo is a dependency of bar\n1048576\n:: some notice\n2048\n";
        assert_eq!(sum_byte_lines(output), 1_050_624);
    }

    #[test]
    fn test_sum_byte_lines_empty() {
        assert_eq!(sum_byte_lines(""), 0);
    }

    #[test]
    fn test_state_name_then_size() {
        let (state, record) = ParserState::Idle.advance("Name            : foo");
        assert_eq!(state, ParserState::Named("foo".to_string()));
        assert!(record.is_none());

        let (state, record) = state.advance("Installed Size  : 2.00 MiB");
        assert_eq!(state, ParserState::Idle);
        assert_eq!(record, Some(("foo".to_string(), 2_097_152)));
    }

    #[test]
    fn test_state_size_without_name_is_ignored() {
        let (state, record) = ParserState::Idle.advance("Installed Size  : 2.00 MiB");
        assert_eq!(state, ParserState::Idle);
        assert!(record.is_none());
    }

    #[test]
    fn test_state_other_fields_keep_state() {
        let named = ParserState::Named("foo".to_string());
        let (state, record) = named.clone().advance("Version         : 1.0-1");
        assert_eq!(state, named);
        assert!(record.is_none());

        let (state, _) = named.clone().advance("");
        assert_eq!(state, named);
    }

    #[test]
    fn test_state_empty_name_resets() {
        let named = ParserState::Named("foo".to_string());
        let (state, _) = named.advance("Name :");
        assert_eq!(state, ParserState::Idle);
    }

    #[test]
    fn test_state_name_without_colon_keeps_state() {
        let named = ParserState::Named("foo".to_string());
        let (state, _) = named.clone().advance("Name");
        assert_eq!(state, named);
    }

    #[test]
    fn test_state_unparsable_size_resets() {
        let named = ParserState::Named("foo".to_string());
        let (state, record) = named.advance("Installed Size  : lots");
        assert_eq!(state, ParserState::Idle);
        assert!(record.is_none());
    }

    #[test]
    fn test_parse_size_blocks_compact() {
        let output = "Name: foo\nInstalled Size: 2.00 MiB\nName: bar\nInstalled Size: 512.00 KiB";
        let sizes = parse_size_blocks(output);

        assert_eq!(sizes.len(), 2);
        assert_eq!(sizes.get("foo"), Some(&2_097_152));
        assert_eq!(sizes.get("bar"), Some(&524_288));
    }

    #[test]
    fn test_parse_size_blocks_realistic() {
        let output = "\
Repository      : extra
Name            : hip-runtime-amd
Version         : 6.2.4-1
Description     : Heterogeneous Interface for Portability ROCm
Architecture    : x86_64
Depends On      : mesa  comgr  rocminfo
Download Size   : 31.62 MiB
Installed Size  : 300.00 MiB
Packager        : Someone <someone@archlinux.org>

Repository      : core
Name            : glibc
Version         : 2.40+r16+gaa533d58ff-2
Architecture    : x86_64
Download Size   : 10.00 MiB
Installed Size  : 48.50 MiB
Validated By    : Signature

";
        let sizes = parse_size_blocks(output);

        assert_eq!(sizes.len(), 2);
        assert_eq!(sizes.get("hip-runtime-amd"), Some(&314_572_800));
        assert_eq!(sizes.get("glibc"), Some(&50_855_936));
    }

    #[test]
    fn test_parse_size_blocks_duplicate_name_last_wins() {
        let output = "Name: foo\nInstalled Size: 1.00 KiB\n\nName: foo\nInstalled Size: 2.00 KiB\n";
        let sizes = parse_size_blocks(output);

        assert_eq!(sizes.get("foo"), Some(&2_048));
    }

    #[test]
    fn test_parse_size_blocks_second_size_in_block_ignored() {
        let output = "Name: foo\nInstalled Size: 1.00 KiB\nInstalled Size: 9.00 GiB\n";
        let sizes = parse_size_blocks(output);

        assert_eq!(sizes.get("foo"), Some(&1_024));
    }

    #[test]
    fn test_parse_size_blocks_empty() {
        assert!(parse_size_blocks("").is_empty());
        assert!(parse_size_blocks("error: package 'nope' was not found\n").is_empty());
    }
}
