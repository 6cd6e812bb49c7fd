//! Size parsing and formatting utilities.
//!
//! pacman reports sizes in binary units with two decimals (`"2.00 MiB"`), and
//! both tools print totals in the same notation. This module converts between
//! that notation and raw byte counts.

/// Binary units in ascending order, paired with their multiplier.
const UNITS: &[(&str, u64)] = &[
    ("B", 1),
    ("KiB", 1_024),
    ("MiB", 1_048_576),
    ("GiB", 1_073_741_824),
    ("TiB", 1_099_511_627_776),
];

/// Format a byte count as a human-readable string with two decimal places.
///
/// The value is scaled to the largest unit whose mantissa stays below 1024.
/// Anything past the TiB range is still expressed in TiB.
///
/// # Examples
///
/// ```
/// # use pacspace::utils::format_size;
/// assert_eq!(format_size(0), "0.00 B");
/// assert_eq!(format_size(1536), "1.50 KiB");
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_size(bytes: u64) -> String {
    let mut value = bytes as f64;

    for (unit, _) in &UNITS[..UNITS.len() - 1] {
        if value < 1024.0 {
            return format!("{value:.2} {unit}");
        }
        value /= 1024.0;
    }

    format!("{value:.2} TiB")
}

/// Parse a pacman size value such as `"123.45 MiB"` into bytes.
///
/// The input must consist of exactly two whitespace-separated tokens: a
/// decimal number and a unit. Unknown units are treated as bytes. Negative
/// values clamp to zero and fractional bytes are truncated.
///
/// # Returns
///
/// - `Some(u64)` - The size in bytes
/// - `None` - If the token count is wrong or the number does not parse
///
/// # Examples
///
/// ```
/// # use pacspace::utils::parse_size;
/// assert_eq!(parse_size("2.00 MiB"), Some(2_097_152));
/// assert_eq!(parse_size("512.00 KiB"), Some(524_288));
/// assert_eq!(parse_size("garbage"), None);
/// ```
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn parse_size(size_str: &str) -> Option<u64> {
    let mut tokens = size_str.split_whitespace();
    let (Some(number), Some(unit), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return None;
    };

    let value: f64 = number.parse().ok()?;
    if !value.is_finite() {
        return None;
    }

    let bytes = value * unit_multiplier(unit) as f64;
    Some(bytes.max(0.0) as u64)
}

/// Look up the multiplier for a unit label, defaulting to 1 for unknown labels.
fn unit_multiplier(unit: &str) -> u64 {
    UNITS
        .iter()
        .find(|(label, _)| *label == unit)
        .map_or(1, |(_, multiplier)| *multiplier)
}
