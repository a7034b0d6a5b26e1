//! Magnitude-scaling formatter.
//!
//! A raw magnitude is divided by a fixed divisor, one rung at a time, until it
//! drops below the divisor or the ladder runs out. The result is rendered with
//! two decimals and the rung's suffix.

use crate::units::Precision;

/// Ordered unit suffixes, smallest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ladder(pub &'static [&'static str]);

pub const BYTES: Ladder = Ladder(&["B", "KB", "MB", "GB", "TB", "PB"]);

pub const BITRATE: Ladder = Ladder(&["bps", "Kbps", "Mbps", "Gbps", "Tbps"]);

/// Bitrate is always decimal regardless of precision mode.
pub const BITRATE_DIVISOR: f64 = 1000.0;

impl Ladder {
    /// Rescales `value` and returns it with the index of the chosen rung.
    pub fn scale(&self, value: f64, divisor: f64) -> (f64, usize) {
        let mut scaled = value;
        let mut index = 0;
        while scaled >= divisor && index + 1 < self.0.len() {
            scaled /= divisor;
            index += 1;
        }
        (scaled, index)
    }

    pub fn format(&self, value: f64, divisor: f64) -> String {
        let (scaled, index) = self.scale(value, divisor);
        format!("{:.2} {}", scaled, self.0.get(index).copied().unwrap_or(""))
    }
}

/// Formats `value` against an arbitrary ladder and divisor.
pub fn format_magnitude(value: f64, divisor: f64, ladder: Ladder) -> String {
    ladder.format(value, divisor)
}

/// Formats a byte count: base 1024 in precision mode, 1000 otherwise.
pub fn format_bytes(bytes: f64, precision_mode: bool) -> String {
    BYTES.format(bytes, Precision::select(precision_mode).byte_base)
}

/// Formats a bits-per-second figure on the decimal bitrate ladder.
pub fn format_bitrate(bps: f64) -> String {
    BITRATE.format(bps, BITRATE_DIVISOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_divisor_stays_in_base_unit() {
        assert_eq!(format_magnitude(999.0, 1000.0, BYTES), "999.00 B");
        assert_eq!(format_magnitude(0.0, 1000.0, BYTES), "0.00 B");
        assert_eq!(format_magnitude(1023.0, 1024.0, BYTES), "1023.00 B");
        assert_eq!(format_bitrate(12.5), "12.50 bps");
    }

    #[test]
    fn test_divisor_changes_scaling() {
        assert_eq!(format_magnitude(1500.0, 1000.0, BYTES), "1.50 KB");
        assert_eq!(format_magnitude(1500.0, 1024.0, BYTES), "1.46 KB");
        assert_eq!(format_bytes(1500.0, false), "1.50 KB");
        assert_eq!(format_bytes(1500.0, true), "1.46 KB");
    }

    #[test]
    fn test_exact_rung_boundaries() {
        assert_eq!(format_bytes(1000.0, false), "1.00 KB");
        assert_eq!(format_bytes(1024.0, true), "1.00 KB");
        assert_eq!(format_bytes(1_000_000_000.0, false), "1.00 GB");
        assert_eq!(format_bitrate(1_000_000.0), "1.00 Mbps");
    }

    #[test]
    fn test_top_rung_absorbs_overflow() {
        // 5,000 PB stays in PB rather than inventing a seventh rung.
        assert_eq!(format_bytes(5.0e18, false), "5000.00 PB");
        assert_eq!(format_bitrate(2.0e15), "2000.00 Tbps");
    }

    #[test]
    fn test_custom_ladder() {
        let ladder = Ladder(&["ops", "Kops"]);
        assert_eq!(format_magnitude(999.0, 1000.0, ladder), "999.00 ops");
        assert_eq!(format_magnitude(2500.0, 1000.0, ladder), "2.50 Kops");
        assert_eq!(ladder.scale(3.0e9, 1000.0), (3.0e6, 1));
    }

    #[test]
    fn test_non_finite_passes_through() {
        assert_eq!(format_bytes(f64::NAN, false), "NaN B");
        assert_eq!(format_bitrate(f64::INFINITY), "inf Tbps");
    }
}
