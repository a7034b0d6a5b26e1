//! Derivation pipeline: usage assumptions in, sizing metrics out.

use crate::format::{self, BITRATE, BITRATE_DIVISOR, BYTES};
use crate::models::{DerivedMetrics, UsageParameters};
use crate::units::Precision;

/// Storage is accounted in 30-day months.
pub const DAYS_PER_MONTH: f64 = 30.0;

pub const BITS_PER_BYTE: f64 = 8.0;

/// Derives request-rate, storage and bandwidth figures from `params`.
///
/// Pure and total: the precision constants are selected once from
/// `params.precision_mode` and used for every quantity, and nothing is
/// rounded until the string fields are rendered. Out-of-domain input is not
/// rejected here; NaN or infinity propagate into every dependent field.
pub fn derive(params: &UsageParameters) -> DerivedMetrics {
    let precision = Precision::select(params.precision_mode);

    // Traffic
    let total_writes_per_day = params.dau as f64 * params.writes_per_user;
    let total_reads_per_day = total_writes_per_day * params.read_write_ratio;
    let read_rps = total_reads_per_day / precision.seconds_per_day;
    let write_rps = total_writes_per_day / precision.seconds_per_day;
    let peak_read_rps = read_rps * params.peak_multiplier;
    let peak_write_rps = write_rps * params.peak_multiplier;

    // Storage
    let payload_bytes = precision.payload_bytes(params.payload_size, params.payload_unit);
    let daily_storage_bytes = total_writes_per_day * payload_bytes;
    let compressed_daily_storage_bytes = daily_storage_bytes * (1.0 - params.compression_ratio);
    let monthly_storage_bytes = compressed_daily_storage_bytes * DAYS_PER_MONTH;
    let total_storage_bytes = monthly_storage_bytes * params.retention_months as f64;
    let replicated_storage_bytes = total_storage_bytes * params.replication_factor;

    // Bandwidth
    let bits_per_request = payload_bytes * BITS_PER_BYTE;
    let read_bandwidth_bps = read_rps * bits_per_request;
    let write_bandwidth_bps = write_rps * bits_per_request;
    let peak_read_bandwidth_bps = peak_read_rps * bits_per_request;
    let peak_write_bandwidth_bps = peak_write_rps * bits_per_request;

    let bytes = |value: f64| format::format_magnitude(value, precision.byte_base, BYTES);
    let bitrate = |value: f64| format::format_magnitude(value, BITRATE_DIVISOR, BITRATE);

    DerivedMetrics {
        precision,
        payload_bytes,

        total_writes_per_day,
        total_reads_per_day,
        read_rps,
        write_rps,
        peak_read_rps,
        peak_write_rps,
        total_rps: read_rps + write_rps,
        peak_total_rps: peak_read_rps + peak_write_rps,

        daily_storage_bytes,
        compressed_daily_storage_bytes,
        monthly_storage_bytes,
        total_storage_bytes,
        replicated_storage_bytes,
        daily_storage: bytes(daily_storage_bytes),
        compressed_daily_storage: bytes(compressed_daily_storage_bytes),
        monthly_storage: bytes(monthly_storage_bytes),
        total_storage: bytes(total_storage_bytes),
        replicated_storage: bytes(replicated_storage_bytes),

        read_bandwidth_bps,
        write_bandwidth_bps,
        peak_read_bandwidth_bps,
        peak_write_bandwidth_bps,
        read_bandwidth: bitrate(read_bandwidth_bps),
        write_bandwidth: bitrate(write_bandwidth_bps),
        peak_read_bandwidth: bitrate(peak_read_bandwidth_bps),
        peak_write_bandwidth: bitrate(peak_write_bandwidth_bps),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::PayloadUnit;

    fn assert_close(actual: f64, expected: f64) {
        let tolerance = expected.abs().max(1.0) * 1e-12;
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {expected}, got {actual}"
        );
    }

    fn scenario() -> UsageParameters {
        UsageParameters::default()
            .with_dau(1_000_000)
            .with_writes_per_user(5.0)
            .with_read_write_ratio(10.0)
            .with_payload(1.0, PayloadUnit::KB)
            .with_precision_mode(false)
    }

    #[test]
    fn test_reference_scenario_rates() {
        let metrics = derive(&scenario());
        assert_eq!(metrics.total_writes_per_day, 5_000_000.0);
        assert_eq!(metrics.total_reads_per_day, 50_000_000.0);
        assert_eq!(metrics.write_rps, 50.0);
        assert_eq!(metrics.read_rps, 500.0);
        assert_eq!(metrics.total_rps, 550.0);
        assert_eq!(metrics.peak_total_rps, 1650.0);
        assert_eq!(metrics.rounded_rps(), [500, 50, 1500, 150, 550, 1650]);
    }

    #[test]
    fn test_reference_scenario_storage_and_bandwidth() {
        let metrics = derive(&scenario());
        assert_eq!(metrics.payload_bytes, 1000.0);
        assert_eq!(metrics.daily_storage_bytes, 5.0e9);
        assert_close(metrics.compressed_daily_storage_bytes, 3.5e9);
        assert_close(metrics.monthly_storage_bytes, 1.05e11);
        assert_close(metrics.total_storage_bytes, 1.26e12);
        assert_close(metrics.replicated_storage_bytes, 3.78e12);

        assert_eq!(metrics.daily_storage, "5.00 GB");
        assert_eq!(metrics.compressed_daily_storage, "3.50 GB");
        assert_eq!(metrics.monthly_storage, "105.00 GB");
        assert_eq!(metrics.total_storage, "1.26 TB");
        assert_eq!(metrics.replicated_storage, "3.78 TB");

        assert_eq!(metrics.read_bandwidth_bps, 4.0e6);
        assert_eq!(metrics.write_bandwidth_bps, 4.0e5);
        assert_eq!(metrics.read_bandwidth, "4.00 Mbps");
        assert_eq!(metrics.write_bandwidth, "400.00 Kbps");
        assert_eq!(metrics.peak_read_bandwidth, "12.00 Mbps");
        assert_eq!(metrics.peak_write_bandwidth, "1.20 Mbps");
    }

    fn raw_quantities(metrics: &DerivedMetrics) -> [f64; 15] {
        [
            metrics.read_rps,
            metrics.write_rps,
            metrics.peak_read_rps,
            metrics.peak_write_rps,
            metrics.total_rps,
            metrics.peak_total_rps,
            metrics.daily_storage_bytes,
            metrics.compressed_daily_storage_bytes,
            metrics.monthly_storage_bytes,
            metrics.total_storage_bytes,
            metrics.replicated_storage_bytes,
            metrics.read_bandwidth_bps,
            metrics.write_bandwidth_bps,
            metrics.peak_read_bandwidth_bps,
            metrics.peak_write_bandwidth_bps,
        ]
    }

    fn assert_all_zero(metrics: &DerivedMetrics) {
        let raw = raw_quantities(metrics);
        assert!(raw.iter().all(|value| *value == 0.0), "{raw:?}");
        for formatted in [
            &metrics.daily_storage,
            &metrics.compressed_daily_storage,
            &metrics.monthly_storage,
            &metrics.total_storage,
            &metrics.replicated_storage,
        ] {
            assert_eq!(formatted, "0.00 B");
        }
        for formatted in [
            &metrics.read_bandwidth,
            &metrics.write_bandwidth,
            &metrics.peak_read_bandwidth,
            &metrics.peak_write_bandwidth,
        ] {
            assert_eq!(formatted, "0.00 bps");
        }
    }

    #[test]
    fn test_zero_dau_zeroes_everything() {
        let metrics = derive(&scenario().with_dau(0));
        assert_eq!(metrics.total_writes_per_day, 0.0);
        assert_all_zero(&metrics);
    }

    #[test]
    fn test_zero_writes_zeroes_everything() {
        let metrics = derive(&scenario().with_writes_per_user(0.0));
        assert_eq!(metrics.total_writes_per_day, 0.0);
        assert_eq!(metrics.total_reads_per_day, 0.0);
        assert_eq!(metrics.payload_bytes, 1000.0);
        assert_all_zero(&metrics);
    }

    #[test]
    fn test_zero_payload_keeps_rates() {
        let metrics = derive(&scenario().with_payload(0.0, PayloadUnit::GB));
        assert_eq!(metrics.read_rps, 500.0);
        assert_eq!(metrics.write_rps, 50.0);
        assert_eq!(metrics.payload_bytes, 0.0);
        assert_eq!(metrics.daily_storage_bytes, 0.0);
        assert_eq!(metrics.total_storage_bytes, 0.0);
        assert_eq!(metrics.replicated_storage_bytes, 0.0);
        assert_eq!(metrics.read_bandwidth_bps, 0.0);
        assert_eq!(metrics.peak_write_bandwidth_bps, 0.0);
        assert_eq!(metrics.replicated_storage, "0.00 B");
        assert_eq!(metrics.read_bandwidth, "0.00 bps");
    }

    #[test]
    fn test_peak_is_multiplier_times_average() {
        for multiplier in [1.0, 1.5, 3.0, 10.0] {
            let metrics = derive(&scenario().with_peak_multiplier(multiplier));
            assert_eq!(metrics.peak_read_rps, metrics.read_rps * multiplier);
            assert_eq!(metrics.peak_write_rps, metrics.write_rps * multiplier);
        }
    }

    #[test]
    fn test_storage_linear_in_retention() {
        let year = derive(&scenario().with_retention_months(12));
        let two_years = derive(&scenario().with_retention_months(24));
        assert_eq!(two_years.total_storage_bytes, year.total_storage_bytes * 2.0);
        assert_eq!(two_years.monthly_storage_bytes, year.monthly_storage_bytes);
    }

    #[test]
    fn test_replication_multiplies_total() {
        let metrics = derive(&scenario().with_replication_factor(2.5));
        assert_eq!(
            metrics.replicated_storage_bytes,
            metrics.total_storage_bytes * 2.5
        );
    }

    #[test]
    fn test_compression_endpoints() {
        let none = derive(&scenario().with_compression_ratio(0.0));
        assert_eq!(none.compressed_daily_storage_bytes, none.daily_storage_bytes);

        let all = derive(&scenario().with_compression_ratio(1.0));
        assert_eq!(all.compressed_daily_storage_bytes, 0.0);
        assert_eq!(all.replicated_storage_bytes, 0.0);
        assert!(all.daily_storage_bytes > 0.0);
    }

    #[test]
    fn test_precision_toggle_switches_both_bases() {
        let approx = derive(&scenario().with_precision_mode(false));
        let exact = derive(&scenario().with_precision_mode(true));

        assert_eq!(approx.precision.seconds_per_day, 100_000.0);
        assert_eq!(exact.precision.seconds_per_day, 86_400.0);
        assert_eq!(approx.payload_bytes, 1000.0);
        assert_eq!(exact.payload_bytes, 1024.0);

        assert_close(approx.read_rps, exact.read_rps * 86_400.0 / 100_000.0);
        assert_close(approx.write_rps, exact.write_rps * 86_400.0 / 100_000.0);
    }

    #[test]
    fn test_exact_mode_formats_with_binary_divisor() {
        // 5,000,000 writes of 1 KiB each: 5,120,000,000 bytes = 4.77 GiB.
        let metrics = derive(&scenario().with_precision_mode(true));
        assert_eq!(metrics.daily_storage_bytes, 5_120_000_000.0);
        assert_eq!(metrics.daily_storage, "4.77 GB");
    }

    #[test]
    fn test_identical_inputs_identical_outputs() {
        let params = scenario().with_precision_mode(true).with_peak_multiplier(2.2);
        assert_eq!(derive(&params), derive(&params));
    }

    #[test]
    fn test_nan_propagates() {
        let metrics = derive(&scenario().with_writes_per_user(f64::NAN));
        assert!(metrics.read_rps.is_nan());
        assert!(metrics.replicated_storage_bytes.is_nan());
        assert_eq!(metrics.total_storage, "NaN B");
    }
}
