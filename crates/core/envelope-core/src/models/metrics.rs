use crate::units::Precision;
use serde::Serialize;

/// Result of one derivation. Every field is computed from the same
/// [`Precision`], which is carried along so the bases can be displayed.
///
/// Raw quantities keep full `f64` precision; only the string fields are
/// rounded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedMetrics {
    pub precision: Precision,
    pub payload_bytes: f64,

    // Request rates
    pub total_writes_per_day: f64,
    pub total_reads_per_day: f64,
    pub read_rps: f64,
    pub write_rps: f64,
    pub peak_read_rps: f64,
    pub peak_write_rps: f64,
    pub total_rps: f64,
    pub peak_total_rps: f64,

    // Storage, in bytes
    pub daily_storage_bytes: f64,
    pub compressed_daily_storage_bytes: f64,
    pub monthly_storage_bytes: f64,
    pub total_storage_bytes: f64,
    pub replicated_storage_bytes: f64,
    pub daily_storage: String,
    pub compressed_daily_storage: String,
    pub monthly_storage: String,
    pub total_storage: String,
    pub replicated_storage: String,

    // Bandwidth, in bits per second
    pub read_bandwidth_bps: f64,
    pub write_bandwidth_bps: f64,
    pub peak_read_bandwidth_bps: f64,
    pub peak_write_bandwidth_bps: f64,
    pub read_bandwidth: String,
    pub write_bandwidth: String,
    pub peak_read_bandwidth: String,
    pub peak_write_bandwidth: String,
}

impl DerivedMetrics {
    /// Request rates rounded to whole requests, in display order:
    /// read, write, peak read, peak write, total, peak total.
    pub fn rounded_rps(&self) -> [u64; 6] {
        [
            self.read_rps,
            self.write_rps,
            self.peak_read_rps,
            self.peak_write_rps,
            self.total_rps,
            self.peak_total_rps,
        ]
        .map(|rps| rps.round() as u64)
    }
}
