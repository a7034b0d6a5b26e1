use crate::error::{AppError, AppResult};
use crate::units::PayloadUnit;
use serde::{Deserialize, Serialize};

/// Usage assumptions for one estimate.
///
/// [`crate::derive`] accepts any value as supplied. The expected domain is:
/// every number finite and non-negative, `retention_months >= 1`,
/// `peak_multiplier >= 1`, `replication_factor >= 1` and
/// `compression_ratio` within `[0, 1]`. Hosts that collect raw input should
/// call [`UsageParameters::validate`] before deriving.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageParameters {
    /// Daily active users.
    pub dau: u64,
    /// Reads issued per write.
    pub read_write_ratio: f64,
    /// Writes issued per user per day.
    pub writes_per_user: f64,
    /// Size of one write's data, in `payload_unit`.
    pub payload_size: f64,
    pub payload_unit: PayloadUnit,
    pub retention_months: u32,
    /// Ratio of peak to average load.
    pub peak_multiplier: f64,
    /// Stored copies of every byte.
    pub replication_factor: f64,
    /// Fractional size reduction applied before storage accounting.
    pub compression_ratio: f64,
    /// Exact (86,400 s/day, base 1024) instead of round-number constants.
    pub precision_mode: bool,
}

impl Default for UsageParameters {
    fn default() -> Self {
        Self {
            dau: 1_000_000,
            read_write_ratio: 10.0,
            writes_per_user: 5.0,
            payload_size: 1.0,
            payload_unit: PayloadUnit::KB,
            retention_months: 12,
            peak_multiplier: 3.0,
            replication_factor: 3.0,
            compression_ratio: 0.3,
            precision_mode: false,
        }
    }
}

impl UsageParameters {
    pub fn with_dau(mut self, dau: u64) -> Self {
        self.dau = dau;
        self
    }

    pub fn with_read_write_ratio(mut self, ratio: f64) -> Self {
        self.read_write_ratio = ratio;
        self
    }

    pub fn with_writes_per_user(mut self, writes: f64) -> Self {
        self.writes_per_user = writes;
        self
    }

    pub fn with_payload(mut self, size: f64, unit: PayloadUnit) -> Self {
        self.payload_size = size;
        self.payload_unit = unit;
        self
    }

    pub fn with_retention_months(mut self, months: u32) -> Self {
        self.retention_months = months;
        self
    }

    pub fn with_peak_multiplier(mut self, multiplier: f64) -> Self {
        self.peak_multiplier = multiplier;
        self
    }

    pub fn with_replication_factor(mut self, factor: f64) -> Self {
        self.replication_factor = factor;
        self
    }

    pub fn with_compression_ratio(mut self, ratio: f64) -> Self {
        self.compression_ratio = ratio;
        self
    }

    pub fn with_precision_mode(mut self, precision_mode: bool) -> Self {
        self.precision_mode = precision_mode;
        self
    }

    /// Checks the documented input domain. Returns the first violation found.
    pub fn validate(&self) -> AppResult<()> {
        non_negative("read_write_ratio", self.read_write_ratio)?;
        non_negative("writes_per_user", self.writes_per_user)?;
        non_negative("payload_size", self.payload_size)?;

        if self.retention_months < 1 {
            return Err(invalid("retention_months", "must be at least 1"));
        }
        at_least_one("peak_multiplier", self.peak_multiplier)?;
        at_least_one("replication_factor", self.replication_factor)?;

        finite("compression_ratio", self.compression_ratio)?;
        if !(0.0..=1.0).contains(&self.compression_ratio) {
            return Err(invalid(
                "compression_ratio",
                format!("must be within [0, 1], got {}", self.compression_ratio),
            ));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> AppError {
    AppError::InvalidParameter {
        field,
        reason: reason.into(),
    }
}

fn finite(field: &'static str, value: f64) -> AppResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, format!("must be finite, got {}", value)))
    }
}

fn non_negative(field: &'static str, value: f64) -> AppResult<()> {
    finite(field, value)?;
    if value < 0.0 {
        return Err(invalid(field, format!("must be >= 0, got {}", value)));
    }
    Ok(())
}

fn at_least_one(field: &'static str, value: f64) -> AppResult<()> {
    finite(field, value)?;
    if value < 1.0 {
        return Err(invalid(field, format!("must be >= 1, got {}", value)));
    }
    Ok(())
}
