//! Payload unit ladder and the precision-selected numeric bases.
//!
//! A payload size is resolved to bytes as `size * base^exponent`, where the
//! exponent comes from [`PAYLOAD_LADDER`] and the base from [`Precision`].

use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit label a caller attaches to a payload size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PayloadUnit {
    KB,
    MB,
    GB,
}

/// One rung of the payload ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayloadStep {
    pub unit: PayloadUnit,
    pub label: &'static str,
    pub exponent: i32,
}

/// Ordered by exponent. Indexed by `PayloadUnit as usize`.
pub const PAYLOAD_LADDER: [PayloadStep; 3] = [
    PayloadStep {
        unit: PayloadUnit::KB,
        label: "KB",
        exponent: 1,
    },
    PayloadStep {
        unit: PayloadUnit::MB,
        label: "MB",
        exponent: 2,
    },
    PayloadStep {
        unit: PayloadUnit::GB,
        label: "GB",
        exponent: 3,
    },
];

impl PayloadUnit {
    pub fn step(self) -> &'static PayloadStep {
        &PAYLOAD_LADDER[self as usize]
    }

    pub fn label(self) -> &'static str {
        self.step().label
    }

    pub fn exponent(self) -> i32 {
        self.step().exponent
    }

    pub fn all() -> impl Iterator<Item = PayloadUnit> {
        PAYLOAD_LADDER.iter().map(|step| step.unit)
    }
}

impl Default for PayloadUnit {
    fn default() -> Self {
        Self::KB
    }
}

impl fmt::Display for PayloadUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PayloadUnit {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        let wanted = s.trim();
        PAYLOAD_LADDER
            .iter()
            .find(|step| step.label.eq_ignore_ascii_case(wanted))
            .map(|step| step.unit)
            .ok_or_else(|| AppError::UnknownUnit(s.to_string()))
    }
}

/// Time and byte bases used by one computation.
///
/// Both bases always come from the same mode; there is no way to build a
/// `Precision` that pairs the exact day length with decimal bytes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Precision {
    pub exact: bool,
    pub seconds_per_day: f64,
    pub byte_base: f64,
}

impl Precision {
    /// 86,400 s/day and base-1024 bytes.
    pub const EXACT: Precision = Precision {
        exact: true,
        seconds_per_day: 86_400.0,
        byte_base: 1024.0,
    };

    /// Round numbers for mental math: 100,000 s/day and base-1000 bytes.
    pub const APPROXIMATE: Precision = Precision {
        exact: false,
        seconds_per_day: 100_000.0,
        byte_base: 1000.0,
    };

    pub fn select(precision_mode: bool) -> Self {
        if precision_mode {
            Self::EXACT
        } else {
            Self::APPROXIMATE
        }
    }

    pub fn label(&self) -> &'static str {
        if self.exact { "exact" } else { "approximate" }
    }

    /// Resolves a payload size to bytes under this precision's byte base.
    pub fn payload_bytes(&self, payload_size: f64, unit: PayloadUnit) -> f64 {
        payload_size * self.byte_base.powi(unit.exponent())
    }
}

/// Resolves `payload_size` expressed in `unit` to a byte count.
pub fn to_bytes(payload_size: f64, unit: PayloadUnit, precision_mode: bool) -> f64 {
    Precision::select(precision_mode).payload_bytes(payload_size, unit)
}
