//! Monthly cost estimate for a derived workload.
//!
//! Prices are read through [`PricingSource`], an injected read-only accessor.
//! This module never fetches, caches or refreshes prices itself;
//! [`StaticPricing`] carries the built-in fallback table.

use crate::engine::{BITS_PER_BYTE, DAYS_PER_MONTH};
use crate::error::{AppError, AppResult};
use crate::models::DerivedMetrics;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Cloud billing counts decimal gigabytes regardless of precision mode.
pub const BILLING_BYTES_PER_GB: f64 = 1e9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Aws,
    Gcp,
    Azure,
}

impl Provider {
    pub const ALL: [Provider; 3] = [Provider::Aws, Provider::Gcp, Provider::Azure];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aws => "aws",
            Self::Gcp => "gcp",
            Self::Azure => "azure",
        }
    }
}

impl Default for Provider {
    fn default() -> Self {
        Self::Aws
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::UnknownProvider(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageRate {
    pub provider: Provider,
    pub service_name: String,
    pub price_per_gb_month: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EgressRate {
    pub provider: Provider,
    pub tier: String,
    pub price_per_gb: f64,
}

/// Point-in-time price list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PricingSnapshot {
    pub storage: Vec<StorageRate>,
    pub egress: Vec<EgressRate>,
}

impl PricingSnapshot {
    pub fn storage_rate(&self, provider: Provider) -> AppResult<&StorageRate> {
        self.storage
            .iter()
            .find(|rate| rate.provider == provider)
            .ok_or_else(|| AppError::NotFound(format!("storage rate for {}", provider)))
    }

    pub fn egress_rate(&self, provider: Provider) -> AppResult<&EgressRate> {
        self.egress
            .iter()
            .find(|rate| rate.provider == provider)
            .ok_or_else(|| AppError::NotFound(format!("egress rate for {}", provider)))
    }
}

/// Read-only access to whatever price list the host holds.
pub trait PricingSource {
    fn pricing_snapshot(&self) -> &PricingSnapshot;
}

impl PricingSource for PricingSnapshot {
    fn pricing_snapshot(&self) -> &PricingSnapshot {
        self
    }
}

/// Built-in object storage and internet egress list prices.
#[derive(Debug, Clone)]
pub struct StaticPricing {
    snapshot: PricingSnapshot,
}

impl Default for StaticPricing {
    fn default() -> Self {
        Self::new()
    }
}

impl StaticPricing {
    pub fn new() -> Self {
        let storage = [
            (Provider::Aws, "S3 Standard", 0.023),
            (Provider::Gcp, "Cloud Storage Standard", 0.020),
            (Provider::Azure, "Blob Storage Hot", 0.0184),
        ]
        .into_iter()
        .map(|(provider, service, price)| StorageRate {
            provider,
            service_name: service.to_string(),
            price_per_gb_month: price,
        })
        .collect();

        let egress = [
            (Provider::Aws, "First 10 TB", 0.09),
            (Provider::Gcp, "Premium Tier", 0.12),
            (Provider::Azure, "First 10 TB", 0.087),
        ]
        .into_iter()
        .map(|(provider, tier, price)| EgressRate {
            provider,
            tier: tier.to_string(),
            price_per_gb: price,
        })
        .collect();

        Self {
            snapshot: PricingSnapshot { storage, egress },
        }
    }
}

impl PricingSource for StaticPricing {
    fn pricing_snapshot(&self) -> &PricingSnapshot {
        &self.snapshot
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostEstimate {
    pub provider: Provider,
    pub storage_service: String,
    pub stored_gb: f64,
    pub storage_cost: f64,
    pub egress_gb_per_month: f64,
    pub egress_cost: f64,
    pub total_cost: f64,
}

/// Prices one month of the workload: the replicated footprint held for a
/// month plus a month of average read traffic leaving the provider.
pub fn estimate_monthly_cost(
    metrics: &DerivedMetrics,
    source: &impl PricingSource,
    provider: Provider,
) -> AppResult<CostEstimate> {
    let snapshot = source.pricing_snapshot();
    let storage_rate = snapshot.storage_rate(provider)?;
    let egress_rate = snapshot.egress_rate(provider)?;
    log::debug!(
        "Pricing {} with {} at {}/GB-month, egress {}/GB",
        provider,
        storage_rate.service_name,
        storage_rate.price_per_gb_month,
        egress_rate.price_per_gb
    );

    let stored_gb = metrics.replicated_storage_bytes / BILLING_BYTES_PER_GB;
    let storage_cost = stored_gb * storage_rate.price_per_gb_month;

    let egress_bytes_per_month = metrics.read_bandwidth_bps / BITS_PER_BYTE
        * metrics.precision.seconds_per_day
        * DAYS_PER_MONTH;
    let egress_gb_per_month = egress_bytes_per_month / BILLING_BYTES_PER_GB;
    let egress_cost = egress_gb_per_month * egress_rate.price_per_gb;

    Ok(CostEstimate {
        provider,
        storage_service: storage_rate.service_name.clone(),
        stored_gb,
        storage_cost,
        egress_gb_per_month,
        egress_cost,
        total_cost: storage_cost + egress_cost,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::derive;
    use crate::models::UsageParameters;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= expected.abs().max(1.0) * 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_provider_parsing() {
        assert_eq!("AWS".parse::<Provider>().unwrap(), Provider::Aws);
        assert_eq!("azure".parse::<Provider>().unwrap(), Provider::Azure);
        assert!(matches!(
            "oracle".parse::<Provider>(),
            Err(AppError::UnknownProvider(_))
        ));
    }

    #[test]
    fn test_static_table_covers_every_provider() {
        let pricing = StaticPricing::new();
        for provider in Provider::ALL {
            assert!(pricing.pricing_snapshot().storage_rate(provider).is_ok());
            assert!(pricing.pricing_snapshot().egress_rate(provider).is_ok());
        }
    }

    #[test]
    fn test_estimate_default_workload_on_aws() {
        // Replicated footprint 3.78 TB; reads 4 Mbps = 500,000 B/s.
        let metrics = derive(&UsageParameters::default());
        let estimate = estimate_monthly_cost(&metrics, &StaticPricing::new(), Provider::Aws).unwrap();

        assert_close(estimate.stored_gb, 3780.0);
        assert_close(estimate.storage_cost, 3780.0 * 0.023);
        // 500,000 B/s * 100,000 s/day * 30 days = 1.5e12 B
        assert_close(estimate.egress_gb_per_month, 1500.0);
        assert_close(estimate.egress_cost, 1500.0 * 0.09);
        assert_close(estimate.total_cost, estimate.storage_cost + estimate.egress_cost);
        assert_eq!(estimate.storage_service, "S3 Standard");
    }

    #[test]
    fn test_missing_rate_is_not_found() {
        let metrics = derive(&UsageParameters::default());
        let empty = PricingSnapshot::default();
        assert!(matches!(
            estimate_monthly_cost(&metrics, &empty, Provider::Gcp),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_zero_workload_costs_nothing() {
        let metrics = derive(&UsageParameters::default().with_dau(0));
        let estimate = estimate_monthly_cost(&metrics, &StaticPricing::new(), Provider::Azure).unwrap();
        assert_eq!(estimate.total_cost, 0.0);
    }
}
