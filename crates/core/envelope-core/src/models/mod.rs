pub mod metrics;
pub mod params;

pub use metrics::DerivedMetrics;
pub use params::UsageParameters;
