pub mod config;
pub mod cost;
pub mod engine;
pub mod env;
pub mod error;
pub mod format;
pub mod models;
pub mod units;

pub use config::ConfigManager;
pub use engine::derive;
pub use error::{AppError, AppResult};
pub use format::{format_bitrate, format_bytes, format_magnitude};
pub use models::{DerivedMetrics, UsageParameters};
pub use units::{PayloadUnit, Precision};
