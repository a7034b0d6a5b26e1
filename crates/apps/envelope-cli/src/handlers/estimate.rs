use anyhow::{Context, Result};
use clap::Args;
use envelope_core::config::ConfigManager;
use envelope_core::cost::{CostEstimate, Provider, StaticPricing, estimate_monthly_cost};
use envelope_core::env::get_base_dir;
use envelope_core::{DerivedMetrics, PayloadUnit, UsageParameters, derive};
use serde::Serialize;

use crate::ui::Layout;

/// Workload flags shared by `estimate` and `compare`. Inputs left out fall
/// back to the `[defaults]` table of config.toml.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct UsageArgs {
    /// Daily active users
    #[arg(long)]
    pub dau: Option<u64>,
    /// Reads per write
    #[arg(long = "ratio", visible_alias = "read-write-ratio")]
    pub read_write_ratio: Option<f64>,
    /// Writes per user per day
    #[arg(long = "writes")]
    pub writes_per_user: Option<f64>,
    /// Size of one write, in --unit
    #[arg(long = "payload")]
    pub payload_size: Option<f64>,
    /// Payload unit: KB, MB or GB
    #[arg(long = "unit")]
    pub payload_unit: Option<PayloadUnit>,
    /// Months of data kept
    #[arg(long = "retention")]
    pub retention_months: Option<u32>,
    /// Peak to average load ratio
    #[arg(long = "peak")]
    pub peak_multiplier: Option<f64>,
    /// Stored copies of every byte
    #[arg(long = "replication")]
    pub replication_factor: Option<f64>,
    /// Fractional size reduction in [0, 1]
    #[arg(long = "compression")]
    pub compression_ratio: Option<f64>,
    /// Exact constants: 86,400 s/day and base-1024 bytes
    #[arg(long, conflicts_with = "approximate")]
    pub precise: bool,
    /// Round-number constants: 100,000 s/day and base-1000 bytes
    #[arg(long)]
    pub approximate: bool,
    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct EstimateArgs {
    #[command(flatten)]
    pub usage: UsageArgs,
    /// Append a monthly cost estimate
    #[arg(long)]
    pub cost: bool,
    /// Provider for --cost (default from config)
    #[arg(long, requires = "cost")]
    pub provider: Option<Provider>,
}

impl UsageArgs {
    /// Overlays the flags that were given on top of `base`.
    pub fn apply(&self, base: UsageParameters) -> UsageParameters {
        let mut params = base;
        if let Some(dau) = self.dau {
            params.dau = dau;
        }
        if let Some(ratio) = self.read_write_ratio {
            params.read_write_ratio = ratio;
        }
        if let Some(writes) = self.writes_per_user {
            params.writes_per_user = writes;
        }
        if let Some(size) = self.payload_size {
            params.payload_size = size;
        }
        if let Some(unit) = self.payload_unit {
            params.payload_unit = unit;
        }
        if let Some(months) = self.retention_months {
            params.retention_months = months;
        }
        if let Some(peak) = self.peak_multiplier {
            params.peak_multiplier = peak;
        }
        if let Some(factor) = self.replication_factor {
            params.replication_factor = factor;
        }
        if let Some(ratio) = self.compression_ratio {
            params.compression_ratio = ratio;
        }
        if self.precise {
            params.precision_mode = true;
        } else if self.approximate {
            params.precision_mode = false;
        }
        params
    }
}

#[derive(Serialize)]
struct EstimateReport<'a> {
    parameters: &'a UsageParameters,
    metrics: &'a DerivedMetrics,
    #[serde(skip_serializing_if = "Option::is_none")]
    cost: Option<&'a CostEstimate>,
}

pub fn handle_estimate(args: &EstimateArgs) -> Result<()> {
    let base_dir = get_base_dir()?;
    let config = ConfigManager::new(&base_dir)?;

    let params = args.usage.apply(config.config.defaults);
    params.validate().context("Invalid estimate parameters")?;
    log::debug!("Deriving metrics for {:?}", params);
    let metrics = derive(&params);

    let cost = if args.cost {
        let provider = args.provider.unwrap_or(config.config.provider);
        Some(estimate_monthly_cost(&metrics, &StaticPricing::new(), provider)?)
    } else {
        None
    };

    if args.usage.json {
        let report = EstimateReport {
            parameters: &params,
            metrics: &metrics,
            cost: cost.as_ref(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let layout = super::layout_for(&config.config);
    render_report(&layout, &params, &metrics);
    if let Some(cost) = &cost {
        render_cost(&layout, cost);
    }
    render_footer(&layout, &metrics);
    Ok(())
}

fn render_report(layout: &Layout, params: &UsageParameters, metrics: &DerivedMetrics) {
    let theme = *layout.theme();
    layout.header_dashboard("Capacity Estimate");

    layout.section_branch("in", "Assumptions");
    layout.row_labeled("", "Daily active users", &group_thousands(params.dau as f64));
    layout.row_labeled("", "Writes per user/day", &params.writes_per_user.to_string());
    layout.row_labeled("", "Read:write ratio", &format!("{}:1", params.read_write_ratio));
    layout.row_labeled(
        "",
        "Payload",
        &format!("{} {} ({} B)", params.payload_size, params.payload_unit, metrics.payload_bytes),
    );
    layout.row_labeled("", "Retention", &format!("{} months", params.retention_months));
    layout.row_labeled(
        "",
        "Peak / replication",
        &format!("x{} / x{}", params.peak_multiplier, params.replication_factor),
    );
    layout.row_labeled(
        "",
        "Compression",
        &format!("{:.0}%", params.compression_ratio * 100.0),
    );
    layout.section_end();

    let [read, write, peak_read, peak_write, total, peak_total] = metrics.rounded_rps();
    layout.section_colored("rq", "Traffic & Load", theme.traffic);
    layout.row_metric(theme.traffic, "Read RPS", &group_thousands(read as f64), None);
    layout.row_metric(theme.traffic, "Write RPS", &group_thousands(write as f64), None);
    layout.row_metric(theme.traffic, "Total RPS", &group_thousands(total as f64), None);
    layout.row_metric(theme.peak, "Peak read RPS", &group_thousands(peak_read as f64), None);
    layout.row_metric(theme.peak, "Peak write RPS", &group_thousands(peak_write as f64), None);
    layout.row_metric(theme.peak, "Peak total RPS", &group_thousands(peak_total as f64), None);
    layout.section_end();

    layout.section_colored("st", "Storage", theme.storage);
    let storage_rows = [
        ("Daily (raw)", &metrics.daily_storage, metrics.daily_storage_bytes),
        (
            "Daily (compressed)",
            &metrics.compressed_daily_storage,
            metrics.compressed_daily_storage_bytes,
        ),
        ("Monthly", &metrics.monthly_storage, metrics.monthly_storage_bytes),
        ("Retained total", &metrics.total_storage, metrics.total_storage_bytes),
        (
            "With replication",
            &metrics.replicated_storage,
            metrics.replicated_storage_bytes,
        ),
    ];
    for (label, formatted, raw) in storage_rows {
        let raw = format!("{} B", group_thousands(raw));
        layout.row_metric(theme.storage, label, formatted, Some(&raw));
    }
    layout.section_end();

    layout.section_colored("bw", "Bandwidth", theme.bandwidth);
    layout.row_metric(theme.bandwidth, "Read", &metrics.read_bandwidth, None);
    layout.row_metric(theme.bandwidth, "Write", &metrics.write_bandwidth, None);
    layout.row_metric(theme.peak, "Peak read", &metrics.peak_read_bandwidth, None);
    layout.row_metric(theme.peak, "Peak write", &metrics.peak_write_bandwidth, None);
    layout.section_end();
}

fn render_cost(layout: &Layout, cost: &CostEstimate) {
    let theme = *layout.theme();
    layout.section_colored("$$", &format!("Monthly cost ({})", cost.provider), theme.accent);
    layout.row_metric(
        theme.storage,
        "Storage",
        &format!("${:.2}", cost.storage_cost),
        Some(&format!("{:.1} GB on {}", cost.stored_gb, cost.storage_service)),
    );
    layout.row_metric(
        theme.bandwidth,
        "Read egress",
        &format!("${:.2}", cost.egress_cost),
        Some(&format!("{:.1} GB", cost.egress_gb_per_month)),
    );
    layout.row_metric(theme.accent, "Total", &format!("${:.2}", cost.total_cost), None);
    layout.section_end();
}

fn render_footer(layout: &Layout, metrics: &DerivedMetrics) {
    if metrics.precision.exact {
        layout.badge_success(
            "EXACT",
            "86,400 seconds/day and 1024-byte units",
        );
    } else {
        layout.badge_warning(
            "APPROX",
            "100,000 seconds/day and 1000-byte units for quick estimates",
        );
        layout.footer_hint("Use --precise for exact calculations");
    }
}

/// Rounds to an integer and groups digits with `,` separators.
pub fn group_thousands(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let digits = format!("{:.0}", value.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0.0 && grouped != "0" {
        grouped.insert(0, '-');
    }
    grouped
}
