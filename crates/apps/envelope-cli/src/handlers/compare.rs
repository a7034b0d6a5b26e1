use anyhow::{Context, Result};
use envelope_core::config::ConfigManager;
use envelope_core::env::get_base_dir;
use envelope_core::{DerivedMetrics, derive};

use super::estimate::{UsageArgs, group_thousands};
use crate::ui::Layout;

/// Derives the same workload under both precision modes.
pub fn handle_compare(args: &UsageArgs) -> Result<()> {
    let base_dir = get_base_dir()?;
    let config = ConfigManager::new(&base_dir)?;

    let params = args.apply(config.config.defaults);
    params.validate().context("Invalid estimate parameters")?;
    let approximate = derive(&params.with_precision_mode(false));
    let exact = derive(&params.with_precision_mode(true));

    if args.json {
        let report = serde_json::json!({
            "parameters": params,
            "approximate": approximate,
            "exact": exact,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let layout = super::layout_for(&config.config);
    render_comparison(&layout, &approximate, &exact);
    Ok(())
}

fn render_comparison(layout: &Layout, approximate: &DerivedMetrics, exact: &DerivedMetrics) {
    layout.header_dashboard("Approximate vs Exact");

    layout.section_branch("cb", "Constants");
    layout.row_compare("", approximate.precision.label(), exact.precision.label());
    layout.row_compare(
        "Seconds per day",
        &group_thousands(approximate.precision.seconds_per_day),
        &group_thousands(exact.precision.seconds_per_day),
    );
    layout.row_compare(
        "Byte base",
        &approximate.precision.byte_base.to_string(),
        &exact.precision.byte_base.to_string(),
    );
    layout.section_end();

    let [a_read, a_write, a_peak_read, a_peak_write, a_total, a_peak_total] =
        approximate.rounded_rps();
    let [e_read, e_write, e_peak_read, e_peak_write, e_total, e_peak_total] = exact.rounded_rps();
    layout.section_branch("rq", "Traffic & Load");
    for (label, a, e) in [
        ("Read RPS", a_read, e_read),
        ("Write RPS", a_write, e_write),
        ("Total RPS", a_total, e_total),
        ("Peak read RPS", a_peak_read, e_peak_read),
        ("Peak write RPS", a_peak_write, e_peak_write),
        ("Peak total RPS", a_peak_total, e_peak_total),
    ] {
        layout.row_compare(label, &group_thousands(a as f64), &group_thousands(e as f64));
    }
    layout.section_end();

    layout.section_branch("st", "Storage");
    for (label, a, e) in [
        ("Daily (raw)", &approximate.daily_storage, &exact.daily_storage),
        (
            "Daily (compressed)",
            &approximate.compressed_daily_storage,
            &exact.compressed_daily_storage,
        ),
        ("Monthly", &approximate.monthly_storage, &exact.monthly_storage),
        ("Retained total", &approximate.total_storage, &exact.total_storage),
        (
            "With replication",
            &approximate.replicated_storage,
            &exact.replicated_storage,
        ),
    ] {
        layout.row_compare(label, a, e);
    }
    layout.section_end();

    layout.section_branch("bw", "Bandwidth");
    for (label, a, e) in [
        ("Read", &approximate.read_bandwidth, &exact.read_bandwidth),
        ("Write", &approximate.write_bandwidth, &exact.write_bandwidth),
        ("Peak read", &approximate.peak_read_bandwidth, &exact.peak_read_bandwidth),
        ("Peak write", &approximate.peak_write_bandwidth, &exact.peak_write_bandwidth),
    ] {
        layout.row_compare(label, a, e);
    }
    layout.section_end();

    let drift = if exact.total_rps > 0.0 {
        (approximate.total_rps / exact.total_rps - 1.0) * 100.0
    } else {
        0.0
    };
    layout.badge_info(
        "DRIFT",
        &format!("Approximate request rates differ by {:+.1}%", drift),
    );
}
