//! transit-dash — text front end for the transit network analytics.
//!
//! Loads a `web_exports/` dataset directory and prints the three dashboard
//! views: executive KPIs with map-layer counts, tier-filtered hub analytics,
//! and the impact simulator.  Optionally writes the hub rollups and impact
//! report to `--out`.
//!
//! Run with:
//!   RUST_LOG=debug cargo run -p dashboard -- --data-dir ./web_exports --tiers T1,T3

mod config;

use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use serde_json::json;

use tn_analytics::{HubSummary, ImpactReport, aggregate, sort_by_ridership};
use tn_data::{DatasetSnapshot, HubRollup, load_snapshot};
use tn_output::{CsvReportWriter, JsonReportWriter, ReportWriter};

use config::{DashboardConfig, ReportFormat};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("{}", config::USAGE);
        return Ok(());
    }
    let cfg = DashboardConfig::from_args(&args)?;

    let snapshot = load_snapshot(&cfg.data_dir)
        .with_context(|| format!("loading dataset from {}", cfg.data_dir.display()))?;

    let mut rollups = aggregate(&snapshot.feeder_routes.features, cfg.hub_tiers, &snapshot.hub_stats);
    sort_by_ridership(&mut rollups);
    let impact = ImpactReport::compute(&snapshot.executive_metrics, cfg.inputs);

    if cfg.json {
        print_json(&snapshot, &cfg, &rollups, &impact)?;
    } else {
        print_overview(&snapshot, &cfg);
        print_hubs(&rollups, &cfg);
        print_impact(&impact);
    }

    if let Some(out) = &cfg.out_dir {
        write_reports(out, cfg.format, &rollups, &impact)?;
        info!("reports written to {}", out.display());
    }
    Ok(())
}

// ── Views ─────────────────────────────────────────────────────────────────────

fn print_overview(snapshot: &DatasetSnapshot, cfg: &DashboardConfig) {
    let m = &snapshot.executive_metrics;
    let layers = snapshot.layer_stats(cfg.hub_tiers);

    println!("── Network overview ─────────────────────────────────────────");
    println!("  network length         {:>10.1} km", m.total_network_km);
    println!("  avg tier 1 commute     {:>10.2} km", m.avg_tier1_commute_km);
    println!("  avg tier 3 commute     {:>10.2} km", m.avg_tier3_commute_km);
    println!("  commute penalty        {:>10.2}x", m.commute_penalty_multiplier);
    println!("  est. daily ridership   {:>10}", format_number(m.total_daily_ridership_est));
    println!();
    println!("  map layers (tiers {}):", cfg.hub_tiers);
    println!("    hubs                 {:>10}", layers.hub_destinations);
    println!("    neighborhood hubs    {:>10}", layers.neighborhood_hubs);
    println!("    residential nodes    {:>10}", layers.residential_nodes);
    println!("    residential pop.     {:>10}", format_number(layers.residential_population));
    println!("    feeder routes        {:>10}", layers.feeder_routes);
    println!(
        "    rail segments        {:>10}  ({:.1} km track, {:.1} km geometry)",
        layers.rail_segments, layers.rail_track_km, layers.rail_geometry_km
    );
    println!();
}

fn print_hubs(rollups: &[HubRollup], cfg: &DashboardConfig) {
    let summary = HubSummary::from_rollups(rollups);

    println!("── Hub analytics (tiers {}) ─────────────────────────────────", cfg.hub_tiers);
    println!(
        "  {:<24} {:>7} {:>12} {:>9} {:>12}",
        "hub", "routes", "population", "avg km", "riders/day"
    );
    for r in rollups {
        println!(
            "  {:<24} {:>7} {:>12} {:>9.2} {:>12}",
            r.target_hub,
            r.total_feeder_routes,
            format_number(r.total_population_served),
            r.avg_feeder_distance,
            format_number(r.estimated_daily_ridership),
        );
    }
    println!(
        "  {} hubs, {} riders/day, {} population served",
        summary.hub_count,
        format_number(summary.total_daily_ridership),
        format_number(summary.total_population_served),
    );
    println!();
}

fn print_impact(r: &ImpactReport) {
    let s = &r.savings;
    println!("── Impact simulator (tiers {}) ──────────────────────────────", r.inputs.tiers);
    println!(
        "  adoption {:.0}% → {:.0} passengers/day",
        r.inputs.adoption_rate_percent, r.total_daily_passengers
    );
    println!("  base distance          {:>8.2} km", r.base_distance_km);
    println!(
        "  matatu @ {:>3.0} km/h      {:>8.1} min  ({:.2} h)",
        r.inputs.matatu_speed_kmh, r.matatu_time_minutes, s.matatu_time_hours
    );
    println!(
        "  train  @ {:>3.0} km/h      {:>8.1} min  ({:.2} h)",
        r.inputs.train_speed_kmh, r.train_time_minutes, s.train_time_hours
    );
    println!(
        "  saved per trip         {:>8.1} min  ({:.2} h)",
        r.time_saved_per_trip_minutes, s.time_saved_per_trip_hours
    );
    println!("  saved per week         {:>8.1} h    ({:.0} min)", s.hours_saved_per_week, r.minutes_saved_per_week);
    println!("  saved per month        {:>8.1} h", r.hours_saved_per_month);
    println!("  saved per year         {:>8.0} h", r.hours_saved_per_year);
}

fn print_json(
    snapshot: &DatasetSnapshot,
    cfg:      &DashboardConfig,
    rollups:  &[HubRollup],
    impact:   &ImpactReport,
) -> Result<()> {
    let layers = snapshot.layer_stats(cfg.hub_tiers);
    let view = json!({
        "executive_metrics": snapshot.executive_metrics,
        "hub_tiers": cfg.hub_tiers,
        "layers": {
            "hub_destinations":       layers.hub_destinations,
            "neighborhood_hubs":      layers.neighborhood_hubs,
            "residential_nodes":      layers.residential_nodes,
            "residential_population": layers.residential_population,
            "feeder_routes":          layers.feeder_routes,
            "rail_segments":          layers.rail_segments,
            "rail_track_km":          layers.rail_track_km,
        },
        "hub_rollups": rollups,
        "hub_summary": HubSummary::from_rollups(rollups),
        "impact": impact,
    });
    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}

// ── Output ────────────────────────────────────────────────────────────────────

fn write_reports(dir: &Path, format: ReportFormat, rollups: &[HubRollup], impact: &ImpactReport) -> Result<()> {
    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let mut writer: Box<dyn ReportWriter> = match format {
        ReportFormat::Csv  => Box::new(CsvReportWriter::new(dir)?),
        ReportFormat::Json => Box::new(JsonReportWriter::new(dir)?),
    };
    writer.write_hub_rollups(rollups)?;
    writer.write_impact(impact)?;
    writer.finish()?;
    Ok(())
}

/// `1.2M`, `340.5K`, `87`.
fn format_number(n: f64) -> String {
    if n >= 1_000_000.0 {
        format!("{:.1}M", n / 1_000_000.0)
    } else if n >= 1_000.0 {
        format!("{:.1}K", n / 1_000.0)
    } else {
        format!("{n:.0}")
    }
}
