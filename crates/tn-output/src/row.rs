//! Flat `metric,value` rows for the impact report.

use tn_analytics::ImpactReport;

/// One named scalar of an impact report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricRow {
    pub metric: &'static str,
    pub value:  f64,
}

/// Flatten `report` into rows, inputs first.
pub fn impact_rows(report: &ImpactReport) -> Vec<MetricRow> {
    let r = report;
    let rows = [
        ("adoption_rate_percent",       r.inputs.adoption_rate_percent),
        ("matatu_speed_kmh",            r.inputs.matatu_speed_kmh),
        ("train_speed_kmh",             r.inputs.train_speed_kmh),
        ("selected_tier_count",         r.inputs.tiers.len() as f64),
        ("total_daily_passengers",      r.total_daily_passengers),
        ("base_distance_km",            r.base_distance_km),
        ("matatu_time_hours",           r.savings.matatu_time_hours),
        ("train_time_hours",            r.savings.train_time_hours),
        ("time_saved_per_trip_hours",   r.savings.time_saved_per_trip_hours),
        ("hours_saved_per_week",        r.savings.hours_saved_per_week),
        ("matatu_time_minutes",         r.matatu_time_minutes),
        ("train_time_minutes",          r.train_time_minutes),
        ("time_saved_per_trip_minutes", r.time_saved_per_trip_minutes),
        ("minutes_saved_per_week",      r.minutes_saved_per_week),
        ("hours_saved_per_month",       r.hours_saved_per_month),
        ("hours_saved_per_year",        r.hours_saved_per_year),
    ];
    rows.into_iter().map(|(metric, value)| MetricRow { metric, value }).collect()
}
