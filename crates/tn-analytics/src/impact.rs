//! Commute impact formulas.
//!
//! ```text
//! base_km          = mean over selected tiers of { T1: avg_tier1_commute_km,
//!                                                  T2: 4.87,
//!                                                  T3: avg_tier3_commute_km }
//!                    (avg_tier3_commute_km when nothing is selected)
//! matatu_h         = base_km / matatu_kmh
//! train_h          = base_km / train_kmh
//! saved_per_trip_h = matatu_h − train_h            (negative if the train is slower)
//! saved_per_week_h = saved_per_trip_h × 2 trips/day × 6 days/week
//! passengers/day   = total_daily_ridership_est × adoption% / 100
//! ```
//!
//! Speeds are not checked for zero here; [`SimulatorInputs`] keeps them
//! inside their slider bounds.

use serde::Serialize;

use tn_core::{Tier, TierSelection};
use tn_data::ExecutiveMetrics;

use crate::SimulatorInputs;

/// Stand-in commute distance for tier 2, which has no measured average.
/// Roughly the midpoint of the tier 1 and tier 3 averages.
pub const TIER2_REPRESENTATIVE_KM: f64 = 4.87;
pub const TRIPS_PER_DAY:           f64 = 2.0;
pub const WORKING_DAYS_PER_WEEK:   f64 = 6.0;
pub const WEEKS_PER_MONTH:         f64 = 4.0;
pub const WEEKS_PER_YEAR:          f64 = 52.0;

const MINUTES_PER_HOUR: f64 = 60.0;

/// Unweighted mean of the representative commute distance of each selected
/// tier.  Empty selection falls back to `tier3_avg_km`.
pub fn compute_weighted_distance(selected: TierSelection, tier1_avg_km: f64, tier3_avg_km: f64) -> f64 {
    if selected.is_empty() {
        return tier3_avg_km;
    }
    let total: f64 = selected
        .iter()
        .map(|tier| match tier {
            Tier::WhiteCollar  => tier1_avg_km,
            Tier::Informal     => TIER2_REPRESENTATIVE_KM,
            Tier::MiddleIncome => tier3_avg_km,
        })
        .sum();
    total / selected.len() as f64
}

/// Per-trip and weekly travel time for one commute distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeSavings {
    pub matatu_time_hours:         f64,
    pub train_time_hours:          f64,
    pub time_saved_per_trip_hours: f64,
    pub hours_saved_per_week:      f64,
}

pub fn compute_time_savings(base_distance_km: f64, matatu_speed_kmh: f64, train_speed_kmh: f64) -> TimeSavings {
    let matatu_time_hours = base_distance_km / matatu_speed_kmh;
    let train_time_hours = base_distance_km / train_speed_kmh;
    let time_saved_per_trip_hours = matatu_time_hours - train_time_hours;
    TimeSavings {
        matatu_time_hours,
        train_time_hours,
        time_saved_per_trip_hours,
        hours_saved_per_week: time_saved_per_trip_hours * TRIPS_PER_DAY * WORKING_DAYS_PER_WEEK,
    }
}

pub fn compute_total_daily_passengers(total_daily_ridership_est: f64, adoption_rate_percent: f64) -> f64 {
    total_daily_ridership_est * (adoption_rate_percent / 100.0)
}

// ── ImpactReport ──────────────────────────────────────────────────────────────

/// Everything the impact simulator view displays for one set of inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ImpactReport {
    pub inputs:                      SimulatorInputs,
    pub total_daily_passengers:      f64,
    pub base_distance_km:            f64,
    #[serde(flatten)]
    pub savings:                     TimeSavings,
    pub matatu_time_minutes:         f64,
    pub train_time_minutes:          f64,
    pub time_saved_per_trip_minutes: f64,
    pub minutes_saved_per_week:      f64,
    pub hours_saved_per_month:       f64,
    pub hours_saved_per_year:        f64,
}

impl ImpactReport {
    pub fn compute(metrics: &ExecutiveMetrics, inputs: SimulatorInputs) -> Self {
        let base_distance_km = compute_weighted_distance(
            inputs.tiers,
            metrics.avg_tier1_commute_km,
            metrics.avg_tier3_commute_km,
        );
        let savings = compute_time_savings(base_distance_km, inputs.matatu_speed_kmh, inputs.train_speed_kmh);
        let week = savings.hours_saved_per_week;

        Self {
            inputs,
            total_daily_passengers: compute_total_daily_passengers(
                metrics.total_daily_ridership_est,
                inputs.adoption_rate_percent,
            ),
            base_distance_km,
            savings,
            matatu_time_minutes:         savings.matatu_time_hours * MINUTES_PER_HOUR,
            train_time_minutes:          savings.train_time_hours * MINUTES_PER_HOUR,
            time_saved_per_trip_minutes: savings.time_saved_per_trip_hours * MINUTES_PER_HOUR,
            minutes_saved_per_week:      week * MINUTES_PER_HOUR,
            hours_saved_per_month:       week * WEEKS_PER_MONTH,
            hours_saved_per_year:        week * WEEKS_PER_YEAR,
        }
    }
}
