//! Tabular records from the two summary CSV files.

use serde::{Deserialize, Serialize};

/// Network-wide KPIs.  `executive_metrics.csv` holds exactly one row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExecutiveMetrics {
    pub total_network_km:           f64,
    pub avg_tier1_commute_km:       f64,
    pub avg_tier3_commute_km:       f64,
    /// Ratio of tier-3 to tier-1 average commute distance.
    pub commute_penalty_multiplier: f64,
    pub total_daily_ridership_est:  f64,
}

/// Per-hub connectivity statistics.
///
/// The same shape is used for rows of `hub_connectivity_stats.csv` (the
/// all-tiers rollup computed upstream) and for rollups recomputed from the
/// feeder-route layer under a narrower tier selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HubRollup {
    pub target_hub:                String,
    pub total_feeder_routes:       u32,
    pub total_population_served:   f64,
    pub avg_feeder_distance:       f64,
    pub estimated_daily_ridership: f64,
}
