//! Tier-filtered hub rollups.
//!
//! # Two code paths
//!
//! With every tier selected, [`aggregate`] hands back the upstream
//! `hub_connectivity_stats` rows untouched.  Any narrower selection is
//! recomputed from the feeder-route layer:
//!
//! ```text
//! total_feeder_routes       = count of matching routes
//! total_population_served   = Σ population_weight
//! avg_feeder_distance       = Σ route_distance_km / total_feeder_routes
//! estimated_daily_ridership = total_population_served × 0.15
//! ```
//!
//! The two paths are not guaranteed to agree when they mathematically
//! should; the precomputed rows win for the full selection.

use std::cmp::Ordering;

use log::debug;

use tn_core::TierSelection;
use tn_data::{FeederRoute, HubRollup};

#[cfg(feature = "fx-hash")]
type HubIndex = rustc_hash::FxHashMap<String, usize>;
#[cfg(not(feature = "fx-hash"))]
type HubIndex = std::collections::HashMap<String, usize>;

/// Share of served population assumed to ride daily.
pub const RIDERSHIP_CONVERSION: f64 = 0.15;

// ── Aggregation ───────────────────────────────────────────────────────────────

struct HubAccumulator {
    target_hub:     String,
    routes:         u32,
    population:     f64,
    distance_sum:   f64,
}

impl HubAccumulator {
    fn into_rollup(self) -> HubRollup {
        // A hub only gets an accumulator once a route matched it, so
        // `routes` is never zero here.
        HubRollup {
            avg_feeder_distance:       self.distance_sum / f64::from(self.routes),
            estimated_daily_ridership: self.population * RIDERSHIP_CONVERSION,
            total_population_served:   self.population,
            total_feeder_routes:       self.routes,
            target_hub:                self.target_hub,
        }
    }
}

/// Per-hub rollups of the feeder routes whose tier is in `selected`.
///
/// - Full selection: returns a copy of `precomputed` as-is.
/// - Empty selection: returns an empty `Vec`.
/// - Otherwise: recomputes from `routes`.  Hubs appear in the order their
///   first matching route appears; callers that need a ranking use
///   [`sort_by_ridership`].
///
/// Routes with an unrecognised tier (`tier == None`) never match.
pub fn aggregate(
    routes:      &[FeederRoute],
    selected:    TierSelection,
    precomputed: &[HubRollup],
) -> Vec<HubRollup> {
    if selected.is_all() {
        debug!("hub aggregate: full tier selection, using {} precomputed rows", precomputed.len());
        return precomputed.to_vec();
    }
    if selected.is_empty() {
        debug!("hub aggregate: empty tier selection");
        return Vec::new();
    }

    let mut index = HubIndex::default();
    let mut hubs: Vec<HubAccumulator> = Vec::new();

    for route in routes.iter().filter(|r| selected.matches(r.properties.tier)) {
        let p = &route.properties;
        let slot = match index.get(p.target_hub.as_str()).copied() {
            Some(i) => i,
            None => {
                index.insert(p.target_hub.clone(), hubs.len());
                hubs.push(HubAccumulator {
                    target_hub:   p.target_hub.clone(),
                    routes:       0,
                    population:   0.0,
                    distance_sum: 0.0,
                });
                hubs.len() - 1
            }
        };
        let acc = &mut hubs[slot];
        acc.routes       += 1;
        acc.population   += p.population_weight;
        acc.distance_sum += p.route_distance_km;
    }

    debug!(
        "hub aggregate: tiers {selected} matched routes into {} hubs (of {} routes)",
        hubs.len(),
        routes.len()
    );
    hubs.into_iter().map(HubAccumulator::into_rollup).collect()
}

/// Sort rollups by `estimated_daily_ridership`, highest first.
///
/// Stable, so equal-ridership hubs keep their input order.  NaN values sort
/// last.
pub fn sort_by_ridership(rollups: &mut [HubRollup]) {
    rollups.sort_by(|a, b| {
        let (x, y) = (a.estimated_daily_ridership, b.estimated_daily_ridership);
        match (x.is_nan(), y.is_nan()) {
            (true, true)   => Ordering::Equal,
            (true, false)  => Ordering::Greater,
            (false, true)  => Ordering::Less,
            (false, false) => y.total_cmp(&x),
        }
    });
}

// ── Summary ───────────────────────────────────────────────────────────────────

/// Totals shown beside the ridership chart.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize)]
pub struct HubSummary {
    pub hub_count:               usize,
    pub total_daily_ridership:   f64,
    pub total_population_served: f64,
}

impl HubSummary {
    pub fn from_rollups(rollups: &[HubRollup]) -> Self {
        Self {
            hub_count:               rollups.len(),
            total_daily_ridership:   rollups.iter().map(|r| r.estimated_daily_ridership).sum(),
            total_population_served: rollups.iter().map(|r| r.total_population_served).sum(),
        }
    }
}
