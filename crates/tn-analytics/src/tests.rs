//! Unit tests for tn-analytics.

use tn_core::{Tier, TierSelection};
use tn_data::{ExecutiveMetrics, FeederRoute, HubRollup};

// ── Helpers ───────────────────────────────────────────────────────────────────

const T1: Tier = Tier::WhiteCollar;
const T2: Tier = Tier::Informal;
const T3: Tier = Tier::MiddleIncome;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn rollup(hub: &str, routes: u32, pop: f64, dist: f64, riders: f64) -> HubRollup {
    HubRollup {
        target_hub:                hub.to_owned(),
        total_feeder_routes:       routes,
        total_population_served:   pop,
        avg_feeder_distance:       dist,
        estimated_daily_ridership: riders,
    }
}

/// Upstream all-tiers rows that deliberately disagree with `mixed_routes()`.
fn precomputed() -> Vec<HubRollup> {
    vec![
        rollup("CBD", 412, 1_250_000.0, 4.2, 187_500.0),
        rollup("Westlands", 188, 540_000.0, 3.7, 81_000.0),
    ]
}

fn mixed_routes() -> Vec<FeederRoute> {
    vec![
        FeederRoute::new(T1, "Westlands", 3.0, 400.0),
        FeederRoute::new(T2, "CBD", 5.0, 1_000.0),
        FeederRoute::new(T3, "CBD", 7.0, 600.0),
        FeederRoute::new(T1, "CBD", 2.0, 100.0),
        FeederRoute::new(T2, "Gikomba", 4.0, 2_000.0),
    ]
}

fn metrics() -> ExecutiveMetrics {
    ExecutiveMetrics {
        total_network_km:           184.2,
        avg_tier1_commute_km:       6.0,
        avg_tier3_commute_km:       9.0,
        commute_penalty_multiplier: 1.5,
        total_daily_ridership_est:  400_000.0,
    }
}

// ── Hub aggregation ───────────────────────────────────────────────────────────

#[cfg(test)]
mod aggregate {
    use tn_data::{FeatureCollection, FeederRouteProps, load_collection_reader};

    use super::*;
    use crate::{RIDERSHIP_CONVERSION, aggregate};

    #[test]
    fn full_selection_returns_precomputed_verbatim() {
        let pre = precomputed();
        let out = aggregate(&mixed_routes(), TierSelection::all(), &pre);
        assert_eq!(out, pre);
    }

    #[test]
    fn empty_selection_returns_nothing() {
        let out = aggregate(&mixed_routes(), TierSelection::empty(), &precomputed());
        assert!(out.is_empty());
    }

    #[test]
    fn single_hub_two_routes() {
        let routes = vec![
            FeederRoute::new(T1, "A", 10.0, 100.0),
            FeederRoute::new(T1, "A", 20.0, 50.0),
        ];
        let out = aggregate(&routes, TierSelection::only(T1), &[]);
        assert_eq!(out.len(), 1);
        let a = &out[0];
        assert_eq!(a.target_hub, "A");
        assert_eq!(a.total_feeder_routes, 2);
        assert!(approx(a.total_population_served, 150.0));
        assert!(approx(a.avg_feeder_distance, 15.0));
        assert!(approx(a.estimated_daily_ridership, 22.5));
    }

    #[test]
    fn only_selected_tiers_contribute() {
        let sel = TierSelection::only(T2).with(T3);
        let out = aggregate(&mixed_routes(), sel, &precomputed());
        assert_eq!(out.len(), 2);

        let cbd = out.iter().find(|r| r.target_hub == "CBD").unwrap();
        assert_eq!(cbd.total_feeder_routes, 2);
        assert!(approx(cbd.total_population_served, 1_600.0));
        assert!(approx(cbd.avg_feeder_distance, 6.0));
        assert!(approx(cbd.estimated_daily_ridership, 1_600.0 * RIDERSHIP_CONVERSION));

        assert!(out.iter().all(|r| r.target_hub != "Westlands"));
    }

    #[test]
    fn hubs_in_first_seen_order() {
        let out = aggregate(&mixed_routes(), TierSelection::only(T1).with(T2), &[]);
        let hubs: Vec<&str> = out.iter().map(|r| r.target_hub.as_str()).collect();
        assert_eq!(hubs, ["Westlands", "CBD", "Gikomba"]);
    }

    #[test]
    fn missing_numbers_count_as_zero() {
        let routes = vec![
            FeederRoute::new(T3, "Umoja", 0.0, 0.0),
            FeederRoute::new(T3, "Umoja", 8.0, 200.0),
        ];
        let out = aggregate(&routes, TierSelection::only(T3), &[]);
        assert_eq!(out[0].total_feeder_routes, 2);
        assert!(approx(out[0].avg_feeder_distance, 4.0));
        assert!(approx(out[0].total_population_served, 200.0));
    }

    #[test]
    fn untiered_routes_never_match() {
        let mut stray = FeederRoute::new(T1, "CBD", 1.0, 1.0);
        stray.properties.tier = None;
        let out = aggregate(&[stray], TierSelection::only(T1).with(T2), &[]);
        assert!(out.is_empty());
    }

    #[test]
    fn short_tier_labels_in_dataset_never_match() {
        let json = r#"{ "features": [
            { "properties": { "tier": "T1", "target_hub": "CBD", "route_distance_km": 2, "population_weight": 100 } },
            { "properties": { "tier": "3", "target_hub": "CBD", "route_distance_km": 4, "population_weight": 100 } },
            { "properties": { "tier": "Tier_1_WhiteCollar", "target_hub": "Westlands",
                              "route_distance_km": 3, "population_weight": 200 } }
        ] }"#;
        let fc: FeatureCollection<FeederRouteProps> =
            load_collection_reader(std::io::Cursor::new(json)).unwrap();
        assert_eq!(fc.features[0].properties.tier, None);

        let out = aggregate(&fc.features, TierSelection::only(T1).with(T3), &[]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].target_hub, "Westlands");
        assert_eq!(out[0].total_feeder_routes, 1);
        assert!(approx(out[0].total_population_served, 200.0));
    }

    #[test]
    fn repeated_calls_are_identical() {
        let routes = mixed_routes();
        let sel = TierSelection::only(T2);
        let a = aggregate(&routes, sel, &[]);
        let _ = aggregate(&routes, TierSelection::only(T1), &[]);
        let b = aggregate(&routes, sel, &[]);
        assert_eq!(a, b);
    }
}

#[cfg(test)]
mod ranking {
    use super::*;
    use crate::{HubSummary, sort_by_ridership};

    #[test]
    fn sorts_descending_with_nan_last() {
        let mut v = vec![
            rollup("low", 1, 0.0, 0.0, 10.0),
            rollup("nan", 1, 0.0, 0.0, f64::NAN),
            rollup("high", 1, 0.0, 0.0, 300.0),
            rollup("mid", 1, 0.0, 0.0, 50.0),
        ];
        sort_by_ridership(&mut v);
        let order: Vec<&str> = v.iter().map(|r| r.target_hub.as_str()).collect();
        assert_eq!(order, ["high", "mid", "low", "nan"]);
    }

    #[test]
    fn summary_totals() {
        let s = HubSummary::from_rollups(&precomputed());
        assert_eq!(s.hub_count, 2);
        assert!(approx(s.total_daily_ridership, 268_500.0));
        assert!(approx(s.total_population_served, 1_790_000.0));
        assert_eq!(HubSummary::from_rollups(&[]), HubSummary::default());
    }
}

// ── Impact formulas ───────────────────────────────────────────────────────────

#[cfg(test)]
mod impact {
    use super::*;
    use crate::{
        ImpactReport, SimulatorInputs, TIER2_REPRESENTATIVE_KM, compute_time_savings,
        compute_total_daily_passengers, compute_weighted_distance,
    };

    #[test]
    fn weighted_distance_single_tier() {
        assert!(approx(compute_weighted_distance(TierSelection::only(T1), 6.0, 9.0), 6.0));
        assert!(approx(
            compute_weighted_distance(TierSelection::only(T2), 6.0, 9.0),
            TIER2_REPRESENTATIVE_KM
        ));
    }

    #[test]
    fn weighted_distance_is_unweighted_mean() {
        let sel = TierSelection::only(T1).with(T3);
        assert!(approx(compute_weighted_distance(sel, 6.0, 9.0), 7.5));
        let all = compute_weighted_distance(TierSelection::all(), 6.0, 9.0);
        assert!(approx(all, (6.0 + 4.87 + 9.0) / 3.0));
    }

    #[test]
    fn weighted_distance_empty_falls_back_to_tier3() {
        assert!(approx(compute_weighted_distance(TierSelection::empty(), 6.0, 9.0), 9.0));
    }

    #[test]
    fn time_savings_reference_values() {
        let t = compute_time_savings(7.5, 15.0, 40.0);
        assert!(approx(t.matatu_time_hours, 0.5));
        assert!(approx(t.train_time_hours, 0.1875));
        assert!(approx(t.time_saved_per_trip_hours, 0.3125));
        assert!(approx(t.hours_saved_per_week, 3.75));
    }

    #[test]
    fn slower_train_gives_negative_savings() {
        let t = compute_time_savings(10.0, 30.0, 20.0);
        assert!(t.time_saved_per_trip_hours < 0.0);
        assert!(approx(t.hours_saved_per_week, (10.0 / 30.0 - 10.0 / 20.0) * 12.0));
    }

    #[test]
    fn faster_train_never_saves_less() {
        let mut prev = f64::NEG_INFINITY;
        for speed in (20..=300).step_by(5) {
            let week = compute_time_savings(7.5, 15.0, speed as f64).hours_saved_per_week;
            assert!(week >= prev, "speed {speed}: {week} < {prev}");
            prev = week;
        }
    }

    #[test]
    fn passengers_scale_linearly_with_adoption() {
        let a = compute_total_daily_passengers(400_000.0, 20.0);
        let b = compute_total_daily_passengers(400_000.0, 40.0);
        assert!(approx(a, 80_000.0));
        assert!(approx(b, 2.0 * a));
    }

    #[test]
    fn report_with_defaults() {
        let r = ImpactReport::compute(&metrics(), SimulatorInputs::default());
        // Default selection is tier 3 only → 9 km.
        assert!(approx(r.base_distance_km, 9.0));
        assert!(approx(r.total_daily_passengers, 60_000.0));
        assert!(approx(r.savings.matatu_time_hours, 0.6));
        assert!(approx(r.savings.train_time_hours, 0.225));
        assert!(approx(r.matatu_time_minutes, 36.0));
        assert!(approx(r.train_time_minutes, 13.5));
        assert!(approx(r.time_saved_per_trip_minutes, 22.5));
        assert!(approx(r.savings.hours_saved_per_week, 4.5));
        assert!(approx(r.minutes_saved_per_week, 270.0));
        assert!(approx(r.hours_saved_per_month, 18.0));
        assert!(approx(r.hours_saved_per_year, 234.0));
    }

    #[test]
    fn report_follows_tier_toggle() {
        let inputs = SimulatorInputs::default().toggle_tier(T1);
        let r = ImpactReport::compute(&metrics(), inputs);
        assert!(approx(r.base_distance_km, 7.5));
        assert!(approx(r.savings.hours_saved_per_week, 3.75));
    }
}

// ── Simulator inputs ──────────────────────────────────────────────────────────

#[cfg(test)]
mod simulator {
    use super::*;
    use crate::{SimulatorError, SimulatorInputs, SliderBounds};

    #[test]
    fn defaults() {
        let d = SimulatorInputs::default();
        assert_eq!(d.adoption_rate_percent, 15.0);
        assert_eq!(d.matatu_speed_kmh, 15.0);
        assert_eq!(d.train_speed_kmh, 40.0);
        assert_eq!(d.tiers, TierSelection::only(T3));
    }

    #[test]
    fn accepts_bounds_inclusive() {
        assert!(SimulatorInputs::new(10.0, 5.0, 20.0, TierSelection::all()).is_ok());
        assert!(SimulatorInputs::new(100.0, 30.0, 300.0, TierSelection::empty()).is_ok());
    }

    #[test]
    fn rejects_out_of_range_with_field_name() {
        let err = SimulatorInputs::new(50.0, 0.0, 40.0, TierSelection::all()).unwrap_err();
        assert_eq!(
            err,
            SimulatorError::OutOfRange { field: "matatu_speed_kmh", value: 0.0, min: 5.0, max: 30.0 }
        );
        assert!(SimulatorInputs::new(5.0, 15.0, 40.0, TierSelection::all()).is_err());
        assert!(SimulatorInputs::new(50.0, 15.0, 301.0, TierSelection::all()).is_err());
    }

    #[test]
    fn nan_is_out_of_range() {
        assert!(SliderBounds::TRAIN_SPEED_KMH.check(f64::NAN).is_err());
        assert_eq!(SliderBounds::TRAIN_SPEED_KMH.clamp(f64::NAN), 20.0);
    }

    #[test]
    fn clamped_pulls_into_bounds() {
        let c = SimulatorInputs::clamped(0.0, 100.0, 1_000.0, TierSelection::all());
        assert_eq!(c.adoption_rate_percent, 10.0);
        assert_eq!(c.matatu_speed_kmh, 30.0);
        assert_eq!(c.train_speed_kmh, 300.0);
    }

    #[test]
    fn toggle_tier_returns_new_value() {
        let d = SimulatorInputs::default();
        let t = d.toggle_tier(T3);
        assert!(t.tiers.is_empty());
        assert_eq!(d.tiers, TierSelection::only(T3));
    }
}
