//! Dataset directory loader.
//!
//! # CSV formats
//!
//! ```csv
//! total_network_km,avg_tier1_commute_km,avg_tier3_commute_km,commute_penalty_multiplier,total_daily_ridership_est
//! 184.2,3.91,5.83,1.49,412000
//! ```
//!
//! ```csv
//! target_hub,total_feeder_routes,total_population_served,avg_feeder_distance,estimated_daily_ridership
//! CBD,412,1250000,4.2,187500
//! Westlands,188,540000,3.7,81000
//! ```
//!
//! Only the first row of `executive_metrics.csv` is used.  Hub rows whose
//! `target_hub` is blank are skipped, as are missing numeric cells (read as
//! `0`).
//!
//! # GeoJSON
//!
//! Each layer is a `FeatureCollection`; see [`crate::features`] for the
//! property schemas and leniency rules.  A feature that still cannot be read
//! (e.g. `properties` is not an object) is skipped with a warning; the rest
//! of the layer loads.
//!
//! Parse errors from the path-taking loaders are wrapped in
//! [`DataError::InFile`] so the message names the file.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::{debug, info, warn};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::features::{
    FeatureCollection, FeederRouteProps, HubDestinationProps, NeighborhoodProps, RailSegmentProps,
};
use crate::records::{ExecutiveMetrics, HubRollup};
use crate::snapshot::DatasetSnapshot;
use crate::{DataError, DataResult};

pub const EXECUTIVE_METRICS_FILE:   &str = "executive_metrics.csv";
pub const HUB_STATS_FILE:           &str = "hub_connectivity_stats.csv";
pub const HUBS_DESTINATIONS_FILE:   &str = "hubs_destinations.geojson";
pub const NEIGHBORHOOD_HUBS_FILE:   &str = "neighborhood_hubs.geojson";
pub const RESIDENTIAL_NODES_FILE:   &str = "residential_nodes.geojson";
pub const HEAVY_RAIL_BACKBONE_FILE: &str = "heavy_rail_backbone.geojson";
pub const FEEDER_ROUTES_FILE:       &str = "feeder_routes.geojson";

// ── Raw CSV row ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct HubStatsRecord {
    target_hub:                Option<String>,
    total_feeder_routes:       Option<u32>,
    total_population_served:   Option<f64>,
    avg_feeder_distance:       Option<f64>,
    estimated_daily_ridership: Option<f64>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load every file of a dataset directory into a [`DatasetSnapshot`].
pub fn load_snapshot(dir: &Path) -> DataResult<DatasetSnapshot> {
    let executive_metrics = load_executive_metrics(&dir.join(EXECUTIVE_METRICS_FILE))?;
    let hub_stats         = load_hub_stats(&dir.join(HUB_STATS_FILE))?;

    let hubs_destinations: FeatureCollection<HubDestinationProps> =
        load_collection(&dir.join(HUBS_DESTINATIONS_FILE))?;
    let neighborhood_hubs: FeatureCollection<NeighborhoodProps> =
        load_collection(&dir.join(NEIGHBORHOOD_HUBS_FILE))?;
    let residential_nodes: FeatureCollection<NeighborhoodProps> =
        load_collection(&dir.join(RESIDENTIAL_NODES_FILE))?;
    let heavy_rail_backbone: FeatureCollection<RailSegmentProps> =
        load_collection(&dir.join(HEAVY_RAIL_BACKBONE_FILE))?;
    let feeder_routes: FeatureCollection<FeederRouteProps> =
        load_collection(&dir.join(FEEDER_ROUTES_FILE))?;

    warn_untiered(RESIDENTIAL_NODES_FILE, residential_nodes.features.iter().map(|f| f.properties.tier));
    warn_untiered(FEEDER_ROUTES_FILE, feeder_routes.features.iter().map(|f| f.properties.tier));

    info!(
        "loaded dataset from {}: {} hubs, {} destinations, {} neighborhood hubs, \
         {} residential nodes, {} rail segments, {} feeder routes",
        dir.display(),
        hub_stats.len(),
        hubs_destinations.len(),
        neighborhood_hubs.len(),
        residential_nodes.len(),
        heavy_rail_backbone.len(),
        feeder_routes.len(),
    );

    Ok(DatasetSnapshot {
        executive_metrics,
        hub_stats,
        hubs_destinations,
        neighborhood_hubs,
        residential_nodes,
        heavy_rail_backbone,
        feeder_routes,
    })
}

/// Load the single-row executive metrics CSV.
pub fn load_executive_metrics(path: &Path) -> DataResult<ExecutiveMetrics> {
    load_executive_metrics_reader(open(path)?).map_err(|e| e.in_file(path))
}

/// Like [`load_executive_metrics`] but accepts any `Read` source.
pub fn load_executive_metrics_reader<R: Read>(reader: R) -> DataResult<ExecutiveMetrics> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    match csv_reader.deserialize::<ExecutiveMetrics>().next() {
        Some(row) => Ok(row?),
        None => Err(DataError::Empty(EXECUTIVE_METRICS_FILE)),
    }
}

/// Load the precomputed all-tiers hub rollups.
pub fn load_hub_stats(path: &Path) -> DataResult<Vec<HubRollup>> {
    load_hub_stats_reader(open(path)?).map_err(|e| e.in_file(path))
}

/// Like [`load_hub_stats`] but accepts any `Read` source.
pub fn load_hub_stats_reader<R: Read>(reader: R) -> DataResult<Vec<HubRollup>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut rollups = Vec::new();
    let mut skipped = 0usize;

    for result in csv_reader.deserialize::<HubStatsRecord>() {
        let row = result?;
        let hub = match row.target_hub.map(|s| s.trim().to_owned()) {
            Some(h) if !h.is_empty() => h,
            _ => {
                skipped += 1;
                continue;
            }
        };
        rollups.push(HubRollup {
            target_hub:                hub,
            total_feeder_routes:       row.total_feeder_routes.unwrap_or(0),
            total_population_served:   row.total_population_served.unwrap_or(0.0),
            avg_feeder_distance:       row.avg_feeder_distance.unwrap_or(0.0),
            estimated_daily_ridership: row.estimated_daily_ridership.unwrap_or(0.0),
        });
    }

    if skipped > 0 {
        warn!("{HUB_STATS_FILE}: skipped {skipped} row(s) with a blank target_hub");
    }
    Ok(rollups)
}

/// Load one GeoJSON `FeatureCollection` with properties of type `P`.
pub fn load_collection<P: DeserializeOwned>(path: &Path) -> DataResult<FeatureCollection<P>> {
    let reader = BufReader::new(open(path)?);
    parse_collection(reader, &path.display().to_string()).map_err(|e| e.in_file(path))
}

/// Like [`load_collection`] but accepts any `Read` source.
pub fn load_collection_reader<P: DeserializeOwned, R: Read>(
    reader: R,
) -> DataResult<FeatureCollection<P>> {
    parse_collection(reader, "GeoJSON input")
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Top level of a `FeatureCollection`, features still untyped.
#[derive(Deserialize)]
struct RawCollection {
    #[serde(default)]
    features: Vec<serde_json::Value>,
}

fn parse_collection<P: DeserializeOwned, R: Read>(
    reader: R,
    source: &str,
) -> DataResult<FeatureCollection<P>> {
    let raw: RawCollection = serde_json::from_reader(reader)?;
    let total = raw.features.len();
    let mut features = Vec::with_capacity(total);

    for (i, value) in raw.features.into_iter().enumerate() {
        match serde_json::from_value(value) {
            Ok(feature) => features.push(feature),
            Err(e) => debug!("{source}: feature {i} skipped: {e}"),
        }
    }

    let skipped = total - features.len();
    if skipped > 0 {
        warn!("{source}: skipped {skipped} of {total} malformed feature(s)");
    }
    Ok(FeatureCollection::new(features))
}

fn open(path: &Path) -> DataResult<File> {
    File::open(path).map_err(|source| DataError::Io { path: path.to_path_buf(), source })
}

fn warn_untiered(file: &str, tiers: impl Iterator<Item = Option<tn_core::Tier>>) {
    let untiered = tiers.filter(Option::is_none).count();
    if untiered > 0 {
        warn!("{file}: {untiered} feature(s) have a missing or unknown tier and match no tier filter");
    }
}
