//! The in-memory dataset snapshot and tier-filtered spatial views.

use tn_core::TierSelection;

use crate::features::{
    FeatureCollection, FeederRoute, FeederRouteProps, HubDestinationProps, NeighborhoodProps,
    RailSegmentProps, ResidentialNode,
};
use crate::records::{ExecutiveMetrics, HubRollup};

/// Everything the dashboard reads, loaded once and never mutated.
///
/// `DatasetSnapshot` holds only owned data, so it is `Send + Sync` and can be
/// shared behind an `Arc` by any number of readers.
#[derive(Debug, Clone)]
pub struct DatasetSnapshot {
    pub executive_metrics:   ExecutiveMetrics,
    /// Hub rollups precomputed upstream with every tier included.
    pub hub_stats:           Vec<HubRollup>,
    pub hubs_destinations:   FeatureCollection<HubDestinationProps>,
    pub neighborhood_hubs:   FeatureCollection<NeighborhoodProps>,
    pub residential_nodes:   FeatureCollection<NeighborhoodProps>,
    pub heavy_rail_backbone: FeatureCollection<RailSegmentProps>,
    pub feeder_routes:       FeatureCollection<FeederRouteProps>,
}

/// Residential nodes and feeder routes visible under one tier selection.
///
/// Borrows from the snapshot; the map layer draws these plus the unfiltered
/// hub and rail layers.
#[derive(Debug, Clone)]
pub struct SpatialView<'a> {
    pub residential_nodes: Vec<&'a ResidentialNode>,
    pub feeder_routes:     Vec<&'a FeederRoute>,
}

/// Feature counts for the map legend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialLayerStats {
    pub hub_destinations:    usize,
    pub neighborhood_hubs:   usize,
    pub residential_nodes:   usize,
    pub feeder_routes:       usize,
    pub rail_segments:       usize,
    /// Sum of `track_length_km` over the rail backbone.
    pub rail_track_km:       f64,
    /// Great-circle length of the rail backbone geometry.
    pub rail_geometry_km:    f64,
    /// Residential population under the selection.
    pub residential_population: f64,
}

impl DatasetSnapshot {
    /// Residential nodes and feeder routes whose tier is in `selection`.
    ///
    /// An empty selection yields an empty view; features with no recognised
    /// tier never appear.
    pub fn filter_by_tiers(&self, selection: TierSelection) -> SpatialView<'_> {
        if selection.is_empty() {
            return SpatialView { residential_nodes: Vec::new(), feeder_routes: Vec::new() };
        }
        SpatialView {
            residential_nodes: self
                .residential_nodes
                .features
                .iter()
                .filter(|f| selection.matches(f.properties.tier))
                .collect(),
            feeder_routes: self
                .feeder_routes
                .features
                .iter()
                .filter(|f| selection.matches(f.properties.tier))
                .collect(),
        }
    }

    /// Layer counts under `selection`.  Hub, neighborhood-hub and rail layers
    /// are not tier-filtered.
    pub fn layer_stats(&self, selection: TierSelection) -> SpatialLayerStats {
        let view = self.filter_by_tiers(selection);
        let rail = &self.heavy_rail_backbone.features;
        SpatialLayerStats {
            hub_destinations:  self.hubs_destinations.len(),
            neighborhood_hubs: self.neighborhood_hubs.len(),
            residential_nodes: view.residential_nodes.len(),
            feeder_routes:     view.feeder_routes.len(),
            rail_segments:     rail.len(),
            rail_track_km:     rail.iter().map(|f| f.properties.track_length_km).sum(),
            rail_geometry_km:  rail
                .iter()
                .filter_map(|f| f.geometry.as_ref())
                .map(|g| g.length_km())
                .sum(),
            residential_population: view
                .residential_nodes
                .iter()
                .map(|f| f.properties.population)
                .sum(),
        }
    }
}
