//! `tn-data` — the immutable dataset snapshot and its loader.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`records`]  | `ExecutiveMetrics`, `HubRollup` (CSV rows)                |
//! | [`features`] | `Feature<P>`, `FeatureCollection<P>`, `Geometry`, layer properties |
//! | [`loader`]   | `load_snapshot`, per-file `load_*` / `*_reader` functions |
//! | [`snapshot`] | `DatasetSnapshot`, `SpatialView`, `SpatialLayerStats`     |
//! | [`error`]    | `DataError`, `DataResult<T>`                              |
//!
//! # Directory layout
//!
//! ```text
//! web_exports/
//!   executive_metrics.csv
//!   hub_connectivity_stats.csv
//!   hubs_destinations.geojson
//!   neighborhood_hubs.geojson
//!   residential_nodes.geojson
//!   heavy_rail_backbone.geojson
//!   feeder_routes.geojson
//! ```
//!
//! The snapshot is loaded once and never mutated afterwards.

pub mod error;
pub mod features;
pub mod loader;
pub mod records;
pub mod snapshot;


pub use error::{DataError, DataResult};
pub use features::{
    Feature, FeatureCollection, FeederRoute, FeederRouteProps, Geometry, HubDestination,
    HubDestinationProps, NeighborhoodProps, RailSegment, RailSegmentProps, ResidentialNode,
};
pub use loader::{
    load_collection, load_collection_reader, load_executive_metrics,
    load_executive_metrics_reader, load_hub_stats, load_hub_stats_reader, load_snapshot,
};
pub use records::{ExecutiveMetrics, HubRollup};
pub use snapshot::{DatasetSnapshot, SpatialLayerStats, SpatialView};
