//! Typed GeoJSON features for the five spatial layers.
//!
//! Only the parts of GeoJSON the exported layers use are modelled: `Point`,
//! `LineString` and `MultiLineString` geometries with 2-D `[lon, lat]`
//! positions.  Unknown members (`"type": "Feature"`, `bbox`, `crs`, …) are
//! ignored by serde.
//!
//! Property parsing never fails on a value it can fall back from:
//!
//! - a numeric property that is missing, `null`, or not a number reads as
//!   `0.0`; a string holding a finite number is accepted;
//! - a tier that is not exactly one of the three dataset labels reads as
//!   `None`, which no [`TierSelection`](tn_core::TierSelection) matches;
//! - a text property that is missing or not a string reads as `""`
//!   (numbers are rendered);
//! - a geometry of any other type, or one with malformed coordinates,
//!   reads as `None`.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use tn_core::{GeoPoint, Tier, polyline_length_km};

// ── Geometry ──────────────────────────────────────────────────────────────────

/// A GeoJSON geometry object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: [f64; 2] },
    LineString { coordinates: Vec<[f64; 2]> },
    MultiLineString { coordinates: Vec<Vec<[f64; 2]>> },
}

impl Geometry {
    /// Great-circle length of the line work in kilometres; `0.0` for points.
    pub fn length_km(&self) -> f64 {
        fn line_km(line: &[[f64; 2]]) -> f64 {
            let pts: Vec<GeoPoint> = line.iter().copied().map(GeoPoint::from_position).collect();
            polyline_length_km(&pts)
        }

        match self {
            Geometry::Point { .. } => 0.0,
            Geometry::LineString { coordinates } => line_km(coordinates),
            Geometry::MultiLineString { coordinates } => {
                coordinates.iter().map(|l| line_km(l)).sum()
            }
        }
    }
}

// ── Feature / collection ──────────────────────────────────────────────────────

/// A GeoJSON feature with typed properties `P`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature<P> {
    #[serde(default, deserialize_with = "lenient_geometry")]
    pub geometry:   Option<Geometry>,
    pub properties: P,
}

/// A GeoJSON `FeatureCollection`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection<P> {
    pub features: Vec<Feature<P>>,
}

impl<P> FeatureCollection<P> {
    pub fn new(features: Vec<Feature<P>>) -> Self {
        Self { features }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl<P> Default for FeatureCollection<P> {
    fn default() -> Self {
        Self { features: Vec::new() }
    }
}

// ── Layer properties ──────────────────────────────────────────────────────────

/// `hubs_destinations.geojson`: major destination hubs (points).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HubDestinationProps {
    #[serde(default, deserialize_with = "lenient_text")]
    pub hub_id: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name:   String,
    #[serde(rename = "type", default, deserialize_with = "lenient_text")]
    pub kind:   String,
}

/// `neighborhood_hubs.geojson` and `residential_nodes.geojson` (points).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeighborhoodProps {
    #[serde(default, deserialize_with = "lenient_text")]
    pub neighborhood: String,
    #[serde(default, deserialize_with = "lenient_tier")]
    pub tier:         Option<Tier>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub population:   f64,
}

/// `heavy_rail_backbone.geojson`: rail segments (lines).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RailSegmentProps {
    #[serde(default, deserialize_with = "lenient_number")]
    pub track_length_km: f64,
}

/// `feeder_routes.geojson`: one residential-area-to-hub edge (lines).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeederRouteProps {
    #[serde(default, deserialize_with = "lenient_text")]
    pub neighborhood:      String,
    #[serde(default, deserialize_with = "lenient_tier")]
    pub tier:              Option<Tier>,
    /// Routes with no usable hub name group under `""`.
    #[serde(default, deserialize_with = "lenient_text")]
    pub target_hub:        String,
    #[serde(default, deserialize_with = "lenient_number")]
    pub route_distance_km: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub population_weight: f64,
}

pub type HubDestination  = Feature<HubDestinationProps>;
pub type ResidentialNode = Feature<NeighborhoodProps>;
pub type RailSegment     = Feature<RailSegmentProps>;
pub type FeederRoute     = Feature<FeederRouteProps>;

impl FeederRoute {
    /// Geometry-less feeder route, mostly for tests and synthetic inputs.
    pub fn new(tier: Tier, target_hub: &str, route_distance_km: f64, population_weight: f64) -> Self {
        Feature {
            geometry:   None,
            properties: FeederRouteProps {
                neighborhood: String::new(),
                tier: Some(tier),
                target_hub: target_hub.to_owned(),
                route_distance_km,
                population_weight,
            },
        }
    }
}

// ── Lenient field parsers ─────────────────────────────────────────────────────

fn lenient_number<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    let n = match Value::deserialize(d)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    };
    Ok(n.unwrap_or(0.0))
}

fn lenient_tier<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Tier>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::String(label) => Tier::from_label(&label),
        _ => None,
    })
}

fn lenient_text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

fn lenient_geometry<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Geometry>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Null => None,
        v => serde_json::from_value(v).ok(),
    })
}
