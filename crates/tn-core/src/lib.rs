//! `tn-core` — foundational types for the `transit_net` analytics workspace.
//!
//! This crate is a dependency of every other `tn-*` crate.  It has no
//! `tn-*` dependencies and only `thiserror` (plus optional `serde`) as
//! external ones.
//!
//! # What lives here
//!
//! | Module    | Contents                                             |
//! |-----------|------------------------------------------------------|
//! | [`tier`]  | `Tier` enum, `TierSelection` set                     |
//! | [`geo`]   | `GeoPoint`, haversine distance, polyline length      |
//! | [`error`] | `TnError`, `TnResult`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod tier;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{TnError, TnResult};
pub use geo::{GeoPoint, polyline_length_km};
pub use tier::{Tier, TierSelection};
