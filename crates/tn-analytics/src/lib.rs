//! `tn-analytics` — the computations behind the hub-analytics and impact
//! simulator views.
//!
//! Every function here is pure: it reads the snapshot (or plain numbers) and
//! returns a fresh value.  Nothing is cached, so callers simply recompute on
//! each filter toggle or slider change and drop superseded results.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`hub`]       | `aggregate`, `sort_by_ridership`, `HubSummary`             |
//! | [`impact`]    | `compute_weighted_distance`, `compute_time_savings`, `ImpactReport` |
//! | [`simulator`] | `SimulatorInputs` (bounded slider values), `SimulatorError` |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                    |
//! |-----------|-----------------------------------------------------------|
//! | `fx-hash` | Use `rustc-hash` for the per-hub accumulator index.       |

pub mod hub;
pub mod impact;
pub mod simulator;

#[cfg(test)]
mod tests;

pub use hub::{HubSummary, RIDERSHIP_CONVERSION, aggregate, sort_by_ridership};
pub use impact::{
    ImpactReport, TIER2_REPRESENTATIVE_KM, TRIPS_PER_DAY, TimeSavings, WEEKS_PER_MONTH,
    WEEKS_PER_YEAR, WORKING_DAYS_PER_WEEK, compute_time_savings, compute_total_daily_passengers,
    compute_weighted_distance,
};
pub use simulator::{SimulatorError, SimulatorInputs, SimulatorResult, SliderBounds};
