//! Bounded inputs for the impact simulator.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use tn_core::{Tier, TierSelection};

#[derive(Debug, Error, PartialEq)]
pub enum SimulatorError {
    #[error("{field} = {value} is outside the allowed range {min}..={max}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min:   f64,
        max:   f64,
    },
}

pub type SimulatorResult<T> = Result<T, SimulatorError>;

/// Inclusive range for one slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderBounds {
    pub field: &'static str,
    pub min:   f64,
    pub max:   f64,
}

impl SliderBounds {
    pub const ADOPTION_RATE_PERCENT: SliderBounds =
        SliderBounds { field: "adoption_rate_percent", min: 10.0, max: 100.0 };
    pub const MATATU_SPEED_KMH: SliderBounds =
        SliderBounds { field: "matatu_speed_kmh", min: 5.0, max: 30.0 };
    pub const TRAIN_SPEED_KMH: SliderBounds =
        SliderBounds { field: "train_speed_kmh", min: 20.0, max: 300.0 };

    pub fn range(self) -> RangeInclusive<f64> {
        self.min..=self.max
    }

    /// `value` if within bounds, else [`SimulatorError::OutOfRange`].
    /// NaN is always out of range.
    pub fn check(self, value: f64) -> SimulatorResult<f64> {
        if self.range().contains(&value) {
            Ok(value)
        } else {
            Err(SimulatorError::OutOfRange { field: self.field, value, min: self.min, max: self.max })
        }
    }

    /// `value` clamped into bounds.  NaN maps to `min`.
    pub fn clamp(self, value: f64) -> f64 {
        if value.is_nan() { self.min } else { value.clamp(self.min, self.max) }
    }
}

/// Slider and tier-filter state of the impact simulator.
///
/// `Default` matches the initial dashboard state: 15 % adoption, 15 km/h
/// matatu, 40 km/h train, tier 3 only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulatorInputs {
    pub adoption_rate_percent: f64,
    pub matatu_speed_kmh:      f64,
    pub train_speed_kmh:       f64,
    pub tiers:                 TierSelection,
}

impl Default for SimulatorInputs {
    fn default() -> Self {
        Self {
            adoption_rate_percent: 15.0,
            matatu_speed_kmh:      15.0,
            train_speed_kmh:       40.0,
            tiers:                 TierSelection::only(Tier::MiddleIncome),
        }
    }
}

impl SimulatorInputs {
    /// Validate every slider against its bounds.
    pub fn new(
        adoption_rate_percent: f64,
        matatu_speed_kmh:      f64,
        train_speed_kmh:       f64,
        tiers:                 TierSelection,
    ) -> SimulatorResult<Self> {
        Ok(Self {
            adoption_rate_percent: SliderBounds::ADOPTION_RATE_PERCENT.check(adoption_rate_percent)?,
            matatu_speed_kmh:      SliderBounds::MATATU_SPEED_KMH.check(matatu_speed_kmh)?,
            train_speed_kmh:       SliderBounds::TRAIN_SPEED_KMH.check(train_speed_kmh)?,
            tiers,
        })
    }

    /// Like [`new`](Self::new) but clamps out-of-range values instead of
    /// rejecting them.
    pub fn clamped(
        adoption_rate_percent: f64,
        matatu_speed_kmh:      f64,
        train_speed_kmh:       f64,
        tiers:                 TierSelection,
    ) -> Self {
        Self {
            adoption_rate_percent: SliderBounds::ADOPTION_RATE_PERCENT.clamp(adoption_rate_percent),
            matatu_speed_kmh:      SliderBounds::MATATU_SPEED_KMH.clamp(matatu_speed_kmh),
            train_speed_kmh:       SliderBounds::TRAIN_SPEED_KMH.clamp(train_speed_kmh),
            tiers,
        }
    }

    /// Copy with `tier` toggled in the simulator's tier filter.
    #[must_use]
    pub fn toggle_tier(self, tier: Tier) -> Self {
        Self { tiers: self.tiers.toggled(tier), ..self }
    }
}
