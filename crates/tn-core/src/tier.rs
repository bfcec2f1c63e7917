//! Commuter tiers and tier selections.
//!
//! The dataset labels every residential node and feeder route with one of
//! three commuter tiers.  Exported files carry the tier as a string; it is
//! parsed once at the loader boundary so the rest of the workspace matches
//! on [`Tier`] exhaustively.
//!
//! [`TierSelection`] is a three-bit set.  It is `Copy` and every "mutation"
//! (`with`, `without`, `toggled`) returns a new value, so an interactive
//! front end owns the only mutable copy and analytics functions receive a
//! plain value.

use std::fmt;
use std::str::FromStr;

use crate::{TnError, TnResult};

// ── Tier ──────────────────────────────────────────────────────────────────────

/// Commuter income/employment classification.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tier {
    #[cfg_attr(feature = "serde", serde(rename = "Tier_1_WhiteCollar"))]
    WhiteCollar,
    #[cfg_attr(feature = "serde", serde(rename = "Tier_2_Informal"))]
    Informal,
    #[cfg_attr(feature = "serde", serde(rename = "Tier_3_MiddleIncome"))]
    MiddleIncome,
}

impl Tier {
    /// Every tier, in tier-number order.
    pub const ALL: [Tier; 3] = [Tier::WhiteCollar, Tier::Informal, Tier::MiddleIncome];

    /// Label used in the exported dataset files.
    pub fn as_str(self) -> &'static str {
        match self {
            Tier::WhiteCollar  => "Tier_1_WhiteCollar",
            Tier::Informal     => "Tier_2_Informal",
            Tier::MiddleIncome => "Tier_3_MiddleIncome",
        }
    }

    /// 1, 2 or 3.
    pub fn number(self) -> u8 {
        match self {
            Tier::WhiteCollar  => 1,
            Tier::Informal     => 2,
            Tier::MiddleIncome => 3,
        }
    }

    /// Exact dataset label only: no trimming, no case folding, no short forms.
    pub fn from_label(label: &str) -> Option<Tier> {
        match label {
            "Tier_1_WhiteCollar"  => Some(Tier::WhiteCollar),
            "Tier_2_Informal"     => Some(Tier::Informal),
            "Tier_3_MiddleIncome" => Some(Tier::MiddleIncome),
            _ => None,
        }
    }

    #[inline]
    fn bit(self) -> u8 {
        1 << (self.number() - 1)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = TnError;

    /// Accepts the dataset label (`Tier_1_WhiteCollar`) or the short form
    /// (`T1`, `1`), case-insensitively for the short form.  Meant for
    /// command-line input; dataset files go through [`Tier::from_label`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(tier) = Tier::from_label(s) {
            return Ok(tier);
        }
        match s.to_ascii_lowercase().as_str() {
            "t1" | "1" => Ok(Tier::WhiteCollar),
            "t2" | "2" => Ok(Tier::Informal),
            "t3" | "3" => Ok(Tier::MiddleIncome),
            _ => Err(TnError::UnknownTier(s.to_owned())),
        }
    }
}

// ── TierSelection ─────────────────────────────────────────────────────────────

/// A set of zero to three tiers.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "Vec<Tier>", from = "Vec<Tier>")
)]
pub struct TierSelection(u8);

impl TierSelection {
    const FULL: u8 = 0b111;

    /// The empty selection.
    #[inline]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// All three tiers.
    #[inline]
    pub const fn all() -> Self {
        Self(Self::FULL)
    }

    /// A selection holding exactly `tier`.
    #[inline]
    pub fn only(tier: Tier) -> Self {
        Self(tier.bit())
    }

    #[inline]
    pub fn contains(self, tier: Tier) -> bool {
        self.0 & tier.bit() != 0
    }

    /// `true` if `tier` is `Some` and selected.  Features whose tier label
    /// did not parse carry `None` and never match.
    #[inline]
    pub fn matches(self, tier: Option<Tier>) -> bool {
        tier.is_some_and(|t| self.contains(t))
    }

    #[must_use]
    pub fn with(self, tier: Tier) -> Self {
        Self(self.0 | tier.bit())
    }

    #[must_use]
    pub fn without(self, tier: Tier) -> Self {
        Self(self.0 & !tier.bit())
    }

    /// Add `tier` if absent, remove it if present.
    #[must_use]
    pub fn toggled(self, tier: Tier) -> Self {
        Self(self.0 ^ tier.bit())
    }

    #[inline]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// `true` when every tier is selected.
    #[inline]
    pub fn is_all(self) -> bool {
        self.0 == Self::FULL
    }

    /// Selected tiers in tier-number order.
    pub fn iter(self) -> impl Iterator<Item = Tier> {
        Tier::ALL.into_iter().filter(move |t| self.contains(*t))
    }

    /// Parse a comma-separated list such as `"T1,Tier_3_MiddleIncome"`.
    ///
    /// `"all"` selects every tier; `""` and `"none"` select nothing.
    pub fn parse_list(s: &str) -> TnResult<Self> {
        match s.trim() {
            "" | "none" => return Ok(Self::empty()),
            "all" => return Ok(Self::all()),
            _ => {}
        }
        s.split(',')
            .filter(|tok| !tok.trim().is_empty())
            .map(Tier::from_str)
            .collect()
    }
}

impl FromIterator<Tier> for TierSelection {
    fn from_iter<I: IntoIterator<Item = Tier>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), Self::with)
    }
}

impl From<Vec<Tier>> for TierSelection {
    fn from(v: Vec<Tier>) -> Self {
        v.into_iter().collect()
    }
}

impl From<TierSelection> for Vec<Tier> {
    fn from(sel: TierSelection) -> Self {
        sel.iter().collect()
    }
}

impl fmt::Debug for TierSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for TierSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let mut first = true;
        for tier in self.iter() {
            if !first {
                f.write_str(",")?;
            }
            write!(f, "T{}", tier.number())?;
            first = false;
        }
        Ok(())
    }
}
