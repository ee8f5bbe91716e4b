//! geometry::winglet — winglet parameter keys, parameter sets and surfaces.
//!
//! Purpose
//! -------
//! Define the closed set of numeric winglet parameters ([`WingletKey`]), the
//! parameter container used throughout the optimizer
//! ([`WingletParameters`]), and the immutable surface built from it
//! ([`WingletSurface`] via [`build_winglet`]).
//!
//! Key behaviors
//! -------------
//! - [`WingletKey`] carries a fixed ordering contract: the discriminant is the
//!   position of the key inside design vectors, bounds and parameter arrays.
//! - [`WingletParameters`] is never mutated in place; [`WingletParameters::with_value`]
//!   and [`WingletParameters::from_values`] produce fresh instances.
//! - [`build_winglet`] attaches the winglet root to the wing tip with matching
//!   trailing edges and places the tip along the swept/canted direction.
//!
//! Conventions
//! -----------
//! - `Span` is a fraction of the wing semi-span, `RootChord` a fraction of the
//!   wing tip chord; `TaperRatio` is tip/root chord of the winglet.
//! - `CantAngle` is measured from the vertical: 0° is an upright winglet,
//!   90° lies in the wing plane. `SweepAngle` tilts the leading edge aft.
//! - All angles are in degrees.
use crate::geometry::{
    errors::{GeometryError, GeometryResult},
    section::{Planform, Point3, Section},
};
use serde::{Deserialize, Serialize};
use std::{fmt, ops::Index, str::FromStr};

/// Number of numeric winglet parameters.
pub const NUM_WINGLET_KEYS: usize = 7;

/// Numeric winglet parameter. The discriminant is the vector index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WingletKey {
    Span = 0,
    RootChord = 1,
    TaperRatio = 2,
    SweepAngle = 3,
    CantAngle = 4,
    TwistRoot = 5,
    TwistTip = 6,
}

impl WingletKey {
    /// All keys in vector order.
    pub const ALL: [WingletKey; NUM_WINGLET_KEYS] = [
        WingletKey::Span,
        WingletKey::RootChord,
        WingletKey::TaperRatio,
        WingletKey::SweepAngle,
        WingletKey::CantAngle,
        WingletKey::TwistRoot,
        WingletKey::TwistTip,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> GeometryResult<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(GeometryError::WingletKeyIndexOutOfRange { index })
    }

    /// Canonical parameter name.
    pub const fn name(self) -> &'static str {
        match self {
            WingletKey::Span => "span",
            WingletKey::RootChord => "rootChord",
            WingletKey::TaperRatio => "taperRatio",
            WingletKey::SweepAngle => "sweepAngle",
            WingletKey::CantAngle => "cantAngle",
            WingletKey::TwistRoot => "twistRoot",
            WingletKey::TwistTip => "twistTip",
        }
    }
}

impl fmt::Display for WingletKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WingletKey {
    type Err = GeometryError;

    /// Parse a key from its canonical name (case-insensitive) or its index.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(index) = trimmed.parse::<usize>() {
            return Self::from_index(index);
        }
        Self::ALL
            .iter()
            .copied()
            .find(|key| key.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| GeometryError::UnknownWingletKey { name: s.to_string() })
    }
}

/// Physical winglet parameters indexed by [`WingletKey`], plus the airfoil.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WingletParameters {
    values: [f64; NUM_WINGLET_KEYS],
    airfoil: String,
}

impl WingletParameters {
    /// Build from values in [`WingletKey::ALL`] order.
    pub fn from_values(values: [f64; NUM_WINGLET_KEYS], airfoil: impl Into<String>) -> Self {
        Self { values, airfoil: airfoil.into() }
    }

    pub fn values(&self) -> &[f64; NUM_WINGLET_KEYS] {
        &self.values
    }

    pub fn get(&self, key: WingletKey) -> f64 {
        self.values[key.index()]
    }

    pub fn airfoil(&self) -> &str {
        &self.airfoil
    }

    /// Copy with one parameter replaced.
    pub fn with_value(&self, key: WingletKey, value: f64) -> Self {
        let mut values = self.values;
        values[key.index()] = value;
        Self { values, airfoil: self.airfoil.clone() }
    }

    pub fn iter(&self) -> impl Iterator<Item = (WingletKey, f64)> + '_ {
        WingletKey::ALL.iter().map(move |&key| (key, self.get(key)))
    }

    /// Check every value lies in its physical domain.
    ///
    /// - all values finite;
    /// - span fraction, root chord fraction and taper ratio strictly positive;
    /// - sweep and cant strictly inside (-90°, 90°) and [-180°, 180°]
    ///   respectively.
    pub fn validate(&self) -> GeometryResult<()> {
        for (key, value) in self.iter() {
            if !value.is_finite() {
                return Err(GeometryError::InvalidWingletParameter {
                    key,
                    value,
                    reason: "Value must be finite.",
                });
            }
        }
        for key in [WingletKey::Span, WingletKey::RootChord, WingletKey::TaperRatio] {
            let value = self.get(key);
            if value <= 0.0 {
                return Err(GeometryError::InvalidWingletParameter {
                    key,
                    value,
                    reason: "Value must be strictly positive.",
                });
            }
        }
        let sweep = self.get(WingletKey::SweepAngle);
        if sweep.abs() >= 90.0 {
            return Err(GeometryError::InvalidWingletParameter {
                key: WingletKey::SweepAngle,
                value: sweep,
                reason: "Sweep must lie strictly between -90 and 90 degrees.",
            });
        }
        let cant = self.get(WingletKey::CantAngle);
        if cant.abs() > 180.0 {
            return Err(GeometryError::InvalidWingletParameter {
                key: WingletKey::CantAngle,
                value: cant,
                reason: "Cant must lie between -180 and 180 degrees.",
            });
        }
        Ok(())
    }
}

impl Index<WingletKey> for WingletParameters {
    type Output = f64;

    fn index(&self, key: WingletKey) -> &f64 {
        &self.values[key.index()]
    }
}

/// Built winglet pair: right-hand root/tip sections and their mirror images.
#[derive(Debug, Clone, PartialEq)]
pub struct WingletSurface {
    root: Section,
    tip: Section,
    left_root: Section,
    left_tip: Section,
}

impl WingletSurface {
    pub fn root(&self) -> &Section {
        &self.root
    }

    pub fn tip(&self) -> &Section {
        &self.tip
    }

    pub fn left_root(&self) -> &Section {
        &self.left_root
    }

    pub fn left_tip(&self) -> &Section {
        &self.left_tip
    }

    /// Leading-edge length from root to tip.
    pub fn length(&self) -> f64 {
        (self.tip.leading_edge - self.root.leading_edge).norm()
    }

    /// Vertical rise of the tip above the root.
    pub fn height(&self) -> f64 {
        self.tip.leading_edge.z - self.root.leading_edge.z
    }

    /// Outboard extension of the tip beyond the root.
    pub fn lateral_extent(&self) -> f64 {
        self.tip.leading_edge.y - self.root.leading_edge.y
    }

    /// Wetted planform area of one winglet.
    pub fn planform_area(&self) -> f64 {
        let lateral = self.lateral_extent();
        let height = self.height();
        0.5 * (self.root.chord + self.tip.chord) * (lateral * lateral + height * height).sqrt()
    }

    /// Area of one winglet projected on the wing plane.
    pub fn projected_area(&self) -> f64 {
        0.5 * (self.root.chord + self.tip.chord) * self.lateral_extent().abs()
    }

    /// Mean streamwise position of the winglet quarter-chord line.
    pub fn quarter_chord_x(&self) -> f64 {
        0.5 * (self.root.quarter_chord().x + self.tip.quarter_chord().x)
    }

    pub fn mean_twist(&self) -> f64 {
        0.5 * (self.root.twist + self.tip.twist)
    }
}

/// Build the winglet pair described by `parameters` on `planform`'s tip.
///
/// Construction:
/// - length `l = span · semi_span`;
/// - root chord `c_r = rootChord · tip_chord`, tip chord `c_t = c_r · taper`;
/// - root leading edge at the wing tip leading edge shifted aft by
///   `tip_chord − c_r` so both trailing edges coincide;
/// - tip leading edge at `root + l·(sin Λ, cos Λ·sin Γ, cos Λ·cos Γ)`.
///
/// # Errors
/// Returns [`GeometryError::InvalidWingletParameter`] when `parameters` fail
/// [`WingletParameters::validate`].
pub fn build_winglet(
    parameters: &WingletParameters, planform: &Planform,
) -> GeometryResult<WingletSurface> {
    parameters.validate()?;
    let wing_tip = planform.tip();
    let length = parameters[WingletKey::Span] * planform.semi_span();
    let root_chord = parameters[WingletKey::RootChord] * wing_tip.chord;
    let tip_chord = root_chord * parameters[WingletKey::TaperRatio];
    let sweep = parameters[WingletKey::SweepAngle].to_radians();
    let cant = parameters[WingletKey::CantAngle].to_radians();

    let root_le = wing_tip.leading_edge + Point3::new(wing_tip.chord - root_chord, 0.0, 0.0);
    let direction =
        Point3::new(sweep.sin(), sweep.cos() * cant.sin(), sweep.cos() * cant.cos());
    let tip_le = root_le + direction * length;

    let airfoil = parameters.airfoil();
    let root = Section::new(root_chord, root_le, parameters[WingletKey::TwistRoot], airfoil);
    let tip = Section::new(tip_chord, tip_le, parameters[WingletKey::TwistTip], airfoil);
    Ok(WingletSurface { left_root: root.mirrored(), left_tip: tip.mirrored(), root, tip })
}
