//! Reference configuration: a tapered flying wing, its winglet, design
//! limits and a cruise operating point.
//!
//! These builders give examples, tests and quick studies a consistent
//! starting point. Values describe a 28 m span swept flying wing cruising at
//! Mach 0.75 and 11 km.
use crate::{
    aero::{errors::AeroResult, operation::OperationPoint},
    geometry::{
        errors::GeometryResult,
        section::{Point3, Section},
        wing::FlyingWing,
        winglet::{NUM_WINGLET_KEYS, WingletKey, WingletParameters},
    },
    optimization::design::PhysicalBounds,
};

const WING_AIRFOIL: &str = "naca4412";
const WINGLET_AIRFOIL: &str = "naca0012";

/// Root, kink and tip sections of the reference wing (right half).
pub fn base_sections() -> Vec<Section> {
    vec![
        Section::new(5.6, Point3::new(0.0, 0.0, 0.0), 0.0, WING_AIRFOIL),
        Section::new(3.6, Point3::new(2.34, 4.6, 0.2), -2.0, WING_AIRFOIL),
        Section::new(1.26, Point3::new(5.5, 14.04, 0.61), -5.0, WING_AIRFOIL),
    ]
}

/// Reference winglet: 5 % of semi-span, 45° cant, 38° sweep.
///
/// With `twist_zero` both twists are 0°, otherwise 1°. A zero twist cannot
/// carry explicit bounds, so studies that bound every key use
/// `twist_zero = false`.
pub fn base_winglet_parameters(twist_zero: bool) -> WingletParameters {
    let twist = if twist_zero { 0.0 } else { 1.0 };
    let mut values = [0.0; NUM_WINGLET_KEYS];
    values[WingletKey::Span.index()] = 0.05;
    values[WingletKey::RootChord.index()] = 0.65;
    values[WingletKey::TaperRatio.index()] = 0.32;
    values[WingletKey::SweepAngle.index()] = 38.0;
    values[WingletKey::CantAngle.index()] = 45.0;
    values[WingletKey::TwistRoot.index()] = twist;
    values[WingletKey::TwistTip.index()] = twist;
    WingletParameters::from_values(values, WINGLET_AIRFOIL)
}

/// Physical lower limits for every winglet key.
pub fn base_lower_bounds() -> PhysicalBounds {
    PhysicalBounds::from([
        (WingletKey::Span, 0.02),
        (WingletKey::RootChord, 0.4),
        (WingletKey::TaperRatio, 0.3),
        (WingletKey::SweepAngle, 0.0),
        (WingletKey::CantAngle, 15.0),
        (WingletKey::TwistRoot, -5.0),
        (WingletKey::TwistTip, -5.0),
    ])
}

/// Physical upper limits for every winglet key.
pub fn base_upper_bounds() -> PhysicalBounds {
    PhysicalBounds::from([
        (WingletKey::Span, 0.1),
        (WingletKey::RootChord, 1.0),
        (WingletKey::TaperRatio, 1.0),
        (WingletKey::SweepAngle, 50.0),
        (WingletKey::CantAngle, 80.0),
        (WingletKey::TwistRoot, 5.0),
        (WingletKey::TwistTip, 5.0),
    ])
}

/// Cruise at 11 000 m, Mach 0.75, CL 0.45.
pub fn base_operation_point() -> AeroResult<OperationPoint> {
    OperationPoint::new(11_000.0, 0.75, 0.45)
}

/// Reference wing without winglet.
pub fn base_wing() -> GeometryResult<FlyingWing> {
    FlyingWing::new(base_sections(), None)
}

/// Reference wing carrying the reference winglet.
pub fn target_wing(twist_zero: bool) -> GeometryResult<FlyingWing> {
    FlyingWing::with_winglet(base_sections(), base_winglet_parameters(twist_zero))
}
