//! Errors for geometry construction (sections, planforms, winglet surfaces).
//!
//! [`GeometryError`] covers everything that can go wrong while turning raw
//! section data and winglet parameters into a [`FlyingWing`]. Values that fail
//! validation are echoed back in the variant so callers can report the exact
//! offending entry.
//!
//! ## Conventions
//! - **Indices are 0-based** and refer to the section order *as supplied*
//!   (before the planform sorts by spanwise position).
//! - Winglet parameter errors name the offending [`WingletKey`].
//!
//! [`FlyingWing`]: crate::geometry::wing::FlyingWing
use crate::geometry::winglet::WingletKey;

/// Result alias for geometry construction paths.
pub type GeometryResult<T> = Result<T, GeometryError>;

#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    // ---- Sections / planform ----
    /// A planform needs at least two sections.
    TooFewSections { found: usize, required: usize },

    /// Section chord must be finite and > 0.
    InvalidChord { index: usize, value: f64 },

    /// Leading-edge coordinates and twist must be finite.
    NonFiniteSection { index: usize },

    /// Sections produce no lifting area (all at the same spanwise station).
    DegeneratePlanform { area: f64 },

    // ---- Winglet ----
    /// A winglet was requested but no parameters are attached to the wing.
    MissingWingletParameters,

    /// A winglet parameter is outside its physical domain.
    InvalidWingletParameter { key: WingletKey, value: f64, reason: &'static str },

    /// Key name does not match any winglet parameter.
    UnknownWingletKey { name: String },

    /// Key index is outside `0..NUM_WINGLET_KEYS`.
    WingletKeyIndexOutOfRange { index: usize },
}

impl std::error::Error for GeometryError {}

impl std::fmt::Display for GeometryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Sections / planform ----
            GeometryError::TooFewSections { found, required } => {
                write!(f, "Planform needs at least {required} sections, found {found}")
            }
            GeometryError::InvalidChord { index, value } => {
                write!(f, "Invalid chord at section {index}: {value}, must be finite and > 0")
            }
            GeometryError::NonFiniteSection { index } => {
                write!(f, "Section {index} has non-finite leading edge or twist")
            }
            GeometryError::DegeneratePlanform { area } => {
                write!(f, "Degenerate planform: reference area {area} must be > 0")
            }

            // ---- Winglet ----
            GeometryError::MissingWingletParameters => {
                write!(f, "No winglet parameters attached to the wing")
            }
            GeometryError::InvalidWingletParameter { key, value, reason } => {
                write!(f, "Invalid winglet parameter '{key}' = {value}: {reason}")
            }
            GeometryError::UnknownWingletKey { name } => {
                write!(f, "Unknown winglet parameter name '{name}'")
            }
            GeometryError::WingletKeyIndexOutOfRange { index } => {
                write!(f, "Winglet parameter index {index} out of range")
            }
        }
    }
}
