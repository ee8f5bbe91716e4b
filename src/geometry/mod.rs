//! geometry — wing planform, winglet parametrization and surfaces.
//!
//! Purpose
//! -------
//! Own the geometric description the aerodynamic layer evaluates: a
//! symmetric main wing built from spanwise sections and an optional winglet
//! pair described by seven numeric parameters.
//!
//! Key behaviors
//! -------------
//! - [`section`]: [`Point3`], [`Section`], [`Planform`] and
//!   [`build_planform`] (validation plus spanwise sorting), with the integral
//!   quantities span, reference area, aspect ratio and mean aerodynamic chord.
//! - [`winglet`]: the [`WingletKey`] ordering contract, the
//!   [`WingletParameters`] container and [`build_winglet`].
//! - [`wing`]: [`FlyingWing`], which ties a planform to optional winglet
//!   parameters and rebuilds the surface on explicit request only.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every constructed [`Planform`] has at least two validated sections and a
//!   strictly positive reference area.
//! - A built [`WingletSurface`] is immutable; changing parameters means
//!   building a fresh one.
//!
//! Downstream usage
//! ----------------
//! - The optimizer rebuilds the target wing's winglet through
//!   [`FlyingWing::rebuild_winglet`] for each trial design.
//! - Aerodynamic adapters read planform and winglet data through the
//!   accessors on [`FlyingWing`].
//!
//! Testing notes
//! -------------
//! - Unit tests use the reference three-section wing from
//!   [`crate::utils::base_sections`].

pub mod errors;
pub mod section;
pub mod wing;
pub mod winglet;

pub use self::errors::{GeometryError, GeometryResult};
pub use self::section::{Planform, Point3, Section, build_planform};
pub use self::wing::FlyingWing;
pub use self::winglet::{
    NUM_WINGLET_KEYS, WingletKey, WingletParameters, WingletSurface, build_winglet,
};
