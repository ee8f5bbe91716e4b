//! geometry::section — wing sections and the planform built from them.
//!
//! Purpose
//! -------
//! Describe the main lifting surface as an ordered list of spanwise
//! [`Section`]s and derive the integral quantities the aerodynamic layer
//! needs (span, reference area, aspect ratio, mean aerodynamic chord).
//!
//! Key behaviors
//! -------------
//! - [`build_planform`] validates raw sections and sorts them by ascending
//!   leading-edge `y`, so callers may supply them in any order.
//! - Integral quantities treat the wing as symmetric about `y = 0`: the
//!   sections describe the right half, and span/area are doubled.
//! - Panels between consecutive sections are straight-tapered trapezoids.
//!
//! Invariants & assumptions
//! ------------------------
//! - A [`Planform`] always holds at least [`MIN_SECTIONS`] sections with
//!   finite coordinates and strictly positive chords.
//! - The reference area of a built planform is strictly positive.
//!
//! Conventions
//! -----------
//! - `x` points aft, `y` spanwise to the right, `z` up. Lengths in metres,
//!   twist in degrees.
use crate::geometry::errors::{GeometryError, GeometryResult};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// Minimum number of sections a planform needs.
pub const MIN_SECTIONS: usize = 2;

/// 3D point / offset in the body frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Reflect across the `y = 0` symmetry plane.
    pub fn mirror_y(self) -> Self {
        Self { y: -self.y, ..self }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

impl Add for Point3 {
    type Output = Point3;

    fn add(self, rhs: Point3) -> Point3 {
        Point3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Point3 {
    type Output = Point3;

    fn sub(self, rhs: Point3) -> Point3 {
        Point3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Point3 {
    type Output = Point3;

    fn mul(self, rhs: f64) -> Point3 {
        Point3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

/// A single airfoil station: chord, leading-edge position, twist and
/// airfoil identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub chord: f64,
    pub leading_edge: Point3,
    /// Twist in degrees, positive nose-up.
    pub twist: f64,
    pub airfoil: String,
}

impl Section {
    pub fn new(chord: f64, leading_edge: Point3, twist: f64, airfoil: impl Into<String>) -> Self {
        Self { chord, leading_edge, twist, airfoil: airfoil.into() }
    }

    /// Quarter-chord point (aerodynamic centre of a thin section).
    pub fn quarter_chord(&self) -> Point3 {
        self.leading_edge + Point3::new(0.25 * self.chord, 0.0, 0.0)
    }

    pub fn trailing_edge(&self) -> Point3 {
        self.leading_edge + Point3::new(self.chord, 0.0, 0.0)
    }

    /// Copy of this section reflected to the left half of the wing.
    pub fn mirrored(&self) -> Section {
        Section { leading_edge: self.leading_edge.mirror_y(), ..self.clone() }
    }

    fn validate(&self, index: usize) -> GeometryResult<()> {
        if !self.chord.is_finite() || self.chord <= 0.0 {
            return Err(GeometryError::InvalidChord { index, value: self.chord });
        }
        if !self.leading_edge.is_finite() || !self.twist.is_finite() {
            return Err(GeometryError::NonFiniteSection { index });
        }
        Ok(())
    }
}

/// Right half of a symmetric wing, sections sorted root to tip.
#[derive(Debug, Clone, PartialEq)]
pub struct Planform {
    sections: Vec<Section>,
}

/// Validate `sections` and build a [`Planform`] sorted by ascending
/// leading-edge `y`.
///
/// # Errors
/// - [`GeometryError::TooFewSections`] for fewer than [`MIN_SECTIONS`].
/// - [`GeometryError::InvalidChord`] / [`GeometryError::NonFiniteSection`]
///   for the first offending section (index as supplied).
/// - [`GeometryError::DegeneratePlanform`] if the panels enclose no area.
pub fn build_planform(mut sections: Vec<Section>) -> GeometryResult<Planform> {
    if sections.len() < MIN_SECTIONS {
        return Err(GeometryError::TooFewSections {
            found: sections.len(),
            required: MIN_SECTIONS,
        });
    }
    for (index, section) in sections.iter().enumerate() {
        section.validate(index)?;
    }
    sections.sort_by(|a, b| a.leading_edge.y.total_cmp(&b.leading_edge.y));
    let planform = Planform { sections };
    let area = planform.reference_area();
    if !(area.is_finite() && area > 0.0) {
        return Err(GeometryError::DegeneratePlanform { area });
    }
    Ok(planform)
}

impl Planform {
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn root(&self) -> &Section {
        &self.sections[0]
    }

    pub fn tip(&self) -> &Section {
        &self.sections[self.sections.len() - 1]
    }

    /// Spanwise station of the tip section.
    pub fn semi_span(&self) -> f64 {
        self.tip().leading_edge.y
    }

    /// Full tip-to-tip span, `2 · max(y)`.
    pub fn span(&self) -> f64 {
        2.0 * self.semi_span()
    }

    pub fn tip_chord(&self) -> f64 {
        self.tip().chord
    }

    /// Projected area of both halves.
    pub fn reference_area(&self) -> f64 {
        2.0 * self.panels().map(|(a, b)| panel_area(a, b)).sum::<f64>()
    }

    pub fn aspect_ratio(&self) -> f64 {
        let span = self.span();
        span * span / self.reference_area()
    }

    /// Mean aerodynamic chord, `(1/S) ∫ c² dy` over both halves; the
    /// integral over one half is doubled.
    pub fn mean_aerodynamic_chord(&self) -> f64 {
        let chord_sq: f64 = self
            .panels()
            .map(|(a, b)| {
                let dy = b.leading_edge.y - a.leading_edge.y;
                dy * (a.chord * a.chord + a.chord * b.chord + b.chord * b.chord) / 3.0
            })
            .sum();
        2.0 * chord_sq / self.reference_area()
    }

    /// Area-weighted mean twist in degrees.
    pub fn mean_twist(&self) -> f64 {
        self.area_weighted(|a, b| 0.5 * (a.twist + b.twist))
    }

    /// Area-weighted streamwise position of the quarter-chord line.
    pub fn aerodynamic_center_x(&self) -> f64 {
        self.area_weighted(|a, b| 0.5 * (a.quarter_chord().x + b.quarter_chord().x))
    }

    fn panels(&self) -> impl Iterator<Item = (&Section, &Section)> + '_ {
        self.sections.windows(2).map(|pair| (&pair[0], &pair[1]))
    }

    fn area_weighted<F: Fn(&Section, &Section) -> f64>(&self, value: F) -> f64 {
        let (weighted, area) = self.panels().fold((0.0, 0.0), |(acc, total), (a, b)| {
            let panel = panel_area(a, b);
            (acc + panel * value(a, b), total + panel)
        });
        weighted / area
    }
}

fn panel_area(a: &Section, b: &Section) -> f64 {
    0.5 * (a.chord + b.chord) * (b.leading_edge.y - a.leading_edge.y)
}

#[cfg(test)]
mod tests {
    // Scope
    // -----
    // - Validation and sorting in `build_planform`.
    // - Integral quantities on the reference three-section wing.
    use super::*;
    use crate::utils::base_sections;
    use approx::assert_relative_eq;

    #[test]
    // Purpose
    // -------
    // Sections supplied out of spanwise order are sorted by leading-edge y.
    //
    // Given
    // -----
    // - Reference sections with the first two swapped.
    //
    // Expect
    // ------
    // - Planform y coordinates strictly increasing, root chord 5.6.
    fn build_planform_sorts_sections_by_span_station() {
        // Arrange
        let mut sections = base_sections();
        sections.swap(0, 1);

        // Act
        let planform = build_planform(sections).expect("reference sections should be valid");

        // Assert
        let ys: Vec<f64> = planform.sections().iter().map(|s| s.leading_edge.y).collect();
        assert_eq!(ys, vec![0.0, 4.6, 14.04]);
        assert_relative_eq!(planform.root().chord, 5.6);
    }

    #[test]
    // Purpose
    // -------
    // Span and tip chord of the reference wing.
    //
    // Given
    // -----
    // - Reference sections (tip at y = 14.04, chord 1.26).
    //
    // Expect
    // ------
    // - span = 28.08, tip chord = 1.26.
    fn reference_wing_span_and_tip_chord() {
        // Arrange
        let planform = build_planform(base_sections()).expect("valid sections");

        // Act
        let span = planform.span();
        let tip_chord = planform.tip_chord();

        // Assert
        assert_relative_eq!(span, 28.08, epsilon = 1e-12);
        assert_relative_eq!(tip_chord, 1.26, epsilon = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Reference area, aspect ratio and MAC follow the trapezoid formulas.
    //
    // Given
    // -----
    // - Reference sections: panels (5.6 → 3.6 over 4.6 m) and (3.6 → 1.26
    //   over 9.44 m).
    //
    // Expect
    // ------
    // - S = 2·(21.16 + 22.9392), AR = b²/S, tip chord < MAC < root chord.
    fn reference_wing_integral_quantities() {
        // Arrange
        let planform = build_planform(base_sections()).expect("valid sections");
        let expected_area = 2.0 * (21.16 + 22.9392);

        // Act
        let area = planform.reference_area();
        let ar = planform.aspect_ratio();
        let mac = planform.mean_aerodynamic_chord();

        // Assert
        assert_relative_eq!(area, expected_area, max_relative = 1e-12);
        assert_relative_eq!(ar, 28.08 * 28.08 / expected_area, max_relative = 1e-12);
        assert!(mac > 1.26 && mac < 5.6, "MAC {mac} should lie between tip and root chord");
    }

    #[test]
    // Purpose
    // -------
    // MAC matches the closed forms for rectangular and single-taper wings.
    //
    // Given
    // -----
    // - Rectangular half-wing, chord 2 over 5 m.
    // - Trapezoidal half-wing, root 4, tip 2 (λ = 0.5) over 6 m.
    //
    // Expect
    // ------
    // - Rectangular: MAC = 2 exactly, S = 20.
    // - Trapezoidal: MAC = (2/3)·c_r·(1 + λ + λ²)/(1 + λ) = 28/9.
    fn mean_aerodynamic_chord_matches_closed_forms() {
        // Arrange
        let rectangular = build_planform(vec![
            Section::new(2.0, Point3::new(0.0, 0.0, 0.0), 0.0, "naca0012"),
            Section::new(2.0, Point3::new(0.0, 5.0, 0.0), 0.0, "naca0012"),
        ])
        .expect("rectangular planform");
        let tapered = build_planform(vec![
            Section::new(4.0, Point3::new(0.0, 0.0, 0.0), 0.0, "naca0012"),
            Section::new(2.0, Point3::new(1.0, 6.0, 0.0), 0.0, "naca0012"),
        ])
        .expect("tapered planform");

        // Act
        let mac_rect = rectangular.mean_aerodynamic_chord();
        let mac_taper = tapered.mean_aerodynamic_chord();

        // Assert
        assert_relative_eq!(rectangular.reference_area(), 20.0, epsilon = 1e-12);
        assert_relative_eq!(mac_rect, 2.0, epsilon = 1e-12);
        assert_relative_eq!(mac_taper, 28.0 / 9.0, epsilon = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Too few sections and invalid chords are rejected.
    //
    // Given
    // -----
    // - A single section; a pair where the second chord is zero.
    //
    // Expect
    // ------
    // - `TooFewSections` and `InvalidChord { index: 1 }` respectively.
    fn build_planform_rejects_invalid_input() {
        // Arrange
        let one = vec![Section::new(1.0, Point3::default(), 0.0, "naca0012")];
        let bad_chord = vec![
            Section::new(1.0, Point3::default(), 0.0, "naca0012"),
            Section::new(0.0, Point3::new(0.0, 1.0, 0.0), 0.0, "naca0012"),
        ];

        // Act
        let err_one = build_planform(one).unwrap_err();
        let err_chord = build_planform(bad_chord).unwrap_err();

        // Assert
        assert_eq!(err_one, GeometryError::TooFewSections { found: 1, required: 2 });
        assert_eq!(err_chord, GeometryError::InvalidChord { index: 1, value: 0.0 });
    }

    #[test]
    // Purpose
    // -------
    // Sections stacked at one spanwise station enclose no area.
    //
    // Given
    // -----
    // - Two valid sections both at y = 0.
    //
    // Expect
    // ------
    // - `DegeneratePlanform`.
    fn build_planform_rejects_zero_area() {
        // Arrange
        let sections = vec![
            Section::new(1.0, Point3::default(), 0.0, "naca0012"),
            Section::new(0.5, Point3::new(0.3, 0.0, 0.0), 0.0, "naca0012"),
        ];

        // Act
        let result = build_planform(sections);

        // Assert
        assert!(matches!(result, Err(GeometryError::DegeneratePlanform { .. })));
    }
}
