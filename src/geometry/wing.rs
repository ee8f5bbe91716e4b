//! The complete lifting surface: a planform plus an optional winglet pair.
//!
//! [`FlyingWing`] owns its planform and, separately, the winglet parameters
//! and the surface built from them. The surface is only (re)built by explicit
//! calls ([`FlyingWing::create_winglet`], [`FlyingWing::rebuild_winglet`]), so
//! a wing never carries a surface that disagrees with its parameters.
use crate::geometry::{
    errors::{GeometryError, GeometryResult},
    section::{Planform, Section, build_planform},
    winglet::{WingletParameters, WingletSurface, build_winglet},
};

#[derive(Debug, Clone, PartialEq)]
pub struct FlyingWing {
    planform: Planform,
    winglet_parameters: Option<WingletParameters>,
    winglet: Option<WingletSurface>,
}

impl FlyingWing {
    /// Build the planform from `sections` and attach (but do not build)
    /// optional winglet parameters.
    pub fn new(
        sections: Vec<Section>, winglet_parameters: Option<WingletParameters>,
    ) -> GeometryResult<Self> {
        let planform = build_planform(sections)?;
        Ok(Self { planform, winglet_parameters, winglet: None })
    }

    /// Convenience: planform plus a built winglet pair.
    pub fn with_winglet(
        sections: Vec<Section>, winglet_parameters: WingletParameters,
    ) -> GeometryResult<Self> {
        let mut wing = Self::new(sections, Some(winglet_parameters))?;
        wing.create_winglet()?;
        Ok(wing)
    }

    pub fn planform(&self) -> &Planform {
        &self.planform
    }

    pub fn sections(&self) -> &[Section] {
        self.planform.sections()
    }

    pub fn winglet_parameters(&self) -> Option<&WingletParameters> {
        self.winglet_parameters.as_ref()
    }

    pub fn winglet(&self) -> Option<&WingletSurface> {
        self.winglet.as_ref()
    }

    pub fn has_winglet(&self) -> bool {
        self.winglet.is_some()
    }

    /// Build the winglet surface from the attached parameters.
    ///
    /// # Errors
    /// - [`GeometryError::MissingWingletParameters`] if none are attached.
    /// - Propagates validation errors from [`build_winglet`].
    pub fn create_winglet(&mut self) -> GeometryResult<&WingletSurface> {
        let parameters =
            self.winglet_parameters.as_ref().ok_or(GeometryError::MissingWingletParameters)?;
        let surface = build_winglet(parameters, &self.planform)?;
        Ok(&*self.winglet.insert(surface))
    }

    /// Drop the built surface; attached parameters are kept.
    pub fn remove_winglet(&mut self) {
        self.winglet = None;
    }

    /// Replace the winglet parameters and rebuild the surface.
    ///
    /// The new surface is built before anything is replaced: on error the
    /// wing keeps its previous parameters and surface.
    pub fn rebuild_winglet(
        &mut self, parameters: WingletParameters,
    ) -> GeometryResult<&WingletSurface> {
        let surface = build_winglet(&parameters, &self.planform)?;
        self.winglet_parameters = Some(parameters);
        Ok(&*self.winglet.insert(surface))
    }

    pub fn span(&self) -> f64 {
        self.planform.span()
    }

    pub fn tip_chord(&self) -> f64 {
        self.planform.tip_chord()
    }

    pub fn reference_area(&self) -> f64 {
        self.planform.reference_area()
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.planform.aspect_ratio()
    }

    pub fn mean_aerodynamic_chord(&self) -> f64 {
        self.planform.mean_aerodynamic_chord()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::winglet::WingletKey;
    use crate::utils::{base_sections, base_winglet_parameters};

    #[test]
    // Purpose
    // -------
    // A wing without parameters cannot create a winglet.
    //
    // Given
    // -----
    // - Reference sections, no winglet parameters.
    //
    // Expect
    // ------
    // - `MissingWingletParameters`, no surface attached.
    fn create_winglet_requires_parameters() {
        // Arrange
        let mut wing = FlyingWing::new(base_sections(), None).expect("valid sections");

        // Act
        let result = wing.create_winglet().map(|_| ());

        // Assert
        assert_eq!(result, Err(GeometryError::MissingWingletParameters));
        assert!(!wing.has_winglet());
    }

    #[test]
    // Purpose
    // -------
    // remove_winglet drops the surface but keeps the parameters, so the
    // winglet can be recreated.
    //
    // Given
    // -----
    // - Reference wing with base winglet.
    //
    // Expect
    // ------
    // - After removal: no surface, parameters present; recreate succeeds.
    fn remove_then_create_restores_surface() {
        // Arrange
        let mut wing = FlyingWing::with_winglet(base_sections(), base_winglet_parameters(true))
            .expect("valid wing");
        let original = wing.winglet().cloned();

        // Act
        wing.remove_winglet();
        let removed = wing.has_winglet();
        wing.create_winglet().expect("parameters still attached");

        // Assert
        assert!(!removed);
        assert!(wing.winglet_parameters().is_some());
        assert_eq!(wing.winglet().cloned(), original);
    }

    #[test]
    // Purpose
    // -------
    // A failed rebuild leaves the previous configuration in place.
    //
    // Given
    // -----
    // - Reference wing with base winglet; new parameters with negative span.
    //
    // Expect
    // ------
    // - Error returned; parameters and surface unchanged.
    fn failed_rebuild_keeps_previous_winglet() {
        // Arrange
        let base = base_winglet_parameters(true);
        let mut wing = FlyingWing::with_winglet(base_sections(), base.clone()).expect("valid wing");
        let before = wing.winglet().cloned();

        // Act
        let result = wing.rebuild_winglet(base.with_value(WingletKey::Span, -0.1)).map(|_| ());

        // Assert
        assert!(result.is_err());
        assert_eq!(wing.winglet_parameters(), Some(&base));
        assert_eq!(wing.winglet().cloned(), before);
    }
}
