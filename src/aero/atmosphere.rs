//! aero::atmosphere — atmosphere lookups behind a small trait.
//!
//! Purpose
//! -------
//! Provide speed of sound and density as functions of altitude. The
//! optimizer only needs these two quantities, once per operating point.
//!
//! Key behaviors
//! -------------
//! - [`Atmosphere`] is the collaborator seam; any deterministic model works.
//! - [`StandardAtmosphere`] implements the 1976 standard atmosphere for the
//!   first four layers (troposphere to upper stratosphere, 0–32 km
//!   geopotential), converting geometric altitude to geopotential altitude
//!   first. Altitudes outside `[MIN_ALTITUDE, MAX_ALTITUDE]` are rejected.
//!
//! Conventions
//! -----------
//! - Altitudes in metres (geometric), temperatures in kelvin, pressures in
//!   pascal, densities in kg/m³, speeds in m/s.
use crate::aero::errors::{AeroError, AeroResult};

/// Lowest altitude accepted by [`StandardAtmosphere`] (m).
pub const MIN_ALTITUDE: f64 = -610.0;
/// Highest altitude accepted by [`StandardAtmosphere`] (m).
pub const MAX_ALTITUDE: f64 = 32_000.0;

/// Ratio of specific heats for dry air.
pub const GAMMA_AIR: f64 = 1.4;
/// Specific gas constant for dry air (J/(kg·K)).
pub const R_AIR: f64 = 287.052_87;
/// Standard gravity (m/s²).
pub const G0: f64 = 9.806_65;
/// Effective Earth radius for the geopotential conversion (m).
pub const EARTH_RADIUS: f64 = 6_356_766.0;

/// Altitude-dependent atmosphere properties.
pub trait Atmosphere {
    /// Speed of sound at geometric altitude `altitude` (m/s).
    fn speed_of_sound(&self, altitude: f64) -> AeroResult<f64>;

    /// Air density at geometric altitude `altitude` (kg/m³).
    fn density(&self, altitude: f64) -> AeroResult<f64>;
}

/// Layer base: geopotential altitude, temperature, lapse rate, pressure.
#[derive(Debug, Clone, Copy)]
struct Layer {
    base_height: f64,
    base_temperature: f64,
    lapse_rate: f64,
    base_pressure: f64,
}

const LAYERS: [Layer; 3] = [
    Layer { base_height: 0.0, base_temperature: 288.15, lapse_rate: -0.0065, base_pressure: 101_325.0 },
    Layer { base_height: 11_000.0, base_temperature: 216.65, lapse_rate: 0.0, base_pressure: 22_632.06 },
    Layer { base_height: 20_000.0, base_temperature: 216.65, lapse_rate: 0.001, base_pressure: 5_474.889 },
];

/// 1976 standard atmosphere, valid from −610 m to 32 km.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StandardAtmosphere;

impl StandardAtmosphere {
    pub fn new() -> Self {
        Self
    }

    /// Static temperature (K).
    pub fn temperature(&self, altitude: f64) -> AeroResult<f64> {
        let (layer, height) = locate(altitude)?;
        Ok(layer.base_temperature + layer.lapse_rate * (height - layer.base_height))
    }

    /// Static pressure (Pa).
    pub fn pressure(&self, altitude: f64) -> AeroResult<f64> {
        let (layer, height) = locate(altitude)?;
        let dh = height - layer.base_height;
        let pressure = if layer.lapse_rate == 0.0 {
            layer.base_pressure * (-G0 * dh / (R_AIR * layer.base_temperature)).exp()
        } else {
            let temperature = layer.base_temperature + layer.lapse_rate * dh;
            layer.base_pressure
                * (temperature / layer.base_temperature).powf(-G0 / (layer.lapse_rate * R_AIR))
        };
        Ok(pressure)
    }
}

impl Atmosphere for StandardAtmosphere {
    fn speed_of_sound(&self, altitude: f64) -> AeroResult<f64> {
        Ok((GAMMA_AIR * R_AIR * self.temperature(altitude)?).sqrt())
    }

    fn density(&self, altitude: f64) -> AeroResult<f64> {
        Ok(self.pressure(altitude)? / (R_AIR * self.temperature(altitude)?))
    }
}

/// Validate `altitude`, convert it to geopotential height and pick its layer.
fn locate(altitude: f64) -> AeroResult<(Layer, f64)> {
    if !altitude.is_finite() || !(MIN_ALTITUDE..=MAX_ALTITUDE).contains(&altitude) {
        return Err(AeroError::AltitudeOutOfRange {
            altitude,
            min: MIN_ALTITUDE,
            max: MAX_ALTITUDE,
        });
    }
    let height = EARTH_RADIUS * altitude / (EARTH_RADIUS + altitude);
    let layer = LAYERS
        .iter()
        .rev()
        .find(|layer| height >= layer.base_height)
        .copied()
        .unwrap_or(LAYERS[0]);
    Ok((layer, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    // Purpose
    // -------
    // Sea-level values match the standard atmosphere.
    //
    // Given
    // -----
    // - Altitude 0 m.
    //
    // Expect
    // ------
    // - a ≈ 340.294 m/s, ρ ≈ 1.225 kg/m³, T = 288.15 K.
    fn sea_level_matches_standard_values() {
        // Arrange
        let atmosphere = StandardAtmosphere::new();

        // Act
        let a = atmosphere.speed_of_sound(0.0).expect("sea level in range");
        let rho = atmosphere.density(0.0).expect("sea level in range");
        let t = atmosphere.temperature(0.0).expect("sea level in range");

        // Assert
        assert_relative_eq!(a, 340.294, max_relative = 1e-5);
        assert_relative_eq!(rho, 1.225, max_relative = 1e-4);
        assert_relative_eq!(t, 288.15);
    }

    #[test]
    // Purpose
    // -------
    // Cruise altitude sits just below the tropopause.
    //
    // Given
    // -----
    // - Geometric altitude 11 000 m (geopotential ≈ 10 981 m).
    //
    // Expect
    // ------
    // - T ≈ 216.77 K, a ≈ 295.15 m/s, ρ ≈ 0.3648 kg/m³.
    fn cruise_altitude_values() {
        // Arrange
        let atmosphere = StandardAtmosphere::new();

        // Act
        let t = atmosphere.temperature(11_000.0).expect("in range");
        let a = atmosphere.speed_of_sound(11_000.0).expect("in range");
        let rho = atmosphere.density(11_000.0).expect("in range");

        // Assert
        assert_relative_eq!(t, 216.774, max_relative = 1e-4);
        assert_relative_eq!(a, 295.154, max_relative = 1e-4);
        assert_relative_eq!(rho, 0.36480, max_relative = 2e-3);
    }

    #[test]
    // Purpose
    // -------
    // Pressure is continuous across the tropopause layer boundary.
    //
    // Given
    // -----
    // - Altitudes just below and above the 11 km geopotential boundary.
    //
    // Expect
    // ------
    // - Relative pressure jump below 1e-4.
    fn pressure_is_continuous_across_layers() {
        // Arrange
        let atmosphere = StandardAtmosphere::new();
        let boundary = 11_000.0 * EARTH_RADIUS / (EARTH_RADIUS - 11_000.0);

        // Act
        let below = atmosphere.pressure(boundary - 1e-3).expect("in range");
        let above = atmosphere.pressure(boundary + 1e-3).expect("in range");

        // Assert
        assert_relative_eq!(below, above, max_relative = 1e-4);
    }

    #[test]
    // Purpose
    // -------
    // Out-of-range and non-finite altitudes are rejected.
    //
    // Given
    // -----
    // - -1000 m, 40 000 m, NaN.
    //
    // Expect
    // ------
    // - `AltitudeOutOfRange` for each.
    fn out_of_range_altitudes_are_rejected() {
        // Arrange
        let atmosphere = StandardAtmosphere::new();

        // Act / Assert
        for altitude in [-1_000.0, 40_000.0, f64::NAN] {
            let result = atmosphere.speed_of_sound(altitude);
            assert!(
                matches!(result, Err(AeroError::AltitudeOutOfRange { .. })),
                "altitude {altitude} should be rejected"
            );
        }
    }
}
