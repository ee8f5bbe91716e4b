//! Errors raised by the aerodynamic layer (operating points, atmosphere
//! lookups and solver adapters).
//!
//! Adapters report their own failures through [`AeroError`]; the optimizer
//! wraps them unchanged in `OptError::Aero`.

/// Result alias for aerodynamic evaluations.
pub type AeroResult<T> = Result<T, AeroError>;

#[derive(Debug, Clone, PartialEq)]
pub enum AeroError {
    // ---- Operating point ----
    /// Altitude, Mach number or lift coefficient is invalid.
    InvalidOperationPoint { field: &'static str, value: f64, reason: &'static str },

    // ---- Atmosphere ----
    /// Altitude outside the tabulated atmosphere.
    AltitudeOutOfRange { altitude: f64, min: f64, max: f64 },

    // ---- Flight condition ----
    /// Velocity, density or angle of attack is invalid.
    InvalidFlightCondition { field: &'static str, value: f64, reason: &'static str },

    // ---- Adapter ----
    /// Geometry cannot be evaluated by the adapter.
    DegenerateGeometry { reason: &'static str },

    /// Adapter produced a NaN/±inf coefficient.
    NonFiniteCoefficient { name: &'static str, value: f64 },

    /// Failure reported by an external solver backend.
    Backend { text: String },
}

impl std::error::Error for AeroError {}

impl std::fmt::Display for AeroError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Operating point ----
            AeroError::InvalidOperationPoint { field, value, reason } => {
                write!(f, "Invalid operation point {field} = {value}: {reason}")
            }

            // ---- Atmosphere ----
            AeroError::AltitudeOutOfRange { altitude, min, max } => {
                write!(f, "Altitude {altitude} m outside atmosphere range [{min}, {max}] m")
            }

            // ---- Flight condition ----
            AeroError::InvalidFlightCondition { field, value, reason } => {
                write!(f, "Invalid flight condition {field} = {value}: {reason}")
            }

            // ---- Adapter ----
            AeroError::DegenerateGeometry { reason } => {
                write!(f, "Degenerate geometry: {reason}")
            }
            AeroError::NonFiniteCoefficient { name, value } => {
                write!(f, "Non-finite aerodynamic coefficient {name}: {value}")
            }
            AeroError::Backend { text } => {
                write!(f, "Aerodynamic backend error: {text}")
            }
        }
    }
}
