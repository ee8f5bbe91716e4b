use argmin::core::{ArgminError, Error};

use crate::{
    aero::errors::AeroError,
    geometry::{errors::GeometryError, winglet::WingletKey},
};

/// Crate-wide result alias for optimizer operations.
pub type OptResult<T> = Result<T, OptError>;

#[derive(Debug, Clone, PartialEq)]
pub enum OptError {
    // ---- Equilibrium ----
    /// No angle of attack reproduces the requested lift coefficient.
    Convergence {
        reason: String,
    },

    /// Requested lift coefficient must be finite.
    InvalidTargetCl {
        value: f64,
    },

    /// Initial bracket must be two distinct finite points.
    InvalidBracket {
        lower: f64,
        upper: f64,
        reason: &'static str,
    },

    /// Angle-of-attack tolerance must be positive and finite.
    InvalidTolAlpha {
        tol: f64,
        reason: &'static str,
    },

    /// Lift-coefficient acceptance tolerance must be positive and finite.
    InvalidClTolerance {
        tol: f64,
        reason: &'static str,
    },

    /// Parabolic growth limit must be finite and > 1.
    InvalidGrowLimit {
        value: f64,
        reason: &'static str,
    },

    // ---- Optimizer state ----
    /// Operation called before its prerequisite.
    State {
        operation: &'static str,
        requires: &'static str,
    },

    /// Optimizer cannot be built from the supplied inputs.
    InvalidConfiguration {
        reason: &'static str,
    },

    /// Baseline coefficient is zero or non-finite; normalization impossible.
    DegenerateBaseline {
        name: &'static str,
        value: f64,
    },

    // ---- Parametrization ----
    /// Lower and upper physical bounds name different keys.
    BoundsMismatch {
        missing_in_lower: Vec<WingletKey>,
        missing_in_upper: Vec<WingletKey>,
    },

    /// Explicit bound on a key whose baseline value is zero.
    ZeroBaseline {
        key: WingletKey,
    },

    /// Converted bounds are non-finite or inverted.
    InvalidBounds {
        key: WingletKey,
        lower: f64,
        upper: f64,
        reason: &'static str,
    },

    /// Design vector has the wrong number of components.
    DesignVectorLength {
        expected: usize,
        found: usize,
    },

    /// Design vector components need to be finite.
    NonFiniteDesignVector {
        index: usize,
        value: f64,
    },

    // ---- Gradient ----
    /// Gradient dimensions do not match parameter dimensions.
    GradientDimMismatch {
        expected: usize,
        found: usize,
    },

    /// Gradient elements need to be finite
    InvalidGradient {
        index: usize,
        value: f64,
        reason: &'static str,
    },

    // ---- DesignOptions ----
    /// Gradient tolerance needs to be positive and finite.
    InvalidTolGrad {
        tol: f64,
        reason: &'static str,
    },
    /// Cost change tolerance needs to be positive and finite.
    InvalidTolCost {
        tol: f64,
        reason: &'static str,
    },
    /// Maximum iterations needs to be positive.
    InvalidMaxIter {
        max_iter: usize,
        reason: &'static str,
    },
    /// At least one tolerance must be provided.
    NoTolerancesProvided,

    /// Invalid line searcher name.
    InvalidLineSearch {
        name: String,
        reason: &'static str,
    },

    /// Invalid search method name.
    InvalidSearchMethod {
        name: String,
        reason: &'static str,
    },

    /// lbfgs_mem needs to be at least 1.
    InvalidLBFGSMem {
        mem: usize,
        reason: &'static str,
    },

    /// Initial simplex step must be positive and finite.
    InvalidSimplexStep {
        value: f64,
        reason: &'static str,
    },

    // ---- Cost function ----
    /// Cost function returned a non-finite value.
    NonFiniteCost {
        value: f64,
    },

    // ---- Optimizer outcome ----
    /// Final design vector must be finite.
    InvalidDesignHat {
        index: usize,
        value: f64,
        reason: &'static str,
    },

    /// Solver returned no best design vector.
    MissingDesignHat,

    // ---- Collaborators ----
    /// Geometry construction failed.
    Geometry(GeometryError),

    /// Aerodynamic adapter or atmosphere failed.
    Aero(AeroError),

    // ---- Sweep ----
    /// A sweep study panicked.
    WorkerPanicked {
        interpolation_factor: f64,
    },

    // ---- Serialization ----
    Serialization {
        text: String,
    },

    // ---- Argmin ---
    /// Wrapper for argmin::InvalidParameter
    InvalidParameter {
        text: String,
    },
    /// Wrapper for argmin::NotImplemented
    NotImplemented {
        text: String,
    },
    /// Wrapper for argmin::NotInitialized
    NotInitialized {
        text: String,
    },
    /// Wrapper for argmin::ConditionViolated
    ConditionViolated {
        text: String,
    },
    /// Wrapper for argmin::CheckPointNotFound
    CheckPointNotFound {
        text: String,
    },
    /// Wrapper for argmin::PotentialBug
    PotentialBug {
        text: String,
    },
    /// Wrapper for argmin::ImpossibleError
    ImpossibleError {
        text: String,
    },
    /// Wrapper for other argmin::Error types
    BackendError {
        text: String,
    },

    // ---- Fallback ----
    UnknownError,
}

impl std::error::Error for OptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OptError::Geometry(err) => Some(err),
            OptError::Aero(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for OptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Equilibrium ----
            OptError::Convergence { reason } => {
                write!(f, "Convergence failure: {reason}")
            }
            OptError::InvalidTargetCl { value } => {
                write!(f, "Invalid target lift coefficient {value}, must be finite")
            }
            OptError::InvalidBracket { lower, upper, reason } => {
                write!(f, "Invalid initial bracket ({lower}, {upper}): {reason}")
            }
            OptError::InvalidTolAlpha { tol, reason } => {
                write!(f, "Invalid angle-of-attack tolerance {tol}: {reason}")
            }
            OptError::InvalidClTolerance { tol, reason } => {
                write!(f, "Invalid lift-coefficient tolerance {tol}: {reason}")
            }
            OptError::InvalidGrowLimit { value, reason } => {
                write!(f, "Invalid bracket growth limit {value}: {reason}")
            }

            // ---- Optimizer state ----
            OptError::State { operation, requires } => {
                write!(f, "Cannot call `{operation}` before `{requires}`")
            }
            OptError::InvalidConfiguration { reason } => {
                write!(f, "Invalid optimizer configuration: {reason}")
            }
            OptError::DegenerateBaseline { name, value } => {
                write!(f, "Degenerate baseline: {name} = {value} cannot normalize objective")
            }

            // ---- Parametrization ----
            OptError::BoundsMismatch { missing_in_lower, missing_in_upper } => {
                write!(
                    f,
                    "Lower and upper bounds name different keys: missing in lower {missing_in_lower:?}, missing in upper {missing_in_upper:?}"
                )
            }
            OptError::ZeroBaseline { key } => {
                write!(f, "Cannot bound '{key}': baseline value is zero")
            }
            OptError::InvalidBounds { key, lower, upper, reason } => {
                write!(f, "Invalid bounds for '{key}' ({lower}, {upper}): {reason}")
            }
            OptError::DesignVectorLength { expected, found } => {
                write!(f, "Design vector length mismatch: expected {expected}, found {found}")
            }
            OptError::NonFiniteDesignVector { index, value } => {
                write!(f, "Non-finite design vector entry at index {index}: {value}")
            }

            // ---- Gradient ----
            OptError::GradientDimMismatch { expected, found } => {
                write!(f, "Gradient dimension mismatch: expected {expected}, found {found}")
            }
            OptError::InvalidGradient { index, value, reason } => {
                write!(f, "Invalid gradient at index {index}: {value}: {reason}")
            }

            // ---- DesignOptions ----
            OptError::InvalidTolGrad { tol, reason } => {
                write!(f, "Invalid gradient tolerance {tol}: {reason}")
            }
            OptError::InvalidTolCost { tol, reason } => {
                write!(f, "Invalid cost function change tolerance {tol}: {reason}")
            }
            OptError::InvalidMaxIter { max_iter, reason } => {
                write!(f, "Invalid maximum iterations {max_iter}: {reason}")
            }
            OptError::NoTolerancesProvided => {
                write!(f, "No tolerances provided")
            }
            OptError::InvalidLineSearch { name, reason } => {
                write!(f, "Invalid line searcher '{name}': {reason}")
            }
            OptError::InvalidSearchMethod { name, reason } => {
                write!(f, "Invalid search method '{name}': {reason}")
            }
            OptError::InvalidLBFGSMem { mem, reason } => {
                write!(f, "Invalid L-BFGS memory {mem}: {reason}")
            }
            OptError::InvalidSimplexStep { value, reason } => {
                write!(f, "Invalid simplex step {value}: {reason}")
            }

            // ---- Cost function ----
            OptError::NonFiniteCost { value } => {
                write!(f, "Non-finite cost value: {value}")
            }

            // ---- Optimizer outcome ----
            OptError::InvalidDesignHat { index, value, reason } => {
                write!(f, "Invalid optimal design entry at index {index}: {value}: {reason}")
            }
            OptError::MissingDesignHat => {
                write!(f, "Missing optimal design vector")
            }

            // ---- Collaborators ----
            OptError::Geometry(err) => {
                write!(f, "Geometry error: {err}")
            }
            OptError::Aero(err) => {
                write!(f, "Aerodynamic error: {err}")
            }

            // ---- Sweep ----
            OptError::WorkerPanicked { interpolation_factor } => {
                write!(f, "Sweep worker for k = {interpolation_factor} panicked")
            }

            // ---- Serialization ----
            OptError::Serialization { text } => {
                write!(f, "Serialization error: {text}")
            }

            // ---- Argmin ----
            OptError::InvalidParameter { text } => {
                write!(f, "Invalid parameter: {text}")
            }
            OptError::NotImplemented { text } => {
                write!(f, "Not implemented: {text}")
            }
            OptError::NotInitialized { text } => {
                write!(f, "Not initialized: {text}")
            }
            OptError::ConditionViolated { text } => {
                write!(f, "Condition violated: {text}")
            }
            OptError::CheckPointNotFound { text } => {
                write!(f, "Checkpoint not found: {text}")
            }
            OptError::PotentialBug { text } => {
                write!(f, "Potential bug: {text}")
            }
            OptError::ImpossibleError { text } => {
                write!(f, "Impossible error: {text}")
            }
            OptError::BackendError { text } => {
                write!(f, "Backend error: {text}")
            }

            // ---- Fallback ----
            OptError::UnknownError => {
                write!(f, "Unknown error")
            }
        }
    }
}

/// Recover crate errors that crossed the argmin boundary before falling
/// back to argmin's own error kinds.
impl From<Error> for OptError {
    fn from(original_err: Error) -> Self {
        let original_err = match original_err.downcast::<OptError>() {
            Ok(opt_err) => return opt_err,
            Err(err) => err,
        };
        let original_err = match original_err.downcast::<AeroError>() {
            Ok(aero_err) => return OptError::Aero(aero_err),
            Err(err) => err,
        };
        let original_err = match original_err.downcast::<GeometryError>() {
            Ok(geometry_err) => return OptError::Geometry(geometry_err),
            Err(err) => err,
        };
        match original_err.downcast() {
            Ok(argmin_err) => match argmin_err {
                ArgminError::InvalidParameter { text } => OptError::InvalidParameter { text },
                ArgminError::NotImplemented { text } => OptError::NotImplemented { text },
                ArgminError::NotInitialized { text } => OptError::NotInitialized { text },
                ArgminError::ConditionViolated { text } => OptError::ConditionViolated { text },
                ArgminError::CheckpointNotFound { text } => OptError::CheckPointNotFound { text },
                ArgminError::PotentialBug { text } => OptError::PotentialBug { text },
                ArgminError::ImpossibleError { text } => OptError::ImpossibleError { text },
                _ => OptError::UnknownError,
            },
            Err(err) => OptError::BackendError { text: err.to_string() },
        }
    }
}

impl From<GeometryError> for OptError {
    fn from(err: GeometryError) -> Self {
        OptError::Geometry(err)
    }
}

impl From<AeroError> for OptError {
    fn from(err: AeroError) -> Self {
        OptError::Aero(err)
    }
}

impl From<serde_json::Error> for OptError {
    fn from(err: serde_json::Error) -> Self {
        OptError::Serialization { text: err.to_string() }
    }
}
