use thiserror::Error;

/// Errors of the radiative shock solver.
///
/// Precondition violations are raised before any integration starts; numerical failures are
/// raised by the integrators and abort the whole run with no partial profile.
#[derive(Debug, Error)]
pub enum ShockError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("{name} must be positive and finite, got {value}")]
    NonPositiveInput { name: String, value: f64 },
    #[error("shock requires supersonic upstream flow, Mach number is {mach:.6}")]
    SubsonicShock { mach: f64 },
    #[error("invalid opacity table: {0}")]
    InvalidOpacityTable(String),
    #[error("integration did not converge: step budget of {max_steps} exhausted at x = {position:e}")]
    NonConvergence { max_steps: usize, position: f64 },
    #[error("step size underflow at x = {position:e}")]
    StepSizeUnderflow { position: f64 },
    #[error("singular iteration matrix at x = {position:e}")]
    SingularIterationMatrix { position: f64 },
    #[error("non-finite state encountered at x = {position:e}")]
    NonFiniteState { position: f64 },
    #[error("{method} solver failed at x = {position:e}: {message}")]
    SolverFailure {
        method: String,
        position: f64,
        message: String,
    },
    #[error("non-physical profile at x = {position:e}: {detail}")]
    NonPhysicalProfile { position: f64, detail: String },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("task file error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ShockError {
    /// Precondition check shared by every component taking physical inputs
    pub fn require_positive(name: &str, value: f64) -> Result<(), ShockError> {
        if value.is_finite() && value > 0.0 {
            Ok(())
        } else {
            Err(ShockError::NonPositiveInput {
                name: name.to_string(),
                value,
            })
        }
    }

    /// true for failures of the numerical integration, as opposed to bad inputs
    pub fn is_numerical(&self) -> bool {
        matches!(
            self,
            ShockError::NonConvergence { .. }
                | ShockError::StepSizeUnderflow { .. }
                | ShockError::SingularIterationMatrix { .. }
                | ShockError::NonFiniteState { .. }
                | ShockError::SolverFailure { .. }
        )
    }
}
