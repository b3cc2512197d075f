//! # Flux limiter
//!
//! Levermore-Pomraning-like limiter interpolating between the diffusive regime (λ → 1,
//! optically thick) and free streaming (λ → 0, optically thin):
//!
//! ```text
//! R = |dE_r/dx| / (κ ρ max(E_r, 0) + ε)
//! λ(R) = 1/(1 + R)
//! ```
//!
//! ε is a non-physical regulariser that only prevents division by zero when E_r → 0;
//! accuracy of the limited flux degrades in that limit.

use super::shock_errors::ShockError;
use RustedSciThe::symbolic::symbolic_engine::Expr;

pub const DEFAULT_REGULARIZATION: f64 = 1e-30;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluxLimiter {
    /// additive regulariser in the denominator of R
    pub regularization: f64,
}

impl Default for FluxLimiter {
    fn default() -> Self {
        Self {
            regularization: DEFAULT_REGULARIZATION,
        }
    }
}

impl FluxLimiter {
    pub fn new(regularization: f64) -> Result<Self, ShockError> {
        if !(regularization.is_finite() && regularization > 0.0) {
            return Err(ShockError::InvalidConfiguration(format!(
                "limiter regularization must be positive, got {}",
                regularization
            )));
        }
        Ok(Self { regularization })
    }

    /// Knudsen-like ratio R of the gradient scale to the local absorption scale
    pub fn ratio(&self, gradient: f64, kappa: f64, density: f64, radiation_energy: f64) -> f64 {
        gradient.abs() / (kappa * density * radiation_energy.max(0.0) + self.regularization)
    }

    /// λ(R) = 1/(1+R), in (0, 1] for R >= 0
    pub fn limiter(&self, R: f64) -> f64 {
        1.0 / (1.0 + R)
    }

    /// limited diffusive flux F = -(c λ/(κρ)) dE_r/dx
    pub fn flux(
        &self,
        c: f64,
        gradient: f64,
        kappa: f64,
        density: f64,
        radiation_energy: f64,
    ) -> f64 {
        let R = self.ratio(gradient, kappa, density, radiation_energy);
        -(c * self.limiter(R) / (kappa * density)) * gradient
    }

    pub fn limiter_sym() -> Expr {
        let R = Expr::Var("R".to_owned());
        Expr::Const(1.0) / (Expr::Const(1.0) + R)
    }
}
