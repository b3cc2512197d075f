//! # Physical Constants (CGS)
//!
//! Immutable constant set shared by every component of the shock solver. The set is
//! passed explicitly into opacity-independent physics (jump conditions, right-hand sides);
//! there is no module-level mutable state.
//!
//! Two presets are provided:
//! - [`PhysicalConstants::cgs_rounded`] (the default): rounded values used by the
//!   flux-limited-diffusion reference scenario (c = 3e10 cm/s);
//! - [`PhysicalConstants::cgs_precise`]: values used by the subcritical closed-form scenario
//!   (c = 2.9979e10 cm/s, slightly different k_B and m_H).

use super::shock_errors::ShockError;
use serde::{Deserialize, Serialize};

/// Radiation constant a (erg/(cm³·K⁴))
pub const A_RAD: f64 = 7.5657e-15;

/// Monatomic ideal gas adiabatic index
pub const GAMMA_MONATOMIC: f64 = 5.0 / 3.0;

/// Mean molecular weight of fully molecular hydrogen gas
pub const MU_MOLECULAR_H2: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalConstants {
    /// speed of light, cm/s
    pub c: f64,
    /// radiation constant, erg/(cm³·K⁴)
    pub a_rad: f64,
    /// Boltzmann constant, erg/K
    pub k_b: f64,
    /// hydrogen atom mass, g
    pub m_h: f64,
    /// mean molecular weight
    pub mu: f64,
    /// adiabatic index
    pub gamma: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self::cgs_rounded()
    }
}

impl PhysicalConstants {
    pub fn cgs_rounded() -> Self {
        Self {
            c: 3e10,
            a_rad: A_RAD,
            k_b: 1.3807e-16,
            m_h: 1.6737e-24,
            mu: MU_MOLECULAR_H2,
            gamma: GAMMA_MONATOMIC,
        }
    }

    pub fn cgs_precise() -> Self {
        Self {
            c: 2.9979e10,
            a_rad: A_RAD,
            k_b: 1.3806e-16,
            m_h: 1.6726e-24,
            mu: MU_MOLECULAR_H2,
            gamma: GAMMA_MONATOMIC,
        }
    }

    /// Specific gas constant R_gas = k_B/(μ m_H), erg/(g·K)
    pub fn r_gas(&self) -> f64 {
        self.k_b / (self.mu * self.m_h)
    }

    /// Heat capacity per unit volume ρ R_gas/(γ-1), erg/(cm³·K)
    pub fn volumetric_heat_capacity(&self, density: f64) -> f64 {
        density * self.r_gas() / (self.gamma - 1.0)
    }

    /// Equilibrium radiation energy density a T⁴
    pub fn equilibrium_radiation_energy(&self, temperature: f64) -> f64 {
        self.a_rad * temperature.powi(4)
    }

    /// Radiation temperature (E_r/a)^(1/4)
    pub fn radiation_temperature(&self, radiation_energy: f64) -> f64 {
        (radiation_energy / self.a_rad).powf(0.25)
    }

    pub fn validate(&self) -> Result<(), ShockError> {
        let named = [
            ("c", self.c),
            ("a_rad", self.a_rad),
            ("k_b", self.k_b),
            ("m_h", self.m_h),
            ("mu", self.mu),
        ];
        for (name, value) in named {
            if !(value.is_finite() && value > 0.0) {
                return Err(ShockError::InvalidConfiguration(format!(
                    "physical constant {} must be positive and finite, got {}",
                    name, value
                )));
            }
        }
        if !(self.gamma.is_finite() && self.gamma > 1.0) {
            return Err(ShockError::InvalidConfiguration(format!(
                "adiabatic index must exceed 1, got {}",
                self.gamma
            )));
        }
        Ok(())
    }
}
