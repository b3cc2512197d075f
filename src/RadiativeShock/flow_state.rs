use super::constants::PhysicalConstants;
use super::shock_errors::ShockError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Local state of the flow: density ρ (g/cm³), velocity v (cm/s), matter temperature T (K)
/// and radiation energy density E_r (erg/cm³).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlowState {
    pub density: f64,
    pub velocity: f64,
    pub temperature: f64,
    pub radiation_energy: f64,
}

impl FlowState {
    pub fn new(density: f64, velocity: f64, temperature: f64, radiation_energy: f64) -> Self {
        Self {
            density,
            velocity,
            temperature,
            radiation_energy,
        }
    }

    /// state with radiation in equilibrium with the gas, E_r = a T⁴
    pub fn in_equilibrium(
        density: f64,
        velocity: f64,
        temperature: f64,
        constants: &PhysicalConstants,
    ) -> Self {
        Self::new(
            density,
            velocity,
            temperature,
            constants.equilibrium_radiation_energy(temperature),
        )
    }

    pub fn pressure(&self, constants: &PhysicalConstants) -> f64 {
        self.density * constants.r_gas() * self.temperature
    }

    pub fn sound_speed(&self, constants: &PhysicalConstants) -> f64 {
        (constants.gamma * self.pressure(constants) / self.density).sqrt()
    }

    pub fn mach_number(&self, constants: &PhysicalConstants) -> f64 {
        self.velocity / self.sound_speed(constants)
    }

    pub fn mass_flux(&self) -> f64 {
        self.density * self.velocity
    }

    pub fn radiation_temperature(&self, constants: &PhysicalConstants) -> f64 {
        constants.radiation_temperature(self.radiation_energy)
    }

    /// |E_r - a T⁴| <= rtol a T⁴
    pub fn is_in_equilibrium(&self, constants: &PhysicalConstants, rtol: f64) -> bool {
        let e_eq = constants.equilibrium_radiation_energy(self.temperature);
        (self.radiation_energy - e_eq).abs() <= rtol * e_eq
    }

    pub fn validate(&self) -> Result<(), ShockError> {
        ShockError::require_positive("density", self.density)?;
        ShockError::require_positive("velocity", self.velocity)?;
        ShockError::require_positive("temperature", self.temperature)?;
        if !(self.radiation_energy.is_finite() && self.radiation_energy >= 0.0) {
            return Err(ShockError::NonPositiveInput {
                name: "radiation energy density".to_string(),
                value: self.radiation_energy,
            });
        }
        Ok(())
    }
}

impl fmt::Display for FlowState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "rho = {:.4e} g/cm3, v = {:.4e} cm/s, T = {:.4} K, Er = {:.4e} erg/cm3",
            self.density, self.velocity, self.temperature, self.radiation_energy
        )
    }
}
