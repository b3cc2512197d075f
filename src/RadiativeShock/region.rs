//! # Region integration
//!
//! Integrates the coupled gas-energy and radiation-energy equations over one spatial region
//! (pre-shock or post-shock) and samples the result at evenly spaced positions.
//!
//! ## Variants
//!
//! **Radiation-hydro** (state `T, E_r`; density and velocity prescribed by region policies):
//!
//! ```text
//! E_eq  = a T⁴
//! ∇E    ≈ (E_eq - E_r)/Δx                 Δx = sample spacing
//! F     = -(c λ(R)/(κρ)) ∇E,  R = |∇E|/(κρE_r + ε)
//! G     = -F/Δx
//! dE_r/dx = G
//! dT/dx   = -G/(ρ R_gas/(γ-1))
//! ```
//!
//! The gas receives exactly what the radiation field loses, so `ρR_gas/(γ-1)·T + E_r` is
//! conserved along a region of constant density.
//!
//! **Full** (state `ρ, v, T, E_r`), closed-form cooling towards the undisturbed upstream
//! temperature `T_ref`:
//!
//! ```text
//! G       = -4 a c κ ρ (T⁴ - T_ref⁴)
//! dT/dx   = G/(max(v, v_floor) ρ R_gas/(γ-1))
//! dE_r/dx = -3 κ ρ E_r/c
//! dv/dx   = 0                              momentum equation not solved
//! dρ/dx   = -(ρ/v) dv/dx
//! ```
//!
//! In both variants a region with κρ <= 0 (transparent, possibly from negative extrapolated
//! table opacity) exchanges no energy.
//!
//! ## Scaling
//! Equations are integrated in dimensionless form: `ξ = (x - x_start)/L`, `θ = T/T₀`,
//! `e = E_r/(a T₀⁴)`, `ρ/ρ₀`, `v/v₀` with the region's initial values. The absolute tolerance
//! then carries the same meaning for every component.
//!
//! ## Method selection
//! `IntegrationMethod::Auto` resolves to Radau IIA for the full variant and for a
//! radiation-hydro region starting out of radiative equilibrium (the exchange relaxes over a
//! length much shorter than the region); BDF otherwise.

use super::constants::PhysicalConstants;
use super::flow_state::FlowState;
use super::flux_limiter::FluxLimiter;
use super::integrators::{IntegrationMethod, OdeSystem, SolverConfig, Trajectory, integrate};
use super::opacity::{Opacity, OpacityModel};
use super::shock_errors::ShockError;
use log::{debug, error, info};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Prescribed density or velocity along a region
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FieldPolicy {
    Constant(f64),
    /// linear between the region start and end
    Linear { start: f64, end: f64 },
}

impl FieldPolicy {
    /// value at region fraction ξ ∈ [0, 1]
    pub fn value_at(&self, xi: f64) -> f64 {
        match self {
            FieldPolicy::Constant(value) => *value,
            FieldPolicy::Linear { start, end } => start + (end - start) * xi,
        }
    }

    fn validate(&self, name: &str) -> Result<(), ShockError> {
        ShockError::require_positive(name, self.value_at(0.0))?;
        ShockError::require_positive(name, self.value_at(1.0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegionKind {
    PreShock,
    PostShock,
}

impl fmt::Display for RegionKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RegionKind::PreShock => write!(f, "pre-shock"),
            RegionKind::PostShock => write!(f, "post-shock"),
        }
    }
}

/// Equation set used inside a region
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RegionModel {
    /// (T, E_r) with flux-limited diffusion exchange
    RadiationHydro,
    /// (ρ, v, T, E_r) with closed-form cooling towards `reference_temperature`
    Full { reference_temperature: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegionDescriptor {
    pub kind: RegionKind,
    pub x_start: f64,
    pub x_end: f64,
    pub samples: usize,
    pub density: FieldPolicy,
    pub velocity: FieldPolicy,
    pub initial: FlowState,
}

impl RegionDescriptor {
    /// region with density and velocity held at their initial values
    pub fn new(kind: RegionKind, x_start: f64, x_end: f64, samples: usize, initial: FlowState) -> Self {
        Self {
            kind,
            x_start,
            x_end,
            samples,
            density: FieldPolicy::Constant(initial.density),
            velocity: FieldPolicy::Constant(initial.velocity),
            initial,
        }
    }

    pub fn with_density(mut self, density: FieldPolicy) -> Self {
        self.density = density;
        self
    }

    pub fn with_velocity(mut self, velocity: FieldPolicy) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn length(&self) -> f64 {
        self.x_end - self.x_start
    }

    pub fn spacing(&self) -> f64 {
        self.length() / (self.samples - 1) as f64
    }

    /// evenly spaced sample positions, first and last exactly at the region bounds
    pub fn positions(&self) -> Vec<f64> {
        let n = self.samples;
        (0..n)
            .map(|i| {
                if i == n - 1 {
                    self.x_end
                } else {
                    self.x_start + self.length() * i as f64 / (n - 1) as f64
                }
            })
            .collect()
    }

    pub fn validate(&self) -> Result<(), ShockError> {
        if !(self.x_start.is_finite() && self.x_end.is_finite() && self.x_end > self.x_start) {
            return Err(ShockError::InvalidConfiguration(format!(
                "{} region must have finite bounds with end > start, got [{}, {}]",
                self.kind, self.x_start, self.x_end
            )));
        }
        if self.samples < 2 {
            return Err(ShockError::InvalidConfiguration(format!(
                "{} region needs at least 2 samples, got {}",
                self.kind, self.samples
            )));
        }
        self.density.validate("density")?;
        self.velocity.validate("velocity")?;
        self.initial.validate()
    }
}

/// Sampled solution of one region
#[derive(Debug, Clone, PartialEq)]
pub struct RegionProfile {
    pub kind: RegionKind,
    pub positions: Vec<f64>,
    pub states: Vec<FlowState>,
    pub method: IntegrationMethod,
    pub accepted_steps: usize,
    pub rejected_steps: usize,
}

impl RegionProfile {
    /// state at the last sample
    pub fn exit_state(&self) -> FlowState {
        self.states[self.states.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Characteristic values of a region used to make the equations dimensionless
#[derive(Debug, Clone, Copy)]
pub struct RegionScales {
    pub length: f64,
    pub temperature: f64,
    pub radiation: f64,
    pub density: f64,
    pub velocity: f64,
}

impl RegionScales {
    pub fn of(region: &RegionDescriptor, constants: &PhysicalConstants) -> Self {
        let temperature = region.initial.temperature;
        Self {
            length: region.length(),
            temperature,
            radiation: constants.equilibrium_radiation_energy(temperature),
            density: region.initial.density,
            velocity: region.initial.velocity,
        }
    }
}

/// Shared interface of the two equation sets
pub trait RegionSystem<const N: usize>: OdeSystem<N> {
    /// dimensionless initial vector
    fn initial_vector(&self, initial: &FlowState) -> [f64; N];
    /// physical state at region fraction ξ
    fn flow_state(&self, xi: f64, y: &[f64; N]) -> FlowState;
}

////////////////////////////////////////////////////////////////////////////////////////
//                         RADIATION-HYDRO (T, E_r)
////////////////////////////////////////////////////////////////////////////////////////

pub struct RadiationHydroRegion {
    pub constants: PhysicalConstants,
    pub opacity: Opacity,
    pub limiter: FluxLimiter,
    pub density: FieldPolicy,
    pub velocity: FieldPolicy,
    /// sample spacing Δx used by the gradient and divergence estimates, cm
    pub dx: f64,
    pub scales: RegionScales,
}

impl RadiationHydroRegion {
    /// (dT/dx, dE_r/dx) in physical units
    pub fn derivatives(&self, T: f64, Er: f64, rho: f64) -> (f64, f64) {
        let constants = &self.constants;
        let kappa = self.opacity.kappa(T);
        let kappa_rho = kappa * rho;
        if !(kappa_rho > 0.0) {
            return (0.0, 0.0);
        }
        let E_eq = constants.equilibrium_radiation_energy(T);
        let gradient = (E_eq - Er) / self.dx;
        let F = self.limiter.flux(constants.c, gradient, kappa, rho, Er);
        // net gain of the radiation field per unit volume and length
        let G = -F / self.dx;
        (-G / constants.volumetric_heat_capacity(rho), G)
    }
}

impl OdeSystem<2> for RadiationHydroRegion {
    fn rhs(&self, xi: f64, y: &[f64; 2]) -> [f64; 2] {
        let s = &self.scales;
        let rho = self.density.value_at(xi);
        let (dT_dx, dEr_dx) = self.derivatives(y[0] * s.temperature, y[1] * s.radiation, rho);
        [
            dT_dx * s.length / s.temperature,
            dEr_dx * s.length / s.radiation,
        ]
    }
}

impl RegionSystem<2> for RadiationHydroRegion {
    fn initial_vector(&self, initial: &FlowState) -> [f64; 2] {
        [
            initial.temperature / self.scales.temperature,
            initial.radiation_energy / self.scales.radiation,
        ]
    }

    fn flow_state(&self, xi: f64, y: &[f64; 2]) -> FlowState {
        FlowState::new(
            self.density.value_at(xi),
            self.velocity.value_at(xi),
            y[0] * self.scales.temperature,
            y[1] * self.scales.radiation,
        )
    }
}

////////////////////////////////////////////////////////////////////////////////////////
//                         FULL (ρ, v, T, E_r)
////////////////////////////////////////////////////////////////////////////////////////

pub struct FullRadiationHydroRegion {
    pub constants: PhysicalConstants,
    pub opacity: Opacity,
    /// undisturbed upstream temperature the gas cools towards, K
    pub reference_temperature: f64,
    pub scales: RegionScales,
}

impl FullRadiationHydroRegion {
    /// The momentum equation is replaced by a constant velocity along the region.
    pub const VELOCITY_GRADIENT: f64 = 0.0;
    /// lower bound of the velocity in the energy equation, cm/s
    pub const VELOCITY_FLOOR: f64 = 1e-20;

    /// (dρ/dx, dv/dx, dT/dx, dE_r/dx) in physical units
    pub fn derivatives(&self, rho: f64, v: f64, T: f64, Er: f64) -> [f64; 4] {
        let constants = &self.constants;
        let dv_dx = Self::VELOCITY_GRADIENT;
        let drho_dx = -(rho / v) * dv_dx;
        let kappa_rho = self.opacity.kappa(T) * rho;
        if !(kappa_rho > 0.0) {
            return [drho_dx, dv_dx, 0.0, 0.0];
        }
        let G = -4.0
            * constants.a_rad
            * constants.c
            * kappa_rho
            * (T.powi(4) - self.reference_temperature.powi(4));
        let dT_dx = G / (v.max(Self::VELOCITY_FLOOR) * constants.volumetric_heat_capacity(rho));
        let dEr_dx = -3.0 * kappa_rho * Er / constants.c;
        [drho_dx, dv_dx, dT_dx, dEr_dx]
    }
}

impl OdeSystem<4> for FullRadiationHydroRegion {
    fn rhs(&self, _xi: f64, y: &[f64; 4]) -> [f64; 4] {
        let s = &self.scales;
        let d = self.derivatives(
            y[0] * s.density,
            y[1] * s.velocity,
            y[2] * s.temperature,
            y[3] * s.radiation,
        );
        [
            d[0] * s.length / s.density,
            d[1] * s.length / s.velocity,
            d[2] * s.length / s.temperature,
            d[3] * s.length / s.radiation,
        ]
    }
}

impl RegionSystem<4> for FullRadiationHydroRegion {
    fn initial_vector(&self, initial: &FlowState) -> [f64; 4] {
        let s = &self.scales;
        [
            initial.density / s.density,
            initial.velocity / s.velocity,
            initial.temperature / s.temperature,
            initial.radiation_energy / s.radiation,
        ]
    }

    fn flow_state(&self, _xi: f64, y: &[f64; 4]) -> FlowState {
        let s = &self.scales;
        FlowState::new(
            y[0] * s.density,
            y[1] * s.velocity,
            y[2] * s.temperature,
            y[3] * s.radiation,
        )
    }
}

////////////////////////////////////////////////////////////////////////////////////////
//                         REGION INTEGRATOR
////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone)]
pub struct RegionIntegrator {
    pub constants: PhysicalConstants,
    pub opacity: Opacity,
    pub limiter: FluxLimiter,
    pub solver: SolverConfig,
}

impl RegionIntegrator {
    pub fn new(
        constants: PhysicalConstants,
        opacity: Opacity,
        limiter: FluxLimiter,
        solver: SolverConfig,
    ) -> Self {
        Self {
            constants,
            opacity,
            limiter,
            solver,
        }
    }

    /// concrete method for `model` on `region`
    pub fn resolve_method(&self, region: &RegionDescriptor, model: &RegionModel) -> IntegrationMethod {
        match self.solver.method {
            IntegrationMethod::Auto => match model {
                RegionModel::Full { .. } => IntegrationMethod::Radau,
                RegionModel::RadiationHydro => {
                    if region.initial.is_in_equilibrium(&self.constants, self.solver.rtol) {
                        IntegrationMethod::Bdf
                    } else {
                        IntegrationMethod::Radau
                    }
                }
            },
            method => method,
        }
    }

    pub fn integrate(
        &self,
        region: &RegionDescriptor,
        model: RegionModel,
    ) -> Result<RegionProfile, ShockError> {
        region.validate()?;
        self.constants.validate()?;
        let method = self.resolve_method(region, &model);
        let config = SolverConfig {
            method,
            ..self.solver
        };
        info!(
            "integrating {} region [{:.3e}, {:.3e}] cm, {} samples, {}",
            region.kind,
            region.x_start,
            region.x_end,
            region.samples,
            method.name()
        );
        let scales = RegionScales::of(region, &self.constants);
        let result = match model {
            RegionModel::RadiationHydro => {
                let system = RadiationHydroRegion {
                    constants: self.constants,
                    opacity: self.opacity.clone(),
                    limiter: self.limiter,
                    density: region.density,
                    velocity: region.velocity,
                    dx: region.spacing(),
                    scales,
                };
                run_region(Arc::new(system), region, &config)
            }
            RegionModel::Full {
                reference_temperature,
            } => {
                ShockError::require_positive("reference temperature", reference_temperature)?;
                let system = FullRadiationHydroRegion {
                    constants: self.constants,
                    opacity: self.opacity.clone(),
                    reference_temperature,
                    scales,
                };
                run_region(Arc::new(system), region, &config)
            }
        };
        match result {
            Ok(profile) => {
                debug!(
                    "{} region done: {} accepted, {} rejected steps",
                    region.kind, profile.accepted_steps, profile.rejected_steps
                );
                Ok(profile)
            }
            Err(e) => {
                error!("{} region failed: {}", region.kind, e);
                Err(e)
            }
        }
    }
}

fn run_region<const N: usize, S>(
    system: Arc<S>,
    region: &RegionDescriptor,
    config: &SolverConfig,
) -> Result<RegionProfile, ShockError>
where
    S: RegionSystem<N> + Send + Sync + 'static,
{
    let n = region.samples;
    let xi: Vec<f64> = (0..n).map(|i| i as f64 / (n - 1) as f64).collect();
    let y0 = system.initial_vector(&region.initial);
    let trajectory: Trajectory<N> = integrate(Arc::clone(&system), y0, &xi, config)?;
    let states = trajectory
        .x
        .iter()
        .zip(trajectory.y.iter())
        .map(|(xi, y)| system.flow_state(*xi, y))
        .collect();
    Ok(RegionProfile {
        kind: region.kind,
        positions: region.positions(),
        states,
        method: config.method,
        accepted_steps: trajectory.accepted_steps,
        rejected_steps: trajectory.rejected_steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RadiativeShock::opacity::TabulatedOpacity;
    use approx::assert_relative_eq;

    fn transparent() -> Opacity {
        Opacity::Tabulated(TabulatedOpacity::new(vec![1.0, 1e6], vec![0.0, 0.0]).unwrap())
    }

    fn integrator(opacity: Opacity) -> RegionIntegrator {
        RegionIntegrator::new(
            PhysicalConstants::default(),
            opacity,
            FluxLimiter::default(),
            SolverConfig::default(),
        )
    }

    #[test]
    fn test_positions_hit_bounds() {
        let constants = PhysicalConstants::default();
        let initial = FlowState::in_equilibrium(1e-13, 5e6, 20.0, &constants);
        let region = RegionDescriptor::new(RegionKind::PostShock, 1e15, 1.5e15, 300, initial);
        let x = region.positions();
        assert_eq!(x.len(), 300);
        assert_eq!(x[0], 1e15);
        assert_eq!(x[299], 1.5e15);
        assert!(x.windows(2).all(|w| w[1] > w[0]));
        assert_relative_eq!(region.spacing(), 5e14 / 299.0);
    }

    #[test]
    fn test_region_validation() {
        let constants = PhysicalConstants::default();
        let initial = FlowState::in_equilibrium(1e-13, 5e6, 20.0, &constants);
        assert!(RegionDescriptor::new(RegionKind::PreShock, 0.0, 1.0, 1, initial).validate().is_err());
        assert!(RegionDescriptor::new(RegionKind::PreShock, 1.0, 0.0, 10, initial).validate().is_err());
        let falling = RegionDescriptor::new(RegionKind::PreShock, 0.0, 1.0, 10, initial)
            .with_density(FieldPolicy::Linear { start: 1e-13, end: -1e-13 });
        assert!(falling.validate().is_err());
        let bad_state = FlowState::new(-1e-13, 5e6, 20.0, 0.0);
        assert!(RegionDescriptor::new(RegionKind::PreShock, 0.0, 1.0, 10, bad_state).validate().is_err());
    }

    #[test]
    fn test_zero_opacity_keeps_radiation_constant_radiation_hydro() {
        let constants = PhysicalConstants::default();
        let er0 = constants.equilibrium_radiation_energy(111.0);
        let initial = FlowState::new(1e-13, 5e6, 20.0, er0);
        let region = RegionDescriptor::new(RegionKind::PreShock, 0.0, 1e15, 200, initial);
        let profile = integrator(transparent())
            .integrate(&region, RegionModel::RadiationHydro)
            .unwrap();
        for state in &profile.states {
            assert_relative_eq!(state.radiation_energy, er0, max_relative = 1e-14);
            assert_relative_eq!(state.temperature, 20.0, max_relative = 1e-14);
        }
    }

    #[test]
    fn test_prescribed_fields_follow_policies() {
        let constants = PhysicalConstants::default();
        let initial = FlowState::new(1e-13, 5e6, 20.0, constants.equilibrium_radiation_energy(20.0));
        let region = RegionDescriptor::new(RegionKind::PreShock, 0.0, 1e15, 11, initial)
            .with_density(FieldPolicy::Linear { start: 1e-13, end: 2e-13 })
            .with_velocity(FieldPolicy::Linear { start: 5e6, end: 2.5e6 });
        let profile = integrator(transparent())
            .integrate(&region, RegionModel::RadiationHydro)
            .unwrap();
        let mid = profile.states[5];
        assert_relative_eq!(mid.density, 1.5e-13, max_relative = 1e-12);
        assert_relative_eq!(mid.velocity, 3.75e6, max_relative = 1e-12);
        assert_relative_eq!(profile.exit_state().density, 2e-13, max_relative = 1e-12);
        assert_relative_eq!(profile.exit_state().velocity, 2.5e6, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_opacity_keeps_radiation_constant_full() {
        let constants = PhysicalConstants::default();
        let initial = FlowState::in_equilibrium(4e-18, 1.5e5, 426.0, &constants);
        let region = RegionDescriptor::new(RegionKind::PostShock, 0.0, 1e14, 100, initial);
        let profile = integrator(transparent())
            .integrate(&region, RegionModel::Full { reference_temperature: 20.0 })
            .unwrap();
        for state in &profile.states {
            assert_relative_eq!(state.radiation_energy, initial.radiation_energy, max_relative = 1e-14);
            assert_relative_eq!(state.temperature, 426.0, max_relative = 1e-14);
        }
    }

    #[test]
    fn test_equilibrium_start_stays_flat_with_bdf() {
        let constants = PhysicalConstants::default();
        let initial = FlowState::in_equilibrium(1e-13, 5e6, 20.0, &constants);
        let region = RegionDescriptor::new(RegionKind::PreShock, 0.0, 1e15, 1000, initial);
        let integrator = integrator(Opacity::reference_table());
        assert_eq!(
            integrator.resolve_method(&region, &RegionModel::RadiationHydro),
            IntegrationMethod::Bdf
        );
        let profile = integrator.integrate(&region, RegionModel::RadiationHydro).unwrap();
        assert_eq!(profile.len(), 1000);
        assert_eq!(profile.method, IntegrationMethod::Bdf);
        assert_eq!(profile.exit_state(), initial);
    }

    #[test]
    fn test_exchange_conserves_total_energy() {
        let constants = PhysicalConstants::default();
        let rho = 1e-13;
        let initial = FlowState::new(rho, 5e6, 20.0, constants.equilibrium_radiation_energy(111.0));
        let region = RegionDescriptor::new(RegionKind::PreShock, 0.0, 1e15, 1000, initial);
        let integrator = integrator(Opacity::reference_table());
        assert_eq!(
            integrator.resolve_method(&region, &RegionModel::RadiationHydro),
            IntegrationMethod::Radau
        );
        let profile = integrator.integrate(&region, RegionModel::RadiationHydro).unwrap();
        let cv = constants.volumetric_heat_capacity(rho);
        let total0 = cv * initial.temperature + initial.radiation_energy;
        for state in &profile.states {
            let total = cv * state.temperature + state.radiation_energy;
            assert_relative_eq!(total, total0, max_relative = 1e-6);
        }
        // radiation relaxes onto the gas, which warms slightly
        let exit = profile.exit_state();
        assert!(exit.temperature > 20.0);
        assert_relative_eq!(
            exit.radiation_temperature(&constants),
            exit.temperature,
            max_relative = 1e-3
        );
    }

    #[test]
    fn test_radiation_hydro_derivative_signs() {
        let constants = PhysicalConstants::default();
        let opacity = Opacity::reference_table();
        let initial = FlowState::in_equilibrium(1e-13, 5e6, 20.0, &constants);
        let region = RegionDescriptor::new(RegionKind::PreShock, 0.0, 1e15, 1000, initial);
        let system = RadiationHydroRegion {
            constants,
            opacity,
            limiter: FluxLimiter::default(),
            density: region.density,
            velocity: region.velocity,
            dx: region.spacing(),
            scales: RegionScales::of(&region, &constants),
        };
        // radiation hotter than gas: gas heats, radiation cools
        let (dT, dEr) = system.derivatives(20.0, constants.equilibrium_radiation_energy(111.0), 1e-13);
        assert!(dT > 0.0 && dEr < 0.0);
        assert_relative_eq!(dT * constants.volumetric_heat_capacity(1e-13), -dEr, max_relative = 1e-12);
        // radiation colder than gas: the reverse
        let (dT, dEr) = system.derivatives(300.0, constants.equilibrium_radiation_energy(100.0), 1e-13);
        assert!(dT < 0.0 && dEr > 0.0);
        // equilibrium: nothing happens
        let (dT, dEr) = system.derivatives(50.0, constants.equilibrium_radiation_energy(50.0), 1e-13);
        assert_eq!((dT, dEr), (0.0, 0.0));
    }

    #[test]
    fn test_full_variant_cools_towards_reference() {
        let constants = PhysicalConstants::cgs_precise();
        // dense enough for the cooling to be visible over the region
        let initial = FlowState::in_equilibrium(1e-12, 1.5e5, 426.0, &constants);
        let region = RegionDescriptor::new(RegionKind::PostShock, 0.0, 1e11, 200, initial);
        let integrator = RegionIntegrator::new(
            constants,
            Opacity::analytic(),
            FluxLimiter::default(),
            SolverConfig::default(),
        );
        let profile = integrator
            .integrate(&region, RegionModel::Full { reference_temperature: 20.0 })
            .unwrap();
        assert_eq!(profile.method, IntegrationMethod::Radau);
        for pair in profile.states.windows(2) {
            assert!(pair[1].temperature <= pair[0].temperature + 1e-9);
            assert!(pair[1].radiation_energy <= pair[0].radiation_energy * (1.0 + 1e-12));
        }
        let exit = profile.exit_state();
        assert!(exit.temperature < 426.0);
        assert!(exit.temperature > 20.0);
        assert_relative_eq!(exit.density, 1e-12, max_relative = 1e-12);
        assert_relative_eq!(exit.velocity, 1.5e5, max_relative = 1e-12);
    }
}
