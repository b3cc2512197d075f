//! # Shock structure
//!
//! Runs the three stages of a steady radiative shock in order:
//!
//! 1. pre-shock region from the undisturbed upstream state (x ∈ [0, L_pre]);
//! 2. Rankine-Hugoniot jump from the pre-shock exit temperature with the upstream density
//!    and velocity;
//! 3. post-shock region from the downstream state (x ∈ [L_pre, L_pre + L_post]).
//!
//! The two sampled regions are stitched into an immutable [`ShockProfile`]; both regions share
//! the front position, so the profile holds the upstream and the downstream side of the jump
//! at x = L_pre. Radiation temperature is `(E_r/a)^(1/4)` at every sample and the preheating
//! diagnostic is the largest `T_rad - T` over the pre-shock samples, 0 if the radiation is
//! nowhere hotter than the gas.
//!
//! An incident radiation field enters at x = 0, the far-upstream boundary of the pre-shock
//! region. The march runs downstream from there, so what it produces is a relaxation of that
//! field near the boundary, not a precursor driven by radiation leaving the front.
//!
//! Any failure (bad input, subsonic flow, non-convergence, non-physical result) aborts the run.

use super::constants::PhysicalConstants;
use super::flow_state::FlowState;
use super::flux_limiter::FluxLimiter;
use super::integrators::{IntegrationMethod, SolverConfig};
use super::opacity::Opacity;
use super::rankine_hugoniot::{RankineHugoniot, ShockJump};
use super::region::{RegionDescriptor, RegionIntegrator, RegionKind, RegionModel, RegionProfile};
use super::shock_errors::ShockError;
use log::{info, warn};
use serde::{Deserialize, Serialize};

/// Preheating smaller than this is not reported as detected, K
pub const DEFAULT_PREHEATING_THRESHOLD: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelVariant {
    /// (T, E_r), flux-limited diffusion exchange
    RadiationHydro,
    /// (ρ, v, T, E_r), closed-form cooling
    Full,
}

/// Everything a run needs
#[derive(Debug, Clone, PartialEq)]
pub struct ShockInputs {
    /// upstream density, g/cm³
    pub density: f64,
    /// upstream velocity, cm/s
    pub velocity: f64,
    /// upstream matter temperature, K
    pub temperature: f64,
    /// temperature of the radiation entering the pre-shock region, K; equilibrium with the gas if None
    pub incident_radiation_temperature: Option<f64>,
    pub pre_shock_length: f64,
    pub pre_shock_samples: usize,
    pub post_shock_length: f64,
    pub post_shock_samples: usize,
    pub model: ModelVariant,
    pub opacity: Opacity,
    pub constants: PhysicalConstants,
    pub limiter: FluxLimiter,
    pub solver: SolverConfig,
    pub preheating_threshold: f64,
}

impl Default for ShockInputs {
    /// molecular cloud accretion shock: 1e-13 g/cm³, 50 km/s, 20 K, tabulated opacity
    fn default() -> Self {
        Self {
            density: 1e-13,
            velocity: 5e6,
            temperature: 20.0,
            incident_radiation_temperature: None,
            pre_shock_length: 1e15,
            pre_shock_samples: 1000,
            post_shock_length: 5e14,
            post_shock_samples: 300,
            model: ModelVariant::RadiationHydro,
            opacity: Opacity::reference_table(),
            constants: PhysicalConstants::cgs_rounded(),
            limiter: FluxLimiter::default(),
            solver: SolverConfig::default(),
            preheating_threshold: DEFAULT_PREHEATING_THRESHOLD,
        }
    }
}

impl ShockInputs {
    /// subcritical 6 km/s shock into 1e-18 g/cm³ gas, analytic opacity, closed-form cooling
    pub fn subcritical() -> Self {
        Self {
            density: 1e-18,
            velocity: 6e5,
            temperature: 20.0,
            pre_shock_length: 1e13,
            pre_shock_samples: 100,
            post_shock_length: 1.1e14,
            post_shock_samples: 500,
            model: ModelVariant::Full,
            opacity: Opacity::analytic(),
            constants: PhysicalConstants::cgs_precise(),
            ..Self::default()
        }
    }

    /// radiation field hotter (or colder) than the gas, injected at the upstream boundary
    pub fn with_incident_radiation(mut self, radiation_temperature: f64) -> Self {
        self.incident_radiation_temperature = Some(radiation_temperature);
        self
    }

    pub fn upstream_state(&self) -> FlowState {
        let radiation_temperature = self
            .incident_radiation_temperature
            .unwrap_or(self.temperature);
        FlowState::new(
            self.density,
            self.velocity,
            self.temperature,
            self.constants
                .equilibrium_radiation_energy(radiation_temperature),
        )
    }

    pub fn region_model(&self) -> RegionModel {
        match self.model {
            ModelVariant::RadiationHydro => RegionModel::RadiationHydro,
            ModelVariant::Full => RegionModel::Full {
                reference_temperature: self.temperature,
            },
        }
    }

    pub fn validate(&self) -> Result<(), ShockError> {
        ShockError::require_positive("upstream density", self.density)?;
        ShockError::require_positive("upstream velocity", self.velocity)?;
        ShockError::require_positive("upstream temperature", self.temperature)?;
        if let Some(T_rad) = self.incident_radiation_temperature {
            ShockError::require_positive("incident radiation temperature", T_rad)?;
        }
        ShockError::require_positive("pre-shock length", self.pre_shock_length)?;
        ShockError::require_positive("post-shock length", self.post_shock_length)?;
        if self.pre_shock_samples < 2 || self.post_shock_samples < 2 {
            return Err(ShockError::InvalidConfiguration(format!(
                "each region needs at least 2 samples, got {} and {}",
                self.pre_shock_samples, self.post_shock_samples
            )));
        }
        if !(self.preheating_threshold.is_finite() && self.preheating_threshold >= 0.0) {
            return Err(ShockError::InvalidConfiguration(format!(
                "preheating threshold must be non-negative, got {}",
                self.preheating_threshold
            )));
        }
        self.constants.validate()?;
        self.solver.validate()?;
        FluxLimiter::new(self.limiter.regularization)?;
        Ok(())
    }
}

/// One sample of the stitched profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfilePoint {
    pub x: f64,
    pub matter_temperature: f64,
    pub radiation_temperature: f64,
    pub radiation_energy: f64,
    pub density: f64,
    pub velocity: f64,
    pub region: RegionKind,
}

impl ProfilePoint {
    pub fn from_state(x: f64, state: &FlowState, region: RegionKind, constants: &PhysicalConstants) -> Self {
        Self {
            x,
            matter_temperature: state.temperature,
            radiation_temperature: state.radiation_temperature(constants),
            radiation_energy: state.radiation_energy,
            density: state.density,
            velocity: state.velocity,
            region,
        }
    }

    /// T_rad - T
    pub fn temperature_difference(&self) -> f64 {
        self.radiation_temperature - self.matter_temperature
    }
}

/// Largest radiation-minus-matter temperature difference ahead of the front.
///
/// `max_difference` is never negative: where the radiation is nowhere hotter than the gas it
/// is 0 and `location` is None.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Preheating {
    pub max_difference: f64,
    /// (sample index, x in cm) of the first maximum
    pub location: Option<(usize, f64)>,
}

impl Preheating {
    pub fn none() -> Self {
        Self {
            max_difference: 0.0,
            location: None,
        }
    }

    pub fn position(&self) -> Option<f64> {
        self.location.map(|(_, x)| x)
    }

    pub fn index(&self) -> Option<usize> {
        self.location.map(|(i, _)| i)
    }

    pub fn is_detected(&self, threshold: f64) -> bool {
        self.max_difference > threshold
    }
}

/// Stitched pre-shock + post-shock samples in spatial order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShockProfile {
    points: Vec<ProfilePoint>,
    /// index of the first post-shock sample
    shock_index: usize,
}

impl ShockProfile {
    /// Builds a profile from samples: pre-shock samples first, then post-shock, positions
    /// non-decreasing, physical temperatures and radiation energies.
    pub fn from_points(points: Vec<ProfilePoint>) -> Result<Self, ShockError> {
        let shock_index = points
            .iter()
            .position(|p| p.region == RegionKind::PostShock)
            .unwrap_or(points.len());
        if shock_index == 0 || shock_index == points.len() {
            return Err(ShockError::InvalidConfiguration(
                "profile needs both pre-shock and post-shock samples".to_string(),
            ));
        }
        if points[shock_index..]
            .iter()
            .any(|p| p.region != RegionKind::PostShock)
        {
            return Err(ShockError::InvalidConfiguration(
                "pre-shock samples must precede post-shock samples".to_string(),
            ));
        }
        if let Some(pair) = points.windows(2).find(|w| !(w[1].x >= w[0].x)) {
            return Err(ShockError::InvalidConfiguration(format!(
                "positions must be non-decreasing, {} is followed by {}",
                pair[0].x, pair[1].x
            )));
        }
        for p in &points {
            if !(p.matter_temperature.is_finite() && p.matter_temperature > 0.0) {
                return Err(ShockError::NonPhysicalProfile {
                    position: p.x,
                    detail: format!("matter temperature {}", p.matter_temperature),
                });
            }
            if !(p.radiation_energy.is_finite() && p.radiation_energy >= 0.0) {
                return Err(ShockError::NonPhysicalProfile {
                    position: p.x,
                    detail: format!("radiation energy density {}", p.radiation_energy),
                });
            }
        }
        Ok(Self {
            points,
            shock_index,
        })
    }

    /// stitches two region profiles, computing radiation temperatures
    pub fn assemble(
        pre: &RegionProfile,
        post: &RegionProfile,
        constants: &PhysicalConstants,
    ) -> Result<Self, ShockError> {
        let points = [pre, post]
            .iter()
            .flat_map(|region| {
                region
                    .positions
                    .iter()
                    .zip(region.states.iter())
                    .map(move |(x, state)| ProfilePoint::from_state(*x, state, region.kind, constants))
            })
            .collect();
        Self::from_points(points)
    }

    pub fn points(&self) -> &[ProfilePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn pre_shock(&self) -> &[ProfilePoint] {
        &self.points[..self.shock_index]
    }

    pub fn post_shock(&self) -> &[ProfilePoint] {
        &self.points[self.shock_index..]
    }

    /// position of the front (first post-shock sample)
    pub fn shock_position(&self) -> f64 {
        self.points[self.shock_index].x
    }

    pub fn positions(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    pub fn matter_temperatures(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.matter_temperature).collect()
    }

    pub fn radiation_temperatures(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.radiation_temperature).collect()
    }

    /// largest positive T_rad - T over the pre-shock samples, first occurrence on ties
    pub fn preheating(&self) -> Preheating {
        let mut best = Preheating::none();
        for (index, p) in self.pre_shock().iter().enumerate() {
            let difference = p.temperature_difference();
            if difference > best.max_difference {
                best = Preheating {
                    max_difference: difference,
                    location: Some((index, p.x)),
                };
            }
        }
        best
    }

    /// sample with the highest matter temperature
    pub fn peak_matter_temperature(&self) -> &ProfilePoint {
        let mut peak = &self.points[0];
        for p in &self.points {
            if p.matter_temperature > peak.matter_temperature {
                peak = p;
            }
        }
        peak
    }
}

/// Result of a run
#[derive(Debug, Clone, PartialEq)]
pub struct ShockStructure {
    pub profile: ShockProfile,
    pub jump: ShockJump,
    pub preheating: Preheating,
    pub preheating_detected: bool,
    pub pre_shock_method: IntegrationMethod,
    pub post_shock_method: IntegrationMethod,
    pub steps: usize,
}

#[derive(Debug, Clone)]
pub struct ShockStructureSolver {
    pub inputs: ShockInputs,
}

impl ShockStructureSolver {
    pub fn new(inputs: ShockInputs) -> Self {
        Self { inputs }
    }

    pub fn solve(&self) -> Result<ShockStructure, ShockError> {
        let inputs = &self.inputs;
        inputs.validate()?;
        let constants = inputs.constants;
        let integrator = RegionIntegrator::new(
            constants,
            inputs.opacity.clone(),
            inputs.limiter,
            inputs.solver,
        );
        let model = inputs.region_model();
        info!(
            "radiative shock: rho = {:.3e} g/cm3, v = {:.3e} cm/s, T = {} K, {:?} model",
            inputs.density, inputs.velocity, inputs.temperature, inputs.model
        );

        // 1. pre-shock
        let upstream = inputs.upstream_state();
        let pre_region = RegionDescriptor::new(
            RegionKind::PreShock,
            0.0,
            inputs.pre_shock_length,
            inputs.pre_shock_samples,
            upstream,
        );
        let pre = integrator.integrate(&pre_region, model)?;

        // 2. jump
        let exit = pre.exit_state();
        let jump = RankineHugoniot::new(constants).jump(exit.temperature, inputs.density, inputs.velocity)?;
        info!(
            "jump at x = {:.3e} cm: M = {:.3}, r = {:.4}, T {:.3} K -> {:.3} K",
            inputs.pre_shock_length,
            jump.mach,
            jump.compression,
            exit.temperature,
            jump.downstream.temperature
        );

        // 3. post-shock
        let post_region = RegionDescriptor::new(
            RegionKind::PostShock,
            inputs.pre_shock_length,
            inputs.pre_shock_length + inputs.post_shock_length,
            inputs.post_shock_samples,
            jump.downstream,
        );
        let post = integrator.integrate(&post_region, model)?;

        let profile = ShockProfile::assemble(&pre, &post, &constants)?;
        let preheating = profile.preheating();
        let preheating_detected = preheating.is_detected(inputs.preheating_threshold);
        if let (true, Some(x)) = (preheating_detected, preheating.position()) {
            info!(
                "preheating: max T_rad - T = {:.3} K at x = {:.3e} cm",
                preheating.max_difference, x
            );
        } else {
            warn!(
                "no preheating above {} K (max T_rad - T = {:.3e} K)",
                inputs.preheating_threshold, preheating.max_difference
            );
        }
        Ok(ShockStructure {
            profile,
            jump,
            preheating,
            preheating_detected,
            pre_shock_method: pre.method,
            post_shock_method: post.method,
            steps: pre.accepted_steps + pre.rejected_steps + post.accepted_steps + post.rejected_steps,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn point(x: f64, T: f64, T_rad: f64, region: RegionKind) -> ProfilePoint {
        let constants = PhysicalConstants::default();
        ProfilePoint {
            x,
            matter_temperature: T,
            radiation_temperature: T_rad,
            radiation_energy: constants.equilibrium_radiation_energy(T_rad),
            density: 1e-13,
            velocity: 5e6,
            region,
        }
    }

    #[test]
    fn test_profile_rejects_misordered_samples() {
        use RegionKind::*;
        assert!(ShockProfile::from_points(vec![point(0.0, 20.0, 20.0, PreShock)]).is_err());
        assert!(
            ShockProfile::from_points(vec![
                point(1.0, 20.0, 20.0, PreShock),
                point(0.0, 20.0, 20.0, PostShock)
            ])
            .is_err()
        );
        assert!(
            ShockProfile::from_points(vec![
                point(0.0, 20.0, 20.0, PreShock),
                point(1.0, 20.0, 20.0, PostShock),
                point(2.0, 20.0, 20.0, PreShock)
            ])
            .is_err()
        );
        assert!(
            ShockProfile::from_points(vec![
                point(0.0, -20.0, 20.0, PreShock),
                point(1.0, 20.0, 20.0, PostShock)
            ])
            .is_err()
        );
    }

    #[test]
    fn test_preheating_picks_first_maximum() {
        use RegionKind::*;
        let profile = ShockProfile::from_points(vec![
            point(0.0, 20.0, 25.0, PreShock),
            point(1.0, 20.0, 31.0, PreShock),
            point(2.0, 20.0, 31.0, PreShock),
            point(3.0, 20.0, 22.0, PreShock),
            // large differences behind the front are ignored
            point(3.0, 700.0, 900.0, PostShock),
        ])
        .unwrap();
        let preheating = profile.preheating();
        assert_relative_eq!(preheating.max_difference, 11.0);
        assert_eq!(preheating.position(), Some(1.0));
        assert_eq!(preheating.index(), Some(1));
        assert!(preheating.is_detected(5.0));
        assert!(!preheating.is_detected(11.0));
        assert_eq!(profile.shock_position(), 3.0);
        assert_eq!(profile.peak_matter_temperature().matter_temperature, 700.0);
    }

    #[test]
    fn test_preheating_is_zero_when_radiation_is_colder() {
        use RegionKind::*;
        let profile = ShockProfile::from_points(vec![
            point(0.0, 300.0, 100.0, PreShock),
            point(1.0, 250.0, 120.0, PreShock),
            point(2.0, 700.0, 900.0, PostShock),
        ])
        .unwrap();
        let preheating = profile.preheating();
        assert_eq!(preheating, Preheating::none());
        assert_eq!(preheating.max_difference, 0.0);
        assert_eq!(preheating.position(), None);
        assert!(!preheating.is_detected(0.0));
    }

    #[test]
    fn test_inputs_validation() {
        assert!(ShockInputs::default().validate().is_ok());
        assert!(ShockInputs::subcritical().validate().is_ok());
        let mut inputs = ShockInputs::default();
        inputs.density = 0.0;
        assert!(matches!(inputs.validate(), Err(ShockError::NonPositiveInput { .. })));
        let mut inputs = ShockInputs::default();
        inputs.post_shock_samples = 1;
        assert!(inputs.validate().is_err());
        let inputs = ShockInputs::default().with_incident_radiation(-1.0);
        assert!(inputs.validate().is_err());
        let mut inputs = ShockInputs::default();
        inputs.limiter.regularization = 0.0;
        assert!(inputs.validate().is_err());
    }

    #[test]
    fn test_upstream_state_radiation() {
        let inputs = ShockInputs::default();
        let constants = inputs.constants;
        assert!(inputs.upstream_state().is_in_equilibrium(&constants, 1e-14));
        let hot = inputs.with_incident_radiation(111.0).upstream_state();
        assert_relative_eq!(hot.radiation_temperature(&constants), 111.0, max_relative = 1e-12);
        assert_eq!(hot.temperature, 20.0);
    }
}
