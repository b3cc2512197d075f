//! # Sampling adapter over the RustedSciThe IVP solvers
//!
//! Integrates small fixed-size systems `dy/dx = f(x, y)`, `y ∈ ℝᴺ`, and reports the solution
//! at requested sample positions. The stepping itself is done by the implicit solvers of
//! `RustedSciThe`; this module only
//! - wraps an [`OdeSystem`] into the `Fn(f64, &DVector<f64>) -> DVector<f64>` callback the
//!   solvers take (the Jacobian is left to their finite-difference routes),
//! - restarts the solver on every interval between two consecutive samples, so each sample
//!   is hit exactly and no interpolation is involved,
//! - counts step attempts over the whole sample range against `max_steps`,
//! - turns solver failures and non-finite states into [`ShockError`].
//!
//! ## Methods
//!
//! | Method | Solver | Order | Notes |
//! |--------|--------|-------|-------|
//! | `Bdf` | `BDF::BDF_solver::BDF` | variable, 1-5 | cheap on smooth, slowly varying regions |
//! | `Radau` | `Radau::RadauNativeSolver` | 5 (Radau IIA) | L-stable, for stiff radiation-matter exchange |
//!
//! `IntegrationMethod::Auto` is resolved by the caller (see region integration); passed
//! directly it falls back to Radau.
//!
//! Finite-difference increments of both solvers assume O(1) states; callers integrate in
//! dimensionless variables.

use super::shock_errors::ShockError;
use RustedSciThe::numerical::BDF::BDF_solver::{BDF, BdfStepError};
use RustedSciThe::numerical::BDF::common::NumberOrVec;
use RustedSciThe::numerical::Radau::{RadauConfig, RadauError, RadauErrorKind, RadauNativeSolver};
use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Right-hand side of a fixed-size first-order system
pub trait OdeSystem<const N: usize> {
    fn rhs(&self, x: f64, y: &[f64; N]) -> [f64; N];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntegrationMethod {
    /// chosen by the caller from the problem (see region integration)
    Auto,
    Bdf,
    Radau,
}

impl IntegrationMethod {
    pub fn name(&self) -> &'static str {
        match self {
            IntegrationMethod::Auto => "auto",
            IntegrationMethod::Bdf => "BDF",
            IntegrationMethod::Radau => "Radau IIA",
        }
    }
}

/// Configuration of the solvers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    pub method: IntegrationMethod,
    /// relative tolerance
    pub rtol: f64,
    /// absolute tolerance (applies to dimensionless variables)
    pub atol: f64,
    /// budget of step attempts per integration
    pub max_steps: usize,
    /// initial step of every sample interval it fits in; estimated by the solver if None
    pub first_step: Option<f64>,
    /// upper bound of the step; unbounded if None
    pub max_step: Option<f64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            method: IntegrationMethod::Auto,
            rtol: 1e-6,
            atol: 1e-8,
            max_steps: 100_000,
            first_step: None,
            max_step: None,
        }
    }
}

impl SolverConfig {
    pub fn new(method: IntegrationMethod, rtol: f64, atol: f64, max_steps: usize) -> Self {
        Self {
            method,
            rtol,
            atol,
            max_steps,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ShockError> {
        if !(self.rtol.is_finite() && self.rtol > 0.0) {
            return Err(ShockError::InvalidConfiguration(format!(
                "relative tolerance must be positive, got {}",
                self.rtol
            )));
        }
        if !(self.atol.is_finite() && self.atol > 0.0) {
            return Err(ShockError::InvalidConfiguration(format!(
                "absolute tolerance must be positive, got {}",
                self.atol
            )));
        }
        if self.max_steps == 0 {
            return Err(ShockError::InvalidConfiguration(
                "step budget must be at least 1".to_string(),
            ));
        }
        for (name, step) in [("first_step", self.first_step), ("max_step", self.max_step)] {
            if let Some(h) = step {
                if !(h.is_finite() && h > 0.0) {
                    return Err(ShockError::InvalidConfiguration(format!(
                        "{} must be positive, got {}",
                        name, h
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Solution at the sample positions
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory<const N: usize> {
    pub x: Vec<f64>,
    pub y: Vec<[f64; N]>,
    pub accepted_steps: usize,
    pub rejected_steps: usize,
}

impl<const N: usize> Trajectory<N> {
    pub fn last(&self) -> Option<&[f64; N]> {
        self.y.last()
    }

    fn attempts(&self) -> usize {
        self.accepted_steps + self.rejected_steps
    }
}

type Residual = dyn Fn(f64, &DVector<f64>) -> DVector<f64> + Send + Sync;

/// `system` as the callback taken by the solvers
fn residual<const N: usize, S>(system: &Arc<S>) -> Arc<Residual>
where
    S: OdeSystem<N> + Send + Sync + 'static,
{
    let system = Arc::clone(system);
    Arc::new(move |x: f64, y: &DVector<f64>| {
        let mut state = [0.0; N];
        state.copy_from_slice(y.as_slice());
        DVector::from_column_slice(&system.rhs(x, &state))
    })
}

fn to_array<const N: usize>(y: &[f64], position: f64) -> Result<[f64; N], ShockError> {
    if y.len() != N || y.iter().any(|v| !v.is_finite()) {
        return Err(ShockError::NonFiniteState { position });
    }
    let mut out = [0.0; N];
    out.copy_from_slice(y);
    Ok(out)
}

fn radau_failure(error: RadauError, position: f64, max_steps: usize) -> ShockError {
    match error.kind() {
        RadauErrorKind::StepBudget => ShockError::NonConvergence {
            max_steps,
            position,
        },
        RadauErrorKind::StepUnderflow => ShockError::StepSizeUnderflow { position },
        RadauErrorKind::LinearSolve => ShockError::SingularIterationMatrix { position },
        RadauErrorKind::NonFiniteCallback => ShockError::NonFiniteState { position },
        _ => ShockError::SolverFailure {
            method: IntegrationMethod::Radau.name().to_string(),
            position,
            message: error.to_string(),
        },
    }
}

fn bdf_failure(error: BdfStepError, position: f64) -> ShockError {
    match error {
        BdfStepError::StepSizeUnderflow => ShockError::StepSizeUnderflow { position },
        BdfStepError::LinearSolveFailure => ShockError::SingularIterationMatrix { position },
        BdfStepError::NonFiniteRhs | BdfStepError::NonFiniteJacobian => {
            ShockError::NonFiniteState { position }
        }
        _ => ShockError::SolverFailure {
            method: IntegrationMethod::Bdf.name().to_string(),
            position,
            message: error.to_string(),
        },
    }
}

/// One solver instance stepping from sample to sample
enum SampleStepper {
    Radau(RadauNativeSolver),
    Bdf(Arc<Residual>),
}

impl SampleStepper {
    fn new(
        method: IntegrationMethod,
        rhs: Arc<Residual>,
        samples: &[f64],
        config: &SolverConfig,
    ) -> Result<Self, ShockError> {
        match method {
            IntegrationMethod::Bdf => Ok(SampleStepper::Bdf(rhs)),
            IntegrationMethod::Radau | IntegrationMethod::Auto => {
                let shortest = samples
                    .windows(2)
                    .map(|w| w[1] - w[0])
                    .fold(f64::INFINITY, f64::min);
                let radau_config = RadauConfig {
                    t0: samples[0],
                    t_bound: samples[1],
                    rtol: config.rtol,
                    atol: config.atol,
                    first_step: config.first_step.filter(|h| *h <= shortest),
                    max_step: config.max_step.unwrap_or(f64::INFINITY),
                    max_steps: config.max_steps,
                    ..RadauConfig::default()
                };
                let solver = RadauNativeSolver::prepare(
                    radau_config,
                    move |x: f64, y: &DVector<f64>| rhs(x, y),
                    None::<fn(f64, &DVector<f64>) -> DMatrix<f64>>,
                )
                .map_err(|e| radau_failure(e, samples[0], config.max_steps))?;
                Ok(SampleStepper::Radau(solver))
            }
        }
    }

    /// state at `end` from `y` at `start`; step counts are added to `trajectory`
    fn advance<const N: usize>(
        &mut self,
        y: &[f64; N],
        start: f64,
        end: f64,
        config: &SolverConfig,
        trajectory: &mut Trajectory<N>,
    ) -> Result<[f64; N], ShockError> {
        match self {
            SampleStepper::Radau(solver) => {
                solver
                    .restart(start, end)
                    .map_err(|e| radau_failure(e, start, config.max_steps))?;
                let solution = solver
                    .solve(y)
                    .map_err(|e| radau_failure(e, start, config.max_steps))?;
                trajectory.accepted_steps += solution.accepted_steps;
                trajectory.rejected_steps += solution.rejected_steps;
                to_array(&solution.y, end)
            }
            SampleStepper::Bdf(rhs) => {
                let rhs = Arc::clone(rhs);
                let span = end - start;
                let mut bdf = BDF::new();
                bdf.set_operation_counters_enabled(true);
                bdf.try_set_initial(
                    Box::new(move |x: f64, y: &DVector<f64>| rhs(x, y)),
                    start,
                    DVector::from_column_slice(y),
                    end,
                    config.max_step.unwrap_or(f64::INFINITY),
                    NumberOrVec::Number(config.rtol),
                    NumberOrVec::Number(config.atol),
                    None,
                    None,
                    false,
                    config.first_step.filter(|h| *h <= span),
                )
                .map_err(|e| ShockError::SolverFailure {
                    method: IntegrationMethod::Bdf.name().to_string(),
                    position: start,
                    message: e.to_string(),
                })?;
                let used = trajectory.attempts();
                while bdf.t < end {
                    let counters = bdf.operation_counters();
                    if used + counters.accepted_steps + counters.rejected_step_attempts
                        >= config.max_steps
                    {
                        return Err(ShockError::NonConvergence {
                            max_steps: config.max_steps,
                            position: bdf.t,
                        });
                    }
                    if let (_, Some(failure)) = bdf._step_impl() {
                        return Err(bdf_failure(failure, bdf.t));
                    }
                }
                let counters = bdf.operation_counters();
                trajectory.accepted_steps += counters.accepted_steps;
                trajectory.rejected_steps += counters.rejected_step_attempts;
                to_array(bdf.y.as_slice(), end)
            }
        }
    }
}

/// Integrates `system` from `samples[0]` through every sample (strictly increasing positions).
pub fn integrate<const N: usize, S>(
    system: Arc<S>,
    y0: [f64; N],
    samples: &[f64],
    config: &SolverConfig,
) -> Result<Trajectory<N>, ShockError>
where
    S: OdeSystem<N> + Send + Sync + 'static,
{
    config.validate()?;
    if samples.len() < 2 {
        return Err(ShockError::InvalidConfiguration(
            "at least two sample positions are required".to_string(),
        ));
    }
    if samples.windows(2).any(|w| !(w[1] > w[0])) || samples.iter().any(|s| !s.is_finite()) {
        return Err(ShockError::InvalidConfiguration(
            "sample positions must be finite and strictly increasing".to_string(),
        ));
    }
    if y0.iter().any(|v| !v.is_finite()) {
        return Err(ShockError::NonFiniteState {
            position: samples[0],
        });
    }

    let mut stepper = SampleStepper::new(config.method, residual(&system), samples, config)?;
    let mut trajectory = Trajectory {
        x: Vec::with_capacity(samples.len()),
        y: Vec::with_capacity(samples.len()),
        accepted_steps: 0,
        rejected_steps: 0,
    };
    trajectory.x.push(samples[0]);
    trajectory.y.push(y0);

    let mut y = y0;
    for w in samples.windows(2) {
        let (start, end) = (w[0], w[1]);
        y = stepper.advance(&y, start, end, config, &mut trajectory)?;
        if trajectory.attempts() > config.max_steps {
            return Err(ShockError::NonConvergence {
                max_steps: config.max_steps,
                position: end,
            });
        }
        trajectory.x.push(end);
        trajectory.y.push(y);
    }
    Ok(trajectory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    struct Decay {
        rate: f64,
    }

    impl OdeSystem<1> for Decay {
        fn rhs(&self, _x: f64, y: &[f64; 1]) -> [f64; 1] {
            [-self.rate * y[0]]
        }
    }

    struct Oscillator;

    impl OdeSystem<2> for Oscillator {
        fn rhs(&self, _x: f64, y: &[f64; 2]) -> [f64; 2] {
            [y[1], -y[0]]
        }
    }

    /// right-hand side undefined past x = 1
    struct LogBarrier;

    impl OdeSystem<1> for LogBarrier {
        fn rhs(&self, x: f64, _y: &[f64; 1]) -> [f64; 1] {
            [(1.0 - x).ln()]
        }
    }

    /// dy/dx = -k (y - cos x): stiff relaxation onto a slowly varying manifold
    struct Relaxation {
        k: f64,
    }

    impl OdeSystem<1> for Relaxation {
        fn rhs(&self, x: f64, y: &[f64; 1]) -> [f64; 1] {
            [-self.k * (y[0] - x.cos())]
        }
    }

    fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| start + (end - start) * i as f64 / (n - 1) as f64)
            .collect()
    }

    #[test]
    fn test_radau_exponential_decay() {
        let samples = linspace(0.0, 5.0, 6);
        let config = SolverConfig::new(IntegrationMethod::Radau, 1e-8, 1e-10, 10_000);
        let result = integrate(Arc::new(Decay { rate: 1.0 }), [1.0], &samples, &config).unwrap();
        assert_eq!(result.x, samples);
        for (x, y) in result.x.iter().zip(result.y.iter()) {
            assert_relative_eq!(y[0], (-x).exp(), epsilon = 1e-6);
        }
        assert!(result.accepted_steps >= 5);
    }

    #[test]
    fn test_bdf_exponential_decay() {
        let samples = linspace(0.0, 5.0, 11);
        let config = SolverConfig::new(IntegrationMethod::Bdf, 1e-6, 1e-8, 100_000);
        let result = integrate(Arc::new(Decay { rate: 1.0 }), [1.0], &samples, &config).unwrap();
        assert_eq!(result.x, samples);
        for (x, y) in result.x.iter().zip(result.y.iter()) {
            assert_relative_eq!(y[0], (-x).exp(), epsilon = 1e-4);
        }
    }

    #[test]
    fn test_oscillator_period() {
        let period = 2.0 * std::f64::consts::PI;
        let samples = linspace(0.0, period, 5);
        let config = SolverConfig::new(IntegrationMethod::Radau, 1e-9, 1e-12, 100_000);
        let result = integrate(Arc::new(Oscillator), [1.0, 0.0], &samples, &config).unwrap();
        let last = result.last().unwrap();
        assert_relative_eq!(last[0], 1.0, epsilon = 1e-5);
        assert_relative_eq!(last[1], 0.0, epsilon = 1e-5);
        // quarter period
        assert_relative_eq!(result.y[1][0], 0.0, epsilon = 1e-5);
        assert_relative_eq!(result.y[1][1], -1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_radau_handles_stiff_relaxation() {
        let samples = linspace(0.0, 10.0, 21);
        let config = SolverConfig::new(IntegrationMethod::Radau, 1e-6, 1e-8, 100_000);
        let result = integrate(Arc::new(Relaxation { k: 1e4 }), [2.0], &samples, &config).unwrap();
        assert!(result.accepted_steps < 20_000);
        // after the initial layer the solution follows cos x with lag ~ sin(x)/k
        for (x, y) in result.x.iter().zip(result.y.iter()).skip(1) {
            assert_relative_eq!(y[0], x.cos(), epsilon = 1e-3);
        }
    }

    #[test]
    fn test_step_budget_enforced_across_samples() {
        let samples = linspace(0.0, 10.0, 3);
        for method in [IntegrationMethod::Radau, IntegrationMethod::Bdf] {
            let config = SolverConfig::new(method, 1e-6, 1e-8, 4);
            let result = integrate(Arc::new(Relaxation { k: 1e4 }), [2.0], &samples, &config);
            match result {
                Err(ShockError::NonConvergence { max_steps, .. }) => assert_eq!(max_steps, 4),
                other => panic!("expected non-convergence with {:?}, got {:?}", method, other),
            }
        }
    }

    #[test]
    fn test_undefined_right_hand_side_fails() {
        let samples = linspace(0.0, 2.0, 3);
        let config = SolverConfig::new(IntegrationMethod::Radau, 1e-6, 1e-8, 5_000);
        let err = integrate(Arc::new(LogBarrier), [0.0], &samples, &config).unwrap_err();
        assert!(err.is_numerical());
    }

    #[test]
    fn test_constant_solution_is_exact() {
        let samples = linspace(0.0, 1.0, 500);
        for method in [IntegrationMethod::Radau, IntegrationMethod::Bdf] {
            let config = SolverConfig::new(method, 1e-6, 1e-8, 100_000);
            let result = integrate(Arc::new(Decay { rate: 0.0 }), [3.0], &samples, &config).unwrap();
            assert!(result.y.iter().all(|y| y[0] == 3.0));
            assert_eq!(result.x.len(), 500);
            assert_eq!(result.x[499], 1.0);
        }
    }

    #[test]
    fn test_rejects_bad_samples_and_config() {
        let config = SolverConfig::default();
        let decay = Arc::new(Decay { rate: 1.0 });
        assert!(integrate(decay.clone(), [1.0], &[0.0], &config).is_err());
        assert!(integrate(decay.clone(), [1.0], &[0.0, 1.0, 1.0], &config).is_err());
        assert!(integrate(decay, [f64::NAN], &[0.0, 1.0], &config).is_err());
        let mut bad = SolverConfig::default();
        bad.rtol = 0.0;
        assert!(bad.validate().is_err());
        bad = SolverConfig::default();
        bad.max_steps = 0;
        assert!(bad.validate().is_err());
        bad = SolverConfig::default();
        bad.first_step = Some(-1.0);
        assert!(bad.validate().is_err());
    }
}
