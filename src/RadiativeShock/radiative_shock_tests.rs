#[cfg(test)]
mod tests {
    use crate::RadiativeShock::integrators::{IntegrationMethod, SolverConfig};
    use crate::RadiativeShock::rankine_hugoniot::RankineHugoniot;
    use crate::RadiativeShock::region::RegionKind;
    use crate::RadiativeShock::shock_errors::ShockError;
    use crate::RadiativeShock::shock_structure::{ShockInputs, ShockStructureSolver};
    use crate::RadiativeShock::task_io::ShockTask;
    use crate::RadiativeShock::validation::{canonical_zones, validate_profile};
    use approx::assert_relative_eq;

    #[test]
    fn test_equilibrium_reference_run() {
        let inputs = ShockInputs::default();
        let result = ShockStructureSolver::new(inputs.clone()).solve().unwrap();
        let profile = &result.profile;

        assert_eq!(profile.len(), 1300);
        assert_eq!(profile.pre_shock().len(), 1000);
        assert_eq!(profile.post_shock().len(), 300);
        assert!(profile.positions().windows(2).all(|w| w[1] >= w[0]));
        assert_eq!(profile.shock_position(), 1e15);
        assert_eq!(profile.points().last().unwrap().x, 1.5e15);

        // gas and radiation start in equilibrium: nothing happens ahead of the front
        assert_eq!(result.pre_shock_method, IntegrationMethod::Bdf);
        for p in profile.pre_shock() {
            assert_relative_eq!(p.matter_temperature, 20.0, max_relative = 1e-12);
            assert_relative_eq!(p.radiation_temperature, 20.0, max_relative = 1e-12);
        }
        assert!(result.preheating.max_difference < 1e-9);
        assert!(!result.preheating_detected);

        // strong shock: M ≈ 67, r → 4, T2 ≈ 3v²/(16 R)
        let jump = &result.jump;
        assert_relative_eq!(jump.mach, 67.4, max_relative = 1e-2);
        assert_relative_eq!(jump.compression, 4.0, max_relative = 1e-2);
        assert_relative_eq!(jump.downstream.temperature, 28_400.0, max_relative = 2e-2);
        assert!(jump.mass_flux_mismatch() < 1e-12);
        let first_post = profile.post_shock()[0];
        assert_eq!(first_post.region, RegionKind::PostShock);
        assert_eq!(first_post.matter_temperature, jump.downstream.temperature);
        assert_relative_eq!(first_post.density, 4.0e-13, max_relative = 1e-2);
        assert_eq!(profile.peak_matter_temperature().matter_temperature, jump.downstream.temperature);

        // the downstream state is in LTE as well
        assert_eq!(result.post_shock_method, IntegrationMethod::Bdf);
        for p in profile.post_shock() {
            assert_relative_eq!(p.matter_temperature, jump.downstream.temperature, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_jump_uses_pre_shock_exit_temperature() {
        let inputs = ShockInputs::default().with_incident_radiation(111.0);
        let result = ShockStructureSolver::new(inputs.clone()).solve().unwrap();
        let exit = result.profile.pre_shock().last().unwrap().matter_temperature;
        let expected = RankineHugoniot::new(inputs.constants)
            .jump(exit, inputs.density, inputs.velocity)
            .unwrap();
        assert_eq!(result.jump.downstream.temperature, expected.downstream.temperature);
        assert_eq!(result.jump.upstream.temperature, exit);
    }

    #[test]
    fn test_incident_radiation_relaxes_from_upstream_boundary() {
        let inputs = ShockInputs::default().with_incident_radiation(111.0);
        let constants = inputs.constants;
        let result = ShockStructureSolver::new(inputs.clone()).solve().unwrap();
        let pre = result.profile.pre_shock();

        assert_eq!(result.pre_shock_method, IntegrationMethod::Radau);
        // the largest difference is the injected field itself, at the far-upstream boundary
        assert!(result.preheating_detected);
        assert_eq!(result.preheating.location, Some((0, 0.0)));
        assert_relative_eq!(result.preheating.max_difference, 91.0, max_relative = 1e-9);

        // the boundary transient has died out well before the front
        let last = pre.last().unwrap();
        assert!(last.temperature_difference().abs() < 1.0);
        assert!(last.matter_temperature >= 20.0 && last.matter_temperature < 20.1);

        // gas gains what the radiation loses
        let cv = constants.volumetric_heat_capacity(inputs.density);
        let energy = |T: f64, Er: f64| cv * T + Er;
        assert_relative_eq!(
            energy(last.matter_temperature, last.radiation_energy),
            energy(pre[0].matter_temperature, pre[0].radiation_energy),
            max_relative = 1e-6
        );
    }

    #[test]
    fn test_subcritical_full_model() {
        let inputs = ShockInputs::subcritical();
        let result = ShockStructureSolver::new(inputs).solve().unwrap();
        assert_relative_eq!(result.jump.mach, 8.088, max_relative = 1e-3);
        assert_relative_eq!(result.jump.downstream.temperature, 426.3, max_relative = 2e-3);
        assert_eq!(result.post_shock_method, IntegrationMethod::Radau);

        let post = result.profile.post_shock();
        assert_eq!(post.len(), 500);
        // radiative cooling towards the upstream temperature
        for w in post.windows(2) {
            assert!(w[1].matter_temperature <= w[0].matter_temperature * (1.0 + 1e-9));
            assert_relative_eq!(w[1].velocity, w[0].velocity, max_relative = 1e-10);
            assert_relative_eq!(w[1].density, w[0].density, max_relative = 1e-10);
        }
        let last = post.last().unwrap().matter_temperature;
        assert!(last < 0.5 * result.jump.downstream.temperature);
        assert!(last > 19.9);
        assert!(!result.preheating_detected);

        // every canonical zone is measured on the run
        let zones = canonical_zones();
        let report = validate_profile(&result.profile, &zones);
        assert_eq!(report.verdicts.len(), zones.len());
        let peak = report
            .verdicts
            .iter()
            .find(|v| v.zone.name == "shock peak")
            .unwrap();
        assert_eq!(
            peak.matter_temperature,
            result.profile.peak_matter_temperature().matter_temperature
        );
        assert_eq!(peak.matter_temperature, result.jump.downstream.temperature);
    }

    #[test]
    fn test_subsonic_inflow_is_rejected() {
        let mut inputs = ShockInputs::default();
        inputs.velocity = 1e4;
        let err = ShockStructureSolver::new(inputs).solve().unwrap_err();
        assert!(matches!(err, ShockError::SubsonicShock { .. }), "{}", err);
    }

    #[test]
    fn test_bad_inputs_fail_before_integration() {
        let mut inputs = ShockInputs::default();
        inputs.temperature = f64::NAN;
        let err = ShockStructureSolver::new(inputs).solve().unwrap_err();
        assert!(matches!(err, ShockError::NonPositiveInput { .. }));
        assert!(!err.is_numerical());
    }

    #[test]
    fn test_step_budget_aborts_the_run() {
        let mut inputs = ShockInputs::default().with_incident_radiation(111.0);
        inputs.solver = SolverConfig::new(IntegrationMethod::Radau, 1e-6, 1e-8, 50);
        let err = ShockStructureSolver::new(inputs).solve().unwrap_err();
        assert!(matches!(err, ShockError::NonConvergence { max_steps: 50, .. }), "{}", err);
        assert!(err.is_numerical());
    }

    #[test]
    fn test_runs_are_reproducible() {
        let inputs = ShockInputs::default().with_incident_radiation(111.0);
        let first = ShockStructureSolver::new(inputs.clone()).solve().unwrap();
        let second = ShockStructureSolver::new(inputs).solve().unwrap();
        assert_eq!(first.profile, second.profile);
        assert_eq!(first.steps, second.steps);
    }

    #[test]
    fn test_run_from_task_json() {
        let json = r#"{
            "problem_name": "subcritical",
            "density": 1e-18,
            "velocity": 6e5,
            "pre_shock_length": 1e13,
            "pre_shock_samples": 100,
            "post_shock_length": 1.1e14,
            "post_shock_samples": 500,
            "model": "Full",
            "opacity": "Analytic",
            "constants": "Precise"
        }"#;
        let inputs = ShockTask::from_json(json).unwrap().to_inputs().unwrap();
        assert_eq!(inputs, ShockInputs::subcritical());
        let result = ShockStructureSolver::new(inputs).solve().unwrap();
        assert_eq!(result.profile.len(), 600);
    }
}
