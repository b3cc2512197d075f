pub fn shock_examples(task: usize) {
    //
    match task {
        0 => {
            // ACCRETION SHOCK IN RADIATIVE EQUILIBRIUM
            // 1e-13 g/cm3 molecular gas at 20 K hit at 50 km/s. Gas and radiation start in
            // equilibrium, so nothing happens ahead of the front and the jump heats the gas to ~28000 K
            use crate::RadiativeShock::shock_structure::{ShockInputs, ShockStructureSolver};
            let inputs = ShockInputs::default();
            inputs.pretty_print_task();
            match ShockStructureSolver::new(inputs).solve() {
                Ok(result) => {
                    result.pretty_print_summary();
                    result.pretty_print_profile(100);
                }
                Err(e) => println!("Error: {}", e),
            }
        }
        1 => {
            // UPSTREAM BOUNDARY TRANSIENT
            // the same shock with a 111 K radiation field injected at x = 0, the far-upstream
            // boundary. The field relaxes onto the 20 K gas close to that boundary and the gas
            // reaches the front essentially unheated
            use crate::RadiativeShock::shock_structure::{ShockInputs, ShockStructureSolver};
            use crate::RadiativeShock::task_io::save_profile_csv;
            let inputs = ShockInputs::default().with_incident_radiation(111.0);
            match ShockStructureSolver::new(inputs).solve() {
                Ok(result) => {
                    result.pretty_print_summary();
                    let pre = result.profile.pre_shock();
                    for p in pre.iter().take(5) {
                        println!(
                            "x = {:.3e} cm  T = {:.4} K  T_rad = {:.4} K",
                            p.x, p.matter_temperature, p.radiation_temperature
                        );
                    }
                    println!("T_rad - T above threshold: {}", result.preheating_detected);
                    match save_profile_csv(&result.profile, "shock_upstream_transient.csv") {
                        Ok(()) => println!("profile saved to shock_upstream_transient.csv"),
                        Err(e) => println!("Error: {}", e),
                    }
                }
                Err(e) => println!("Error: {}", e),
            }
        }
        2 => {
            // SUBCRITICAL SHOCK, FULL MODEL
            // 6 km/s into 1e-18 g/cm3 gas, analytic opacity; the post-shock gas cools radiatively
            // towards the upstream temperature. The result is compared with the canonical zones
            use crate::RadiativeShock::integrators::IntegrationMethod;
            use crate::RadiativeShock::shock_structure::{ShockInputs, ShockStructureSolver};
            use crate::RadiativeShock::validation::{canonical_zones, validate_profile};
            let mut inputs = ShockInputs::subcritical();
            inputs.solver.method = IntegrationMethod::Radau;
            inputs.pretty_print_task();
            match ShockStructureSolver::new(inputs).solve() {
                Ok(result) => {
                    result.pretty_print_summary();
                    result.pretty_print_profile(25);
                    validate_profile(&result.profile, &canonical_zones()).pretty_print();
                }
                Err(e) => println!("Error: {}", e),
            }
        }
        3 => {
            // CLOSED-FORM RELATIONS
            use crate::RadiativeShock::constants::GAMMA_MONATOMIC;
            use crate::RadiativeShock::opacity::{Opacity, OpacityModel, TabulatedOpacity};
            use crate::RadiativeShock::rankine_hugoniot::jump_from_mach;
            use crate::RadiativeShock::shock_equations::{closed_form_relations, pretty_print_relations};
            let opacity = Opacity::analytic();
            let relations = closed_form_relations(GAMMA_MONATOMIC, &opacity);
            pretty_print_relations(&relations);
            for relation in &relations {
                println!("{} at {} = 10: {:.6}", relation.description, relation.argument, relation.evaluate(10.0));
            }
            for T in [50.0, 150.0, 300.0] {
                println!("{}: kappa({} K) = {:.5e} cm2/g", opacity.name(), T, opacity.kappa(T));
            }
            match jump_from_mach(GAMMA_MONATOMIC, 10.0, 1e-13, 20.0) {
                Ok((rho2, T2)) => println!("M = 10 into 1e-13 g/cm3 at 20 K: rho2 = {:.4e}, T2 = {:.2} K", rho2, T2),
                Err(e) => println!("Error: {}", e),
            }
            TabulatedOpacity::reference().pretty_print();
        }
        _ => {
            println!("There is no such example");
        }
    }
}
