//! # Shock Report Module
//!
//! Tabular console output for radiative shock runs: the task (upstream state, regions, models,
//! solver settings), the run summary (jump, preheating, integration statistics) and a
//! thinned-out listing of the stitched profile.
//!
//! All output is formatted using prettytable.

use super::opacity::{Opacity, OpacityModel};
use super::shock_structure::{ShockInputs, ShockStructure};
use prettytable::{Table, row};

impl ShockInputs {
    /// Prints the task in formatted tables.
    pub fn pretty_print_task(&self) {
        println!("\n=== RADIATIVE SHOCK TASK SUMMARY ===");
        println!("Model: {:?}", self.model);
        println!("Opacity: {}", self.opacity.name());

        let mut table = Table::new();
        table.add_row(row!["Parameter", "Value", "Units"]);
        table.add_row(row!["Density (rho)", format!("{:.3e}", self.density), "g/cm3"]);
        table.add_row(row!["Velocity (v)", format!("{:.3e}", self.velocity), "cm/s"]);
        table.add_row(row!["Temperature (T)", format!("{:.3}", self.temperature), "K"]);
        table.add_row(row![
            "Incident radiation (T_rad)",
            match self.incident_radiation_temperature {
                Some(T_rad) => format!("{:.3}", T_rad),
                None => "equilibrium".to_string(),
            },
            "K"
        ]);
        table.add_row(row![
            "Mach number (M)",
            format!("{:.4}", self.upstream_state().mach_number(&self.constants)),
            "-"
        ]);
        println!("\nUpstream Conditions:");
        table.printstd();

        let mut regions = Table::new();
        regions.add_row(row!["Region", "Length, cm", "Samples"]);
        regions.add_row(row![
            "pre-shock",
            format!("{:.3e}", self.pre_shock_length),
            self.pre_shock_samples
        ]);
        regions.add_row(row![
            "post-shock",
            format!("{:.3e}", self.post_shock_length),
            self.post_shock_samples
        ]);
        println!("\nRegions:");
        regions.printstd();

        let c = &self.constants;
        let mut constants = Table::new();
        constants.add_row(row!["Constant", "Value"]);
        constants.add_row(row!["c", format!("{:.6e}", c.c)]);
        constants.add_row(row!["a", format!("{:.6e}", c.a_rad)]);
        constants.add_row(row!["k_B", format!("{:.6e}", c.k_b)]);
        constants.add_row(row!["m_H", format!("{:.6e}", c.m_h)]);
        constants.add_row(row!["mu", format!("{}", c.mu)]);
        constants.add_row(row!["gamma", format!("{:.6}", c.gamma)]);
        constants.add_row(row!["R = k_B/(mu m_H)", format!("{:.6e}", c.r_gas())]);
        println!("\nPhysical Constants:");
        constants.printstd();

        let mut solver = Table::new();
        solver.add_row(row!["Setting", "Value"]);
        solver.add_row(row!["method", self.solver.method.name()]);
        solver.add_row(row!["rtol", format!("{:e}", self.solver.rtol)]);
        solver.add_row(row!["atol", format!("{:e}", self.solver.atol)]);
        solver.add_row(row!["max steps", self.solver.max_steps]);
        solver.add_row(row!["limiter regularization", format!("{:e}", self.limiter.regularization)]);
        solver.add_row(row!["preheating threshold, K", self.preheating_threshold]);
        println!("\nSolver:");
        solver.printstd();

        if let Opacity::Tabulated(table) = &self.opacity {
            println!("\nOpacity Table:");
            table.pretty_print();
        }
        println!("\n=== END TASK SUMMARY ===\n");
    }
}

impl ShockStructure {
    /// Prints the jump, preheating diagnostic and integration statistics.
    pub fn pretty_print_summary(&self) {
        println!("\n=== RADIATIVE SHOCK RESULT ===");
        let jump = &self.jump;
        let mut table = Table::new();
        table.add_row(row!["Quantity", "Upstream", "Downstream"]);
        table.add_row(row![
            "density, g/cm3",
            format!("{:.4e}", jump.upstream.density),
            format!("{:.4e}", jump.downstream.density)
        ]);
        table.add_row(row![
            "velocity, cm/s",
            format!("{:.4e}", jump.upstream.velocity),
            format!("{:.4e}", jump.downstream.velocity)
        ]);
        table.add_row(row![
            "temperature, K",
            format!("{:.3}", jump.upstream.temperature),
            format!("{:.3}", jump.downstream.temperature)
        ]);
        table.add_row(row![
            "pressure, dyn/cm2",
            format!("{:.4e}", jump.upstream_pressure),
            format!("{:.4e}", jump.downstream_pressure)
        ]);
        println!(
            "\nJump at x = {:.4e} cm: M = {:.4}, rho2/rho1 = {:.5}, T2/T1 = {:.4}",
            self.profile.shock_position(),
            jump.mach,
            jump.compression,
            jump.temperature_ratio()
        );
        table.printstd();

        let peak = self.profile.peak_matter_temperature();
        let mut diagnostics = Table::new();
        diagnostics.add_row(row!["Diagnostic", "Value"]);
        diagnostics.add_row(row![
            "max T_rad - T ahead of the front, K",
            format!("{:.4}", self.preheating.max_difference)
        ]);
        let location = match self.preheating.position() {
            Some(x) => format!("{:.4e}", x),
            None => "-".to_string(),
        };
        diagnostics.add_row(row!["at x, cm", location]);
        diagnostics.add_row(row!["preheating detected", self.preheating_detected]);
        diagnostics.add_row(row![
            "peak matter temperature, K",
            format!("{:.3} at x = {:.4e}", peak.matter_temperature, peak.x)
        ]);
        diagnostics.add_row(row!["pre-shock method", self.pre_shock_method.name()]);
        diagnostics.add_row(row!["post-shock method", self.post_shock_method.name()]);
        diagnostics.add_row(row!["integrator steps", self.steps]);
        diagnostics.add_row(row!["profile samples", self.profile.len()]);
        println!("\nDiagnostics:");
        diagnostics.printstd();
        println!("\n=== END RESULT ===\n");
    }

    /// Prints every `stride`-th sample plus both sides of the front and the last sample.
    pub fn pretty_print_profile(&self, stride: usize) {
        let stride = stride.max(1);
        let points = self.profile.points();
        let front = self.profile.pre_shock().len();
        let mut table = Table::new();
        table.add_row(row!["x, cm", "T, K", "T_rad, K", "E_r, erg/cm3", "rho, g/cm3", "v, cm/s", "region"]);
        for (i, p) in points.iter().enumerate() {
            let keep = i % stride == 0 || i + 1 == front || i == front || i + 1 == points.len();
            if !keep {
                continue;
            }
            table.add_row(row![
                format!("{:.4e}", p.x),
                format!("{:.3}", p.matter_temperature),
                format!("{:.3}", p.radiation_temperature),
                format!("{:.4e}", p.radiation_energy),
                format!("{:.4e}", p.density),
                format!("{:.4e}", p.velocity),
                p.region
            ]);
        }
        table.printstd();
    }
}
