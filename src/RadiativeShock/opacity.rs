//! # Opacity models
//!
//! Maps gas temperature (K) to mass opacity κ (cm²/g). Two variants share the
//! [`OpacityModel`] capability and are dispatched statically through the [`Opacity`] enum:
//!
//! - [`TabulatedOpacity`]: piecewise-linear interpolation over a strictly increasing
//!   temperature table. Outside the table the nearest edge segment is extrapolated linearly.
//!   This is a documented approximation, never an error, and for steep tables it can
//!   produce small or even negative values far below the first node.
//! - [`AnalyticOpacity`]: closed form with a power-law branch below the break temperature
//!   and an exponential cut-off above it:
//!
//! ```text
//! κ(T) = κ_b (T/T_b)²               T <  T_b
//! κ(T) = κ_b exp(-(T - T_b)/T_d)    T >= T_b
//! κ_b = 0.1 cm²/g, T_b = 150 K, T_d = 50 K
//! ```
//!
//! Both branches give κ_b at T_b, so the model is continuous at the break.

use super::shock_errors::ShockError;
use RustedSciThe::symbolic::symbolic_engine::Expr;
use enum_dispatch::enum_dispatch;
use prettytable::{Table, row};
use serde::{Deserialize, Serialize};

#[enum_dispatch]
pub trait OpacityModel {
    /// mass opacity at temperature T, cm²/g
    fn kappa(&self, T: f64) -> f64;
    fn name(&self) -> String;
}

#[enum_dispatch(OpacityModel)]
#[derive(Debug, Clone, PartialEq)]
pub enum Opacity {
    Tabulated(TabulatedOpacity),
    Analytic(AnalyticOpacity),
}

impl Opacity {
    /// Reference molecular-cloud table spanning 10-4000 K
    pub fn reference_table() -> Self {
        Opacity::Tabulated(TabulatedOpacity::reference())
    }

    pub fn analytic() -> Self {
        Opacity::Analytic(AnalyticOpacity::default())
    }
}

////////////////////////////////////////////////////////////////////////////////////////
//                               TABULATED
////////////////////////////////////////////////////////////////////////////////////////

const REFERENCE_TEMPERATURES: [f64; 12] = [
    10.0, 20.0, 50.0, 100.0, 200.0, 300.0, 400.0, 500.0, 700.0, 1000.0, 2000.0, 4000.0,
];
const REFERENCE_OPACITIES: [f64; 12] = [
    1e-5, 5e-5, 2e-4, 1e-3, 5e-3, 8e-3, 1e-2, 1.2e-2, 1.5e-2, 2e-2, 3e-2, 4e-2,
];

#[derive(Debug, Clone, PartialEq)]
pub struct TabulatedOpacity {
    temperatures: Vec<f64>,
    opacities: Vec<f64>,
}

impl TabulatedOpacity {
    /// Builds a table; temperatures must be finite and strictly increasing, at least two nodes
    pub fn new(temperatures: Vec<f64>, opacities: Vec<f64>) -> Result<Self, ShockError> {
        if temperatures.len() != opacities.len() {
            return Err(ShockError::InvalidOpacityTable(format!(
                "{} temperatures but {} opacities",
                temperatures.len(),
                opacities.len()
            )));
        }
        if temperatures.len() < 2 {
            return Err(ShockError::InvalidOpacityTable(
                "at least two nodes are required".to_string(),
            ));
        }
        if let Some(bad) = temperatures
            .iter()
            .chain(opacities.iter())
            .find(|v| !v.is_finite())
        {
            return Err(ShockError::InvalidOpacityTable(format!(
                "non-finite entry {}",
                bad
            )));
        }
        for (i, pair) in temperatures.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(ShockError::InvalidOpacityTable(format!(
                    "temperatures must be strictly increasing: T[{}] = {} is followed by T[{}] = {}",
                    i,
                    pair[0],
                    i + 1,
                    pair[1]
                )));
            }
        }
        Ok(Self {
            temperatures,
            opacities,
        })
    }

    pub fn from_pairs(pairs: &[(f64, f64)]) -> Result<Self, ShockError> {
        let (temperatures, opacities) = pairs.iter().cloned().unzip();
        Self::new(temperatures, opacities)
    }

    pub fn reference() -> Self {
        Self {
            temperatures: REFERENCE_TEMPERATURES.to_vec(),
            opacities: REFERENCE_OPACITIES.to_vec(),
        }
    }

    pub fn temperatures(&self) -> &[f64] {
        &self.temperatures
    }

    pub fn opacities(&self) -> &[f64] {
        &self.opacities
    }

    /// Tabulated temperature range (T_min, T_max)
    pub fn range(&self) -> (f64, f64) {
        (self.temperatures[0], self.temperatures[self.temperatures.len() - 1])
    }

    pub fn contains(&self, T: f64) -> bool {
        let (t_min, t_max) = self.range();
        T >= t_min && T <= t_max
    }

    /// index i of the segment [T_i, T_{i+1}] used for T (edge segments outside the table)
    fn segment(&self, T: f64) -> usize {
        let last = self.temperatures.len() - 2;
        let upper = self.temperatures.partition_point(|&t| t <= T);
        upper.saturating_sub(1).min(last)
    }

    pub fn pretty_print(&self) {
        let mut table = Table::new();
        table.add_row(row!["T, K", "kappa, cm2/g"]);
        for (T, k) in self.temperatures.iter().zip(self.opacities.iter()) {
            table.add_row(row![format!("{:.1}", T), format!("{:.3e}", k)]);
        }
        table.printstd();
    }
}

impl OpacityModel for TabulatedOpacity {
    fn kappa(&self, T: f64) -> f64 {
        let i = self.segment(T);
        let (t0, t1) = (self.temperatures[i], self.temperatures[i + 1]);
        let (k0, k1) = (self.opacities[i], self.opacities[i + 1]);
        let w = (T - t0) / (t1 - t0);
        k0 * (1.0 - w) + k1 * w
    }

    fn name(&self) -> String {
        let (t_min, t_max) = self.range();
        format!(
            "tabulated ({} nodes, {}-{} K)",
            self.temperatures.len(),
            t_min,
            t_max
        )
    }
}

////////////////////////////////////////////////////////////////////////////////////////
//                               ANALYTIC
////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalyticOpacity {
    /// opacity at the break temperature, cm²/g
    pub kappa_break: f64,
    /// break between the power-law and exponential branches, K
    pub T_break: f64,
    /// e-folding temperature of the exponential branch, K
    pub T_decay: f64,
}

impl Default for AnalyticOpacity {
    fn default() -> Self {
        Self {
            kappa_break: 0.1,
            T_break: 150.0,
            T_decay: 50.0,
        }
    }
}

impl AnalyticOpacity {
    pub fn power_law_branch(&self, T: f64) -> f64 {
        self.kappa_break * (T / self.T_break).powi(2)
    }

    pub fn exponential_branch(&self, T: f64) -> f64 {
        self.kappa_break * (-(T - self.T_break) / self.T_decay).exp()
    }

    /// κ_b (T/T_b)² as a symbolic function of "T"
    pub fn power_law_branch_sym(&self) -> Expr {
        let T = Expr::Var("T".to_owned());
        Expr::Const(self.kappa_break)
            * Expr::Pow(
                Box::new(T / Expr::Const(self.T_break)),
                Box::new(Expr::Const(2.0)),
            )
    }

    /// κ_b exp(-(T - T_b)/T_d) as a symbolic function of "T"
    pub fn exponential_branch_sym(&self) -> Expr {
        let T = Expr::Var("T".to_owned());
        Expr::Const(self.kappa_break)
            * Expr::Exp(Box::new(
                -(T - Expr::Const(self.T_break)) / Expr::Const(self.T_decay),
            ))
    }
}

impl OpacityModel for AnalyticOpacity {
    fn kappa(&self, T: f64) -> f64 {
        if T < self.T_break {
            self.power_law_branch(T)
        } else {
            self.exponential_branch(T)
        }
    }

    fn name(&self) -> String {
        format!("analytic (break at {} K)", self.T_break)
    }
}
