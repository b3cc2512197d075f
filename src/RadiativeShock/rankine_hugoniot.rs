//! # Rankine-Hugoniot jump
//!
//! Maps the upstream state across an infinitely thin, adiabatic gas shock:
//!
//! ```text
//! P₁  = ρ₁ R_gas T₁,   c_s = sqrt(γ P₁/ρ₁),   M = v₁/c_s
//! r   = (γ+1) M² / ((γ-1) M² + 2)
//! ρ₂  = r ρ₁,          v₂ = v₁/r
//! P₂  = P₁ (2γM² - (γ-1))/(γ+1)
//! T₂  = P₂/(ρ₂ R_gas), E₂ = a T₂⁴
//! ```
//!
//! The radiation field behind the jump is set to local thermodynamic equilibrium with the
//! shocked gas. M <= 1 is rejected.

use super::constants::PhysicalConstants;
use super::flow_state::FlowState;
use super::shock_errors::ShockError;
use RustedSciThe::symbolic::symbolic_engine::Expr;
use log::debug;
use serde::{Deserialize, Serialize};

/// Result of one jump: upstream and downstream states with the quantities linking them
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShockJump {
    pub upstream: FlowState,
    pub mach: f64,
    pub compression: f64,
    pub upstream_pressure: f64,
    pub downstream_pressure: f64,
    pub downstream: FlowState,
}

impl ShockJump {
    /// relative mismatch of ρv across the jump
    pub fn mass_flux_mismatch(&self) -> f64 {
        let up = self.upstream.mass_flux();
        (self.downstream.mass_flux() - up).abs() / up.abs()
    }

    pub fn temperature_ratio(&self) -> f64 {
        self.downstream.temperature / self.upstream.temperature
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RankineHugoniot {
    pub constants: PhysicalConstants,
}

impl RankineHugoniot {
    pub fn new(constants: PhysicalConstants) -> Self {
        Self { constants }
    }

    /// jump(T₁, ρ₁, v₁) → downstream state (T₂, E₂, ρ₂, v₂) with the full record
    pub fn jump(&self, T1: f64, rho1: f64, v1: f64) -> Result<ShockJump, ShockError> {
        ShockError::require_positive("upstream temperature", T1)?;
        ShockError::require_positive("upstream density", rho1)?;
        ShockError::require_positive("upstream velocity", v1)?;
        let constants = &self.constants;
        let gamma = constants.gamma;

        let upstream = FlowState::in_equilibrium(rho1, v1, T1, constants);
        let P1 = upstream.pressure(constants);
        let mach = upstream.mach_number(constants);
        if !(mach > 1.0) {
            return Err(ShockError::SubsonicShock { mach });
        }
        let M2 = mach * mach;
        let compression = compression_ratio(gamma, mach);
        let rho2 = compression * rho1;
        let v2 = v1 / compression;
        let P2 = P1 * (2.0 * gamma * M2 - (gamma - 1.0)) / (gamma + 1.0);
        let T2 = P2 / (rho2 * constants.r_gas());
        let downstream = FlowState::in_equilibrium(rho2, v2, T2, constants);
        debug!(
            "RH jump: M = {:.4}, r = {:.4}, T {:.3} K -> {:.3} K",
            mach, compression, T1, T2
        );
        Ok(ShockJump {
            upstream,
            mach,
            compression,
            upstream_pressure: P1,
            downstream_pressure: P2,
            downstream,
        })
    }

    /// jump of an upstream flow state; the incoming radiation field does not enter the gas jump
    pub fn jump_state(&self, upstream: &FlowState) -> Result<ShockJump, ShockError> {
        let mut jump = self.jump(upstream.temperature, upstream.density, upstream.velocity)?;
        jump.upstream.radiation_energy = upstream.radiation_energy;
        Ok(jump)
    }
}

/// r = (γ+1)M²/((γ-1)M² + 2)
pub fn compression_ratio(gamma: f64, mach: f64) -> f64 {
    let M2 = mach * mach;
    (gamma + 1.0) * M2 / ((gamma - 1.0) * M2 + 2.0)
}

/// P₂/P₁ = (2γM² - (γ-1))/(γ+1)
pub fn pressure_ratio(gamma: f64, mach: f64) -> f64 {
    (2.0 * gamma * mach * mach - (gamma - 1.0)) / (gamma + 1.0)
}

/// T₂/T₁ = (2γM² - (γ-1))((γ-1)M² + 2)/((γ+1)² M²)
pub fn temperature_ratio(gamma: f64, mach: f64) -> f64 {
    let M2 = mach * mach;
    (2.0 * gamma * M2 - (gamma - 1.0)) * ((gamma - 1.0) * M2 + 2.0)
        / ((gamma + 1.0).powi(2) * M2)
}

/// Mach-parameterised closed form: (ρ₂, T₂) for given γ, M, ρ₁, T₁
pub fn jump_from_mach(gamma: f64, mach: f64, rho1: f64, T1: f64) -> Result<(f64, f64), ShockError> {
    if !(mach > 1.0) {
        return Err(ShockError::SubsonicShock { mach });
    }
    Ok((
        rho1 * compression_ratio(gamma, mach),
        T1 * temperature_ratio(gamma, mach),
    ))
}

/// symbolic r(M) for a fixed γ
pub fn compression_ratio_sym(gamma: f64) -> Expr {
    let M = Expr::Var("M".to_owned());
    let M2 = Expr::Pow(Box::new(M), Box::new(Expr::Const(2.0)));
    Expr::Const(gamma + 1.0) * M2.clone() / (Expr::Const(gamma - 1.0) * M2 + Expr::Const(2.0))
}

/// symbolic T₂/T₁(M) for a fixed γ
pub fn temperature_ratio_sym(gamma: f64) -> Expr {
    let M = Expr::Var("M".to_owned());
    let M2 = Expr::Pow(Box::new(M), Box::new(Expr::Const(2.0)));
    (Expr::Const(2.0 * gamma) * M2.clone() - Expr::Const(gamma - 1.0))
        * (Expr::Const(gamma - 1.0) * M2.clone() + Expr::Const(2.0))
        / (Expr::Const((gamma + 1.0).powi(2)) * M2)
}
