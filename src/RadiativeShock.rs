//! # Radiative Shock Module
//!
//! This module computes the steady structure of a one-dimensional radiative shock: the gas
//! temperature and radiation temperature profiles ahead of and behind a hydrodynamic jump.
//! Radiation escaping the hot post-shock gas can run ahead of the front and heat the
//! incoming gas (radiative preheating); the module reports how strong that effect is.
//!
//! ## Mathematical Model
//!
//! ### Nomenclature
//!
//! | Symbol | Description | Units |
//! |--------|-------------|-------|
//! | `x` | Position along the flow | cm |
//! | `ρ` | Gas density | g/cm³ |
//! | `v` | Flow velocity | cm/s |
//! | `T` | Matter (gas) temperature | K |
//! | `E_r` | Radiation energy density | erg/cm³ |
//! | `T_rad` | Radiation temperature `(E_r/a)^(1/4)` | K |
//! | `κ(T)` | Mass opacity | cm²/g |
//! | `R_gas` | Specific gas constant `k_B/(μ m_H)` | erg/(g·K) |
//! | `γ` | Adiabatic index | - |
//! | `λ(R)` | Flux limiter | - |
//! | `M` | Upstream Mach number | - |
//!
//! ### Model Assumptions
//!
//! - Ideal gas with `γ = 5/3` and mean molecular weight `μ = 0.5` (both configurable)
//! - Grey radiation in the flux-limited diffusion approximation, `λ(R) = 1/(1+R)`
//! - Density and velocity are prescribed along each region (constant unless set otherwise)
//! - The jump itself is a discontinuity obeying the Rankine-Hugoniot relations
//!
//! ### Governing Equations
//!
//! **Radiation-hydro variant** (state `T, E_r`):
//! ```text
//! ∇E ≈ (aT⁴ - E_r)/Δx
//! F  = -(c λ(R)/(κρ)) ∇E,   R = |∇E|/(κρE_r + ε)
//! dE_r/dx = -F/Δx
//! dT/dx   = F/(Δx ρR_gas/(γ-1))
//! ```
//!
//! **Full variant** (state `ρ, v, T, E_r`):
//! ```text
//! dT/dx   = -4acκρ(T⁴ - T_ref⁴)/(v ρR_gas/(γ-1))
//! dE_r/dx = -3κρE_r/c
//! ```
//!
//! **Jump:**
//! ```text
//! M = v₁/√(γR_gas T₁)
//! ρ₂/ρ₁ = (γ+1)M²/((γ-1)M² + 2)
//! p₂/p₁ = (2γM² - (γ-1))/(γ+1)
//! T₂ = (p₂/p₁)/(ρ₂/ρ₁)·T₁
//! ```
//!
//! ## Numerical Solution
//!
//! The pre-shock region is integrated from the undisturbed state, the jump is applied to its
//! exit temperature, and the post-shock region is integrated from the downstream state.
//! Each region is a small initial value problem solved in dimensionless variables by the
//! BDF or Radau IIA solver of `RustedSciThe`, restarted at every sample position.
//!
//! ## Modules
//!
//! - [`constants`]: cgs constant presets and derived gas quantities
//! - [`opacity`]: tabulated and analytic opacity
//! - [`flux_limiter`]: limiter and limited diffusive flux
//! - [`flow_state`]: thermodynamic state of a fluid element
//! - [`rankine_hugoniot`]: jump conditions
//! - [`integrators`]: sampling adapter over the `RustedSciThe` IVP solvers
//! - [`region`]: equation sets and region integration
//! - [`shock_structure`]: orchestration, stitched profile and preheating diagnostic
//! - [`shock_equations`]: symbolic closed-form relations
//! - [`shock_report`]: console tables
//! - [`validation`]: comparison against canonical temperature zones
//! - [`task_io`]: JSON task files and profile export

pub mod constants;
pub mod flow_state;
pub mod flux_limiter;
pub mod integrators;
pub mod opacity;
mod radiative_shock_tests;
pub mod rankine_hugoniot;
pub mod region;
pub mod shock_equations;
pub mod shock_errors;
pub mod shock_report;
pub mod shock_structure;
pub mod task_io;
pub mod validation;
