//! # Task files and profile export
//!
//! A run can be described by a JSON task file. Every field is optional and falls back to the
//! reference equilibrium run, so a minimal task looks like
//!
//! ```text
//! {
//!   "velocity": 6e5,
//!   "model": "Full",
//!   "opacity": "Analytic",
//!   "constants": "Precise"
//! }
//! ```
//!
//! The opacity is either `"Analytic"`, `"ReferenceTable"`, `{"AnalyticWith": {...}}` or
//! `{"Table": {"temperatures": [...], "opacities": [...]}}`; the constants are `"Rounded"`,
//! `"Precise"` or `{"Custom": {...}}`.
//!
//! Profiles are written as CSV (one row per sample) or as pretty-printed JSON.

use super::constants::PhysicalConstants;
use super::flux_limiter::FluxLimiter;
use super::integrators::SolverConfig;
use super::opacity::{AnalyticOpacity, Opacity, TabulatedOpacity};
use super::region::RegionKind;
use super::shock_errors::ShockError;
use super::shock_structure::{ModelVariant, ShockInputs, ShockProfile};
use RustedSciThe::Utils::logger::save_matrix_to_csv;
use log::info;
use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OpacityConfig {
    Analytic,
    AnalyticWith(AnalyticOpacity),
    ReferenceTable,
    Table {
        temperatures: Vec<f64>,
        opacities: Vec<f64>,
    },
}

impl OpacityConfig {
    pub fn build(&self) -> Result<Opacity, ShockError> {
        Ok(match self {
            OpacityConfig::Analytic => Opacity::analytic(),
            OpacityConfig::AnalyticWith(model) => Opacity::Analytic(*model),
            OpacityConfig::ReferenceTable => Opacity::reference_table(),
            OpacityConfig::Table {
                temperatures,
                opacities,
            } => Opacity::Tabulated(TabulatedOpacity::new(
                temperatures.clone(),
                opacities.clone(),
            )?),
        })
    }

    pub fn describe(opacity: &Opacity) -> Self {
        match opacity {
            Opacity::Analytic(model) if *model == AnalyticOpacity::default() => OpacityConfig::Analytic,
            Opacity::Analytic(model) => OpacityConfig::AnalyticWith(*model),
            Opacity::Tabulated(table) if *table == TabulatedOpacity::reference() => {
                OpacityConfig::ReferenceTable
            }
            Opacity::Tabulated(table) => OpacityConfig::Table {
                temperatures: table.temperatures().to_vec(),
                opacities: table.opacities().to_vec(),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ConstantsPreset {
    Rounded,
    Precise,
    Custom(PhysicalConstants),
}

impl ConstantsPreset {
    pub fn build(&self) -> PhysicalConstants {
        match self {
            ConstantsPreset::Rounded => PhysicalConstants::cgs_rounded(),
            ConstantsPreset::Precise => PhysicalConstants::cgs_precise(),
            ConstantsPreset::Custom(constants) => *constants,
        }
    }

    pub fn describe(constants: &PhysicalConstants) -> Self {
        if *constants == PhysicalConstants::cgs_rounded() {
            ConstantsPreset::Rounded
        } else if *constants == PhysicalConstants::cgs_precise() {
            ConstantsPreset::Precise
        } else {
            ConstantsPreset::Custom(*constants)
        }
    }
}

/// Serializable description of a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShockTask {
    pub problem_name: Option<String>,
    pub problem_description: Option<String>,
    pub density: f64,
    pub velocity: f64,
    pub temperature: f64,
    pub incident_radiation_temperature: Option<f64>,
    pub pre_shock_length: f64,
    pub pre_shock_samples: usize,
    pub post_shock_length: f64,
    pub post_shock_samples: usize,
    pub model: ModelVariant,
    pub opacity: OpacityConfig,
    pub constants: ConstantsPreset,
    pub solver: SolverConfig,
    pub limiter_regularization: f64,
    pub preheating_threshold: f64,
}

impl Default for ShockTask {
    fn default() -> Self {
        Self::from_inputs(&ShockInputs::default())
    }
}

impl ShockTask {
    pub fn from_inputs(inputs: &ShockInputs) -> Self {
        Self {
            problem_name: None,
            problem_description: None,
            density: inputs.density,
            velocity: inputs.velocity,
            temperature: inputs.temperature,
            incident_radiation_temperature: inputs.incident_radiation_temperature,
            pre_shock_length: inputs.pre_shock_length,
            pre_shock_samples: inputs.pre_shock_samples,
            post_shock_length: inputs.post_shock_length,
            post_shock_samples: inputs.post_shock_samples,
            model: inputs.model,
            opacity: OpacityConfig::describe(&inputs.opacity),
            constants: ConstantsPreset::describe(&inputs.constants),
            solver: inputs.solver,
            limiter_regularization: inputs.limiter.regularization,
            preheating_threshold: inputs.preheating_threshold,
        }
    }

    /// builds and validates the run inputs
    pub fn to_inputs(&self) -> Result<ShockInputs, ShockError> {
        let inputs = ShockInputs {
            density: self.density,
            velocity: self.velocity,
            temperature: self.temperature,
            incident_radiation_temperature: self.incident_radiation_temperature,
            pre_shock_length: self.pre_shock_length,
            pre_shock_samples: self.pre_shock_samples,
            post_shock_length: self.post_shock_length,
            post_shock_samples: self.post_shock_samples,
            model: self.model,
            opacity: self.opacity.build()?,
            constants: self.constants.build(),
            limiter: FluxLimiter::new(self.limiter_regularization)?,
            solver: self.solver,
            preheating_threshold: self.preheating_threshold,
        };
        inputs.validate()?;
        Ok(inputs)
    }

    pub fn from_json(json: &str) -> Result<Self, ShockError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ShockError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ShockError> {
        let contents = fs::read_to_string(path.as_ref())?;
        let task = Self::from_json(&contents)?;
        info!("task loaded from {}", path.as_ref().display());
        Ok(task)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ShockError> {
        let mut file = File::create(path.as_ref())?;
        file.write_all(self.to_json()?.as_bytes())?;
        info!("task saved to {}", path.as_ref().display());
        Ok(())
    }
}

/// columns after the leading `x` column; `region` is 0 ahead of the front, 1 behind it
pub const CSV_COLUMNS: [&str; 6] = ["T", "T_rad", "E_r", "rho", "v", "region"];

/// one row per sample, x first, then the columns of [`CSV_COLUMNS`]
pub fn save_profile_csv<P: AsRef<Path>>(profile: &ShockProfile, path: P) -> Result<(), ShockError> {
    let points = profile.points();
    let matrix = DMatrix::from_fn(points.len(), CSV_COLUMNS.len(), |i, j| {
        let p = &points[i];
        match j {
            0 => p.matter_temperature,
            1 => p.radiation_temperature,
            2 => p.radiation_energy,
            3 => p.density,
            4 => p.velocity,
            _ => match p.region {
                RegionKind::PreShock => 0.0,
                RegionKind::PostShock => 1.0,
            },
        }
    });
    let x_mesh = DVector::from_vec(profile.positions());
    let headers: Vec<String> = CSV_COLUMNS.iter().map(|c| c.to_string()).collect();
    let filename = path.as_ref().to_string_lossy().to_string();
    save_matrix_to_csv(&matrix, &headers, &filename, &x_mesh, &"x".to_string())?;
    info!("profile written to {}", path.as_ref().display());
    Ok(())
}

pub fn save_profile_json<P: AsRef<Path>>(profile: &ShockProfile, path: P) -> Result<(), ShockError> {
    let mut file = File::create(path.as_ref())?;
    file.write_all(serde_json::to_string_pretty(profile)?.as_bytes())?;
    info!("profile written to {}", path.as_ref().display());
    Ok(())
}

pub fn load_profile_json<P: AsRef<Path>>(path: P) -> Result<ShockProfile, ShockError> {
    let contents = fs::read_to_string(path)?;
    let profile: ShockProfile = serde_json::from_str(&contents)?;
    // re-check ordering and physical values of hand-edited files
    ShockProfile::from_points(profile.points().to_vec())
}
