//! # Validation against canonical zones
//!
//! A shock profile is checked zone by zone against analytic reference temperatures. Each
//! reference zone carries the analytic value, the value found by a reference simulation, and
//! a tolerance band: the relative simulated-vs-analytic deviation of the reference, but never
//! tighter than 3 %.
//!
//! | Zone | Analytic, K | Reference simulation, K |
//! |------|-------------|-------------------------|
//! | far upstream | 111 | 125 |
//! | shock peak | 782 | 792 |
//! | far downstream | 717 | 727 |

use super::shock_structure::{ProfilePoint, ShockProfile};
use prettytable::{Table, row};
use serde::{Deserialize, Serialize};

/// narrowest accepted band
pub const MIN_TOLERANCE: f64 = 0.03;

/// Which samples of a profile make up a zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoneSelector {
    /// mean over the first quarter of the pre-shock samples
    FarUpstream,
    /// maximum over the whole profile
    ShockPeak,
    /// mean over the last quarter of the post-shock samples
    FarDownstream,
}

impl ZoneSelector {
    /// (matter, radiation) temperature of the zone
    pub fn measure(&self, profile: &ShockProfile) -> (f64, f64) {
        fn mean(points: &[ProfilePoint]) -> (f64, f64) {
            let n = points.len().max(1) as f64;
            let matter: f64 = points.iter().map(|p| p.matter_temperature).sum();
            let radiation: f64 = points.iter().map(|p| p.radiation_temperature).sum();
            (matter / n, radiation / n)
        }
        fn quarter(len: usize) -> usize {
            (len / 4).max(1)
        }
        match self {
            ZoneSelector::FarUpstream => {
                let pre = profile.pre_shock();
                mean(&pre[..quarter(pre.len())])
            }
            ZoneSelector::ShockPeak => {
                let points = profile.points();
                let matter = points
                    .iter()
                    .map(|p| p.matter_temperature)
                    .fold(f64::NEG_INFINITY, f64::max);
                let radiation = points
                    .iter()
                    .map(|p| p.radiation_temperature)
                    .fold(f64::NEG_INFINITY, f64::max);
                (matter, radiation)
            }
            ZoneSelector::FarDownstream => {
                let post = profile.post_shock();
                mean(&post[post.len() - quarter(post.len())..])
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceZone {
    pub name: String,
    pub selector: ZoneSelector,
    pub analytic_temperature: f64,
    pub simulated_temperature: f64,
}

impl ReferenceZone {
    pub fn new(name: &str, selector: ZoneSelector, analytic_temperature: f64, simulated_temperature: f64) -> Self {
        Self {
            name: name.to_string(),
            selector,
            analytic_temperature,
            simulated_temperature,
        }
    }

    /// accepted relative deviation from the analytic temperature
    pub fn tolerance(&self) -> f64 {
        let reference = (self.simulated_temperature - self.analytic_temperature).abs()
            / self.analytic_temperature;
        reference.max(MIN_TOLERANCE)
    }

    pub fn deviation(&self, temperature: f64) -> f64 {
        (temperature - self.analytic_temperature).abs() / self.analytic_temperature
    }
}

/// far upstream, shock peak and far downstream zones of the reference shock
pub fn canonical_zones() -> Vec<ReferenceZone> {
    vec![
        ReferenceZone::new("far upstream", ZoneSelector::FarUpstream, 111.0, 125.0),
        ReferenceZone::new("shock peak", ZoneSelector::ShockPeak, 782.0, 792.0),
        ReferenceZone::new("far downstream", ZoneSelector::FarDownstream, 717.0, 727.0),
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneVerdict {
    pub zone: ReferenceZone,
    pub matter_temperature: f64,
    pub radiation_temperature: f64,
    pub matter_deviation: f64,
    pub radiation_deviation: f64,
    pub passed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub verdicts: Vec<ZoneVerdict>,
}

impl ValidationReport {
    pub fn all_passed(&self) -> bool {
        self.verdicts.iter().all(|v| v.passed)
    }

    pub fn failed(&self) -> Vec<&ZoneVerdict> {
        self.verdicts.iter().filter(|v| !v.passed).collect()
    }

    pub fn pretty_print(&self) {
        let mut table = Table::new();
        table.add_row(row![
            "Zone", "Analytic, K", "T, K", "T_rad, K", "Band", "Verdict"
        ]);
        for v in &self.verdicts {
            table.add_row(row![
                v.zone.name,
                format!("{:.1}", v.zone.analytic_temperature),
                format!("{:.2} ({:.1}%)", v.matter_temperature, 100.0 * v.matter_deviation),
                format!("{:.2} ({:.1}%)", v.radiation_temperature, 100.0 * v.radiation_deviation),
                format!("{:.1}%", 100.0 * v.zone.tolerance()),
                if v.passed { "pass" } else { "FAIL" }
            ]);
        }
        table.printstd();
    }
}

/// compares matter and radiation temperature of every zone with its band
pub fn validate_profile(profile: &ShockProfile, zones: &[ReferenceZone]) -> ValidationReport {
    let verdicts = zones
        .iter()
        .map(|zone| {
            let (matter, radiation) = zone.selector.measure(profile);
            let matter_deviation = zone.deviation(matter);
            let radiation_deviation = zone.deviation(radiation);
            let tolerance = zone.tolerance();
            ZoneVerdict {
                zone: zone.clone(),
                matter_temperature: matter,
                radiation_temperature: radiation,
                matter_deviation,
                radiation_deviation,
                passed: matter_deviation <= tolerance && radiation_deviation <= tolerance,
            }
        })
        .collect();
    ValidationReport { verdicts }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RadiativeShock::constants::PhysicalConstants;
    use crate::RadiativeShock::region::RegionKind;
    use approx::assert_relative_eq;

    /// front at 4e13 cm, a hot layer up to 8e13 cm, relaxed gas beyond
    fn layered_profile(upstream: f64, peak: f64, downstream: f64) -> ShockProfile {
        let constants = PhysicalConstants::default();
        let mut points = Vec::new();
        for i in 0..20 {
            let x = 4e13 * i as f64 / 19.0;
            points.push((x, upstream, RegionKind::PreShock));
        }
        for i in 0..40 {
            let x = 4e13 + 8e13 * i as f64 / 39.0;
            let T = if x <= 8e13 { peak } else { downstream };
            points.push((x, T, RegionKind::PostShock));
        }
        let points = points
            .into_iter()
            .map(|(x, T, region)| ProfilePoint {
                x,
                matter_temperature: T,
                radiation_temperature: T,
                radiation_energy: constants.equilibrium_radiation_energy(T),
                density: 1e-13,
                velocity: 5e6,
                region,
            })
            .collect();
        ShockProfile::from_points(points).unwrap()
    }

    #[test]
    fn test_tolerance_bands() {
        let zones = canonical_zones();
        assert_relative_eq!(zones[0].tolerance(), 14.0 / 111.0);
        assert_relative_eq!(zones[1].tolerance(), MIN_TOLERANCE);
        assert_relative_eq!(zones[2].tolerance(), MIN_TOLERANCE);
    }

    #[test]
    fn test_profile_inside_bands_passes() {
        let profile = layered_profile(122.0, 790.0, 725.0);
        let report = validate_profile(&profile, &canonical_zones());
        assert!(report.all_passed(), "{:?}", report.failed());
        assert_relative_eq!(report.verdicts[0].matter_temperature, 122.0);
        assert_relative_eq!(report.verdicts[1].matter_temperature, 790.0);
        assert_relative_eq!(report.verdicts[2].radiation_temperature, 725.0, max_relative = 1e-12);
    }

    #[test]
    fn test_hot_downstream_fails() {
        let profile = layered_profile(111.0, 800.0, 800.0);
        let report = validate_profile(&profile, &canonical_zones());
        assert!(!report.all_passed());
        let failed = report.failed();
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].zone.selector, ZoneSelector::FarDownstream);
    }
}
