//! Code Checker
//!
//! Bending stress against the material allowable and peak deflection against
//! the span/360 serviceability limit. Both ratios must be ≤ 1.0 to pass; there
//! is no partial or soft-fail state.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::materials::Material;
use crate::sections::SectionProperties;
use crate::units::{KilonewtonMeters, Megapascals, Meters, Millimeters};

/// Serviceability limit: deflection may not exceed span / 360
pub const DEFLECTION_LIMIT_RATIO: f64 = 360.0;

/// Overall verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CheckStatus {
    Pass,
    Fail,
}

impl CheckStatus {
    /// Tag shown in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckStatus::Pass => "PASS",
            CheckStatus::Fail => "FAIL",
        }
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stress and deflection utilization
///
/// ## JSON Example
///
/// ```json
/// {
///   "max_stress_mpa": 128.4,
///   "allowable_stress_mpa": 250.0,
///   "stress_ratio": 0.51,
///   "max_deflection_mm": 14.2,
///   "deflection_limit_mm": 16.67,
///   "deflection_ratio": 0.85,
///   "status": "PASS"
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CodeCheck {
    /// Peak bending stress |M|/S (MPa)
    pub max_stress_mpa: f64,
    /// Allowable bending stress (MPa)
    pub allowable_stress_mpa: f64,
    /// max_stress / allowable
    pub stress_ratio: f64,
    /// Peak deflection magnitude (mm)
    pub max_deflection_mm: f64,
    /// span / 360 (mm)
    pub deflection_limit_mm: f64,
    /// |max_deflection| / limit
    pub deflection_ratio: f64,
    /// PASS only if both ratios are ≤ 1.0
    pub status: CheckStatus,
}

impl CodeCheck {
    /// Check if both ratios pass
    pub fn passes(&self) -> bool {
        self.status == CheckStatus::Pass
    }

    /// Get the governing (highest) ratio
    pub fn governing_ratio(&self) -> f64 {
        self.stress_ratio.max(self.deflection_ratio)
    }

    /// Get a description of what governs the design
    pub fn governing_check(&self) -> &'static str {
        if self.stress_ratio >= self.deflection_ratio {
            "Stress"
        } else {
            "Deflection"
        }
    }
}

/// Compare peak moment (kN·m) and peak deflection (mm) against the limits
pub fn check_member(
    max_moment_knm: f64,
    max_deflection_mm: f64,
    span_m: f64,
    section: &SectionProperties,
    material: &Material,
) -> CodeCheck {
    let max_stress_mpa = Megapascals::from_bending(
        KilonewtonMeters(max_moment_knm.abs()),
        section.section_modulus_mm3,
    )
    .value();
    let stress_ratio = max_stress_mpa / material.allowable_stress_mpa;

    let deflection_limit_mm = Millimeters::from(Meters(span_m)).value() / DEFLECTION_LIMIT_RATIO;
    let deflection_ratio = max_deflection_mm.abs() / deflection_limit_mm;

    let status = if stress_ratio <= 1.0 && deflection_ratio <= 1.0 {
        CheckStatus::Pass
    } else {
        CheckStatus::Fail
    };

    CodeCheck {
        max_stress_mpa,
        allowable_stress_mpa: material.allowable_stress_mpa,
        stress_ratio,
        max_deflection_mm: max_deflection_mm.abs(),
        deflection_limit_mm,
        deflection_ratio,
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::Section;
    use approx::assert_relative_eq;

    fn props() -> SectionProperties {
        // S = 1.0e6 mm³
        Section::custom(1.0e8, 1.0e6, 1.0e4).properties().unwrap()
    }

    #[test]
    fn test_stress_ratio() {
        // 100 kN·m / 1e6 mm³ = 100 MPa
        let check = check_member(-100.0, 0.0, 6.0, &props(), &Material::new(200_000.0, 250.0));
        assert_relative_eq!(check.max_stress_mpa, 100.0, max_relative = 1e-12);
        assert_relative_eq!(check.stress_ratio, 0.4, max_relative = 1e-12);
        assert_eq!(check.status, CheckStatus::Pass);
        assert_eq!(check.governing_check(), "Stress");
    }

    #[test]
    fn test_deflection_limit() {
        // 9 m → 25 mm limit
        let check = check_member(0.0, -30.0, 9.0, &props(), &Material::structural_steel());
        assert_relative_eq!(check.deflection_limit_mm, 25.0, max_relative = 1e-12);
        assert_relative_eq!(check.deflection_ratio, 1.2, max_relative = 1e-12);
        assert_eq!(check.status, CheckStatus::Fail);
        assert_eq!(check.governing_check(), "Deflection");
        assert_relative_eq!(check.governing_ratio(), 1.2, max_relative = 1e-12);
    }

    #[test]
    fn test_exactly_at_limit_passes() {
        let check = check_member(250.0, 25.0, 9.0, &props(), &Material::new(200_000.0, 250.0));
        assert!(check.passes());
    }

    #[test]
    fn test_status_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&CheckStatus::Fail).unwrap(), "\"FAIL\"");
    }
}
