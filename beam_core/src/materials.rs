//! # Materials
//!
//! Elastic material properties used by the beam engine: modulus of elasticity
//! for deflection, allowable stress for the strength check, and density for
//! optional self-weight.
//!
//! ## Presets
//!
//! | Preset     | E (MPa)  | Allowable (MPa) | Density (kg/m³) |
//! |------------|----------|-----------------|-----------------|
//! | `steel`    | 200 000  | 250             | 7850            |
//! | `aluminum` | 69 000   | 240             | 2700            |
//! | `timber`   | 11 000   | 24              | 500             |
//! | `concrete` | 30 000   | 20              | 2400            |
//!
//! When no material is given the engine falls back to nominal structural steel
//! through [`Material::fallback`], which logs the substitution.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::materials::{Material, MaterialSpec, MaterialPreset};
//!
//! // Preset with an overridden allowable stress
//! let spec = MaterialSpec {
//!     preset: Some(MaterialPreset::Steel),
//!     allowable_stress: Some(355.0),
//!     ..Default::default()
//! };
//! let mat = spec.resolve().unwrap();
//! assert_eq!(mat.elastic_modulus_mpa, 200_000.0);
//! assert_eq!(mat.allowable_stress_mpa, 355.0);
//! ```

use log::warn;
use serde::{Deserialize, Serialize};

use crate::errors::{require_finite, require_positive, CalcError, CalcResult};

/// Resolved material properties, immutable for the duration of an analysis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Modulus of elasticity E (MPa)
    pub elastic_modulus_mpa: f64,
    /// Yield or allowable bending stress (MPa)
    pub allowable_stress_mpa: f64,
    /// Mass density (kg/m³), used only for self-weight
    #[serde(default)]
    pub density_kg_m3: f64,
}

impl Material {
    /// Create a material from E and allowable stress (no density)
    pub fn new(elastic_modulus_mpa: f64, allowable_stress_mpa: f64) -> Self {
        Material {
            elastic_modulus_mpa,
            allowable_stress_mpa,
            density_kg_m3: 0.0,
        }
    }

    /// Set density and return self (builder pattern)
    pub fn with_density(mut self, density_kg_m3: f64) -> Self {
        self.density_kg_m3 = density_kg_m3;
        self
    }

    /// Nominal structural steel: E = 200 GPa, fy = 250 MPa
    pub fn structural_steel() -> Self {
        MaterialPreset::Steel.material()
    }

    /// Structural steel in place of a material the caller left out
    pub fn fallback() -> Self {
        warn!("no material given, using structural steel (E = 200000 MPa, fy = 250 MPa)");
        Material::structural_steel()
    }

    /// Validate that E and allowable stress are usable
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("material.elastic_modulus", self.elastic_modulus_mpa)?;
        require_positive("material.allowable_stress", self.allowable_stress_mpa)?;
        require_finite("material.density", self.density_kg_m3)?;
        if self.density_kg_m3 < 0.0 {
            return Err(CalcError::invalid_input(
                "material.density",
                self.density_kg_m3.to_string(),
                "Density cannot be negative",
            ));
        }
        Ok(())
    }
}

/// Named material presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialPreset {
    /// Mild structural steel
    #[serde(alias = "structural_steel")]
    Steel,
    /// 6061-T6 aluminum alloy
    #[serde(alias = "aluminium")]
    Aluminum,
    /// Softwood structural timber (C24)
    #[serde(alias = "wood")]
    Timber,
    /// Normal-weight concrete (uncracked, working stress)
    Concrete,
}

impl MaterialPreset {
    /// All presets for UI selection
    pub const ALL: [MaterialPreset; 4] = [
        MaterialPreset::Steel,
        MaterialPreset::Aluminum,
        MaterialPreset::Timber,
        MaterialPreset::Concrete,
    ];

    /// Properties for this preset
    pub fn material(&self) -> Material {
        match self {
            MaterialPreset::Steel => Material::new(200_000.0, 250.0).with_density(7850.0),
            MaterialPreset::Aluminum => Material::new(69_000.0, 240.0).with_density(2700.0),
            MaterialPreset::Timber => Material::new(11_000.0, 24.0).with_density(500.0),
            MaterialPreset::Concrete => Material::new(30_000.0, 20.0).with_density(2400.0),
        }
    }

    /// Get display name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            MaterialPreset::Steel => "Structural Steel",
            MaterialPreset::Aluminum => "Aluminum 6061-T6",
            MaterialPreset::Timber => "Timber C24",
            MaterialPreset::Concrete => "Concrete",
        }
    }
}

/// Partially-specified material as supplied by a caller
///
/// Every field is optional. A preset (default: steel) supplies the base values
/// and any explicit field overrides it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialSpec {
    /// Base preset
    #[serde(default)]
    pub preset: Option<MaterialPreset>,
    /// Modulus of elasticity E (MPa)
    #[serde(default, alias = "E", alias = "e")]
    pub elastic_modulus: Option<f64>,
    /// Yield or allowable stress (MPa)
    #[serde(default, alias = "fy", alias = "yield_stress")]
    pub allowable_stress: Option<f64>,
    /// Density (kg/m³)
    #[serde(default)]
    pub density: Option<f64>,
}

impl MaterialSpec {
    /// Resolve to concrete properties and validate them
    pub fn resolve(&self) -> CalcResult<Material> {
        let base = self.preset.unwrap_or(MaterialPreset::Steel).material();
        let material = Material {
            elastic_modulus_mpa: self.elastic_modulus.unwrap_or(base.elastic_modulus_mpa),
            allowable_stress_mpa: self.allowable_stress.unwrap_or(base.allowable_stress_mpa),
            density_kg_m3: self.density.unwrap_or(base.density_kg_m3),
        };
        material.validate()?;
        Ok(material)
    }
}
