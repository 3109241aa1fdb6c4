//! # Single-Span Beam Analysis
//!
//! The [`Beam`] aggregate and the [`analyze`] pipeline:
//!
//! 1. Validate the beam (span, stations, loads, section, material)
//! 2. Compute section properties once
//! 3. Append self-weight if requested
//! 4. Dispatch to the equilibrium strategy for the support type
//! 5. Sample shear and moment at N + 1 stations (N equal intervals)
//! 6. Integrate slope and deflection with the matching boundary conditions
//! 7. Scan extrema and run the code checks
//!
//! ## Example
//!
//! ```rust
//! use beam_core::calculations::beam::{analyze, Beam};
//! use beam_core::calculations::SupportType;
//! use beam_core::loads::Load;
//! use beam_core::sections::Section;
//!
//! let beam = Beam::new(SupportType::SimplySupported, 10.0, Section::rectangular(200.0, 400.0))
//!     .with_load(Load::point(10.0, 5.0));
//!
//! let result = analyze(&beam).expect("valid beam");
//! assert!((result.reactions.left_force_kn - 5.0).abs() < 1e-9);
//! assert!((result.max_moment.value - 25.0).abs() < 1e-9);
//! assert!(result.passes());
//! ```

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::checks::{check_member, CheckStatus, CodeCheck};
use super::deflection::apply_deflection;
use super::equilibrium::{solve_reactions, Flexure, ReactionSet, SupportType};
use super::internal_forces::{sample_internal_forces, StationSample};
use crate::errors::{require_finite, CalcError, CalcResult};
use crate::loads::{total_vertical_force, Load};
use crate::materials::Material;
use crate::sections::{Section, SectionProperties};
use crate::units::KilonewtonsPerMeter;

/// Default number of station intervals along the span (a station every L/100)
pub const DEFAULT_STATIONS: usize = 100;

/// Fewest station intervals accepted
pub const MIN_STATIONS: usize = 10;

/// Most station intervals accepted
pub const MAX_STATIONS: usize = 1000;

fn default_station_count() -> usize {
    DEFAULT_STATIONS
}

/// Reject non-finite and non-positive spans
pub fn check_span(span_m: f64) -> CalcResult<()> {
    require_finite("span", span_m)?;
    if span_m <= 0.0 {
        return Err(CalcError::invalid_input("span", span_m.to_string(), "Span must be positive"));
    }
    Ok(())
}

/// Input for a single-span beam analysis
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "B-1",
///   "support_type": "propped_cantilever",
///   "span_m": 6.0,
///   "loads": [
///     { "type": "distributed", "magnitude": 5.0, "start": 0.0, "end": 6.0 },
///     { "type": "point", "magnitude": 12.0, "position": 2.0 }
///   ],
///   "section": { "type": "i_section", "depth": 300.0, "flange_width": 150.0,
///                "flange_thickness": 10.7, "web_thickness": 7.1 },
///   "material": { "elastic_modulus_mpa": 200000.0, "allowable_stress_mpa": 250.0,
///                 "density_kg_m3": 7850.0 },
///   "station_count": 100,
///   "include_self_weight": false
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beam {
    /// User-defined label (e.g., "B-1", "Lintel over door")
    #[serde(default)]
    pub label: String,

    /// Support configuration
    pub support_type: SupportType,

    /// Span length (m)
    pub span_m: f64,

    /// Applied loads, in input order
    #[serde(default)]
    pub loads: Vec<Load>,

    /// Cross-section
    pub section: Section,

    /// Material; structural steel when omitted
    #[serde(default = "Material::fallback")]
    pub material: Material,

    /// Number of equal station intervals, 10 to 1000; one more station than
    /// intervals is sampled
    #[serde(default = "default_station_count")]
    pub station_count: usize,

    /// Add the member's own weight as a full-span distributed load
    #[serde(default)]
    pub include_self_weight: bool,
}

impl Beam {
    /// Create an unloaded beam with default resolution
    ///
    /// The material starts as structural steel; set another with
    /// [`Beam::with_material`].
    pub fn new(support_type: SupportType, span_m: f64, section: Section) -> Self {
        Beam {
            label: String::new(),
            support_type,
            span_m,
            loads: Vec::new(),
            section,
            material: Material::structural_steel(),
            station_count: DEFAULT_STATIONS,
            include_self_weight: false,
        }
    }

    /// Set label and return self (builder pattern)
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Add a load and return self (builder pattern)
    pub fn with_load(mut self, load: Load) -> Self {
        self.loads.push(load);
        self
    }

    /// Replace all loads and return self (builder pattern)
    pub fn with_loads(mut self, loads: Vec<Load>) -> Self {
        self.loads = loads;
        self
    }

    /// Set material and return self (builder pattern)
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    /// Set the number of station intervals and return self (builder pattern)
    pub fn with_stations(mut self, station_count: usize) -> Self {
        self.station_count = station_count;
        self
    }

    /// Enable or disable self-weight and return self (builder pattern)
    pub fn with_self_weight(mut self, include: bool) -> Self {
        self.include_self_weight = include;
        self
    }

    /// Validate every input before any solver runs
    pub fn validate(&self) -> CalcResult<()> {
        check_span(self.span_m)?;

        if !(MIN_STATIONS..=MAX_STATIONS).contains(&self.station_count) {
            return Err(CalcError::invalid_input(
                "station_count",
                self.station_count.to_string(),
                format!("Station count must be between {} and {}", MIN_STATIONS, MAX_STATIONS),
            ));
        }

        for (i, load) in self.loads.iter().enumerate() {
            load.validate(self.span_m, i)?;
        }

        self.section.validate()?;
        self.material.validate()?;

        if self.include_self_weight && self.material.density_kg_m3 <= 0.0 {
            return Err(CalcError::invalid_input(
                "material.density",
                self.material.density_kg_m3.to_string(),
                "Self-weight requires a positive material density",
            ));
        }

        Ok(())
    }

    /// Self-weight line load (kN/m), zero unless enabled
    pub fn self_weight_kn_m(&self, section: &SectionProperties) -> f64 {
        if self.include_self_weight {
            KilonewtonsPerMeter::from_self_weight(section.area_mm2, self.material.density_kg_m3)
                .value()
        } else {
            0.0
        }
    }

    /// Loads actually analyzed: the applied loads plus self-weight, if any
    pub fn design_loads(&self, self_weight_kn_m: f64) -> Vec<Load> {
        let mut loads = self.loads.clone();
        if self_weight_kn_m > 0.0 {
            warn!(
                "adding self-weight {:.4} kN/m over the full {} m span",
                self_weight_kn_m, self.span_m
            );
            loads.push(Load::distributed(self_weight_kn_m, 0.0, self.span_m));
        }
        loads
    }
}

/// Signed peak value and where it occurs
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Extremum {
    /// Signed value with the largest magnitude
    pub value: f64,
    /// Position along the span (m)
    pub position_m: f64,
}

impl Extremum {
    /// Scan stations for the largest |value|; the first occurrence wins ties
    pub fn scan(stations: &[StationSample], value: impl Fn(&StationSample) -> f64) -> Self {
        stations.iter().fold(Extremum::default(), |best, s| {
            let v = value(s);
            if v.abs() > best.value.abs() {
                Extremum {
                    value: v,
                    position_m: s.position_m,
                }
            } else {
                best
            }
        })
    }
}

/// Results of a single-span beam analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Support configuration analyzed
    pub support_type: SupportType,

    /// Span (m)
    pub span_m: f64,

    /// Support reactions
    pub reactions: ReactionSet,

    // === Demand ===
    /// Peak shear (kN)
    pub max_shear: Extremum,

    /// Peak bending moment (kN·m)
    pub max_moment: Extremum,

    /// Peak deflection (mm, positive downward)
    pub max_deflection: Extremum,

    // === Section & Stiffness ===
    /// Derived section properties
    pub section: SectionProperties,

    /// EI (N·mm²)
    pub flexural_rigidity_nmm2: f64,

    // === Load Summary ===
    /// Self-weight included in the analysis (kN/m)
    pub self_weight_kn_m: f64,

    /// Total applied vertical load including self-weight (kN, downward)
    pub total_load_kn: f64,

    /// Σ reactions − Σ loads (kN); zero up to rounding
    pub equilibrium_residual_kn: f64,

    // === Checks ===
    /// Stress and deflection checks
    pub checks: CodeCheck,

    /// Ordered station samples for diagrams
    pub stations: Vec<StationSample>,
}

impl AnalysisResult {
    /// Check if both code checks pass
    pub fn passes(&self) -> bool {
        self.checks.passes()
    }

    /// Overall verdict
    pub fn status(&self) -> CheckStatus {
        self.checks.status
    }

    /// Get the governing (highest) ratio
    pub fn governing_ratio(&self) -> f64 {
        self.checks.governing_ratio()
    }

    /// Get a description of what governs the design
    pub fn governing_check(&self) -> &'static str {
        self.checks.governing_check()
    }
}

/// Analyze a single-span beam.
///
/// This is a pure function: identical input gives identical output.
///
/// # Returns
///
/// * `Ok(AnalysisResult)` - Reactions, diagrams, extrema and checks
/// * `Err(CalcError)` - Structured error if inputs are invalid
pub fn analyze(beam: &Beam) -> CalcResult<AnalysisResult> {
    beam.validate()?;

    let section = beam.section.properties()?;
    let flexural_rigidity_nmm2 = beam.material.elastic_modulus_mpa * section.moment_of_inertia_mm4;

    let self_weight_kn_m = beam.self_weight_kn_m(&section);
    let loads = beam.design_loads(self_weight_kn_m);

    let reactions = solve_reactions(
        beam.support_type,
        beam.span_m,
        &loads,
        Flexure {
            flexural_rigidity_nmm2,
            station_count: beam.station_count,
        },
    )?;

    let mut stations = sample_internal_forces(&reactions, &loads, beam.span_m, beam.station_count);
    apply_deflection(
        &mut stations,
        beam.span_m,
        flexural_rigidity_nmm2,
        beam.support_type.deflection_boundary(),
    );

    let max_shear = Extremum::scan(&stations, |s| s.shear_kn);
    let max_moment = Extremum::scan(&stations, |s| s.moment_knm);
    let max_deflection = Extremum::scan(&stations, |s| s.deflection_mm);

    let checks = check_member(
        max_moment.value,
        max_deflection.value,
        beam.span_m,
        &section,
        &beam.material,
    );

    let total_load_kn = total_vertical_force(&loads);
    let equilibrium_residual_kn = reactions.total_force() - total_load_kn;

    debug!(
        "{} analysis: M = {:.3} kN·m at {:.3} m, δ = {:.3} mm at {:.3} m, {}",
        beam.support_type.tag(),
        max_moment.value,
        max_moment.position_m,
        max_deflection.value,
        max_deflection.position_m,
        checks.status
    );

    Ok(AnalysisResult {
        support_type: beam.support_type,
        span_m: beam.span_m,
        reactions,
        max_shear,
        max_moment,
        max_deflection,
        section,
        flexural_rigidity_nmm2,
        self_weight_kn_m,
        total_load_kn,
        equilibrium_residual_kn,
        checks,
        stations,
    })
}
