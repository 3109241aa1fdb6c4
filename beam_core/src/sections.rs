//! # Cross-Sections
//!
//! Section shapes accepted by the beam engine and the derived properties
//! (I, S, A) used downstream. Dimensions are millimetres; properties come out
//! in mm⁴, mm³ and mm².
//!
//! ## JSON Format
//!
//! Sections serialize with a `type` discriminator:
//!
//! ```json
//! { "type": "rectangular", "width": 100.0, "depth": 200.0 }
//! { "type": "circular", "diameter": 60.0 }
//! { "type": "i_section", "depth": 300.0, "flange_width": 150.0,
//!   "flange_thickness": 10.7, "web_thickness": 7.1 }
//! { "type": "custom", "moment_of_inertia": 8.36e7, "section_modulus": 5.57e5, "area": 5380.0 }
//! ```
//!
//! ## Example
//!
//! ```rust
//! use beam_core::sections::Section;
//!
//! let props = Section::rectangular(100.0, 200.0).properties().unwrap();
//! assert!((props.area_mm2 - 20_000.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::section as formulas;
use crate::errors::{require_positive, CalcError, CalcResult};

/// Beam cross-section description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Section {
    /// Solid rectangle
    Rectangular {
        /// Width b (mm)
        width: f64,
        /// Depth d (mm)
        depth: f64,
    },

    /// Solid circle
    Circular {
        /// Diameter (mm)
        diameter: f64,
    },

    /// Doubly-symmetric I-shape
    #[serde(alias = "i_beam", alias = "i_shape")]
    ISection {
        /// Overall depth H (mm)
        depth: f64,
        /// Flange width B (mm)
        flange_width: f64,
        /// Flange thickness tf (mm)
        flange_thickness: f64,
        /// Web thickness tw (mm)
        web_thickness: f64,
    },

    /// Properties supplied directly (catalogue section, built-up member, etc.)
    Custom {
        /// Second moment of area I (mm⁴)
        #[serde(alias = "I", alias = "i")]
        moment_of_inertia: f64,
        /// Elastic section modulus S (mm³)
        #[serde(alias = "S", alias = "s")]
        section_modulus: f64,
        /// Cross-sectional area A (mm²)
        #[serde(alias = "A", alias = "a")]
        area: f64,
    },
}

/// Derived section properties, computed once per analysis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    /// Second moment of area I (mm⁴)
    pub moment_of_inertia_mm4: f64,
    /// Elastic section modulus S (mm³)
    pub section_modulus_mm3: f64,
    /// Cross-sectional area A (mm²)
    pub area_mm2: f64,
    /// Radius of gyration r = √(I/A) (mm)
    pub radius_of_gyration_mm: f64,
    /// Distance from neutral axis to extreme fiber c = I/S (mm)
    pub extreme_fiber_mm: f64,
}

impl SectionProperties {
    fn from_isa(i: f64, s: f64, a: f64) -> Self {
        SectionProperties {
            moment_of_inertia_mm4: i,
            section_modulus_mm3: s,
            area_mm2: a,
            radius_of_gyration_mm: formulas::radius_of_gyration(i, a),
            extreme_fiber_mm: i / s,
        }
    }
}

impl Section {
    /// Create a rectangular section
    pub fn rectangular(width: f64, depth: f64) -> Self {
        Section::Rectangular { width, depth }
    }

    /// Create a circular section
    pub fn circular(diameter: f64) -> Self {
        Section::Circular { diameter }
    }

    /// Create an I-section
    pub fn i_section(
        depth: f64,
        flange_width: f64,
        flange_thickness: f64,
        web_thickness: f64,
    ) -> Self {
        Section::ISection {
            depth,
            flange_width,
            flange_thickness,
            web_thickness,
        }
    }

    /// Create a section from known properties
    pub fn custom(moment_of_inertia: f64, section_modulus: f64, area: f64) -> Self {
        Section::Custom {
            moment_of_inertia,
            section_modulus,
            area,
        }
    }

    /// Short shape name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            Section::Rectangular { .. } => "Rectangular",
            Section::Circular { .. } => "Circular",
            Section::ISection { .. } => "I-Section",
            Section::Custom { .. } => "Custom",
        }
    }

    /// Validate dimensions and geometric consistency
    pub fn validate(&self) -> CalcResult<()> {
        match *self {
            Section::Rectangular { width, depth } => {
                require_positive("section.width", width)?;
                require_positive("section.depth", depth)?;
            }
            Section::Circular { diameter } => {
                require_positive("section.diameter", diameter)?;
            }
            Section::ISection {
                depth,
                flange_width,
                flange_thickness,
                web_thickness,
            } => {
                require_positive("section.depth", depth)?;
                require_positive("section.flange_width", flange_width)?;
                require_positive("section.flange_thickness", flange_thickness)?;
                require_positive("section.web_thickness", web_thickness)?;
                if 2.0 * flange_thickness >= depth {
                    return Err(CalcError::invalid_input(
                        "section.flange_thickness",
                        flange_thickness.to_string(),
                        format!(
                            "Two flanges ({} mm) must be thinner than the overall depth ({} mm)",
                            2.0 * flange_thickness,
                            depth
                        ),
                    ));
                }
                if web_thickness >= flange_width {
                    return Err(CalcError::invalid_input(
                        "section.web_thickness",
                        web_thickness.to_string(),
                        format!("Web must be narrower than the flange width ({} mm)", flange_width),
                    ));
                }
            }
            Section::Custom {
                moment_of_inertia,
                section_modulus,
                area,
            } => {
                require_positive("section.moment_of_inertia", moment_of_inertia)?;
                require_positive("section.section_modulus", section_modulus)?;
                require_positive("section.area", area)?;
            }
        }
        Ok(())
    }

    /// Compute I, S and A (plus r and c) after validating the section
    pub fn properties(&self) -> CalcResult<SectionProperties> {
        self.validate()?;

        let props = match *self {
            Section::Rectangular { width, depth } => SectionProperties::from_isa(
                formulas::rectangular_moment_of_inertia(width, depth),
                formulas::rectangular_section_modulus(width, depth),
                formulas::rectangular_area(width, depth),
            ),
            Section::Circular { diameter } => SectionProperties::from_isa(
                formulas::circular_moment_of_inertia(diameter),
                formulas::circular_section_modulus(diameter),
                formulas::circular_area(diameter),
            ),
            Section::ISection {
                depth,
                flange_width,
                flange_thickness,
                web_thickness,
            } => SectionProperties::from_isa(
                formulas::i_section_moment_of_inertia(
                    depth,
                    flange_width,
                    flange_thickness,
                    web_thickness,
                ),
                formulas::i_section_modulus(depth, flange_width, flange_thickness, web_thickness),
                formulas::i_section_area(depth, flange_width, flange_thickness, web_thickness),
            ),
            Section::Custom {
                moment_of_inertia,
                section_modulus,
                area,
            } => SectionProperties::from_isa(moment_of_inertia, section_modulus, area),
        };

        Ok(props)
    }
}
