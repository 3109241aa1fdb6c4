//! # Tool Surface
//!
//! A single callable operation for agent runtimes: a JSON parameter object in,
//! a JSON document plus a human-readable summary out.
//!
//! ## Parameters
//!
//! ```json
//! {
//!   "beam_type": "simply_supported",
//!   "span": 10.0,
//!   "loads": [{ "type": "point", "magnitude": 10.0, "position": 5.0 }],
//!   "section": { "type": "rectangular", "width": 200.0, "depth": 400.0 },
//!   "material": { "preset": "steel" },
//!   "station_count": 100
//! }
//! ```
//!
//! `output_path` is accepted and echoed back for a diagram renderer; nothing is
//! written by this crate.

use log::debug;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::calculations::{analyze, check_span, Beam, SupportType, DEFAULT_STATIONS};
use crate::errors::{CalcError, CalcResult};
use crate::loads::{normalize_loads, RawLoad};
use crate::materials::{Material, MaterialSpec};
use crate::report;
use crate::sections::Section;

/// Tool identifier
pub const TOOL_NAME: &str = "beam_analysis";

/// Tool description shown to the agent
pub const TOOL_DESCRIPTION: &str = "Analyze a single-span beam (simply supported, cantilever, \
     fixed-fixed or propped cantilever): support reactions, shear and moment diagrams, \
     deflection, and stress/deflection checks. Units: m, kN, kN/m, kN·m for geometry and \
     loads; mm for sections; MPa for E and allowable stress.";

static PARAMETER_SCHEMA: Lazy<Value> = Lazy::new(|| {
    json!({
        "type": "object",
        "required": ["beam_type", "span", "section"],
        "properties": {
            "beam_type": {
                "type": "string",
                "enum": SupportType::ALL.iter().map(SupportType::tag).collect::<Vec<_>>(),
                "description": "Support configuration"
            },
            "span": {
                "type": "number",
                "exclusiveMinimum": 0,
                "description": "Span length (m)"
            },
            "loads": {
                "type": "array",
                "description": "Loads; forces positive downward, couples positive clockwise",
                "items": {
                    "type": "object",
                    "required": ["type", "magnitude"],
                    "properties": {
                        "type": { "type": "string", "enum": ["point", "distributed", "moment"] },
                        "magnitude": { "type": "number", "description": "kN, kN/m or kN·m" },
                        "position": {
                            "type": "number",
                            "description": "Point load or couple position (m)"
                        },
                        "start": {
                            "type": "number",
                            "description": "Distributed load start (m), default 0"
                        },
                        "end": {
                            "type": "number",
                            "description": "Distributed load end (m), default span"
                        }
                    }
                }
            },
            "section": {
                "type": "object",
                "required": ["type"],
                "description": "Cross-section, dimensions in mm",
                "properties": {
                    "type": {
                        "type": "string",
                        "enum": ["rectangular", "circular", "i_section", "custom"]
                    },
                    "width": { "type": "number" },
                    "depth": { "type": "number" },
                    "diameter": { "type": "number" },
                    "flange_width": { "type": "number" },
                    "flange_thickness": { "type": "number" },
                    "web_thickness": { "type": "number" },
                    "moment_of_inertia": { "type": "number", "description": "mm⁴" },
                    "section_modulus": { "type": "number", "description": "mm³" },
                    "area": { "type": "number", "description": "mm²" }
                }
            },
            "material": {
                "type": "object",
                "description": "Defaults to structural steel (E = 200000 MPa, fy = 250 MPa)",
                "properties": {
                    "preset": {
                        "type": "string",
                        "enum": ["steel", "aluminum", "timber", "concrete"]
                    },
                    "elastic_modulus": { "type": "number", "description": "MPa" },
                    "allowable_stress": { "type": "number", "description": "MPa" },
                    "density": { "type": "number", "description": "kg/m³" }
                }
            },
            "station_count": {
                "type": "integer",
                "minimum": 10,
                "maximum": 1000,
                "default": DEFAULT_STATIONS,
                "description": "Equal intervals along the span; intervals + 1 stations are sampled"
            },
            "include_self_weight": { "type": "boolean", "default": false },
            "label": { "type": "string" },
            "output_path": {
                "type": "string",
                "description": "Where a renderer may write the diagram"
            }
        }
    })
});

/// JSON schema of the parameter object
pub fn parameter_schema() -> &'static Value {
    &PARAMETER_SCHEMA
}

/// Parameters as they arrive from the caller
#[derive(Debug, Default, Deserialize)]
struct ToolParams {
    #[serde(default, alias = "support_type")]
    beam_type: Option<String>,
    #[serde(default, alias = "span_m")]
    span: Option<f64>,
    #[serde(default)]
    loads: Vec<RawLoad>,
    #[serde(default)]
    section: Option<Value>,
    #[serde(default)]
    material: Option<MaterialSpec>,
    #[serde(default)]
    station_count: Option<usize>,
    #[serde(default)]
    include_self_weight: bool,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    output_path: Option<String>,
}

/// Successful tool output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResponse {
    /// The analyzed beam and its result
    pub data: Value,
    /// Human-readable text summary
    pub summary: String,
    /// Diagram path echoed from the parameters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_path: Option<String>,
}

/// Build a validated [`Beam`] from a raw parameter object
pub fn beam_from_params(params: &Value) -> CalcResult<Beam> {
    let raw: ToolParams = serde_json::from_value(params.clone())?;
    build_beam(raw)
}

fn build_beam(raw: ToolParams) -> CalcResult<Beam> {
    let support_type: SupportType = raw
        .beam_type
        .as_deref()
        .ok_or_else(|| CalcError::missing_field("beam_type"))?
        .parse()?;

    let span = raw.span.ok_or_else(|| CalcError::missing_field("span"))?;
    check_span(span)?;

    let loads = normalize_loads(&raw.loads, span)?;

    let section_value = raw.section.ok_or_else(|| CalcError::missing_field("section"))?;
    let section: Section = serde_json::from_value(section_value.clone()).map_err(|e| {
        CalcError::invalid_input("section", section_value.to_string(), e.to_string())
    })?;

    let material = match raw.material {
        Some(spec) => spec.resolve()?,
        None => Material::fallback(),
    };

    let beam = Beam {
        label: raw.label.unwrap_or_default(),
        support_type,
        span_m: span,
        loads,
        section,
        material,
        station_count: raw.station_count.unwrap_or(DEFAULT_STATIONS),
        include_self_weight: raw.include_self_weight,
    };
    beam.validate()?;
    Ok(beam)
}

/// Run the analysis for a raw parameter object
///
/// # Returns
///
/// * `Ok(ToolResponse)` - `{ "beam": ..., "result": ... }` plus the text summary
/// * `Err(CalcError)` - Structured error; nothing is partially computed
pub fn execute(params: &Value) -> CalcResult<ToolResponse> {
    let mut raw: ToolParams = serde_json::from_value(params.clone())?;
    let output_path = raw.output_path.take();

    let beam = build_beam(raw)?;
    debug!("{}: {} with {} loads", TOOL_NAME, beam.support_type.tag(), beam.loads.len());

    let result = analyze(&beam)?;
    let summary = report::summary(&beam, &result);

    let data = json!({
        "beam": serde_json::to_value(&beam)?,
        "result": serde_json::to_value(&result)?,
    });

    Ok(ToolResponse {
        data,
        summary,
        output_path,
    })
}
