//! # Text Report
//!
//! Fixed-layout plain-text summary of an analysis, for terminals and for the
//! human-readable half of a tool response.

use crate::calculations::{AnalysisResult, Beam};
use crate::loads::Load;

const RULE: &str = "═══════════════════════════════════════";

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}

fn determinacy(degree: u8) -> String {
    match degree {
        0 => "statically determinate".to_string(),
        n => format!("indeterminate to degree {}", n),
    }
}

/// Render the summary block for a beam and its result
pub fn summary(beam: &Beam, result: &AnalysisResult) -> String {
    let support = beam.support_type;
    let r = &result.reactions;
    let c = &result.checks;
    let mut lines = Vec::new();

    lines.push(RULE.to_string());
    if beam.label.is_empty() {
        lines.push("  BEAM ANALYSIS RESULTS".to_string());
    } else {
        lines.push(format!("  BEAM ANALYSIS RESULTS - {}", beam.label));
    }
    lines.push(RULE.to_string());
    lines.push(String::new());

    lines.push("Input:".to_string());
    lines.push(format!(
        "  Support:  {} ({})",
        support.display_name(),
        determinacy(support.degree_of_indeterminacy())
    ));
    lines.push(format!("  Span:     {:.3} m", beam.span_m));
    lines.push(format!("  Section:  {}", beam.section.display_name()));
    lines.push(format!(
        "  Material: E = {:.0} MPa, allowable = {:.1} MPa",
        beam.material.elastic_modulus_mpa, beam.material.allowable_stress_mpa
    ));
    lines.push(format!("  Loads:    {}", beam.loads.len()));
    lines.extend(beam.loads.iter().map(|load| format!("    - {}", describe_load(load))));
    if result.self_weight_kn_m > 0.0 {
        lines.push(format!("    - Self-weight {:.3} kN/m (full span)", result.self_weight_kn_m));
    }
    lines.push(format!("  Total:    {:.3} kN", result.total_load_kn));
    lines.push(String::new());

    lines.push("Section Properties:".to_string());
    lines.push(format!("  I = {:.4e} mm⁴", result.section.moment_of_inertia_mm4));
    lines.push(format!("  S = {:.4e} mm³", result.section.section_modulus_mm3));
    lines.push(format!("  A = {:.1} mm²", result.section.area_mm2));
    lines.push(String::new());

    lines.push("Reactions:".to_string());
    lines.push(format!("  R_left  = {:.3} kN", r.left_force_kn));
    if support.fixed_left() {
        lines.push(format!("  M_left  = {:.3} kN·m", r.left_moment_knm));
    }
    if support.supported_right() {
        lines.push(format!("  R_right = {:.3} kN", r.right_force_kn));
    }
    if support.fixed_right() {
        lines.push(format!("  M_right = {:.3} kN·m", r.right_moment_knm));
    }
    lines.push(String::new());

    lines.push("Demand:".to_string());
    lines.push(format!(
        "  V_max = {:.3} kN at {:.3} m",
        result.max_shear.value, result.max_shear.position_m
    ));
    lines.push(format!(
        "  M_max = {:.3} kN·m at {:.3} m",
        result.max_moment.value, result.max_moment.position_m
    ));
    lines.push(format!(
        "  δ_max = {:.3} mm at {:.3} m",
        result.max_deflection.value, result.max_deflection.position_m
    ));
    lines.push(String::new());

    lines.push("Checks:".to_string());
    lines.push(format!(
        "  Stress:     {:.2} ({:.1}/{:.1} MPa) {}",
        c.stress_ratio,
        c.max_stress_mpa,
        c.allowable_stress_mpa,
        status_icon(c.stress_ratio <= 1.0)
    ));
    lines.push(format!(
        "  Deflection: {:.2} ({:.2}/{:.2} mm, L/360) {}",
        c.deflection_ratio,
        c.max_deflection_mm,
        c.deflection_limit_mm,
        status_icon(c.deflection_ratio <= 1.0)
    ));
    lines.push(String::new());

    lines.push(RULE.to_string());
    lines.push(format!("  RESULT: {} (governs: {})", result.status(), result.governing_check()));
    lines.push(RULE.to_string());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn describe_load(load: &Load) -> String {
    match *load {
        Load::Point { magnitude, position } => {
            format!("Point {:.3} kN at {:.3} m", magnitude, position)
        }
        Load::Distributed { magnitude, start, end } => {
            format!("Distributed {:.3} kN/m from {:.3} to {:.3} m", magnitude, start, end)
        }
        Load::Moment { magnitude, position } => {
            format!("Moment {:.3} kN·m at {:.3} m", magnitude, position)
        }
    }
}
