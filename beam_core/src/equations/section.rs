//! # Cross-Section Property Formulas
//!
//! Formulas for calculating geometric properties of structural cross-sections.
//! These properties are used in stress and deflection calculations.
//!
//! ## Notation
//!
//! - `A` = Cross-sectional area
//! - `I` = Moment of inertia (second moment of area) about the strong axis
//! - `S` = Elastic section modulus (I/c, where c = distance to extreme fiber)
//! - `r` = Radius of gyration (√(I/A))
//!
//! All functions are unit-agnostic; the engine feeds them millimetres.
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Appendix A
//! - AISC Steel Construction Manual, Part 1: Dimensions and Properties

use std::f64::consts::PI;

// =============================================================================
// RECTANGULAR SECTION
// =============================================================================

/// Cross-sectional area of a solid rectangle
///
/// ```text
///     ┌─────────┐
///     │         │
///   d │         │
///     │         │
///     └─────────┘
///          b
/// ```
///
/// # Formula
/// A = b × d
///
/// # Example
/// ```rust
/// use beam_core::equations::section::rectangular_area;
///
/// let area = rectangular_area(100.0, 200.0);
/// assert!((area - 20_000.0).abs() < 1e-9);
/// ```
#[inline]
pub fn rectangular_area(b: f64, d: f64) -> f64 {
    b * d
}

/// Moment of inertia of a solid rectangle about its centroidal strong axis
///
/// # Formula
/// I = bd³/12
///
/// # Example
/// ```rust
/// use beam_core::equations::section::rectangular_moment_of_inertia;
///
/// // 100 x 200 mm: I = 100 × 200³ / 12 = 66.67 × 10⁶ mm⁴
/// let i = rectangular_moment_of_inertia(100.0, 200.0);
/// assert!((i - 66_666_666.67).abs() < 1.0);
/// ```
#[inline]
pub fn rectangular_moment_of_inertia(b: f64, d: f64) -> f64 {
    b * d.powi(3) / 12.0
}

/// Elastic section modulus of a solid rectangle
///
/// # Formula
/// S = I/c = bd³/12 ÷ d/2 = bd²/6
#[inline]
pub fn rectangular_section_modulus(b: f64, d: f64) -> f64 {
    b * d.powi(2) / 6.0
}

// =============================================================================
// CIRCULAR SECTION
// =============================================================================

/// Cross-sectional area of a solid circle
///
/// # Formula
/// A = πd²/4
#[inline]
pub fn circular_area(d: f64) -> f64 {
    PI * d.powi(2) / 4.0
}

/// Moment of inertia of a solid circle about a diameter
///
/// # Formula
/// I = πd⁴/64
#[inline]
pub fn circular_moment_of_inertia(d: f64) -> f64 {
    PI * d.powi(4) / 64.0
}

/// Elastic section modulus of a solid circle
///
/// # Formula
/// S = I/(d/2) = πd³/32
#[inline]
pub fn circular_section_modulus(d: f64) -> f64 {
    PI * d.powi(3) / 32.0
}

// =============================================================================
// DOUBLY-SYMMETRIC I-SECTION
// Treated as the outer rectangle minus the two voids beside the web
// =============================================================================

/// Clear web height between flanges
#[inline]
fn web_height(h: f64, tf: f64) -> f64 {
    h - 2.0 * tf
}

/// Cross-sectional area of an I-section
///
/// ```text
///     ┌───────────┐  ┬ tf
///     └───┐   ┌───┘  ┴
///         │tw │       hw = H - 2tf
///     ┌───┘   └───┐
///     └───────────┘
///           B
/// ```
///
/// # Formula
/// A = B·H − (B − tw)·hw
#[inline]
pub fn i_section_area(h: f64, b: f64, tf: f64, tw: f64) -> f64 {
    b * h - (b - tw) * web_height(h, tf)
}

/// Strong-axis moment of inertia of an I-section (fillets ignored)
///
/// # Formula
/// I = (B·H³ − (B − tw)·hw³)/12
///
/// # Example
/// ```rust
/// use beam_core::equations::section::i_section_moment_of_inertia;
///
/// // With tw = B the section is a solid rectangle
/// let i = i_section_moment_of_inertia(300.0, 150.0, 10.0, 150.0);
/// assert!((i - 150.0 * 300.0_f64.powi(3) / 12.0).abs() < 1e-3);
/// ```
#[inline]
pub fn i_section_moment_of_inertia(h: f64, b: f64, tf: f64, tw: f64) -> f64 {
    (b * h.powi(3) - (b - tw) * web_height(h, tf).powi(3)) / 12.0
}

/// Strong-axis elastic section modulus of an I-section
///
/// # Formula
/// S = 2I/H
#[inline]
pub fn i_section_modulus(h: f64, b: f64, tf: f64, tw: f64) -> f64 {
    2.0 * i_section_moment_of_inertia(h, b, tf, tw) / h
}

// =============================================================================
// GENERAL
// =============================================================================

/// Radius of gyration r = √(I/A)
#[inline]
pub fn radius_of_gyration(i: f64, a: f64) -> f64 {
    (i / a).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rectangular_properties() {
        // 100 x 200 mm
        assert_relative_eq!(rectangular_area(100.0, 200.0), 20_000.0);
        assert_relative_eq!(
            rectangular_moment_of_inertia(100.0, 200.0),
            66_666_666.666_666_7,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            rectangular_section_modulus(100.0, 200.0),
            666_666.666_666_7,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_circular_properties() {
        // 100 mm bar
        let d = 100.0;
        assert_relative_eq!(circular_area(d), 7853.981_633_974_483, max_relative = 1e-12);
        let (i, s) = (circular_moment_of_inertia(d), circular_section_modulus(d));
        assert_relative_eq!(i, 4_908_738.521_234_052, max_relative = 1e-12);
        assert_relative_eq!(s, 98_174.770_424_681_04, max_relative = 1e-12);
    }

    #[test]
    fn test_i_section_properties() {
        // H = 300, B = 150, tf = 10, tw = 6  → hw = 280
        let a = i_section_area(300.0, 150.0, 10.0, 6.0);
        assert_relative_eq!(a, 150.0 * 300.0 - 144.0 * 280.0);

        let i = i_section_moment_of_inertia(300.0, 150.0, 10.0, 6.0);
        let expected = (150.0 * 300.0_f64.powi(3) - 144.0 * 280.0_f64.powi(3)) / 12.0;
        assert_relative_eq!(i, expected, max_relative = 1e-12);

        let s = i_section_modulus(300.0, 150.0, 10.0, 6.0);
        assert_relative_eq!(s, 2.0 * expected / 300.0, max_relative = 1e-12);
    }

    #[test]
    fn test_radius_of_gyration() {
        // Rectangle: r = d/√12
        let i = rectangular_moment_of_inertia(100.0, 200.0);
        let a = rectangular_area(100.0, 200.0);
        let r = radius_of_gyration(i, a);
        assert_relative_eq!(r, 200.0 / 12.0_f64.sqrt(), max_relative = 1e-12);
    }
}
