//! # Beam Formulas
//!
//! Fixed-end moments for a prismatic beam fixed at both ends, plus the
//! Macaulay bracket used by the internal force sampler.
//!
//! ## Notation
//!
//! - `L` = Span length
//! - `a` = Load position from left support, `b = L - a`
//! - `P` = Point load magnitude (positive downward)
//! - `w` = Uniform load intensity (positive downward)
//! - `M0` = Applied couple (positive clockwise)
//! - `Ma`, `Mb` = Internal moment at the left and right fixed supports
//!
//! Fixed-end moments are returned as internal moments (sagging positive),
//! so gravity loads produce negative (hogging) values at both ends.
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table 8.1, Case 1d/2d/3d

/// Macaulay bracket ⟨x − a⟩ⁿ
///
/// Zero for `x < a`; otherwise `(x − a)ⁿ`, with ⟨x − a⟩⁰ = 1 once the
/// section has reached the load.
///
/// # Example
/// ```rust
/// use beam_core::equations::beam::macaulay;
///
/// assert_eq!(macaulay(1.0, 2.0, 1), 0.0);
/// assert_eq!(macaulay(3.0, 2.0, 0), 1.0);
/// assert_eq!(macaulay(5.0, 2.0, 2), 9.0);
/// ```
#[inline]
pub fn macaulay(x: f64, a: f64, n: i32) -> f64 {
    if x < a {
        0.0
    } else if n == 0 {
        1.0
    } else {
        (x - a).powi(n)
    }
}

/// Fixed-end moments for a point load P at distance a from the left support
///
/// ```text
///            P
///            ↓
///    ▣───────┬──────────▣
///        a   │    b
///    ←──────── L ──────→
/// ```
///
/// # Formulas
/// - Ma = −P·a·b²/L²
/// - Mb = −P·a²·b/L²
#[inline]
pub fn fem_point_load(p: f64, a: f64, l: f64) -> (f64, f64) {
    let b = l - a;
    let ma = -p * a * b * b / (l * l);
    let mb = -p * a * a * b / (l * l);
    (ma, mb)
}

/// Fixed-end moments for a uniform load w over the full span
///
/// # Formulas
/// - Ma = Mb = −wL²/12
#[inline]
pub fn fem_uniform_full(w: f64, l: f64) -> (f64, f64) {
    let m = -w * l * l / 12.0;
    (m, m)
}

/// Fixed-end moments for a uniform load w between `start` and `end`
///
/// The loaded length is split into `segments` equal strips, each replaced by a
/// point load `w·Δ` at its midpoint and summed through [`fem_point_load`].
/// This is a numerical approximation of the closed-form integral; with 100
/// segments the error is well below 0.01% of the end moment.
pub fn fem_partial_uniform(w: f64, start: f64, end: f64, l: f64, segments: usize) -> (f64, f64) {
    let segments = segments.max(1);
    let strip = (end - start) / segments as f64;
    let strip_load = w * strip;

    (0..segments).fold((0.0, 0.0), |(ma, mb), k| {
        let a = start + (k as f64 + 0.5) * strip;
        let (dma, dmb) = fem_point_load(strip_load, a, l);
        (ma + dma, mb + dmb)
    })
}

/// Fixed-end moments for a clockwise couple M0 at distance a from the left support
///
/// # Formulas
/// - Ma = M0·b·(2a − b)/L²
/// - Mb = −M0·a·(2b − a)/L²
#[inline]
pub fn fem_applied_moment(m0: f64, a: f64, l: f64) -> (f64, f64) {
    let b = l - a;
    let ma = m0 * b * (2.0 * a - b) / (l * l);
    let mb = -m0 * a * (2.0 * b - a) / (l * l);
    (ma, mb)
}

// =============================================================================
// UNIT TESTS
// =============================================================================
